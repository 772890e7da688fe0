#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-splash/")]

//! # bubbletea-splash
//!
//! An animated splash screen component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! terminal applications.
//!
//! ## Overview
//!
//! The splash screen follows the Elm Architecture pattern used across the
//! bubbletea ecosystem: `init()` schedules its clock, `update()` advances the
//! entrance animation and runs the dispatch sequence when the show timer
//! expires, and `view()` renders a themed container with a logo glyph and a
//! title label.
//!
//! After [`splash::SHOW_DURATION`] the component evaluates, in strict
//! priority order:
//!
//! 1. a completion callback, when one was provided;
//! 2. a redirect target, navigated through the host's [`Navigator`] and
//!    verified after [`splash::FALLBACK_CHECK_DELAY`], with a direct
//!    hash-fragment fallback when the route did not take effect;
//! 3. the default route, [`splash::DEFAULT_PATH`].
//!
//! Service failures never reach the host: the component catches them, logs a
//! diagnostic through `tracing`, and points the location at the default
//! fragment.
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_splash::prelude::*;
//! use std::sync::Arc;
//!
//! let router = Arc::new(MemoryRouter::new());
//! let splash = SplashScreen::new(router.clone(), router, Arc::new(SystemAppearance::new()))
//!     .with_title("Acme")
//!     .with_redirect_to("/menu");
//! let _cmd = splash.init();
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_splash::prelude::*;
//! use bubbletea_rs::{Model, Cmd, Msg};
//! use std::sync::Arc;
//!
//! struct App {
//!     splash: SplashScreen,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let router = Arc::new(MemoryRouter::new());
//!         let splash = SplashScreen::new(
//!             router.clone(),
//!             router,
//!             Arc::new(SystemAppearance::new()),
//!         );
//!         let cmd = splash.init();
//!         (Self { splash }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.splash.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.splash.view()
//!     }
//! }
//! ```
//!
//! ## Theming
//!
//! The dark-mode flag is resolved on every render from an [`Appearance`]
//! provider: an explicit host-set dark marker wins, otherwise the splash is
//! dark only when no theme preference is stored and the system reports a dark
//! appearance. [`SystemAppearance`] is the default provider; hosts with their
//! own config persistence implement the trait themselves.

pub mod nav;
pub mod splash;
pub mod theme;

pub use nav::{fragment_for, normalize_path, Location, MemoryRouter, NavError, Navigator};
pub use splash::{
    FallbackCheckMsg as SplashFallbackCheckMsg, FrameMsg as SplashFrameMsg,
    Model as SplashScreen, OnComplete, Phase as SplashPhase,
};
pub use theme::{
    resolve_dark, Appearance, SplashStyles, SystemAppearance, ThemePreference,
    THEME_PREFERENCE_VAR,
};

/// Prelude module for convenient imports.
///
/// Re-exports the component model, its messages, and the service seams a host
/// needs to wire a splash screen into its application.
///
/// # Usage
///
/// ```rust
/// use bubbletea_splash::prelude::*;
/// ```
pub mod prelude {
    pub use crate::nav::{
        fragment_for, normalize_path, Location, MemoryRouter, NavError, Navigator,
    };
    pub use crate::splash::{
        FallbackCheckMsg as SplashFallbackCheckMsg, FrameMsg as SplashFrameMsg,
        Model as SplashScreen, OnComplete, Phase as SplashPhase,
    };
    pub use crate::theme::{
        resolve_dark, Appearance, SplashStyles, SystemAppearance, ThemePreference,
    };
}
