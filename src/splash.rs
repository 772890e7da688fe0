//! Splash screen component for Bubble Tea applications.
//!
//! Renders a themed, animated startup view for a fixed duration, then hands
//! control over: a completion callback when one is set, otherwise a route
//! change through the host's [`Navigator`], with a layered fallback that
//! assigns a hash-based location reference directly when the router appears
//! not to have taken effect. Every failure along the way is caught at the
//! component boundary, logged, and degraded to the default-route fragment;
//! nothing propagates to the host's update loop.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_splash::splash::Model;
//! use bubbletea_splash::nav::MemoryRouter;
//! use bubbletea_splash::theme::SystemAppearance;
//! use std::sync::Arc;
//!
//! let router = Arc::new(MemoryRouter::new());
//! let splash = Model::new(router.clone(), router, Arc::new(SystemAppearance::new()))
//!     .with_redirect_to("/menu");
//! let cmd = splash.init();
//! // Hand `cmd` to the bubbletea-rs runtime; after the show duration the
//! // splash requests navigation to "menu" and verifies it took effect.
//! ```
//!
//! # Dispatch priority
//!
//! When the show timer expires the component evaluates, in strict order:
//!
//! 1. `on_complete` set: invoke it once; no navigation happens at all.
//! 2. `redirect_to` set: normalize the path, navigate, then verify after
//!    [`FALLBACK_CHECK_DELAY`] that the current route reflects the target,
//!    applying the hash fallback if it does not.
//! 3. Neither: navigate to [`DEFAULT_PATH`].
//!
//! # Cancellation
//!
//! [`Model::cancel`] is the unmount analog: it invalidates the pending clock
//! ticks so a cancelled splash never dispatches. A fallback verification
//! probe that was already scheduled before the cancel is deliberately left
//! live and may still apply fallback navigation; see the note on
//! [`FallbackCheckMsg`].

use crate::nav::{fragment_for, normalize_path, Location, MemoryRouter, NavError, Navigator};
use crate::theme::{resolve_dark, Appearance, SplashStyles, SystemAppearance, DARK, LIGHT};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

// Internal ID management for splash instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// How long the splash stays on screen before dispatching.
pub const SHOW_DURATION: Duration = Duration::from_millis(1500);

/// Delay before verifying that a requested navigation took effect.
pub const FALLBACK_CHECK_DELAY: Duration = Duration::from_millis(300);

/// Route used when neither a callback nor a redirect target is provided.
pub const DEFAULT_PATH: &str = "/home";

/// Fragment applied by the last-resort error fallback.
const HOME_FRAGMENT: &str = "#/home";

/// Clock tick interval driving the entrance animation and the show deadline.
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Number of clock ticks the fade+scale entrance animation spans.
const ENTRANCE_FRAMES: u32 = 12;

/// Completion callback invoked instead of navigating.
pub type OnComplete = Arc<dyn Fn() + Send + Sync>;

/// Lifecycle of the splash dispatch sequence.
///
/// The nested-timer flow is modelled as an explicit state machine so the
/// post-cancel behavior of the verification probe is a visible, testable
/// property instead of an implicit race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Showing; the dispatch timer has not fired yet.
    Idle,
    /// Navigation was requested; awaiting the verification probe.
    Dispatched,
    /// The callback ran, or navigation was confirmed to have taken effect.
    Confirmed,
    /// Direct location fallback was applied.
    FallbackApplied,
    /// Cancelled before the dispatch timer fired.
    Cancelled,
}

/// Message sent on every splash clock tick.
///
/// The clock drives both the entrance animation and the show deadline. Ticks
/// carry the instance ID and a tag; stale ticks (scheduled before a cancel,
/// or superseded by a newer tick) are rejected, which is what makes
/// [`Model::cancel`] effective.
#[derive(Debug, Clone)]
pub struct FrameMsg {
    /// The unique identifier of the splash that scheduled this tick.
    pub id: i64,
    tag: i64,
}

/// Message sent to verify that a requested navigation took effect.
///
/// Deliberately carries no tag: once the dispatch sequence has requested
/// navigation, the verification probe outlives a [`Model::cancel`] and may
/// still apply fallback navigation. This preserves the original behavior of
/// the inner fallback timer surviving unmount.
#[derive(Debug, Clone)]
pub struct FallbackCheckMsg {
    /// The unique identifier of the splash that scheduled this probe.
    pub id: i64,
    path: String,
}

/// Animated splash screen model.
///
/// Owns a single clock, an optional completion callback, an optional redirect
/// target, and the three injected service seams (navigation, location,
/// appearance). See the [module docs](self) for the dispatch contract.
pub struct Model {
    on_complete: Option<OnComplete>,
    redirect_to: Option<String>,
    navigator: Arc<dyn Navigator>,
    location: Arc<dyn Location>,
    appearance: Arc<dyn Appearance>,
    /// Styles used when the resolved appearance is light.
    pub light_styles: SplashStyles,
    /// Styles used when the resolved appearance is dark.
    pub dark_styles: SplashStyles,
    logo: String,
    title: String,
    frame: u32,
    ticks: u32,
    phase: Phase,
    id: i64,
    tag: i64,
}

impl Model {
    /// Creates a splash screen over the given service seams.
    ///
    /// The new model is in [`Phase::Idle`] with the entrance animation at its
    /// first frame. Nothing is scheduled until [`init`](Model::init) is
    /// handed to the runtime.
    pub fn new(
        navigator: Arc<dyn Navigator>,
        location: Arc<dyn Location>,
        appearance: Arc<dyn Appearance>,
    ) -> Self {
        Self {
            on_complete: None,
            redirect_to: None,
            navigator,
            location,
            appearance,
            light_styles: LIGHT.clone(),
            dark_styles: DARK.clone(),
            logo: "✦".to_string(),
            title: "Welcome".to_string(),
            frame: 0,
            ticks: 0,
            phase: Phase::Idle,
            id: next_id(),
            tag: 0,
        }
    }

    /// Sets the completion callback.
    ///
    /// When set, the callback takes strict priority over `redirect_to`: it is
    /// invoked exactly once when the show timer expires and no navigation is
    /// requested.
    pub fn with_on_complete(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_complete = Some(Arc::new(f));
        self
    }

    /// Sets the redirect target path.
    ///
    /// A single leading separator is stripped before the path is handed to
    /// the navigator, so `"/menu"` and `"menu"` are equivalent.
    pub fn with_redirect_to(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = Some(path.into());
        self
    }

    /// Sets the logo glyph shown in the splash container.
    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = logo.into();
        self
    }

    /// Sets the title label shown under the logo.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Returns the unique identifier of this splash instance.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the current dispatch phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(FRAME_INTERVAL, move |_| {
            Box::new(FrameMsg { id, tag }) as Msg
        })
    }

    fn fallback_check(&self, path: String) -> Cmd {
        let id = self.id;
        bubbletea_tick(FALLBACK_CHECK_DELAY, move |_| {
            Box::new(FallbackCheckMsg {
                id,
                path: path.clone(),
            }) as Msg
        })
    }

    /// Starts the splash clock and returns the command for the first tick.
    ///
    /// Call once when the splash is first shown, typically from the host's
    /// `init`.
    pub fn init(&self) -> Cmd {
        self.tick()
    }

    /// Cancels the splash before it dispatches.
    ///
    /// This is the unmount analog: pending clock ticks become stale and are
    /// rejected, so neither the callback nor any navigation will run. A
    /// verification probe that was already scheduled is not suppressed; see
    /// [`FallbackCheckMsg`].
    pub fn cancel(&mut self) {
        self.tag += 1;
        if self.phase == Phase::Idle {
            self.phase = Phase::Cancelled;
        }
    }

    /// Processes messages and advances the splash state.
    ///
    /// Handles [`FrameMsg`] clock ticks (entrance animation plus the show
    /// deadline) and [`FallbackCheckMsg`] verification probes. All other
    /// messages are ignored. Never panics and never lets a service error
    /// escape: failures degrade to the default-route fragment and a log
    /// entry.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(frame_msg) = msg.downcast_ref::<FrameMsg>() {
            // Stale ticks were scheduled before a cancel or superseded by a
            // newer tick; drop them.
            if frame_msg.id != self.id || frame_msg.tag != self.tag {
                return None;
            }
            if self.phase != Phase::Idle {
                return None;
            }

            self.tag += 1;
            self.ticks += 1;
            if self.frame < ENTRANCE_FRAMES {
                self.frame += 1;
            }

            if FRAME_INTERVAL * self.ticks >= SHOW_DURATION {
                return self.dispatch();
            }
            return Some(self.tick());
        }

        if let Some(check) = msg.downcast_ref::<FallbackCheckMsg>() {
            if check.id != self.id || self.phase != Phase::Dispatched {
                return None;
            }
            let path = check.path.clone();
            if let Err(err) = self.verify_or_fallback(&path) {
                self.recover(&err);
            }
            return None;
        }

        None
    }

    /// Runs the priority dispatch sequence inside the catch-all boundary.
    fn dispatch(&mut self) -> Option<Cmd> {
        match self.run_dispatch() {
            Ok(cmd) => cmd,
            Err(err) => {
                self.recover(&err);
                None
            }
        }
    }

    fn run_dispatch(&mut self) -> Result<Option<Cmd>, NavError> {
        if let Some(on_complete) = &self.on_complete {
            tracing::debug!(id = self.id, "splash complete, invoking callback");
            on_complete();
            self.phase = Phase::Confirmed;
            return Ok(None);
        }

        if let Some(target) = &self.redirect_to {
            let path = normalize_path(target).to_string();
            tracing::debug!(id = self.id, path = %path, "splash complete, redirecting");
            self.navigator.navigate(&path)?;
            self.phase = Phase::Dispatched;
            return Ok(Some(self.fallback_check(path)));
        }

        tracing::debug!(id = self.id, path = DEFAULT_PATH, "splash complete, using default route");
        self.navigator.navigate(DEFAULT_PATH)?;
        self.phase = Phase::Confirmed;
        Ok(None)
    }

    fn verify_or_fallback(&mut self, path: &str) -> Result<(), NavError> {
        let current = self.navigator.current_path()?;
        if current.contains(path) {
            self.phase = Phase::Confirmed;
            return Ok(());
        }

        tracing::debug!(
            id = self.id,
            path = %path,
            current = %current,
            "navigation did not take effect, assigning fragment directly"
        );
        self.location.set_fragment(&fragment_for(path))?;
        self.phase = Phase::FallbackApplied;
        Ok(())
    }

    /// Last-resort recovery: point the location at the default route and log.
    fn recover(&mut self, err: &NavError) {
        tracing::error!(id = self.id, error = %err, "splash navigation failed, falling back to default fragment");
        if let Err(fallback_err) = self.location.set_fragment(HOME_FRAGMENT) {
            tracing::error!(id = self.id, error = %fallback_err, "location fallback failed as well");
        }
        self.phase = Phase::FallbackApplied;
    }

    /// Renders the splash container with its entrance animation.
    ///
    /// The dark-mode flag is resolved from the appearance provider on every
    /// render. The first half of the entrance keeps the logo muted and the
    /// title hidden; the container widens as the animation plays out, giving
    /// the fade+scale effect.
    pub fn view(&self) -> String {
        let styles = if resolve_dark(self.appearance.as_ref()) {
            &self.dark_styles
        } else {
            &self.light_styles
        };

        let entering = self.frame < ENTRANCE_FRAMES / 2;
        let logo = if entering {
            styles.muted.render(&self.logo)
        } else {
            styles.logo.render(&self.logo)
        };

        let mut content = logo;
        if !entering {
            let title = if self.frame < ENTRANCE_FRAMES {
                styles.muted.render(&self.title)
            } else {
                styles.title.render(&self.title)
            };
            content.push_str("\n\n");
            content.push_str(&title);
        }

        let grow = (self.frame.min(ENTRANCE_FRAMES) / 3) as i32;
        styles
            .container
            .clone()
            .padding_left(2 + grow)
            .padding_right(2 + grow)
            .render(&content)
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("frame", &self.frame)
            .field("ticks", &self.ticks)
            .field("has_on_complete", &self.on_complete.is_some())
            .field("redirect_to", &self.redirect_to)
            .finish()
    }
}

impl Default for Model {
    /// Standalone splash over an in-memory router and the system appearance
    /// provider.
    fn default() -> Self {
        let router = Arc::new(MemoryRouter::new());
        Model::new(router.clone(), router, Arc::new(SystemAppearance::new()))
    }
}

impl BubbleTeaModel for Model {
    /// Creates a standalone splash over an in-memory router and the system
    /// appearance provider.
    fn init() -> (Self, Option<Cmd>) {
        let router = Arc::new(MemoryRouter::new());
        let model = Model::new(router.clone(), router, Arc::new(SystemAppearance::new()));
        let cmd = model.init();
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
