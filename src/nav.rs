//! Navigation and location services consumed by the splash screen.
//!
//! The splash screen never touches routing state directly. Route changes go
//! through a [`Navigator`], and the layered fallback path writes to a
//! [`Location`] when the router appears not to have taken effect. Both are
//! small trait seams: hosts plug in their real router, tests inject fakes.
//!
//! An in-memory implementation, [`MemoryRouter`], is provided for standalone
//! use and for tests. Its [`MemoryRouter::detached`] constructor simulates a
//! misconfigured router whose navigations are accepted but never applied,
//! which is exactly the situation the fallback path exists for.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_splash::nav::{normalize_path, fragment_for, MemoryRouter, Navigator};
//!
//! let router = MemoryRouter::new();
//! router.navigate(normalize_path("/menu")).unwrap();
//! assert_eq!(router.current_path().unwrap(), "menu");
//! assert_eq!(fragment_for("menu"), "#/menu");
//! ```

use std::sync::Mutex;
use thiserror::Error;

/// Errors raised by navigation and location services.
///
/// These never escape the splash screen: every variant is caught at the
/// component's dispatch boundary and degraded to a direct location fallback.
#[derive(Debug, Error)]
pub enum NavError {
    /// The primary navigation service rejected or failed the request.
    #[error("router error: {message}")]
    Router {
        /// Human-readable description of what the router reported.
        message: String,
    },
    /// A required environment facility cannot be reached.
    #[error("{what} is unavailable")]
    Unavailable {
        /// Name of the missing facility, e.g. `"location"`.
        what: &'static str,
    },
}

/// Primary navigation service.
///
/// Implementations are expected to update the application's current route on
/// [`navigate`](Navigator::navigate) and to report it back through
/// [`current_path`](Navigator::current_path) so the splash screen can verify
/// that a requested navigation actually took effect.
pub trait Navigator: Send + Sync {
    /// Requests a route change to `path`.
    fn navigate(&self, path: &str) -> Result<(), NavError>;

    /// Returns the route the application currently displays.
    fn current_path(&self) -> Result<String, NavError>;
}

/// Direct access to the environment's location fragment.
///
/// This is the splash screen's last-resort mechanism: when the router did not
/// take effect, or failed outright, the component bypasses it and assigns a
/// hash-based reference here.
pub trait Location: Send + Sync {
    /// Overwrites the location's fragment identifier, e.g. `"#/menu"`.
    fn set_fragment(&self, fragment: &str) -> Result<(), NavError>;

    /// Returns the current fragment identifier, empty if none is set.
    fn fragment(&self) -> Result<String, NavError>;
}

/// Strips a single leading separator from a route path.
///
/// Only one separator is removed; `"//x"` keeps its second slash.
///
/// # Examples
///
/// ```rust
/// use bubbletea_splash::nav::normalize_path;
///
/// assert_eq!(normalize_path("/menu"), "menu");
/// assert_eq!(normalize_path("menu"), "menu");
/// assert_eq!(normalize_path("//x"), "/x");
/// ```
pub fn normalize_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Builds the hash-based location reference for a normalized path.
///
/// # Examples
///
/// ```rust
/// use bubbletea_splash::nav::fragment_for;
///
/// assert_eq!(fragment_for("menu"), "#/menu");
/// ```
pub fn fragment_for(path: &str) -> String {
    format!("#/{}", path)
}

#[derive(Debug, Default)]
struct RouterState {
    path: String,
    fragment: String,
    requests: Vec<String>,
}

/// In-memory [`Navigator`] and [`Location`] implementation.
///
/// Backs the splash screen's standalone `Default` model and doubles as the
/// test fake: every `navigate` call is recorded so callers can assert
/// exactly-once semantics via [`requests`](MemoryRouter::requests).
///
/// [`MemoryRouter::new`] applies navigations to the current path.
/// [`MemoryRouter::detached`] records them without applying, simulating a
/// router that silently drops requests.
#[derive(Debug)]
pub struct MemoryRouter {
    apply: bool,
    state: Mutex<RouterState>,
}

impl MemoryRouter {
    /// Creates a router whose navigations take effect immediately.
    pub fn new() -> Self {
        Self {
            apply: true,
            state: Mutex::new(RouterState::default()),
        }
    }

    /// Creates a router that records navigations but never applies them.
    pub fn detached() -> Self {
        Self {
            apply: false,
            state: Mutex::new(RouterState::default()),
        }
    }

    /// Every path passed to `navigate`, in call order.
    pub fn requests(&self) -> Vec<String> {
        self.state
            .lock()
            .map(|state| state.requests.clone())
            .unwrap_or_default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, RouterState>, NavError> {
        self.state.lock().map_err(|_| NavError::Unavailable {
            what: "router state",
        })
    }
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for MemoryRouter {
    fn navigate(&self, path: &str) -> Result<(), NavError> {
        let mut state = self.lock()?;
        state.requests.push(path.to_string());
        if self.apply {
            state.path = path.to_string();
        }
        Ok(())
    }

    fn current_path(&self) -> Result<String, NavError> {
        Ok(self.lock()?.path.clone())
    }
}

impl Location for MemoryRouter {
    fn set_fragment(&self, fragment: &str) -> Result<(), NavError> {
        self.lock()?.fragment = fragment.to_string();
        Ok(())
    }

    fn fragment(&self) -> Result<String, NavError> {
        Ok(self.lock()?.fragment.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_strips_single_separator() {
        assert_eq!(normalize_path("/menu"), "menu");
        assert_eq!(normalize_path("menu"), "menu");
        assert_eq!(normalize_path("//x"), "/x");
        assert_eq!(normalize_path(""), "");
        assert_eq!(normalize_path("/"), "");
    }

    #[test]
    fn test_fragment_for() {
        assert_eq!(fragment_for("menu"), "#/menu");
        assert_eq!(fragment_for("home"), "#/home");
    }

    #[test]
    fn test_memory_router_applies_navigation() {
        let router = MemoryRouter::new();

        router.navigate("menu").unwrap();

        assert_eq!(router.current_path().unwrap(), "menu");
        assert_eq!(router.requests(), vec!["menu".to_string()]);
    }

    #[test]
    fn test_detached_router_records_without_applying() {
        let router = MemoryRouter::detached();

        router.navigate("menu").unwrap();

        assert_eq!(router.current_path().unwrap(), "");
        assert_eq!(router.requests(), vec!["menu".to_string()]);
    }

    #[test]
    fn test_fragment_round_trip() {
        let router = MemoryRouter::new();
        assert_eq!(router.fragment().unwrap(), "");

        router.set_fragment("#/menu").unwrap();
        assert_eq!(router.fragment().unwrap(), "#/menu");
    }

    #[test]
    fn test_error_display() {
        let err = NavError::Router {
            message: "no such route".to_string(),
        };
        assert_eq!(err.to_string(), "router error: no such route");

        let err = NavError::Unavailable { what: "location" };
        assert_eq!(err.to_string(), "location is unavailable");
    }
}
