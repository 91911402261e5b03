//! Scoped acquisition of the window-level release listener.
//!
//! While a drag is active the pointer may be released anywhere on the page,
//! so the container's own `pointerup` is not enough. The tracker acquires a
//! global listener through [`GlobalRelease::acquire`] when a drag starts and
//! holds the returned [`ReleaseGuard`] until the drag ends. Dropping the
//! guard runs its teardown, so every exit path (release, leave, cancel, or
//! the tracker itself being dropped) deregisters the listener.

#[cfg(test)]
#[path = "release_test.rs"]
mod release_test;

use std::fmt;

/// Teardown handle for an acquired global listener.
///
/// The teardown runs at most once: on [`ReleaseGuard::release`] or on drop,
/// whichever comes first.
#[must_use = "dropping the guard immediately deregisters the listener"]
pub struct ReleaseGuard {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl ReleaseGuard {
    /// Wrap a teardown callback.
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self { teardown: Some(Box::new(teardown)) }
    }

    /// A guard with nothing to tear down (acquisition was not possible).
    pub fn inert() -> Self {
        Self { teardown: None }
    }

    /// Whether the teardown has not run yet.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.teardown.is_some()
    }

    /// Run the teardown now.
    pub fn release(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for ReleaseGuard {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for ReleaseGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleaseGuard").field("armed", &self.is_armed()).finish()
    }
}

/// Source of global release notifications.
///
/// Implementations register whatever listener they need (in the browser:
/// `pointerup`, `pointercancel`, `touchend`, `touchcancel` on `window`) and
/// return a guard that removes it again.
pub trait GlobalRelease {
    fn acquire(&self) -> ReleaseGuard;
}

/// A release source that registers nothing. Used on the server and in tests
/// that do not care about listener bookkeeping.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGlobalRelease;

impl GlobalRelease for NoGlobalRelease {
    fn acquire(&self) -> ReleaseGuard {
        ReleaseGuard::inert()
    }
}
