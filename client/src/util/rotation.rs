//! Cyclic index for timer-driven copy rotation (hero highlight word, voice
//! command samples).

#[cfg(test)]
#[path = "rotation_test.rs"]
mod rotation_test;

/// Interval between rotation steps on the landing page.
pub const ROTATION_INTERVAL_MS: u32 = 2_600;

/// Position within a fixed-length list that wraps around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    len: usize,
}

impl Rotation {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    /// Step forward, wrapping to the start. A zero-length rotation stays put.
    #[must_use]
    pub fn advanced(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + 1) % self.len, ..self }
    }

    /// The current item of `items`, if the list is non-empty.
    #[must_use]
    pub fn pick<T>(self, items: &[T]) -> Option<&T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.index % items.len())
    }
}

/// Advance `rotation` every [`ROTATION_INTERVAL_MS`] until the owning
/// component is cleaned up. No-op outside the browser.
pub fn spawn_rotation(rotation: leptos::prelude::RwSignal<Rotation>) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::{Update, on_cleanup};

        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(ROTATION_INTERVAL_MS).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                rotation.update(|r| *r = r.advanced());
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = rotation;
    }
}
