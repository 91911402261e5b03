//! The drag-position tracker.
//!
//! [`TrackerCore`] is the pure two-state machine: one transition function per
//! event kind, no browser dependencies. [`Tracker`] wraps a core together
//! with a [`GlobalRelease`] source and owns the listener guard for the
//! lifetime of each drag.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_POSITION;
use crate::geometry::{ContainerRect, ContainerSource, clamp_percent};
use crate::input::{DragPhase, SliderEvent, Transition};
use crate::release::{GlobalRelease, ReleaseGuard};

/// Render-facing snapshot of the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    /// Split position in percent of the container width, always in `[0, 100]`.
    pub position: f64,
    /// True between a press and its release.
    pub is_dragging: bool,
    /// Last measured container width in CSS pixels (0 until measured).
    pub container_width: f64,
    /// True while the pointer is over the container.
    pub hovered: bool,
}

impl Default for DragState {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION,
            is_dragging: false,
            container_width: 0.0,
            hovered: false,
        }
    }
}

/// Core tracker state: everything that doesn't touch the browser.
#[derive(Debug, Clone, Default)]
pub struct TrackerCore {
    state: DragState,
    rect: ContainerRect,
    phase: DragPhase,
}

impl TrackerCore {
    /// Create an idle tracker at `initial_percent`.
    ///
    /// Out-of-range values are clamped; a non-finite value falls back to
    /// [`DEFAULT_POSITION`].
    #[must_use]
    pub fn new(initial_percent: f64) -> Self {
        let position = if initial_percent.is_finite() {
            clamp_percent(initial_percent)
        } else {
            DEFAULT_POSITION
        };
        Self {
            state: DragState { position, ..DragState::default() },
            ..Self::default()
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[must_use]
    pub fn position(&self) -> f64 {
        self.state.position
    }

    #[must_use]
    pub fn container(&self) -> ContainerRect {
        self.rect
    }

    // --- Measurement ---

    /// Re-measure the container. Returns the cached width, or 0 when the
    /// source is not mounted (the cache is left untouched in that case).
    pub fn measure(&mut self, source: &impl ContainerSource) -> f64 {
        let Some(bounds) = source.bounds() else {
            return 0.0;
        };
        self.set_container(bounds);
        self.state.container_width
    }

    /// Replace the cached container bounds directly.
    pub fn set_container(&mut self, rect: ContainerRect) {
        self.rect = ContainerRect::new(rect.left, rect.width);
        self.state.container_width = self.rect.width;
    }

    // --- Events ---

    /// Apply one event. Non-finite coordinates are ignored entirely.
    pub fn handle(&mut self, event: SliderEvent) -> Transition {
        if event.client_x().is_some_and(|x| !x.is_finite()) {
            return Transition::default();
        }
        match event {
            SliderEvent::PointerEnter => self.set_hovered(true),
            SliderEvent::PointerDown { client_x } | SliderEvent::TouchStart { client_x } => {
                self.press(client_x)
            }
            SliderEvent::PointerMove { client_x } | SliderEvent::TouchMove { client_x } => {
                self.drag_to(client_x)
            }
            SliderEvent::PointerLeave => {
                let hover = self.set_hovered(false);
                Transition { hover_changed: hover.hover_changed, ..self.release() }
            }
            SliderEvent::PointerUp
            | SliderEvent::PointerCancel
            | SliderEvent::TouchEnd
            | SliderEvent::TouchCancel => self.release(),
            SliderEvent::Nudge(delta) => self.set_position(self.state.position + delta),
            SliderEvent::SetPosition(percent) => self.set_position(percent),
        }
    }

    fn press(&mut self, client_x: f64) -> Transition {
        let entered_drag = self.phase == DragPhase::Idle;
        self.phase = DragPhase::Dragging;
        self.state.is_dragging = true;
        Transition {
            entered_drag,
            position_changed: self.jump_to(client_x),
            ..Transition::default()
        }
    }

    fn drag_to(&mut self, client_x: f64) -> Transition {
        if self.phase == DragPhase::Idle {
            return Transition::default();
        }
        Transition { position_changed: self.jump_to(client_x), ..Transition::default() }
    }

    fn release(&mut self) -> Transition {
        let exited_drag = self.phase == DragPhase::Dragging;
        self.phase = DragPhase::Idle;
        self.state.is_dragging = false;
        Transition { exited_drag, ..Transition::default() }
    }

    fn set_hovered(&mut self, hovered: bool) -> Transition {
        let hover_changed = self.state.hovered != hovered;
        self.state.hovered = hovered;
        Transition { hover_changed, ..Transition::default() }
    }

    fn set_position(&mut self, percent: f64) -> Transition {
        if !percent.is_finite() {
            return Transition::default();
        }
        Transition { position_changed: self.store(clamp_percent(percent)), ..Transition::default() }
    }

    /// Move to the percent under `client_x`; an unmeasured container keeps the
    /// previous position.
    fn jump_to(&mut self, client_x: f64) -> bool {
        match self.rect.percent_at(client_x) {
            Some(percent) => self.store(percent),
            None => false,
        }
    }

    #[allow(clippy::float_cmp)]
    fn store(&mut self, percent: f64) -> bool {
        if self.state.position == percent {
            return false;
        }
        self.state.position = percent;
        true
    }
}

/// A tracker that also owns the global release listener for active drags.
///
/// The listener is acquired when a drag starts and released on every exit:
/// release events, [`Tracker::teardown`], and drop.
#[derive(Debug)]
pub struct Tracker<R: GlobalRelease> {
    core: TrackerCore,
    release: R,
    guard: Option<ReleaseGuard>,
}

impl<R: GlobalRelease> Tracker<R> {
    #[must_use]
    pub fn new(initial_percent: f64, release: R) -> Self {
        Self { core: TrackerCore::new(initial_percent), release, guard: None }
    }

    #[must_use]
    pub fn core(&self) -> &TrackerCore {
        &self.core
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.core.state()
    }

    /// Whether a global release listener is currently held.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.guard.is_some()
    }

    pub fn measure(&mut self, source: &impl ContainerSource) -> f64 {
        self.core.measure(source)
    }

    /// Apply one event, acquiring or releasing the global listener on phase changes.
    pub fn handle(&mut self, event: SliderEvent) -> Transition {
        let transition = self.core.handle(event);
        if transition.entered_drag && self.guard.is_none() {
            self.guard = Some(self.release.acquire());
        }
        if transition.exited_drag {
            self.drop_guard();
        }
        transition
    }

    /// End any active drag and release the listener. Called when the owning
    /// view is torn down.
    pub fn teardown(&mut self) -> Transition {
        let transition = self.core.release();
        self.drop_guard();
        transition
    }

    fn drop_guard(&mut self) {
        if let Some(guard) = self.guard.take() {
            guard.release();
        }
    }
}
