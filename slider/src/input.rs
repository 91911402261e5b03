//! Input model: slider events, the drag phase, and transition reports.
//!
//! `SliderEvent` is the normalized form of every DOM event the display
//! component forwards (mouse, pen, and touch all collapse to a viewport x).
//! `DragPhase` is the two-state machine driven by those events, and
//! `Transition` tells the caller what a single event actually changed.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// A single input event forwarded from the display component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    /// Pointer entered the container.
    PointerEnter,
    /// Primary pointer pressed over the container.
    PointerDown {
        /// Viewport x of the pointer.
        client_x: f64,
    },
    /// Pointer moved over the container (or anywhere, while captured).
    PointerMove {
        /// Viewport x of the pointer.
        client_x: f64,
    },
    /// Pointer released, over the container or anywhere in the window.
    PointerUp,
    /// Pointer left the container.
    PointerLeave,
    /// Browser cancelled the pointer stream (e.g. a scroll gesture took over).
    PointerCancel,
    /// First touch point placed on the container.
    TouchStart {
        /// Viewport x of the first touch point.
        client_x: f64,
    },
    /// First touch point moved.
    TouchMove {
        /// Viewport x of the first touch point.
        client_x: f64,
    },
    /// Last touch point lifted.
    TouchEnd,
    /// Touch sequence cancelled by the browser.
    TouchCancel,
    /// Keyboard step by a signed number of percentage points.
    Nudge(f64),
    /// Keyboard jump to an absolute percentage (Home / End).
    SetPosition(f64),
}

impl SliderEvent {
    /// Viewport x carried by the event, if any.
    #[must_use]
    pub fn client_x(self) -> Option<f64> {
        match self {
            Self::PointerDown { client_x }
            | Self::PointerMove { client_x }
            | Self::TouchStart { client_x }
            | Self::TouchMove { client_x } => Some(client_x),
            _ => None,
        }
    }

    /// Whether this event starts a drag.
    #[must_use]
    pub fn is_press(self) -> bool {
        matches!(self, Self::PointerDown { .. } | Self::TouchStart { .. })
    }

    /// Whether this event continues a drag.
    #[must_use]
    pub fn is_move(self) -> bool {
        matches!(self, Self::PointerMove { .. } | Self::TouchMove { .. })
    }

    /// Whether this event ends a drag.
    #[must_use]
    pub fn is_release(self) -> bool {
        matches!(
            self,
            Self::PointerUp | Self::PointerLeave | Self::PointerCancel | Self::TouchEnd | Self::TouchCancel
        )
    }

    /// Map a keyboard key name (as reported by the browser) to a slider event.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        use crate::consts::{MAX_POSITION, MIN_POSITION, NUDGE_PAGE_STEP, NUDGE_STEP};

        match key {
            "ArrowLeft" | "ArrowDown" => Some(Self::Nudge(-NUDGE_STEP)),
            "ArrowRight" | "ArrowUp" => Some(Self::Nudge(NUDGE_STEP)),
            "PageDown" => Some(Self::Nudge(-NUDGE_PAGE_STEP)),
            "PageUp" => Some(Self::Nudge(NUDGE_PAGE_STEP)),
            "Home" => Some(Self::SetPosition(MIN_POSITION)),
            "End" => Some(Self::SetPosition(MAX_POSITION)),
            _ => None,
        }
    }
}

/// The drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No drag in progress; move events are ignored.
    #[default]
    Idle,
    /// Between a press and its release; move events update the position.
    Dragging,
}

/// What a single event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transition {
    /// The phase went from `Idle` to `Dragging`.
    pub entered_drag: bool,
    /// The phase went from `Dragging` to `Idle`.
    pub exited_drag: bool,
    /// `position` took a new value.
    pub position_changed: bool,
    /// `hovered` flipped.
    pub hover_changed: bool,
}

impl Transition {
    /// Whether anything visible changed.
    #[must_use]
    pub fn is_noop(self) -> bool {
        !(self.entered_drag || self.exited_drag || self.position_changed || self.hover_changed)
    }
}
