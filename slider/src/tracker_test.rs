#![allow(clippy::float_cmp)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::release::NoGlobalRelease;

// =============================================================
// Helpers
// =============================================================

fn measured_core(initial: f64, left: f64, width: f64) -> TrackerCore {
    let mut core = TrackerCore::new(initial);
    core.measure(&ContainerRect::new(left, width));
    core
}

fn down(client_x: f64) -> SliderEvent {
    SliderEvent::PointerDown { client_x }
}

fn mv(client_x: f64) -> SliderEvent {
    SliderEvent::PointerMove { client_x }
}

/// Release source that counts acquisitions and teardowns, and stores the
/// callback a window listener would invoke.
#[derive(Clone, Default)]
struct CountingRelease {
    acquired: Rc<Cell<usize>>,
    released: Rc<Cell<usize>>,
}

impl CountingRelease {
    fn live(&self) -> usize {
        self.acquired.get() - self.released.get()
    }
}

impl GlobalRelease for CountingRelease {
    fn acquire(&self) -> ReleaseGuard {
        self.acquired.set(self.acquired.get() + 1);
        let released = Rc::clone(&self.released);
        ReleaseGuard::new(move || released.set(released.get() + 1))
    }
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_starts_idle_at_initial_position() {
    let core = TrackerCore::new(30.0);
    assert_eq!(core.phase(), DragPhase::Idle);
    assert_eq!(core.position(), 30.0);
    assert!(!core.state().is_dragging);
    assert_eq!(core.state().container_width, 0.0);
    assert!(!core.state().hovered);
}

#[test]
fn new_clamps_out_of_range_initial_position() {
    assert_eq!(TrackerCore::new(-20.0).position(), 0.0);
    assert_eq!(TrackerCore::new(250.0).position(), 100.0);
}

#[test]
fn new_non_finite_initial_falls_back_to_default() {
    assert_eq!(TrackerCore::new(f64::NAN).position(), DEFAULT_POSITION);
    assert_eq!(TrackerCore::new(f64::INFINITY).position(), DEFAULT_POSITION);
}

#[test]
fn default_state_is_centered() {
    assert_eq!(DragState::default().position, 50.0);
}

// =============================================================
// Measurement
// =============================================================

#[test]
fn measure_before_mount_returns_zero() {
    let mut core = TrackerCore::new(50.0);
    let unmounted: Option<ContainerRect> = None;
    assert_eq!(core.measure(&unmounted), 0.0);
    assert_eq!(core.state().container_width, 0.0);
}

#[test]
fn measure_after_mount_returns_positive_width() {
    let mut core = TrackerCore::new(50.0);
    let unmounted: Option<ContainerRect> = None;
    assert_eq!(core.measure(&unmounted), 0.0);
    let mounted = Some(ContainerRect::new(12.0, 640.0));
    assert_eq!(core.measure(&mounted), 640.0);
    assert_eq!(core.state().container_width, 640.0);
    assert_eq!(core.container().left, 12.0);
}

#[test]
fn measure_unmounted_keeps_previous_cache() {
    let mut core = measured_core(50.0, 0.0, 300.0);
    let unmounted: Option<ContainerRect> = None;
    assert_eq!(core.measure(&unmounted), 0.0);
    assert_eq!(core.state().container_width, 300.0);
}

#[test]
fn resize_updates_width_without_moving_position() {
    let mut core = measured_core(25.0, 0.0, 400.0);
    core.measure(&ContainerRect::new(0.0, 800.0));
    assert_eq!(core.state().container_width, 800.0);
    assert_eq!(core.position(), 25.0);
}

// =============================================================
// Position formula
// =============================================================

#[test]
fn press_inside_bounds_matches_formula() {
    for client_x in [100.0, 150.0, 233.3, 300.0, 499.0, 500.0] {
        let mut core = measured_core(0.0, 100.0, 400.0);
        core.handle(down(client_x));
        let expected = ((client_x - 100.0) / 400.0) * 100.0;
        assert!((core.position() - expected).abs() < 1e-9, "client_x={client_x}");
    }
}

#[test]
fn press_outside_bounds_clamps() {
    let mut core = measured_core(50.0, 100.0, 400.0);
    core.handle(down(0.0));
    assert_eq!(core.position(), 0.0);
    core.handle(mv(9000.0));
    assert_eq!(core.position(), 100.0);
}

// =============================================================
// State machine
// =============================================================

#[test]
fn moves_while_idle_never_change_position() {
    let mut core = measured_core(40.0, 0.0, 200.0);
    for x in [0.0, 50.0, 120.0, 199.0, 500.0] {
        let t = core.handle(mv(x));
        assert!(t.is_noop());
        let t = core.handle(SliderEvent::TouchMove { client_x: x });
        assert!(t.is_noop());
    }
    assert_eq!(core.position(), 40.0);
    assert_eq!(core.phase(), DragPhase::Idle);
}

#[test]
fn click_without_move_jumps_once_and_returns_idle() {
    let mut core = measured_core(50.0, 0.0, 200.0);
    let pressed = core.handle(down(50.0));
    assert!(pressed.entered_drag);
    assert!(pressed.position_changed);
    assert_eq!(core.position(), 25.0);

    let released = core.handle(SliderEvent::PointerUp);
    assert!(released.exited_drag);
    assert!(!released.position_changed);
    assert_eq!(core.phase(), DragPhase::Idle);
    assert_eq!(core.position(), 25.0);
}

#[test]
fn every_release_kind_returns_to_idle() {
    for release in [
        SliderEvent::PointerUp,
        SliderEvent::PointerLeave,
        SliderEvent::PointerCancel,
        SliderEvent::TouchEnd,
        SliderEvent::TouchCancel,
    ] {
        let mut core = measured_core(50.0, 0.0, 100.0);
        core.handle(down(10.0));
        assert!(core.state().is_dragging);
        let t = core.handle(release);
        assert!(t.exited_drag, "{release:?}");
        assert!(!core.state().is_dragging);
        assert_eq!(core.phase(), DragPhase::Idle);
    }
}

#[test]
fn release_while_idle_reports_no_exit() {
    let mut core = TrackerCore::new(50.0);
    assert!(!core.handle(SliderEvent::PointerUp).exited_drag);
}

#[test]
fn repeated_press_does_not_reenter() {
    let mut core = measured_core(50.0, 0.0, 100.0);
    assert!(core.handle(down(10.0)).entered_drag);
    let again = core.handle(down(20.0));
    assert!(!again.entered_drag);
    assert_eq!(core.position(), 20.0);
}

#[test]
fn touch_stream_drives_the_same_machine() {
    let mut core = measured_core(50.0, 0.0, 400.0);
    core.handle(SliderEvent::TouchStart { client_x: 100.0 });
    assert_eq!(core.position(), 25.0);
    core.handle(SliderEvent::TouchMove { client_x: 300.0 });
    assert_eq!(core.position(), 75.0);
    core.handle(SliderEvent::TouchEnd);
    core.handle(SliderEvent::TouchMove { client_x: 0.0 });
    assert_eq!(core.position(), 75.0);
}

#[test]
fn rapid_moves_are_last_write_wins() {
    let mut core = measured_core(50.0, 0.0, 100.0);
    core.handle(down(50.0));
    for x in [10.0, 90.0, 33.0, 64.0] {
        core.handle(mv(x));
    }
    assert_eq!(core.position(), 64.0);
}

#[test]
fn move_to_same_position_reports_no_change() {
    let mut core = measured_core(50.0, 0.0, 100.0);
    core.handle(down(40.0));
    assert!(!core.handle(mv(40.0)).position_changed);
}

// =============================================================
// Hover
// =============================================================

#[test]
fn enter_and_leave_toggle_hover_without_moving() {
    let mut core = measured_core(50.0, 0.0, 100.0);
    assert!(core.handle(SliderEvent::PointerEnter).hover_changed);
    assert!(core.state().hovered);
    assert!(!core.handle(SliderEvent::PointerEnter).hover_changed);
    let left = core.handle(SliderEvent::PointerLeave);
    assert!(left.hover_changed);
    assert!(!left.exited_drag);
    assert!(!core.state().hovered);
    assert_eq!(core.position(), 50.0);
}

#[test]
fn leave_while_dragging_ends_drag_and_hover() {
    let mut core = measured_core(50.0, 0.0, 100.0);
    core.handle(SliderEvent::PointerEnter);
    core.handle(down(70.0));
    let left = core.handle(SliderEvent::PointerLeave);
    assert!(left.exited_drag);
    assert!(left.hover_changed);
    assert_eq!(core.position(), 70.0);
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn nudge_moves_and_clamps_in_any_phase() {
    let mut core = TrackerCore::new(99.5);
    assert!(core.handle(SliderEvent::Nudge(1.0)).position_changed);
    assert_eq!(core.position(), 100.0);
    assert!(!core.handle(SliderEvent::Nudge(1.0)).position_changed);
    core.handle(SliderEvent::Nudge(-10.0));
    assert_eq!(core.position(), 90.0);
}

#[test]
fn set_position_clamps_and_ignores_non_finite() {
    let mut core = TrackerCore::new(50.0);
    core.handle(SliderEvent::SetPosition(-4.0));
    assert_eq!(core.position(), 0.0);
    core.handle(SliderEvent::SetPosition(f64::NAN));
    assert_eq!(core.position(), 0.0);
    core.handle(SliderEvent::Nudge(f64::INFINITY));
    assert_eq!(core.position(), 0.0);
}

// =============================================================
// Guards: zero width and non-finite input
// =============================================================

#[test]
fn unmeasured_press_keeps_prior_position() {
    let mut core = TrackerCore::new(37.0);
    let t = core.handle(down(1234.0));
    assert!(t.entered_drag);
    assert!(!t.position_changed);
    assert_eq!(core.position(), 37.0);
    assert!(core.position().is_finite());
    core.handle(mv(10.0));
    assert_eq!(core.position(), 37.0);
}

#[test]
fn non_finite_client_x_is_a_full_noop() {
    let mut core = measured_core(50.0, 0.0, 100.0);
    let t = core.handle(down(f64::NAN));
    assert!(t.is_noop());
    assert_eq!(core.phase(), DragPhase::Idle);

    core.handle(down(20.0));
    assert!(core.handle(mv(f64::INFINITY)).is_noop());
    assert_eq!(core.position(), 20.0);
    assert_eq!(core.phase(), DragPhase::Dragging);
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn scenario_drag_past_right_edge_then_release() {
    let mut core = measured_core(50.0, 100.0, 400.0);
    core.handle(down(300.0));
    assert_eq!(core.position(), 50.0);
    core.handle(mv(500.0));
    assert_eq!(core.position(), 100.0);
    core.handle(mv(600.0));
    assert_eq!(core.position(), 100.0);
    core.handle(SliderEvent::PointerUp);
    assert_eq!(core.phase(), DragPhase::Idle);
    assert_eq!(core.position(), 100.0);
}

#[test]
fn scenario_unmeasured_container_never_produces_nan() {
    let mut core = TrackerCore::new(50.0);
    for x in [-100.0, 0.0, 42.0, 1e12] {
        core.handle(down(x));
        core.handle(mv(x));
        assert_eq!(core.position(), 50.0);
    }
}

// =============================================================
// Tracker: global release listener
// =============================================================

#[test]
fn tracker_acquires_listener_once_per_drag() {
    let release = CountingRelease::default();
    let mut tracker = Tracker::new(50.0, release.clone());
    tracker.measure(&ContainerRect::new(0.0, 100.0));

    tracker.handle(down(10.0));
    tracker.handle(down(20.0));
    tracker.handle(mv(30.0));
    assert!(tracker.is_listening());
    assert_eq!(release.acquired.get(), 1);
    assert_eq!(release.live(), 1);
}

#[test]
fn tracker_releases_listener_on_every_exit_path() {
    for exit in [
        SliderEvent::PointerUp,
        SliderEvent::PointerLeave,
        SliderEvent::PointerCancel,
        SliderEvent::TouchEnd,
        SliderEvent::TouchCancel,
    ] {
        let release = CountingRelease::default();
        let mut tracker = Tracker::new(50.0, release.clone());
        tracker.handle(down(10.0));
        tracker.handle(exit);
        assert!(!tracker.is_listening(), "{exit:?}");
        assert_eq!(release.live(), 0, "{exit:?}");
    }
}

#[test]
fn release_outside_container_ends_drag() {
    // The container never sees the pointerup; only the window listener does.
    let release = CountingRelease::default();
    let mut tracker = Tracker::new(50.0, release.clone());
    tracker.measure(&ContainerRect::new(0.0, 100.0));
    tracker.handle(down(80.0));
    tracker.handle(mv(95.0));

    // What the window listener forwards.
    tracker.handle(SliderEvent::PointerUp);

    assert!(!tracker.state().is_dragging);
    assert_eq!(tracker.state().position, 95.0);
    assert_eq!(release.live(), 0);
    tracker.handle(mv(10.0));
    assert_eq!(tracker.state().position, 95.0);
}

#[test]
fn teardown_mid_drag_releases_listener() {
    let release = CountingRelease::default();
    let mut tracker = Tracker::new(50.0, release.clone());
    tracker.handle(down(10.0));
    let t = tracker.teardown();
    assert!(t.exited_drag);
    assert_eq!(release.live(), 0);
    assert!(!tracker.state().is_dragging);
}

#[test]
fn dropping_tracker_mid_drag_releases_listener() {
    let release = CountingRelease::default();
    {
        let mut tracker = Tracker::new(50.0, release.clone());
        tracker.handle(down(10.0));
        assert_eq!(release.live(), 1);
    }
    assert_eq!(release.acquired.get(), 1);
    assert_eq!(release.live(), 0);
}

#[test]
fn idle_tracker_never_acquires() {
    let release = CountingRelease::default();
    let mut tracker = Tracker::new(50.0, release.clone());
    tracker.handle(SliderEvent::PointerEnter);
    tracker.handle(mv(10.0));
    tracker.handle(SliderEvent::Nudge(5.0));
    tracker.handle(SliderEvent::PointerUp);
    assert_eq!(release.acquired.get(), 0);
    assert_eq!(tracker.state().position, 55.0);
}

#[test]
fn no_global_release_tracker_still_tracks() {
    let mut tracker = Tracker::new(0.0, NoGlobalRelease);
    tracker.measure(&ContainerRect::new(0.0, 50.0));
    tracker.handle(down(25.0));
    assert!(tracker.is_listening());
    assert_eq!(tracker.core().position(), 50.0);
    tracker.handle(SliderEvent::TouchEnd);
    assert!(!tracker.is_listening());
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn drag_state_serializes_with_field_names() {
    let state = DragState { position: 12.5, is_dragging: true, container_width: 300.0, hovered: false };
    let value = serde_json::to_value(state).unwrap_or_default();
    assert_eq!(value["position"], 12.5);
    assert_eq!(value["is_dragging"], true);
    assert_eq!(value["container_width"], 300.0);
}
