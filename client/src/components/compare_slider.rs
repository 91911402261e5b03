//! Before/after comparison slider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders two stacked images, a divider, and a handle. Pointer events cover
//! mouse, pen, and touch alike. Pointer, keyboard, and resize input is
//! forwarded to a `slider::tracker::Tracker`; the component only mirrors the
//! tracker's `DragState` into a signal and styles the overlay from it. While
//! a drag is active the tracker holds a
//! window-level release listener so letting go anywhere ends the drag.

#[cfg(test)]
#[path = "compare_slider_test.rs"]
mod compare_slider_test;

use leptos::prelude::*;
use slider::tracker::{DragState, TrackerCore};

#[cfg(feature = "hydrate")]
use slider::dom::WindowRelease;
#[cfg(feature = "hydrate")]
use slider::input::SliderEvent;
#[cfg(feature = "hydrate")]
use slider::tracker::Tracker;

#[cfg(feature = "hydrate")]
type BrowserTracker = StoredValue<Tracker<WindowRelease>, LocalStorage>;

/// Root layout. `touch-action: none` keeps the browser from claiming a
/// finger drag as a pan, which would cancel the pointer stream mid-drag.
const ROOT_STYLE: &str = "position: relative; overflow: hidden; touch-action: none; user-select: none;";

/// Root class, with modifiers for the active drag and hover states.
fn slider_class(state: DragState) -> String {
    let mut class = String::from("compare-slider");
    if state.is_dragging {
        class.push_str(" compare-slider--dragging");
    }
    if state.hovered || state.is_dragging {
        class.push_str(" compare-slider--active");
    }
    class
}

/// The clipping overlay spans `position`% of the container.
fn overlay_style(state: DragState) -> String {
    format!(
        "position: absolute; top: 0; left: 0; bottom: 0; overflow: hidden; width: {:.3}%;",
        state.position
    )
}

/// The overlaid image keeps the container's full width so it lines up with
/// the base image instead of shrinking with its clipping parent. Before the
/// first measurement it falls back to the viewport-relative width.
fn overlay_image_style(state: DragState) -> String {
    if state.container_width > 0.0 {
        format!("width: {:.1}px; max-width: none;", state.container_width)
    } else {
        "width: 100vw; max-width: none;".to_owned()
    }
}

fn divider_style(state: DragState) -> String {
    format!("position: absolute; top: 0; bottom: 0; left: {:.3}%;", state.position)
}

#[cfg(feature = "hydrate")]
fn dispatch(tracker: BrowserTracker, drag: RwSignal<DragState>, event: SliderEvent) -> bool {
    let Some((transition, state)) = tracker.try_update_value(|t| {
        let transition = t.handle(event);
        (transition, t.state())
    }) else {
        return false;
    };
    if !transition.is_noop() {
        drag.set(state);
    }
    !transition.is_noop()
}

#[cfg(feature = "hydrate")]
fn measure(tracker: BrowserTracker, drag: RwSignal<DragState>, container: &web_sys::Element) {
    if let Some(state) = tracker.try_update_value(|t| {
        t.measure(container);
        t.state()
    }) {
        if drag.get_untracked() != state {
            drag.set(state);
        }
    }
}

/// Draggable before/after image comparison.
#[component]
pub fn CompareSlider(
    #[prop(into)] before_src: Signal<String>,
    #[prop(into)] after_src: Signal<String>,
    #[prop(into, default = "Before".to_owned())] before_label: String,
    #[prop(into, default = "After".to_owned())] after_label: String,
    #[prop(default = slider::consts::DEFAULT_POSITION)] initial_position: f64,
) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let drag = RwSignal::new(TrackerCore::new(initial_position).state());

    #[cfg(feature = "hydrate")]
    let tracker: BrowserTracker = {
        let handle: StoredValue<Option<BrowserTracker>, LocalStorage> = StoredValue::new_local(None);
        let release = WindowRelease::new(move || {
            if let Some(Some(tracker)) = handle.try_get_value() {
                dispatch(tracker, drag, SliderEvent::PointerUp);
            }
        });
        let tracker = StoredValue::new_local(Tracker::new(initial_position, release));
        handle.set_value(Some(tracker));
        tracker
    };

    #[cfg(feature = "hydrate")]
    {
        // Measure once mounted, then on every viewport resize.
        Effect::new(move || {
            if let Some(div) = container_ref.get() {
                measure(tracker, drag, &div);
            }
        });
        let resize = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(div) = container_ref.get_untracked() {
                measure(tracker, drag, &div);
            }
        });
        on_cleanup(move || {
            resize.remove();
            // Drops the window release listener if a drag is still active.
            tracker.try_update_value(Tracker::teardown);
        });
    }

    let on_pointer_enter = move |_ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        dispatch(tracker, drag, SliderEvent::PointerEnter);
    };

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            if ev.button() != 0 {
                return;
            }
            ev.prevent_default();
            if let Some(div) = container_ref.get_untracked() {
                measure(tracker, drag, &div);
            }
            dispatch(tracker, drag, SliderEvent::PointerDown { client_x: f64::from(ev.client_x()) });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        dispatch(tracker, drag, SliderEvent::PointerMove { client_x: f64::from(ev.client_x()) });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        dispatch(tracker, drag, SliderEvent::PointerUp);
    };

    let on_pointer_cancel = move |_ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        dispatch(tracker, drag, SliderEvent::PointerCancel);
    };

    let on_pointer_leave = move |_ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        dispatch(tracker, drag, SliderEvent::PointerLeave);
    };

    let on_key_down = move |ev: leptos::ev::KeyboardEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(event) = SliderEvent::from_key(&ev.key()) {
                ev.prevent_default();
                dispatch(tracker, drag, event);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let aria_label = format!("Drag to compare {before_label} and {after_label}");

    view! {
        <div
            class=move || slider_class(drag.get())
            style=ROOT_STYLE
            node_ref=container_ref
            role="slider"
            tabindex="0"
            aria-label=aria_label
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", drag.get().position)
            on:pointerenter=on_pointer_enter
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_cancel
            on:pointerleave=on_pointer_leave
            on:keydown=on_key_down
        >
            <img class="compare-slider__image" src=move || after_src.get() alt=after_label.clone() draggable="false"/>
            <div class="compare-slider__overlay" style=move || overlay_style(drag.get())>
                <img
                    class="compare-slider__image"
                    src=move || before_src.get()
                    alt=before_label.clone()
                    draggable="false"
                    style=move || overlay_image_style(drag.get())
                />
            </div>
            <div class="compare-slider__divider" style=move || divider_style(drag.get())>
                <div class="compare-slider__handle" aria-hidden="true">"⟷"</div>
            </div>
            <span class="compare-slider__label compare-slider__label--before">{before_label.clone()}</span>
            <span class="compare-slider__label compare-slider__label--after">{after_label.clone()}</span>
        </div>
    }
}
