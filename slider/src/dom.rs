//! Browser bindings: container measurement and the window release listener.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::geometry::{ContainerRect, ContainerSource};
use crate::release::{GlobalRelease, ReleaseGuard};

/// Window events that end a drag regardless of where the pointer is.
const RELEASE_EVENTS: [&str; 4] = ["pointerup", "pointercancel", "touchend", "touchcancel"];

impl ContainerSource for web_sys::Element {
    fn bounds(&self) -> Option<ContainerRect> {
        let rect = self.get_bounding_client_rect();
        Some(ContainerRect::new(rect.left(), rect.width()))
    }
}

/// Release source backed by `window` event listeners.
///
/// `on_release` is invoked for any pointer or touch release anywhere in the
/// window while a drag holds the guard.
#[derive(Clone)]
pub struct WindowRelease {
    on_release: Rc<dyn Fn()>,
}

impl WindowRelease {
    pub fn new(on_release: impl Fn() + 'static) -> Self {
        Self { on_release: Rc::new(on_release) }
    }
}

impl GlobalRelease for WindowRelease {
    fn acquire(&self) -> ReleaseGuard {
        let Some(window) = web_sys::window() else {
            log::warn!("slider: no window, drag release limited to the container");
            return ReleaseGuard::inert();
        };

        let on_release = Rc::clone(&self.on_release);
        // Handed to the JS GC so removing the listener from inside its own
        // dispatch never frees a running closure.
        let callback = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            on_release();
        }) as Box<dyn Fn(web_sys::Event)>)
        .into_js_value();

        for name in RELEASE_EVENTS {
            if let Err(err) = window.add_event_listener_with_callback(name, callback.unchecked_ref()) {
                log::warn!("slider: failed to add window {name} listener: {err:?}");
            }
        }

        ReleaseGuard::new(move || {
            for name in RELEASE_EVENTS {
                if let Err(err) = window.remove_event_listener_with_callback(name, callback.unchecked_ref()) {
                    log::warn!("slider: failed to remove window {name} listener: {err:?}");
                }
            }
        })
    }
}
