//! Browser glue between the interaction core and `web_sys`
//!
//! Observers attached here are returned as a [`Subscription`]; dropping it
//! disconnects the observer and frees its closure.

use leptos::logging::debug_warn;
use leptos::wasm_bindgen::closure::Closure;
use leptos::wasm_bindgen::{JsCast, JsValue};
use leptos::web_sys;

use crate::core::contact::Handoff;
use crate::core::geometry::{GeometryProvider, Rect};
use crate::core::lifecycle::Subscription;
use crate::core::reveal::Visibility;

impl GeometryProvider for web_sys::Element {
    fn bounding_rect(&self) -> Option<Rect> {
        let r = self.get_bounding_client_rect();
        Some(Rect::new(r.left(), r.top(), r.width(), r.height()))
    }
}

/// Report visibility changes of `element` at `threshold`.
///
/// Returns `None` when the browser has no `IntersectionObserver`.
pub fn observe_visibility(
    element: &web_sys::Element,
    threshold: f64,
    mut on_report: impl FnMut(Visibility) + 'static,
) -> Option<Subscription> {
    let callback = Closure::<dyn FnMut(js_sys::Array, JsValue)>::new(
        move |entries: js_sys::Array, _observer: JsValue| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                on_report(Visibility::new(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                ));
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = match web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    ) {
        Ok(observer) => observer,
        Err(err) => {
            debug_warn!("IntersectionObserver unavailable: {err:?}");
            return None;
        }
    };
    observer.observe(element);

    Some(Subscription::new(move || {
        observer.disconnect();
        // The observer may be released from inside its own callback, so the
        // closure is freed on the next microtask instead of right now.
        match web_sys::window() {
            Some(window) => {
                let free = Closure::once_into_js(move || drop(callback));
                window.queue_microtask(free.unchecked_ref());
            }
            None => callback.forget(),
        }
    }))
}

/// Open a contact deep link
pub fn perform_handoff(handoff: &Handoff) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let result = match handoff {
        Handoff::Navigate(url) => window.location().set_href(url),
        Handoff::OpenNewContext(url) => window
            .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
            .map(|_| ()),
    };
    if let Err(err) = result {
        debug_warn!("could not open {}: {err:?}", handoff.url());
    }
}
