//! Window scroll listener that fires when the page is scrolled to the bottom

use leptos::ev;
use leptos::prelude::*;
use campuslist_core::{BottomDetection, ScrollMetrics, Subscription};

fn read_scroll_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let root: web_sys::HtmlElement = wasm_bindgen::JsCast::dyn_into(root).ok()?;

    Some(ScrollMetrics {
        viewport_height: window.inner_height().ok()?.as_f64()?,
        scroll_top: window.scroll_y().ok()?,
        document_height: root.offset_height() as f64,
    })
}

/// Subscribe to window scroll for the lifetime of the calling component.
/// The listener is removed when the component's owner is cleaned up.
pub fn on_scroll_bottom(detection: BottomDetection, on_bottom: impl Fn() + 'static) {
    let handle = window_event_listener(ev::scroll, move |_| {
        let Some(metrics) = read_scroll_metrics() else {
            return;
        };
        if metrics.is_at_bottom(detection) {
            on_bottom();
        }
    });

    let subscription = Subscription::new(move || handle.remove());
    on_cleanup(move || subscription.release());
}
