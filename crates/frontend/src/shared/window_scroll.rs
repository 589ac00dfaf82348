use leptos::ev;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// `window.scrollY`, updated on every scroll event.
pub fn use_window_scroll_y() -> Signal<f64> {
    let scroll_y = RwSignal::new(current_scroll_y());
    let handle = window_event_listener(ev::scroll, move |_| {
        scroll_y.set(current_scroll_y());
    });
    on_cleanup(move || handle.remove());
    scroll_y.into()
}

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smoothly scrolls one viewport height down from the top of the page.
pub fn scroll_one_viewport_down() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let top = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smoothly brings the element with `id` into view, if it exists.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::warn!("no section #{}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
