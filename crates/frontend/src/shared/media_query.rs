use contracts::shared::catalog::ViewportSignal;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Breakpoint below which pages switch to their narrow layouts.
pub const NARROW_VIEWPORT_QUERY: &str = "(max-width: 768px)";

/// Live `matchMedia(query).matches`.
///
/// The change listener stays registered for the lifetime of the page, so
/// call this once per query (see `SiteContext`).
pub fn use_media_query(query: &str) -> Signal<bool> {
    let matches = RwSignal::new(false);

    let Some(list) = web_sys::window().and_then(|w| w.match_media(query).ok().flatten()) else {
        log::warn!("matchMedia unavailable for {}", query);
        return matches.into();
    };
    matches.set(list.matches());

    let on_change = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
        matches.set(event.matches());
    }) as Box<dyn FnMut(_)>);
    if let Err(err) =
        list.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
    {
        log::warn!("matchMedia listener for {}: {:?}", query, err);
    }
    on_change.forget();

    matches.into()
}

/// Reads the current value of a media-query signal without subscribing.
#[derive(Clone, Copy)]
pub struct MediaQueryViewport(pub Signal<bool>);

impl ViewportSignal for MediaQueryViewport {
    fn is_narrow(&self) -> bool {
        self.0.get_untracked()
    }
}
