use leptos::prelude::*;

use crate::shared::media_query::{use_media_query, NARROW_VIEWPORT_QUERY};
use crate::shared::window_scroll::use_window_scroll_y;

/// Page-independent UI state, provided once by `App`.
#[derive(Clone, Copy)]
pub struct SiteContext {
    /// `(max-width: 768px)` matches.
    pub is_narrow: Signal<bool>,
    pub scroll_y: Signal<f64>,
    /// Set while a full-screen overlay (the species detail) is open.
    pub gradients_hidden: RwSignal<bool>,
    pub mobile_menu_open: RwSignal<bool>,
}

impl SiteContext {
    pub fn new() -> Self {
        Self {
            is_narrow: use_media_query(NARROW_VIEWPORT_QUERY),
            scroll_y: use_window_scroll_y(),
            gradients_hidden: RwSignal::new(false),
            mobile_menu_open: RwSignal::new(false),
        }
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_site_context() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext not provided. Mount inside App.")
}
