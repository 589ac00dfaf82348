use crate::layout::global_context::SiteContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use thaw::{ConfigProvider, Theme};

#[component]
pub fn App() -> impl IntoView {
    // Viewport, scroll position and overlay flags shared by every page.
    provide_context(SiteContext::new());

    let theme = RwSignal::new(Theme::dark());

    view! {
        <ConfigProvider theme=theme>
            <AppRoutes />
        </ConfigProvider>
    }
}
