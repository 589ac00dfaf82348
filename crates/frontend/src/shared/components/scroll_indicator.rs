use leptos::prelude::*;

use crate::layout::global_context::use_site_context;
use crate::shared::icons::icon;
use crate::shared::motion::scroll_indicator_visible;
use crate::shared::window_scroll::scroll_one_viewport_down;

/// "Scroll to Explore" hint that fades out once the page moves.
#[component]
pub fn ScrollIndicator(
    #[prop(optional, into)] text: Option<String>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let site = use_site_context();
    let text = text.unwrap_or_else(|| "Scroll to Explore".to_string());

    view! {
        <button
            class=move || {
                let state = if scroll_indicator_visible(site.scroll_y.get()) {
                    ""
                } else {
                    "scroll-indicator--hidden"
                };
                format!("scroll-indicator {} {}", state, class)
            }
            on:click=move |_| scroll_one_viewport_down()
        >
            <span class="scroll-indicator__text">{text}</span>
            <span class="scroll-indicator__circle">{icon("chevron-down")}</span>
        </button>
    }
}
