use leptos::prelude::*;

use super::global_context::use_site_context;
use crate::shared::motion::scroll_gradient_opacity;

/// Top and bottom fades that deepen as the page scrolls.
#[component]
pub fn ScrollGradient() -> impl IntoView {
    let site = use_site_context();

    let style = move || {
        if site.gradients_hidden.get() {
            "opacity: 0; pointer-events: none;".to_string()
        } else {
            format!("opacity: {:.3};", scroll_gradient_opacity(site.scroll_y.get()))
        }
    };

    view! {
        <div class="scroll-gradient scroll-gradient--top" style=style>
            <div class="scroll-gradient__noise"></div>
        </div>
        <div class="scroll-gradient scroll-gradient--bottom" style=style>
            <div class="scroll-gradient__noise"></div>
        </div>
    }
}
