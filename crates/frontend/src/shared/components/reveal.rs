//! Reveal: entrance animation wrapper.
//!
//! The `reveal-up` keyframes live in `styles/site.css`. Pass increasing
//! `delay_ms` values to stagger siblings.

use leptos::prelude::*;

#[component]
pub fn Reveal(
    /// Animation delay in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: reveal-up 0.5s ease-out {}ms both;", delay_ms);

    view! {
        <div class=format!("reveal {}", class) style=style>
            {children()}
        </div>
    }
}
