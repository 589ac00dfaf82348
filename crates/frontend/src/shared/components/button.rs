use leptos::prelude::*;

use crate::shared::icons::icon;

/// Outlined call-to-action.
///
/// Renders a link when `href` is set, a `<button>` otherwise. The trailing
/// arrow is on unless `arrow=false`.
#[component]
pub fn Button(
    #[prop(optional, into)] href: Option<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// `"button"` (default) or `"submit"`
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(default = true)] arrow: bool,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = move || format!("button {}", class.get().unwrap_or_default());
    let arrow = arrow.then(|| view! { <span class="button__arrow">{icon("arrow-right")}</span> });

    match href {
        Some(href) => view! {
            <a href=href class=class>
                {children()}
                {arrow}
            </a>
        }
        .into_any(),
        None => view! {
            <button
                type=move || button_type.get().unwrap_or_else(|| "button".to_string())
                class=class
                disabled=move || disabled.get().unwrap_or(false)
                on:click=move |ev| {
                    if let Some(handler) = on_click {
                        handler.run(ev);
                    }
                }
            >
                {children()}
                {arrow}
            </button>
        }
        .into_any(),
    }
}
