use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubtitleVariant {
    #[default]
    Default,
    Amber,
}

impl SubtitleVariant {
    fn css_class(&self) -> &'static str {
        match self {
            SubtitleVariant::Default => "subtitle",
            SubtitleVariant::Amber => "subtitle subtitle--amber",
        }
    }
}

/// Small pill label above section headings.
#[component]
pub fn SectionSubtitle(
    #[prop(into)] text: String,
    #[prop(optional)] variant: SubtitleVariant,
    /// Adds a pulsing dot before the text.
    #[prop(optional)]
    pulse: bool,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class=move || format!("{} {}", variant.css_class(), class.get().unwrap_or_default())>
            {pulse.then(|| view! { <span class="subtitle__pulse"></span> })}
            <span class="subtitle__text">{text}</span>
        </div>
    }
}
