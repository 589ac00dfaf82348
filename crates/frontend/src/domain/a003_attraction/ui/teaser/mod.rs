use contracts::domain::a003_attraction::teaser_attractions;
use contracts::shared::format::two_digit_index;
use leptos::prelude::*;

use crate::layout::global_context::use_site_context;
use crate::shared::components::Button;
use crate::shared::motion::stagger_style;

/// Home page attractions grid.
///
/// Hover emphasis is desktop-only; narrow viewports get a trimmed list and
/// a link to the full Adventure page instead.
#[component]
pub fn AttractionsTeaser() -> impl IntoView {
    let site = use_site_context();
    let hovered = RwSignal::new(None::<u32>);

    let set_hover = move |id: Option<u32>| {
        if !site.is_narrow.get_untracked() {
            hovered.set(id);
        }
    };

    view! {
        <section class="attractions-teaser">
            <div class="container">
                <div class="section-header reveal">
                    <span class="eyebrow">"Park Features"</span>
                    <h2 class="display__lead">"Attractions"</h2>
                    <p class="lead">
                        "Immerse yourself in a world of wonder with our diverse range of attractions designed to educate, entertain, and amaze visitors of all ages."
                    </p>
                </div>

                <div class="attraction-grid">
                    {move || {
                        let narrow = site.is_narrow.get();
                        teaser_attractions(narrow)
                            .iter()
                            .enumerate()
                            .map(|(index, attraction)| {
                                let id = attraction.id;
                                let card_class = move || {
                                    let mut class = String::from("attraction-card reveal");
                                    if narrow {
                                        class.push_str(" attraction-card--static");
                                    } else if hovered.get() == Some(id) {
                                        class.push_str(" attraction-card--hovered");
                                    }
                                    class
                                };
                                view! {
                                    <div
                                        class=card_class
                                        style=stagger_style(0, 100, index)
                                        on:mouseenter=move |_| set_hover(Some(id))
                                        on:mouseleave=move |_| set_hover(None)
                                    >
                                        <div class="attraction-card__media">
                                            <img src=attraction.image alt=attraction.title />
                                            <div class="attraction-card__shade"></div>
                                        </div>
                                        <div class="attraction-card__content">
                                            <span class="attraction-card__index">{two_digit_index(index)}</span>
                                            <h3>{attraction.title}</h3>
                                            <p>{attraction.summary}</p>
                                            <div class="attraction-card__tags">
                                                {attraction
                                                    .teaser_features()
                                                    .iter()
                                                    .map(|feature| view! { <span class="pill">{*feature}</span> })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <Show when=move || site.is_narrow.get()>
                    <div class="section-more">
                        <Button href="/adventure">"View All Attractions"</Button>
                    </div>
                </Show>
            </div>
        </section>
    }
}
