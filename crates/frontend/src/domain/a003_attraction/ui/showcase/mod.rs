use contracts::domain::a003_attraction::{featured_attractions, Attraction};
use leptos::prelude::*;

use crate::shared::components::Reveal;

/// Adventure page: one alternating section per featured attraction.
#[component]
pub fn AttractionShowcase() -> impl IntoView {
    view! {
        <section class="showcase">
            <div class="container showcase__list">
                {featured_attractions()
                    .enumerate()
                    .map(|(index, attraction)| view! { <AttractionSection attraction=*attraction reversed={index % 2 == 1} /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn AttractionSection(attraction: Attraction, reversed: bool) -> impl IntoView {
    let class = if reversed {
        "showcase__item showcase__item--reversed"
    } else {
        "showcase__item"
    };

    view! {
        <Reveal class=class>
            <div class="showcase__media">
                <img src=attraction.image alt=attraction.title />
            </div>
            <div class="showcase__body">
                <h2>{attraction.title}</h2>
                <p class="showcase__lead">{attraction.description}</p>
                {attraction.long_description.map(|text| view! { <p class="showcase__long">{text}</p> })}

                <div class="feature-grid">
                    {attraction
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="feature-chip">
                                    <span class="feature-chip__label">"Feature"</span>
                                    <span class="feature-chip__name">{*feature}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                {attraction.details.map(|details| {
                    view! {
                        <div class="info-grid info-grid--two">
                            {details
                                .entries()
                                .into_iter()
                                .map(|(label, value)| view! { <InfoCell label=label value=value /> })
                                .collect_view()}
                        </div>
                    }
                })}

                {attraction.schedule.map(|schedule| {
                    view! {
                        <div class="showcase__schedule">
                            <h3>"Show Times"</h3>
                            <div class="info-grid info-grid--three">
                                {schedule
                                    .entries()
                                    .into_iter()
                                    .map(|(label, value)| view! { <InfoCell label=label value=value /> })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })}
            </div>
        </Reveal>
    }
}

#[component]
fn InfoCell(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="info-cell">
            <span class="info-cell__label">{label}</span>
            <span class="info-cell__value">{value}</span>
        </div>
    }
}
