use contracts::domain::a001_dinosaur::Dinosaur;
use leptos::prelude::*;

use crate::shared::icons::{icon, stat_icon};

const HABITAT_NOTE: &str = "These magnificent creatures roamed the Earth during the late Cretaceous period, approximately 68 to 66 million years ago. They were highly adapted to their environment and displayed complex social behaviors.";

/// Full-screen species sheet. Closing is reported through `on_close`; the
/// page owns the open/closed state.
#[component]
pub fn DinosaurDetails(dino: Dinosaur, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="detail-backdrop" on:click=move |_| on_close.run(())></div>
        <div class="detail" role="dialog" aria-modal="true" aria-label=dino.name>
            <div class="detail__frame">
                <div class="detail__mobile-close">
                    <button on:click=move |_| on_close.run(())>
                        {icon("x")}
                        <span>"Close"</span>
                    </button>
                </div>
                <button class="detail__close" on:click=move |_| on_close.run(())>
                    <span class="detail__close-hint">"Press ESC to close"</span>
                    <span class="detail__close-icon">{icon("x")}</span>
                </button>

                <div class="detail__sheet">
                    <div class="detail__media">
                        <img src=dino.image alt=dino.name />
                        <div class="detail__media-shade"></div>
                        <span class="detail__category">{dino.category}</span>
                        <div class="detail__stats">
                            {dino
                                .stats
                                .entries()
                                .into_iter()
                                .enumerate()
                                .map(|(index, (key, value))| {
                                    view! {
                                        <div
                                            class="detail__stat reveal"
                                            style=format!("animation-delay: {}ms;", 300 + index * 100)
                                        >
                                            <span class="detail__stat-icon">{stat_icon(key)}</span>
                                            <div>
                                                <span class="detail__stat-key">{key}</span>
                                                <span class="detail__stat-value">{value}</span>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="detail__body">
                        <div class="detail__heading">
                            <h2>{dino.name}</h2>
                            <div class="detail__rule"></div>
                        </div>
                        <p class="detail__description">{dino.description}</p>
                        <div class="detail__section">
                            <h3>"Habitat & Behavior"</h3>
                            <p>{HABITAT_NOTE}</p>
                        </div>
                        <div class="detail__actions">
                            <button class="detail__ar" disabled=true>
                                "View in AR"
                                <span class="detail__tooltip">"Coming soon"</span>
                            </button>
                            <a
                                class="detail__wiki"
                                href=dino.wikipedia_url()
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                "Read on Wikipedia"
                                {icon("arrow-right")}
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
