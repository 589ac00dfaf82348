mod state;

pub use state::{build_browser, create_state, empty_state_message, DinopediaBrowser, DinopediaQuery};

use contracts::domain::a001_dinosaur::Dinosaur;
use contracts::shared::catalog::{RecordId, ScrollLockPort, ViewMode, ALL_CATEGORY_ID};
use contracts::shared::format::species_count_label;
use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::details::DinosaurDetails;
use crate::layout::global_context::use_site_context;
use crate::shared::components::{CtaSection, ScrollIndicator};
use crate::shared::icons::icon;
use crate::shared::media_query::MediaQueryViewport;
use crate::shared::scroll_lock::BodyScrollLock;

/// `/dinopedia`: the filterable species catalog.
#[component]
pub fn DinopediaPage() -> impl IntoView {
    let site = use_site_context();
    let search = use_location().search.get_untracked();
    let state = create_state(&MediaQueryViewport(site.is_narrow), &search);

    // Later viewport changes never override the seeded mode.
    Effect::new(move |_| {
        let narrow = site.is_narrow.get();
        state.update(|browser| browser.observe_viewport(narrow));
    });

    // Body scroll lock and edge gradients follow the detail overlay.
    Effect::new(move |_| {
        let locked = state.with(|browser| {
            browser.sync_scroll_lock(&mut BodyScrollLock);
            browser.scroll_lock_active()
        });
        site.gradients_hidden.set(locked);
    });
    on_cleanup(move || {
        BodyScrollLock.set_locked(false);
        site.gradients_hidden.set(false);
    });

    let close_detail = move || state.update(|browser| browser.close_detail());

    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && state.with_untracked(|browser| browser.detail().is_open()) {
            close_detail();
        }
    });
    on_cleanup(move || escape.remove());

    let open_record = move |id: RecordId| {
        state.update(|browser| {
            if let Err(err) = browser.open_record(id) {
                log::warn!("{}", err);
                debug_assert!(false, "{}", err);
            }
        });
    };

    view! {
        <div class="dinopedia">
            <section class="page-hero page-hero--compact">
                <div class="container">
                    <span class="eyebrow">"Discover Prehistoric Life"</span>
                    <h1 class="display">
                        <span class="display__lead">"Meet The"</span>
                        <span class="display__accent">"Giants"</span>
                    </h1>
                </div>
            </section>

            <section class="gallery">
                <div class="container">
                    <div class="gallery__header">
                        <h2 class="gallery__title">"Browse Species"</h2>
                        <ViewModeSwitch state=state />
                    </div>

                    <CategoryChips state=state />

                    <div class="gallery__count">
                        {move || state.with(|browser| species_count_label(browser.visible_records().len()))}
                    </div>

                    <div class=move || {
                        if state.with(|browser| browser.view_mode().is_compact()) {
                            "species-grid species-grid--compact"
                        } else {
                            "species-grid"
                        }
                    }>
                        <Show
                            when=move || state.with(|browser| !browser.visible_records().is_empty())
                            fallback=move || view! { <EmptyState state=state /> }
                        >
                            <For
                                each=move || {
                                    state.with(|browser| {
                                        browser.visible_records().into_iter().copied().collect::<Vec<Dinosaur>>()
                                    })
                                }
                                key=|dino| dino.id
                                children=move |dino: Dinosaur| {
                                    let compact = Signal::derive(move || {
                                        state.with(|browser| browser.view_mode().is_compact())
                                    });
                                    view! {
                                        <SpeciesCard
                                            dino=dino
                                            compact=compact
                                            on_open=Callback::new(move |_| open_record(dino.id))
                                        />
                                    }
                                }
                            />
                        </Show>
                    </div>
                </div>
            </section>

            <Show when=move || state.with(|browser| browser.detail().is_open())>
                {move || {
                    state
                        .with(|browser| browser.active_record().copied())
                        .map(|dino| {
                            view! {
                                <DinosaurDetails
                                    dino=dino
                                    on_close=Callback::new(move |_| close_detail())
                                />
                            }
                        })
                }}
            </Show>

            <CtaSection />
            <div class="dinopedia__scroll-hint">
                <ScrollIndicator />
            </div>
        </div>
    }
}

#[component]
fn ViewModeSwitch(state: RwSignal<DinopediaBrowser>) -> impl IntoView {
    let mode = move || state.with(|browser| browser.view_mode());
    let button_class = move |target: ViewMode| {
        if mode() == target {
            "view-switch__button view-switch__button--active"
        } else {
            "view-switch__button"
        }
    };

    view! {
        <div class="view-switch">
            <button
                class=move || button_class(ViewMode::Expanded)
                aria-label="Gallery view"
                on:click=move |_| state.update(|browser| browser.set_view_mode(ViewMode::Expanded))
            >
                {icon("grid")}
            </button>
            <button
                class=move || button_class(ViewMode::Compact)
                aria-label="List view"
                on:click=move |_| state.update(|browser| browser.set_view_mode(ViewMode::Compact))
            >
                {icon("list")}
            </button>
        </div>
    }
}

#[component]
fn CategoryChips(state: RwSignal<DinopediaBrowser>) -> impl IntoView {
    let options = state.with_untracked(|browser| browser.categories().to_vec());

    view! {
        <div class="chips">
            <div class="chips__track">
                {options
                    .into_iter()
                    .map(|option| {
                        let id = option.id.clone();
                        let is_selected = move || state.with(|browser| browser.selection().as_str() == id);
                        let target = option.id.clone();
                        view! {
                            <button
                                class=move || if is_selected() { "chip chip--selected" } else { "chip" }
                                on:click=move |_| {
                                    state.update(|browser| {
                                        browser.select_category(&target);
                                    });
                                }
                            >
                                {option.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SpeciesCard(dino: Dinosaur, compact: Signal<bool>, on_open: Callback<()>) -> impl IntoView {
    view! {
        <div
            class=move || if compact.get() { "species-card species-card--compact" } else { "species-card" }
            on:click=move |_| on_open.run(())
        >
            <Show
                when=move || compact.get()
                fallback=move || view! { <GalleryCardBody dino=dino /> }
            >
                <div class="species-row">
                    <img class="species-row__thumb" src=dino.image alt=dino.name />
                    <div class="species-row__text">
                        <span class="tag">{dino.category}</span>
                        <h3 class="species-row__name">{dino.name}</h3>
                        <p class="species-row__size">{dino.size_summary()}</p>
                    </div>
                    <span class="species-row__arrow">{icon("arrow-right")}</span>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn GalleryCardBody(dino: Dinosaur) -> impl IntoView {
    view! {
        <div class="species-tile">
            <div class="species-tile__image">
                <img src=dino.image alt=dino.name loading="lazy" />
            </div>
            <div class="species-tile__info">
                <span class="tag">{dino.category}</span>
                <h3 class="species-tile__name">{dino.name}</h3>
                <div class="species-tile__stats">
                    <div>"Length: " {dino.stats.length}</div>
                    <div>"Weight: " {dino.stats.weight}</div>
                </div>
            </div>
            <div class="species-tile__overlay">
                <div class="species-tile__overlay-body">
                    <span class="tag tag--amber">{dino.category}</span>
                    <h3>{dino.name}</h3>
                    <p>{dino.description}</p>
                </div>
                <div class="species-tile__cta">
                    <span>"View Details"</span>
                    <span class="species-tile__cta-icon">{icon("arrow-right")}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn EmptyState(state: RwSignal<DinopediaBrowser>) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon("search")}</div>
            <h3>"No Dinosaurs Found"</h3>
            <p>{move || state.with(empty_state_message)}</p>
            <button
                class="empty-state__reset"
                on:click=move |_| {
                    state.update(|browser| {
                        browser.select_category(ALL_CATEGORY_ID);
                    });
                }
            >
                "View All Species"
                {icon("arrow-right")}
            </button>
        </div>
    }
}
