use contracts::domain::a002_dino_category::{DinoCategory, DINO_CATEGORIES};
use contracts::shared::format::two_digit_index;
use leptos::prelude::*;

use crate::layout::global_context::use_site_context;
use crate::shared::components::Button;
use crate::shared::icons::icon;

const NARROW_CATEGORY_LIMIT: usize = 3;
const SPECIES_PREVIEW: usize = 4;

fn displayed_categories(is_narrow: bool) -> &'static [DinoCategory] {
    if is_narrow {
        &DINO_CATEGORIES[..NARROW_CATEGORY_LIMIT]
    } else {
        &DINO_CATEGORIES
    }
}

/// Accordion rule: the `+` button opens its card and closes any other;
/// pressing it again collapses.
fn toggle_expanded(current: Option<u32>, clicked: u32) -> Option<u32> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Dinopedia link pre-filtered to the category.
fn explore_href(category: &DinoCategory) -> String {
    format!(
        "/dinopedia?category={}",
        urlencoding::encode(&category.filter_id())
    )
}

/// Home page "Discover Prehistory" accordion.
#[component]
pub fn CategoryTeaser() -> impl IntoView {
    let site = use_site_context();
    let expanded = RwSignal::new(None::<u32>);

    view! {
        <section class="category-teaser">
            <div class="container">
                <div class="category-teaser__header reveal">
                    <span class="eyebrow">"Knowledge Base"</span>
                    <h2 class="display">
                        <span class="display__lead">"Discover"</span>
                        <span class="display__accent display__accent--muted">"Prehistory"</span>
                    </h2>
                    <p class="lead">
                        "Embark on a journey through time. Explore our comprehensive database of prehistoric creatures and ancient ecosystems."
                    </p>
                </div>

                <div class="category-teaser__list">
                    {move || {
                        displayed_categories(site.is_narrow.get())
                            .iter()
                            .enumerate()
                            .map(|(index, category)| {
                                let id = category.id;
                                let is_open = move || expanded.get() == Some(id);
                                view! {
                                    <div class=move || {
                                        if is_open() { "category-card category-card--open" } else { "category-card" }
                                    }>
                                        <div class="category-card__media">
                                            <img src=category.image alt=category.title />
                                            <div class="category-card__shade"></div>
                                        </div>
                                        <div class="category-card__content">
                                            <div class="category-card__header">
                                                <div>
                                                    <span class="category-card__index">{two_digit_index(index)}</span>
                                                    <h3>{category.title}</h3>
                                                </div>
                                                <button
                                                    class="category-card__toggle"
                                                    aria-label=format!("Toggle {}", category.title)
                                                    aria-expanded=move || is_open().to_string()
                                                    on:click=move |_| expanded.update(|current| *current = toggle_expanded(*current, id))
                                                >
                                                    {icon("plus")}
                                                </button>
                                            </div>
                                            <div class="category-card__details">
                                                <p>{category.description}</p>
                                                <div class="category-card__species">
                                                    {category
                                                        .notable_species(SPECIES_PREVIEW)
                                                        .iter()
                                                        .map(|species| {
                                                            view! {
                                                                <div class="species-chip">
                                                                    <span class="species-chip__label">"Species"</span>
                                                                    <span class="species-chip__name">{*species}</span>
                                                                </div>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                                <Button href=explore_href(category) class="button--glass">
                                                    "EXPLORE CATEGORY"
                                                </Button>
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
                        <Button href="/dinopedia">"View All Categories"</Button>
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_exclusive() {
        assert_eq!(toggle_expanded(None, 2), Some(2));
        assert_eq!(toggle_expanded(Some(2), 5), Some(5));
        assert_eq!(toggle_expanded(Some(5), 5), None);
    }

    #[test]
    fn test_narrow_shows_first_three() {
        let titles: Vec<_> = displayed_categories(true).iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Theropods", "Sauropods", "Ornithischians"]);
        assert_eq!(displayed_categories(false).len(), 9);
    }

    #[test]
    fn test_explore_href_targets_filter() {
        assert_eq!(explore_href(&DINO_CATEGORIES[0]), "/dinopedia?category=theropods");
    }
}
