use contracts::domain::a001_dinosaur::{dinopedia, Dinosaur, DINOPEDIA_CATEGORIES};
use contracts::shared::catalog::{CatalogBrowser, ViewportSignal};
use leptos::prelude::*;
use serde::Deserialize;

pub type DinopediaBrowser = CatalogBrowser<'static, Dinosaur>;

/// Query string of `/dinopedia`.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct DinopediaQuery {
    #[serde(default)]
    pub category: Option<String>,
}

impl DinopediaQuery {
    /// Parses `location.search`; a malformed query counts as empty.
    pub fn parse(search: &str) -> Self {
        let raw = search.trim_start_matches('?');
        if raw.is_empty() {
            return Self::default();
        }
        serde_qs::from_str(raw).unwrap_or_else(|err| {
            log::warn!("ignoring malformed query {:?}: {}", raw, err);
            Self::default()
        })
    }
}

/// Browser session for the page, with the view mode seeded from `viewport`
/// and the filter seeded from `?category=`.
pub fn build_browser<V: ViewportSignal + ?Sized>(viewport: &V, search: &str) -> DinopediaBrowser {
    let mut browser =
        CatalogBrowser::with_index(dinopedia(), DINOPEDIA_CATEGORIES.clone(), viewport);
    if let Some(category) = DinopediaQuery::parse(search).category {
        if !browser.select_category(&category) {
            log::warn!("unknown category {:?} in URL, showing all species", category);
        }
    }
    browser
}

pub fn create_state<V: ViewportSignal + ?Sized>(
    viewport: &V,
    search: &str,
) -> RwSignal<DinopediaBrowser> {
    RwSignal::new(build_browser(viewport, search))
}

/// Body text of the "No Dinosaurs Found" panel.
pub fn empty_state_message(browser: &DinopediaBrowser) -> String {
    let name = if browser.selection().is_all() {
        "selected"
    } else {
        browser.selection_label()
    };
    format!(
        "There are no dinosaurs in the {} category. Try selecting a different category.",
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::catalog::ViewMode;

    #[test]
    fn test_parse_query() {
        assert_eq!(DinopediaQuery::parse(""), DinopediaQuery::default());
        assert_eq!(DinopediaQuery::parse("?"), DinopediaQuery::default());
        assert_eq!(
            DinopediaQuery::parse("?category=theropods").category.as_deref(),
            Some("theropods")
        );
        assert_eq!(
            DinopediaQuery::parse("?utm_source=x&category=Pterosaurs")
                .category
                .as_deref(),
            Some("Pterosaurs")
        );
    }

    #[test]
    fn test_build_browser_seeds_filter_and_mode() {
        let browser = build_browser(&true, "?category=Sauropods");
        assert_eq!(browser.selection().as_str(), "sauropods");
        assert_eq!(browser.view_mode(), ViewMode::Compact);
        assert_eq!(browser.visible_records().len(), 3);

        let browser = build_browser(&false, "");
        assert!(browser.selection().is_all());
        assert_eq!(browser.view_mode(), ViewMode::Expanded);
        assert_eq!(browser.visible_records().len(), 23);
    }

    #[test]
    fn test_unknown_category_in_url_shows_all() {
        let browser = build_browser(&false, "?category=dragons");
        assert!(browser.selection().is_all());
        assert!(!browser.detail().is_open());
    }

    #[test]
    fn test_build_browser_reuses_shared_index() {
        let browser = build_browser(&false, "");
        assert_eq!(browser.categories(), DINOPEDIA_CATEGORIES.options());
        assert_eq!(browser.categories()[0].id, "all");
    }

    #[test]
    fn test_empty_state_message() {
        let browser = build_browser(&false, "?category=theropods");
        assert_eq!(
            empty_state_message(&browser),
            "There are no dinosaurs in the Theropods category. Try selecting a different category."
        );

        let browser = build_browser(&false, "");
        assert!(empty_state_message(&browser).contains("the selected category"));
    }
}
