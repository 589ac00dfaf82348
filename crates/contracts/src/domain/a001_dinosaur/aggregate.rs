use once_cell::sync::Lazy;
use serde::Serialize;

use super::data::DINOSAURS;
use crate::shared::catalog::{CatalogRecord, CatalogStore, CategoryIndex, RecordId};

// ============================================================================
// Stats
// ============================================================================

/// Headline numbers of a species. Values are display strings with their
/// unit already attached ("12-13m", "7,000kg").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DinoStats {
    pub diet: &'static str,
    pub length: &'static str,
    pub weight: &'static str,
    pub speed: &'static str,
}

impl DinoStats {
    pub const KEYS: [&'static str; 4] = ["diet", "length", "weight", "speed"];

    /// `(key, value)` pairs in fixed order.
    pub fn entries(&self) -> [(&'static str, &'static str); 4] {
        [
            ("diet", self.diet),
            ("length", self.length),
            ("weight", self.weight),
            ("speed", self.speed),
        ]
    }
}

// ============================================================================
// Record
// ============================================================================

/// One Dinopedia species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dinosaur {
    pub id: RecordId,
    pub name: &'static str,
    /// Title of one of the `DINO_CATEGORIES`.
    pub category: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub stats: DinoStats,
}

impl Dinosaur {
    /// English Wikipedia article for the species.
    pub fn wikipedia_url(&self) -> String {
        let title = self.name.replace(' ', "_");
        format!("https://en.wikipedia.org/wiki/{}", urlencoding::encode(&title))
    }

    /// "12-13m • 7,000kg", the compact row subtitle.
    pub fn size_summary(&self) -> String {
        format!("{} \u{2022} {}", self.stats.length, self.stats.weight)
    }
}

impl CatalogRecord for Dinosaur {
    fn id(&self) -> RecordId {
        self.id
    }

    fn category(&self) -> &str {
        self.category
    }
}

/// The site-wide species catalog.
pub fn dinopedia() -> CatalogStore<'static, Dinosaur> {
    CatalogStore::new(&DINOSAURS)
}

/// Filter chips of [`dinopedia`], computed on first use.
pub static DINOPEDIA_CATEGORIES: Lazy<CategoryIndex> =
    Lazy::new(|| CategoryIndex::build(&dinopedia()));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_dino_category::DINO_CATEGORIES;
    use crate::shared::catalog::{categories, filter, CategoryId};

    #[test]
    fn test_catalog_is_valid() {
        assert_eq!(dinopedia().validate(), Ok(()));
        assert_eq!(dinopedia().len(), 23);
    }

    #[test]
    fn test_every_category_is_a_known_group() {
        for dino in dinopedia().all() {
            assert!(
                DINO_CATEGORIES.iter().any(|c| c.title == dino.category),
                "{} has unknown category {}",
                dino.name,
                dino.category
            );
        }
    }

    #[test]
    fn test_category_index_of_real_catalog() {
        let options = categories(&dinopedia());
        let ids: Vec<_> = options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "all",
                "theropods",
                "sauropods",
                "ornithischians",
                "pterosaurs",
                "stegosaurian",
                "hadrosauridae",
                "ornithopoda",
                "sauropodomorpha",
                "pachycephalosauria",
            ]
        );
        assert_eq!(options[1].label, "Theropods");
        assert_eq!(DINOPEDIA_CATEGORIES.options(), options.as_slice());
        assert_eq!(DINOPEDIA_CATEGORIES.label_of("pterosaurs"), Some("Pterosaurs"));
    }

    #[test]
    fn test_theropods_filter() {
        let got: Vec<_> = filter(&dinopedia(), &CategoryId::new("theropods"))
            .iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(
            got,
            vec![
                "Tyrannosaurus Rex",
                "Albertosaurus",
                "Velociraptor",
                "Deinonychus",
                "Allosaurus"
            ]
        );
    }

    #[test]
    fn test_stats_order() {
        let rex = dinopedia().get(1).unwrap();
        assert_eq!(
            rex.stats.entries(),
            [
                ("diet", "Carnivore"),
                ("length", "12-13m"),
                ("weight", "7,000kg"),
                ("speed", "30 km/h"),
            ]
        );
        let json = serde_json::to_string(&rex.stats).unwrap();
        assert_eq!(
            json,
            r#"{"diet":"Carnivore","length":"12-13m","weight":"7,000kg","speed":"30 km/h"}"#
        );
        let keys: Vec<_> = rex.stats.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, DinoStats::KEYS);
    }

    #[test]
    fn test_wikipedia_url() {
        let rex = dinopedia().get(1).unwrap();
        assert_eq!(
            rex.wikipedia_url(),
            "https://en.wikipedia.org/wiki/Tyrannosaurus_Rex"
        );
        let raptor = dinopedia().get(3).unwrap();
        assert_eq!(raptor.wikipedia_url(), "https://en.wikipedia.org/wiki/Velociraptor");
    }

    #[test]
    fn test_size_summary() {
        let rex = dinopedia().get(1).unwrap();
        assert_eq!(rex.size_summary(), "12-13m \u{2022} 7,000kg");
    }
}
