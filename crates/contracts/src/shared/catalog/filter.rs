use std::fmt;

use super::category_index::ALL_CATEGORY_ID;
use super::store::{CatalogRecord, CatalogStore};

/// The selected filter chip. Always lower-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: &str) -> Self {
        Self(id.trim().to_lowercase())
    }

    pub fn all() -> Self {
        Self(ALL_CATEGORY_ID.to_string())
    }

    pub fn is_all(&self) -> bool {
        self.0 == ALL_CATEGORY_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive match against a record's category label.
    pub fn matches(&self, category: &str) -> bool {
        self.is_all() || category.to_lowercase() == self.0
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable sub-sequence of the catalog for one selection.
///
/// `all` returns the catalog as declared. An empty result is a valid
/// state the view renders as "no results".
pub fn filter<'a, R: CatalogRecord>(
    store: &CatalogStore<'a, R>,
    selection: &CategoryId,
) -> Vec<&'a R> {
    store
        .all()
        .iter()
        .filter(|record| selection.matches(record.category()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::store::test_support::{item, Item};
    use super::*;

    const SCENARIO: [Item; 3] = [
        item(1, "Theropods"),
        item(2, "Theropods"),
        item(3, "Sauropods"),
    ];

    fn ids(records: &[&Item]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    fn is_subsequence(sub: &[&Item], full: &[Item]) -> bool {
        let mut rest = full.iter();
        sub.iter().all(|s| rest.any(|f| std::ptr::eq(*s, f)))
    }

    #[test]
    fn test_scenario_theropods() {
        let store = CatalogStore::new(&SCENARIO);
        assert_eq!(ids(&filter(&store, &CategoryId::new("theropods"))), vec![1, 2]);
    }

    #[test]
    fn test_all_is_identity() {
        let records = SCENARIO;
        let store = CatalogStore::new(&records);
        let got = filter(&store, &CategoryId::all());
        assert_eq!(ids(&got), vec![1, 2, 3]);
        assert_eq!(got.len(), records.len());
        assert!(got.iter().zip(records.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let store = CatalogStore::new(&SCENARIO);
        assert!(filter(&store, &CategoryId::new("pterosaurs")).is_empty());
    }

    #[test]
    fn test_results_are_ordered_subsequences_and_sound() {
        let records = [
            item(1, "Sauropods"),
            item(2, "Theropods"),
            item(3, "Pterosaurs"),
            item(4, "Sauropods"),
            item(5, "Theropods"),
        ];
        let store = CatalogStore::new(&records);
        for selection in ["all", "sauropods", "theropods", "pterosaurs", "ornithopoda"] {
            let selection = CategoryId::new(selection);
            let got = filter(&store, &selection);
            assert!(is_subsequence(&got, &records), "{selection}");
            if !selection.is_all() {
                assert!(got
                    .iter()
                    .all(|r| r.category.to_lowercase() == selection.as_str()));
            }
        }
    }

    #[test]
    fn test_category_compare_is_case_insensitive() {
        let records = [item(1, "THEROPODS"), item(2, "theropods"), item(3, "Sauropods")];
        let store = CatalogStore::new(&records);
        assert_eq!(ids(&filter(&store, &CategoryId::new("Theropods"))), vec![1, 2]);
    }

    #[test]
    fn test_empty_catalog() {
        let store: CatalogStore<'_, Item> = CatalogStore::new(&[]);
        assert!(filter(&store, &CategoryId::all()).is_empty());
    }

    #[test]
    fn test_category_id_normalizes() {
        assert_eq!(CategoryId::new("  Sauropods ").as_str(), "sauropods");
        assert_eq!(CategoryId::default(), CategoryId::all());
        assert_eq!(CategoryId::new("ALL").to_string(), "all");
    }
}
