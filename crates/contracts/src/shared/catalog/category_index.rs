use super::store::{CatalogRecord, CatalogStore};

pub const ALL_CATEGORY_ID: &str = "all";
pub const ALL_CATEGORY_LABEL: &str = "All Species";

/// One filter chip: lower-cased `id`, display-cased `label`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub id: String,
    pub label: String,
}

impl CategoryOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Distinct categories of a catalog in first-seen order, with the
/// `all` wildcard in front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryIndex {
    options: Vec<CategoryOption>,
}

impl CategoryIndex {
    pub fn build<R: CatalogRecord>(store: &CatalogStore<'_, R>) -> Self {
        Self {
            options: categories(store),
        }
    }

    pub fn options(&self) -> &[CategoryOption] {
        &self.options
    }

    pub fn contains(&self, id: &str) -> bool {
        self.options.iter().any(|o| o.id == id)
    }

    pub fn label_of(&self, id: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.label.as_str())
    }
}

/// Pure derivation of the filter chips from a catalog snapshot.
///
/// The label of a category is the casing of its first occurrence.
pub fn categories<R: CatalogRecord>(store: &CatalogStore<'_, R>) -> Vec<CategoryOption> {
    let mut options = vec![CategoryOption::new(ALL_CATEGORY_ID, ALL_CATEGORY_LABEL)];
    for record in store.all() {
        let label = record.category();
        let id = label.to_lowercase();
        if !options.iter().any(|o| o.id == id) {
            options.push(CategoryOption::new(id, label));
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::super::store::test_support::{item, Item};
    use super::*;

    #[test]
    fn test_all_comes_first_then_first_seen_order() {
        let records = [
            item(1, "Theropods"),
            item(2, "Sauropods"),
            item(3, "Theropods"),
            item(4, "Pterosaurs"),
        ];
        let got = categories(&CatalogStore::new(&records));
        assert_eq!(
            got,
            vec![
                CategoryOption::new("all", "All Species"),
                CategoryOption::new("theropods", "Theropods"),
                CategoryOption::new("sauropods", "Sauropods"),
                CategoryOption::new("pterosaurs", "Pterosaurs"),
            ]
        );
    }

    #[test]
    fn test_case_variants_collapse_to_first_label() {
        let records = [item(1, "Theropods"), item(2, "THEROPODS")];
        let got = categories(&CatalogStore::new(&records));
        assert_eq!(got.len(), 2);
        assert_eq!(got[1].label, "Theropods");
    }

    #[test]
    fn test_empty_catalog_has_only_all() {
        let store: CatalogStore<'_, Item> = CatalogStore::new(&[]);
        let index = CategoryIndex::build(&store);
        assert_eq!(index.options().len(), 1);
        assert_eq!(index.options()[0].id, ALL_CATEGORY_ID);
        assert!(index.contains("all"));
        assert!(!index.contains("theropods"));
    }

    #[test]
    fn test_label_of() {
        let records = [item(1, "Sauropods")];
        let index = CategoryIndex::build(&CatalogStore::new(&records));
        assert_eq!(index.label_of("sauropods"), Some("Sauropods"));
        assert_eq!(index.label_of("all"), Some("All Species"));
        assert_eq!(index.label_of("nope"), None);
    }
}
