use std::collections::HashSet;

use super::error::CatalogError;

/// Stable identity of a catalog record for the lifetime of the process.
pub type RecordId = u32;

/// What the browser needs to know about a record.
pub trait CatalogRecord {
    fn id(&self) -> RecordId;

    /// Display-cased category label, e.g. `"Theropods"`.
    fn category(&self) -> &str;
}

/// Immutable, ordered collection of records.
///
/// Order is declaration order and never changes; there are no mutating
/// operations.
#[derive(Debug)]
pub struct CatalogStore<'a, R> {
    records: &'a [R],
}

impl<R> Clone for CatalogStore<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for CatalogStore<'_, R> {}

impl<'a, R: CatalogRecord> CatalogStore<'a, R> {
    pub const fn new(records: &'a [R]) -> Self {
        Self { records }
    }

    pub fn all(&self) -> &'a [R] {
        self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&'a R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Checks the identity invariants: ids positive and unique, categories non-empty.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::with_capacity(self.records.len());
        for record in self.records {
            let id = record.id();
            if id == 0 {
                return Err(CatalogError::ZeroId);
            }
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateId(id));
            }
            if record.category().trim().is_empty() {
                return Err(CatalogError::EmptyCategory(id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::{CatalogRecord, RecordId};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Item {
        pub id: RecordId,
        pub category: &'static str,
    }

    impl CatalogRecord for Item {
        fn id(&self) -> RecordId {
            self.id
        }

        fn category(&self) -> &str {
            self.category
        }
    }

    pub const fn item(id: RecordId, category: &'static str) -> Item {
        Item { id, category }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::item;
    use super::*;

    #[test]
    fn test_all_keeps_declaration_order() {
        let records = [item(3, "B"), item(1, "A"), item(2, "B")];
        let store = CatalogStore::new(&records);
        let ids: Vec<_> = store.all().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_get_by_id() {
        let records = [item(1, "A"), item(2, "B")];
        let store = CatalogStore::new(&records);
        assert_eq!(store.get(2), Some(&records[1]));
        assert_eq!(store.get(9999), None);
    }

    #[test]
    fn test_validate() {
        let ok = [item(1, "A"), item(2, "B")];
        assert_eq!(CatalogStore::new(&ok).validate(), Ok(()));

        let dup = [item(1, "A"), item(1, "B")];
        assert_eq!(
            CatalogStore::new(&dup).validate(),
            Err(CatalogError::DuplicateId(1))
        );

        let zero = [item(0, "A")];
        assert_eq!(CatalogStore::new(&zero).validate(), Err(CatalogError::ZeroId));

        let blank = [item(4, " ")];
        assert_eq!(
            CatalogStore::new(&blank).validate(),
            Err(CatalogError::EmptyCategory(4))
        );
    }

    #[test]
    fn test_empty_store() {
        let store: CatalogStore<'_, super::test_support::Item> = CatalogStore::new(&[]);
        assert!(store.is_empty());
        assert_eq!(store.validate(), Ok(()));
    }
}
