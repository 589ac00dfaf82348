use super::store::CatalogRecord;

/// Which record, if any, is open in the detail overlay.
///
/// ```text
/// Closed ──select(r)──► Open(r) ──select(r')──► Open(r')
///   ▲  │                   │
///   │  └──close (no-op)    │
///   └──────────close───────┘
/// ```
#[derive(Debug)]
pub enum DetailState<'a, R> {
    Closed,
    Open(&'a R),
}

impl<R> Clone for DetailState<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for DetailState<'_, R> {}

impl<R> Default for DetailState<'_, R> {
    fn default() -> Self {
        DetailState::Closed
    }
}

impl<'a, R: CatalogRecord> DetailState<'a, R> {
    /// Opens `record`, replacing whatever was open. Never passes through `Closed`.
    pub fn select(&mut self, record: &'a R) {
        *self = DetailState::Open(record);
    }

    /// Idempotent.
    pub fn close(&mut self) {
        *self = DetailState::Closed;
    }

    pub fn active(&self) -> Option<&'a R> {
        match *self {
            DetailState::Open(record) => Some(record),
            DetailState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailState::Open(_))
    }
}

#[cfg(test)]
mod tests {
    use super::super::store::test_support::{item, Item};
    use super::*;

    #[test]
    fn test_starts_closed() {
        let state: DetailState<'_, Item> = DetailState::default();
        assert!(!state.is_open());
        assert_eq!(state.active().map(|r| r.id), None);
    }

    #[test]
    fn test_select_replaces_directly() {
        let records = [item(2, "A"), item(5, "B")];
        let mut state = DetailState::default();

        state.select(&records[0]);
        assert_eq!(state.active().map(|r| r.id), Some(2));

        state.select(&records[1]);
        assert!(state.is_open());
        assert_eq!(state.active().map(|r| r.id), Some(5));

        state.close();
        assert_eq!(state.active().map(|r| r.id), None);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut state: DetailState<'_, Item> = DetailState::Closed;
        for _ in 0..5 {
            state.close();
            assert!(!state.is_open());
        }
    }

    #[test]
    fn test_reenterable() {
        let records = [item(1, "A")];
        let mut state = DetailState::default();
        for _ in 0..3 {
            state.select(&records[0]);
            assert!(state.is_open());
            state.close();
            assert!(!state.is_open());
        }
    }
}
