use super::category_index::{CategoryIndex, CategoryOption};
use super::detail_state::DetailState;
use super::error::InvalidReferenceError;
use super::filter::{filter, CategoryId};
use super::ports::{ScrollLockPort, ViewportSignal};
use super::store::{CatalogRecord, CatalogStore, RecordId};
use super::view_mode::{ViewMode, ViewModeToggle};

/// One view session over a catalog: filter selection, detail overlay and
/// view-mode preference.
///
/// Every transition is synchronous and completes in O(1) apart from the
/// linear filter scan.
#[derive(Debug, Clone)]
pub struct CatalogBrowser<'a, R> {
    store: CatalogStore<'a, R>,
    index: CategoryIndex,
    selection: CategoryId,
    detail: DetailState<'a, R>,
    view_mode: ViewModeToggle,
}

impl<'a, R: CatalogRecord> CatalogBrowser<'a, R> {
    /// A session whose view mode has not been seeded from the viewport yet.
    pub fn new(store: CatalogStore<'a, R>) -> Self {
        let index = CategoryIndex::build(&store);
        Self::from_parts(store, index, ViewModeToggle::new())
    }

    /// A session that samples `viewport` once to pick its default density.
    pub fn with_viewport<V: ViewportSignal + ?Sized>(
        store: CatalogStore<'a, R>,
        viewport: &V,
    ) -> Self {
        let index = CategoryIndex::build(&store);
        Self::from_parts(store, index, ViewModeToggle::from_viewport(viewport))
    }

    /// Like [`Self::with_viewport`], reusing an index built once for `store`.
    ///
    /// `index` is the filter vocabulary of the session: categories it does
    /// not list cannot be selected.
    pub fn with_index<V: ViewportSignal + ?Sized>(
        store: CatalogStore<'a, R>,
        index: CategoryIndex,
        viewport: &V,
    ) -> Self {
        Self::from_parts(store, index, ViewModeToggle::from_viewport(viewport))
    }

    fn from_parts(
        store: CatalogStore<'a, R>,
        index: CategoryIndex,
        view_mode: ViewModeToggle,
    ) -> Self {
        Self {
            store,
            index,
            selection: CategoryId::all(),
            detail: DetailState::Closed,
            view_mode,
        }
    }

    // ------------------------------------------------------------------
    // Inbound events
    // ------------------------------------------------------------------

    /// Switches the filter. Ids missing from the category index are ignored
    /// and `false` is returned.
    pub fn select_category(&mut self, id: &str) -> bool {
        let candidate = CategoryId::new(id);
        if !self.index.contains(candidate.as_str()) {
            return false;
        }
        self.selection = candidate;
        true
    }

    /// Opens the record with `id` in the detail overlay.
    ///
    /// Any record of the catalog is accepted, whether or not the current
    /// filter shows it. On error the detail state is left untouched.
    pub fn open_record(&mut self, id: RecordId) -> Result<&'a R, InvalidReferenceError> {
        let record = self.store.get(id).ok_or(InvalidReferenceError { id })?;
        self.detail.select(record);
        Ok(record)
    }

    pub fn close_detail(&mut self) {
        self.detail.close();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode.set_mode(mode);
    }

    /// Feeds a viewport reading; only the first one ever matters.
    pub fn observe_viewport(&mut self, narrow: bool) {
        self.view_mode.observe_viewport(narrow);
    }

    // ------------------------------------------------------------------
    // Outbound state
    // ------------------------------------------------------------------

    pub fn categories(&self) -> &[CategoryOption] {
        self.index.options()
    }

    pub fn selection(&self) -> &CategoryId {
        &self.selection
    }

    /// Label of the current selection, e.g. `"Theropods"` or `"All Species"`.
    pub fn selection_label(&self) -> &str {
        self.index
            .label_of(self.selection.as_str())
            .unwrap_or(self.selection.as_str())
    }

    pub fn visible_records(&self) -> Vec<&'a R> {
        filter(&self.store, &self.selection)
    }

    pub fn detail(&self) -> DetailState<'a, R> {
        self.detail
    }

    pub fn active_record(&self) -> Option<&'a R> {
        self.detail.active()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode.current_mode()
    }

    /// True exactly while a record is open.
    pub fn scroll_lock_active(&self) -> bool {
        self.detail.is_open()
    }

    /// Pushes the current scroll-lock level to the presentation layer.
    pub fn sync_scroll_lock<P: ScrollLockPort + ?Sized>(&self, port: &mut P) {
        port.set_locked(self.scroll_lock_active());
    }
}

#[cfg(test)]
mod tests {
    use super::super::store::test_support::{item, Item};
    use super::*;

    #[derive(Default)]
    struct RecordingLock {
        calls: Vec<bool>,
    }

    impl RecordingLock {
        fn locked(&self) -> bool {
            self.calls.last().copied().unwrap_or(false)
        }
    }

    impl ScrollLockPort for RecordingLock {
        fn set_locked(&mut self, locked: bool) {
            self.calls.push(locked);
        }
    }

    fn six() -> [Item; 6] {
        [
            item(1, "Theropods"),
            item(2, "Theropods"),
            item(3, "Sauropods"),
            item(4, "Pterosaurs"),
            item(5, "Sauropods"),
            item(6, "Theropods"),
        ]
    }

    fn visible_ids(browser: &CatalogBrowser<'_, Item>) -> Vec<u32> {
        browser.visible_records().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_initial_state() {
        let records = six();
        let browser = CatalogBrowser::new(CatalogStore::new(&records));
        assert!(browser.selection().is_all());
        assert_eq!(browser.selection_label(), "All Species");
        assert_eq!(visible_ids(&browser), vec![1, 2, 3, 4, 5, 6]);
        assert!(browser.active_record().is_none());
        assert!(!browser.scroll_lock_active());
        assert_eq!(browser.view_mode(), ViewMode::Expanded);
        assert_eq!(browser.categories().len(), 4);
    }

    #[test]
    fn test_select_category_filters() {
        let records = six();
        let mut browser = CatalogBrowser::new(CatalogStore::new(&records));
        assert!(browser.select_category("sauropods"));
        assert_eq!(visible_ids(&browser), vec![3, 5]);
        assert_eq!(browser.selection_label(), "Sauropods");

        assert!(browser.select_category("all"));
        assert_eq!(visible_ids(&browser), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_unknown_category_is_ignored() {
        let records = six();
        let mut browser = CatalogBrowser::new(CatalogStore::new(&records));
        browser.select_category("pterosaurs");
        assert!(!browser.select_category("hadrosauridae"));
        assert_eq!(browser.selection().as_str(), "pterosaurs");
        assert_eq!(visible_ids(&browser), vec![4]);
    }

    #[test]
    fn test_open_replace_close_scenario() {
        let records = six();
        let mut browser = CatalogBrowser::new(CatalogStore::new(&records));

        assert_eq!(browser.open_record(2).map(|r| r.id), Ok(2));
        assert_eq!(browser.active_record().map(|r| r.id), Some(2));

        browser.open_record(5).unwrap();
        assert_eq!(browser.active_record().map(|r| r.id), Some(5));
        assert!(browser.scroll_lock_active());

        browser.close_detail();
        assert!(browser.active_record().is_none());
        browser.close_detail();
        assert!(browser.active_record().is_none());
        assert!(!browser.scroll_lock_active());
    }

    #[test]
    fn test_open_unknown_record_leaves_state_unchanged() {
        let records = six();
        let mut browser = CatalogBrowser::new(CatalogStore::new(&records));

        assert_eq!(
            browser.open_record(9999).map(|r| r.id),
            Err(InvalidReferenceError { id: 9999 })
        );
        assert!(browser.active_record().is_none());

        browser.open_record(3).unwrap();
        assert!(browser.open_record(9999).is_err());
        assert_eq!(browser.active_record().map(|r| r.id), Some(3));
    }

    #[test]
    fn test_open_record_outside_current_filter() {
        let records = six();
        let mut browser = CatalogBrowser::new(CatalogStore::new(&records));
        browser.select_category("pterosaurs");
        assert!(browser.open_record(1).is_ok());
        assert_eq!(visible_ids(&browser), vec![4]);
    }

    #[test]
    fn test_refiltering_keeps_open_record() {
        let records = six();
        let mut browser = CatalogBrowser::new(CatalogStore::new(&records));
        browser.open_record(1).unwrap();
        browser.select_category("sauropods");
        assert_eq!(browser.active_record().map(|r| r.id), Some(1));
    }

    #[test]
    fn test_scroll_lock_follows_detail_state() {
        let records = six();
        let mut browser = CatalogBrowser::new(CatalogStore::new(&records));
        let mut lock = RecordingLock::default();

        for id in [1, 2, 3] {
            browser.open_record(id).unwrap();
            browser.sync_scroll_lock(&mut lock);
            assert!(lock.locked());
            assert!(browser.scroll_lock_active());
        }
        for _ in 0..2 {
            browser.close_detail();
            browser.sync_scroll_lock(&mut lock);
            assert!(!lock.locked());
            assert_eq!(browser.scroll_lock_active(), browser.detail().is_open());
        }
        // Three overlapping opens are released by a single close.
        assert_eq!(lock.calls, vec![true, true, true, false, false]);
    }

    #[test]
    fn test_viewport_seeds_compact_once() {
        let records = six();
        let mut browser = CatalogBrowser::with_viewport(CatalogStore::new(&records), &true);
        assert_eq!(browser.view_mode(), ViewMode::Compact);

        browser.set_view_mode(ViewMode::Expanded);
        assert_eq!(browser.view_mode(), ViewMode::Expanded);

        browser.observe_viewport(false);
        browser.observe_viewport(true);
        assert_eq!(browser.view_mode(), ViewMode::Expanded);
    }

    #[test]
    fn test_wide_viewport_keeps_expanded() {
        let records = six();
        let browser = CatalogBrowser::with_viewport(CatalogStore::new(&records), &false);
        assert_eq!(browser.view_mode(), ViewMode::Expanded);
    }

    #[test]
    fn test_with_index_uses_given_categories() {
        let records = six();
        let store = CatalogStore::new(&records);
        let index = CategoryIndex::build(&CatalogStore::new(&records[..3]));

        let mut browser = CatalogBrowser::with_index(store, index, &true);
        assert_eq!(browser.categories().len(), 3);
        assert_eq!(browser.view_mode(), ViewMode::Compact);
        assert!(browser.select_category("sauropods"));
        assert_eq!(visible_ids(&browser), vec![3, 5]);
        assert!(!browser.select_category("pterosaurs"));
        assert_eq!(browser.selection_label(), "Sauropods");
    }

    #[test]
    fn test_empty_catalog_browser() {
        let browser: CatalogBrowser<'_, Item> = CatalogBrowser::new(CatalogStore::new(&[]));
        assert_eq!(browser.categories().len(), 1);
        assert!(browser.visible_records().is_empty());
    }
}
