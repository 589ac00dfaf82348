//! Dinopedia catalog browser.
//!
//! Data flow:
//!
//! ```text
//! CatalogStore ──► CategoryIndex ──► filter(selection) ──► presentation
//!      │
//!      └────────► DetailState (at most one open record)
//! ViewportSignal ──► ViewModeToggle (seeded once)
//! ```
//!
//! [`CatalogBrowser`] bundles these into one view-session object. It never
//! touches presentation state: the frontend reads its outbound state and
//! implements [`ScrollLockPort`] / [`ViewportSignal`].

pub mod browser;
pub mod category_index;
pub mod detail_state;
pub mod error;
pub mod filter;
pub mod ports;
pub mod store;
pub mod view_mode;

pub use browser::CatalogBrowser;
pub use category_index::{categories, CategoryIndex, CategoryOption, ALL_CATEGORY_ID, ALL_CATEGORY_LABEL};
pub use detail_state::DetailState;
pub use error::{CatalogError, InvalidReferenceError};
pub use filter::{filter, CategoryId};
pub use ports::{ScrollLockPort, ViewportSignal};
pub use store::{CatalogRecord, CatalogStore, RecordId};
pub use view_mode::{ViewMode, ViewModeToggle};
