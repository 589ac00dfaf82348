use thiserror::Error;

use super::store::RecordId;

/// A record id that does not resolve inside the catalog.
///
/// Only the view can produce ids, so this is a programming error rather
/// than something to show the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no catalog record with id {id}")]
pub struct InvalidReferenceError {
    pub id: RecordId,
}

/// Structural problems of a catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("record id must be positive")]
    ZeroId,

    #[error("duplicate record id {0}")]
    DuplicateId(RecordId),

    #[error("record {0} has an empty category")]
    EmptyCategory(RecordId),
}
