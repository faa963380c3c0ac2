//! Error types for the editor layer.

use thiserror::Error;

/// Result type for content store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors reported by a content store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No entry with this slug exists in the collection.
    #[error("entry not found: {collection}/{slug}")]
    NotFound { collection: String, slug: String },

    /// The entry cannot be written as given.
    #[error("invalid entry: {0}")]
    InvalidEntry(String),

    /// The collection does not allow the operation.
    #[error("operation not allowed: {0}")]
    NotAllowed(String),

    /// The backend failed.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors that can occur in editor operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// A store call failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The operation needs a draft and none is loaded.
    #[error("no draft is loaded")]
    NotReady,

    /// The editor has been torn down.
    #[error("editor is no longer active")]
    Inactive,

    /// The entry has no slug to address it by.
    #[error("entry has no slug")]
    MissingSlug,
}
