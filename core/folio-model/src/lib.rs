//! Core entry model for Folio.
//!
//! Defines the plain data types shared by the collection model and the
//! editor:
//! - [`Entry`]: a content record (collection, slug, path, JSON payload)
//! - [`FieldSchema`]: one field of a collection's schema, keyed by widget
//! - [`FieldError`]: a per-field validation failure recorded on a draft
//! - [`FieldValueSerializer`]: widget-specific storage/editable transform
//!
//! Nothing here performs I/O. Stores, registries and controllers live in
//! `folio-collections` and `folio-editor`.

mod entry;
mod field;
mod serializer;

pub use entry::Entry;
pub use field::{FieldError, FieldErrorKind, FieldSchema, DEFAULT_WIDGET};
pub use serializer::FieldValueSerializer;
