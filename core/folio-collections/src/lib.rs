//! Collection model for Folio.
//!
//! A collection is a named schema grouping entries of one kind. It is either
//! folder-backed (every file under a directory is an entry) or file-backed (a
//! fixed list of files, each with its own fields). This crate turns the
//! `collections` section of a CMS config into validated, immutable
//! [`Collection`] values and answers the questions the rest of the system
//! asks about them:
//!
//! - which fields an entry has ([`Collection::fields`])
//! - where an entry lives ([`Collection::entry_path`]) and the inverse
//!   ([`Collection::entry_slug`])
//! - how entries are listed, and whether they may be created or deleted
//! - which field plays a semantic role such as "title" or "date"
//!   ([`select_inferred_field`])
//!
//! Validation happens once, when the config is loaded. Every accessor on a
//! built [`Collection`] is infallible apart from lookups that can miss.

mod collection;
mod config;
mod error;
mod format;
mod inference;
mod registry;

pub use collection::{
    Collection, CollectionKind, FileEntry, FilesCollection, FolderCollection, ListMethod,
};
pub use config::{
    BackendConfig, CmsConfig, CollectionConfig, FileConfig, FrontmatterDelimiter, PublishMode,
};
pub use error::{CollectionError, CollectionResult};
pub use format::{Format, FRONTMATTER_FORMATS, SUPPORTED_FORMATS};
pub use inference::{
    inferable_field, select_inferred_field, InferableField, InferenceDiagnostics,
    SilentDiagnostics, TracingDiagnostics,
};
pub use registry::Collections;
