//! Error types for collection configuration.

use crate::format;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for collection operations.
pub type CollectionResult<T> = Result<T, CollectionError>;

/// Errors raised while loading or validating collection configuration.
///
/// All of these are fatal for the collection set being loaded.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// Neither `folder` nor `files` was declared.
    #[error(
        "Unknown collection type for collection \"{collection}\". Collections can be either Folder based or File based."
    )]
    UnknownType { collection: String },

    /// Both `folder` and `files` were declared.
    #[error(
        "Collection \"{collection}\" declares both a folder and files. Collections can be either Folder based or File based."
    )]
    AmbiguousType { collection: String },

    /// The declared `format` is not in the supported set.
    #[error(
        "Unknown collection format for collection \"{collection}\". Supported formats are {}",
        format::supported_list()
    )]
    UnknownFormat { collection: String, format: String },

    /// No `format`, and the `extension` does not map to one.
    #[error(
        "Please set a format for collection \"{collection}\". Supported formats are {}",
        format::supported_list()
    )]
    FormatRequired {
        collection: String,
        extension: String,
    },

    /// A custom delimiter was set without an explicit frontmatter format.
    #[error(
        "Please set a proper frontmatter format for collection \"{collection}\" to use a custom delimiter. Supported frontmatter formats are yaml-frontmatter, toml-frontmatter, and json-frontmatter."
    )]
    DelimiterRequiresFrontmatter { collection: String },

    /// Two collections share a name.
    #[error("Duplicate collection name \"{collection}\".")]
    DuplicateCollection { collection: String },

    /// Two fields in the same field list share a name.
    #[error("Duplicate field \"{field}\" in collection \"{collection}\".")]
    DuplicateField { collection: String, field: String },

    /// Two files in a files collection share a name.
    #[error("Duplicate file \"{file}\" in collection \"{collection}\".")]
    DuplicateFile { collection: String, file: String },

    /// The config file could not be read.
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config document is not valid YAML or has the wrong shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl CollectionError {
    /// Name of the offending collection, when the error is about one.
    pub fn collection(&self) -> Option<&str> {
        match self {
            Self::UnknownType { collection }
            | Self::AmbiguousType { collection }
            | Self::UnknownFormat { collection, .. }
            | Self::FormatRequired { collection, .. }
            | Self::DelimiterRequiresFrontmatter { collection }
            | Self::DuplicateCollection { collection }
            | Self::DuplicateField { collection, .. }
            | Self::DuplicateFile { collection, .. } => Some(collection),
            Self::Io { .. } | Self::Parse(_) => None,
        }
    }
}
