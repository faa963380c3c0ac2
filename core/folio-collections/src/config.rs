//! CMS configuration as written in `config.yml`.
//!
//! These are the unvalidated shapes. [`crate::Collections::from_config`]
//! turns them into [`crate::Collection`] values.

use crate::error::{CollectionError, CollectionResult};
use folio_model::FieldSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, info};

/// How entries move from draft to published.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishMode {
    /// Saving publishes immediately.
    #[default]
    Simple,
    /// Entries pass through draft / review / ready states before publishing.
    EditorialWorkflow,
}

/// Backend section; only the name is interpreted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub name: String,
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

/// Top-level CMS configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CmsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<BackendConfig>,
    #[serde(default)]
    pub publish_mode: PublishMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_folder: Option<String>,
    #[serde(default)]
    pub collections: Vec<CollectionConfig>,
}

impl CmsConfig {
    /// Parses a config document from YAML text.
    pub fn from_yaml(source: &str) -> CollectionResult<Self> {
        let config: Self = serde_yaml::from_str(source)?;
        debug!(
            collections = config.collections.len(),
            "Parsed CMS config"
        );
        Ok(config)
    }

    /// Reads and parses a config file.
    pub fn load_from(path: &Path) -> CollectionResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| CollectionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&contents)?;
        info!("Loaded CMS config from {}", path.display());
        Ok(config)
    }
}

/// Custom frontmatter delimiter: one marker for both ends, or an
/// `[open, close]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrontmatterDelimiter {
    Single(String),
    Pair(String, String),
}

impl FrontmatterDelimiter {
    /// Opening marker.
    pub fn open(&self) -> &str {
        match self {
            Self::Single(d) | Self::Pair(d, _) => d,
        }
    }

    /// Closing marker.
    pub fn close(&self) -> &str {
        match self {
            Self::Single(d) | Self::Pair(_, d) => d,
        }
    }
}

/// One entry of a `files` collection as written in config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub file: String,
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

/// One collection as written in config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_singular: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileConfig>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontmatter_delimiter: Option<FrontmatterDelimiter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldSchema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_path: Option<String>,
}

impl CollectionConfig {
    /// A folder collection config with no other options set.
    pub fn folder(name: &str, folder: &str, fields: Vec<FieldSchema>) -> Self {
        Self {
            folder: Some(folder.into()),
            fields: Some(fields),
            ..Self::bare(name)
        }
    }

    /// A files collection config with no other options set.
    pub fn files(name: &str, files: Vec<FileConfig>) -> Self {
        Self {
            files: Some(files),
            ..Self::bare(name)
        }
    }

    /// A config with only a name; invalid until `folder` or `files` is set.
    pub fn bare(name: &str) -> Self {
        Self {
            name: name.into(),
            label: None,
            label_singular: None,
            description: None,
            folder: None,
            files: None,
            format: None,
            extension: None,
            frontmatter_delimiter: None,
            fields: None,
            create: None,
            delete: None,
            slug: None,
            identifier_field: None,
            preview_path: None,
        }
    }
}
