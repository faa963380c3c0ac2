//! Commands behind the `folio` binary.
//!
//! Every command takes the validated collection set and returns the text to
//! print, so the binary stays a thin shell around argument parsing and
//! logging.

use anyhow::{Context, Result, anyhow};
use clap::Subcommand;
use folio_collections::{CmsConfig, Collection, CollectionKind, Collections};
use folio_editor::empty_data;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;
use tracing::debug;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate the config and list its collections
    Check,
    /// Print the repository path of an entry
    Path { collection: String, slug: String },
    /// Print the slug of the entry stored at a path
    Slug { collection: String, path: String },
    /// List the fields of a collection (or of one file in a files collection)
    Fields {
        collection: String,
        slug: Option<String>,
    },
    /// Print the field that plays a semantic role such as "title"
    Infer { collection: String, field: String },
    /// Print listing and permission details as JSON
    Info { collection: String },
    /// Print the initial values of a new entry as JSON
    New { collection: String },
}

/// Collection details printed by `folio info`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CollectionInfo {
    pub name: String,
    pub label: String,
    pub kind: String,
    pub format: String,
    pub list_method: String,
    pub allow_new_entries: bool,
    pub allow_deletion: bool,
    pub identifier_field: Option<String>,
}

impl CollectionInfo {
    pub fn from_collection(collection: &Collection) -> Self {
        Self {
            name: collection.name().to_string(),
            label: collection.label().to_string(),
            kind: kind_name(collection).to_string(),
            format: collection.resolved_format().to_string(),
            list_method: collection.list_method().as_str().to_string(),
            allow_new_entries: collection.allow_new_entries(),
            allow_deletion: collection.allow_deletion(),
            identifier_field: collection.identifier_field().map(str::to_string),
        }
    }
}

/// Loads and validates a config file.
pub fn load(path: &Path) -> Result<Collections> {
    let config = CmsConfig::load_from(path)
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    Collections::from_config(&config).context("Invalid collection config")
}

/// Runs one command against a loaded collection set.
pub fn run(collections: &Collections, command: &Command) -> Result<String> {
    debug!(?command, "Running command");
    match command {
        Command::Check => Ok(check(collections)),
        Command::Path { collection, slug } => {
            let collection = find(collections, collection)?;
            collection.entry_path(slug).ok_or_else(|| {
                anyhow!("No file \"{slug}\" in collection \"{}\"", collection.name())
            })
        }
        Command::Slug { collection, path } => {
            let collection = find(collections, collection)?;
            collection.entry_slug(path).ok_or_else(|| {
                anyhow!("No entry at \"{path}\" in collection \"{}\"", collection.name())
            })
        }
        Command::Fields { collection, slug } => {
            let collection = find(collections, collection)?;
            fields(collection, slug.as_deref())
        }
        Command::Infer { collection, field } => {
            let collection = find(collections, collection)?;
            Ok(collection
                .inferred_field(field)
                .unwrap_or("none")
                .to_string())
        }
        Command::Info { collection } => {
            let collection = find(collections, collection)?;
            let info = CollectionInfo::from_collection(collection);
            Ok(serde_json::to_string_pretty(&info)?)
        }
        Command::New { collection } => {
            let collection = find(collections, collection)?;
            if !collection.allow_new_entries() {
                return Err(anyhow!(
                    "Collection \"{}\" does not allow new entries",
                    collection.name()
                ));
            }
            let fields = collection.fields(None).unwrap_or_default();
            Ok(serde_json::to_string_pretty(&empty_data(fields))?)
        }
    }
}

fn find<'a>(collections: &'a Collections, name: &str) -> Result<&'a Collection> {
    collections
        .get(name)
        .map(|c| c.as_ref())
        .ok_or_else(|| anyhow!("Unknown collection \"{name}\""))
}

fn kind_name(collection: &Collection) -> &'static str {
    match collection.kind() {
        CollectionKind::Folder(_) => "folder",
        CollectionKind::Files(_) => "files",
    }
}

fn check(collections: &Collections) -> String {
    let mut out = String::new();
    for collection in collections.iter() {
        let _ = writeln!(
            out,
            "{:<16} {:<7} {}",
            collection.name(),
            kind_name(collection),
            collection.resolved_format()
        );
    }
    let _ = write!(out, "{} collection(s) OK", collections.len());
    out
}

fn fields(collection: &Collection, slug: Option<&str>) -> Result<String> {
    let fields = match (collection.kind(), slug) {
        (CollectionKind::Files(files), None) => {
            // No file named: list the files instead.
            let mut out = String::new();
            for file in &files.files {
                let _ = writeln!(out, "{:<16} {}", file.name, file.file);
            }
            return Ok(out.trim_end().to_string());
        }
        _ => collection.fields(slug).ok_or_else(|| {
            anyhow!(
                "No file \"{}\" in collection \"{}\"",
                slug.unwrap_or_default(),
                collection.name()
            )
        })?,
    };

    let mut out = String::new();
    for field in fields {
        let marker = if field.required { "" } else { " (optional)" };
        let _ = writeln!(out, "{:<16} {}{marker}", field.name, field.widget());
    }
    Ok(out.trim_end().to_string())
}
