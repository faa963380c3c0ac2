//! Content store abstraction.
//!
//! The editor never talks to a backend directly. It is handed a
//! [`ContentStore`] and awaits its results. [`MemoryStore`] keeps entries in
//! process and is what tests and embedders without a backend use.

use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use folio_collections::Collection;
use folio_model::Entry;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Asynchronous access to persisted entries.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Loads one entry, with field values in storage representation.
    async fn load_entry(&self, collection: &Collection, slug: &str) -> StoreResult<Entry>;

    /// Writes an entry and returns it as stored (slug and path filled in).
    ///
    /// `entry.data` is in storage representation. An entry with
    /// `new_record` set has no slug yet; the store assigns one.
    async fn persist_entry(&self, collection: &Collection, entry: Entry) -> StoreResult<Entry>;

    /// Removes an entry.
    async fn delete_entry(&self, collection: &Collection, slug: &str) -> StoreResult<()>;
}

/// In-process store keyed by collection name and slug.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<(String, String), Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an entry directly, bypassing collection checks.
    pub async fn insert(&self, entry: Entry) {
        let key = (entry.collection.clone(), entry.slug.clone());
        self.entries.write().await.insert(key, entry);
    }

    /// Returns a stored entry.
    pub async fn get(&self, collection: &str, slug: &str) -> Option<Entry> {
        self.entries
            .read()
            .await
            .get(&(collection.to_string(), slug.to_string()))
            .cloned()
    }

    /// Number of stored entries across all collections.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    fn new_slug(collection: &Collection, entry: &Entry) -> StoreResult<String> {
        if !collection.allow_new_entries() {
            return Err(StoreError::NotAllowed(format!(
                "collection \"{}\" does not allow new entries",
                collection.name()
            )));
        }
        let identifier = collection.identifier_field().ok_or_else(|| {
            StoreError::InvalidEntry(format!(
                "collection \"{}\" has no identifier field",
                collection.name()
            ))
        })?;
        let value = entry.get_str(&format!("/{identifier}")).unwrap_or_default();
        let slug = slugify(value);
        if slug.is_empty() {
            return Err(StoreError::InvalidEntry(format!(
                "field \"{identifier}\" is empty"
            )));
        }
        Ok(slug)
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn load_entry(&self, collection: &Collection, slug: &str) -> StoreResult<Entry> {
        self.get(collection.name(), slug)
            .await
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.name().to_string(),
                slug: slug.to_string(),
            })
    }

    async fn persist_entry(&self, collection: &Collection, mut entry: Entry) -> StoreResult<Entry> {
        if entry.new_record {
            entry.slug = Self::new_slug(collection, &entry)?;
        }
        entry.path = collection.entry_path(&entry.slug).ok_or_else(|| {
            StoreError::InvalidEntry(format!(
                "no file configured for \"{}\" in collection \"{}\"",
                entry.slug,
                collection.name()
            ))
        })?;
        entry.collection = collection.name().to_string();
        entry.new_record = false;

        debug!(collection = collection.name(), slug = %entry.slug, "Persisting entry");
        self.insert(entry.clone()).await;
        Ok(entry)
    }

    async fn delete_entry(&self, collection: &Collection, slug: &str) -> StoreResult<()> {
        if !collection.allow_deletion() {
            return Err(StoreError::NotAllowed(format!(
                "collection \"{}\" does not allow deletion",
                collection.name()
            )));
        }
        let key = (collection.name().to_string(), slug.to_string());
        match self.entries.write().await.remove(&key) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound {
                collection: key.0,
                slug: key.1,
            }),
        }
    }
}

/// Lower-cases and joins alphanumeric runs with `-`.
pub fn slugify(value: &str) -> String {
    value
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
