//! The loaded collection set.

use crate::collection::Collection;
use crate::config::{CmsConfig, CollectionConfig};
use crate::error::{CollectionError, CollectionResult};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::{debug, info};

/// All collections of a config, in declaration order.
///
/// Collections are shared read-only (`Arc`) with editors and never mutated
/// after loading.
#[derive(Debug, Clone, Default)]
pub struct Collections {
    by_name: IndexMap<String, Arc<Collection>>,
}

impl Collections {
    /// Validates and loads every collection of a config.
    pub fn from_config(config: &CmsConfig) -> CollectionResult<Self> {
        let collections = Self::from_configs(config.collections.iter().cloned())?;
        info!(count = collections.len(), "Loaded collections");
        Ok(collections)
    }

    /// Validates and loads collections in order.
    ///
    /// Stops at the first invalid collection; nothing after it is loaded.
    pub fn from_configs(
        configs: impl IntoIterator<Item = CollectionConfig>,
    ) -> CollectionResult<Self> {
        let mut by_name = IndexMap::new();
        for config in configs {
            let collection = Collection::from_config(config)?;
            if by_name.contains_key(collection.name()) {
                return Err(CollectionError::DuplicateCollection {
                    collection: collection.name().to_string(),
                });
            }
            debug!(
                collection = collection.name(),
                list_method = collection.list_method().as_str(),
                "Collection validated"
            );
            by_name.insert(collection.name().to_string(), Arc::new(collection));
        }
        Ok(Self { by_name })
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Collection>> {
        self.by_name.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Collection>> {
        self.by_name.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
