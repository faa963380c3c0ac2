//! Property tests for folder entry paths.

mod common;

use folio_collections::{Collection, CollectionConfig};
use proptest::prelude::*;

fn slug_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9-]{0,30}"
}

fn folder_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("posts".to_string()),
        Just("content/blog".to_string()),
        Just("content/blog/".to_string()),
    ]
}

fn extension_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("md".to_string())),
        Just(Some("json".to_string())),
        Just(Some("yml".to_string())),
    ]
}

proptest! {
    /// entry_slug(entry_path(slug)) == slug for every folder collection.
    #[test]
    fn folder_slug_is_inverse_of_path(
        slug in slug_strategy(),
        folder in folder_strategy(),
        extension in extension_strategy(),
    ) {
        let mut config = CollectionConfig::folder("c", &folder, common::post_fields());
        config.extension = extension;
        let collection = Collection::from_config(config).unwrap();

        let path = collection.entry_path(&slug).unwrap();
        prop_assert!(path.starts_with(folder.trim_end_matches('/')));
        prop_assert!(!path.contains("//"));
        prop_assert_eq!(collection.entry_slug(&path), Some(slug));
    }
}
