//! Shared fixtures for collection tests.

#![allow(dead_code)]

use folio_collections::{Collection, CollectionConfig, FileConfig};
use folio_model::FieldSchema;

pub fn post_fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema::string("title"),
        FieldSchema::datetime("date"),
        FieldSchema::markdown("body"),
    ]
}

pub fn posts_config() -> CollectionConfig {
    CollectionConfig::folder("posts", "posts", post_fields())
}

pub fn posts() -> Collection {
    Collection::from_config(posts_config()).unwrap()
}

pub fn settings_config() -> CollectionConfig {
    CollectionConfig::files(
        "settings",
        vec![
            FileConfig {
                name: "settings".into(),
                label: Some("Site Settings".into()),
                file: "data/settings.yml".into(),
                fields: vec![FieldSchema::string("site_title"), FieldSchema::string("tagline")],
            },
            FileConfig {
                name: "authors".into(),
                label: None,
                file: "data/authors.yml".into(),
                fields: vec![FieldSchema::list("authors", vec![FieldSchema::string("name")])],
            },
        ],
    )
}

pub fn settings() -> Collection {
    Collection::from_config(settings_config()).unwrap()
}

pub fn folder_with_fields(fields: Vec<FieldSchema>) -> Collection {
    Collection::from_config(CollectionConfig::folder("things", "things", fields)).unwrap()
}
