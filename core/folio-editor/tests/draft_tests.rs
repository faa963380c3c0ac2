mod common;

use common::{post_fields, posts};
use folio_editor::{EntryDraft, empty_data};
use folio_model::{Entry, FieldError, FieldErrorKind, FieldSchema};
use pretty_assertions::assert_eq;
use serde_json::json;

fn draft() -> EntryDraft {
    EntryDraft::from_entry(Entry::new(
        "posts",
        "hello",
        "posts/hello.md",
        json!({ "title": "Hello" }),
    ))
}

// ── Construction ─────────────────────────────────────────────────

#[test]
fn from_entry_starts_clean() {
    let d = draft();
    assert!(!d.has_changed());
    assert!(!d.is_new());
    assert!(d.is_valid());
    assert!(d.fields_meta_data().is_empty());
}

#[test]
fn empty_draft_is_new_and_seeded() {
    let d = EntryDraft::empty(&posts(), &post_fields());
    assert!(d.is_new());
    assert_eq!(d.entry().collection, "posts");
    assert_eq!(d.entry().slug, "");
    assert_eq!(d.entry().data, json!({ "body": "" }));
}

#[test]
fn empty_data_builds_nested_defaults() {
    let fields = vec![
        FieldSchema::string("title").with_default(json!("Untitled")),
        FieldSchema::object(
            "seo",
            vec![
                FieldSchema::string("robots").with_default(json!("index")),
                FieldSchema::string("canonical"),
            ],
        ),
        FieldSchema::list(
            "links",
            vec![FieldSchema::string("rel").with_default(json!("external"))],
        ),
        FieldSchema::object("empty", vec![FieldSchema::string("nothing")]),
        FieldSchema::string("plain"),
    ];

    assert_eq!(
        serde_json::Value::Object(empty_data(&fields)),
        json!({
            "title": "Untitled",
            "seo": { "robots": "index" },
            "links": [{ "rel": "external" }],
        })
    );
}

// ── Changes ──────────────────────────────────────────────────────

#[test]
fn change_field_sets_value_and_flag() {
    let mut d = draft();
    d.change_field("title", json!("Changed"), Some(json!({ "source": "typed" })));

    assert!(d.has_changed());
    assert_eq!(d.entry().get("title"), Some(&json!("Changed")));
    assert_eq!(d.fields_meta_data().get("title"), Some(&json!({ "source": "typed" })));
}

#[test]
fn validation_is_replaced_and_cleared() {
    let mut d = draft();
    d.change_field_validation("title", vec![FieldError::presence("Title")]);
    d.change_field_validation(
        "title",
        vec![FieldError::new(FieldErrorKind::Pattern, "bad")],
    );
    assert_eq!(d.field_errors("title").len(), 1);
    assert_eq!(d.field_errors("title")[0].kind, FieldErrorKind::Pattern);
    assert!(!d.is_valid());

    d.change_field_validation("title", Vec::new());
    assert!(d.is_valid());
    assert!(d.field_errors("title").is_empty());
}

#[test]
fn mark_persisted_adopts_identity_and_keeps_values() {
    let mut d = EntryDraft::empty(&posts(), &post_fields());
    d.change_field("title", json!({ "editable": true }), None);

    let stored = Entry::new("posts", "new-post", "posts/new-post.md", json!({}));
    d.mark_persisted(&stored);

    assert!(!d.has_changed());
    assert!(!d.is_new());
    assert_eq!(d.entry().slug, "new-post");
    assert_eq!(d.entry().path, "posts/new-post.md");
    assert_eq!(d.entry().get("title"), Some(&json!({ "editable": true })));
}

#[test]
fn into_entry_returns_working_copy() {
    let mut d = draft();
    d.change_field("title", json!("Mine"), None);
    assert_eq!(d.into_entry().get("title"), Some(&json!("Mine")));
}
