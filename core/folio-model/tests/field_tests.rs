use folio_model::{FieldError, FieldErrorKind, FieldSchema, DEFAULT_WIDGET};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── Constructors ─────────────────────────────────────────────────

#[test]
fn shorthand_constructors_set_widget() {
    assert_eq!(FieldSchema::string("title").widget(), "string");
    assert_eq!(FieldSchema::text("bio").widget(), "text");
    assert_eq!(FieldSchema::markdown("body").widget(), "markdown");
    assert_eq!(FieldSchema::datetime("date").widget(), "datetime");
    assert_eq!(FieldSchema::date("day").widget(), "date");
    assert_eq!(FieldSchema::image("cover").widget(), "image");
}

#[test]
fn untyped_field_defaults_to_string_widget() {
    let f = FieldSchema::untyped("headline");
    assert_eq!(f.widget, None);
    assert_eq!(f.widget(), DEFAULT_WIDGET);
}

#[test]
fn object_and_list_carry_nested_fields() {
    let obj = FieldSchema::object("seo", vec![FieldSchema::string("title")]);
    assert_eq!(obj.widget(), "object");
    assert_eq!(obj.fields.as_ref().map(Vec::len), Some(1));

    let list = FieldSchema::list_of("tags", FieldSchema::string("tag"));
    assert_eq!(list.widget(), "list");
    assert_eq!(list.field.as_ref().map(|f| f.name.as_str()), Some("tag"));
}

#[test]
fn label_falls_back_to_name() {
    let mut f = FieldSchema::string("title");
    assert_eq!(f.label(), "title");
    f.label = Some("Title".into());
    assert_eq!(f.label(), "Title");
}

#[test]
fn builders_set_default_and_optional() {
    let f = FieldSchema::string("layout")
        .with_default(json!("post"))
        .optional();
    assert_eq!(f.default, Some(json!("post")));
    assert!(!f.required);
}

// ── Deserialization ──────────────────────────────────────────────

#[test]
fn deserialize_minimal_field() {
    let f: FieldSchema = serde_json::from_value(json!({"name": "title"})).unwrap();
    assert_eq!(f.name, "title");
    assert_eq!(f.widget(), "string");
    assert!(f.required);
    assert!(f.options.is_empty());
}

#[test]
fn unknown_keys_are_kept_as_options() {
    let f: FieldSchema = serde_json::from_value(json!({
        "name": "date",
        "widget": "datetime",
        "format": "YYYY-MM-DD",
        "required": false
    }))
    .unwrap();
    assert!(!f.required);
    assert_eq!(f.options.get("format"), Some(&json!("YYYY-MM-DD")));
}

#[test]
fn nested_fields_deserialize_recursively() {
    let f: FieldSchema = serde_json::from_value(json!({
        "name": "authors",
        "widget": "list",
        "fields": [{"name": "name"}, {"name": "avatar", "widget": "image"}]
    }))
    .unwrap();
    let nested = f.fields.unwrap();
    assert_eq!(nested[1].widget(), "image");
}

// ── FieldError ───────────────────────────────────────────────────

#[test]
fn presence_error_names_field() {
    let err = FieldError::presence("Title");
    assert_eq!(err.kind, FieldErrorKind::Presence);
    assert!(err.message.contains("Title"));
}

#[test]
fn field_error_kind_serializes_snake_case() {
    let v = serde_json::to_value(FieldErrorKind::Pattern).unwrap();
    assert_eq!(v, json!("pattern"));
}
