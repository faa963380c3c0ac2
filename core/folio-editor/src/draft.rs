//! The editable working copy of an entry.

use folio_collections::Collection;
use folio_model::{Entry, FieldError, FieldSchema};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// An entry being edited.
///
/// Field values are in editable (deserialized) representation. Every field
/// change sets `has_changed`; only a successful persist clears it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryDraft {
    entry: Entry,
    fields_meta_data: Map<String, Value>,
    fields_errors: BTreeMap<String, Vec<FieldError>>,
    has_changed: bool,
}

impl EntryDraft {
    /// A draft of an existing entry whose values are already deserialized.
    pub fn from_entry(entry: Entry) -> Self {
        Self {
            entry,
            fields_meta_data: Map::new(),
            fields_errors: BTreeMap::new(),
            has_changed: false,
        }
    }

    /// A draft for a new entry, seeded from the field defaults.
    pub fn empty(collection: &Collection, fields: &[FieldSchema]) -> Self {
        Self::from_entry(Entry::new_record(
            collection.name(),
            Value::Object(empty_data(fields)),
        ))
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn into_entry(self) -> Entry {
        self.entry
    }

    pub fn has_changed(&self) -> bool {
        self.has_changed
    }

    pub fn is_new(&self) -> bool {
        self.entry.new_record
    }

    /// Widget metadata recorded alongside field values (e.g. resolved
    /// relation labels).
    pub fn fields_meta_data(&self) -> &Map<String, Value> {
        &self.fields_meta_data
    }

    pub fn fields_errors(&self) -> &BTreeMap<String, Vec<FieldError>> {
        &self.fields_errors
    }

    pub fn field_errors(&self, field: &str) -> &[FieldError] {
        self.fields_errors
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// True when no field has recorded errors.
    pub fn is_valid(&self) -> bool {
        self.fields_errors.is_empty()
    }

    /// Sets a field value and marks the draft changed.
    pub fn change_field(&mut self, field: &str, value: Value, metadata: Option<Value>) {
        self.entry.set(field, value);
        if let Some(metadata) = metadata {
            self.fields_meta_data.insert(field.to_string(), metadata);
        }
        self.has_changed = true;
    }

    /// Replaces the validation errors of a field. An empty list clears them.
    pub fn change_field_validation(&mut self, field: &str, errors: Vec<FieldError>) {
        if errors.is_empty() {
            self.fields_errors.remove(field);
        } else {
            self.fields_errors.insert(field.to_string(), errors);
        }
    }

    /// Adopts the identity the store assigned and clears `has_changed`.
    /// Field values stay in editable form.
    pub fn mark_persisted(&mut self, stored: &Entry) {
        self.entry.slug.clone_from(&stored.slug);
        self.entry.path.clone_from(&stored.path);
        self.entry.new_record = false;
        self.has_changed = false;
    }

    /// Forgets unsaved changes without touching values.
    pub fn mark_clean(&mut self) {
        self.has_changed = false;
    }
}

/// Initial values for a new entry: each field's `default`, with `object`
/// fields built from their nested defaults and object `list` fields seeded
/// with one such item. Empty nested values are left out.
pub fn empty_data(fields: &[FieldSchema]) -> Map<String, Value> {
    let mut data = Map::new();
    for field in fields {
        if let Some(nested) = &field.fields {
            let item = empty_data(nested);
            if !item.is_empty() {
                let value = match field.widget() {
                    "list" => Value::Array(vec![Value::Object(item)]),
                    _ => Value::Object(item),
                };
                data.insert(field.name.clone(), value);
            }
            continue;
        }
        if let Some(default) = &field.default {
            data.insert(field.name.clone(), default.clone());
        }
    }
    data
}
