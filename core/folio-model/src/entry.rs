use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single content record belonging to a collection.
///
/// The `data` field holds the field values keyed by field name. Whether those
/// values are in storage or editable representation depends on where the
/// entry sits in the pipeline: stores hand out storage values, drafts hold
/// deserialized ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub collection: String,
    pub slug: String,
    pub path: String,
    pub data: Value,
    /// True for an entry that has never been written to the store.
    #[serde(default)]
    pub new_record: bool,
}

impl Entry {
    /// Creates a persisted entry with the given payload.
    pub fn new(
        collection: impl Into<String>,
        slug: impl Into<String>,
        path: impl Into<String>,
        data: Value,
    ) -> Self {
        Self {
            collection: collection.into(),
            slug: slug.into(),
            path: path.into(),
            data,
            new_record: false,
        }
    }

    /// Creates an unsaved entry with no slug or path yet.
    pub fn new_record(collection: impl Into<String>, data: Value) -> Self {
        Self {
            collection: collection.into(),
            slug: String::new(),
            path: String::new(),
            data,
            new_record: true,
        }
    }

    /// Returns the payload as an object map, if it is one.
    pub fn fields(&self) -> Option<&Map<String, Value>> {
        self.data.as_object()
    }

    /// Returns the raw value of a top-level field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    /// Sets a top-level field, turning a non-object payload into an object.
    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        if !self.data.is_object() {
            self.data = Value::Object(Map::new());
        }
        if let Value::Object(map) = &mut self.data {
            map.insert(field.into(), value);
        }
    }

    /// String value at a JSON pointer into the payload (`/seo/title`).
    /// Non-string values read as `None`.
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.data.pointer(pointer)?.as_str()
    }
}
