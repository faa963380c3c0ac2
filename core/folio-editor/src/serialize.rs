//! Widget value serializer registry.
//!
//! Values loaded from a store are in storage representation. Before a draft
//! is built they pass through [`SerializerRegistry::deserialize_values`];
//! before a draft is persisted they pass back through
//! [`SerializerRegistry::serialize_values`]. Nested `object` and `list`
//! fields are walked by shape: a value with nested fields is recursed into
//! when it is an object (or mapped over when it is an array); any other
//! value goes through its widget's serializer, if one is registered.

use folio_model::{FieldSchema, FieldValueSerializer};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
enum Direction {
    Serialize,
    Deserialize,
}

impl Direction {
    fn apply(self, serializer: &dyn FieldValueSerializer, value: &Value) -> Value {
        match self {
            Self::Serialize => serializer.serialize(value),
            Self::Deserialize => serializer.deserialize(value),
        }
    }
}

/// Serializers keyed by widget name.
#[derive(Clone, Default)]
pub struct SerializerRegistry {
    by_widget: HashMap<String, Arc<dyn FieldValueSerializer>>,
}

impl fmt::Debug for SerializerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widgets: Vec<_> = self.by_widget.keys().collect();
        widgets.sort();
        f.debug_struct("SerializerRegistry")
            .field("widgets", &widgets)
            .finish()
    }
}

impl SerializerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the serializer for a widget.
    pub fn register(
        &mut self,
        widget: impl Into<String>,
        serializer: Arc<dyn FieldValueSerializer>,
    ) -> &mut Self {
        self.by_widget.insert(widget.into(), serializer);
        self
    }

    /// The serializer for a widget, if one is registered.
    pub fn get(&self, widget: &str) -> Option<&Arc<dyn FieldValueSerializer>> {
        self.by_widget.get(widget)
    }

    /// Storage representation -> editable representation.
    pub fn deserialize_values(&self, data: &Value, fields: &[FieldSchema]) -> Value {
        self.run(data, fields, Direction::Deserialize)
    }

    /// Editable representation -> storage representation.
    pub fn serialize_values(&self, data: &Value, fields: &[FieldSchema]) -> Value {
        self.run(data, fields, Direction::Serialize)
    }

    fn run(&self, data: &Value, fields: &[FieldSchema], direction: Direction) -> Value {
        let Some(values) = data.as_object() else {
            return data.clone();
        };

        // Keys without a schema entry pass through untouched.
        let mut out: Map<String, Value> = values.clone();
        for field in fields {
            match values.get(&field.name) {
                None | Some(Value::Null) => {}
                Some(value) => {
                    out.insert(field.name.clone(), self.run_field(field, value, direction));
                }
            }
        }
        Value::Object(out)
    }

    fn run_field(&self, field: &FieldSchema, value: &Value, direction: Direction) -> Value {
        if let Some(nested) = &field.fields {
            match value {
                Value::Array(items) => {
                    return Value::Array(
                        items
                            .iter()
                            .map(|item| self.run(item, nested, direction))
                            .collect(),
                    );
                }
                Value::Object(_) => return self.run(value, nested, direction),
                _ => {}
            }
        }

        if let (Some(item_field), Value::Array(items)) = (&field.field, value) {
            return Value::Array(
                items
                    .iter()
                    .map(|item| match item {
                        Value::Null => Value::Null,
                        _ => self.run_field(item_field, item, direction),
                    })
                    .collect(),
            );
        }

        match self.get(field.widget()) {
            Some(serializer) => direction.apply(serializer.as_ref(), value),
            None => value.clone(),
        }
    }
}
