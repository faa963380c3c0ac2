use serde_json::Value;

/// Widget-specific transform between the value a store persists and the
/// value an editing widget works with.
///
/// Both directions default to the identity, so a widget only overrides the
/// side it cares about. Implementations must be pure: the editor may call
/// them on any entry it is handed, and callers compare outputs.
pub trait FieldValueSerializer: Send + Sync {
    /// Editable representation -> storage representation.
    fn serialize(&self, value: &Value) -> Value {
        value.clone()
    }

    /// Storage representation -> editable representation.
    fn deserialize(&self, value: &Value) -> Value {
        value.clone()
    }
}
