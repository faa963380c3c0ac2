use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Widget assumed for a field that does not declare one.
pub const DEFAULT_WIDGET: &str = "string";

/// One field of a collection (or file entry) schema.
///
/// Field lists are ordered; names are unique within one list. Widget-specific
/// options that the core does not interpret (e.g. `pattern`, `format`,
/// `options`) are kept verbatim in `options`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Nested fields for `object` widgets and multi-field `list` widgets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldSchema>>,
    /// Single item field for `list` widgets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<Box<FieldSchema>>,
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

fn default_required() -> bool {
    true
}

impl FieldSchema {
    /// Creates a field with an explicit widget.
    pub fn new(name: &str, widget: &str) -> Self {
        Self {
            name: name.into(),
            label: None,
            widget: Some(widget.into()),
            default: None,
            required: true,
            hint: None,
            fields: None,
            field: None,
            options: Map::new(),
        }
    }

    /// Creates a field with no widget declared (treated as `string`).
    pub fn untyped(name: &str) -> Self {
        Self {
            widget: None,
            ..Self::new(name, DEFAULT_WIDGET)
        }
    }

    /// Shorthand for a `string` field.
    pub fn string(name: &str) -> Self {
        Self::new(name, "string")
    }

    /// Shorthand for a `text` field.
    pub fn text(name: &str) -> Self {
        Self::new(name, "text")
    }

    /// Shorthand for a `markdown` field.
    pub fn markdown(name: &str) -> Self {
        Self::new(name, "markdown")
    }

    /// Shorthand for a `datetime` field.
    pub fn datetime(name: &str) -> Self {
        Self::new(name, "datetime")
    }

    /// Shorthand for a `date` field.
    pub fn date(name: &str) -> Self {
        Self::new(name, "date")
    }

    /// Shorthand for an `image` field.
    pub fn image(name: &str) -> Self {
        Self::new(name, "image")
    }

    /// Shorthand for an `object` field with nested fields.
    pub fn object(name: &str, fields: Vec<FieldSchema>) -> Self {
        Self {
            fields: Some(fields),
            ..Self::new(name, "object")
        }
    }

    /// Shorthand for a `list` field whose items are objects.
    pub fn list(name: &str, fields: Vec<FieldSchema>) -> Self {
        Self {
            fields: Some(fields),
            ..Self::new(name, "list")
        }
    }

    /// Shorthand for a `list` field whose items are a single widget.
    pub fn list_of(name: &str, item: FieldSchema) -> Self {
        Self {
            field: Some(Box::new(item)),
            ..Self::new(name, "list")
        }
    }

    /// Sets the default value seeded into new drafts.
    #[must_use]
    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Marks the field as optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// The declared widget, or `string` when none is declared.
    pub fn widget(&self) -> &str {
        self.widget.as_deref().unwrap_or(DEFAULT_WIDGET)
    }

    /// The display label, falling back to the field name.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// Category of a field validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// A required field is empty.
    Presence,
    /// The value does not match the configured pattern.
    Pattern,
    /// The value is outside an allowed range.
    Range,
    /// Reported by a widget's own validator.
    Custom,
}

/// A validation failure reported by a widget for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for a required-field failure.
    pub fn presence(field_label: &str) -> Self {
        Self::new(
            FieldErrorKind::Presence,
            format!("{field_label} is required."),
        )
    }
}
