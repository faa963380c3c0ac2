//! Semantic field inference.
//!
//! Many features need "the title" or "the date" of an entry without the
//! config saying which field that is. The inferable-fields table lists, for
//! each semantic role, the widget to look for and the field names that
//! usually carry it.

use crate::collection::Collection;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::error;

/// How one semantic field is located in a collection's schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferableField {
    /// Widget the field is expected to use.
    pub widget: &'static str,
    /// Widgets accepted when no main-widget field has a synonym name.
    pub secondary_widgets: &'static [&'static str],
    /// Field names recognised for this role.
    pub synonyms: &'static [&'static str],
    /// Fall back to the first field with the main widget.
    pub fallback_to_first_field: bool,
    /// Report a diagnostic when nothing matches.
    pub show_error: bool,
}

static INFERABLE_FIELDS: LazyLock<HashMap<&'static str, InferableField>> = LazyLock::new(|| {
    HashMap::from([
        (
            "title",
            InferableField {
                widget: "string",
                secondary_widgets: &[],
                synonyms: &["title", "name", "label", "headline", "header"],
                fallback_to_first_field: true,
                show_error: true,
            },
        ),
        (
            "shortTitle",
            InferableField {
                widget: "string",
                secondary_widgets: &[],
                synonyms: &["short_title", "shortTitle", "short"],
                fallback_to_first_field: false,
                show_error: false,
            },
        ),
        (
            "author",
            InferableField {
                widget: "string",
                secondary_widgets: &[],
                synonyms: &["author", "name", "by", "byline", "owner"],
                fallback_to_first_field: false,
                show_error: false,
            },
        ),
        (
            "date",
            InferableField {
                widget: "datetime",
                secondary_widgets: &["date"],
                synonyms: &["date", "publishDate", "publish_date"],
                fallback_to_first_field: false,
                show_error: false,
            },
        ),
        (
            "description",
            InferableField {
                widget: "string",
                secondary_widgets: &["text", "markdown"],
                synonyms: &[
                    "shortDescription",
                    "short_description",
                    "shortdescription",
                    "description",
                    "intro",
                    "introduction",
                    "brief",
                    "content",
                    "biography",
                    "bio",
                    "summary",
                ],
                fallback_to_first_field: false,
                show_error: false,
            },
        ),
        (
            "image",
            InferableField {
                widget: "image",
                secondary_widgets: &[],
                synonyms: &[
                    "image",
                    "thumbnail",
                    "thumb",
                    "picture",
                    "avatar",
                    "photo",
                    "cover",
                ],
                fallback_to_first_field: false,
                show_error: false,
            },
        ),
    ])
});

/// Looks up the inference rule for a semantic field name.
pub fn inferable_field(field_name: &str) -> Option<&'static InferableField> {
    INFERABLE_FIELDS.get(field_name)
}

/// Receives a report when a semantic field cannot be inferred.
pub trait InferenceDiagnostics {
    fn field_missing(&self, summary: &str, detail: &str);
}

/// Sends inference reports to `tracing` at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl InferenceDiagnostics for TracingDiagnostics {
    fn field_missing(&self, summary: &str, detail: &str) {
        error!(detail, "{summary}");
    }
}

/// Discards inference reports. For lookups that only want the answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentDiagnostics;

impl InferenceDiagnostics for SilentDiagnostics {
    fn field_missing(&self, _summary: &str, _detail: &str) {}
}

/// Finds the field of `collection` that plays the semantic role `field_name`.
///
/// Precedence:
/// 1. a field with the main widget whose name is a synonym;
/// 2. a field with a secondary widget whose name is a synonym;
/// 3. when the rule allows it, the first field with the main widget;
/// 4. otherwise `None`, reporting to `diagnostics` if the rule says so.
///
/// Within each step fields are considered in schema order. Collections
/// without collection-level fields and unknown roles yield `None` silently.
pub fn select_inferred_field<'a>(
    collection: &'a Collection,
    field_name: &str,
    diagnostics: &dyn InferenceDiagnostics,
) -> Option<&'a str> {
    let rule = inferable_field(field_name)?;
    let fields = collection.collection_fields()?;

    let mut main_widget = fields
        .iter()
        .filter(|f| f.widget() == rule.widget)
        .map(|f| f.name.as_str());
    if let Some(name) = main_widget.clone().find(|n| rule.synonyms.contains(n)) {
        return Some(name);
    }

    let secondary = fields
        .iter()
        .filter(|f| rule.secondary_widgets.contains(&f.widget()))
        .map(|f| f.name.as_str())
        .find(|n| rule.synonyms.contains(n));
    if secondary.is_some() {
        return secondary;
    }

    if rule.fallback_to_first_field
        && let Some(first) = main_widget.next()
    {
        return Some(first);
    }

    if rule.show_error {
        let name = collection.name();
        diagnostics.field_missing(
            &format!("The Field {field_name} is missing for the collection \u{201c}{name}\u{201d}"),
            &format!(
                "Folio tries to infer the entry {field_name} automatically, but one couldn't be found for entries of the collection \u{201c}{name}\u{201d}. Please check your site configuration."
            ),
        );
    }

    None
}
