//! Toolbar affordances derived from editor and workflow state.
//!
//! Pure data: which controls exist, whether they are enabled, and their
//! labels. Rendering is left to the host.

use folio_collections::PublishMode;
use serde::{Deserialize, Serialize};

/// Editorial workflow status of an unpublished entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowStatus {
    Draft,
    PendingReview,
    PendingPublish,
}

impl WorkflowStatus {
    pub const ALL: [WorkflowStatus; 3] = [Self::Draft, Self::PendingReview, Self::PendingPublish];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::PendingReview => "In review",
            Self::PendingPublish => "Ready",
        }
    }
}

/// Workflow facts the editor itself does not track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkflowContext {
    pub publish_mode: PublishMode,
    /// Status of the unpublished version, if there is one.
    pub status: Option<WorkflowStatus>,
    pub has_unpublished_changes: bool,
    /// The unpublished version modifies a published entry.
    pub is_modification: bool,
}

/// Which delete action the delete control triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteAction {
    DeleteEntry,
    DeleteUnpublishedChanges,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteControl {
    pub label: Option<&'static str>,
    pub action: DeleteAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusItem {
    pub status: WorkflowStatus,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PublishControls {
    /// Publish dropdown with "Publish now" / "Publish and create new".
    Publish { label: &'static str },
    /// Status menu followed by the publish dropdown.
    Workflow {
        status_label: &'static str,
        statuses: Vec<StatusItem>,
        publish_label: &'static str,
    },
    /// Plain "Published" marker.
    Published,
    None,
}

/// Everything the toolbar shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toolbar {
    /// The collection the back link returns to.
    pub collection_label: String,
    /// "Unsaved Changes" or "Changes saved".
    pub change_status: &'static str,
    /// Explicit save button (workflow mode only).
    pub save_button: bool,
    pub save_enabled: bool,
    pub delete: Option<DeleteControl>,
    pub publish: PublishControls,
}

/// Editor facts feeding the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorState {
    pub has_changed: bool,
    pub is_new_entry: bool,
    pub is_persisting: bool,
    pub show_delete: bool,
}

impl Toolbar {
    pub fn derive(collection_label: &str, editor: EditorState, workflow: &WorkflowContext) -> Self {
        let change_status = if editor.has_changed {
            "Unsaved Changes"
        } else {
            "Changes saved"
        };

        match workflow.publish_mode {
            PublishMode::Simple => Self {
                collection_label: collection_label.to_string(),
                change_status,
                save_button: false,
                save_enabled: editor.has_changed && !editor.is_persisting,
                delete: editor.show_delete.then_some(DeleteControl {
                    label: Some("Delete"),
                    action: DeleteAction::DeleteEntry,
                }),
                publish: PublishControls::Publish {
                    label: persisting_label(editor, "Publishing...", "Publish"),
                },
            },
            PublishMode::EditorialWorkflow => Self {
                collection_label: collection_label.to_string(),
                change_status,
                save_button: true,
                save_enabled: editor.has_changed && !editor.is_persisting,
                delete: workflow_delete(editor, workflow),
                publish: workflow_publish(editor, workflow),
            },
        }
    }
}

fn persisting_label(
    editor: EditorState,
    persisting: &'static str,
    idle: &'static str,
) -> &'static str {
    if editor.is_persisting { persisting } else { idle }
}

fn workflow_delete(editor: EditorState, workflow: &WorkflowContext) -> Option<DeleteControl> {
    if editor.is_new_entry {
        return None;
    }
    let unpublished = workflow.has_unpublished_changes;
    let label = if unpublished && workflow.is_modification {
        Some("Delete unpublished changes")
    } else if unpublished {
        // Never published: deleting the unpublished version removes the entry.
        Some("Delete unpublished entry")
    } else if !workflow.is_modification {
        Some("Delete published entry")
    } else {
        None
    };
    let action = if unpublished {
        DeleteAction::DeleteUnpublishedChanges
    } else {
        DeleteAction::DeleteEntry
    };
    Some(DeleteControl { label, action })
}

fn workflow_publish(editor: EditorState, workflow: &WorkflowContext) -> PublishControls {
    match workflow.status {
        Some(current) => PublishControls::Workflow {
            status_label: persisting_label(editor, "Updating...", "Set status"),
            statuses: WorkflowStatus::ALL
                .iter()
                .map(|&status| StatusItem {
                    status,
                    label: status.label(),
                    active: status == current,
                })
                .collect(),
            publish_label: persisting_label(editor, "Publishing...", "Publish"),
        },
        None if !editor.is_new_entry => PublishControls::Published,
        None => PublishControls::None,
    }
}
