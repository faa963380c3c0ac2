//! Entry editor core for Folio.
//!
//! An [`EditorController`] owns the working copy ([`EntryDraft`]) of one
//! entry while it is being edited. It loads the entry through a
//! [`ContentStore`], turns stored field values into editable ones with the
//! [`SerializerRegistry`], guards unsaved changes against page unload and
//! in-app navigation, and persists or deletes the entry on request.
//!
//! The crate renders nothing. Hosts read [`EditorView`] and [`Toolbar`] and
//! supply the routing and confirmation collaborators
//! ([`NavigationService`], [`ConfirmPrompt`]).
//!
//! ```ignore
//! let mut editor = EditorController::open(posts, "hello", services);
//! editor.activate().await;
//! if let EditorView::Ready(_) = editor.view() {
//!     editor.change_field("title", json!("Hello again"), None)?;
//!     editor.persist().await?;
//! }
//! ```

mod controller;
mod draft;
mod error;
mod navigation;
mod serialize;
mod store;
mod toolbar;

pub use controller::{DeleteOutcome, EditorController, EditorServices, EditorView, EntryState};
pub use draft::{empty_data, EntryDraft};
pub use error::{EditorError, EditorResult, StoreError, StoreResult};
pub use navigation::{
    ConfirmPrompt, NavigationBlock, NavigationService, DELETE_MESSAGE, LEAVE_MESSAGE,
};
pub use serialize::SerializerRegistry;
pub use store::{slugify, ContentStore, MemoryStore};
pub use toolbar::{
    DeleteAction, DeleteControl, EditorState, PublishControls, StatusItem, Toolbar,
    WorkflowContext, WorkflowStatus,
};
