//! Draft lifecycle controller.
//!
//! One [`EditorController`] exists per open editor. It owns the draft for
//! its whole lifetime and drives it through three visible states:
//!
//! ```text
//!   activate ──► Loading ──(entry loaded)──► Ready
//!                   │
//!                   └──(load failed)──► Error
//! ```
//!
//! A new entry skips straight to `Ready` with an empty draft. The collection
//! is shared and read-only; the controller never mutates it.

use crate::draft::EntryDraft;
use crate::error::{EditorError, EditorResult};
use crate::navigation::{
    ConfirmPrompt, DELETE_MESSAGE, LEAVE_MESSAGE, NavigationBlock, NavigationService,
};
use crate::serialize::SerializerRegistry;
use crate::store::ContentStore;
use crate::toolbar::{EditorState, Toolbar, WorkflowContext};
use folio_collections::Collection;
use folio_model::{Entry, FieldError, FieldSchema};
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

/// What the host knows about the entry being edited.
///
/// Handed to [`EditorController::receive_entry`] behind an `Arc`; the
/// pointer identity is what decides whether a new draft is built.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryState {
    /// The load is in flight.
    Fetching,
    /// Loaded, field values in storage representation.
    Loaded(Entry),
    /// The load failed with this message.
    Failed(String),
}

/// What the host should render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorView<'a> {
    /// The load failed. Only the message is shown.
    Error(&'a str),
    /// Nothing editable yet.
    Loading,
    /// The draft is populated and editable.
    Ready(&'a EntryDraft),
}

impl EditorView<'_> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation.
    Cancelled,
    /// The entry was never persisted; the editor closed without touching
    /// the store.
    Closed,
    /// The store deleted the entry and the editor closed.
    Deleted,
}

/// Collaborators an editor is wired to.
#[derive(Clone)]
pub struct EditorServices {
    pub store: Arc<dyn ContentStore>,
    pub navigation: Arc<dyn NavigationService>,
    pub prompt: Arc<dyn ConfirmPrompt>,
    pub serializers: Arc<SerializerRegistry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Active,
    Deactivated,
}

/// Sets the persisting flag while alive. Dropping it clears the flag, also
/// when the persist future itself is dropped mid-flight.
struct PersistingGuard(Arc<AtomicBool>);

impl PersistingGuard {
    fn start(flag: &Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::Release);
        Self(Arc::clone(flag))
    }
}

impl Drop for PersistingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Editor for one entry of one collection.
pub struct EditorController {
    collection: Arc<Collection>,
    slug: Option<String>,
    new_entry: bool,
    services: EditorServices,
    entry: Option<Arc<EntryState>>,
    draft: Option<EntryDraft>,
    navigation_block: NavigationBlock,
    unload_guard: bool,
    persisting: Arc<AtomicBool>,
    last_error: Option<EditorError>,
    lifecycle: Lifecycle,
}

impl std::fmt::Debug for EditorController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorController")
            .field("collection", &self.collection.name())
            .field("slug", &self.slug)
            .field("new_entry", &self.new_entry)
            .field("entry", &self.entry)
            .field("draft", &self.draft)
            .field("navigation_block", &self.navigation_block)
            .field("persisting", &self.persisting)
            .field("lifecycle", &self.lifecycle)
            .finish_non_exhaustive()
    }
}

impl EditorController {
    /// An editor for an existing entry.
    pub fn open(
        collection: Arc<Collection>,
        slug: impl Into<String>,
        services: EditorServices,
    ) -> Self {
        Self::with_target(collection, Some(slug.into()), false, services)
    }

    /// An editor for an entry that does not exist yet.
    pub fn new_entry(collection: Arc<Collection>, services: EditorServices) -> Self {
        Self::with_target(collection, None, true, services)
    }

    fn with_target(
        collection: Arc<Collection>,
        slug: Option<String>,
        new_entry: bool,
        services: EditorServices,
    ) -> Self {
        Self {
            collection,
            slug,
            new_entry,
            services,
            entry: None,
            draft: None,
            navigation_block: NavigationBlock::default(),
            unload_guard: false,
            persisting: Arc::default(),
            last_error: None,
            lifecycle: Lifecycle::Created,
        }
    }

    // ── Lifecycle ────────────────────────────────────────────────

    /// Installs the unsaved-change guards and populates the draft: an empty
    /// one for a new entry, otherwise by loading the entry from the store.
    ///
    /// A failed load is not an error here; it is reported through
    /// [`Self::view`]. Calling this more than once has no effect.
    pub async fn activate(&mut self) {
        if self.lifecycle != Lifecycle::Created {
            return;
        }
        self.lifecycle = Lifecycle::Active;
        self.unload_guard = true;
        self.navigation_block.arm(self.services.navigation.as_ref());

        if self.new_entry {
            self.create_empty_draft();
            return;
        }
        let Some(slug) = self.slug.clone() else {
            self.receive_entry(Arc::new(EntryState::Failed(
                EditorError::MissingSlug.to_string(),
            )));
            return;
        };

        self.receive_entry(Arc::new(EntryState::Fetching));
        let state = match self
            .services
            .store
            .load_entry(&self.collection, &slug)
            .await
        {
            Ok(entry) => EntryState::Loaded(entry),
            Err(e) => {
                info!(collection = self.collection.name(), %slug, error = %e, "Entry load failed");
                EntryState::Failed(e.to_string())
            }
        };
        self.receive_entry(Arc::new(state));
    }

    /// Accepts a new entry state from the host.
    ///
    /// When the entry is loaded, its values are deserialized and a fresh
    /// draft is built. The same `Arc` handed in twice is ignored, so the
    /// draft is built at most once per entry reference. Ignored entirely
    /// after [`Self::deactivate`].
    pub fn receive_entry(&mut self, state: Arc<EntryState>) {
        if self.lifecycle == Lifecycle::Deactivated {
            debug!(collection = self.collection.name(), "Entry update after teardown ignored");
            return;
        }
        if self
            .entry
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, &state))
        {
            return;
        }

        if let EntryState::Loaded(entry) = state.as_ref() {
            let fields = self.entry_fields(Some(&entry.slug));
            let data = self.services.serializers.deserialize_values(&entry.data, fields);
            let mut editable = entry.clone();
            editable.data = data;
            debug!(
                collection = self.collection.name(),
                slug = %entry.slug,
                "Draft created from entry"
            );
            self.draft = Some(EntryDraft::from_entry(editable));
        } else if self.new_entry && self.draft.is_none() {
            self.create_empty_draft();
        }
        self.entry = Some(state);
    }

    /// Switches the editor to a new entry of the same collection and seeds
    /// an empty draft.
    pub fn start_new_entry(&mut self) {
        if self.lifecycle == Lifecycle::Deactivated {
            return;
        }
        self.new_entry = true;
        self.slug = None;
        self.entry = None;
        self.create_empty_draft();
    }

    /// Tears the editor down: the draft is discarded whether or not it has
    /// unsaved changes, and the guards are removed.
    pub fn deactivate(&mut self) {
        if self.lifecycle == Lifecycle::Deactivated {
            return;
        }
        self.lifecycle = Lifecycle::Deactivated;
        self.draft = None;
        self.unload_guard = false;
        self.navigation_block.release(self.services.navigation.as_ref());
        debug!(collection = self.collection.name(), "Editor deactivated");
    }

    fn create_empty_draft(&mut self) {
        let fields = self.entry_fields(None);
        self.draft = Some(EntryDraft::empty(&self.collection, fields));
        debug!(collection = self.collection.name(), "Empty draft created");
    }

    fn entry_fields(&self, slug: Option<&str>) -> &[FieldSchema] {
        self.collection.fields(slug).unwrap_or_default()
    }

    fn ensure_active(&self) -> EditorResult<()> {
        match self.lifecycle {
            Lifecycle::Deactivated => Err(EditorError::Inactive),
            _ => Ok(()),
        }
    }

    // ── View ─────────────────────────────────────────────────────

    /// A failed load wins over everything; a missing draft or an in-flight
    /// load shows as loading.
    pub fn view(&self) -> EditorView<'_> {
        match self.entry.as_deref() {
            Some(EntryState::Failed(message)) => EditorView::Error(message),
            Some(EntryState::Fetching) => EditorView::Loading,
            _ => match &self.draft {
                Some(draft) => EditorView::Ready(draft),
                None => EditorView::Loading,
            },
        }
    }

    pub fn collection(&self) -> &Arc<Collection> {
        &self.collection
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn is_new_entry(&self) -> bool {
        self.new_entry
    }

    pub fn draft(&self) -> Option<&EntryDraft> {
        self.draft.as_ref()
    }

    pub fn entry_state(&self) -> Option<&Arc<EntryState>> {
        self.entry.as_ref()
    }

    pub fn has_changed(&self) -> bool {
        self.draft.as_ref().is_some_and(EntryDraft::has_changed)
    }

    pub fn is_persisting(&self) -> bool {
        self.persisting.load(Ordering::Acquire)
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    pub fn navigation_block(&self) -> NavigationBlock {
        self.navigation_block
    }

    /// The most recent persist or delete failure, cleared by the next
    /// successful one.
    pub fn last_error(&self) -> Option<&EditorError> {
        self.last_error.as_ref()
    }

    /// Toolbar state for the current draft.
    pub fn toolbar(&self, workflow: &WorkflowContext) -> Toolbar {
        Toolbar::derive(
            self.collection.label(),
            EditorState {
                has_changed: self.has_changed(),
                is_new_entry: self.new_entry,
                is_persisting: self.is_persisting(),
                show_delete: self.collection.allow_deletion(),
            },
            workflow,
        )
    }

    // ── Editing ──────────────────────────────────────────────────

    pub fn change_field(
        &mut self,
        field: &str,
        value: Value,
        metadata: Option<Value>,
    ) -> EditorResult<()> {
        self.ensure_active()?;
        let draft = self.draft.as_mut().ok_or(EditorError::NotReady)?;
        draft.change_field(field, value, metadata);
        Ok(())
    }

    pub fn change_field_validation(
        &mut self,
        field: &str,
        errors: Vec<FieldError>,
    ) -> EditorResult<()> {
        self.ensure_active()?;
        let draft = self.draft.as_mut().ok_or(EditorError::NotReady)?;
        draft.change_field_validation(field, errors);
        Ok(())
    }

    // ── Unsaved-change protection ────────────────────────────────

    /// Page-unload handler. Returns the warning to show while the draft has
    /// unsaved changes, otherwise `None`.
    pub fn before_unload(&self) -> Option<&'static str> {
        (self.unload_guard && self.has_changed()).then_some(LEAVE_MESSAGE)
    }

    /// Consulted by the host before an in-app navigation while the block is
    /// armed. `None` lets the navigation through without a prompt.
    pub fn navigation_prompt(&self) -> Option<&'static str> {
        (self.navigation_block.is_blocking() && self.has_changed()).then_some(LEAVE_MESSAGE)
    }

    /// The host reports a completed navigation. The first one releases the
    /// block; later ones do nothing.
    pub fn location_changed(&mut self) {
        self.navigation_block
            .release(self.services.navigation.as_ref());
    }

    // ── Persist / delete ─────────────────────────────────────────

    /// Saves the draft and closes the editor.
    ///
    /// The store call runs one scheduler tick after the request. On failure
    /// the editor stays open with the draft intact and the error is returned
    /// and kept in [`Self::last_error`].
    pub async fn persist(&mut self) -> EditorResult<Entry> {
        let stored = self.persist_draft().await?;
        self.close();
        Ok(stored)
    }

    /// Saves the draft and starts a new entry in the same editor.
    pub async fn persist_and_new(&mut self) -> EditorResult<Entry> {
        let stored = self.persist_draft().await?;
        self.start_new_entry();
        Ok(stored)
    }

    async fn persist_draft(&mut self) -> EditorResult<Entry> {
        self.ensure_active()?;
        if self.draft.is_none() {
            return Err(EditorError::NotReady);
        }

        let result = {
            let _persisting = PersistingGuard::start(&self.persisting);
            tokio::task::yield_now().await;
            self.write_draft().await
        };

        match result {
            Ok(stored) => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.mark_persisted(&stored);
                }
                self.slug = Some(stored.slug.clone());
                self.new_entry = false;
                self.last_error = None;
                info!(collection = self.collection.name(), slug = %stored.slug, "Entry persisted");
                Ok(stored)
            }
            Err(e) => Err(self.record_failure("persist", e)),
        }
    }

    async fn write_draft(&self) -> EditorResult<Entry> {
        // Re-checked after the yield: a teardown in between drops the draft.
        self.ensure_active()?;
        let draft = self.draft.as_ref().ok_or(EditorError::NotReady)?;
        let mut entry = draft.entry().clone();
        let fields = self.entry_fields(self.slug.as_deref());
        entry.data = self.services.serializers.serialize_values(&entry.data, fields);
        entry.collection = self.collection.name().to_string();

        let stored = self
            .services
            .store
            .persist_entry(&self.collection, entry)
            .await?;
        Ok(stored)
    }

    /// Deletes the entry after the user confirms.
    ///
    /// An entry that was never persisted is simply closed. Otherwise the
    /// store delete runs one tick later, keyed by collection and slug, and
    /// the editor closes once it succeeds.
    pub async fn delete(&mut self) -> EditorResult<DeleteOutcome> {
        self.ensure_active()?;
        if !self.services.prompt.confirm(DELETE_MESSAGE) {
            debug!(collection = self.collection.name(), "Delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }
        if self.new_entry {
            if let Some(draft) = self.draft.as_mut() {
                draft.mark_clean();
            }
            self.close();
            return Ok(DeleteOutcome::Closed);
        }

        let slug = match self.slug.clone() {
            Some(slug) => slug,
            None => return Err(self.record_failure("delete", EditorError::MissingSlug)),
        };
        tokio::task::yield_now().await;
        self.ensure_active()?;

        match self
            .services
            .store
            .delete_entry(&self.collection, &slug)
            .await
        {
            Ok(()) => {
                info!(collection = self.collection.name(), %slug, "Entry deleted");
                self.last_error = None;
                if let Some(draft) = self.draft.as_mut() {
                    draft.mark_clean();
                }
                self.close();
                Ok(DeleteOutcome::Deleted)
            }
            Err(e) => Err(self.record_failure("delete", e.into())),
        }
    }

    /// Leaves the editor for the collection's entry list.
    pub fn close(&self) {
        self.services
            .navigation
            .close_entry(self.collection.name());
    }

    fn record_failure(&mut self, operation: &str, error: EditorError) -> EditorError {
        warn!(
            collection = self.collection.name(),
            slug = ?self.slug,
            operation,
            error = %error,
            "Entry {operation} failed"
        );
        self.last_error = Some(error.clone());
        error
    }
}
