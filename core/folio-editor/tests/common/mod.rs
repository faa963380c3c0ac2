//! Shared fixtures and collaborator doubles for editor tests.

#![allow(dead_code)]

use async_trait::async_trait;
use folio_collections::{Collection, CollectionConfig, FileConfig};
use folio_editor::{
    ConfirmPrompt, ContentStore, EditorServices, MemoryStore, NavigationService,
    SerializerRegistry, StoreError, StoreResult,
};
use folio_model::{Entry, FieldSchema, FieldValueSerializer};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ── Collections ──────────────────────────────────────────────────

pub fn post_fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema::string("title"),
        FieldSchema::datetime("date"),
        FieldSchema::markdown("body").with_default(json!("")),
    ]
}

pub fn posts() -> Arc<Collection> {
    let config = CollectionConfig {
        create: Some(true),
        ..CollectionConfig::folder("posts", "posts", post_fields())
    };
    Arc::new(Collection::from_config(config).unwrap())
}

pub fn locked_posts() -> Arc<Collection> {
    let config = CollectionConfig {
        delete: Some(false),
        ..CollectionConfig::folder("posts", "posts", post_fields())
    };
    Arc::new(Collection::from_config(config).unwrap())
}

pub fn settings() -> Arc<Collection> {
    let config = CollectionConfig::files(
        "settings",
        vec![FileConfig {
            name: "general".into(),
            label: None,
            file: "data/general.yml".into(),
            fields: vec![FieldSchema::string("site_title"), FieldSchema::datetime("launched")],
        }],
    );
    Arc::new(Collection::from_config(config).unwrap())
}

pub fn hello_post() -> Entry {
    Entry::new(
        "posts",
        "hello",
        "posts/hello.md",
        json!({ "title": "Hello", "date": "2024-01-02", "body": "First post" }),
    )
}

// ── Serializers ──────────────────────────────────────────────────

/// Wraps stored strings as `{"raw": ...}` when editing and unwraps on save.
/// Counts calls in both directions.
#[derive(Default)]
pub struct CountingSerializer {
    pub deserialized: AtomicUsize,
    pub serialized: AtomicUsize,
}

impl CountingSerializer {
    pub fn deserialize_count(&self) -> usize {
        self.deserialized.load(Ordering::SeqCst)
    }

    pub fn serialize_count(&self) -> usize {
        self.serialized.load(Ordering::SeqCst)
    }
}

impl FieldValueSerializer for CountingSerializer {
    fn serialize(&self, value: &Value) -> Value {
        self.serialized.fetch_add(1, Ordering::SeqCst);
        value.get("raw").cloned().unwrap_or_else(|| value.clone())
    }

    fn deserialize(&self, value: &Value) -> Value {
        self.deserialized.fetch_add(1, Ordering::SeqCst);
        json!({ "raw": value })
    }
}

pub fn registry_with(widget: &str, serializer: Arc<dyn FieldValueSerializer>) -> SerializerRegistry {
    let mut registry = SerializerRegistry::new();
    registry.register(widget, serializer);
    registry
}

// ── Collaborators ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Block,
    Unblock,
    Close(String),
}

#[derive(Default)]
pub struct RecordingNavigation {
    events: Mutex<Vec<NavEvent>>,
}

impl RecordingNavigation {
    pub fn events(&self) -> Vec<NavEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, event: &NavEvent) -> usize {
        self.events().iter().filter(|e| *e == event).count()
    }

    pub fn closed(&self) -> bool {
        self.events()
            .iter()
            .any(|e| matches!(e, NavEvent::Close(_)))
    }
}

impl NavigationService for RecordingNavigation {
    fn block(&self) {
        self.events.lock().unwrap().push(NavEvent::Block);
    }

    fn unblock(&self) {
        self.events.lock().unwrap().push(NavEvent::Unblock);
    }

    fn close_entry(&self, collection: &str) {
        self.events
            .lock()
            .unwrap()
            .push(NavEvent::Close(collection.to_string()));
    }
}

pub struct FixedPrompt {
    answer: AtomicBool,
    pub asked: Mutex<Vec<String>>,
}

impl FixedPrompt {
    pub fn new(answer: bool) -> Self {
        Self {
            answer: AtomicBool::new(answer),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn times_asked(&self) -> usize {
        self.asked.lock().unwrap().len()
    }
}

impl ConfirmPrompt for FixedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.asked.lock().unwrap().push(message.to_string());
        self.answer.load(Ordering::SeqCst)
    }
}

/// Loads from an inner memory store; every write fails.
#[derive(Default)]
pub struct ReadOnlyStore {
    pub inner: MemoryStore,
    pub writes: AtomicUsize,
}

#[async_trait]
impl ContentStore for ReadOnlyStore {
    async fn load_entry(&self, collection: &Collection, slug: &str) -> StoreResult<Entry> {
        self.inner.load_entry(collection, slug).await
    }

    async fn persist_entry(&self, _collection: &Collection, _entry: Entry) -> StoreResult<Entry> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Backend("read-only".into()))
    }

    async fn delete_entry(&self, _collection: &Collection, _slug: &str) -> StoreResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Backend("read-only".into()))
    }
}

// ── Harness ──────────────────────────────────────────────────────

pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub navigation: Arc<RecordingNavigation>,
    pub prompt: Arc<FixedPrompt>,
    pub serializer: Arc<CountingSerializer>,
}

impl Harness {
    /// A memory store seeded with [`hello_post`], a prompt that accepts, and
    /// a counting serializer on the `datetime` widget.
    pub async fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        store.insert(hello_post()).await;
        Self {
            store,
            navigation: Arc::new(RecordingNavigation::default()),
            prompt: Arc::new(FixedPrompt::new(true)),
            serializer: Arc::new(CountingSerializer::default()),
        }
    }

    pub fn declining(mut self) -> Self {
        self.prompt = Arc::new(FixedPrompt::new(false));
        self
    }

    pub fn services(&self) -> EditorServices {
        self.services_with_store(self.store.clone())
    }

    pub fn services_with_store(&self, store: Arc<dyn ContentStore>) -> EditorServices {
        EditorServices {
            store,
            navigation: self.navigation.clone(),
            prompt: self.prompt.clone(),
            serializers: Arc::new(registry_with("datetime", self.serializer.clone())),
        }
    }
}
