//! In-memory record store
//!
//! A keyed, insertion-ordered collection shared by every domain that keeps
//! its records in process memory. Each entity type owns one [`MemoryStore`];
//! nothing is persisted and the contents reset when the process restarts.
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use record_store::{MemoryStore, Record};
//!
//! #[derive(Clone)]
//! struct Note {
//!     id: String,
//!     text: String,
//!     created_at: DateTime<Utc>,
//! }
//!
//! impl Record for Note {
//!     type Draft = String;
//!     type Patch = String;
//!
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//!
//!     fn from_draft(id: String, created_at: DateTime<Utc>, text: String) -> Self {
//!         Self { id, text, created_at }
//!     }
//!
//!     fn apply_patch(&mut self, text: String) {
//!         self.text = text;
//!     }
//! }
//!
//! # async fn example() {
//! let store = MemoryStore::<Note>::new();
//! let note = store.insert("hello".to_string()).await;
//! assert_eq!(store.get(&note.id).await.map(|n| n.text), Some("hello".to_string()));
//! # }
//! ```

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A record that can live in a [`MemoryStore`].
///
/// `Draft` carries the already-validated fields needed to build a new record;
/// `Patch` carries the fields of a partial update.
pub trait Record: Clone + Send + Sync + 'static {
    type Draft: Send;
    type Patch: Send;

    /// Stable identifier of the record.
    fn id(&self) -> &str;

    /// Build a record from a draft with a freshly assigned id and timestamp.
    fn from_draft(id: String, created_at: DateTime<Utc>, draft: Self::Draft) -> Self;

    /// Overwrite the attributes present in `patch`, leaving the rest untouched.
    /// Must not change the id or the creation timestamp.
    fn apply_patch(&mut self, patch: Self::Patch);
}

/// Insertion-ordered in-memory collection of `T`.
///
/// Cloning the store is cheap and yields a handle to the same collection.
#[derive(Debug)]
pub struct MemoryStore<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store pre-populated with `records`, kept in iteration order.
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records.into_iter().collect())),
        }
    }

    /// Append a new record built from `draft` and return it.
    pub async fn insert(&self, draft: T::Draft) -> T {
        let record = T::from_draft(next_id(), Utc::now(), draft);
        let mut records = self.records.write().await;
        records.push(record.clone());
        tracing::debug!(id = record.id(), total = records.len(), "Inserted record");
        record
    }

    pub async fn get(&self, id: &str) -> Option<T> {
        let records = self.records.read().await;
        records.iter().find(|r| r.id() == id).cloned()
    }

    /// Apply `patch` to the record with `id`; `None` when no such record exists.
    pub async fn update(&self, id: &str, patch: T::Patch) -> Option<T> {
        let mut records = self.records.write().await;
        let record = records.iter_mut().find(|r| r.id() == id)?;
        record.apply_patch(patch);
        Some(record.clone())
    }

    /// Remove and return the record with `id`.
    pub async fn delete(&self, id: &str) -> Option<T> {
        let mut records = self.records.write().await;
        let index = records.iter().position(|r| r.id() == id)?;
        let removed = records.remove(index);
        tracing::debug!(id, total = records.len(), "Removed record");
        Some(removed)
    }

    /// Snapshot of every record in insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

// v7 ids are time-ordered and carry random bits, so rapid inserts never collide.
fn next_id() -> String {
    Uuid::now_v7().to_string()
}
