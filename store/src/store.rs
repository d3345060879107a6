//! The record-store interface and its backends.
//!
//! # Design
//! [`RecordStore`] is the seam between the repository and whatever engine
//! holds the collection. [`SledStore`] persists JSON documents in a named
//! tree keyed by raw identifier bytes; [`MemoryStore`] keeps the same
//! contract in an async-locked map for tests and local runs. Both iterate
//! in identifier order, which approximates insertion order because
//! identifiers lead with their creation timestamp.

use std::collections::BTreeMap;
use std::future::Future;
use std::path::Path;

use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::id::ObjectId;
use crate::types::TodoRecord;

/// Interface to the document store holding the todo collection.
pub trait RecordStore: Send + Sync + 'static {
    /// Every record in the collection, in store order.
    fn find_all(&self) -> impl Future<Output = Result<Vec<TodoRecord>, StoreError>> + Send;

    /// The record with the given identifier, or [`StoreError::NotFound`].
    fn find_by_id(
        &self,
        id: &ObjectId,
    ) -> impl Future<Output = Result<TodoRecord, StoreError>> + Send;

    /// Persists a freshly-created record.
    fn insert(&self, record: &TodoRecord) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Rewrites title and completed on an existing record, leaving the
    /// identifier and creation timestamp untouched.
    fn update_by_id(
        &self,
        id: &ObjectId,
        title: &str,
        completed: bool,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Removes the record with the given identifier.
    fn delete_by_id(&self, id: &ObjectId) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// In-memory backend: the whole collection behind one async lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<ObjectId, TodoRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<TodoRecord>, StoreError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<TodoRecord, StoreError> {
        self.records
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn insert(&self, record: &TodoRecord) -> Result<(), StoreError> {
        self.records.write().await.insert(record.id, record.clone());
        Ok(())
    }

    async fn update_by_id(
        &self,
        id: &ObjectId,
        title: &str,
        completed: bool,
    ) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        let record = records.get_mut(id).ok_or(StoreError::NotFound)?;
        record.title = title.to_owned();
        record.completed = completed;
        Ok(())
    }

    async fn delete_by_id(&self, id: &ObjectId) -> Result<(), StoreError> {
        self.records
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

/// Persistent backend: one sled tree of JSON documents per collection.
pub struct SledStore {
    db: sled::Db,
    tree: sled::Tree,
}

impl SledStore {
    /// Opens (or creates) the store at `path` and binds the named collection.
    pub fn open(path: impl AsRef<Path>, collection: &str) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        let tree = db.open_tree(collection)?;
        Ok(Self { db, tree })
    }

    fn decode(bytes: &[u8]) -> Result<TodoRecord, StoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn flush(&self) -> Result<(), StoreError> {
        self.db.flush()?;
        Ok(())
    }
}

impl RecordStore for SledStore {
    async fn find_all(&self) -> Result<Vec<TodoRecord>, StoreError> {
        let mut records = Vec::new();
        for entry in self.tree.iter() {
            let (_, value) = entry?;
            records.push(Self::decode(&value)?);
        }
        Ok(records)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<TodoRecord, StoreError> {
        match self.tree.get(id.as_bytes())? {
            Some(value) => Self::decode(&value),
            None => Err(StoreError::NotFound),
        }
    }

    async fn insert(&self, record: &TodoRecord) -> Result<(), StoreError> {
        let value = serde_json::to_vec(record)?;
        self.tree.insert(record.id.as_bytes(), value)?;
        self.flush()
    }

    async fn update_by_id(
        &self,
        id: &ObjectId,
        title: &str,
        completed: bool,
    ) -> Result<(), StoreError> {
        let mut record = self.find_by_id(id).await?;
        record.title = title.to_owned();
        record.completed = completed;
        let value = serde_json::to_vec(&record)?;
        self.tree.insert(id.as_bytes(), value)?;
        self.flush()
    }

    async fn delete_by_id(&self, id: &ObjectId) -> Result<(), StoreError> {
        match self.tree.remove(id.as_bytes())? {
            Some(_) => self.flush(),
            None => Err(StoreError::NotFound),
        }
    }
}
