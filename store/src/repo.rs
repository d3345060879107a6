//! The mapping/access layer between HTTP handlers and the record store.
//!
//! # Design
//! `Repository` owns the store handle and is where identifiers are parsed
//! and titles validated: malformed identifiers short-circuit before the
//! store is contacted, and no write path accepts an empty title. Updates
//! send only title and completed to the store, so `created_at` stays
//! write-once.

use chrono::Utc;

use crate::error::RepoError;
use crate::id::ObjectId;
use crate::store::RecordStore;
use crate::types::{Todo, TodoRecord};

/// Repository over a [`RecordStore`] backend.
#[derive(Debug)]
pub struct Repository<S> {
    store: S,
}

impl<S: RecordStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Every todo in the collection, in store order.
    pub async fn list_all(&self) -> Result<Vec<Todo>, RepoError> {
        let records = self.store.find_all().await?;
        Ok(records.into_iter().map(Todo::from).collect())
    }

    /// Looks up a single todo by its string identifier.
    pub async fn find_by_id(&self, id: &str) -> Result<Todo, RepoError> {
        let id = parse_id(id)?;
        let record = self.store.find_by_id(&id).await?;
        Ok(Todo::from(record))
    }

    /// Creates a record with a fresh identifier and creation timestamp and
    /// returns the identifier.
    pub async fn insert(&self, title: &str, completed: bool) -> Result<ObjectId, RepoError> {
        if title.is_empty() {
            return Err(RepoError::Validation);
        }
        let record = TodoRecord {
            id: ObjectId::new(),
            title: title.to_owned(),
            completed,
            created_at: Utc::now(),
        };
        self.store.insert(&record).await?;
        Ok(record.id)
    }

    /// Replaces title and completed on an existing record.
    pub async fn update_by_id(
        &self,
        id: &str,
        title: &str,
        completed: bool,
    ) -> Result<(), RepoError> {
        let id = parse_id(id)?;
        if title.is_empty() {
            return Err(RepoError::Validation);
        }
        Ok(self.store.update_by_id(&id, title, completed).await?)
    }

    /// Removes a record.
    pub async fn delete_by_id(&self, id: &str) -> Result<(), RepoError> {
        let id = parse_id(id)?;
        Ok(self.store.delete_by_id(&id).await?)
    }
}

fn parse_id(id: &str) -> Result<ObjectId, RepoError> {
    ObjectId::parse(id).map_err(|_| RepoError::InvalidId { id: id.to_owned() })
}
