//! Record and wire types for the todo collection.
//!
//! # Design
//! `TodoRecord` is the stored document shape (`_id` key, as laid out in the
//! collection) and `Todo` is the wire projection handed to HTTP clients,
//! with the identifier re-encoded as a string. `TodoInput` is the request
//! payload for create and update; both of its fields default, so a missing
//! title decodes as the empty string and is rejected by validation rather
//! than by the decoder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::ObjectId;

/// Stored form of a todo, as persisted in the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub completed: bool,
    /// Set once at creation; update operations never touch it.
    pub created_at: DateTime<Utc>,
}

/// Wire form of a todo as exchanged with HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: ObjectId,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<TodoRecord> for Todo {
    fn from(record: TodoRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            completed: record.completed,
            created_at: record.created_at,
        }
    }
}

/// Request payload for creating or updating a todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}
