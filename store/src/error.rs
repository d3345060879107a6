//! Error taxonomy for the store and repository layers.
//!
//! # Design
//! `NotFound` gets a dedicated variant at both layers because callers
//! distinguish "the record does not exist" from "the store failed". The
//! conversion between the layers routes a backend `NotFound` to the
//! repository's own variant; everything else surfaces as a store failure.

use thiserror::Error;

/// Failures raised by a [`RecordStore`](crate::store::RecordStore) backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record matches the identifier.
    #[error("record not found")]
    NotFound,

    #[error("database error: {source}")]
    Database {
        #[from]
        source: sled::Error,
    },

    #[error("serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Failures surfaced by [`Repository`](crate::repo::Repository) operations.
#[derive(Error, Debug)]
pub enum RepoError {
    /// The write would leave the record without a title.
    #[error("title is required")]
    Validation,

    /// The identifier is not a well-formed 24-hex-character token.
    #[error("invalid todo id: {id}")]
    InvalidId { id: String },

    /// A well-formed identifier matched no record.
    #[error("todo not found")]
    NotFound,

    /// The store itself failed.
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for RepoError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => RepoError::NotFound,
            other => RepoError::Store(other),
        }
    }
}
