//! Persistence layer for the todo service.
//!
//! # Overview
//! Identifier, record, and wire types for the todo collection, the
//! [`RecordStore`] interface over the document store, and the [`Repository`]
//! that HTTP handlers call.
//!
//! # Design
//! - `Repository` is constructed explicitly with its store handle and shared
//!   by reference; there are no ambient globals.
//! - Malformed identifiers are rejected before the store is ever contacted.
//! - Stored and wire representations are separate types with an explicit
//!   projection between them, so the persisted layout cannot drift silently.
//! - Two backends implement `RecordStore`: a persistent sled tree and an
//!   in-memory map for tests and local runs.

pub mod error;
pub mod id;
pub mod repo;
pub mod store;
pub mod types;

pub use error::{RepoError, StoreError};
pub use id::ObjectId;
pub use repo::Repository;
pub use store::{MemoryStore, RecordStore, SledStore};
pub use types::{Todo, TodoInput, TodoRecord};
