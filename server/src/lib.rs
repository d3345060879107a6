//! HTTP service exposing CRUD over a single todo collection.
//!
//! # Overview
//! Five operations (list, create, fetch-one, update, delete) plus a static
//! home page, dispatched by an axum router to stateless handlers that call
//! a [`Repository`] shared across requests. All JSON responses use the
//! `{message?, data?, error?}` envelope from [`response`].
//!
//! # Design
//! - The repository is constructed explicitly in `main` and handed into
//!   [`app`]; handlers reach it through [`AppState`]. No ambient globals.
//! - The todo sub-router is nested at `/todos`; every route passes through
//!   the request-trace and deadline middleware.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod server;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use todo_store::{RecordStore, Repository};

pub use handlers::AppState;

/// Builds the application router around an explicitly-constructed repository.
pub fn app<S: RecordStore>(repo: Repository<S>) -> Router {
    let state = AppState {
        repo: Arc::new(repo),
    };
    Router::new()
        .route("/", get(handlers::home))
        .nest("/todos", todo_routes::<S>())
        .layer(axum::middleware::from_fn(middleware::deadline))
        .layer(axum::middleware::from_fn(middleware::trace))
        .with_state(state)
}

/// The `/todos` sub-router.
fn todo_routes<S: RecordStore>() -> Router<AppState<S>> {
    Router::new()
        .route(
            "/",
            get(handlers::list_todos::<S>).post(handlers::create_todo::<S>),
        )
        .route(
            "/{id}",
            get(handlers::get_todo::<S>)
                .put(handlers::update_todo::<S>)
                .delete(handlers::delete_todo::<S>),
        )
}
