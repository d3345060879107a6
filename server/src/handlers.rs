//! HTTP handlers for the todo collection.
//!
//! Each handler is a pure request→response transformation: validate input,
//! call the repository, map the result through [`response`](crate::response).
//! Path identifiers arrive as plain strings and are checked here so a
//! malformed identifier produces the 404 envelope rather than an extractor
//! rejection; body decode failures are caught through the `Json` extractor's
//! rejection and mapped to the 422 envelope.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, Response};
use axum::Json;
use serde::Serialize;
use todo_store::{ObjectId, RecordStore, Repository, TodoInput};

use crate::response;

/// Shared application dependencies, one per process.
pub struct AppState<S: RecordStore> {
    pub repo: Arc<Repository<S>>,
}

impl<S: RecordStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

const HOME_PAGE: &str = include_str!("../static/home.html");

/// GET / — static home page.
pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

/// GET /todos — every todo in the collection.
pub async fn list_todos<S: RecordStore>(State(state): State<AppState<S>>) -> Response {
    match state.repo.list_all().await {
        Ok(todos) => response::data(StatusCode::OK, todos),
        Err(err) => response::repo_error("failed to fetch todos", err),
    }
}

/// Identifier payload returned by create.
#[derive(Debug, Serialize)]
struct CreatedTodo {
    id: String,
}

/// POST /todos — create a todo from the request body.
pub async fn create_todo<S: RecordStore>(
    State(state): State<AppState<S>>,
    payload: Result<Json<TodoInput>, JsonRejection>,
) -> Response {
    let Ok(Json(input)) = payload else {
        return response::message(StatusCode::UNPROCESSABLE_ENTITY, "invalid request data");
    };
    if input.title.is_empty() {
        return response::message(StatusCode::UNPROCESSABLE_ENTITY, "title is required");
    }
    match state.repo.insert(&input.title, input.completed).await {
        Ok(id) => response::message_data(
            StatusCode::CREATED,
            "todo created successfully",
            CreatedTodo { id: id.to_hex() },
        ),
        Err(err) => response::repo_error("failed to save todo", err),
    }
}

/// GET /todos/{id} — fetch one todo.
pub async fn get_todo<S: RecordStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Response {
    if ObjectId::parse(&id).is_err() {
        return response::message(StatusCode::NOT_FOUND, "todo not found");
    }
    match state.repo.find_by_id(&id).await {
        Ok(todo) => response::data(StatusCode::OK, todo),
        Err(err) => response::repo_error("failed to fetch todo", err),
    }
}

/// PUT /todos/{id} — replace title and completed on an existing todo.
pub async fn update_todo<S: RecordStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    payload: Result<Json<TodoInput>, JsonRejection>,
) -> Response {
    let id = id.trim();
    if ObjectId::parse(id).is_err() {
        return response::message(StatusCode::NOT_FOUND, "todo not found");
    }
    let Ok(Json(input)) = payload else {
        return response::message(StatusCode::UNPROCESSABLE_ENTITY, "invalid request data");
    };
    if input.title.is_empty() {
        return response::message(StatusCode::UNPROCESSABLE_ENTITY, "title is required");
    }
    match state.repo.update_by_id(id, &input.title, input.completed).await {
        Ok(()) => response::message(StatusCode::OK, "todo updated successfully"),
        Err(err) => response::repo_error("failed to update todo", err),
    }
}

/// DELETE /todos/{id} — remove one todo.
pub async fn delete_todo<S: RecordStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Response {
    let id = id.trim();
    if ObjectId::parse(id).is_err() {
        return response::message(StatusCode::NOT_FOUND, "todo not found");
    }
    match state.repo.delete_by_id(id).await {
        Ok(()) => response::message(StatusCode::OK, "todo deleted successfully"),
        Err(err) => response::repo_error("failed to delete todo", err),
    }
}
