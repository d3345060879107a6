//! HTTP-level tests: every handler exercised in-process over the real
//! router, backed by the in-memory store.

use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use todo_server::app;
use todo_store::{MemoryStore, Repository, Todo};
use tower::ServiceExt;

fn test_app() -> axum::Router {
    app(Repository::new(MemoryStore::new()))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- home ---

#[tokio::test]
async fn home_serves_static_page() {
    let resp = test_app().oneshot(get_request("/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page = String::from_utf8(body_bytes(resp).await.to_vec()).unwrap();
    assert!(page.contains("Todo API"));
}

// --- list ---

#[tokio::test]
async fn list_todos_empty_is_an_array() {
    let resp = test_app().oneshot(get_request("/todos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"], json!([]));
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_201_with_id() {
    let resp = test_app()
        .oneshot(json_request("POST", "/todos", r#"{"title":"Buy milk"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "todo created successfully");
    let id = body["data"]["id"].as_str().unwrap();
    assert_eq!(id.len(), 24);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn create_todo_empty_or_missing_title_returns_422() {
    for payload in [r#"{"title":""}"#, r#"{"completed":true}"#, "{}"] {
        let resp = test_app()
            .oneshot(json_request("POST", "/todos", payload))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(resp).await;
        assert_eq!(body["message"], "title is required");
    }
}

#[tokio::test]
async fn create_todo_rejected_title_persists_nothing() {
    use tower::Service;

    let mut app = test_app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/todos", r#"{"title":""}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/todos"))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn create_todo_malformed_body_returns_422() {
    let resp = test_app()
        .oneshot(json_request("POST", "/todos", "{not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "invalid request data");
}

// --- fetch one ---

#[tokio::test]
async fn get_todo_malformed_id_returns_404() {
    let resp = test_app()
        .oneshot(get_request("/todos/not-an-id"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "todo not found");
}

#[tokio::test]
async fn get_todo_unknown_id_returns_processing_status() {
    let resp = test_app()
        .oneshot(get_request("/todos/0123456789abcdef01234567"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::PROCESSING);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "failed to fetch todo");
    assert!(body["error"].is_string());
}

// --- update ---

#[tokio::test]
async fn update_todo_malformed_id_returns_404() {
    let resp = test_app()
        .oneshot(json_request("PUT", "/todos/not-an-id", r#"{"title":"Nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "todo not found");
}

#[tokio::test]
async fn update_todo_empty_title_returns_422() {
    let resp = test_app()
        .oneshot(json_request(
            "PUT",
            "/todos/0123456789abcdef01234567",
            r#"{"title":""}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "title is required");
}

#[tokio::test]
async fn update_todo_unknown_id_returns_processing_status() {
    let resp = test_app()
        .oneshot(json_request(
            "PUT",
            "/todos/0123456789abcdef01234567",
            r#"{"title":"Nope"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::PROCESSING);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "failed to update todo");
    assert!(body["error"].is_string());
}

// --- delete ---

#[tokio::test]
async fn delete_todo_malformed_id_returns_404() {
    let resp = test_app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/todos/not-an-id")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "todo not found");
}

#[tokio::test]
async fn delete_todo_unknown_id_returns_processing_status() {
    let resp = test_app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/todos/0123456789abcdef01234567")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::PROCESSING);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "failed to delete todo");
    assert!(body["error"].is_string());
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = test_app().into_service();
    let before = chrono::Utc::now();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/todos", r#"{"title":"Walk dog"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    let id = body["data"]["id"].as_str().unwrap().to_owned();

    // fetch — all fields present, created_at inside the test window
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/todos/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let todo: Todo = serde_json::from_value(body["data"].clone()).unwrap();
    assert_eq!(todo.id.to_hex(), id);
    assert_eq!(todo.title, "Walk dog");
    assert!(!todo.completed);
    assert!(todo.created_at >= before && todo.created_at <= chrono::Utc::now());
    let created_at = todo.created_at;

    // list — contains the one todo
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/todos"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let todos = body["data"].as_array().unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["id"], id.as_str());

    // update — both fields replaced, created_at untouched
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/todos/{id}"),
            r#"{"title":"Walk cat","completed":true}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "todo updated successfully");

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/todos/{id}")))
        .await
        .unwrap();
    let body = body_json(resp).await;
    let todo: Todo = serde_json::from_value(body["data"].clone()).unwrap();
    assert_eq!(todo.title, "Walk cat");
    assert!(todo.completed);
    assert_eq!(todo.created_at, created_at);

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri(&format!("/todos/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "todo deleted successfully");

    // fetch after delete — collapses into the processing response
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/todos/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::PROCESSING);

    // list after delete — empty again
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/todos"))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["data"], json!([]));
}
