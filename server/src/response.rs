//! JSON response envelope and error mapping.
//!
//! Every JSON body shares the `{message?, data?, error?}` envelope with
//! fields present only when relevant. Store-layer failures, including
//! genuine not-found conditions on fetch, update, and delete, collapse
//! into one 102 processing response carrying the error description; only
//! title validation (422) and malformed identifiers (404) are distinguished
//! before the store is reached.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use todo_store::RepoError;

/// The shared response envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T = ()> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `{message}` body.
pub fn message(status: StatusCode, message: &str) -> Response {
    let body = Envelope::<()> {
        message: Some(message.to_owned()),
        data: None,
        error: None,
    };
    (status, Json(body)).into_response()
}

/// `{data}` body.
pub fn data<T: Serialize>(status: StatusCode, data: T) -> Response {
    let body = Envelope {
        message: None,
        data: Some(data),
        error: None,
    };
    (status, Json(body)).into_response()
}

/// `{message, data}` body.
pub fn message_data<T: Serialize>(status: StatusCode, message: &str, data: T) -> Response {
    let body = Envelope {
        message: Some(message.to_owned()),
        data: Some(data),
        error: None,
    };
    (status, Json(body)).into_response()
}

/// Maps a repository failure to its HTTP response. `context` names the
/// operation that failed and becomes the message of the processing response.
pub fn repo_error(context: &str, err: RepoError) -> Response {
    match err {
        RepoError::InvalidId { .. } => message(StatusCode::NOT_FOUND, "todo not found"),
        RepoError::Validation => message(StatusCode::UNPROCESSABLE_ENTITY, "title is required"),
        RepoError::NotFound | RepoError::Store(_) => {
            let body = Envelope::<()> {
                message: Some(context.to_owned()),
                data: None,
                error: Some(err.to_string()),
            };
            (StatusCode::PROCESSING, Json(body)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_omits_absent_fields() {
        let body = Envelope::<()> {
            message: Some("ok".to_owned()),
            data: None,
            error: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"message": "ok"}));
    }

    #[test]
    fn store_layer_failures_collapse_to_processing_status() {
        let resp = repo_error("failed to fetch todo", RepoError::NotFound);
        assert_eq!(resp.status(), StatusCode::PROCESSING);
    }

    #[test]
    fn malformed_id_maps_to_not_found() {
        let err = RepoError::InvalidId {
            id: "nope".to_owned(),
        };
        let resp = repo_error("failed to fetch todo", err);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_unprocessable_entity() {
        let resp = repo_error("failed to save todo", RepoError::Validation);
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
