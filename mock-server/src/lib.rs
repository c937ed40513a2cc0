//! Recording echo server for exercising the library API client over HTTP.
//!
//! Every request, on any path and method, is appended to a shared journal
//! and echoed back as JSON with the configured status code. No library
//! business logic lives here.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, Method, Uri},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

pub use axum::http::StatusCode;

/// One request as the server saw it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub content_type: Option<String>,
    pub body: Option<String>,
}

pub type Journal = Arc<RwLock<Vec<RecordedRequest>>>;

#[derive(Clone, Debug)]
pub struct MockState {
    pub status: StatusCode,
    pub journal: Journal,
}

impl MockState {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            journal: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for MockState {
    fn default() -> Self {
        Self::new(StatusCode::OK)
    }
}

/// Echo router answering every recorded request with `state.status`.
/// `GET /__journal` returns the journal itself and is not recorded.
pub fn app(state: MockState) -> Router {
    Router::new()
        .route("/__journal", get(journal))
        .fallback(record)
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, Json<RecordedRequest>) {
    let recorded = RecordedRequest {
        method: method.as_str().to_string(),
        path: uri.path().to_string(),
        query,
        content_type: headers
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: (!body.is_empty()).then_some(body),
    };
    info!(
        method = %recorded.method,
        path = %recorded.path,
        status = state.status.as_u16(),
        "recorded request"
    );
    state.journal.write().await.push(recorded.clone());
    (state.status, Json(recorded))
}

async fn journal(State(state): State<MockState>) -> Json<Vec<RecordedRequest>> {
    Json(state.journal.read().await.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_request_serializes_to_json() {
        let recorded = RecordedRequest {
            method: "POST".to_string(),
            path: "/api/transactions/borrow".to_string(),
            query: Vec::new(),
            content_type: Some("application/json".to_string()),
            body: Some(r#"{"book_id":1,"member_id":2}"#.to_string()),
        };
        let json = serde_json::to_value(&recorded).unwrap();
        assert_eq!(json["method"], "POST");
        assert_eq!(json["path"], "/api/transactions/borrow");
        assert_eq!(json["query"], serde_json::json!([]));
        assert_eq!(json["content_type"], "application/json");
    }

    #[test]
    fn query_pairs_serialize_as_arrays() {
        let recorded = RecordedRequest {
            method: "GET".to_string(),
            path: "/api/books".to_string(),
            query: vec![("page".to_string(), "2".to_string())],
            content_type: None,
            body: None,
        };
        let json = serde_json::to_value(&recorded).unwrap();
        assert_eq!(json["query"], serde_json::json!([["page", "2"]]));
        assert!(json["body"].is_null());
    }

    #[test]
    fn default_state_answers_ok_with_empty_journal() {
        let state = MockState::default();
        assert_eq!(state.status, StatusCode::OK);
        assert!(state.journal.try_read().unwrap().is_empty());
    }
}
