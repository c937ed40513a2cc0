use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, MockState, RecordedRequest};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
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

// --- echo ---

#[tokio::test]
async fn get_is_echoed_with_query() {
    let resp = app(MockState::default())
        .oneshot(
            Request::builder()
                .uri("/api/books?search=dune&page=2")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echoed: RecordedRequest = body_json(resp).await;
    assert_eq!(echoed.method, "GET");
    assert_eq!(echoed.path, "/api/books");
    assert_eq!(
        echoed.query,
        vec![
            ("search".to_string(), "dune".to_string()),
            ("page".to_string(), "2".to_string()),
        ]
    );
    assert!(echoed.body.is_none());
    assert!(echoed.content_type.is_none());
}

#[tokio::test]
async fn post_body_is_echoed_verbatim() {
    let resp = app(MockState::default())
        .oneshot(json_request(
            "POST",
            "/api/transactions/borrow",
            r#"{"book_id":1,"member_id":2}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echoed: RecordedRequest = body_json(resp).await;
    assert_eq!(echoed.method, "POST");
    assert_eq!(echoed.content_type.as_deref(), Some("application/json"));
    assert_eq!(echoed.body.as_deref(), Some(r#"{"book_id":1,"member_id":2}"#));
}

// --- configured status ---

#[tokio::test]
async fn configured_status_applies_to_every_route() {
    let state = MockState::new(StatusCode::NOT_FOUND);
    let resp = app(state)
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/members/9")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let echoed: RecordedRequest = body_json(resp).await;
    assert_eq!(echoed.method, "DELETE");
    assert_eq!(echoed.path, "/api/members/9");
}

#[tokio::test]
async fn server_error_still_has_a_body() {
    let resp = app(MockState::new(StatusCode::INTERNAL_SERVER_ERROR))
        .oneshot(json_request("PUT", "/api/books/1", r#"{"title":"x"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body_bytes(resp).await.is_empty());
}

// --- journal ---

#[tokio::test]
async fn journal_lists_requests_in_arrival_order() {
    use tower::Service;

    let state = MockState::default();
    let mut app = app(state.clone()).into_service();

    for uri in ["/api/books/categories", "/api/books/available"] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(Request::builder().uri(uri).body(String::new()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .uri("/__journal")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let journal: Vec<RecordedRequest> = body_json(resp).await;
    let paths: Vec<&str> = journal.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, ["/api/books/categories", "/api/books/available"]);

    // reading the journal is not recorded
    assert_eq!(state.journal.read().await.len(), 2);
}
