// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use litreview::application::{
    ports::{ArticleSourcePort, QueryAnalyzerPort, SummarizerPort},
    services::ApplicationServices,
};
use litreview::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub fn build_test_state(
    source: Arc<ArticleSourcePort>,
    analyzer: Arc<QueryAnalyzerPort>,
    summarizer: Option<Arc<SummarizerPort>>,
) -> HttpState {
    HttpState {
        services: Arc::new(ApplicationServices::new(source, analyzer, summarizer)),
    }
}

pub fn make_test_router(
    source: Arc<ArticleSourcePort>,
    analyzer: Arc<QueryAnalyzerPort>,
) -> axum::Router {
    build_router(
        build_test_state(source, analyzer, None),
        &["http://localhost:3000".to_string()],
    )
}

pub fn make_summarizing_router(
    source: Arc<ArticleSourcePort>,
    analyzer: Arc<QueryAnalyzerPort>,
    summarizer: Arc<SummarizerPort>,
) -> axum::Router {
    build_router(
        build_test_state(source, analyzer, Some(summarizer)),
        &["http://localhost:3000".to_string()],
    )
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_server(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    format!("http://{addr}")
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    let json = serde_json::from_slice(&bytes).expect("valid json body");
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected_status, "unexpected status, body: {json}");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
