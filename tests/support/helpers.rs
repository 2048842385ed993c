// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{DummyClock, InMemoryArticleStore};
use axum::body;
use axum::http::StatusCode;
use kiji_core::application::ports::time::Clock;
use kiji_core::application::services::{ApplicationServices, ArticlePorts};
use kiji_core::domain::article::ListingPolicy;
use kiji_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

/// Wire every port to the same in-memory store.
pub fn build_services_with_clock(
    store: Arc<InMemoryArticleStore>,
    clock: Arc<dyn Clock>,
    policy: ListingPolicy,
) -> ApplicationServices {
    let ports = ArticlePorts {
        article_write_repo: store.clone(),
        article_read_repo: store.clone(),
        admin_repo: store.clone(),
        category_repo: store.clone(),
        comment_repo: store,
        clock,
    };
    ApplicationServices::new(ports, policy)
}

pub fn build_services(store: Arc<InMemoryArticleStore>, policy: ListingPolicy) -> ApplicationServices {
    build_services_with_clock(store, Arc::new(DummyClock), policy)
}

pub fn make_test_router(store: Arc<InMemoryArticleStore>) -> axum::Router {
    let services = Arc::new(build_services(store, ListingPolicy::Conjunctive));
    build_router(HttpState { services }, &[])
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
