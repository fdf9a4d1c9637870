// Router composition and mounting tests

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use edgeserve::config::AppConfig;
use edgeserve::routers::default_route_groups;
use edgeserve::server::{inner_router, outer_router, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_state() -> AppState {
    AppState {
        config: AppConfig::default(),
        credential_path: None,
    }
}

fn inner() -> Router {
    inner_router(test_state(), &default_route_groups()).unwrap()
}

fn outer() -> Router {
    outer_router(inner())
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_inner_liveness_payload() {
    let response = inner()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_adapter_liveness_payload() {
    // The adapter answers its own diagnostic endpoint; no provisioning has
    // run and no inner startup state is consulted.
    let response = outer()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_inner_routes_reachable_through_adapter() {
    // The mount is transparent: path, method, and body reach the group
    // unmodified, unprefixed by the adapter.
    let payload = json!({"input": "summarize this document"});
    let response = outer()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/process")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"accepted": true, "input": "summarize this document"})
    );
}

#[tokio::test]
async fn test_inner_root_reachable_through_adapter() {
    let response = outer()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_stream_group_serves_event_stream() {
    let response = outer()
        .oneshot(Request::builder().uri("/stream").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/event-stream"
    );
}

#[tokio::test]
async fn test_unknown_path_delegates_to_inner_404() {
    let response = outer()
        .oneshot(
            Request::builder()
                .uri("/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_inner_cors_allows_listed_origin() {
    let response = inner()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/process")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_inner_cors_rejects_unlisted_origin() {
    let response = inner()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/process")
                .header(header::ORIGIN, "https://evil.example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_adapter_cors_allows_any_origin() {
    let response = outer()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/health")
                .header(header::ORIGIN, "https://anywhere.example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "https://anywhere.example.com"
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_adapter_assigns_request_ids() {
    let response = outer()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().get("x-request-id").is_some());
}

#[tokio::test]
async fn test_invalid_configured_origin_fails_composition() {
    let mut state = test_state();
    state.config.cors.allowed_origins = vec!["not a header value\u{7f}".to_string()];

    assert!(inner_router(state, &default_route_groups()).is_err());
}
