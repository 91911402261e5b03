use std::sync::Arc;

use axum::Router;
use axum::routing::any;

use super::*;
use crate::config::ServerConfig;

fn state_with_upstream(url: Option<String>) -> AppState {
    AppState::new(ServerConfig { staging_api_url: url, staging_timeout_secs: 5, ..ServerConfig::default() }).unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Upstream stub echoing what it received as JSON.
async fn spawn_echo_upstream() -> String {
    async fn echo(method: Method, RawQuery(query): RawQuery, headers: HeaderMap, body: Bytes) -> Response {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        let reply = serde_json::json!({
            "method": method.as_str(),
            "query": query,
            "content_type": content_type,
            "body": String::from_utf8_lossy(&body),
        });
        (StatusCode::CREATED, Json(reply)).into_response()
    }

    async fn missing() -> Response {
        (StatusCode::NOT_FOUND, Json(serde_json::json!({ "detail": "session not found" }))).into_response()
    }

    let app = Router::new()
        .route("/sessions/{id}/missing", any(missing))
        .route("/{*rest}", any(echo));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_joins_base_and_path() {
    assert_eq!(upstream_url("http://up.test", "sessions/abc/save", None), "http://up.test/sessions/abc/save");
}

#[test]
fn upstream_url_normalizes_slashes() {
    assert_eq!(upstream_url("http://up.test/api/", "/sessions", None), "http://up.test/api/sessions");
}

#[test]
fn upstream_url_keeps_query() {
    assert_eq!(upstream_url("http://up.test", "sessions", Some("limit=5&x=1")), "http://up.test/sessions?limit=5&x=1");
}

#[test]
fn upstream_url_drops_empty_query() {
    assert_eq!(upstream_url("http://up.test", "sessions", Some("")), "http://up.test/sessions");
}

// =============================================================================
// forward
// =============================================================================

#[tokio::test]
async fn forward_without_upstream_is_unavailable() {
    let response = forward(
        State(state_with_upstream(None)),
        Path("sessions".to_owned()),
        Method::POST,
        RawQuery(None),
        HeaderMap::new(),
        Bytes::new(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("not configured"));
}

#[tokio::test]
async fn forward_unreachable_upstream_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let response = forward(
        State(state_with_upstream(Some(format!("http://{addr}")))),
        Path("sessions".to_owned()),
        Method::GET,
        RawQuery(None),
        HeaderMap::new(),
        Bytes::new(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("unreachable"));
}

#[tokio::test]
async fn forward_preserves_method_query_body_and_content_type() {
    let base = spawn_echo_upstream().await;
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));

    let response = forward(
        State(state_with_upstream(Some(base))),
        Path("sessions/abc/generate".to_owned()),
        Method::POST,
        RawQuery(Some("draft=1".to_owned())),
        headers,
        Bytes::from_static(b"add a sofa"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "application/json");
    let body = body_json(response).await;
    assert_eq!(body["method"], "POST");
    assert_eq!(body["query"], "draft=1");
    assert_eq!(body["content_type"], "text/plain");
    assert_eq!(body["body"], "add a sofa");
}

#[tokio::test]
async fn forward_passes_upstream_errors_through() {
    let base = spawn_echo_upstream().await;
    let response = forward(
        State(state_with_upstream(Some(base))),
        Path("sessions/abc/missing".to_owned()),
        Method::GET,
        RawQuery(None),
        HeaderMap::new(),
        Bytes::new(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["detail"], "session not found");
}

#[test]
fn state_shares_config() {
    let state = state_with_upstream(Some("http://up.test".to_owned()));
    let cloned = state.clone();
    assert!(Arc::ptr_eq(&state.config, &cloned.config));
}
