//! Pass-through proxy to the remote virtual-staging API.
//!
//! The browser client always talks to `/api/virtual-staging/...` on this
//! host; requests are forwarded to `STAGING_API_URL` with the same method,
//! query string, body, and content type. Upstream status and body come back
//! unchanged. No retry.

#[cfg(test)]
#[path = "staging_test.rs"]
mod staging_test;

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

pub const PROXY_PREFIX: &str = "/api/virtual-staging";

/// Join the upstream base, the captured path, and the raw query string.
pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

/// `ANY /api/virtual-staging/{*path}`: forward to the staging upstream.
pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    method: Method,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(base) = state.config.staging_api_url.as_deref() else {
        tracing::warn!(%method, %path, "staging proxy called but STAGING_API_URL is not set");
        return error_response(StatusCode::SERVICE_UNAVAILABLE, "Virtual staging service is not configured");
    };
    let url = upstream_url(base, &path, query.as_deref());

    let mut request = state.http.request(method.clone(), &url);
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        request = request.header(header::CONTENT_TYPE, content_type.clone());
    }
    if let Some(accept) = headers.get(header::ACCEPT) {
        request = request.header(header::ACCEPT, accept.clone());
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = match request.send().await {
        Ok(upstream) => upstream,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "staging upstream unreachable");
            return error_response(StatusCode::BAD_GATEWAY, &format!("Virtual staging service unreachable: {e}"));
        }
    };

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(%method, %url, %status, error = %e, "staging upstream body read failed");
            return error_response(StatusCode::BAD_GATEWAY, &format!("Virtual staging response interrupted: {e}"));
        }
    };

    tracing::debug!(%method, %url, %status, bytes = bytes.len(), "staging request forwarded");

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    } else {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/octet-stream"));
    }
    response
}
