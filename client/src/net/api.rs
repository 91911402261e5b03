//! HTTP client for the remote virtual-staging service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, multipart bodies
//! built from `web_sys::FormData`.
//! Server-side (SSR): stubs returning an error since the staging service is
//! only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (transport, non-2xx status, undecodable body) surfaces as
//! `StagingError::RequestFailed` carrying the server's message when it sent
//! one, or the HTTP status text otherwise. There is no retry; the caller
//! decides how to show the error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatHistoryEntry, CreateSessionForm, RevertResponse, SessionDescriptor, VersionEntry};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
#[cfg(feature = "hydrate")]
use super::types::{GenerateResponse, SaveResponse};

/// Path prefix used when `VISTA_STAGING_PREFIX` is not set at build time.
pub const DEFAULT_STAGING_PREFIX: &str = "/api/virtual-staging";

/// The single error kind of the staging client.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StagingError {
    #[error("{0}")]
    RequestFailed(String),
}

impl StagingError {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::RequestFailed(message) => message,
        }
    }

    #[cfg(not(feature = "hydrate"))]
    fn unavailable() -> Self {
        Self::RequestFailed("not available on server".to_owned())
    }
}

/// A file picked as the inpainting mask for `generate_image`.
#[derive(Clone, Debug)]
pub struct MaskFile {
    pub name: String,
    #[cfg(feature = "hydrate")]
    file: web_sys::File,
}

#[cfg(feature = "hydrate")]
impl MaskFile {
    #[must_use]
    pub fn from_file(file: web_sys::File) -> Self {
        Self { name: file.name(), file }
    }
}

/// Staging API prefix, overridable at build time with `VISTA_STAGING_PREFIX`.
#[must_use]
pub fn staging_prefix() -> &'static str {
    option_env!("VISTA_STAGING_PREFIX").unwrap_or(DEFAULT_STAGING_PREFIX)
}

#[cfg(any(test, feature = "hydrate"))]
fn sessions_endpoint(prefix: &str) -> String {
    format!("{}/sessions", prefix.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn session_endpoint(prefix: &str, session_id: &str, action: &str) -> String {
    format!("{}/{}/{action}", sessions_endpoint(prefix), encode_segment(session_id))
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
#[cfg(any(test, feature = "hydrate"))]
fn encode_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Message for a non-2xx response: the server's own message if the body has
/// one, else the status text, else the bare status code.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(status: u16, status_text: &str, body: &str) -> String {
    if let Some(message) = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
    {
        return message;
    }
    let status_text = status_text.trim();
    if status_text.is_empty() {
        format!("request failed: {status}")
    } else {
        status_text.to_owned()
    }
}

#[cfg(feature = "hydrate")]
fn transport_failure(err: gloo_net::Error) -> StagingError {
    StagingError::RequestFailed(err.to_string())
}

#[cfg(feature = "hydrate")]
fn js_failure(err: wasm_bindgen::JsValue) -> StagingError {
    StagingError::RequestFailed(format!("could not build request: {err:?}"))
}

#[cfg(feature = "hydrate")]
fn multipart(fields: &[(&str, String)]) -> Result<web_sys::FormData, StagingError> {
    let form = web_sys::FormData::new().map_err(js_failure)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(js_failure)?;
    }
    Ok(form)
}

#[cfg(feature = "hydrate")]
async fn send<T: serde::de::DeserializeOwned>(request: gloo_net::http::Request) -> Result<T, StagingError> {
    let url = request.url();
    let resp = request.send().await.map_err(|e| {
        log::warn!("staging request to {url} failed: {e}");
        transport_failure(e)
    })?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        let message = failure_message(resp.status(), &resp.status_text(), &body);
        log::warn!("staging request to {url} returned {}: {message}", resp.status());
        return Err(StagingError::RequestFailed(message));
    }
    resp.json::<T>()
        .await
        .map_err(|e| StagingError::RequestFailed(format!("invalid response from staging service: {e}")))
}

/// Create a staging session via `POST {prefix}/sessions`.
///
/// # Errors
///
/// Returns `StagingError::RequestFailed` if the request fails or the server
/// responds with a non-OK status.
pub async fn create_session(form: &CreateSessionForm) -> Result<SessionDescriptor, StagingError> {
    #[cfg(feature = "hydrate")]
    {
        let body = multipart(&form.fields())?;
        let request = gloo_net::http::Request::post(&sessions_endpoint(staging_prefix()))
            .body(body)
            .map_err(transport_failure)?;
        send(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(StagingError::unavailable())
    }
}

/// Generate a new staged image via `POST {prefix}/sessions/{id}/generate`.
///
/// Returns the URL of the generated image.
///
/// # Errors
///
/// Returns `StagingError::RequestFailed` if the request fails or the server
/// responds with a non-OK status.
pub async fn generate_image(session_id: &str, prompt: &str, mask: Option<&MaskFile>) -> Result<String, StagingError> {
    #[cfg(feature = "hydrate")]
    {
        let body = multipart(&[("prompt", prompt.trim().to_owned())])?;
        if let Some(mask) = mask {
            body.append_with_blob_and_filename("mask", &mask.file, &mask.name)
                .map_err(js_failure)?;
        }
        let request = gloo_net::http::Request::post(&session_endpoint(staging_prefix(), session_id, "generate"))
            .body(body)
            .map_err(transport_failure)?;
        let resp: GenerateResponse = send(request).await?;
        Ok(resp.image_url)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session_id, prompt, mask);
        Err(StagingError::unavailable())
    }
}

/// Save the current image as a new version via `POST {prefix}/sessions/{id}/save`.
///
/// Returns the new version number.
///
/// # Errors
///
/// Returns `StagingError::RequestFailed` if the request fails or the server
/// responds with a non-OK status.
pub async fn save_version(session_id: &str) -> Result<u32, StagingError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&session_endpoint(staging_prefix(), session_id, "save"))
            .build()
            .map_err(transport_failure)?;
        let resp: SaveResponse = send(request).await?;
        Ok(resp.version)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session_id;
        Err(StagingError::unavailable())
    }
}

/// Revert to the previous saved version via `POST {prefix}/sessions/{id}/revert`.
///
/// # Errors
///
/// Returns `StagingError::RequestFailed` if the request fails or the server
/// responds with a non-OK status.
pub async fn revert_version(session_id: &str) -> Result<RevertResponse, StagingError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&session_endpoint(staging_prefix(), session_id, "revert"))
            .build()
            .map_err(transport_failure)?;
        send(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session_id;
        Err(StagingError::unavailable())
    }
}

/// Fetch saved versions, oldest first, via `GET {prefix}/sessions/{id}/versions`.
///
/// # Errors
///
/// Returns `StagingError::RequestFailed` if the request fails or the server
/// responds with a non-OK status.
pub async fn fetch_versions(session_id: &str) -> Result<Vec<VersionEntry>, StagingError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&session_endpoint(staging_prefix(), session_id, "versions"))
            .build()
            .map_err(transport_failure)?;
        send(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session_id;
        Err(StagingError::unavailable())
    }
}

/// Fetch the prompt/response log via `GET {prefix}/sessions/{id}/chat`.
///
/// # Errors
///
/// Returns `StagingError::RequestFailed` if the request fails or the server
/// responds with a non-OK status.
pub async fn fetch_chat_history(session_id: &str) -> Result<Vec<ChatHistoryEntry>, StagingError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&session_endpoint(staging_prefix(), session_id, "chat"))
            .build()
            .map_err(transport_failure)?;
        send(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session_id;
        Err(StagingError::unavailable())
    }
}
