//! Wire types for the virtual-staging API.
//!
//! DESIGN
//! ======
//! Responses deserialize leniently: optional counters default to zero and
//! unknown fields are ignored, so a server that adds fields never breaks the
//! studio page.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A staging session as returned by `POST /sessions`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDescriptor {
    pub session_id: String,
    pub image_url: String,
    #[serde(default)]
    pub current_version: u32,
    #[serde(default)]
    pub total_versions: u32,
}

/// Response of `POST /sessions/{id}/generate`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    pub image_url: String,
}

/// Response of `POST /sessions/{id}/save`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SaveResponse {
    pub version: u32,
}

/// Response of `POST /sessions/{id}/revert`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RevertResponse {
    pub image_url: String,
    #[serde(default)]
    pub version: Option<u32>,
}

/// One saved version in a session's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub version: u32,
    pub image_url: String,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Who authored a chat-history entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    #[default]
    User,
    Assistant,
    System,
}

/// One prompt/response exchange recorded by the staging service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatHistoryEntry {
    #[serde(default)]
    pub role: ChatRole,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Fields for `POST /sessions`. Sent as multipart form data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateSessionForm {
    pub property_id: String,
    pub user_id: String,
    pub room_name: String,
    pub style: Option<String>,
    pub theme: Option<String>,
    pub color: Option<String>,
    pub prompt: Option<String>,
}

impl CreateSessionForm {
    /// Form fields in submission order. Optional fields that are missing or
    /// blank are omitted rather than sent empty.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("property_id", self.property_id.trim().to_owned()),
            ("user_id", self.user_id.trim().to_owned()),
            ("room_name", self.room_name.trim().to_owned()),
        ];
        let optional = [
            ("style", &self.style),
            ("theme", &self.theme),
            ("color", &self.color),
            ("prompt", &self.prompt),
        ];
        for (name, value) in optional {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                fields.push((name, value.to_owned()));
            }
        }
        fields
    }

    /// Name of the first required field that is blank, if any.
    #[must_use]
    pub fn missing_required(&self) -> Option<&'static str> {
        [
            ("property_id", &self.property_id),
            ("user_id", &self.user_id),
            ("room_name", &self.room_name),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

/// Server error payload. Services disagree on the key, so all common ones are accepted.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
impl ErrorBody {
    pub(crate) fn into_message(self) -> Option<String> {
        [self.error, self.message, self.detail]
            .into_iter()
            .flatten()
            .map(|m| m.trim().to_owned())
            .find(|m| !m.is_empty())
    }
}
