//! Staging studio workflow state.
//!
//! ARCHITECTURE
//! ============
//! The studio page drives the staging client; this model records what the
//! page should show between requests. Each request is bracketed by
//! `begin(action)` and one of the completion methods (or `fail`), which keeps
//! "one request at a time" and "errors render inline" in one place.

#[cfg(test)]
#[path = "studio_test.rs"]
mod studio_test;

use crate::net::api::StagingError;
use crate::net::types::{ChatHistoryEntry, CreateSessionForm, RevertResponse, SessionDescriptor, VersionEntry};

/// Request currently in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudioAction {
    CreateSession,
    Generate,
    Save,
    Revert,
    LoadHistory,
}

impl StudioAction {
    #[must_use]
    pub fn busy_label(self) -> &'static str {
        match self {
            Self::CreateSession => "Creating session...",
            Self::Generate => "Staging room...",
            Self::Save => "Saving version...",
            Self::Revert => "Reverting...",
            Self::LoadHistory => "Loading history...",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct StudioState {
    pub form: CreateSessionForm,
    pub session: Option<SessionDescriptor>,
    /// Image URL at session creation; the "before" side of comparisons.
    pub original_url: Option<String>,
    /// Latest image URL; the "after" side.
    pub current_url: Option<String>,
    pub prompt: String,
    pub versions: Vec<VersionEntry>,
    pub chat: Vec<ChatHistoryEntry>,
    pub busy: Option<StudioAction>,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl StudioState {
    /// Mark `action` as in flight. Returns `false` (and changes nothing) if
    /// another request is already running or the action's inputs are invalid;
    /// invalid inputs set `error`.
    pub fn begin(&mut self, action: StudioAction) -> bool {
        if self.busy.is_some() {
            return false;
        }
        if let Some(problem) = self.validate(action) {
            self.error = Some(problem);
            return false;
        }
        self.busy = Some(action);
        self.error = None;
        self.notice = None;
        true
    }

    fn validate(&self, action: StudioAction) -> Option<String> {
        match action {
            StudioAction::CreateSession => self
                .form
                .missing_required()
                .map(|field| format!("{} is required", field.replace('_', " "))),
            StudioAction::Generate if self.prompt.trim().is_empty() => {
                Some("Describe the change you want first".to_owned())
            }
            _ if action != StudioAction::CreateSession && self.session.is_none() => {
                Some("Create a session first".to_owned())
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn session_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.session_id.as_str())
    }

    pub fn fail(&mut self, err: &StagingError) {
        self.busy = None;
        self.error = Some(err.message().to_owned());
    }

    pub fn session_created(&mut self, session: SessionDescriptor) {
        self.busy = None;
        self.original_url = Some(session.image_url.clone());
        self.current_url = Some(session.image_url.clone());
        self.versions.clear();
        self.chat.clear();
        self.notice = Some(format!("Session {} ready", session.session_id));
        self.session = Some(session);
    }

    pub fn image_generated(&mut self, image_url: String) {
        self.busy = None;
        self.prompt.clear();
        self.current_url = Some(image_url);
    }

    pub fn version_saved(&mut self, version: u32) {
        self.busy = None;
        if let Some(session) = self.session.as_mut() {
            session.current_version = version;
            session.total_versions = session.total_versions.max(version);
        }
        self.notice = Some(format!("Saved version {version}"));
    }

    pub fn reverted(&mut self, revert: RevertResponse) {
        self.busy = None;
        if let (Some(session), Some(version)) = (self.session.as_mut(), revert.version) {
            session.current_version = version;
        }
        self.notice = Some(match revert.version {
            Some(version) => format!("Reverted to version {version}"),
            None => "Reverted to previous version".to_owned(),
        });
        self.current_url = Some(revert.image_url);
    }

    pub fn history_loaded(&mut self, versions: Vec<VersionEntry>, chat: Vec<ChatHistoryEntry>) {
        self.busy = None;
        self.versions = versions;
        self.chat = chat;
    }

    /// Before/after pair for the comparison slider, once a session exists.
    #[must_use]
    pub fn comparison(&self) -> Option<(String, String)> {
        Some((self.original_url.clone()?, self.current_url.clone()?))
    }
}
