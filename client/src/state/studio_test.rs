use super::*;
use crate::net::types::ChatRole;

// =============================================================
// Helpers
// =============================================================

fn filled_form() -> CreateSessionForm {
    CreateSessionForm {
        property_id: "p-1".into(),
        user_id: "demo-seller".into(),
        room_name: "Kitchen".into(),
        ..Default::default()
    }
}

fn session() -> SessionDescriptor {
    SessionDescriptor {
        session_id: "s-42".into(),
        image_url: "/orig.jpg".into(),
        current_version: 0,
        total_versions: 0,
    }
}

fn with_session() -> StudioState {
    let mut state = StudioState { form: filled_form(), ..Default::default() };
    assert!(state.begin(StudioAction::CreateSession));
    state.session_created(session());
    state
}

// =============================================================
// begin
// =============================================================

#[test]
fn begin_create_requires_form_fields() {
    let mut state = StudioState::default();
    assert!(!state.begin(StudioAction::CreateSession));
    assert_eq!(state.error.as_deref(), Some("property id is required"));
    assert!(state.busy.is_none());
}

#[test]
fn begin_rejects_second_request_while_busy() {
    let mut state = StudioState { form: filled_form(), ..Default::default() };
    assert!(state.begin(StudioAction::CreateSession));
    assert!(!state.begin(StudioAction::CreateSession));
    assert_eq!(state.busy, Some(StudioAction::CreateSession));
}

#[test]
fn session_actions_require_a_session() {
    for action in [StudioAction::Save, StudioAction::Revert, StudioAction::LoadHistory] {
        let mut state = StudioState::default();
        assert!(!state.begin(action), "{action:?}");
        assert_eq!(state.error.as_deref(), Some("Create a session first"));
    }
}

#[test]
fn generate_requires_a_prompt() {
    let mut state = with_session();
    assert!(!state.begin(StudioAction::Generate));
    assert!(state.error.is_some());
    state.prompt = "add a walnut dining table".into();
    assert!(state.begin(StudioAction::Generate));
    assert!(state.error.is_none());
}

#[test]
fn begin_clears_previous_error_and_notice() {
    let mut state = with_session();
    state.error = Some("old".into());
    assert!(state.notice.is_some());
    assert!(state.begin(StudioAction::Save));
    assert!(state.error.is_none());
    assert!(state.notice.is_none());
}

// =============================================================
// Completions
// =============================================================

#[test]
fn session_created_sets_both_sides_of_comparison() {
    let state = with_session();
    assert!(state.busy.is_none());
    assert_eq!(state.session_id(), Some("s-42"));
    assert_eq!(state.comparison(), Some(("/orig.jpg".to_owned(), "/orig.jpg".to_owned())));
}

#[test]
fn image_generated_updates_after_side_only() {
    let mut state = with_session();
    state.prompt = "modern sofa".into();
    assert!(state.begin(StudioAction::Generate));
    state.image_generated("/staged.jpg".into());
    assert!(state.prompt.is_empty());
    assert_eq!(state.comparison(), Some(("/orig.jpg".to_owned(), "/staged.jpg".to_owned())));
}

#[test]
fn version_saved_updates_counters() {
    let mut state = with_session();
    assert!(state.begin(StudioAction::Save));
    state.version_saved(3);
    let session = state.session.as_ref().expect("session");
    assert_eq!(session.current_version, 3);
    assert_eq!(session.total_versions, 3);
    assert_eq!(state.notice.as_deref(), Some("Saved version 3"));
}

#[test]
fn reverted_replaces_current_image() {
    let mut state = with_session();
    assert!(state.begin(StudioAction::Revert));
    state.reverted(RevertResponse { image_url: "/v1.jpg".into(), version: Some(1) });
    assert_eq!(state.current_url.as_deref(), Some("/v1.jpg"));
    assert_eq!(state.session.as_ref().map(|s| s.current_version), Some(1));
    assert_eq!(state.notice.as_deref(), Some("Reverted to version 1"));
}

#[test]
fn history_loaded_replaces_lists() {
    let mut state = with_session();
    assert!(state.begin(StudioAction::LoadHistory));
    state.history_loaded(
        vec![VersionEntry { version: 1, image_url: "/v1.jpg".into(), prompt: None, created_at: None }],
        vec![ChatHistoryEntry { role: ChatRole::User, content: "add plants".into(), created_at: None }],
    );
    assert_eq!(state.versions.len(), 1);
    assert_eq!(state.chat.len(), 1);
    assert!(state.busy.is_none());
}

#[test]
fn fail_records_message_and_frees_busy() {
    let mut state = with_session();
    assert!(state.begin(StudioAction::Save));
    state.fail(&StagingError::RequestFailed("Bad Gateway".into()));
    assert!(state.busy.is_none());
    assert_eq!(state.error.as_deref(), Some("Bad Gateway"));
}

#[test]
fn comparison_is_none_without_session() {
    assert!(StudioState::default().comparison().is_none());
}

#[test]
fn busy_labels_are_distinct() {
    let labels = [
        StudioAction::CreateSession.busy_label(),
        StudioAction::Generate.busy_label(),
        StudioAction::Save.busy_label(),
        StudioAction::Revert.busy_label(),
        StudioAction::LoadHistory.busy_label(),
    ];
    for (i, a) in labels.iter().enumerate() {
        for b in &labels[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
