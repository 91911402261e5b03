use super::*;
use crate::net::types::SessionDescriptor;

// =============================================================
// comparison_sources
// =============================================================

#[test]
fn comparison_sources_fall_back_to_demo_images() {
    let state = StudioState::default();
    assert_eq!(
        comparison_sources(&state),
        (DEMO_BEFORE_SRC.to_owned(), DEMO_AFTER_SRC.to_owned())
    );
}

#[test]
fn comparison_sources_use_session_original_and_latest() {
    let mut state = StudioState::default();
    state.session_created(SessionDescriptor {
        session_id: "s1".to_owned(),
        image_url: "/uploads/original.jpg".to_owned(),
        current_version: 0,
        total_versions: 0,
    });
    state.image_generated("/uploads/staged-2.jpg".to_owned());
    assert_eq!(
        comparison_sources(&state),
        ("/uploads/original.jpg".to_owned(), "/uploads/staged-2.jpg".to_owned())
    );
}
