use super::*;

#[test]
fn session_state_defaults_to_loading() {
    let state = SessionState::default();
    assert_eq!(state.status, SessionStatus::Loading);
}

#[test]
fn session_status_default_is_loading() {
    assert_eq!(SessionStatus::default(), SessionStatus::Loading);
}
