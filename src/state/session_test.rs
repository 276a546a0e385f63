use super::*;
use crate::net::types::UserProfile;

fn profile(name: &str) -> UserProfile {
    UserProfile {
        id: 1,
        full_name: name.to_owned(),
        birth_date: "1990-01-01".to_owned(),
        location: "Lisbon".to_owned(),
        savings_goal: 2500.0,
    }
}

// =============================================================
// SessionState transitions
// =============================================================

#[test]
fn default_state_is_anonymous() {
    let state = SessionState::default();
    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert!(state.token().is_none());
    assert!(state.profile().is_none());
}

#[test]
fn commit_token_enters_pending_validation() {
    let mut state = SessionState::default();
    state.commit_token("tok123".to_owned());
    assert_eq!(state.phase(), SessionPhase::PendingValidation);
    assert_eq!(state.token(), Some("tok123"));
    assert!(state.profile().is_none());
}

#[test]
fn resolve_profile_with_current_epoch_authenticates() {
    let mut state = SessionState::default();
    state.commit_token("tok123".to_owned());
    let epoch = state.epoch();
    assert!(state.resolve_profile(profile("Alice"), epoch));
    assert_eq!(state.phase(), SessionPhase::Authenticated);
    assert_eq!(state.profile().map(|p| p.full_name.as_str()), Some("Alice"));
}

#[test]
fn stale_epoch_resolution_is_discarded() {
    let mut state = SessionState::default();
    state.commit_token("tok123".to_owned());
    let epoch = state.epoch();

    // Logout lands while the profile fetch is still in flight.
    state.clear();

    assert!(!state.resolve_profile(profile("Alice"), epoch));
    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert!(state.profile().is_none());
}

#[test]
fn resolve_profile_without_token_is_discarded() {
    let mut state = SessionState::default();
    let epoch = state.epoch();
    assert!(!state.resolve_profile(profile("Alice"), epoch));
    assert!(state.profile().is_none());
}

#[test]
fn relogin_invalidates_pending_resolution_for_old_token() {
    let mut state = SessionState::default();
    state.commit_token("old".to_owned());
    let old_epoch = state.epoch();

    state.commit_token("new".to_owned());

    assert!(!state.resolve_profile(profile("Alice"), old_epoch));
    assert_eq!(state.phase(), SessionPhase::PendingValidation);
    assert_eq!(state.token(), Some("new"));
}

#[test]
fn clear_drops_token_and_profile() {
    let mut state = SessionState::default();
    state.commit_token("tok123".to_owned());
    let epoch = state.epoch();
    state.resolve_profile(profile("Alice"), epoch);

    state.clear();

    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert!(state.token().is_none());
    assert!(state.profile().is_none());
}

#[test]
fn clear_when_already_anonymous_is_a_noop() {
    let mut state = SessionState::default();
    let before = state.clone();
    state.clear();
    assert_eq!(state, before);
}

#[test]
fn clear_profile_keeps_token() {
    let mut state = SessionState::default();
    state.commit_token("tok123".to_owned());
    let epoch = state.epoch();
    state.resolve_profile(profile("Alice"), epoch);

    state.clear_profile();

    assert_eq!(state.phase(), SessionPhase::PendingValidation);
    assert_eq!(state.token(), Some("tok123"));
}

// =============================================================
// SessionStore signal wrapper
// =============================================================

#[test]
fn store_mutations_are_visible_synchronously() {
    let store = SessionStore::new();
    assert_eq!(store.phase(), SessionPhase::Anonymous);

    store.set_token("tok123");
    assert_eq!(store.token(), Some("tok123".to_owned()));
    assert_eq!(store.phase(), SessionPhase::PendingValidation);

    assert!(store.resolve_profile(profile("Alice"), store.epoch()));
    assert_eq!(store.phase(), SessionPhase::Authenticated);
    assert_eq!(store.profile().map(|p| p.full_name), Some("Alice".to_owned()));

    store.clear_token();
    assert_eq!(store.phase(), SessionPhase::Anonymous);
    assert!(store.profile().is_none());
}

#[test]
fn store_logout_during_inflight_rehydration_wins() {
    let store = SessionStore::new();
    store.set_token("tok123");
    let epoch = store.epoch();

    store.clear_token();

    // The in-flight response resolves after logout and must be dropped.
    assert!(!store.resolve_profile(profile("Alice"), epoch));
    assert_eq!(store.phase(), SessionPhase::Anonymous);
    assert!(store.token().is_none());
}
