use super::*;

fn bob() -> User {
    User {
        id: 42,
        email: "bob@example.com".to_owned(),
        first_name: "Bob".to_owned(),
        last_name: "Builder".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn auth_state_default_is_unresolved_and_anonymous() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.resolved);
    assert!(!state.is_authenticated());
}

// =============================================================
// Session check
// =============================================================

#[test]
fn begin_check_claims_only_once() {
    let mut state = AuthState::default();
    assert!(state.begin_check());
    assert!(!state.begin_check());
    assert!(!state.resolved);
}

#[test]
fn settle_hit_stores_user_and_resolves() {
    let mut state = AuthState::default();
    state.begin_check();
    state.settle(Ok(bob()));
    assert!(state.resolved);
    assert_eq!(state.user, Some(bob()));
    assert!(state.is_authenticated());
}

#[test]
fn settle_failure_is_no_session_whatever_the_reason() {
    for err in [
        ApiError::Status(401),
        ApiError::Status(500),
        ApiError::Offline("refused".to_owned()),
        ApiError::Decode("eof".to_owned()),
    ] {
        let mut state = AuthState::default();
        state.begin_check();
        state.settle(Err(err));
        assert!(state.resolved);
        assert!(state.user.is_none());
    }
}

#[test]
fn settle_is_ignored_after_first_resolution() {
    let mut state = AuthState::default();
    state.settle(Err(ApiError::Status(401)));
    state.settle(Ok(bob()));
    assert!(state.resolved);
    assert!(state.user.is_none());
}

#[test]
fn begin_check_refused_once_resolved() {
    let mut state = AuthState::default();
    state.settle(Ok(bob()));
    assert!(!state.begin_check());
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn sign_in_then_sign_out_round_trips_authentication() {
    let mut state = AuthState::default();
    state.settle(Err(ApiError::Status(401)));
    state.sign_in(bob());
    assert!(state.is_authenticated());
    state.sign_out();
    assert!(!state.is_authenticated());
    assert!(state.resolved);
}

#[test]
fn sign_in_replaces_user_wholesale() {
    let mut state = AuthState::default();
    state.sign_in(bob());
    let other = User {
        id: 43,
        email: "carol@example.com".to_owned(),
        first_name: "Carol".to_owned(),
        last_name: "Danvers".to_owned(),
    };
    state.sign_in(other.clone());
    assert_eq!(state.user, Some(other));
}
