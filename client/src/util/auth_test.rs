use super::*;
use crate::net::error::ApiError;
use crate::net::types::User;

fn anonymous() -> AuthState {
    let mut state = AuthState::default();
    state.settle(Err(ApiError::Status(401)));
    state
}

fn signed_in() -> AuthState {
    let mut state = AuthState::default();
    state.settle(Ok(User {
        id: 1,
        email: "dana@example.com".to_owned(),
        first_name: "Dana".to_owned(),
        last_name: "Scully".to_owned(),
    }));
    state
}

// =============================================================
// Guard decisions
// =============================================================

#[test]
fn anonymous_visitor_on_home_goes_to_login() {
    assert_eq!(guard(AppRoute::Home, &anonymous()), GuardOutcome::Redirect(AppRoute::Login));
}

#[test]
fn signed_in_visitor_on_landing_goes_home() {
    assert_eq!(guard(AppRoute::Landing, &signed_in()), GuardOutcome::Redirect(AppRoute::Home));
}

#[test]
fn signed_in_visitor_on_login_or_signup_goes_to_landing() {
    let state = signed_in();
    assert_eq!(guard(AppRoute::Login, &state), GuardOutcome::Redirect(AppRoute::Landing));
    assert_eq!(guard(AppRoute::Signup, &state), GuardOutcome::Redirect(AppRoute::Landing));
    assert_eq!(guard(AppRoute::ForgotPassword, &state), GuardOutcome::Redirect(AppRoute::Landing));
    assert_eq!(guard(AppRoute::ResetPassword, &state), GuardOutcome::Redirect(AppRoute::Landing));
}

#[test]
fn anonymous_visitor_may_enter_public_and_anonymous_routes() {
    let state = anonymous();
    for route in [
        AppRoute::Landing,
        AppRoute::Login,
        AppRoute::Signup,
        AppRoute::ForgotPassword,
        AppRoute::ResetPassword,
        AppRoute::VerifyEmail,
    ] {
        assert_eq!(guard(route, &state), GuardOutcome::Proceed, "{route:?}");
    }
}

#[test]
fn verify_email_is_open_to_everyone() {
    assert_eq!(guard(AppRoute::VerifyEmail, &signed_in()), GuardOutcome::Proceed);
    assert_eq!(guard(AppRoute::VerifyEmail, &anonymous()), GuardOutcome::Proceed);
}

#[test]
fn signed_in_visitor_may_enter_home() {
    assert_eq!(guard(AppRoute::Home, &signed_in()), GuardOutcome::Proceed);
}

// =============================================================
// Redirect chains
// =============================================================

#[test]
fn signed_in_login_settles_on_home() {
    assert_eq!(final_route(AppRoute::Login, &signed_in()), AppRoute::Home);
    assert_eq!(final_route(AppRoute::Signup, &signed_in()), AppRoute::Home);
}

#[test]
fn every_route_settles_for_both_sessions() {
    for state in [anonymous(), signed_in()] {
        for route in AppRoute::ALL {
            let end = final_route(route, &state);
            assert_eq!(guard(end, &state), GuardOutcome::Proceed, "{route:?}");
        }
    }
}
