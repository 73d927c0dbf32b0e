//! Route access rules and the pre-render guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route declares who may see it. `components::guarded::Guarded`
//! evaluates `guard` once at route entry, against an already-resolved
//! `AuthState`, and either mounts the page or redirects.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;

/// Client-side navigation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    Home,
    Login,
    Signup,
    VerifyEmail,
    ForgotPassword,
    ResetPassword,
}

/// Who may enter a route, and where everyone else is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Authenticated { otherwise: AppRoute },
    Anonymous { otherwise: AppRoute },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Proceed,
    Redirect(AppRoute),
}

impl AppRoute {
    pub const ALL: [AppRoute; 7] = [
        AppRoute::Landing,
        AppRoute::Home,
        AppRoute::Login,
        AppRoute::Signup,
        AppRoute::VerifyEmail,
        AppRoute::ForgotPassword,
        AppRoute::ResetPassword,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Home => "/home",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::VerifyEmail => "/signup/verify-email",
            Self::ForgotPassword => "/forgot-password",
            Self::ResetPassword => "/reset-password",
        }
    }

    pub fn access(self) -> RouteAccess {
        match self {
            Self::Home => RouteAccess::Authenticated { otherwise: Self::Login },
            Self::Landing => RouteAccess::Anonymous { otherwise: Self::Home },
            Self::Login | Self::Signup | Self::ForgotPassword | Self::ResetPassword => {
                RouteAccess::Anonymous { otherwise: Self::Landing }
            }
            Self::VerifyEmail => RouteAccess::Public,
        }
    }
}

/// Decide whether `route` may render for the given session.
///
/// Assumes `state.resolved`; the session gate keeps routes unmounted until then.
pub fn guard(route: AppRoute, state: &AuthState) -> GuardOutcome {
    match route.access() {
        RouteAccess::Public => GuardOutcome::Proceed,
        RouteAccess::Authenticated { otherwise } if !state.is_authenticated() => {
            GuardOutcome::Redirect(otherwise)
        }
        RouteAccess::Anonymous { otherwise } if state.is_authenticated() => {
            GuardOutcome::Redirect(otherwise)
        }
        _ => GuardOutcome::Proceed,
    }
}

/// Follow redirects from `route` until a route proceeds.
pub fn final_route(route: AppRoute, state: &AuthState) -> AppRoute {
    let mut current = route;
    for _ in 0..AppRoute::ALL.len() {
        match guard(current, state) {
            GuardOutcome::Proceed => return current,
            GuardOutcome::Redirect(next) => current = next,
        }
    }
    log::error!("redirect cycle starting at {}", route.path());
    current
}
