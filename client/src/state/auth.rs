//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the signal. Route guards and user-aware components receive the
//! read half as context; the write half is wrapped in `SessionWriter` and is
//! only handed to the session gate, the login page, and the navbar logout.
//!
//! INVARIANTS
//! ==========
//! - `resolved` flips to `true` once and never back.
//! - `is_authenticated()` is exactly `user.is_some()`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::User;

/// Authentication state tracking the current user and whether the initial
/// session check has settled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub resolved: bool,
    check_started: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Claim the one-per-load session check. Returns `true` only for the
    /// first caller.
    pub fn begin_check(&mut self) -> bool {
        if self.check_started || self.resolved {
            return false;
        }
        self.check_started = true;
        true
    }

    /// Record the outcome of the session check. Any error counts as "no
    /// session". Later calls are ignored.
    pub fn settle(&mut self, outcome: Result<User, ApiError>) {
        if self.resolved {
            log::warn!("session check settled twice; ignoring");
            return;
        }
        match outcome {
            Ok(user) => {
                log::info!("session resolved for user {}", user.id);
                self.user = Some(user);
            }
            Err(e) => {
                log::debug!("no session: {e}");
                self.user = None;
            }
        }
        self.check_started = true;
        self.resolved = true;
    }

    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }
}

/// The only write path into the session signal.
#[derive(Clone, Copy)]
pub struct SessionWriter(WriteSignal<AuthState>);

impl SessionWriter {
    pub fn new(signal: WriteSignal<AuthState>) -> Self {
        Self(signal)
    }

    pub fn begin_check(&self) -> bool {
        self.0.try_update(AuthState::begin_check).unwrap_or(false)
    }

    pub fn settle(&self, outcome: Result<User, ApiError>) {
        self.0.update(|state| state.settle(outcome));
    }

    pub fn sign_in(&self, user: User) {
        self.0.update(|state| state.sign_in(user));
    }

    pub fn sign_out(&self) {
        self.0.update(AuthState::sign_out);
    }
}
