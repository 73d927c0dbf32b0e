//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decision logic (guards, validation, error classification) lives here
//! so pages stay thin and the rules are testable without a browser.

pub mod auth;
pub mod form_errors;
pub mod token;
pub mod validate;
