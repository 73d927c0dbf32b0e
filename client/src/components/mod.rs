//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and form pieces while reading shared state
//! from Leptos context providers.

pub mod form_field;
pub mod guarded;
pub mod invalid_token;
pub mod navbar;
pub mod session_gate;
pub mod toaster;
