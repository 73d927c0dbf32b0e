//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toast`) so components depend on small
//! focused models.

pub mod auth;
pub mod toast;
