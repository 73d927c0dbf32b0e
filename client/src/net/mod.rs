//! Networking modules for the remote authentication API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls, `error` classifies their failures, and
//! `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
