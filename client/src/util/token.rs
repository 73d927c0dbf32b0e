//! Link-token handling for `/signup/verify-email` and `/reset-password`.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use crate::net::error::ApiError;

/// Server verdict on a token carried in an emailed link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenStatus {
    #[default]
    Checking,
    Valid,
    Invalid,
}

impl TokenStatus {
    pub fn from_result(outcome: &Result<(), ApiError>) -> Self {
        match outcome {
            Ok(()) => Self::Valid,
            Err(e) => {
                log::warn!("link token rejected: {e}");
                Self::Invalid
            }
        }
    }
}

/// The `token` query value, or `None` when it is absent or blank.
pub fn usable_token(raw: Option<String>) -> Option<String> {
    raw.filter(|token| !token.trim().is_empty())
}
