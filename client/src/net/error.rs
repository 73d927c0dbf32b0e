//! Failure type for every call to the authentication API.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why an API call did not produce the expected success body.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never reached the server (no network, DNS, CORS, ...).
    #[error("network unreachable: {0}")]
    Offline(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The server answered 2xx but the body did not match the expected shape.
    #[error("malformed response body: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("request could not be built: {0}")]
    Encode(String),
    /// Called outside the browser (SSR render pass).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status carried by this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, Self::Offline(_))
    }
}
