//! Compile-time client configuration.
//!
//! The API base URL is baked into the WASM bundle at build time from
//! `QUICKBITE_API_URL`; there is no runtime config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Fallback used when `QUICKBITE_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Delay between a successful login and the navigation to `/home`.
pub const LOGIN_REDIRECT_DELAY_MS: u32 = 500;

/// How long a toast stays on screen before it is dismissed.
pub const TOAST_TTL_MS: u32 = 4_000;

const API_URL: &str = match option_env!("QUICKBITE_API_URL") {
    Some(url) => url,
    None => DEFAULT_API_URL,
};

/// Base URL of the remote authentication API, without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base_url(API_URL)
}

fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_URL } else { trimmed }
}
