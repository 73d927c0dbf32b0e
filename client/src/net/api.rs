//! REST calls against the remote authentication API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, every request built
//! with `credentials: include` so the session cookie travels with it.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Pages classify the error with
//! `util::form_errors::classify`; nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{EmailRequest, LoginRequest, ResetPasswordRequest, SignupRequest, User};

const ME_PATH: &str = "/authentication/me";
const LOGIN_PATH: &str = "/authentication/login";
const SIGNUP_PATH: &str = "/authentication/signup";
const LOGOUT_PATH: &str = "/authentication/logout";
const FORGOT_PASSWORD_PATH: &str = "/authentication/forgot-password";
const VERIFY_RESET_TOKEN_PATH: &str = "/authentication/verify-reset-password-token";
const RESET_PASSWORD_PATH: &str = "/authentication/reset-password";
const SEND_VERIFICATION_PATH: &str = "/authentication/send-verification-email";
const VERIFY_EMAIL_PATH: &str = "/authentication/verify-email";

#[cfg(any(test, feature = "hydrate"))]
fn join_endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(feature = "hydrate")]
fn endpoint(path: &str) -> String {
    join_endpoint(crate::config::api_base_url(), path)
}

#[cfg(feature = "hydrate")]
fn get(path: &str) -> gloo_net::http::RequestBuilder {
    gloo_net::http::Request::get(&endpoint(path)).credentials(web_sys::RequestCredentials::Include)
}

#[cfg(feature = "hydrate")]
fn post(path: &str) -> gloo_net::http::RequestBuilder {
    gloo_net::http::Request::post(&endpoint(path)).credentials(web_sys::RequestCredentials::Include)
}

/// Send a built request and reject non-2xx statuses.
#[cfg(feature = "hydrate")]
async fn dispatch(
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<gloo_net::http::Response, ApiError> {
    let request = request.map_err(|e| ApiError::Encode(e.to_string()))?;
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Offline(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp)
}

#[cfg(feature = "hydrate")]
async fn read_user(resp: gloo_net::http::Response) -> Result<User, ApiError> {
    let body: super::types::DataEnvelope<User> = resp
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(body.data)
}

/// Fetch the user bound to the current session cookie via `GET /authentication/me`.
///
/// # Errors
///
/// Any failure means "no session"; callers are expected to discard the reason.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = dispatch(get(ME_PATH).build()).await?;
        read_user(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ME_PATH;
        Err(ApiError::Unavailable)
    }
}

/// Exchange credentials for a session via `POST /authentication/login`.
///
/// # Errors
///
/// `Status(404)` unknown email, `Status(401)` wrong password,
/// `Status(403)` email not yet verified.
pub async fn login(payload: &LoginRequest) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = dispatch(post(LOGIN_PATH).json(payload)).await?;
        read_user(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (LOGIN_PATH, payload);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /authentication/signup`.
///
/// # Errors
///
/// `Status(409)` when the email is already registered.
pub async fn signup(payload: &SignupRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(post(SIGNUP_PATH).json(payload)).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (SIGNUP_PATH, payload);
        Err(ApiError::Unavailable)
    }
}

/// End the session via `POST /authentication/logout`.
///
/// # Errors
///
/// Returns the transport or status failure; callers only log it.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(post(LOGOUT_PATH).json(&serde_json::json!({}))).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = LOGOUT_PATH;
        Err(ApiError::Unavailable)
    }
}

/// Ask for a password-reset email via `POST /authentication/forgot-password`.
///
/// # Errors
///
/// `Status(404)` when no account has this email.
pub async fn forgot_password(payload: &EmailRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(post(FORGOT_PASSWORD_PATH).json(payload)).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (FORGOT_PASSWORD_PATH, payload);
        Err(ApiError::Unavailable)
    }
}

/// Check a reset link's token via `GET /authentication/verify-reset-password-token`.
///
/// # Errors
///
/// Any failure means the token is unusable.
pub async fn verify_reset_password_token(token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(get(VERIFY_RESET_TOKEN_PATH).query([("token", token)]).build()).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (VERIFY_RESET_TOKEN_PATH, token);
        Err(ApiError::Unavailable)
    }
}

/// Set a new password via `POST /authentication/reset-password`.
///
/// # Errors
///
/// Returns the transport or status failure.
pub async fn reset_password(payload: &ResetPasswordRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(post(RESET_PASSWORD_PATH).json(payload)).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (RESET_PASSWORD_PATH, payload);
        Err(ApiError::Unavailable)
    }
}

/// Re-send the signup verification link via `POST /authentication/send-verification-email`.
///
/// # Errors
///
/// Returns the transport or status failure.
pub async fn send_verification_email(payload: &EmailRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(post(SEND_VERIFICATION_PATH).json(payload)).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (SEND_VERIFICATION_PATH, payload);
        Err(ApiError::Unavailable)
    }
}

/// Confirm a signup email via `GET /authentication/verify-email`.
///
/// # Errors
///
/// Any failure means the token is unusable.
pub async fn verify_email(token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(get(VERIFY_EMAIL_PATH).query([("token", token)]).build()).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (VERIFY_EMAIL_PATH, token);
        Err(ApiError::Unavailable)
    }
}
