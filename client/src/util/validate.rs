//! Client-side form validation.
//!
//! A failed validation yields `FormErrors` and the request is never built.
//! Successful validation yields the request body the API expects.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::types::{EmailRequest, LoginRequest, ResetPasswordRequest, SignupRequest};
use crate::util::form_errors::{FieldError, FormErrors, FormField};

pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email";
pub const PASSWORD_REQUIRED_MESSAGE: &str = "Password is required";
pub const FIRST_NAME_REQUIRED_MESSAGE: &str = "First name is required";
pub const LAST_NAME_REQUIRED_MESSAGE: &str = "Last name is required";
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Password must be at least 8 characters";
pub const PASSWORDS_MISMATCH_MESSAGE: &str = "Passwords do not match";

pub const MIN_SIGNUP_PASSWORD_LEN: usize = 8;

/// Loose structural email check: `local@domain.tld`, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| !label.is_empty())
        && labels.last().map_or(false, |tld| tld.len() >= 2)
}

/// Input is checked as typed; leading or trailing spaces make it invalid.
fn check_email(email: &str, errors: &mut Vec<FieldError>) -> String {
    if !is_valid_email(email) {
        errors.push(FieldError::new(FormField::Email, INVALID_EMAIL_MESSAGE));
    }
    email.to_owned()
}

fn finish<T>(errors: Vec<FieldError>, value: T) -> Result<T, FormErrors> {
    if errors.is_empty() {
        Ok(value)
    } else {
        Err(FormErrors::from_errors(errors))
    }
}

/// # Errors
///
/// Invalid email or empty password.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, FormErrors> {
    let mut errors = Vec::new();
    let email = check_email(email, &mut errors);
    if password.is_empty() {
        errors.push(FieldError::new(FormField::Password, PASSWORD_REQUIRED_MESSAGE));
    }
    finish(errors, LoginRequest {
        email,
        password: password.to_owned(),
    })
}

/// # Errors
///
/// Missing names, invalid email, or a password shorter than
/// `MIN_SIGNUP_PASSWORD_LEN` characters.
pub fn validate_signup(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<SignupRequest, FormErrors> {
    let mut errors = Vec::new();
    if first_name.is_empty() {
        errors.push(FieldError::new(FormField::FirstName, FIRST_NAME_REQUIRED_MESSAGE));
    }
    if last_name.is_empty() {
        errors.push(FieldError::new(FormField::LastName, LAST_NAME_REQUIRED_MESSAGE));
    }
    let email = check_email(email, &mut errors);
    if password.chars().count() < MIN_SIGNUP_PASSWORD_LEN {
        errors.push(FieldError::new(FormField::Password, PASSWORD_TOO_SHORT_MESSAGE));
    }
    finish(errors, SignupRequest {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email,
        password: password.to_owned(),
    })
}

/// # Errors
///
/// Invalid email.
pub fn validate_email_request(email: &str) -> Result<EmailRequest, FormErrors> {
    let mut errors = Vec::new();
    let email = check_email(email, &mut errors);
    finish(errors, EmailRequest { email })
}

/// # Errors
///
/// `confirm_password` differs from `password`.
pub fn validate_reset_password(
    password: &str,
    confirm_password: &str,
    token: &str,
) -> Result<ResetPasswordRequest, FormErrors> {
    let mut errors = Vec::new();
    if password != confirm_password {
        errors.push(FieldError::new(FormField::ConfirmPassword, PASSWORDS_MISMATCH_MESSAGE));
    }
    finish(errors, ResetPasswordRequest {
        password: password.to_owned(),
        confirm_password: confirm_password.to_owned(),
        token: token.to_owned(),
    })
}
