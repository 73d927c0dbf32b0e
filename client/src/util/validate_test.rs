use super::*;

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn accepts_ordinary_addresses() {
    for email in ["a@b.co", "first.last+tag@mail.example.org", "x_y@sub.domain.io"] {
        assert!(is_valid_email(email), "{email}");
    }
}

#[test]
fn rejects_malformed_addresses() {
    for email in [
        "",
        "plain",
        "@example.com",
        "user@",
        "user@localhost",
        "user@example.",
        "user@.com",
        "user@@example.com",
        "us er@example.com",
        "user@example.c",
    ] {
        assert!(!is_valid_email(email), "{email}");
    }
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_keeps_inputs_verbatim() {
    let request = validate_login("eve@example.com", " secret ").unwrap();
    assert_eq!(request.email, "eve@example.com");
    assert_eq!(request.password, " secret ");
}

#[test]
fn login_rejects_email_with_surrounding_spaces() {
    let errors = validate_login("  eve@example.com ", "secret").unwrap_err();
    assert_eq!(errors.message(FormField::Email).as_deref(), Some(INVALID_EMAIL_MESSAGE));
}

#[test]
fn login_reports_both_fields() {
    let errors = validate_login("nope", "").unwrap_err();
    assert_eq!(errors.message(FormField::Email).as_deref(), Some(INVALID_EMAIL_MESSAGE));
    assert_eq!(errors.message(FormField::Password).as_deref(), Some(PASSWORD_REQUIRED_MESSAGE));
}

// =============================================================
// Signup
// =============================================================

#[test]
fn signup_valid_builds_request() {
    let request = validate_signup("Ada", "Lovelace", "ada@example.com", "analytical").unwrap();
    assert_eq!(request.first_name, "Ada");
    assert_eq!(request.last_name, "Lovelace");
}

#[test]
fn signup_requires_names() {
    let errors = validate_signup("", "", "ada@example.com", "analytical").unwrap_err();
    assert_eq!(
        errors.message(FormField::FirstName).as_deref(),
        Some(FIRST_NAME_REQUIRED_MESSAGE)
    );
    assert_eq!(
        errors.message(FormField::LastName).as_deref(),
        Some(LAST_NAME_REQUIRED_MESSAGE)
    );
    assert_eq!(errors.message(FormField::Email), None);
}

#[test]
fn signup_names_are_only_checked_for_presence() {
    let request = validate_signup(" ", " Lovelace ", "ada@example.com", "analytical").unwrap();
    assert_eq!(request.first_name, " ");
    assert_eq!(request.last_name, " Lovelace ");
}

#[test]
fn signup_password_length_boundary() {
    let errors = validate_signup("Ada", "Lovelace", "ada@example.com", "1234567").unwrap_err();
    assert_eq!(
        errors.message(FormField::Password).as_deref(),
        Some(PASSWORD_TOO_SHORT_MESSAGE)
    );
    assert!(validate_signup("Ada", "Lovelace", "ada@example.com", "12345678").is_ok());
}

// =============================================================
// Forgot password / resend
// =============================================================

#[test]
fn email_request_validates_address() {
    assert_eq!(
        validate_email_request("grace@example.com").unwrap().email,
        "grace@example.com"
    );
    assert!(validate_email_request(" grace@example.com").is_err());
    assert!(validate_email_request("grace").is_err());
}

// =============================================================
// Reset password
// =============================================================

#[test]
fn reset_mismatch_lands_on_confirm_password() {
    let errors = validate_reset_password("hunter22", "hunter23", "tok").unwrap_err();
    assert_eq!(
        errors.message(FormField::ConfirmPassword).as_deref(),
        Some("Passwords do not match")
    );
    assert_eq!(errors.message(FormField::Password), None);
}

#[test]
fn reset_match_carries_token() {
    let request = validate_reset_password("hunter22", "hunter22", "tok-123").unwrap();
    assert_eq!(request.token, "tok-123");
    assert_eq!(request.confirm_password, "hunter22");
}
