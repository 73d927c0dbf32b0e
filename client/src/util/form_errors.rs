//! Field-level error bookkeeping and API failure classification for the
//! credential forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every form page funnels API errors through `classify`, which is the single
//! table deciding whether a failure lands under a field or becomes a toast.

#[cfg(test)]
#[path = "form_errors_test.rs"]
mod form_errors_test;

use crate::net::error::ApiError;

pub const OFFLINE_MESSAGE: &str =
    "Looks like you are offline. Please check your internet connection and try again.";
pub const GENERIC_MESSAGE: &str = "Something went wrong";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";
pub const INVALID_PASSWORD_MESSAGE: &str = "Invalid password";
pub const EMAIL_NOT_VERIFIED_MESSAGE: &str = "Email not verified. Please verify your email";
pub const EMAIL_IN_USE_MESSAGE: &str = "Email is already in use";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

/// Secondary affordance rendered next to a field message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldAction {
    /// "Resend Verification Email ?" on an unverified login.
    ResendVerification,
    /// "Signup ?" link on an unknown login email.
    SignupLink,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
    pub action: Option<FieldAction>,
}

impl FieldError {
    pub fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            action: None,
        }
    }

    #[must_use]
    pub fn with_action(mut self, action: FieldAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// How a failed submission is surfaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitFailure {
    Field(FieldError),
    Toast(&'static str),
}

/// Which round trip failed; the status table differs per action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormAction {
    Login,
    Signup,
    ForgotPassword,
    ResetPassword,
    ResendVerification,
}

/// Map an API failure to what the user sees.
pub fn classify(action: FormAction, err: &ApiError) -> SubmitFailure {
    if err.is_offline() {
        return match action {
            FormAction::ResendVerification => SubmitFailure::Toast(GENERIC_MESSAGE),
            _ => SubmitFailure::Toast(OFFLINE_MESSAGE),
        };
    }
    let field = match (action, err.status()) {
        (FormAction::Login, Some(404)) => FieldError::new(FormField::Email, USER_NOT_FOUND_MESSAGE)
            .with_action(FieldAction::SignupLink),
        (FormAction::Login, Some(401)) => FieldError::new(FormField::Password, INVALID_PASSWORD_MESSAGE),
        (FormAction::Login, Some(403)) => FieldError::new(FormField::Email, EMAIL_NOT_VERIFIED_MESSAGE)
            .with_action(FieldAction::ResendVerification),
        (FormAction::Signup, Some(409)) => FieldError::new(FormField::Email, EMAIL_IN_USE_MESSAGE),
        (FormAction::ForgotPassword, Some(404)) => {
            FieldError::new(FormField::Email, USER_NOT_FOUND_MESSAGE)
        }
        _ => return SubmitFailure::Toast(GENERIC_MESSAGE),
    };
    SubmitFailure::Field(field)
}

/// Current field messages of one form. At most one message per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        let mut form = Self::default();
        for error in errors {
            form.set(error);
        }
        form
    }

    /// Replace the message for `error.field`.
    pub fn set(&mut self, error: FieldError) {
        self.errors.retain(|existing| existing.field != error.field);
        self.errors.push(error);
    }

    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field == field)
    }

    pub fn message(&self, field: FormField) -> Option<String> {
        self.get(field).map(|error| error.message.clone())
    }

    pub fn action(&self, field: FormField) -> Option<FieldAction> {
        self.get(field).and_then(|error| error.action)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}
