//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form signals and page-local display state, validates
//! with `util::validate`, and reports API failures through `report_failure`.


pub mod forgot_password;
pub mod home;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod reset_password;
pub mod signup;
pub mod verify_email;

use leptos::prelude::*;

use crate::state::toast::Toasts;
use crate::util::form_errors::{FormErrors, SubmitFailure};

/// Route a classified failure to its field or to a toast.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn report_failure(failure: SubmitFailure, errors: RwSignal<FormErrors>, toasts: Toasts) {
    match failure {
        SubmitFailure::Field(error) => errors.update(|form| form.set(error)),
        SubmitFailure::Toast(message) => toasts.error(message),
    }
}
