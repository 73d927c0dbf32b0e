//! Set a new password from an emailed reset link.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entry is anonymous-only (see `Guarded`). The link token is verified with
//! the API before the form is shown; a missing or rejected token renders
//! `InvalidToken` instead of the form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_query_map;

use crate::components::form_field::TextField;
use crate::components::invalid_token::InvalidToken;
use crate::pages::report_failure;
use crate::state::toast::Toasts;
use crate::util::auth::AppRoute;
use crate::util::form_errors::{FormErrors, FormField};
use crate::util::token::{TokenStatus, usable_token};
use crate::util::validate::validate_reset_password;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let query = use_query_map();
    let token = usable_token(query.with_untracked(|q| q.get("token")));

    let status = RwSignal::new(TokenStatus::Checking);
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    check_token(token.clone(), status);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let token = token.clone().unwrap_or_default();
        let request = match validate_reset_password(&password.get(), &confirm_password.get(), &token) {
            Ok(request) => request,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.update(FormErrors::clear);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::util::form_errors::{FormAction, classify};

            match crate::net::api::reset_password(&request).await {
                Ok(()) => done.set(true),
                Err(e) => report_failure(classify(FormAction::ResetPassword, &e), errors, toasts),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, toasts);
        }
    };

    move || match (status.get(), done.get()) {
        (TokenStatus::Checking, _) => view! { <div class="loading">"Checking link..."</div> }.into_any(),
        (TokenStatus::Invalid, _) => view! { <InvalidToken/> }.into_any(),
        (TokenStatus::Valid, true) => view! {
            <div class="notice">
                <h2 class="notice__title">"Password reset Successfully"</h2>
                <a class="btn" href=AppRoute::Login.path()>"Login"</a>
            </div>
        }
        .into_any(),
        (TokenStatus::Valid, false) => view! {
            <div class="auth-page">
                <div class="auth-card">
                    <h3 class="auth-card__title">"Reset Password"</h3>
                    <form class="auth-form" on:submit=on_submit.clone()>
                        <TextField
                            label="Password"
                            field=FormField::Password
                            value=password
                            errors=errors
                            input_type="password"
                            description="This will be your new password."
                        />
                        <TextField
                            label="Confirm Password"
                            field=FormField::ConfirmPassword
                            value=confirm_password
                            errors=errors
                            input_type="password"
                        />
                        <button class="btn btn--block" type="submit">
                            {move || if busy.get() { "Resetting..." } else { "Reset password" }}
                        </button>
                    </form>
                </div>
            </div>
        }
        .into_any(),
    }
}

fn check_token(token: Option<String>, status: RwSignal<TokenStatus>) {
    let Some(token) = token else {
        status.set(TokenStatus::Invalid);
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::verify_reset_password_token(&token).await;
        status.set(TokenStatus::from_result(&outcome));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}
