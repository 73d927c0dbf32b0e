//! Login page with email + password credentials.
//!
//! SYSTEM CONTEXT
//! ==============
//! One of the three writers of the session signal: a successful login stores
//! the user through `SessionWriter` and navigates to `/home` after
//! `config::LOGIN_REDIRECT_DELAY_MS`. An unverified account can re-request
//! its verification link from the email field's error message.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{FieldMessage, TextField};
use crate::net::types::User;
use crate::pages::report_failure;
use crate::state::auth::SessionWriter;
use crate::state::toast::Toasts;
use crate::util::auth::AppRoute;
use crate::util::form_errors::{FieldAction, FormErrors, FormField};
use crate::util::validate::{validate_email_request, validate_login};

#[derive(Clone, Debug, PartialEq, Eq)]
enum LoginView {
    Form,
    VerificationSent(String),
}

/// Store the signed-in user; returns the route to open and the delay before
/// opening it.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn after_login(writer: SessionWriter, user: User) -> (AppRoute, u32) {
    writer.sign_in(user);
    (AppRoute::Home, crate::config::LOGIN_REDIRECT_DELAY_MS)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let writer = expect_context::<SessionWriter>();
    let toasts = expect_context::<Toasts>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);
    let page = RwSignal::new(LoginView::Form);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = match validate_login(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.update(FormErrors::clear);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            use leptos_router::NavigateOptions;

            use crate::util::form_errors::{FormAction, classify};

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&request).await {
                    Ok(user) => {
                        log::info!("logged in as user {}", user.id);
                        let (target, delay_ms) = after_login(writer, user);
                        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
                        navigate(target.path(), NavigateOptions::default());
                    }
                    Err(e) => {
                        report_failure(classify(FormAction::Login, &e), errors, toasts);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, writer, &navigate);
        }
    };

    let on_resend = move |_| {
        let request = match validate_email_request(&email.get()) {
            Ok(request) => request,
            Err(found) => {
                errors.set(found);
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::util::form_errors::{FormAction, classify};

            match crate::net::api::send_verification_email(&request).await {
                Ok(()) => page.set(LoginView::VerificationSent(request.email)),
                Err(e) => report_failure(classify(FormAction::ResendVerification, &e), errors, toasts),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, page, toasts);
        }
    };

    let email_action = move || match errors.with(|e| e.action(FormField::Email)) {
        Some(FieldAction::ResendVerification) => view! {
            <button type="button" class="link" on:click=on_resend>
                "Resend Verification Email ?"
            </button>
        }
        .into_any(),
        Some(FieldAction::SignupLink) => view! {
            <a class="link" href=AppRoute::Signup.path()>"Signup ?"</a>
        }
        .into_any(),
        None => ().into_any(),
    };

    move || match page.get() {
        LoginView::VerificationSent(address) => view! {
            <div class="notice">
                <h2 class="notice__title">"Verification Link Sent Successfully"</h2>
                <p>
                    "In order to activate your account, you have to verify your email. We have sent an email to "
                    <strong>{address}</strong>
                    " with further instructions."
                </p>
            </div>
        }
        .into_any(),
        LoginView::Form => view! {
            <div class="auth-page">
                <div class="auth-card">
                    <h3 class="auth-card__title">"Login To QuickBite"</h3>
                    <form class="auth-form" on:submit=on_submit.clone()>
                        <div class="field">
                            <label class="field__label">
                                "Email"
                                <input
                                    class="field__input"
                                    type="text"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                            </label>
                            <FieldMessage errors=errors field=FormField::Email/>
                            {email_action}
                        </div>
                        <a class="link auth-form__aside" href=AppRoute::ForgotPassword.path()>
                            "Forgot Password ?"
                        </a>
                        <TextField
                            label="Password"
                            field=FormField::Password
                            value=password
                            errors=errors
                            input_type="password"
                        />
                        <button class="btn btn--block" type="submit">
                            {move || if busy.get() { "Logging in..." } else { "Login" }}
                        </button>
                    </form>
                </div>
            </div>
        }
        .into_any(),
    }
}
