//! Request a password-reset email.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::form_field::TextField;
use crate::pages::report_failure;
use crate::state::toast::Toasts;
use crate::util::form_errors::{FormErrors, FormField};
use crate::util::validate::validate_email_request;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);
    let sent_to = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = match validate_email_request(&email.get()) {
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

            match crate::net::api::forgot_password(&request).await {
                Ok(()) => sent_to.set(Some(request.email)),
                Err(e) => report_failure(classify(FormAction::ForgotPassword, &e), errors, toasts),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, toasts);
        }
    };

    move || match sent_to.get() {
        Some(address) => view! {
            <div class="notice">
                <h2 class="notice__title">"Email sent Successfully"</h2>
                <p>
                    "We sent an email to "
                    <strong>{address}</strong>
                    " with instructions on how to reset your password."
                </p>
            </div>
        }
        .into_any(),
        None => view! {
            <div class="auth-page">
                <div class="auth-card">
                    <h3 class="auth-card__title">"Forgot Password"</h3>
                    <form class="auth-form" on:submit=on_submit.clone()>
                        <TextField
                            label="Email"
                            field=FormField::Email
                            value=email
                            errors=errors
                            description="We will send an email with instructions on how to reset the password"
                        />
                        <button class="btn btn--block" type="submit">
                            {move || if busy.get() { "Sending..." } else { "Send Reset Email" }}
                        </button>
                    </form>
                </div>
            </div>
        }
        .into_any(),
    }
}
