//! Account creation page.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::form_field::TextField;
use crate::pages::report_failure;
use crate::state::toast::Toasts;
use crate::util::form_errors::{FormErrors, FormField};
use crate::util::validate::validate_signup;

#[component]
pub fn SignupPage() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);
    let created_for = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = match validate_signup(&first_name.get(), &last_name.get(), &email.get(), &password.get()) {
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

            match crate::net::api::signup(&request).await {
                Ok(()) => {
                    for field in [first_name, last_name, email, password] {
                        field.set(String::new());
                    }
                    created_for.set(Some(request.email));
                }
                Err(e) => report_failure(classify(FormAction::Signup, &e), errors, toasts),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, toasts);
        }
    };

    move || match created_for.get() {
        Some(address) => view! {
            <div class="notice">
                <h2 class="notice__title">"Account Created Successfully"</h2>
                <p>
                    "In order to activate your account, you have to verify your email. We have sent an email to "
                    <strong>{address}</strong>
                    " with further instructions."
                </p>
            </div>
        }
        .into_any(),
        None => view! {
            <div class="auth-page">
                <div class="auth-card">
                    <h3 class="auth-card__title">"Signup To QuickBite"</h3>
                    <form class="auth-form" on:submit=on_submit.clone()>
                        <TextField label="First Name" field=FormField::FirstName value=first_name errors=errors/>
                        <TextField label="Last Name" field=FormField::LastName value=last_name errors=errors/>
                        <TextField label="Email" field=FormField::Email value=email errors=errors/>
                        <TextField
                            label="Password"
                            field=FormField::Password
                            value=password
                            errors=errors
                            input_type="password"
                        />
                        <button class="btn btn--block" type="submit">
                            {move || if busy.get() { "Signing up..." } else { "Signup" }}
                        </button>
                    </form>
                </div>
            </div>
        }
        .into_any(),
    }
}
