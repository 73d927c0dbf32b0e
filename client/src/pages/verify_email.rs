//! Landing target of the signup verification email.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_query_map;

use crate::components::invalid_token::InvalidToken;
use crate::util::auth::AppRoute;
use crate::util::token::{TokenStatus, usable_token};

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let query = use_query_map();
    let token = usable_token(query.with_untracked(|q| q.get("token")));
    let status = RwSignal::new(TokenStatus::Checking);

    match token {
        None => status.set(TokenStatus::Invalid),
        #[cfg(feature = "hydrate")]
        Some(token) => leptos::task::spawn_local(async move {
            let outcome = crate::net::api::verify_email(&token).await;
            status.set(TokenStatus::from_result(&outcome));
        }),
        #[cfg(not(feature = "hydrate"))]
        Some(_) => {}
    }

    move || match status.get() {
        TokenStatus::Checking => view! { <div class="loading">"Verifying email..."</div> }.into_any(),
        TokenStatus::Invalid => view! { <InvalidToken/> }.into_any(),
        TokenStatus::Valid => view! {
            <div class="notice">
                <h2 class="notice__title">
                    "Your email has been verified. You can now login to the application"
                </h2>
                <a class="btn" href=AppRoute::Login.path()>"Log In"</a>
            </div>
        }
        .into_any(),
    }
}
