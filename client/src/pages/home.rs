//! Authenticated landing route.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<ReadSignal<AuthState>>();
    let greeting = move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .map(|user| format!("Hello, {}", user.display_name()))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="home">
            <h1>"Home"</h1>
            <p class="home__greeting">{greeting}</p>
        </div>
    }
}
