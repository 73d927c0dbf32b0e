//! Shown in place of a token page when the emailed link is unusable.

use leptos::prelude::*;

#[component]
pub fn InvalidToken() -> impl IntoView {
    view! {
        <div class="notice">
            <h2 class="notice__title">"Invalid Token"</h2>
            <p>
                "The Link is invalid. Please make sure you click the link sent to your email and do not modify the URL yourself"
            </p>
        </div>
    }
}
