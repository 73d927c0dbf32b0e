//! Public landing page for anonymous visitors.

use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <h1 class="landing__title">"Welcome to food ordering application"</h1>
        </div>
    }
}
