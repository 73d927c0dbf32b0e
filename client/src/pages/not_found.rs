//! Catch-all view for paths outside the route table.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <div class="notice">"Not Found"</div> }
}
