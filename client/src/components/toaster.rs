//! Toast stack rendered above every route.

use leptos::prelude::*;

use crate::state::toast::{Toast, Toasts};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let state = toasts.state();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || state.with(|s| s.items.clone())
                key=|toast| toast.id
                children=move |toast: Toast| view! { <ToastItem toast=toast/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let id = toast.id;
    schedule_dismiss(toasts, id);

    view! {
        <div class=toast.kind.css_class() role="status" on:click=move |_| toasts.dismiss(id)>
            {toast.message}
        </div>
    }
}

fn schedule_dismiss(toasts: Toasts, id: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::config::TOAST_TTL_MS).await;
        toasts.dismiss(id);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (toasts, id);
    }
}
