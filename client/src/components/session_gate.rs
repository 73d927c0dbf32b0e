//! Holds every route back until the initial session check settles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the shared layout under the root route. The check is claimed through
//! `SessionWriter::begin_check`, so re-mounting the gate never issues a
//! second `/authentication/me` request.

use leptos::prelude::*;

use crate::state::auth::{AuthState, SessionWriter};

/// Render `children` only once `AuthState::resolved` is true.
#[component]
pub fn SessionGate(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<ReadSignal<AuthState>>();
    let writer = expect_context::<SessionWriter>();

    start_session_check(writer);

    view! {
        <Show
            when=move || auth.with(|state| state.resolved)
            fallback=|| view! { <LoadingPlaceholder/> }
        >
            {children()}
        </Show>
    }
}

fn start_session_check(writer: SessionWriter) {
    #[cfg(feature = "hydrate")]
    {
        if writer.begin_check() {
            log::debug!("checking session");
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::fetch_current_user().await;
                writer.settle(outcome);
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = writer;
    }
}

#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! { <div class="loading">"Loading...."</div> }
}
