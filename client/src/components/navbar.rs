//! Top navigation bar with session-aware actions.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, SessionWriter};
use crate::state::toast::Toasts;
use crate::util::auth::AppRoute;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<ReadSignal<AuthState>>();
    let writer = expect_context::<SessionWriter>();
    let toasts = expect_context::<Toasts>();
    let navigate = use_navigate();

    // The request is not awaited: the client forgets the session either way.
    let on_logout = move |_| {
        send_logout();
        let target = after_logout(writer, toasts);
        navigate(target.path(), NavigateOptions::default());
    };

    view! {
        <header class="navbar">
            <a class="navbar__logo" href=AppRoute::Landing.path()>
                "QuickBite"
            </a>
            <nav class="navbar__links">
                <Show
                    when=move || auth.with(AuthState::is_authenticated)
                    fallback=|| {
                        view! {
                            <a class="btn btn--link" href=AppRoute::Login.path()>"Login"</a>
                            <a class="btn btn--small" href=AppRoute::Signup.path()>"Signup"</a>
                        }
                    }
                >
                    <button class="btn btn--link" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
            </nav>
        </header>
    }
}

pub(crate) const LOGGED_OUT_MESSAGE: &str = "Logged out successfully";

/// Local half of logout: forget the user, confirm, and return where to go.
pub(crate) fn after_logout(writer: SessionWriter, toasts: Toasts) -> AppRoute {
    writer.sign_out();
    toasts.success(LOGGED_OUT_MESSAGE);
    AppRoute::Login
}

fn send_logout() {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async {
        if let Err(e) = crate::net::api::logout().await {
            log::warn!("logout request failed: {e}");
        }
    });
}
