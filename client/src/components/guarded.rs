//! Route wrapper applying the access guard before the page is constructed.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::Redirect;

use crate::state::auth::AuthState;
use crate::util::auth::{AppRoute, GuardOutcome, final_route, guard};

/// Mount `children` when `route` admits the current session, otherwise
/// redirect. Evaluated once at entry; later session changes do not re-run it.
#[component]
pub fn Guarded(route: AppRoute, children: Children) -> impl IntoView {
    let auth = expect_context::<ReadSignal<AuthState>>();

    // Redirect straight to where the chain settles (`/login` -> `/` -> `/home`).
    let (outcome, target) = auth.with_untracked(|state| (guard(route, state), final_route(route, state)));
    match outcome {
        GuardOutcome::Proceed => children().into_any(),
        GuardOutcome::Redirect(next) => {
            log::debug!("guard: {} -> {} (settles on {})", route.path(), next.path(), target.path());
            view! { <Redirect path=target.path()/> }.into_any()
        }
    }
}
