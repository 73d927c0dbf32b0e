//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the session signal. Its read half goes into context for route
//! guards and views; its write half is only reachable through
//! `SessionWriter`. No route content or chrome renders until `SessionGate`
//! sees the initial session check settle.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::guarded::Guarded;
use crate::components::navbar::NavBar;
use crate::components::session_gate::SessionGate;
use crate::components::toaster::Toaster;
use crate::pages::{
    forgot_password::ForgotPasswordPage, home::HomePage, landing::LandingPage, login::LoginPage,
    not_found::NotFoundPage, reset_password::ResetPasswordPage, signup::SignupPage,
    verify_email::VerifyEmailPage,
};
use crate::state::auth::{AuthState, SessionWriter};
use crate::state::toast::{ToastState, Toasts};
use crate::util::auth::AppRoute;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (auth, set_auth) = signal(AuthState::default());
    provide_context(auth);
    provide_context(SessionWriter::new(set_auth));
    provide_context(Toasts::new(RwSignal::new(ToastState::default())));

    view! {
        <Stylesheet id="leptos" href="/pkg/quickbite.css"/>
        <Title text="QuickBite"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <ParentRoute path=StaticSegment("") view=Layout>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Guarded route=AppRoute::Landing><LandingPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("home")
                        view=|| view! { <Guarded route=AppRoute::Home><HomePage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <Guarded route=AppRoute::Login><LoginPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("signup")
                        view=|| view! { <Guarded route=AppRoute::Signup><SignupPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("signup"), StaticSegment("verify-email"))
                        view=|| view! { <Guarded route=AppRoute::VerifyEmail><VerifyEmailPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("forgot-password")
                        view=|| view! { <Guarded route=AppRoute::ForgotPassword><ForgotPasswordPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("reset-password")
                        view=|| view! { <Guarded route=AppRoute::ResetPassword><ResetPasswordPage/></Guarded> }
                    />
                    <Route path=WildcardSegment("any") view=NotFoundPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Chrome shared by every route, unknown paths included. The session gate
/// sits here, below `Routes`, so SSR route discovery still sees the full
/// route tree.
#[component]
fn Layout() -> impl IntoView {
    view! {
        <SessionGate>
            <div class="layout">
                <Toaster/>
                <NavBar/>
                <main class="layout__content">
                    <Outlet/>
                </main>
            </div>
        </SessionGate>
    }
}
