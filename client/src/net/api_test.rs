use super::*;

#[test]
fn join_endpoint_inserts_single_slash() {
    assert_eq!(
        join_endpoint("http://localhost:8000/api", ME_PATH),
        "http://localhost:8000/api/authentication/me"
    );
}

#[test]
fn join_endpoint_collapses_duplicate_slashes() {
    assert_eq!(
        join_endpoint("https://quickbite.test/api/", "/authentication/login"),
        "https://quickbite.test/api/authentication/login"
    );
}

#[test]
fn endpoint_paths_live_under_authentication() {
    for path in [
        ME_PATH,
        LOGIN_PATH,
        SIGNUP_PATH,
        LOGOUT_PATH,
        FORGOT_PASSWORD_PATH,
        VERIFY_RESET_TOKEN_PATH,
        RESET_PASSWORD_PATH,
        SEND_VERIFICATION_PATH,
        VERIFY_EMAIL_PATH,
    ] {
        assert!(path.starts_with("/authentication/"), "{path}");
        assert!(!path.contains('?'), "{path}");
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_outside_browser_are_unavailable() {
    let outcome = block_on_ready(fetch_current_user());
    assert_eq!(outcome, Err(ApiError::Unavailable));
}

/// Drive a future that never awaits anything pending.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("stub future should resolve immediately"),
    }
}
