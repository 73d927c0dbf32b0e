use super::*;

#[tokio::test]
async fn healthz_reports_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn unknown_paths_are_a_real_route_under_the_layout() {
    let routes = generate_route_list(App);
    let paths: Vec<&str> = routes.iter().map(|route| route.path()).collect();

    assert!(paths.iter().any(|path| path.contains("*any")), "{paths:?}");
    for known in ["/login", "/home", "/signup/verify-email", "/reset-password"] {
        assert!(paths.contains(&known), "{known} missing from {paths:?}");
    }
}
