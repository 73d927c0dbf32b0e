use super::*;

fn alice() -> User {
    User {
        id: 7,
        email: "alice@example.com".to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Liddell".to_owned(),
    }
}

#[test]
fn user_reads_camel_case_envelope() {
    let body = r#"{"data":{"id":7,"email":"alice@example.com","firstName":"Alice","lastName":"Liddell"}}"#;
    let envelope: DataEnvelope<User> = serde_json::from_str(body).unwrap();
    assert_eq!(envelope.data, alice());
}

#[test]
fn user_accepts_snake_case_names() {
    let body = r#"{"id":7,"email":"alice@example.com","first_name":"Alice","last_name":"Liddell"}"#;
    let user: User = serde_json::from_str(body).unwrap();
    assert_eq!(user, alice());
}

#[test]
fn user_missing_email_is_rejected() {
    let body = r#"{"id":7,"firstName":"Alice","lastName":"Liddell"}"#;
    assert!(serde_json::from_str::<User>(body).is_err());
}

#[test]
fn display_name_joins_parts() {
    assert_eq!(alice().display_name(), "Alice Liddell");
}

#[test]
fn display_name_falls_back_to_email() {
    let user = User {
        first_name: " ".to_owned(),
        last_name: String::new(),
        ..alice()
    };
    assert_eq!(user.display_name(), "alice@example.com");
}

#[test]
fn signup_request_uses_camel_case_keys() {
    let body = serde_json::to_value(SignupRequest {
        first_name: "Alice".to_owned(),
        last_name: "Liddell".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "rabbithole".to_owned(),
    })
    .unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "firstName": "Alice",
            "lastName": "Liddell",
            "email": "alice@example.com",
            "password": "rabbithole",
        })
    );
}

#[test]
fn reset_password_request_uses_confirm_password_key() {
    let body = serde_json::to_value(ResetPasswordRequest {
        password: "newsecret".to_owned(),
        confirm_password: "newsecret".to_owned(),
        token: "tok".to_owned(),
    })
    .unwrap();
    assert_eq!(body["confirmPassword"], "newsecret");
    assert_eq!(body["token"], "tok");
    assert!(body.get("confirm_password").is_none());
}
