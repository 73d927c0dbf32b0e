use super::*;

#[test]
fn default_status_is_checking() {
    assert_eq!(TokenStatus::default(), TokenStatus::Checking);
}

#[test]
fn ok_is_valid_and_any_error_is_invalid() {
    assert_eq!(TokenStatus::from_result(&Ok(())), TokenStatus::Valid);
    assert_eq!(
        TokenStatus::from_result(&Err(ApiError::Status(401))),
        TokenStatus::Invalid
    );
    assert_eq!(
        TokenStatus::from_result(&Err(ApiError::Offline("down".to_owned()))),
        TokenStatus::Invalid
    );
}

#[test]
fn usable_token_rejects_missing_and_blank() {
    assert_eq!(usable_token(None), None);
    assert_eq!(usable_token(Some("  ".to_owned())), None);
    assert_eq!(usable_token(Some("abc.def".to_owned())), Some("abc.def".to_owned()));
}
