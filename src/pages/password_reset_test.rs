use super::*;

#[test]
fn accepted_key_exposes_account_email() {
    let stage = ResetStage::after_key_check(Ok("alice@example.com".to_owned()));
    assert_eq!(stage.email(), Some("alice@example.com"));
}

#[test]
fn rejected_key_is_terminal_failure() {
    let stage = ResetStage::after_key_check(Err(ApiError::Unauthorized { message: None }));
    assert_eq!(stage, ResetStage::Failed(KEY_REJECTED.to_owned()));
    assert_eq!(stage.email(), None);
}

#[test]
fn checking_has_no_email() {
    assert_eq!(ResetStage::CheckingKey.email(), None);
}

#[test]
fn result_for_current_key_settles_stage() {
    let stage = ResetStage::settle("key-2", "key-2", Ok("alice@example.com".to_owned()));
    assert_eq!(stage, Some(ResetStage::Ready { email: "alice@example.com".to_owned() }));
}

#[test]
fn result_for_previous_key_is_discarded() {
    assert_eq!(ResetStage::settle("key-2", "key-1", Ok("old@example.com".to_owned())), None);
    assert_eq!(ResetStage::settle("key-2", "key-1", Err(ApiError::Unauthorized { message: None })), None);
}
