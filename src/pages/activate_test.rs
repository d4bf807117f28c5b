use super::*;
use crate::net::error::FieldErrors;

#[test]
fn successful_activation_is_activated() {
    let ok: Result<UserProfile, ApiError> = Ok(UserProfile::new("Alice", "alice@example.com"));
    assert_eq!(ActivationStage::from_result(&ok), ActivationStage::Activated);
}

#[test]
fn any_failure_reports_possible_expiry() {
    let expired: Result<UserProfile, ApiError> =
        Err(ApiError::Validation(FieldErrors::single("activation_key", "Expired")));
    assert_eq!(ActivationStage::from_result(&expired), ActivationStage::Failed(ACTIVATION_FAILED.to_owned()));

    let offline: Result<UserProfile, ApiError> = Err(ApiError::Network("offline".to_owned()));
    assert_eq!(ActivationStage::from_result(&offline), ActivationStage::Failed(ACTIVATION_FAILED.to_owned()));
}
