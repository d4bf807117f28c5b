use super::*;

#[test]
fn failed_logout_produces_notice() {
    let result = Err(ApiError::Rejected { status: 500, message: None });
    assert_eq!(
        logout_notice(&result).as_deref(),
        Some("Sorry we couldn't log you out at this time.")
    );
}

#[test]
fn successful_logout_has_no_notice() {
    assert_eq!(logout_notice(&Ok(None)), None);
    assert_eq!(logout_notice(&Ok(Some("/admin/".to_owned()))), None);
}
