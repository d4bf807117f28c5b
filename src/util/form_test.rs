use super::*;

fn field(err: &ApiError, name: &str) -> Option<String> {
    err.field_errors().and_then(|e| e.get(name)).map(str::to_owned)
}

#[test]
fn password_pair_rejects_mismatch_on_second_field() {
    let err = validate_password_pair("secret-1", "secret-2").unwrap_err();
    assert_eq!(field(&err, "password2").as_deref(), Some(PASSWORD_MISMATCH));
    assert_eq!(field(&err, "password1"), None);
}

#[test]
fn password_pair_reports_blank_fields_before_mismatch() {
    let err = validate_password_pair("", "x").unwrap_err();
    assert_eq!(field(&err, "password1").as_deref(), Some(REQUIRED));
    assert_eq!(field(&err, "password2"), None);
}

#[test]
fn password_pair_accepts_equal_values() {
    assert_eq!(validate_password_pair("s3cret", "s3cret"), Ok(()));
}

#[test]
fn login_requires_both_fields() {
    let err = validate_login("  ", "").unwrap_err();
    assert_eq!(field(&err, "email").as_deref(), Some(REQUIRED));
    assert_eq!(field(&err, "password").as_deref(), Some(REQUIRED));
    assert_eq!(validate_login("a@x.com", "pw"), Ok(()));
}

#[test]
fn register_checks_names_then_passwords() {
    let mut form = RegisterForm {
        email: "a@x.com".to_owned(),
        password1: "one".to_owned(),
        password2: "two".to_owned(),
        first_name: String::new(),
        last_name: "Smith".to_owned(),
    };
    let err = validate_register(&form).unwrap_err();
    assert_eq!(field(&err, "first_name").as_deref(), Some(REQUIRED));
    assert_eq!(field(&err, "password2"), None);

    form.first_name = "Alice".to_owned();
    let err = validate_register(&form).unwrap_err();
    assert_eq!(field(&err, "password2").as_deref(), Some(PASSWORD_MISMATCH));

    form.password2 = "one".to_owned();
    assert_eq!(validate_register(&form), Ok(()));
}

#[test]
fn require_trims_whitespace() {
    assert!(require("reset_key", " \t").is_err());
    assert_eq!(require("reset_key", "abc"), Ok(()));
}

#[test]
fn normalize_email_strips_whitespace_only() {
    assert_eq!(normalize_email("  Alice@X.com \n"), "Alice@X.com");
}
