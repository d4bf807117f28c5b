//! Client-side form checks shared by pages and the auth gateway.
//!
//! Checks run before any request is sent, so a rejected form costs no round
//! trip. Failures use the same [`ApiError::Validation`] shape as server field
//! errors and render through the same path.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::error::{ApiError, FieldErrors};
use crate::net::types::RegisterForm;

pub const REQUIRED: &str = "This field is required.";
pub const PASSWORD_MISMATCH: &str = "Sorry the passwords must match.";

fn missing(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field, REQUIRED);
    }
}

fn finish(errors: FieldErrors) -> Result<(), ApiError> {
    if errors.is_empty() { Ok(()) } else { Err(ApiError::Validation(errors)) }
}

/// Require a single non-blank value.
///
/// # Errors
///
/// Returns a validation error keyed by `field` when `value` is blank.
pub fn require(field: &str, value: &str) -> Result<(), ApiError> {
    let mut errors = FieldErrors::new();
    missing(&mut errors, field, value);
    finish(errors)
}

/// Both password fields set and equal.
///
/// # Errors
///
/// Returns a validation error for a blank field, or for `password2` on mismatch.
pub fn validate_password_pair(password1: &str, password2: &str) -> Result<(), ApiError> {
    let mut errors = FieldErrors::new();
    missing(&mut errors, "password1", password1);
    missing(&mut errors, "password2", password2);
    if errors.is_empty() && password1 != password2 {
        errors.insert("password2", PASSWORD_MISMATCH);
    }
    finish(errors)
}

/// # Errors
///
/// Returns a validation error naming every blank field.
pub fn validate_login(email: &str, password: &str) -> Result<(), ApiError> {
    let mut errors = FieldErrors::new();
    missing(&mut errors, "email", email);
    missing(&mut errors, "password", password);
    finish(errors)
}

/// # Errors
///
/// Returns a validation error naming every blank field, or a password mismatch.
pub fn validate_register(form: &RegisterForm) -> Result<(), ApiError> {
    let mut errors = FieldErrors::new();
    missing(&mut errors, "email", &form.email);
    missing(&mut errors, "first_name", &form.first_name);
    missing(&mut errors, "last_name", &form.last_name);
    finish(errors)?;
    validate_password_pair(&form.password1, &form.password2)
}

/// Emails are compared case-insensitively server-side; only whitespace is stripped here.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_owned()
}
