//! Wire DTOs for the users API.
//!
//! DESIGN
//! ======
//! The user object is server-defined. Only the fields the UI renders are
//! typed; everything else is carried through untouched in `extra` so a
//! refreshed profile never loses data the client does not understand.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by the users API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Human-readable name shown in the dashboard greeting.
    pub display_name: String,
    pub email: String,
    /// Used to prefill the change-details form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Remaining server fields (role, public id, login timestamps, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    /// Minimal profile with only the fields the client requires.
    pub fn new(display_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
            first_name: None,
            last_name: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// Session description returned by the current-user and login endpoints.
///
/// An absent (or `null`) `user` means there is no active session.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SessionEnvelope {
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub logout_url: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Anti-forgery token served by `GET` on the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Reply to a reset-key check: the account the key belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ResetCheckResponse {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Registration form as submitted by the register page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterForm {
    pub email: String,
    pub password1: String,
    pub password2: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Serialize)]
pub struct ActivateRequest<'a> {
    pub activation_key: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ForgotPasswordRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ResetCheckRequest<'a> {
    pub reset_key: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ResetCompleteRequest<'a> {
    pub reset_key: &'a str,
    pub password1: &'a str,
    pub password2: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ChangePasswordRequest<'a> {
    pub current_password: &'a str,
    pub password1: &'a str,
    pub password2: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ChangeDetailsRequest<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
}
