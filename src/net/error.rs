//! Error taxonomy for gateway operations.
//!
//! ERROR HANDLING
//! ==============
//! Every gateway call returns `Result<_, ApiError>`; nothing is thrown past the
//! caller. Pages turn an error into a sentence with [`ApiError::describe`] and
//! render per-field messages from [`ApiError::field_errors`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;
use std::fmt;

/// Field-level validation messages keyed by form field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-field error, used for client-side form checks.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse the `errors` member of a server error body.
    ///
    /// Messages may be a string or a list of strings; lists are joined.
    pub fn from_body(body: &serde_json::Value) -> Option<Self> {
        let map = body.get("errors")?.as_object()?;
        let mut errors = Self::new();
        for (field, value) in map {
            errors.insert(field.clone(), message_text(value));
        }
        (!errors.is_empty()).then_some(errors)
    }
}

fn message_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items.iter().map(message_text).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.0.values().map(String::as_str).collect::<Vec<_>>().join(", ");
        f.write_str(&joined)
    }
}

/// Failure outcome of a gateway operation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No response: connection failure or timeout.
    #[error("network error: {0}")]
    Network(String),
    /// Bad credentials, expired key or missing session.
    #[error("not authorized")]
    Unauthorized { message: Option<String> },
    /// Field-level errors, from the server or from client-side form checks.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("invalid response: {0}")]
    Decode(String),
    /// Called without a browser environment.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-success HTTP response.
    pub fn from_response(status: u16, body: &serde_json::Value) -> Self {
        if let Some(errors) = FieldErrors::from_body(body) {
            return Self::Validation(errors);
        }
        let message = body.get("error").and_then(serde_json::Value::as_str).map(str::to_owned);
        match status {
            401 | 403 => Self::Unauthorized { message },
            _ => Self::Rejected { status, message },
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// User-facing sentence for a failed `action` (e.g. "log you in").
    pub fn describe(&self, action: &str) -> String {
        match self {
            Self::Network(_) => {
                format!("Sorry we couldn't {action} at this time. Please check your connection and try again.")
            }
            Self::Unauthorized { message: Some(message) } | Self::Rejected { message: Some(message), .. } => {
                format!("Sorry we couldn't {action}. {message}")
            }
            Self::Unauthorized { message: None } => {
                format!("Sorry we couldn't {action}. Please check your details.")
            }
            Self::Validation(errors) => format!("Sorry we couldn't {action}. {errors}"),
            Self::Rejected { message: None, .. } | Self::Decode(_) | Self::Unavailable => {
                format!("Sorry we couldn't {action} at this time.")
            }
        }
    }
}
