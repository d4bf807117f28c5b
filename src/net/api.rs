//! Auth gateway: every remote call that can change who is signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call the gateway; the gateway talks to the users API through an
//! [`HttpTransport`] and is the only code that turns server outcomes into
//! session mutations.
//!
//! Every mutating request first fetches a fresh anti-forgery token (a `GET` on
//! the login endpoint) and sends it as `X-CSRFToken`, so each costs two round
//! trips. Tokens are never cached.
//!
//! ERROR HANDLING
//! ==============
//! Operations return `Result<_, ApiError>` and never retry. A failed call
//! issues no mutation, with one exception: startup resolution fails open to
//! "loaded, signed out" so the UI never waits forever.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{ApiRequest, BrowserTransport, HttpTransport};
use super::types::{
    ActivateRequest, ChangeDetailsRequest, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, RegisterForm,
    ResetCheckRequest, ResetCheckResponse, ResetCompleteRequest, SessionEnvelope, TokenResponse, UserProfile,
};
use crate::config::ApiEndpoints;
use crate::state::session::{CsrfToken, CurrentUser, LogoutUrl, SessionAction, SessionStore};
use crate::util::form;

/// Outcome of startup session resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Authenticated,
    Anonymous,
    /// Another caller already started resolution; no request was sent.
    AlreadyStarted,
}

/// Gateway bound to one session store. Clones share the resolution latch.
pub struct AuthGateway<T = BrowserTransport> {
    transport: Arc<T>,
    endpoints: Arc<ApiEndpoints>,
    store: SessionStore,
    resolving: Arc<AtomicBool>,
}

/// Gateway type the running application shares through context.
pub type Gateway = AuthGateway<BrowserTransport>;

impl<T> Clone for AuthGateway<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            endpoints: Arc::clone(&self.endpoints),
            store: self.store.clone(),
            resolving: Arc::clone(&self.resolving),
        }
    }
}

fn to_body<S: Serialize>(payload: &S) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<D: DeserializeOwned>(body: serde_json::Value) -> Result<D, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `user` with new names applied; the display name is the full name.
fn with_names(user: &UserProfile, first_name: &str, last_name: &str) -> UserProfile {
    UserProfile {
        display_name: format!("{first_name} {last_name}").trim().to_owned(),
        first_name: Some(first_name.to_owned()),
        last_name: Some(last_name.to_owned()),
        ..user.clone()
    }
}

impl<T: HttpTransport> AuthGateway<T> {
    pub fn new(transport: T, endpoints: ApiEndpoints, store: SessionStore) -> Self {
        Self {
            transport: Arc::new(transport),
            endpoints: Arc::new(endpoints),
            store,
            resolving: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Send a request and classify non-2xx responses.
    async fn fetch_json(&self, request: ApiRequest) -> Result<serde_json::Value, ApiError> {
        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response.body)
        } else {
            Err(ApiError::from_response(response.status, &response.body))
        }
    }

    /// Fetch a fresh anti-forgery token.
    ///
    /// # Errors
    ///
    /// Returns the transport or classification error of the token request.
    pub async fn fetch_token(&self) -> Result<String, ApiError> {
        let body = self.fetch_json(ApiRequest::get(self.endpoints.login.as_str())).await?;
        Ok(decode::<TokenResponse>(body)?.token)
    }

    /// Token fetch, then `POST` with the token header.
    async fn post_protected(&self, url: &str, body: Option<serde_json::Value>) -> Result<serde_json::Value, ApiError> {
        let token = self.fetch_token().await?;
        self.fetch_json(ApiRequest::post(url, body).with_csrf(token)).await
    }

    /// Resolve the startup session. Only the first call sends a request;
    /// overlapping or later calls return [`Resolution::AlreadyStarted`].
    ///
    /// # Errors
    ///
    /// Returns the request error after marking the session loaded and
    /// signed out.
    pub async fn resolve_session(&self) -> Result<Resolution, ApiError> {
        if self.resolving.swap(true, Ordering::SeqCst) {
            return Ok(Resolution::AlreadyStarted);
        }

        let fetched = match self.fetch_json(ApiRequest::get(self.endpoints.user.as_str())).await {
            Ok(body) => decode::<SessionEnvelope>(body),
            Err(err) => Err(err),
        };
        match fetched {
            Ok(SessionEnvelope { user: Some(user), logout_url, token }) => {
                self.store.dispatch(SessionAction::SetUser { user, logout_url, token });
                Ok(Resolution::Authenticated)
            }
            // The server answers 401 `{"user": null}` when nobody is signed in.
            Ok(_) | Err(ApiError::Unauthorized { .. }) => {
                self.store.dispatch(SessionAction::SetLoaded);
                Ok(Resolution::Anonymous)
            }
            Err(err) => {
                leptos::logging::warn!("session resolution failed: {err}");
                self.store.dispatch(SessionAction::SetLoaded);
                Err(err)
            }
        }
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank fields (no request sent),
    /// [`ApiError::Unauthorized`] for rejected credentials, or the transport
    /// error. The session is unchanged on any error.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        form::validate_login(email, password)?;
        let email = form::normalize_email(email);
        let body = to_body(&LoginRequest { email: &email, password })?;
        let envelope: SessionEnvelope = decode(self.post_protected(&self.endpoints.login, Some(body)).await?)?;
        let Some(user) = envelope.user else {
            return Err(ApiError::Unauthorized { message: None });
        };
        self.store.dispatch(SessionAction::SetUser {
            user: user.clone(),
            logout_url: envelope.logout_url,
            token: envelope.token,
        });
        Ok(user)
    }

    /// End the server session, then the local one.
    ///
    /// Posts to the `logout_url` the server reported for this session, falling
    /// back to the configured endpoint. A reply carrying `redirect_url` comes
    /// from the sudo logout: the server switched back to the impersonating
    /// user instead of ending the session, so the local session is kept and
    /// the URL returned for the caller to navigate to.
    ///
    /// # Errors
    ///
    /// Returns the request error. The local session stays signed in (and the
    /// channel open) when the server did not confirm the logout.
    pub async fn logout(&self) -> Result<Option<String>, ApiError> {
        let LogoutUrl(url) = self.store.project();
        let url = url.unwrap_or_else(|| self.endpoints.logout.clone());
        let body = match self.post_protected(&url, None).await {
            Ok(body) => body,
            Err(err) => {
                leptos::logging::error!("logout failed, keeping local session: {err}");
                return Err(err);
            }
        };
        if let Some(redirect) = body.get("redirect_url").and_then(serde_json::Value::as_str) {
            leptos::logging::log!("sudo logout, redirecting to {redirect}");
            return Ok(Some(redirect.to_owned()));
        }
        self.store.dispatch(SessionAction::SetLoggedOut);
        Ok(None)
    }

    /// Create an inactive account; the server emails an activation link.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank fields or mismatched passwords
    /// (no request sent), server field errors, or the transport error.
    pub async fn register(&self, registration: &RegisterForm) -> Result<(), ApiError> {
        form::validate_register(registration)?;
        let registration = RegisterForm { email: form::normalize_email(&registration.email), ..registration.clone() };
        self.post_protected(&self.endpoints.register, Some(to_body(&registration)?)).await?;
        Ok(())
    }

    /// Activate an account from the emailed key.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] for an invalid or expired key (the
    /// server re-sends the email for expired keys), or the transport error.
    pub async fn activate_account(&self, activation_key: &str) -> Result<UserProfile, ApiError> {
        form::require("activation_key", activation_key)?;
        let body = to_body(&ActivateRequest { activation_key })?;
        decode(self.post_protected(&self.endpoints.activate, Some(body)).await?)
    }

    /// Ask the server to email a password reset link.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank email, or the request error.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        form::require("email", email)?;
        let email = form::normalize_email(email);
        let body = to_body(&ForgotPasswordRequest { email: &email })?;
        self.post_protected(&self.endpoints.forgot_password, Some(body)).await?;
        Ok(())
    }

    /// Check a reset key and return the account email it belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] for an invalid or expired key.
    pub async fn check_reset_key(&self, reset_key: &str) -> Result<String, ApiError> {
        form::require("reset_key", reset_key)?;
        let body = to_body(&ResetCheckRequest { reset_key })?;
        let checked: ResetCheckResponse = decode(self.post_protected(&self.endpoints.reset_check, Some(body)).await?)?;
        Ok(checked.email)
    }

    /// Set a new password from a reset key.
    ///
    /// # Errors
    ///
    /// Mismatched or blank passwords are rejected before any request;
    /// otherwise returns server field errors or the transport error.
    pub async fn complete_password_reset(&self, reset_key: &str, password1: &str, password2: &str) -> Result<(), ApiError> {
        form::validate_password_pair(password1, password2)?;
        form::require("reset_key", reset_key)?;
        let body = to_body(&ResetCompleteRequest { reset_key, password1, password2 })?;
        self.post_protected(&self.endpoints.reset_complete, Some(body)).await?;
        Ok(())
    }

    /// Change the signed-in user's password.
    ///
    /// # Errors
    ///
    /// Blank or mismatched fields are rejected before any request; otherwise
    /// returns server field errors or the transport error.
    pub async fn change_password(&self, current_password: &str, password1: &str, password2: &str) -> Result<(), ApiError> {
        form::require("current_password", current_password)?;
        form::validate_password_pair(password1, password2)?;
        let body = to_body(&ChangePasswordRequest { current_password, password1, password2 })?;
        self.post_protected(&self.endpoints.change_password, Some(body)).await?;
        Ok(())
    }

    /// Update the signed-in user's name.
    ///
    /// The server may answer with the updated profile or an empty object.
    /// Either way the session user is refreshed (the submitted names applied
    /// to the current user when no profile came back); the token, logout URL
    /// and open channel are kept. Returns the refreshed user, if signed in or
    /// reported by the server.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank names, server field errors, or the
    /// transport error.
    pub async fn change_details(&self, first_name: &str, last_name: &str) -> Result<Option<UserProfile>, ApiError> {
        form::require("first_name", first_name)?;
        form::require("last_name", last_name)?;
        let (first_name, last_name) = (first_name.trim(), last_name.trim());
        let body = to_body(&ChangeDetailsRequest { first_name, last_name })?;
        let reply = self.post_protected(&self.endpoints.change_details, Some(body)).await?;

        let CurrentUser(current) = self.store.project();
        let refreshed = match decode::<UserProfile>(reply) {
            Ok(user) => Some(user),
            Err(_) => current.as_ref().map(|user| with_names(user, first_name, last_name)),
        };
        if let (Some(_), Some(user)) = (&current, &refreshed) {
            let LogoutUrl(logout_url) = self.store.project();
            let CsrfToken(token) = self.store.project();
            self.store.dispatch(SessionAction::SetUser { user: user.clone(), logout_url, token });
        }
        Ok(refreshed)
    }

    /// Fetch the server's API schema document into the session.
    ///
    /// # Errors
    ///
    /// Returns the request error; the session is unchanged.
    pub async fn fetch_remote_metadata(&self) -> Result<(), ApiError> {
        let data = self.fetch_json(ApiRequest::get(self.endpoints.remote_metadata.as_str())).await?;
        self.store.dispatch(SessionAction::SetRemoteMetadata { data });
        Ok(())
    }
}
