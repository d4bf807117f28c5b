//! Client configuration: API endpoint paths and channel settings.
//!
//! DESIGN
//! ======
//! Paths are configuration rather than hard-coded contracts. Defaults match
//! the server's `/api/users/*` routes so a bare deployment needs no config;
//! a deployment behind a different prefix supplies a JSON override.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Errors raised while loading a configuration override.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid client config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("endpoint `{name}` must be an absolute path, got `{value}`")]
    RelativePath { name: &'static str, value: String },
}

/// REST endpoint paths consumed by the auth gateway.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiEndpoints {
    pub user: String,
    /// Serves the anti-forgery token on GET and accepts credentials on POST.
    pub login: String,
    pub logout: String,
    pub register: String,
    pub activate: String,
    pub forgot_password: String,
    pub reset_check: String,
    pub reset_complete: String,
    pub change_password: String,
    pub change_details: String,
    pub remote_metadata: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            user: "/api/users/user/".to_owned(),
            login: "/api/users/login/".to_owned(),
            logout: "/api/users/logout/".to_owned(),
            register: "/api/users/register/".to_owned(),
            activate: "/api/users/activate/".to_owned(),
            forgot_password: "/api/users/reset_password/".to_owned(),
            reset_check: "/api/users/reset_password_check/".to_owned(),
            reset_complete: "/api/users/reset_password_complete/".to_owned(),
            change_password: "/api/users/change_password/".to_owned(),
            change_details: "/api/users/change_details/".to_owned(),
            remote_metadata: "/api/v1/openapi.json".to_owned(),
        }
    }
}

impl ApiEndpoints {
    fn named(&self) -> [(&'static str, &str); 11] {
        [
            ("user", &self.user),
            ("login", &self.login),
            ("logout", &self.logout),
            ("register", &self.register),
            ("activate", &self.activate),
            ("forgot_password", &self.forgot_password),
            ("reset_check", &self.reset_check),
            ("reset_complete", &self.reset_complete),
            ("change_password", &self.change_password),
            ("change_details", &self.change_details),
            ("remote_metadata", &self.remote_metadata),
        ]
    }
}

/// Top-level client configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiEndpoints,
    /// Path of the notification channel on the page's own host.
    pub channel_path: String,
    /// Upper bound for a single HTTP request before it counts as a network failure.
    pub request_timeout_ms: u32,
    /// Title shown in the navigation bar and document head.
    pub project_title: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiEndpoints::default(),
            channel_path: "/ws/".to_owned(),
            request_timeout_ms: 15_000,
            project_title: option_env!("PROJECT_TITLE").unwrap_or("Project X").to_owned(),
        }
    }
}

impl ClientConfig {
    /// Parse a (possibly partial) JSON override; missing keys keep defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::RelativePath`] when a path does not start with `/`.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration baked in at build time through `PROJECTX_CLIENT_CONFIG`,
    /// falling back to defaults when unset or invalid.
    pub fn from_build_env() -> Self {
        let Some(raw) = option_env!("PROJECTX_CLIENT_CONFIG") else {
            return Self::default();
        };
        Self::from_json(raw).unwrap_or_else(|e| {
            leptos::logging::warn!("ignoring PROJECTX_CLIENT_CONFIG: {e}");
            Self::default()
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let channel = ("channel_path", self.channel_path.as_str());
        for (name, value) in self.api.named().into_iter().chain(std::iter::once(channel)) {
            if !value.starts_with('/') {
                return Err(ConfigError::RelativePath { name, value: value.to_owned() });
            }
        }
        Ok(())
    }
}
