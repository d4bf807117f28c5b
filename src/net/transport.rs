//! HTTP transport seam used by the auth gateway.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, bounded by a
//! `gloo-timers` timeout. Elsewhere the browser transport reports
//! [`ApiError::Unavailable`] since these endpoints only make sense in a page.
//!
//! DESIGN
//! ======
//! The transport only moves bytes: it returns every HTTP status as an
//! [`ApiResponse`] and fails only when no response arrived. Status
//! classification lives in the gateway so fakes in tests exercise it too.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use super::error::ApiError;

/// Header carrying the anti-forgery token on mutating requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One outgoing JSON request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<serde_json::Value>,
    pub csrf_token: Option<String>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), body: None, csrf_token: None }
    }

    pub fn post(url: impl Into<String>, body: Option<serde_json::Value>) -> Self {
        Self { method: Method::Post, url: url.into(), body, csrf_token: None }
    }

    #[must_use]
    pub fn with_csrf(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }
}

/// Any HTTP response, successful or not.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests and yields responses; errors only on transport failure.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no response was received and
    /// [`ApiError::Decode`] when the body is not JSON.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Transport backed by the browser `fetch` API.
#[derive(Clone, Copy, Debug)]
pub struct BrowserTransport {
    timeout_ms: u32,
}

impl BrowserTransport {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

impl HttpTransport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use futures::future::{Either, select};

            leptos::logging::log!("{:?} {}", request.method, request.url);
            let call = Box::pin(perform(request));
            let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(self.timeout_ms));
            match select(call, timeout).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(timeout_error(self.timeout_ms)),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, self.timeout_ms);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
async fn perform(request: ApiRequest) -> Result<ApiResponse, ApiError> {
    use gloo_net::http::Request;

    let mut builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
    };
    if let Some(token) = &request.csrf_token {
        builder = builder.header(CSRF_HEADER, token);
    }
    let response = match &request.body {
        Some(body) => builder.json(body).map_err(|e| ApiError::Decode(e.to_string()))?.send().await,
        None => builder.send().await,
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let text = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok(ApiResponse { status, body: parse_body(&text)? })
}

#[cfg(any(test, feature = "csr"))]
fn timeout_error(timeout_ms: u32) -> ApiError {
    ApiError::Network(format!("request timed out after {timeout_ms}ms"))
}

/// Empty bodies (e.g. bare 204s) read as `null`.
#[cfg(any(test, feature = "csr"))]
fn parse_body(text: &str) -> Result<serde_json::Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}
