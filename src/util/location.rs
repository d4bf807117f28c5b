//! Page origin lookup.
//!
//! Reads `window.location` in the browser; elsewhere falls back to a local
//! development origin so endpoint computation stays deterministic.

/// Scheme and authority of the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOrigin {
    /// Scheme with trailing colon, as `Location.protocol` reports it (`"https:"`).
    pub protocol: String,
    /// Hostname plus port when one is set (`"example.com:8443"`).
    pub host: String,
}

impl PageOrigin {
    pub fn new(protocol: impl Into<String>, host: impl Into<String>) -> Self {
        Self { protocol: protocol.into(), host: host.into() }
    }
}

/// Origin of the page the app is running in.
pub fn current_origin() -> PageOrigin {
    #[cfg(feature = "csr")]
    {
        if let Some(location) = web_sys::window().map(|w| w.location()) {
            if let (Ok(protocol), Ok(host)) = (location.protocol(), location.host()) {
                return PageOrigin { protocol, host };
            }
        }
    }
    PageOrigin::new("http:", "localhost:3000")
}

/// Full page navigation to `url`. No-op outside the browser.
pub fn navigate_to(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                leptos::logging::warn!("navigation to {url} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}
