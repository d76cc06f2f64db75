//! Frontend configuration

/// Fact display configuration
pub struct FactConfig;

impl FactConfig {
    /// Seconds a fact stays on screen before the next automatic refresh
    pub const RETENTION_SECS: u32 = 30;

    /// Tick interval driving the countdown, in milliseconds
    pub const TICK_INTERVAL_MS: u32 = 1_000;
}

/// Fallback API base for local development, when the app is not served
/// from the backend's origin.
const DEV_API_BASE: &str = "http://localhost:8080";

/// Resolve the facts API base URL from the page origin.
pub fn api_base_url() -> String {
    if let Some(window) = web_sys::window() {
        if let Ok(origin) = window.location().origin() {
            if !origin.is_empty() {
                return origin;
            }
        }
    }
    DEV_API_BASE.to_string()
}

/// Resolve the identity provider base URL. The provider is reached
/// through the same origin as the facts API.
pub fn identity_base_url() -> String {
    api_base_url()
}
