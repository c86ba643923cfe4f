use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base URL when the backend is reachable on the local dev port.
pub const DEV_BASE_URL: &str = "http://localhost:8080/api";

/// Relative base URL for embedded/production deployments, where the same
/// origin that serves the UI also serves the API.
pub const PROD_BASE_URL: &str = "/api";

/// Per-request timeout applied client-wide.
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

const ENV_VAR: &str = "ATUIN_WEB_ENV";

/// Execution mode the client was started in. Decides the base URL once at
/// startup, never per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    /// Read the mode from `ATUIN_WEB_ENV`. Anything other than `production`
    /// (including an unset variable) means development.
    pub fn from_env() -> Self {
        match std::env::var(ENV_VAR) {
            Ok(v) if v.eq_ignore_ascii_case("production") => Mode::Production,
            _ => Mode::Development,
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Mode::Development => DEV_BASE_URL,
            Mode::Production => PROD_BASE_URL,
        }
    }
}

/// Immutable settings the HTTP client is built from.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn for_mode(mode: Mode) -> Self {
        Self::with_base_url(mode.base_url())
    }

    /// Point the client at an arbitrary base URL, keeping the default
    /// timeout. Used by tests and non-standard deployments.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_millis(REQUEST_TIMEOUT_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_mode_uses_relative_base_url() {
        assert_eq!(Mode::Production.base_url(), "/api");
    }

    #[test]
    fn development_mode_uses_local_backend() {
        assert_eq!(Mode::Development.base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn config_applies_default_timeout() {
        let config = ClientConfig::for_mode(Mode::Development);
        assert_eq!(config.timeout, Duration::from_millis(10_000));
        assert_eq!(config.base_url, DEV_BASE_URL);
    }

    #[test]
    fn mode_comes_from_the_environment() {
        std::env::set_var(ENV_VAR, "production");
        assert_eq!(Mode::from_env(), Mode::Production);
        std::env::set_var(ENV_VAR, "development");
        assert_eq!(Mode::from_env(), Mode::Development);
        std::env::remove_var(ENV_VAR);
        assert_eq!(Mode::from_env(), Mode::Development);
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Production).unwrap(), "\"production\"");
        let mode: Mode = serde_json::from_str("\"development\"").unwrap();
        assert_eq!(mode, Mode::Development);
    }
}
