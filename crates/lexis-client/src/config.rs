//! Service endpoint configuration

/// Environment variable overriding the analysis service base URL.
pub const BASE_URL_ENV: &str = "LEXIS_API_BASE_URL";

/// Local development default when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Where the analysis service lives. One base URL is the only transport
/// configuration the client carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    base_url: String,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve from the environment, falling back to the development
    /// default when the variable is unset or blank.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(value),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the analyze endpoint.
    pub fn analyze_url(&self) -> String {
        format!("{}/api/analyze/", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
