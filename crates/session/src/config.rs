//! Backend location.

use crate::{Result, SessionError};

/// Base URL used when `API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Configuration for talking to the learning backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a config for the given base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(SessionError::Config(format!(
                "API base URL is empty: {base_url:?}"
            )));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Build from an optional environment value, defaulting when unset.
    ///
    /// The frontend passes `option_env!("API_URL")`.
    pub fn from_env_value(value: Option<&str>) -> Result<Self> {
        match value {
            Some(url) => Self::new(url),
            None => Ok(Self::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
