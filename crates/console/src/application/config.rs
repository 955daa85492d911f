//! Console configuration
//!
//! Read from environment variables (the binary loads a `.env` file first with
//! `dotenvy`). Everything has a default so a bare `mediadmin` starts against a
//! local backend.

use thiserror::Error;
use url::Url;

/// Default base URL of the catalog API
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Default page size for paginated lists
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Default request timeout in milliseconds
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

pub const ENV_API_URL: &str = "MEDIADMIN_API_URL";
pub const ENV_PAGE_LIMIT: &str = "MEDIADMIN_PAGE_LIMIT";
pub const ENV_REQUEST_TIMEOUT_MS: &str = "MEDIADMIN_REQUEST_TIMEOUT_MS";
pub const ENV_API_TOKEN: &str = "MEDIADMIN_API_TOKEN";
pub const ENV_DEMO: &str = "MEDIADMIN_DEMO";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid URL: {reason}")]
    InvalidUrl { name: &'static str, reason: String },

    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Base URL of the catalog API, without a trailing slash
    pub api_url: String,
    pub page_limit: u32,
    pub request_timeout_ms: u64,
    /// Token to start signed in with
    pub api_token: Option<String>,
    /// Serve everything from the in-memory backend
    pub demo: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            api_token: None,
            demo: false,
        }
    }
}

impl ConsoleConfig {
    /// Create config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup (the environment, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl {
                name: ENV_API_URL,
                reason: e.to_string(),
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidUrl {
                    name: ENV_API_URL,
                    reason: format!("unsupported scheme {:?}", url.scheme()),
                });
            }
            config.api_url = url.as_str().trim_end_matches('/').to_string();
        }

        if let Some(raw) = lookup(ENV_PAGE_LIMIT) {
            config.page_limit = parse_positive(ENV_PAGE_LIMIT, &raw)?;
        }

        if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT_MS) {
            config.request_timeout_ms = parse_positive(ENV_REQUEST_TIMEOUT_MS, &raw)?;
        }

        config.api_token = lookup(ENV_API_TOKEN)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        config.demo = lookup(ENV_DEMO)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(config)
    }

    /// Absolute URL for an API path such as `/api/songs`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), path)
    }
}

fn parse_positive<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(value),
        _ => Err(ConfigError::InvalidNumber {
            name,
            value: raw.to_string(),
        }),
    }
}
