use std::time::Duration;

use crate::error::{ClientError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const BASE_URL_ENV: &str = "SPORTAI_API_URL";
pub const TIMEOUT_ENV: &str = "SPORTAI_TIMEOUT_SECS";

/// Analysis runs the whole video through the model on the backend, so the
/// default is generous.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Process-wide client settings. Built once at startup and handed to the
/// transport by value; there is no runtime mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');

        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ClientError::InvalidConfig {
                reason: format!("base URL must start with http:// or https://, got {base_url:?}"),
            });
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Resolve from `SPORTAI_API_URL` / `SPORTAI_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::resolve(None)
    }

    /// An explicit base URL (e.g. a CLI flag) wins over the environment.
    pub fn resolve(explicit_base_url: Option<String>) -> Result<Self> {
        Self::from_lookup(explicit_base_url, |key| std::env::var(key).ok())
    }

    fn from_lookup(
        explicit_base_url: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let base_url = explicit_base_url
            .or_else(|| lookup(BASE_URL_ENV))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut config = Self::new(base_url)?;

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| ClientError::InvalidConfig {
                reason: format!("{TIMEOUT_ENV} must be a whole number of seconds, got {raw:?}"),
            })?;
            if secs == 0 {
                return Err(ClientError::InvalidConfig {
                    reason: format!("{TIMEOUT_ENV} must be greater than zero"),
                });
            }
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}
