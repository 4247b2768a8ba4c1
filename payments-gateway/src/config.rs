//! Adapter configuration.

use std::env;
use std::fmt;
use std::time::Duration;

use reqwest::Url;
use reqwest::header::HeaderValue;

/// Charge endpoint used when none is configured.
pub const DEFAULT_GATEWAY_URL: &str = "https://api.payments.example/v1/charge";

/// Sandbox bearer token used when none is configured.
pub const DEFAULT_API_TOKEN: &str = "sk_test_123";

/// Deadline for a single charge call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub const ENV_GATEWAY_URL: &str = "PAYMENT_GATEWAY_URL";
pub const ENV_API_TOKEN: &str = "PAYMENT_GATEWAY_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "PAYMENT_GATEWAY_TIMEOUT_SECS";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid gateway URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Unsupported gateway URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("API token cannot be empty")]
    EmptyToken,

    #[error("API token contains characters not allowed in a header")]
    InvalidToken,

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),
}

/// Gateway endpoint, credentials and deadline.
///
/// Fields are private: a config is assembled with the `with_*` builders and
/// is read-only once handed to a [`PaymentAdapter`](crate::PaymentAdapter).
#[derive(Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    gateway_url: String,
    api_token: String,
    timeout: Duration,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            api_token: DEFAULT_API_TOKEN.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AdapterConfig {
    /// Creates a config pointing at the given charge endpoint.
    pub fn new(gateway_url: impl Into<String>) -> Self {
        Self::default().with_gateway_url(gateway_url)
    }

    /// Overrides the charge endpoint.
    pub fn with_gateway_url(mut self, gateway_url: impl Into<String>) -> Self {
        self.gateway_url = gateway_url.into();
        self
    }

    /// Sets the bearer token sent with every charge.
    pub fn with_api_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = api_token.into();
        self
    }

    /// Overrides the per-call deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Loads configuration from environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup (environment, `.env`
    /// map, test fixture).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_GATEWAY_URL) {
            config = config.with_gateway_url(url);
        }
        if let Some(token) = lookup(ENV_API_TOKEN) {
            config = config.with_api_token(token);
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(secs.clone()))?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks that the config can produce a well-formed request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.gateway_url).map_err(|e| ConfigError::InvalidUrl {
            url: self.gateway_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }

        if self.api_token.trim().is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        HeaderValue::from_str(&self.authorization()).map_err(|_| ConfigError::InvalidToken)?;

        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout("timeout must be non-zero".into()));
        }
        Ok(())
    }

    pub fn gateway_url(&self) -> &str {
        &self.gateway_url
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Value of the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.api_token)
    }
}

impl fmt::Debug for AdapterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterConfig")
            .field("gateway_url", &self.gateway_url)
            .field("api_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
