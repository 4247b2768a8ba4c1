//! Construction errors.
//!
//! Charging itself never fails; these only come out of
//! [`PaymentAdapter::new`](crate::PaymentAdapter::new).

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}
