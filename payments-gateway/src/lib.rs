//! # Payments Gateway
//!
//! Client-side adapter that forwards a charge to the remote payment gateway
//! and normalizes whatever comes back into a [`PaymentResult`].
//!
//! ## Architecture
//!
//! - `adapter` - [`PaymentAdapter`], the single `charge` operation
//! - `config` - [`AdapterConfig`] (endpoint, bearer token, deadline)
//! - `http` - [`HttpTransport`], the reqwest implementation of the
//!   [`ChargeTransport`](payments_types::ChargeTransport) port
//!
//! ```no_run
//! use payments_gateway::{AdapterConfig, PaymentAdapter};
//!
//! # async fn run() -> Result<(), payments_gateway::GatewayError> {
//! let adapter = PaymentAdapter::new(AdapterConfig::new("https://custom.url/pay"))?;
//! let result = adapter.charge(150.0, "tok_visa_9999").await;
//! println!("{}", serde_json::to_string(&result).unwrap());
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod config;
pub mod error;
pub mod http;


pub use adapter::PaymentAdapter;
pub use config::{AdapterConfig, ConfigError};
pub use error::GatewayError;
pub use http::HttpTransport;
pub use payments_types::{FailureReason, PaymentResult};
