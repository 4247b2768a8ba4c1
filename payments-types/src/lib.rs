//! # Payments Types
//!
//! Domain types and port traits for the payment gateway adapter.
//! This crate has no HTTP or runtime dependencies - only data structures,
//! the response normalization rules, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Charge request, currency, and the normalized result
//! - `ports/` - Transport trait that HTTP adapters implement
//! - `dto` - Gateway reply body and its mapping to a result
//! - `error` - Transport fault taxonomy

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{ChargeRequest, Currency, FailureReason, PaymentResult};
pub use dto::{GatewayReply, ReplyStatus};
pub use error::TransportError;
pub use ports::{ChargeTransport, OutboundCharge};
