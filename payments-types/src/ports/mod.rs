//! Port traits (interfaces for adapters).
//!
//! The gateway adapter depends on these traits, not on a concrete HTTP client.

mod transport;

pub use transport::{ChargeTransport, OutboundCharge};
