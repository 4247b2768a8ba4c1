//! Domain models for the gateway adapter.

pub mod charge;
pub mod money;
pub mod result;

pub use charge::ChargeRequest;
pub use money::Currency;
pub use result::{FailureReason, PaymentResult};
