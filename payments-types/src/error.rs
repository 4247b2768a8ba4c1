//! Error types for the gateway adapter.

use crate::domain::FailureReason;

/// Faults raised by a [`ChargeTransport`](crate::ports::ChargeTransport).
///
/// These never reach callers of the adapter; they are folded into a
/// [`FailureReason`] at the adapter boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Request timed out")]
    Timeout,

    #[error("Connection error: {0}")]
    Connect(String),

    #[error("Gateway returned HTTP {status}")]
    Status { status: u16 },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Request error: {0}")]
    Request(String),
}

impl TransportError {
    /// Collapses the fault into the caller-facing reason code.
    ///
    /// Only a timeout is reported distinctly; connection faults, 4xx/5xx
    /// statuses and unreadable bodies all become `network_error`.
    pub fn failure_reason(&self) -> FailureReason {
        match self {
            TransportError::Timeout => FailureReason::Timeout,
            TransportError::Connect(_)
            | TransportError::Status { .. }
            | TransportError::Decode(_)
            | TransportError::Request(_) => FailureReason::NetworkError,
        }
    }
}
