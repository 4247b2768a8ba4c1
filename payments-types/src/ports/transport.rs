//! HTTP transport port.
//!
//! The adapter only needs "POST this JSON with these headers and this
//! timeout, fail on non-2xx, hand back the parsed body". Implementations can
//! be a real HTTP client or an in-memory fake.

use std::time::Duration;

use serde_json::Value;

use crate::domain::ChargeRequest;
use crate::error::TransportError;

/// A fully prepared outbound charge call.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundCharge {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
    pub body: ChargeRequest,
}

impl OutboundCharge {
    /// Looks up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Port trait for sending a charge to the gateway.
#[async_trait::async_trait]
pub trait ChargeTransport: Send + Sync {
    /// Sends the request and returns the decoded JSON body.
    ///
    /// Non-2xx statuses must be reported as [`TransportError::Status`]. An
    /// empty body decodes to `Value::Null`.
    async fn post_json(&self, request: &OutboundCharge) -> Result<Value, TransportError>;
}
