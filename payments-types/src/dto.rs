//! Gateway response body and its normalization into a [`PaymentResult`].

use serde_json::Value;

use crate::domain::{FailureReason, PaymentResult};

/// The status value the gateway uses for an accepted charge.
pub const STATUS_SUCCESS: &str = "success";

/// What the `status` field of a gateway reply says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyStatus {
    /// No `status` key (or the body is not an object at all).
    Missing,
    Success,
    /// `status` present with any other value, including `null`.
    Other,
}

/// Parsed view over a gateway reply body.
///
/// Bodies are read leniently: fields of the wrong JSON type are treated as
/// absent instead of failing the whole reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayReply {
    pub status: ReplyStatus,
    pub tx_id: Option<String>,
    pub reason: Option<String>,
}

impl GatewayReply {
    pub fn from_json(body: &Value) -> Self {
        let Some(fields) = body.as_object() else {
            return Self {
                status: ReplyStatus::Missing,
                tx_id: None,
                reason: None,
            };
        };

        let status = match fields.get("status") {
            None => ReplyStatus::Missing,
            Some(Value::String(s)) if s == STATUS_SUCCESS => ReplyStatus::Success,
            Some(_) => ReplyStatus::Other,
        };
        let text = |key: &str| fields.get(key).and_then(Value::as_str).map(String::from);

        Self {
            status,
            tx_id: text("tx_id"),
            reason: text("reason"),
        }
    }

    /// Maps the reply onto the caller-facing result.
    pub fn into_result(self) -> PaymentResult {
        match self.status {
            ReplyStatus::Success => PaymentResult::success(self.tx_id),
            ReplyStatus::Other => PaymentResult::failure(
                self.reason
                    .map(FailureReason::from)
                    .unwrap_or(FailureReason::Unknown),
            ),
            ReplyStatus::Missing => PaymentResult::failure(FailureReason::Unknown),
        }
    }
}
