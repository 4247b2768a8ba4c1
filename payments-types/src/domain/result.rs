//! Normalized outcome of a charge.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Why a charge did not succeed.
///
/// The first three variants are produced by the adapter itself; `Gateway`
/// carries the reason string the gateway reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// The gateway did not answer within the configured deadline.
    Timeout,
    /// Any other transport fault, including a non-2xx status.
    NetworkError,
    /// The gateway answered without a recognizable status or reason.
    Unknown,
    /// Reason reported by the gateway.
    Gateway(String),
}

impl FailureReason {
    pub const TIMEOUT: &'static str = "timeout";
    pub const NETWORK_ERROR: &'static str = "network_error";
    pub const UNKNOWN: &'static str = "unknown";

    /// Returns the reason code as seen by callers.
    pub fn as_str(&self) -> &str {
        match self {
            FailureReason::Timeout => Self::TIMEOUT,
            FailureReason::NetworkError => Self::NETWORK_ERROR,
            FailureReason::Unknown => Self::UNKNOWN,
            FailureReason::Gateway(reason) => reason.as_str(),
        }
    }
}

impl From<String> for FailureReason {
    fn from(reason: String) -> Self {
        match reason.as_str() {
            Self::TIMEOUT => FailureReason::Timeout,
            Self::NETWORK_ERROR => FailureReason::NetworkError,
            Self::UNKNOWN => FailureReason::Unknown,
            _ => FailureReason::Gateway(reason),
        }
    }
}

impl From<&str> for FailureReason {
    fn from(reason: &str) -> Self {
        FailureReason::from(reason.to_string())
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one `charge` call.
///
/// Serialized as `{"success": true, "tx_id": ...}` or
/// `{"success": false, "error": "..."}`. Deserialization rejects a
/// non-null field that belongs to the other variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentResult {
    Success { tx_id: Option<String> },
    Failure { error: FailureReason },
}

impl PaymentResult {
    pub fn success(tx_id: Option<String>) -> Self {
        PaymentResult::Success { tx_id }
    }

    pub fn failure(error: impl Into<FailureReason>) -> Self {
        PaymentResult::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PaymentResult::Success { .. })
    }

    /// Gateway transaction id, if the charge succeeded and one was returned.
    pub fn tx_id(&self) -> Option<&str> {
        match self {
            PaymentResult::Success { tx_id } => tx_id.as_deref(),
            PaymentResult::Failure { .. } => None,
        }
    }

    /// Reason code, if the charge failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            PaymentResult::Success { .. } => None,
            PaymentResult::Failure { error } => Some(error.as_str()),
        }
    }
}

impl Serialize for PaymentResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PaymentResult", 2)?;
        match self {
            PaymentResult::Success { tx_id } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("tx_id", tx_id)?;
            }
            PaymentResult::Failure { error } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error.as_str())?;
            }
        }
        state.end()
    }
}

#[derive(Deserialize)]
struct PaymentResultRepr {
    success: bool,
    #[serde(default)]
    tx_id: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl<'de> Deserialize<'de> for PaymentResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let repr = PaymentResultRepr::deserialize(deserializer)?;
        if repr.success {
            if repr.error.is_some() {
                return Err(D::Error::custom("`error` is not allowed when `success` is true"));
            }
            Ok(PaymentResult::success(repr.tx_id))
        } else {
            if repr.tx_id.is_some() {
                return Err(D::Error::custom("`tx_id` is not allowed when `success` is false"));
            }
            let error = repr.error.ok_or_else(|| D::Error::missing_field("error"))?;
            Ok(PaymentResult::failure(error))
        }
    }
}
