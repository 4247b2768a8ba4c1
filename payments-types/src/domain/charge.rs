//! Outbound charge request.

use serde::Serialize;
use std::fmt;

use super::money::Currency;

/// A single charge sent to the gateway.
///
/// `amount` is forwarded as-is: zero and negative values are not rejected
/// here, the gateway decides what it accepts. `card_token` is opaque and is
/// never logged; `Debug` redacts it.
#[derive(Clone, PartialEq, Serialize)]
pub struct ChargeRequest {
    pub amount: f64,
    pub currency: Currency,
    pub card_token: String,
}

impl ChargeRequest {
    /// Builds a request in the adapter's fixed currency.
    pub fn new(amount: f64, card_token: impl Into<String>) -> Self {
        Self {
            amount,
            currency: Currency::default(),
            card_token: card_token.into(),
        }
    }
}

impl fmt::Debug for ChargeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChargeRequest")
            .field("amount", &self.amount)
            .field("currency", &self.currency)
            .field("card_token", &"<redacted>")
            .finish()
    }
}
