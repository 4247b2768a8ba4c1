//! Payment Gateway Adapter
//!
//! Turns a charge intent into one outbound call and every possible outcome
//! of that call into a [`PaymentResult`].

use tracing::{debug, info, instrument, warn};

use payments_types::{
    ChargeRequest, ChargeTransport, GatewayReply, OutboundCharge, PaymentResult,
};

use crate::config::AdapterConfig;
use crate::error::GatewayError;
use crate::http::HttpTransport;

/// Client-side adapter for the payment gateway.
///
/// Generic over `T: ChargeTransport` - production code uses
/// [`HttpTransport`], tests inject an in-memory transport. The adapter holds
/// no per-call state, so one instance can serve concurrent callers.
pub struct PaymentAdapter<T: ChargeTransport = HttpTransport> {
    config: AdapterConfig,
    transport: T,
}

impl PaymentAdapter<HttpTransport> {
    /// Creates an adapter that talks HTTP to the configured gateway.
    pub fn new(config: AdapterConfig) -> Result<Self, GatewayError> {
        config.validate()?;
        let transport = HttpTransport::new()?;
        Ok(Self { config, transport })
    }
}

impl<T: ChargeTransport> PaymentAdapter<T> {
    /// Creates an adapter over the given transport.
    pub fn with_transport(config: AdapterConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn gateway_url(&self) -> &str {
        self.config.gateway_url()
    }

    /// Returns a reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Charges `amount` to the card behind `card_token`.
    ///
    /// Never fails: timeouts become `timeout`, any other transport fault
    /// (including 4xx/5xx) becomes `network_error`, and replies without a
    /// usable status become `unknown`. Exactly one request is sent.
    #[instrument(skip(self, card_token), fields(gateway = %self.config.gateway_url()))]
    pub async fn charge(&self, amount: f64, card_token: &str) -> PaymentResult {
        let request = self.outbound(ChargeRequest::new(amount, card_token));
        debug!(currency = %request.body.currency, "sending charge");

        let body = match self.transport.post_json(&request).await {
            Ok(body) => body,
            Err(e) => {
                let reason = e.failure_reason();
                warn!(error = %e, %reason, "charge failed in transport");
                return PaymentResult::failure(reason);
            }
        };

        let result = GatewayReply::from_json(&body).into_result();
        match &result {
            PaymentResult::Success { tx_id } => info!(?tx_id, "charge accepted"),
            PaymentResult::Failure { error } => warn!(reason = %error, "charge declined"),
        }
        result
    }

    fn outbound(&self, body: ChargeRequest) -> OutboundCharge {
        OutboundCharge {
            url: self.config.gateway_url().to_string(),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Authorization".to_string(), self.config.authorization()),
            ],
            timeout: self.config.timeout(),
            body,
        }
    }
}
