//! reqwest-backed [`ChargeTransport`].

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use payments_types::{ChargeTransport, OutboundCharge, TransportError};

/// Sends charges over HTTP with a pooled reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Creates a transport with a fresh client.
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: Client::builder().build()?,
        })
    }
}

#[async_trait]
impl ChargeTransport for HttpTransport {
    async fn post_json(&self, request: &OutboundCharge) -> Result<Value, TransportError> {
        let mut req = self.http.post(&request.url).timeout(request.timeout);
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        // Headers go first so `json` does not add a second Content-Type.
        let req = req.json(&request.body);

        let resp = req.send().await.map_err(classify)?;
        let resp = resp.error_for_status().map_err(classify)?;
        let body = resp.text().await.map_err(classify)?;

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

fn classify(error: reqwest::Error) -> TransportError {
    match error {
        error if error.is_timeout() => TransportError::Timeout,
        error if error.is_status() => TransportError::Status {
            status: error.status().map(|s| s.as_u16()).unwrap_or_default(),
        },
        error if error.is_connect() => TransportError::Connect(error.to_string()),
        error if error.is_decode() || error.is_body() => TransportError::Decode(error.to_string()),
        error => TransportError::Request(error.to_string()),
    }
}
