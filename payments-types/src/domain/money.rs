//! Currency accepted by the gateway.

use serde::Serialize;
use std::fmt;

/// Currencies the gateway is charged in.
///
/// The adapter is pinned to a single settlement currency; the enum exists so
/// the wire value is spelled in one place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    RUB,
}

impl Currency {
    /// Returns the ISO 4217 code sent on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::RUB => "RUB",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_wire_value() {
        assert_eq!(serde_json::to_value(Currency::RUB).unwrap(), "RUB");
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::default().to_string(), "RUB");
    }
}
