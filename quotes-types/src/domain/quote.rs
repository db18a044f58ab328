//! Quote domain model.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned by the store when a quote row is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteRecordId(i64);

impl QuoteRecordId {
    /// Wraps a raw row id.
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw row id.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for QuoteRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One USD/BRL quote as reported by the upstream provider.
///
/// Every field is kept as the text the provider sent. Numeric-looking
/// values are never parsed or validated before storage, and fields absent
/// from the payload or sent as `null` decode to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub codein: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub high: String,
    #[serde(deserialize_with = "null_as_default")]
    pub low: String,
    #[serde(rename = "varBid", deserialize_with = "null_as_default")]
    pub var_bid: String,
    #[serde(rename = "pctChange", deserialize_with = "null_as_default")]
    pub pct_change: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ask: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(deserialize_with = "null_as_default")]
    pub create_date: String,
}

/// Decodes `null` as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Quote {
    /// Whether the provider reported a bid at all.
    pub fn has_bid(&self) -> bool {
        !self.bid.is_empty()
    }
}

/// A quote row read back from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    pub id: QuoteRecordId,
    pub quote: Quote,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_uses_provider_field_names() {
        let json = r#"{
            "code": "USD",
            "codein": "BRL",
            "name": "Dólar Americano/Real Brasileiro",
            "high": "5.0512",
            "low": "5.0101",
            "varBid": "0.0123",
            "pctChange": "0.24",
            "bid": "5.0421",
            "ask": "5.0431",
            "timestamp": "1700000000",
            "create_date": "2023-11-14 19:13:20"
        }"#;

        let quote: Quote = serde_json::from_str(json).unwrap();

        assert_eq!(quote.var_bid, "0.0123");
        assert_eq!(quote.pct_change, "0.24");
        assert_eq!(quote.create_date, "2023-11-14 19:13:20");
        assert!(quote.has_bid());
    }

    #[test]
    fn test_missing_fields_decode_empty() {
        let quote: Quote = serde_json::from_str(r#"{"code": "USD"}"#).unwrap();

        assert_eq!(quote.code, "USD");
        assert_eq!(quote.bid, "");
        assert!(!quote.has_bid());
    }

    #[test]
    fn test_null_fields_decode_empty() {
        let quote: Quote =
            serde_json::from_str(r#"{"code": "USD", "bid": null, "ask": null}"#).unwrap();

        assert_eq!(quote.code, "USD");
        assert_eq!(quote.bid, "");
        assert_eq!(quote.ask, "");
        assert!(!quote.has_bid());
    }

    #[test]
    fn test_record_id_display() {
        assert_eq!(QuoteRecordId::from_i64(42).to_string(), "42");
    }
}
