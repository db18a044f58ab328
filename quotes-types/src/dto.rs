//! Data Transfer Objects (DTOs) for the upstream provider and `/cotacao`.

use serde::{Deserialize, Serialize};

use crate::domain::Quote;
use crate::domain::quote::null_as_default;

// ─────────────────────────────────────────────────────────────────────────────
// Upstream provider
// ─────────────────────────────────────────────────────────────────────────────

/// Document returned by the upstream provider for the USD-BRL pair.
///
/// A payload without a `USDBRL` object, or with `"USDBRL": null`, decodes
/// to an empty quote, which the service later rejects for its missing bid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamQuoteDocument {
    #[serde(rename = "USDBRL", default, deserialize_with = "null_as_default")]
    pub usdbrl: Quote,
}

// ─────────────────────────────────────────────────────────────────────────────
// Quote server response
// ─────────────────────────────────────────────────────────────────────────────

/// Bid projection served by `GET /cotacao`.
///
/// Written as `{"Dolar": "<bid>"}`. Reading accepts `Dolar` or `bid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidAnnouncement {
    #[serde(rename = "Dolar", alias = "bid")]
    pub bid: String,
}

impl BidAnnouncement {
    pub fn new(bid: impl Into<String>) -> Self {
        Self { bid: bid.into() }
    }
}
