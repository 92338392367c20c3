//! JSON payloads shared by the server and the client.
//!
//! - [`UpstreamQuote`] is one entry of the upstream API body. Every numeric value
//!   arrives as a string; converting them is the server's job.
//! - [`QuoteResponse`] is what the server returns and the client reads back.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::pairs::CurrencyPair;

/// Quote for one currency pair as sent by the upstream API.
///
/// A missing key decodes as an empty string, so an absent numeric field is
/// reported by the record mapper under its own name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamQuote {
    /// Ask price.
    pub ask: String,
    /// Bid price, the value served as "the dollar quote".
    pub bid: String,
    /// Base currency code (e.g. `USD`).
    pub code: String,
    /// Quote currency code (e.g. `BRL`).
    pub codein: String,
    /// Upstream creation date, `YYYY-MM-DD hh:mm:ss`.
    pub create_date: String,
    /// Day high.
    pub high: String,
    /// Day low.
    pub low: String,
    /// Display name (e.g. `Dólar Americano/Real Brasileiro`).
    pub name: String,
    /// Percent change.
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    /// Unix timestamp in seconds.
    pub timestamp: String,
}

impl UpstreamQuote {
    /// Decodes an upstream body and extracts the entry for `pair`.
    ///
    /// Malformed JSON and a body without the pair's key are both fetch failures.
    pub fn from_body(body: &[u8], pair: CurrencyPair) -> Result<Self, QuoteError> {
        let mut quotes: HashMap<String, UpstreamQuote> = serde_json::from_slice(body)
            .map_err(|e| QuoteError::Fetch(format!("malformed upstream body: {}", e)))?;
        let key = pair.key();
        quotes
            .remove(&key)
            .ok_or_else(|| QuoteError::Fetch(format!("upstream body has no `{}` entry", key)))
    }
}

/// Payload returned by the quote server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Bid price exactly as received from upstream.
    pub dolar: String,
}

impl From<&UpstreamQuote> for QuoteResponse {
    fn from(quote: &UpstreamQuote) -> Self {
        QuoteResponse {
            dolar: quote.bid.clone(),
        }
    }
}
