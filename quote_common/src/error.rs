//! Error types shared between client and server.
//!
//! `QuoteError` covers every failure of the fetch, map, persist and respond
//! pipeline, plus the I/O and JSON failures of the client. The server turns any
//! of them into a `500` whose body is the `Display` text.
use std::io;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The upstream API was unreachable, timed out, answered non-2xx, or sent an
    /// undecodable body.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// A numeric upstream field is not valid decimal text.
    #[error("Parse error: field `{field}` has invalid value {value:?}: {reason}")]
    Parse {
        /// Upstream JSON name of the offending field.
        field: &'static str,
        /// Raw text received.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// Directory creation, database open, schema creation or insert failure.
    #[error("Store error: {0}")]
    Store(String),

    /// The response payload could not be serialized.
    #[error("Encode error: {0}")]
    Encode(String),

    /// Call to the quote server failed (transport, timeout or non-2xx status).
    #[error("Request error: {0}")]
    Request(String),

    /// I/O error originating from files or sockets.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuoteError {
    /// Builds a `Parse` error for `field`.
    pub fn parse(field: &'static str, value: &str, reason: impl ToString) -> Self {
        QuoteError::Parse {
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
