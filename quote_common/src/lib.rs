//!
//! Common types and utilities shared by the quote server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `pairs` — currency pairs understood by the upstream API.
//! - `quote` — JSON payloads exchanged with the upstream API and with the client.
//! - `net` — endpoints, ports, file paths and timeouts.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod pairs;
pub mod quote;
pub mod result;

pub use error::QuoteError;
pub use pairs::CurrencyPair;
pub use quote::{QuoteResponse, UpstreamQuote};
pub use result::Result;
