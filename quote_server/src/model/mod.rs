//! Domain models for the quote server.
//!
//! - `record` — the persisted `QuoteRecord` and its conversion from an upstream quote.

pub mod record;
