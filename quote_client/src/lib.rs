//! Client side of the quote service.
//!
//! - `requester` — calls the quote server under a short timeout.
//! - `writer` — stores the received bid in a text file.
#![warn(missing_docs)]
pub mod requester;
pub mod writer;

pub use requester::QuoteRequester;
pub use writer::write_quote;
