//! Output file written by the client.
use std::fs;
use std::path::Path;

use quote_common::{QuoteError, QuoteResponse};

/// Replaces the contents of `path` with `Dólar: <bid>\n`.
pub fn write_quote(path: &Path, quote: &QuoteResponse) -> Result<(), QuoteError> {
    fs::write(path, format!("Dólar: {}\n", quote.dolar))?;
    Ok(())
}
