//! Quote Client — asks the quote server for the current dollar quote and writes
//! it to a text file as `Dólar: <bid>`.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --url http://localhost:8080/get-dollar-quote --output ./cotacao.txt
//! ```
//!
//! Any failure (timeout, transport error, non-2xx, unexpected body) is logged and
//! the output file is left untouched.
#![warn(missing_docs)]
mod args;

use std::path::PathBuf;
use std::time::Duration;

use crate::args::Args;
use clap::Parser;
use log::error;
use quote_client::QuoteRequester;
use quote_common::net::quote_url;

#[tokio::main]
async fn main() {
    init_logger();
    let args = Args::parse();
    let url = args.url.unwrap_or_else(|| quote_url("localhost"));
    let output = normalize_path(&args.output);

    let requester = match QuoteRequester::new(&url, Duration::from_millis(args.timeout_ms)) {
        Ok(requester) => requester,
        Err(e) => {
            error!("Failed to create requester: {}", e);
            return;
        }
    };

    if let Err(e) = requester.save_to(&output).await {
        error!("Failed to save dollar quote: {}", e);
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
