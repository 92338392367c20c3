//! Command-line arguments for the Quote Client.
//!
//! All flags are optional; the defaults call the local server and write `cotacao.txt`.
use clap::Parser;
use quote_common::net::{CLIENT_TIMEOUT_MS, OUTPUT_FILE};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Full URL of the quote endpoint. Defaults to the local server.
    #[clap(long)]
    pub url: Option<String>,

    /// Request timeout in milliseconds.
    #[clap(long, default_value_t = CLIENT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// File the quote is written to; overwritten on success.
    #[clap(long, default_value = OUTPUT_FILE)]
    pub output: String,
}
