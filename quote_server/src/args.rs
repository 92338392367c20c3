//! Command-line arguments for the Quote Server.
//!
//! Every flag defaults to the constant in `quote_common::net`, so running the
//! binary without arguments serves `GET /get-dollar-quote` on port 8080.
use clap::Parser;
use quote_common::CurrencyPair;
use quote_common::net::{
    BIND_ADDRESS, DATA_DIR, DB_FILE, INSERT_TIMEOUT_MS, UPSTREAM_BASE_URL, UPSTREAM_TIMEOUT_MS,
};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address the HTTP server binds to.
    #[clap(long, default_value = BIND_ADDRESS)]
    pub bind: String,

    /// Currency pair requested from the upstream API.
    #[clap(long, value_enum, default_value_t = CurrencyPair::UsdBrl)]
    pub pair: CurrencyPair,

    /// Upstream base URL; the pair is appended as the last path segment.
    #[clap(long, default_value = UPSTREAM_BASE_URL)]
    pub upstream_url: String,

    /// Timeout of a single upstream call, in milliseconds.
    #[clap(long, default_value_t = UPSTREAM_TIMEOUT_MS)]
    pub upstream_timeout_ms: u64,

    /// Directory holding the SQLite database. Created if missing.
    #[clap(long, default_value = DATA_DIR)]
    pub data_dir: String,

    /// SQLite file name inside the data directory.
    #[clap(long, default_value = DB_FILE)]
    pub db_file: String,

    /// Timeout of a single insert, in milliseconds.
    #[clap(long, default_value_t = INSERT_TIMEOUT_MS)]
    pub insert_timeout_ms: u64,
}
