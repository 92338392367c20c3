//! Quote Server — an HTTP service that fetches the USD-BRL quote from the upstream
//! currency API, appends it to a local SQLite history and returns the bid price.
//!
//! Usage example (CLI):
//! ```bash
//! quote_server --bind 0.0.0.0:8080 --data-dir ./data --upstream-timeout-ms 3000
//! ```
//!
//! The store is opened and migrated once, before the listener accepts connections,
//! and lives for the whole process. Ctrl+C stops accepting requests and lets
//! in-flight ones finish.
#![warn(missing_docs)]
mod args;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::args::Args;
use clap::Parser;
use log::{error, info};
use quote_common::QuoteError;
use quote_common::Result;
use quote_common::net::QUOTE_ENDPOINT;
use quote_server::{AppState, AwesomeApiFetcher, QuoteStore, create_router};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let store = QuoteStore::open(
        Path::new(&args.data_dir),
        &args.db_file,
        Duration::from_millis(args.insert_timeout_ms),
    )
    .await
    .inspect_err(|e| error!("Failed to initialize quote store: {}", e))?;
    info!("Quotes stored so far: {}", store.count().await?);

    let fetcher = AwesomeApiFetcher::new(
        &args.upstream_url,
        Duration::from_millis(args.upstream_timeout_ms),
    )?;
    info!("Upstream: {}", fetcher.url_for(args.pair));

    let state = Arc::new(AppState::new(Arc::new(fetcher), store, args.pair));
    let app = create_router(state);

    let listener = TcpListener::bind(&args.bind)
        .await
        .inspect_err(|e| error!("Failed to bind {}: {}", args.bind, e))?;
    info!(
        "Quote server listening on {} (GET {})",
        listener.local_addr()?,
        QUOTE_ENDPOINT
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Quote server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received. Shutting down server..."),
        Err(e) => {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
