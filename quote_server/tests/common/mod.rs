//! Fixtures shared by the integration suites.
#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use quote_common::{CurrencyPair, QuoteError, UpstreamQuote};
use quote_server::QuoteSource;
use tokio::net::TcpListener;
use uuid::Uuid;

pub const FIXTURE: &str = r#"{"USDBRL":{"bid":"5.32","high":"5.40","low":"5.20","pctChange":"0.5","code":"USD","codein":"BRL","name":"Dollar"}}"#;

pub const INSERT_TIMEOUT: Duration = Duration::from_secs(5);

pub fn fixture_quote() -> UpstreamQuote {
    UpstreamQuote::from_body(FIXTURE.as_bytes(), CurrencyPair::UsdBrl).unwrap()
}

/// Always answers with the same quote.
pub struct StaticSource(pub UpstreamQuote);

#[async_trait]
impl QuoteSource for StaticSource {
    async fn fetch(&self, _pair: CurrencyPair) -> Result<UpstreamQuote, QuoteError> {
        Ok(self.0.clone())
    }
}

/// Always fails like an unreachable upstream.
pub struct FailingSource;

#[async_trait]
impl QuoteSource for FailingSource {
    async fn fetch(&self, _pair: CurrencyPair) -> Result<UpstreamQuote, QuoteError> {
        Err(QuoteError::Fetch("connection refused".to_string()))
    }
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Fresh, not yet existing directory under the system temp dir.
pub fn temp_data_dir() -> PathBuf {
    std::env::temp_dir()
        .join(format!("quote_server_test_{}", Uuid::new_v4()))
        .join("data")
}
