//! Fetching quotes from the upstream currency API.
//!
//! The handler only sees the [`QuoteSource`] trait; [`AwesomeApiFetcher`] is the
//! production implementation backed by `reqwest`.
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use quote_common::{CurrencyPair, QuoteError, UpstreamQuote};
use reqwest::Client;

/// Anything that can produce the latest upstream quote for a pair.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch the latest quote for `pair`. A single attempt, no retries.
    async fn fetch(&self, pair: CurrencyPair) -> Result<UpstreamQuote, QuoteError>;
}

/// Client for `economia.awesomeapi.com.br`.
#[derive(Clone)]
pub struct AwesomeApiFetcher {
    client: Client,
    base_url: String,
}

impl AwesomeApiFetcher {
    /// Creates a fetcher for `base_url` whose calls are bounded by `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, QuoteError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QuoteError::Fetch(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the latest quote for `pair`, e.g. `.../json/last/USD-BRL`.
    pub fn url_for(&self, pair: CurrencyPair) -> String {
        format!("{}/{}", self.base_url, pair)
    }

    async fn request(&self, url: &str, pair: CurrencyPair) -> Result<UpstreamQuote, QuoteError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| QuoteError::Fetch(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Fetch(format!("upstream answered {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| QuoteError::Fetch(format!("failed to read upstream body: {}", e)))?;
        UpstreamQuote::from_body(&body, pair)
    }
}

#[async_trait]
impl QuoteSource for AwesomeApiFetcher {
    async fn fetch(&self, pair: CurrencyPair) -> Result<UpstreamQuote, QuoteError> {
        let url = self.url_for(pair);
        debug!("Requesting upstream quote: {}", url);

        self.request(&url, pair).await
    }
}
