//! Requesting the current quote from the quote server over HTTP.
use std::path::Path;
use std::time::Duration;

use log::{debug, info};
use quote_common::{QuoteError, QuoteResponse};
use reqwest::Client;

use crate::writer::write_quote;

/// Helper type for calling the quote endpoint.
pub struct QuoteRequester {
    client: Client,
    url: String,
}

impl QuoteRequester {
    /// Creates a requester for `url` whose calls give up after `timeout`.
    pub fn new(url: &str, timeout: Duration) -> Result<Self, QuoteError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QuoteError::Request(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Performs one GET and decodes `{"dolar": "..."}`.
    ///
    /// Transport errors, timeouts and non-2xx statuses are `QuoteError::Request`;
    /// an unexpected body is `QuoteError::Json`.
    pub async fn fetch(&self) -> Result<QuoteResponse, QuoteError> {
        debug!("GET {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| QuoteError::Request(format!("failed to do request: {}", e)))?;

        let status = response.status();
        info!("Response status: {}", status);
        let body = response
            .bytes()
            .await
            .map_err(|e| QuoteError::Request(format!("failed to read response body: {}", e)))?;
        if !status.is_success() {
            return Err(QuoteError::Request(format!(
                "server answered {}: {}",
                status,
                String::from_utf8_lossy(&body).trim()
            )));
        }

        let quote: QuoteResponse = serde_json::from_slice(&body)?;
        info!("Dollar quote: {}", quote.dolar);
        Ok(quote)
    }

    /// Fetches the quote and writes it to `output`.
    ///
    /// The file is only touched after a successful fetch; on any request error the
    /// previous content, or its absence, is left as it was.
    pub async fn save_to(&self, output: &Path) -> Result<QuoteResponse, QuoteError> {
        let quote = self.fetch().await?;
        write_quote(output, &quote)?;
        info!("Dollar quote saved to {}", output.display());
        Ok(quote)
    }
}
