//! AwesomeAPI quote provider.
//!
//! Implements the `QuoteProvider` port over plain HTTP. Every call is bounded
//! by a short deadline; a slow provider becomes a failed fetch, never a retry.
//!
//! # Example
//! ```no_run
//! use exchange_rates::{AwesomeApiProvider, DEFAULT_API_URL};
//! use quotes_types::QuoteProvider;
//!
//! # async fn run() -> Result<(), quotes_types::FetchError> {
//! let provider = AwesomeApiProvider::new(DEFAULT_API_URL)?;
//! let quote = provider.fetch_quote().await?;
//! println!("USD/BRL bid: {}", quote.bid);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use quotes_types::{FetchError, Quote, QuoteProvider, UpstreamQuoteDocument};

/// Public AwesomeAPI endpoint for the latest USD-BRL quote.
pub const DEFAULT_API_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

/// Deadline for a single provider call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(200);

/// HTTP adapter for the upstream quote provider.
pub struct AwesomeApiProvider {
    api_url: String,
    http: Client,
}

impl AwesomeApiProvider {
    /// Creates a provider for `api_url` with the default deadline.
    pub fn new(api_url: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_timeout(api_url, DEFAULT_TIMEOUT)
    }

    /// Creates a provider with a custom per-call deadline.
    pub fn with_timeout(api_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self {
            api_url: api_url.into(),
            http,
        })
    }

    /// Returns the configured endpoint.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

fn classify(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else if err.is_builder() {
        FetchError::Request(err.to_string())
    } else {
        FetchError::Transport(err.to_string())
    }
}

#[async_trait]
impl QuoteProvider for AwesomeApiProvider {
    #[tracing::instrument(skip(self), fields(url = %self.api_url))]
    async fn fetch_quote(&self) -> Result<Quote, FetchError> {
        let resp = self.http.get(&self.api_url).send().await.map_err(classify)?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        // Body read shares the same deadline as the request.
        let body = resp.bytes().await.map_err(classify)?;
        tracing::debug!(bytes = body.len(), "Received provider response");

        let doc: UpstreamQuoteDocument =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(doc.usdbrl)
    }
}
