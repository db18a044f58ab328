//! # Quotes Client SDK
//!
//! A typed Rust client for the quote server, plus the helpers that record
//! the fetched bid to a local text file.

pub mod record;

use std::time::Duration;

use quotes_types::BidAnnouncement;
use reqwest::{Client, StatusCode};

/// Default quote server endpoint.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080/cotacao";

/// Deadline for a single call to the quote server.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(300);

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid request: {0}")]
    Request(String),

    #[error("Server response time exceeded")]
    Timeout,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_builder() {
            ClientError::Request(err.to_string())
        } else {
            ClientError::Http(err)
        }
    }
}

/// Quote server client.
pub struct QuotesClient {
    url: String,
    timeout: Duration,
    http: Client,
}

impl QuotesClient {
    /// Creates a new client for the `/cotacao` endpoint at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
            http: Client::new(),
        }
    }

    /// Overrides the per-call deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetches the current bid from the server.
    ///
    /// A deadline overrun is reported as [`ClientError::Timeout`] so callers
    /// can tell it apart from other transport failures.
    pub async fn fetch_bid(&self) -> Result<BidAnnouncement, ClientError> {
        let resp = self
            .http
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                let err = ClientError::from_send(e);
                match &err {
                    ClientError::Timeout => {
                        tracing::error!("Quote server response time exceeded")
                    }
                    other => tracing::error!("Error fetching quote: {}", other),
                }
                err
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(ClientError::from_send)?;

        if status != StatusCode::OK {
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            tracing::error!(status = status.as_u16(), %message, "Quote server rejected request");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
