//! Quote provider port.
//!
//! Implementations can be HTTP clients, canned providers for tests, etc.

use crate::domain::Quote;
use crate::error::FetchError;

/// Port trait for the upstream quote source.
#[async_trait::async_trait]
pub trait QuoteProvider: Send + Sync + 'static {
    /// Fetches the current USD/BRL quote.
    ///
    /// Implementations own their deadline; exceeding it yields
    /// [`FetchError::Timeout`].
    async fn fetch_quote(&self) -> Result<Quote, FetchError>;
}
