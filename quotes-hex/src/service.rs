//! Quote Application Service
//!
//! Orchestrates one "get current quote" call through the provider port.
//! Contains NO infrastructure logic.

use quotes_types::{AppError, BidAnnouncement, QuoteProvider};

use crate::persistence::PersistenceHandle;

/// Application service for quote lookups.
///
/// Generic over `P: QuoteProvider` - the upstream adapter is injected at
/// compile time. Storage is handed off to a [`PersistenceHandle`] so the
/// caller's response never waits on the database.
pub struct QuoteService<P: QuoteProvider> {
    provider: P,
    persistence: PersistenceHandle,
}

impl<P: QuoteProvider> QuoteService<P> {
    /// Creates a new quote service.
    pub fn new(provider: P, persistence: PersistenceHandle) -> Self {
        Self {
            provider,
            persistence,
        }
    }

    /// Fetches the current quote and returns its bid.
    ///
    /// A quote is queued for storage only when it carries a bid; failed
    /// fetches and bid-less quotes leave the store untouched.
    pub async fn current_bid(&self) -> Result<BidAnnouncement, AppError> {
        let quote = self.provider.fetch_quote().await.map_err(|e| {
            tracing::error!(error = %e, "Error fetching quote");
            AppError::from(e)
        })?;

        if !quote.has_bid() {
            tracing::warn!("Provider response has no bid");
            return Err(AppError::BadRequest("'bid' field not found".into()));
        }

        let announcement = BidAnnouncement::new(quote.bid.clone());
        self.persistence.enqueue(quote);

        Ok(announcement)
    }
}
