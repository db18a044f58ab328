//! Repository port trait.
//!
//! The store is an append log: rows are inserted, counted and listed,
//! never updated or deleted.

use crate::domain::{Quote, QuoteRecord, QuoteRecordId};
use crate::error::RepoError;

#[async_trait::async_trait]
pub trait QuoteRepository: Send + Sync + 'static {
    /// Appends one quote row and returns its assigned id.
    async fn insert_quote(&self, quote: &Quote) -> Result<QuoteRecordId, RepoError>;

    /// Number of rows stored so far.
    async fn count_quotes(&self) -> Result<i64, RepoError>;

    /// All stored rows, oldest first.
    async fn list_quotes(&self) -> Result<Vec<QuoteRecord>, RepoError>;
}
