//! Fire-and-forget quote persistence.
//!
//! Request handlers push quotes onto an unbounded channel; a single
//! [`PersistenceWorker`] drains it into the repository. Failures are logged
//! and the quote is dropped. There is no retry and no backpressure.

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use quotes_types::{Quote, QuoteRepository};

/// Creates a connected handle/worker pair over `repo`.
pub fn persistence_channel<R: QuoteRepository>(repo: R) -> (PersistenceHandle, PersistenceWorker<R>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (PersistenceHandle { tx }, PersistenceWorker { repo, rx })
}

/// Sending side, held by the service.
#[derive(Clone)]
pub struct PersistenceHandle {
    tx: mpsc::UnboundedSender<Quote>,
}

impl PersistenceHandle {
    /// Queues `quote` for storage. Never blocks and never fails the caller.
    pub fn enqueue(&self, quote: Quote) {
        if let Err(mpsc::error::SendError(quote)) = self.tx.send(quote) {
            error!(bid = %quote.bid, "Persistence worker stopped, dropping quote");
        }
    }
}

/// Receiving side. Owns the repository.
pub struct PersistenceWorker<R: QuoteRepository> {
    repo: R,
    rx: mpsc::UnboundedReceiver<Quote>,
}

impl<R: QuoteRepository> PersistenceWorker<R> {
    /// Stores queued quotes until every [`PersistenceHandle`] is dropped.
    #[instrument(skip(self))]
    pub async fn run(mut self) {
        info!("Starting quote persistence worker");
        while let Some(quote) = self.rx.recv().await {
            self.store(quote).await;
        }
        info!("Quote persistence worker stopped");
    }

    async fn store(&self, quote: Quote) {
        match self.repo.insert_quote(&quote).await {
            Ok(id) => debug!(quote_id = %id, "Quote stored"),
            Err(e) => error!(error = %e, bid = %quote.bid, "Error storing quote"),
        }
    }
}
