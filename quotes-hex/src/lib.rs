//! # Quotes Hex
//!
//! Application service layer and HTTP adapter for the quote service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (fetch, validate, hand off for storage)
//! - `persistence/` - Background writer that appends quotes to the store
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `P: QuoteProvider` and the writer over
//! `R: QuoteRepository`, so adapters are injected by the binary.

pub mod inbound;
pub mod persistence;
pub mod service;


pub use persistence::{PersistenceHandle, PersistenceWorker, persistence_channel};
pub use service::QuoteService;
