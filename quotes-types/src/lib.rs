//! # Quotes Types
//!
//! Domain types and port traits for the USD/BRL quote service.
//! This crate has ZERO external IO dependencies - only data structures
//! and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Pure domain types (Quote, QuoteRecord)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Wire shapes for the upstream provider and the `/cotacao` endpoint
//! - `error/` - Fetch, repository and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Quote, QuoteRecord, QuoteRecordId};
pub use dto::*;
pub use error::{AppError, FetchError, RepoError};
pub use ports::{QuoteProvider, QuoteRepository};
