//! # Quotes Repository
//!
//! SQLite adapter implementing the `QuoteRepository` port.
//! The `USDBRL` table is created on open if it does not exist yet.

use std::path::Path;

pub mod sqlite;

mod types;


pub use sqlite::SqliteRepo;

/// Opens (creating if needed) the quote database at `db_file`.
///
/// # Examples
///
/// ```ignore
/// let repo = build_repo(Path::new("cotacoes.db")).await?;
/// ```
pub async fn build_repo(db_file: &Path) -> anyhow::Result<SqliteRepo> {
    SqliteRepo::open_file(db_file).await
}
