//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use quotes_types::{Quote, QuoteRecord, QuoteRecordId, QuoteRepository, RepoError};

use crate::types::DbQuote;

const CREATE_USDBRL: &str = include_str!("../migrations/0001_create_usdbrl.sql");

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
///
/// Holds a single connection, so concurrent inserts are serialized by the
/// driver.
#[derive(Clone)]
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Connects using a sqlx URL (e.g. `sqlite::memory:`) and creates the table.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        Self::connect(options).await
    }

    /// Opens the database file at `path`, creating it and its parent
    /// directory when missing.
    pub async fn open_file(path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        Self::connect(options).await
    }

    async fn connect(options: SqliteConnectOptions) -> anyhow::Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let repo = Self { pool };
        repo.create_schema().await?;
        Ok(repo)
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the `USDBRL` table if it does not exist.
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        sqlx::query(CREATE_USDBRL)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl QuoteRepository for SqliteRepo {
    async fn insert_quote(&self, quote: &Quote) -> Result<QuoteRecordId, RepoError> {
        let result = sqlx::query(
            r#"INSERT INTO USDBRL (
                code, codein, name, high, low, varBid, pctChange, bid, ask, timestamp, create_date
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&quote.code)
        .bind(&quote.codein)
        .bind(&quote.name)
        .bind(&quote.high)
        .bind(&quote.low)
        .bind(&quote.var_bid)
        .bind(&quote.pct_change)
        .bind(&quote.bid)
        .bind(&quote.ask)
        .bind(&quote.timestamp)
        .bind(&quote.create_date)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        let id = QuoteRecordId::from_i64(result.last_insert_rowid());
        tracing::debug!(quote_id = %id, bid = %quote.bid, "Stored quote");
        Ok(id)
    }

    async fn count_quotes(&self) -> Result<i64, RepoError> {
        let (count,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM USDBRL"#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(count)
    }

    async fn list_quotes(&self) -> Result<Vec<QuoteRecord>, RepoError> {
        let rows: Vec<DbQuote> = sqlx::query_as(
            r#"SELECT
                id,
                CAST(code AS TEXT) AS code,
                CAST(codein AS TEXT) AS codein,
                CAST(name AS TEXT) AS name,
                CAST(high AS TEXT) AS high,
                CAST(low AS TEXT) AS low,
                CAST(varBid AS TEXT) AS var_bid,
                CAST(pctChange AS TEXT) AS pct_change,
                CAST(bid AS TEXT) AS bid,
                CAST(ask AS TEXT) AS ask,
                CAST(timestamp AS TEXT) AS timestamp,
                CAST(create_date AS TEXT) AS create_date
            FROM USDBRL ORDER BY id ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(DbQuote::into_domain).collect())
    }
}
