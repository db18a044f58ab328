//! Recording the fetched bid to a text file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use quotes_types::BidAnnouncement;

use crate::{ClientError, QuotesClient};

/// Error type for a fetch-and-record run.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Error writing quotation to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Default output file name.
pub const DEFAULT_OUTPUT_FILE: &str = "quotation.txt";

/// Picks where the quotation file goes.
///
/// `base/../file_name` wins if it exists; otherwise `base/file_name`. Only
/// a NotFound stat result falls through to `base`.
pub fn resolve_output_path(base: &Path, file_name: &str) -> PathBuf {
    let parent = base.join("..").join(file_name);
    match std::fs::metadata(&parent) {
        Err(e) if e.kind() == ErrorKind::NotFound => base.join(file_name),
        _ => parent,
    }
}

/// Line written for `bid`.
pub fn quotation_line(bid: &str) -> String {
    format!("Dólar: {bid}\n")
}

/// Replaces the contents of `path` with the quotation line for `bid`.
pub async fn write_quotation(path: &Path, bid: &str) -> std::io::Result<()> {
    tokio::fs::write(path, quotation_line(bid)).await?;
    tracing::info!(path = %path.display(), "Dollar quotation recorded");
    Ok(())
}

/// Fetches the bid and writes it to `path`.
///
/// The file is only touched after a successful fetch.
pub async fn fetch_and_record(
    client: &QuotesClient,
    path: &Path,
) -> Result<BidAnnouncement, RecordError> {
    let announcement = client.fetch_bid().await?;

    write_quotation(path, &announcement.bid)
        .await
        .map_err(|source| RecordError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(announcement)
}
