//! Quote Client
//!
//! Fetches the current bid from the quote server and overwrites the
//! quotation file with it. Any failure aborts the run with a non-zero exit.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quotes_client::record::{DEFAULT_OUTPUT_FILE, fetch_and_record, resolve_output_path};
use quotes_client::{DEFAULT_SERVER_URL, QuotesClient};

#[derive(Parser, Debug)]
#[command(name = "quote-client")]
#[command(author, version, about = "Records the current USD/BRL bid to a text file", long_about = None)]
struct Cli {
    /// Quote server endpoint
    #[arg(long, env = "QUOTE_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server_url: String,

    /// Output file name, looked up in the parent directory first
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output: String,
}

impl Cli {
    fn output_path(&self) -> PathBuf {
        resolve_output_path(Path::new("."), &self.output)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let output = cli.output_path();
    let client = QuotesClient::new(&cli.server_url);

    let announcement = fetch_and_record(&client, &output)
        .await
        .inspect_err(|e| tracing::error!("Quotation not recorded: {}", e))
        .with_context(|| format!("failed to record quotation from {}", cli.server_url))?;

    tracing::info!(bid = %announcement.bid, path = %output.display(), "Done");
    Ok(())
}
