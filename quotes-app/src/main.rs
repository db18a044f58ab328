//! # Quote Server
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Open the quote store
//! - Start the background persistence worker
//! - Start the HTTP server

mod config;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exchange_rates::AwesomeApiProvider;
use quotes_hex::{QuoteService, inbound::HttpServer, persistence_channel};
use quotes_repo::build_repo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,quotes_app=debug,quotes_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env()?;

    tracing::info!("Starting quote server on port {}", config.port);
    tracing::info!("Using provider: {}", config.api_url);
    tracing::info!("Using database: {}", config.db_file.display());

    let repo = build_repo(&config.db_file)
        .await
        .with_context(|| format!("failed to open database {}", config.db_file.display()))?;

    let (persistence, worker) = persistence_channel(repo);
    let worker = tokio::spawn(worker.run());

    let provider = AwesomeApiProvider::new(config.api_url)?;
    let server = HttpServer::new(QuoteService::new(provider, persistence));
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // The server owned the last handle; let queued writes finish.
    if let Err(e) = worker.await {
        tracing::error!("Persistence worker panicked: {}", e);
    }

    Ok(())
}
