//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;

use exchange_rates::DEFAULT_API_URL;

const DEFAULT_DB_FILE: &str = "cotacoes.db";
const DEFAULT_PORT: u16 = 8080;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub api_url: String,
    pub db_file: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Unset and empty values both fall back to the defaults.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid PORT {raw:?}: {e}"))?,
            None => DEFAULT_PORT,
        };

        let api_url = get("API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let db_file = get("DB_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE));

        Ok(Self {
            port,
            api_url,
            db_file,
        })
    }
}
