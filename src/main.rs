//! Pokedex - an interactive Pokedex CLI
//!
//! Fetches location areas and Pokemon from PokeAPI, memoizing raw response
//! bodies in a shared expiring cache.

mod cache;
mod config;
mod error;
mod models;
mod pokeapi;
mod repl;
mod tasks;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cache::Cache;
use config::Config;
use pokeapi::PokeApiClient;
use repl::Repl;

/// Main entry point for the Pokedex CLI.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the response cache (which starts its reaper)
/// 4. Create the API client sharing the cache
/// 5. Run the interactive loop until `exit` or end of input
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "warn" level so the prompt stays clean; override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "configuration loaded: cache_ttl={}s, api_url={}",
        config.cache_ttl_secs, config.api_url
    );

    // The cache outlives the client; the reaper stops when it drops
    let cache = Arc::new(Cache::new(config.cache_ttl()));
    let client = PokeApiClient::new(Arc::clone(&cache), &config.api_url);

    let mut repl = Repl::new(client);
    repl.run().await?;

    Ok(())
}
