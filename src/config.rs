//! Configuration Module
//!
//! Handles loading and managing CLI configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default cache TTL in seconds (10 minutes).
const DEFAULT_CACHE_TTL_SECS: u64 = 600;

/// Default base URL of the remote API.
const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// CLI configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// How long cached API responses stay fresh, in seconds
    pub cache_ttl_secs: u64,
    /// Base URL of the PokeAPI endpoint
    pub api_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_TTL_SECS` - Cache TTL in seconds (default: 600)
    /// - `POKEDEX_API_URL` - Base API URL (default: `https://pokeapi.co/api/v2`)
    ///
    /// A TTL of zero is rejected and replaced by the default, since the
    /// cache requires a positive duration.
    pub fn from_env() -> Self {
        let cache_ttl_secs = env::var("POKEDEX_CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&secs| secs > 0)
            .unwrap_or(DEFAULT_CACHE_TTL_SECS);

        let api_url = env::var("POKEDEX_API_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            cache_ttl_secs,
            api_url,
        }
    }

    /// Returns the cache TTL as a [`Duration`].
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
