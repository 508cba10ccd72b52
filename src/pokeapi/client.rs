//! PokeAPI HTTP client
//!
//! Fetches location areas and Pokemon from PokeAPI. Every fetch goes
//! through the cache: the raw response body is looked up under the exact
//! request URL before the network is touched, and stored there after a
//! successful fetch. Concurrent fetches of the same missing key are not
//! coalesced; each miss issues its own request.

use std::sync::Arc;

use reqwest::Client;
use tracing::debug;

use crate::cache::Cache;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

// == PokeAPI Client ==
/// Client for fetching Pokedex data from PokeAPI.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    /// Underlying HTTP client
    http: Client,
    /// Shared response cache, keyed by request URL
    cache: Arc<Cache>,
    /// Base URL of the API, without a trailing slash
    base_url: String,
}

impl PokeApiClient {
    // == Constructor ==
    /// Creates a new client sharing the given response cache.
    ///
    /// # Arguments
    /// * `cache` - Shared expiring cache for raw response bodies
    /// * `base_url` - API base URL, e.g. `https://pokeapi.co/api/v2`
    pub fn new(cache: Arc<Cache>, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            cache,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates a client with a custom HTTP client.
    #[allow(dead_code)]
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    // == URLs ==
    /// URL of the first location-area listing page.
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    /// URL of a single location area by name.
    fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    /// URL of a single Pokemon by name.
    fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    // == Fetch Bytes ==
    /// Returns the response body for `url`, from cache when fresh.
    ///
    /// On a miss the body is fetched over HTTP, validated (success status,
    /// non-empty body), and stored in the cache before being returned.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url).await {
            debug!(url, "cache hit");
            return Ok(body);
        }

        debug!(url, "cache miss, fetching");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::UnexpectedStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?.to_vec();
        if body.is_empty() {
            return Err(PokedexError::EmptyResponse(url.to_string()));
        }

        self.cache.add(url, body.clone()).await;
        Ok(body)
    }

    // == Location Areas ==
    /// Fetches one page of the location-area listing.
    ///
    /// `url` is a full page URL: [`location_areas_url`](Self::location_areas_url)
    /// for the first page, or a `next`/`previous` link from a previously
    /// fetched page, so pagination keys stay cache-exact.
    pub async fn location_areas(&self, url: &str) -> Result<LocationAreaPage> {
        let body = self.fetch_bytes(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Location Area Detail ==
    /// Fetches a single location area by name.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let body = self.fetch_bytes(&self.location_area_url(name)).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Pokemon ==
    /// Fetches a single Pokemon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let body = self.fetch_bytes(&self.pokemon_url(name)).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
