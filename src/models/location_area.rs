//! Location area records
//!
//! Structures for the paginated location-area listing and the per-area
//! detail, mirroring the remote JSON field names.

use serde::Deserialize;

/// A named API resource: a name plus the URL of its full record.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NamedResource {
    /// Resource name
    pub name: String,
    /// URL of the full resource
    pub url: String,
}

/// One page of the location-area listing.
///
/// `next` and `previous` carry the URLs of the adjacent pages, or null at
/// either end of the listing.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas
    pub count: u64,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// The location areas on this page
    pub results: Vec<NamedResource>,
}

/// A Pokemon encounter within a location area.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    /// The Pokemon that can be encountered
    pub pokemon: NamedResource,
}

/// Detail record for a single location area.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    /// Area name
    pub name: String,
    /// Pokemon that can be encountered in this area
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}
