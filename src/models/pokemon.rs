//! Pokemon records
//!
//! The Pokemon detail record and its nested stat and type entries.

use serde::{Deserialize, Deserializer};

use super::NamedResource;

/// A Pokemon's base stat entry.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    /// Base value of the stat
    pub base_stat: u32,
    /// The stat this value belongs to (hp, attack, ...)
    pub stat: NamedResource,
}

/// A Pokemon's type entry.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    /// The type itself (grass, poison, ...)
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Detail record for a single Pokemon.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    /// Pokemon name
    pub name: String,
    /// Base experience granted for defeating this Pokemon.
    /// Null or absent upstream for some Pokemon; defaults to 0.
    #[serde(default, deserialize_with = "null_to_zero")]
    pub base_experience: u32,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    /// Base stats
    pub stats: Vec<PokemonStat>,
    /// Types
    pub types: Vec<PokemonType>,
}

/// Decodes a nullable number as 0 when null.
fn null_to_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}
