//! Pokedex - an interactive Pokedex CLI
//!
//! Fetches location areas and Pokemon from PokeAPI, memoizing raw response
//! bodies in a shared expiring cache.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pokeapi;
pub mod repl;
pub mod tasks;

pub use cache::Cache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use pokeapi::PokeApiClient;
pub use tasks::spawn_reaper;
