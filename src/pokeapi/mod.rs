//! PokeAPI client module
//!
//! HTTP client for the remote PokeAPI, memoizing raw response bodies in the
//! shared expiring cache so repeated identical requests skip the network.

mod client;

pub use client::PokeApiClient;
