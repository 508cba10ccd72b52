//! Error types for the Pokedex CLI
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex CLI.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// HTTP request failed
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to decode a JSON response body
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The remote API answered with a non-success status
    #[error("unexpected status {status} fetching {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The remote API answered with an empty body
    #[error("empty response body for {0}")]
    EmptyResponse(String),

    /// A command was invoked without its required argument
    #[error("please specify a {0}")]
    MissingArgument(&'static str),

    /// `inspect` was asked about a Pokemon that has not been caught
    #[error("you have not caught that pokemon")]
    NotCaught,
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex CLI.
pub type Result<T> = std::result::Result<T, PokedexError>;
