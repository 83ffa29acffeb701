//! Error types for stalker-bot.

use thiserror::Error;

/// Main error type for webhook and lookup operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Inbound request failed webhook-shape validation
    #[error("Malformed webhook request: {0}")]
    MalformedRequest(String),

    /// A required intent parameter is absent
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(String),

    /// Upstream API returned an error
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O failure (server socket, config file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for stalker-bot operations.
pub type Result<T> = std::result::Result<T, Error>;
