//! Error types for the `TripAI` pipeline

use thiserror::Error;

/// Error type for the `TripAI` pipeline
///
/// Only the fail-fast half of the pipeline (place search, planning)
/// surfaces these; preference extraction absorbs its own failures and
/// falls back instead.
#[derive(Error, Debug)]
pub enum TripAiError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limit error: {0}")]
    RateLimit(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TripAiError>;
