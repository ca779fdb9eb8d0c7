//! Error types for narrative configuration and export.

use audit_rules::RulesError;
use thiserror::Error;

/// Top-level error type for narrative setup.
#[derive(Error, Debug)]
pub enum NarrativeError {
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("rules error: {0}")]
    Rules(#[from] RulesError),

    /// A catalog entry uses the end-of-session control key.
    #[error("catalog key `{0}` collides with the control key")]
    ReservedCatalogKey(String),

    /// Two catalog keys normalize to the same signal.
    #[error("catalog key `{0}` is defined more than once")]
    DuplicateCatalogKey(String),

    #[error("catalog contains an empty key")]
    EmptyCatalogKey,

    #[error("control key must not be empty")]
    EmptyControlKey,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, NarrativeError>;
