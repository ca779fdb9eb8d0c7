//! Errors raised while building rules state from configuration.
//!
//! Runtime operations never fail; they report through outcome enums.

use thiserror::Error;

/// Error type for rules construction and configuration loading.
#[derive(Error, Debug)]
pub enum RulesError {
    /// The fear ceiling must be finite and strictly positive.
    #[error("invalid fear maximum: {max} (must be finite and > 0)")]
    InvalidFearMax { max: f32 },

    /// The starting fear value must be a number.
    #[error("invalid initial fear: {initial}")]
    InvalidFearInitial { initial: f32 },

    /// TOML could not be parsed into a rules configuration.
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, RulesError>;
