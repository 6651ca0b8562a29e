//! Error types for the enhancement service surface.
//!
//! The normalization core itself is total over strings; these errors only
//! come from the layers around it (size ceiling, config, I/O, JSON).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnhanceError {
    /// Input exceeded the configured ceiling
    #[error("Input too large: {size} bytes (limit {limit})")]
    InputTooLarge { size: usize, limit: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EnhanceError>;
