//! Error types for mp3count
//!
//! Counting itself never fails. Errors come from reading the input file,
//! enforcing the size limit, and loading configuration.

use thiserror::Error;

/// Result type alias for mp3count operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The source could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source is larger than the configured limit
    #[error("File too large: {size} bytes exceeds limit of {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    /// Invalid configuration file
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
