use thiserror::Error;

/// Errors raised by the Spotify clients and the playlist log.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to parse playlist log, error: {0}")]
    ParseError(String),

    #[error("Spotify HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Spotify deserialization error: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

/// Result alias for operations that may fail with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
