use thiserror::Error;

#[derive(Debug, Error)]
pub enum PassportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
