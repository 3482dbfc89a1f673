use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BestiaryError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Store format error: {0}")]
    StoreFormatError(String),
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
}
