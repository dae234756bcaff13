//! Application layer errors

use thiserror::Error;
use crate::domain::entities::BookingStatus;

/// General application errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Channel error: {0}")]
    Channel(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Booking error: {0}")]
    Booking(#[from] BookingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Driver booking errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    #[error("Booking not found: {0}")]
    NotFound(String),

    #[error("Cannot {action} booking {id} while it is {from}")]
    InvalidTransition {
        id: String,
        from: BookingStatus,
        action: &'static str,
    },
}

/// Conversation storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Message not found: {0}")]
    NotFound(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
