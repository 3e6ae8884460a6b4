//! Error types for the gateway

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("User ID is required")]
    MissingUserId,

    #[error("Failed to generate embedding: {0}")]
    GenerationError(String),

    #[error("Vector index error: {0}")]
    IndexError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, GatewayError>;
