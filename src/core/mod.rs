//! Core functionality for the gateway

pub mod config;
pub mod error;
pub mod ids;

pub use config::{CloudflareConfig, Config, IndexConfig, ModelConfig, ServerConfig};
pub use error::{GatewayError, Result};
pub use ids::{Clock, IdGenerator};
