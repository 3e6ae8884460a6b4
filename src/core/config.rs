//! Configuration for the gateway

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

use crate::core::{GatewayError, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";
pub const DEFAULT_EMBEDDING_MODEL: &str = "@cf/baai/bge-base-en-v1.5";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cloudflare: CloudflareConfig,
    pub models: ModelConfig,
    pub index: IndexConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Credentials shared by the Workers AI and Vectorize clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudflareConfig {
    pub account_id: Option<String>,
    pub api_token: Option<String>,
    pub api_base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub embedding_model: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    pub name: String,
    pub top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8787,
            },
            cloudflare: CloudflareConfig {
                account_id: None,
                api_token: None,
                api_base_url: DEFAULT_API_BASE_URL.to_string(),
            },
            models: ModelConfig {
                embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
                timeout: Duration::from_secs(30),
            },
            index: IndexConfig {
                name: "vector-index".to_string(),
                top_k: 3,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from defaults overridden by whatever `lookup` yields.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("GATEWAY_HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("GATEWAY_PORT") {
            config.server.port = parse_var("GATEWAY_PORT", &port)?;
        }
        if let Some(account_id) = lookup("CLOUDFLARE_ACCOUNT_ID") {
            config.cloudflare.account_id = Some(account_id);
        }
        if let Some(api_token) = lookup("CLOUDFLARE_API_TOKEN") {
            config.cloudflare.api_token = Some(api_token);
        }
        if let Some(base_url) = lookup("CLOUDFLARE_API_BASE_URL") {
            config.cloudflare.api_base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(model) = lookup("EMBEDDING_MODEL") {
            config.models.embedding_model = model;
        }
        if let Some(timeout) = lookup("REQUEST_TIMEOUT_SECS") {
            config.models.timeout = Duration::from_secs(parse_var("REQUEST_TIMEOUT_SECS", &timeout)?);
        }
        if let Some(index) = lookup("VECTORIZE_INDEX") {
            config.index.name = index;
        }
        if let Some(top_k) = lookup("QUERY_TOP_K") {
            config.index.top_k = parse_var("QUERY_TOP_K", &top_k)?;
        }

        Ok(config)
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| GatewayError::ConfigError(format!("{} has invalid value '{}'", key, value)))
}
