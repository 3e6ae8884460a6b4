//! Workers AI embeddings model integration
//!
//! Runs text embedding models such as `@cf/baai/bge-base-en-v1.5` through
//! the `/ai/run/{model}` REST endpoint.

use crate::cloudflare::{read_result, CloudflareApi};
use crate::core::{Config, GatewayError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub struct WorkersAiModel {
    name: String,
    api: CloudflareApi,
}

impl WorkersAiModel {
    pub fn new(name: &str, api: CloudflareApi) -> Self {
        Self {
            name: name.to_string(),
            api,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let api = CloudflareApi::from_config(config)?;
        Ok(Self::new(&config.models.embedding_model, api))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait]
impl crate::models::EmbeddingModel for WorkersAiModel {
    async fn generate(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        debug!("Running {} on {} texts", self.name, texts.len());
        let url = self.api.account_url(&format!("ai/run/{}", self.name));

        let response = self.api
            .post(&url)
            .json(&WorkersAiEmbeddingRequest { text: texts })
            .send()
            .await
            .map_err(|e| GatewayError::GenerationError(format!("HTTP request failed: {}", e)))?;

        let result: WorkersAiEmbeddingResult = read_result(response)
            .await
            .map_err(GatewayError::GenerationError)?;

        Ok(result.data)
    }
}

#[derive(Serialize)]
struct WorkersAiEmbeddingRequest {
    text: Vec<String>,
}

#[derive(Deserialize)]
struct WorkersAiEmbeddingResult {
    data: Vec<Vec<f32>>,
}
