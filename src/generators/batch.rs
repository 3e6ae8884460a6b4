//! Batch embedding generation

use crate::core::{GatewayError, Result};
use crate::models::EmbeddingModel;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

pub struct BatchGenerator {
    model: Arc<dyn EmbeddingModel>,
}

impl BatchGenerator {
    pub fn new(model: Arc<dyn EmbeddingModel>) -> Self {
        Self { model }
    }

    /// Embeds `texts` in a single call, one vector per text.
    pub async fn generate(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>> {
        let start_time = Instant::now();
        let expected = texts.len();

        let embeddings = self.model.generate(texts).await?;
        if embeddings.len() != expected {
            return Err(GatewayError::GenerationError(format!(
                "expected {} embeddings, model returned {}",
                expected,
                embeddings.len()
            )));
        }

        debug!(
            "Generated {} embeddings in {}ms",
            embeddings.len(),
            start_time.elapsed().as_millis()
        );
        Ok(embeddings)
    }

    pub async fn generate_single(&self, text: String) -> Result<Vec<f32>> {
        self.model
            .generate(vec![text])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::GenerationError("No embedding generated".to_string()))
    }
}
