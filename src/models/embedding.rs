//! Embedding model abstraction

use crate::core::Result;
use async_trait::async_trait;

/// A remote model that turns a batch of texts into vectors.
///
/// Implementations return one vector per input, in input order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmbeddingModel: Send + Sync {
    async fn generate(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>>;
}
