//! Embedding models consumed by the gateway

pub mod embedding;
pub mod workers_ai;


pub use embedding::EmbeddingModel;
#[cfg(test)]
pub use embedding::MockEmbeddingModel;
pub use workers_ai::WorkersAiModel;
