//! Vectorize Gateway Library
//!
//! An HTTP façade that embeds text records through Workers AI and stores or
//! queries them in a Vectorize index.

pub mod api;
pub mod cloudflare;
pub mod core;
pub mod generators;
pub mod models;
pub mod storage;

use std::sync::Arc;
use crate::core::{Clock, Config, IdGenerator, Result};
use crate::models::{EmbeddingModel, WorkersAiModel};
use crate::storage::{VectorIndex, VectorizeIndex};

// Application state for Axum
#[derive(Clone)]
pub struct AppState {
    pub embedder: Arc<dyn EmbeddingModel>,
    pub index: Arc<dyn VectorIndex>,
    pub ids: IdGenerator,
    pub clock: Clock,
    pub top_k: usize,
}

impl AppState {
    pub fn new(embedder: Arc<dyn EmbeddingModel>, index: Arc<dyn VectorIndex>, top_k: usize) -> Self {
        Self {
            embedder,
            index,
            ids: IdGenerator::uuid(),
            clock: Clock::system(),
            top_k,
        }
    }

    pub fn with_ids(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}

pub struct GatewayService {
    pub config: Config,
    pub embedder: Arc<WorkersAiModel>,
    pub index: Arc<VectorizeIndex>,
}

impl GatewayService {
    pub fn new(config: Config) -> Result<Self> {
        let embedder = Arc::new(WorkersAiModel::from_config(&config)?);
        let index = Arc::new(VectorizeIndex::from_config(&config)?);

        Ok(Self {
            config,
            embedder,
            index,
        })
    }

    pub fn app_state(self) -> AppState {
        AppState::new(self.embedder, self.index, self.config.index.top_k)
    }
}
