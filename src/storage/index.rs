//! Vector index abstraction and the records exchanged with it

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::Result;

/// A vector plus the metadata stored alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorRecord {
    pub id: String,
    pub values: Vec<f32>,
    pub metadata: RecordMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMetadata {
    pub text: String,
    pub metadata: String,
    /// Owner of the record.
    pub namespace: String,
    /// RFC 3339, millisecond precision, UTC.
    pub created_at: String,
}

/// Acknowledgement of an upsert, passed back to callers untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    pub top_k: usize,
    pub return_metadata: bool,
}

/// A match as the index reported it. Fields not modelled here, such as the
/// match `namespace`, ride along in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryMatch {
    pub id: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Managed nearest-neighbor index.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VectorIndex: Send + Sync {
    async fn upsert(&self, records: Vec<VectorRecord>) -> Result<UpsertResult>;

    /// Nearest matches to `vector`, best first, at most `options.top_k`.
    async fn query(&self, vector: Vec<f32>, options: QueryOptions) -> Result<Vec<QueryMatch>>;
}
