//! Assembly of vector records from input rows and their embeddings

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::{RecordMetadata, VectorRecord};

/// One uploaded row: the text to embed and a free-form metadata string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub data: String,
    pub metadata: String,
}

/// Pairs each row with its embedding.
///
/// Every record in the batch carries the same `batch_id` and `created_at`.
/// Rows and embeddings are zipped, so callers check the counts first.
pub fn build_vector_records(
    rows: &[InputRecord],
    embeddings: Vec<Vec<f32>>,
    batch_id: &str,
    namespace: &str,
    created_at: DateTime<Utc>,
) -> Vec<VectorRecord> {
    let created_at = created_at.to_rfc3339_opts(SecondsFormat::Millis, true);

    rows.iter()
        .zip(embeddings)
        .map(|(row, values)| VectorRecord {
            id: batch_id.to_string(),
            values,
            metadata: RecordMetadata {
                text: row.data.clone(),
                metadata: row.metadata.clone(),
                namespace: namespace.to_string(),
                created_at: created_at.clone(),
            },
        })
        .collect()
}
