//! Vectorize index client
//!
//! Talks to the v2 Vectorize REST API. Upserts are sent as NDJSON, one
//! record per line.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cloudflare::{read_result, CloudflareApi};
use crate::core::{Config, GatewayError, Result};
use crate::storage::{QueryMatch, QueryOptions, UpsertResult, VectorIndex, VectorRecord};

pub struct VectorizeIndex {
    index_name: String,
    api: CloudflareApi,
}

impl VectorizeIndex {
    pub fn new(index_name: &str, api: CloudflareApi) -> Self {
        Self {
            index_name: index_name.to_string(),
            api,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let api = CloudflareApi::from_config(config)?;
        Ok(Self::new(&config.index.name, api))
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    fn index_endpoint(&self, operation: &str) -> String {
        self.api
            .account_url(&format!("vectorize/v2/indexes/{}/{}", self.index_name, operation))
    }

    fn to_ndjson(records: &[VectorRecord]) -> Result<String> {
        let mut body = String::new();
        for record in records {
            body.push_str(&serde_json::to_string(record)?);
            body.push('\n');
        }
        Ok(body)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VectorizeQueryRequest {
    vector: Vec<f32>,
    top_k: usize,
    return_values: bool,
    return_metadata: &'static str,
}

#[derive(Deserialize)]
struct VectorizeQueryResult {
    #[serde(default)]
    matches: Vec<QueryMatch>,
}

#[async_trait]
impl VectorIndex for VectorizeIndex {
    async fn upsert(&self, records: Vec<VectorRecord>) -> Result<UpsertResult> {
        debug!("Upserting {} vectors into {}", records.len(), self.index_name);
        let body = Self::to_ndjson(&records)?;

        let response = self.api
            .post(&self.index_endpoint("upsert"))
            .header("Content-Type", "application/x-ndjson")
            .body(body)
            .send()
            .await
            .map_err(|e| GatewayError::IndexError(format!("HTTP request failed: {}", e)))?;

        read_result(response).await.map_err(GatewayError::IndexError)
    }

    async fn query(&self, vector: Vec<f32>, options: QueryOptions) -> Result<Vec<QueryMatch>> {
        debug!("Querying {} with topK={}", self.index_name, options.top_k);
        let request = VectorizeQueryRequest {
            vector,
            top_k: options.top_k,
            return_values: false,
            return_metadata: if options.return_metadata { "all" } else { "none" },
        };

        let response = self.api
            .post(&self.index_endpoint("query"))
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::IndexError(format!("HTTP request failed: {}", e)))?;

        let result: VectorizeQueryResult = read_result(response)
            .await
            .map_err(GatewayError::IndexError)?;

        Ok(result.matches)
    }
}
