//! Similarity query endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::envelope::{failure, rejected};
use crate::core::Result;
use crate::generators::BatchGenerator;
use crate::storage::{QueryMatch, QueryOptions};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub matches: Vec<QueryMatch>,
}

pub async fn query_records(
    State(state): State<AppState>,
    body: std::result::Result<Json<QueryRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return rejected(rejection),
    };

    match run_query(&state, request.query).await {
        Ok(matches) => Json(QueryResponse { matches }).into_response(),
        Err(e) => {
            warn!("Query failed: {}", e);
            failure(&e)
        }
    }
}

async fn run_query(state: &AppState, query: String) -> Result<Vec<QueryMatch>> {
    let vector = BatchGenerator::new(state.embedder.clone())
        .generate_single(query)
        .await?;

    let options = QueryOptions {
        top_k: state.top_k,
        return_metadata: true,
    };
    let matches = state.index.query(vector, options).await?;

    debug!("Query returned {} matches", matches.len());
    Ok(matches)
}
