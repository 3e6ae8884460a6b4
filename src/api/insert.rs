//! Record insertion endpoint

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::{IntoResponse, Json, Response},
};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::api::envelope::{failure, rejected};
use crate::core::{GatewayError, Result};
use crate::generators::{build_vector_records, BatchGenerator, InputRecord};
use crate::storage::UpsertResult;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct InsertParams {
    pub user_id: Option<String>,
}

/// Either a bare array of rows or rows wrapped with the owner's id.
#[derive(Debug)]
pub enum InsertBody {
    Rows(Vec<InputRecord>),
    Envelope {
        user_id: Option<String>,
        rows: Vec<InputRecord>,
    },
}

#[derive(Deserialize)]
struct RowsEnvelope {
    #[serde(default)]
    user_id: Option<String>,
    rows: Vec<InputRecord>,
}

// Dispatch on the JSON shape so a bad row reports its own field error.
impl<'de> Deserialize<'de> for InsertBody {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            rows @ Value::Array(_) => serde_json::from_value(rows)
                .map(InsertBody::Rows)
                .map_err(de::Error::custom),
            envelope @ Value::Object(_) => serde_json::from_value::<RowsEnvelope>(envelope)
                .map(|e| InsertBody::Envelope {
                    user_id: e.user_id,
                    rows: e.rows,
                })
                .map_err(de::Error::custom),
            _ => Err(de::Error::custom(
                "expected an array of rows or an object with `rows`",
            )),
        }
    }
}

impl InsertBody {
    fn into_parts(self) -> (Option<String>, Vec<InputRecord>) {
        match self {
            InsertBody::Rows(rows) => (None, rows),
            InsertBody::Envelope { user_id, rows } => (user_id, rows),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InsertResponse {
    pub success: bool,
    pub namespace: String,
    pub inserted: UpsertResult,
}

pub async fn insert_records(
    State(state): State<AppState>,
    Query(params): Query<InsertParams>,
    body: std::result::Result<Json<InsertBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return rejected(rejection),
    };

    let (body_user_id, rows) = body.into_parts();
    let user_id = non_empty(body_user_id).or_else(|| non_empty(params.user_id));

    match insert_rows(&state, user_id, rows).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            warn!("Insert failed: {}", e);
            failure(&e)
        }
    }
}

fn non_empty(id: Option<String>) -> Option<String> {
    id.filter(|id| !id.trim().is_empty())
}

async fn insert_rows(
    state: &AppState,
    user_id: Option<String>,
    rows: Vec<InputRecord>,
) -> Result<InsertResponse> {
    let user_id = user_id.ok_or(GatewayError::MissingUserId)?;

    if rows.is_empty() {
        return Ok(InsertResponse {
            success: true,
            namespace: state.ids.next_id(),
            inserted: UpsertResult {
                count: Some(0),
                ids: Some(vec![]),
                ..Default::default()
            },
        });
    }

    let texts = rows.iter().map(|row| row.data.clone()).collect();
    let embeddings = BatchGenerator::new(state.embedder.clone())
        .generate(texts)
        .await?;

    // One id for the whole batch.
    let batch_id = state.ids.next_id();
    let records = build_vector_records(&rows, embeddings, &batch_id, &user_id, state.clock.now());

    info!("Upserting {} records for {}", records.len(), user_id);
    let inserted = state.index.upsert(records).await?;

    Ok(InsertResponse {
        success: true,
        namespace: state.ids.next_id(),
        inserted,
    })
}
