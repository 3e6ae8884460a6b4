//! Namespace generation endpoint

use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub namespace: String,
}

pub async fn generate_namespace(State(state): State<AppState>) -> Json<GenerateResponse> {
    Json(GenerateResponse {
        success: true,
        namespace: state.ids.next_id(),
    })
}
