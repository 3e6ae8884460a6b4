//! Helpers for driving the router in tests

use axum::{
    body::Body,
    http::{Request, Response},
};
use chrono::{TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::core::{Clock, IdGenerator};
use crate::models::MockEmbeddingModel;
use crate::storage::MockVectorIndex;
use crate::AppState;

pub const TOP_K: usize = 3;

/// State over the given mocks, with ids `id-0, id-1, ...` and a frozen clock.
pub fn test_state(embedder: MockEmbeddingModel, index: MockVectorIndex) -> AppState {
    let counter = Arc::new(AtomicUsize::new(0));
    let ids = IdGenerator::new(move || format!("id-{}", counter.fetch_add(1, Ordering::SeqCst)));
    let clock = Clock::fixed(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());

    AppState::new(Arc::new(embedder), Arc::new(index), TOP_K)
        .with_ids(ids)
        .with_clock(clock)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
