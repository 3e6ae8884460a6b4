//! HTTP endpoints for the gateway

pub mod envelope;
pub mod generate;
pub mod insert;
pub mod query;

#[cfg(test)]
mod test_support;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub use envelope::not_found;
pub use generate::generate_namespace;
pub use insert::insert_records;
pub use query::query_records;

/// Each endpoint answers with or without its trailing slash. Every unmatched
/// path or method answers with the 404 envelope.
pub fn router(state: AppState) -> Router {
    let insert = post(insert_records).fallback(not_found);
    let query = post(query_records).fallback(not_found);
    let generate = get(generate_namespace).fallback(not_found);

    Router::new()
        .route("/api/insert", insert.clone())
        .route("/api/insert/", insert)
        .route("/api/query", query.clone())
        .route("/api/query/", query)
        .route("/api/generate", generate.clone())
        .route("/api/generate/", generate)
        .fallback(not_found)
        .with_state(state)
}
