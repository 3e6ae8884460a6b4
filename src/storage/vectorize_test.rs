//! Tests for the Vectorize client against a mock Cloudflare API

use super::{QueryOptions, RecordMetadata, VectorIndex, VectorRecord, VectorizeIndex};
use crate::cloudflare::CloudflareApi;
use crate::core::GatewayError;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn create_test_index(mock_server: &MockServer) -> VectorizeIndex {
    let api = CloudflareApi::new(
        "test-account".to_string(),
        "test-token".to_string(),
        mock_server.uri(),
        Duration::from_secs(5),
    )
    .unwrap();
    VectorizeIndex::new("docs", api)
}

fn record(id: &str, text: &str) -> VectorRecord {
    VectorRecord {
        id: id.to_string(),
        values: vec![0.1, 0.2],
        metadata: RecordMetadata {
            text: text.to_string(),
            metadata: "title: test".to_string(),
            namespace: "user-1".to_string(),
            created_at: "2024-05-01T12:00:00.000Z".to_string(),
        },
    }
}

#[tokio::test]
async fn test_upsert_sends_ndjson_and_returns_mutation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts/test-account/vectorize/v2/indexes/docs/upsert"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Content-Type", "application/x-ndjson"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errors": [],
            "messages": [],
            "result": {"mutationId": "mutation-1"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let index = create_test_index(&mock_server);
    let result = index
        .upsert(vec![record("a", "first"), record("a", "second")])
        .await
        .unwrap();

    assert_eq!(result.mutation_id.as_deref(), Some("mutation-1"));

    let requests: Vec<Request> = mock_server.received_requests().await.unwrap();
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["metadata"]["text"], "first");
    assert_eq!(first["metadata"]["createdAt"], "2024-05-01T12:00:00.000Z");
}

#[tokio::test]
async fn test_query_requests_metadata_and_returns_matches() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts/test-account/vectorize/v2/indexes/docs/query"))
        .and(body_json(json!({
            "vector": [0.5, 0.5],
            "topK": 3,
            "returnValues": false,
            "returnMetadata": "all"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errors": [],
            "messages": [],
            "result": {
                "count": 2,
                "matches": [
                    {"id": "a", "score": 0.9, "metadata": {"text": "first"}},
                    {"id": "b", "score": 0.5, "metadata": {"text": "second"}}
                ]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let index = create_test_index(&mock_server);
    let matches = index
        .query(
            vec![0.5, 0.5],
            QueryOptions {
                top_k: 3,
                return_metadata: true,
            },
        )
        .await
        .unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].id, "a");
    assert_eq!(matches[1].id, "b");
    assert_eq!(matches[0].metadata.as_ref().unwrap()["text"], "first");
}

#[tokio::test]
async fn test_query_failure_is_index_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts/test-account/vectorize/v2/indexes/docs/query"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "errors": [{"code": 40006, "message": "vector dimension mismatch"}],
            "messages": [],
            "result": null
        })))
        .mount(&mock_server)
        .await;

    let index = create_test_index(&mock_server);
    let err = index
        .query(
            vec![0.5],
            QueryOptions {
                top_k: 3,
                return_metadata: true,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::IndexError(_)));
    assert!(err.to_string().contains("vector dimension mismatch"));
}
