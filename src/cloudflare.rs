//! Shared plumbing for the Cloudflare REST API
//!
//! Workers AI and Vectorize both answer with the v4 envelope
//! `{ "success", "errors", "messages", "result" }`.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::core::{Config, GatewayError, Result};

/// Account-scoped credentials plus a configured HTTP client.
#[derive(Debug, Clone)]
pub struct CloudflareApi {
    account_id: String,
    api_token: String,
    api_base_url: String,
    client: Client,
}

impl CloudflareApi {
    pub fn new(account_id: String, api_token: String, api_base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            account_id,
            api_token,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let account_id = config
            .cloudflare
            .account_id
            .clone()
            .ok_or_else(|| GatewayError::ConfigError("CLOUDFLARE_ACCOUNT_ID not set".to_string()))?;
        let api_token = config
            .cloudflare
            .api_token
            .clone()
            .ok_or_else(|| GatewayError::ConfigError("CLOUDFLARE_API_TOKEN not set".to_string()))?;

        Self::new(
            account_id,
            api_token,
            config.cloudflare.api_base_url.clone(),
            config.models.timeout,
        )
    }

    /// `{base}/accounts/{account_id}/{path}`
    pub fn account_url(&self, path: &str) -> String {
        format!("{}/accounts/{}/{}", self.api_base_url, self.account_id, path)
    }

    /// A POST request carrying the bearer token.
    pub fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.api_token))
    }
}

#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    errors: Vec<ApiMessage>,
    result: Option<T>,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    code: i64,
    message: String,
}

impl<T> ApiEnvelope<T> {
    fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return "unknown error".to_string();
        }
        self.errors
            .iter()
            .map(|e| format!("{}: {}", e.code, e.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Unwraps the `result` of a v4 envelope.
///
/// Non-2xx statuses and `success: false` both become an error string built
/// from the API's own error messages; callers pick the error variant.
pub async fn read_result<T: DeserializeOwned>(response: Response) -> std::result::Result<T, String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    let envelope: ApiEnvelope<T> = match serde_json::from_str(&body) {
        Ok(envelope) => envelope,
        Err(e) if status.is_success() => return Err(format!("Failed to parse response: {}", e)),
        Err(_) => return Err(format!("Cloudflare API returned {}: {}", status, body)),
    };

    if !status.is_success() || !envelope.success {
        return Err(format!(
            "Cloudflare API returned {}: {}",
            status,
            envelope.error_summary()
        ));
    }

    envelope
        .result
        .ok_or_else(|| "Cloudflare API response carried no result".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_requires_credentials() {
        let mut config = Config::default();
        let err = CloudflareApi::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("CLOUDFLARE_ACCOUNT_ID"));

        config.cloudflare.account_id = Some("acct".to_string());
        let err = CloudflareApi::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("CLOUDFLARE_API_TOKEN"));

        config.cloudflare.api_token = Some("token".to_string());
        assert!(CloudflareApi::from_config(&config).is_ok());
    }

    #[test]
    fn test_account_url() {
        let api = CloudflareApi::new(
            "acct".to_string(),
            "token".to_string(),
            "http://localhost:9999/".to_string(),
            Duration::from_secs(1),
        )
        .unwrap();

        assert_eq!(
            api.account_url("vectorize/v2/indexes/docs/query"),
            "http://localhost:9999/accounts/acct/vectorize/v2/indexes/docs/query"
        );
    }

    #[test]
    fn test_error_summary_joins_messages() {
        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_value(serde_json::json!({
            "success": false,
            "errors": [
                {"code": 10000, "message": "Authentication error"},
                {"code": 7003, "message": "No route"}
            ],
            "result": null
        }))
        .unwrap();

        assert_eq!(
            envelope.error_summary(),
            "10000: Authentication error; 7003: No route"
        );
    }
}
