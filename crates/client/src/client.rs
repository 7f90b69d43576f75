use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use text_hasher_core::{is_canonical_digest, HashRequest, HashResponse};
use tracing::debug;

use crate::error::ClientError;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/hash";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Calls `POST /api/hash` on a running hash service.
#[derive(Debug, Clone)]
pub struct HashClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HashClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends `text` to the service. Failures are returned once; nothing is
    /// retried.
    pub async fn hash(&self, text: &str) -> Result<HashResponse, ClientError> {
        let resp = self.send(text).await?;
        self.read_response(resp).await
    }

    /// Issues the request and returns once response headers arrive.
    pub(crate) async fn send(&self, text: &str) -> Result<reqwest::Response, ClientError> {
        if text.is_empty() {
            return Err(ClientError::EmptyInput);
        }

        let resp = self
            .http
            .post(&self.endpoint)
            .json(&HashRequest::new(text))
            .send()
            .await?;
        Ok(resp)
    }

    pub(crate) async fn read_response(
        &self,
        resp: reqwest::Response,
    ) -> Result<HashResponse, ClientError> {
        let status = resp.status();
        let body = resp.bytes().await?;
        debug!(%status, body_len = body.len(), endpoint = %self.endpoint, "hash service replied");
        interpret_response(status, &body)
    }
}

/// Maps a status and raw body onto the three outcomes the operator sees.
fn interpret_response(status: StatusCode, body: &[u8]) -> Result<HashResponse, ClientError> {
    if status.is_success() {
        let resp: HashResponse =
            serde_json::from_slice(body).map_err(|_| ClientError::InvalidResponse)?;
        if !is_canonical_digest(&resp.hashed_value) {
            return Err(ClientError::InvalidResponse);
        }
        return Ok(resp);
    }

    let value: Value = serde_json::from_slice(body).map_err(|_| ClientError::InvalidResponse)?;
    let message = value
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("Server returned status code: {}", status.as_u16()));
    Err(ClientError::Api(message))
}
