//! HTTP client for the retirement projection service.
//!
//! Owns the wire contract and nothing else: serializing a
//! [`SimulationRequest`] into the service's JSON body, POSTing it, and
//! validating the response envelope into a [`SimulationResponse`]. The
//! submission lifecycle (who may call this, and when) is enforced one
//! level up in `glidepath-session`.
//!
//! # Error Handling
//!
//! Failures map onto three kinds, kept distinct so the session can log
//! them with the right context:
//!
//! | Error | Meaning |
//! |-------|---------|
//! | [`ClientError::Transport`] | The call could not complete (connectivity, timeout) |
//! | [`ClientError::Status`] | The service answered with a non-success status |
//! | [`ClientError::Shape`] | A success status carried a malformed body |
//!
//! No retries happen here: exactly one attempt per call, matching the
//! one-attempt-per-submit contract.

mod wire;

use std::time::Duration;

use glidepath_types::{ResponseShapeError, SimulationRequest, SimulationResponse};
use url::Url;

const CONNECT_TIMEOUT_SECS: u64 = 30;
const TCP_KEEPALIVE_SECS: u64 = 60;

const MAX_ERROR_BODY_BYTES: usize = 32 * 1024;

/// Why a projection request failed.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service error {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error(transparent)]
    Shape(#[from] ResponseShapeError),
}

/// Client for one configured projection endpoint.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ProjectionClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ProjectionClient {
    /// Build a client with the given total request timeout.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(timeout)
            .tcp_keepalive(Some(Duration::from_secs(TCP_KEEPALIVE_SECS)))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submit one simulation request and validate the response.
    ///
    /// Exactly one outbound call; any non-success status or malformed
    /// body is an error, never a partial result.
    pub async fn simulate(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResponse, ClientError> {
        let body = wire::RequestBody::from(request);
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        // Reporting belongs to the session, which logs each failure kind
        // exactly once; the client stays quiet and just returns the error.
        let status = response.status();
        if !status.is_success() {
            let body = read_capped_error_body(response).await;
            return Err(ClientError::Status { status, body });
        }

        let text = response.text().await?;
        let payload: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
            ResponseShapeError::InvalidJson {
                detail: e.to_string(),
            }
        })?;
        Ok(wire::validate_payload(&payload)?)
    }
}

/// Read a non-success body for diagnostics, capped so a misbehaving
/// service cannot balloon logs.
async fn read_capped_error_body(response: reqwest::Response) -> String {
    match response.text().await {
        Ok(text) => truncate_body(text),
        Err(e) => format!("<unreadable body: {e}>"),
    }
}

fn truncate_body(mut text: String) -> String {
    if text.len() <= MAX_ERROR_BODY_BYTES {
        return text;
    }
    let mut end = MAX_ERROR_BODY_BYTES;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
    text.push_str("...(truncated)");
    text
}
