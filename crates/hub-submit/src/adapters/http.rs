//! HTTP submitter for a hub's `submitMessage` endpoint.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, warn};

use crate::ports::outbound::{MessageSubmitter, SubmitResponse, TransportError};

/// Media type of an encoded envelope.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Posts envelopes to a single endpoint.
pub struct HttpSubmitter {
    client: Client,
    endpoint: String,
}

impl HttpSubmitter {
    /// Create a submitter with request and connect timeouts.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_error(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(format!("{} did not answer: {err}", self.endpoint))
        } else if err.is_connect() {
            TransportError::Connect(format!("Cannot connect to {}: {err}", self.endpoint))
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

#[async_trait::async_trait]
impl MessageSubmitter for HttpSubmitter {
    async fn submit(&self, body: Vec<u8>) -> Result<SubmitResponse, TransportError> {
        let body_len = body.len();
        debug!(endpoint = %self.endpoint, body_len, "Posting envelope");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, OCTET_STREAM)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                let mapped = self.map_error(e);
                warn!(endpoint = %self.endpoint, error = %mapped, "Submission transport failure");
                mapped
            })?;

        // Body is not needed; dropping the response releases the connection.
        let status = response.status().as_u16();
        debug!(endpoint = %self.endpoint, status, "Hub responded");
        Ok(SubmitResponse { status })
    }
}
