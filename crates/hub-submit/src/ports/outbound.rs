//! # Outbound Ports (Driven Ports / SPI)
//!
//! The transport that delivers an encoded envelope to a hub.

use thiserror::Error;

/// Failure before any HTTP status was received.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The hub could not be reached
    #[error("Connection failed: {0}")]
    Connect(String),

    /// The request did not complete in time
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Any other client-side failure
    #[error("Request failed: {0}")]
    Request(String),
}

/// What the hub answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitResponse {
    pub status: u16,
}

impl SubmitResponse {
    /// Only 200 counts as accepted.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Delivers an encoded envelope to a hub.
///
/// One call is one request; implementations must not retry.
#[async_trait::async_trait]
pub trait MessageSubmitter: Send + Sync {
    /// Post `body` and report the HTTP status.
    ///
    /// # Errors
    /// * `TransportError::Connect` - Hub unreachable
    /// * `TransportError::Timeout` - No response within the configured timeout
    async fn submit(&self, body: Vec<u8>) -> Result<SubmitResponse, TransportError>;
}
