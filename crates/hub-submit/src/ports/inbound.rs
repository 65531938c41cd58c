//! # Inbound Ports (Driving Ports / API)
//!
//! Public API for turning a message body into an accepted submission.

use shared_types::MessageData;

use crate::domain::entities::{SealedEnvelope, SubmissionReceipt};
use crate::domain::errors::SubmitError;

/// Primary submission API.
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait::async_trait]
pub trait MessageSubmissionApi: Send + Sync {
    /// Validate, hash, sign and encode without sending.
    ///
    /// # Errors
    /// * `SubmitError::Validation` - The body breaks a hub rule
    fn seal(&self, data: &MessageData) -> Result<SealedEnvelope, SubmitError>;

    /// Seal and post once. Nothing is posted if sealing fails.
    ///
    /// # Errors
    /// * `SubmitError::Validation` - The body breaks a hub rule
    /// * `SubmitError::NonSuccessStatus` - The hub answered with anything but 200
    /// * `SubmitError::Transport` - No response was received
    async fn submit(&self, data: MessageData) -> Result<SubmissionReceipt, SubmitError>;
}
