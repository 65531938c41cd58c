//! # Submission Service
//!
//! Application service that implements `MessageSubmissionApi`.
//!
//! ## Architecture
//!
//! - Implements the inbound port (`MessageSubmissionApi`)
//! - Uses the outbound port (`MessageSubmitter`) to deliver envelopes
//! - Validates every body against the current time before it is sealed
//! - Delegates hashing and signing to the domain layer

use shared_types::{farcaster_time_now, HashScheme, MessageData};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::domain::entities::{SealedEnvelope, SubmissionReceipt};
use crate::domain::envelope;
use crate::domain::errors::SubmitError;
use crate::domain::schemes::MessageSigner;
use crate::domain::validation::validate_message_data;
use crate::ports::inbound::MessageSubmissionApi;
use crate::ports::outbound::MessageSubmitter;

/// Seals messages with one signer and posts them through one submitter.
pub struct SubmissionService<S: MessageSubmitter> {
    submitter: S,
    signer: Box<dyn MessageSigner>,
    hash_scheme: HashScheme,
}

impl<S: MessageSubmitter> SubmissionService<S> {
    /// Create a service hashing with BLAKE3.
    pub fn new(submitter: S, signer: impl MessageSigner + 'static) -> Self {
        Self {
            submitter,
            signer: Box::new(signer),
            hash_scheme: HashScheme::Blake3,
        }
    }

    pub fn with_hash_scheme(mut self, hash_scheme: HashScheme) -> Self {
        self.hash_scheme = hash_scheme;
        self
    }

    /// Hex public key of the signer.
    pub fn signer_hex(&self) -> String {
        hex::encode(self.signer.signer_key())
    }

    /// Like `submit`, but gives up with `SubmitError::Cancelled` once
    /// `shutdown` turns true.
    ///
    /// Nothing is sent if the signal is already set.
    pub async fn submit_until(
        &self,
        data: MessageData,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<SubmissionReceipt, SubmitError> {
        if *shutdown.borrow() {
            return Err(SubmitError::Cancelled);
        }

        let sealed = MessageSubmissionApi::seal(self, &data)?;
        let send = self.send(sealed);
        tokio::pin!(send);

        loop {
            let changed = tokio::select! {
                result = &mut send => return result,
                changed = shutdown.changed() => changed,
            };

            match changed {
                Ok(()) if *shutdown.borrow() => {
                    warn!(fid = data.fid, "Shutdown signal received, abandoning submission");
                    return Err(SubmitError::Cancelled);
                }
                Ok(()) => continue,
                // Sender gone: nobody can cancel any more.
                Err(_) => return send.await,
            }
        }
    }

    async fn send(&self, sealed: SealedEnvelope) -> Result<SubmissionReceipt, SubmitError> {
        let hash_hex = sealed.hash_hex();
        let envelope_len = sealed.bytes.len();

        let response = self.submitter.submit(sealed.bytes).await?;
        if !response.is_success() {
            warn!(hash = %hash_hex, status = response.status, "Hub rejected message");
            return Err(SubmitError::NonSuccessStatus {
                status: response.status,
            });
        }

        info!(hash = %hash_hex, status = response.status, envelope_len, "Message accepted");
        Ok(SubmissionReceipt {
            hash_hex,
            status: response.status,
            envelope_len,
        })
    }
}

#[async_trait::async_trait]
impl<S: MessageSubmitter> MessageSubmissionApi for SubmissionService<S> {
    fn seal(&self, data: &MessageData) -> Result<SealedEnvelope, SubmitError> {
        validate_message_data(data, farcaster_time_now()?)?;
        envelope::seal(data, self.hash_scheme, self.signer.as_ref())
    }

    async fn submit(&self, data: MessageData) -> Result<SubmissionReceipt, SubmitError> {
        let sealed = MessageSubmissionApi::seal(self, &data)?;
        self.send(sealed).await
    }
}
