//! # Submission Errors
//!
//! Every failure in the build → seal → submit flow surfaces as a
//! [`SubmitError`]. Nothing is retried; the caller decides what to do.

use shared_crypto::CryptoError;
use shared_types::{CodecError, TimeError};
use thiserror::Error;

use crate::ports::outbound::TransportError;

/// A message body broke one of the hub's validation rules.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{reason}")]
pub struct ValidationError {
    /// Human-readable rule that failed.
    pub reason: String,
}

impl ValidationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while building, sealing or submitting a message.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The timestamp cannot be expressed as an epoch offset.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(#[from] TimeError),

    /// A record could not be encoded or decoded.
    #[error("Encoding error: {0}")]
    Encoding(#[from] CodecError),

    /// The signer seed is not valid hex.
    #[error("Invalid key encoding: {0}")]
    InvalidKeyEncoding(String),

    /// The decoded signer seed has the wrong length.
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// The message body is not acceptable to a hub.
    #[error("Invalid message: {0}")]
    Validation(#[from] ValidationError),

    /// No hasher is available for the requested scheme.
    #[error("Unsupported hash scheme: {0}")]
    UnsupportedHashScheme(i32),

    /// No verifier is available for the declared signature scheme.
    #[error("Unsupported signature scheme: {0}")]
    UnsupportedSignatureScheme(i32),

    /// The embedded hash does not match the embedded body bytes.
    #[error("Hash mismatch: envelope carries {expected}, body hashes to {computed}")]
    HashMismatch { expected: String, computed: String },

    /// The embedded signature does not verify against the embedded signer.
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    /// The request never produced an HTTP response.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The hub answered with something other than 200.
    #[error("Hub rejected message with HTTP status {status}")]
    NonSuccessStatus { status: u16 },

    /// Shutdown was signalled before the hub answered.
    #[error("Submission cancelled")]
    Cancelled,
}

impl From<CryptoError> for SubmitError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::InvalidKeyEncoding(reason) => SubmitError::InvalidKeyEncoding(reason),
            CryptoError::InvalidKeyLength { expected, actual } => {
                SubmitError::InvalidKeyLength { expected, actual }
            }
            other => SubmitError::InvalidSignature(other.to_string()),
        }
    }
}
