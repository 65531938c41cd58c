//! # Envelope Sealing
//!
//! Sender and receiver halves of the hash-then-sign contract:
//!
//! 1. Encode the body once; those exact bytes are hashed and transmitted.
//! 2. Sign the hash, not the body.
//! 3. A receiver re-hashes `data_bytes`, compares, then verifies the
//!    signature against the embedded signer.

use shared_types::limits::MAX_DATA_BYTES;
use shared_types::{
    decode_message_data, encode_message, encode_message_data, HashScheme, Message, MessageData,
    SignatureScheme,
};
use tracing::debug;

use super::entities::SealedEnvelope;
use super::errors::{SubmitError, ValidationError};
use super::schemes::{compute_hash, verify_signature, MessageSigner};

/// Hash, sign and wrap a message body.
///
/// Only the encoded size is checked here; body rules are applied by
/// `validate_message_data`, which the builders and `SubmissionService` run
/// first. `data` is left unset on the envelope; `data_bytes` is authoritative.
pub fn seal(
    data: &MessageData,
    hash_scheme: HashScheme,
    signer: &dyn MessageSigner,
) -> Result<SealedEnvelope, SubmitError> {
    let data_bytes = encode_message_data(data)?;
    if data_bytes.len() > MAX_DATA_BYTES {
        return Err(ValidationError::new(format!(
            "data_bytes > {MAX_DATA_BYTES} bytes"
        ))
        .into());
    }

    let hash = compute_hash(hash_scheme, &data_bytes)?;
    let signature = signer.sign_hash(&hash);

    let message = Message {
        data: None,
        hash: hash.clone(),
        hash_scheme: hash_scheme as i32,
        signature,
        signature_scheme: signer.scheme() as i32,
        signer: signer.signer_key(),
        data_bytes: Some(data_bytes),
    };
    let bytes = encode_message(&message)?;

    debug!(
        fid = data.fid,
        hash = %hex::encode(&hash),
        envelope_len = bytes.len(),
        "Sealed message"
    );

    Ok(SealedEnvelope {
        message,
        bytes,
        hash,
    })
}

/// Check an envelope the way a hub would and return its decoded body.
pub fn verify_envelope(message: &Message) -> Result<MessageData, SubmitError> {
    let data_bytes = match &message.data_bytes {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => return Err(ValidationError::new("data_bytes is missing").into()),
    };
    if data_bytes.len() > MAX_DATA_BYTES {
        return Err(ValidationError::new(format!(
            "data_bytes > {MAX_DATA_BYTES} bytes"
        ))
        .into());
    }

    let hash_scheme = HashScheme::try_from(message.hash_scheme)
        .map_err(|_| SubmitError::UnsupportedHashScheme(message.hash_scheme))?;
    let computed = compute_hash(hash_scheme, data_bytes)?;
    if computed != message.hash {
        return Err(SubmitError::HashMismatch {
            expected: hex::encode(&message.hash),
            computed: hex::encode(&computed),
        });
    }

    let signature_scheme = SignatureScheme::try_from(message.signature_scheme)
        .map_err(|_| SubmitError::UnsupportedSignatureScheme(message.signature_scheme))?;
    verify_signature(
        signature_scheme,
        &message.signer,
        &message.hash,
        &message.signature,
    )?;

    Ok(decode_message_data(data_bytes)?)
}
