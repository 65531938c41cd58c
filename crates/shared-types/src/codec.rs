//! # Canonical Codec
//!
//! Deterministic protobuf encoding for `MessageData` and `Message`.
//!
//! The same encoder serves both records. Encoding checks that the fields a
//! hub requires are present and in range before producing bytes; decoding is
//! structural only (semantic checks live with the caller).

use prost::Message as _;

use crate::errors::CodecError;
use crate::wire::{
    message_data::Body, FarcasterNetwork, HashScheme, Message, MessageData, MessageType,
    SignatureScheme,
};

/// Whether `body` is the variant carried by `message_type`.
pub fn body_matches_type(message_type: MessageType, body: &Body) -> bool {
    matches!(
        (message_type, body),
        (MessageType::CastAdd, Body::CastAddBody(_))
            | (MessageType::CastRemove, Body::CastRemoveBody(_))
            | (MessageType::ReactionAdd, Body::ReactionBody(_))
            | (MessageType::ReactionRemove, Body::ReactionBody(_))
            | (MessageType::UserDataAdd, Body::UserDataBody(_))
    )
}

/// Resolve a raw enum field, rejecting unknown values and the `None` variant.
fn required_enum<E>(field: &'static str, raw: i32, none: E) -> Result<E, CodecError>
where
    E: TryFrom<i32> + PartialEq,
{
    let value = E::try_from(raw).map_err(|_| CodecError::OutOfRange {
        field,
        value: i64::from(raw),
    })?;
    if value == none {
        return Err(CodecError::MissingField(field));
    }
    Ok(value)
}

/// Encode a message body.
pub fn encode_message_data(data: &MessageData) -> Result<Vec<u8>, CodecError> {
    if data.fid == 0 {
        return Err(CodecError::MissingField("fid"));
    }
    let message_type = required_enum("type", data.r#type, MessageType::None)?;
    required_enum("network", data.network, FarcasterNetwork::None)?;

    let body = data.body.as_ref().ok_or(CodecError::MissingField("body"))?;
    if !body_matches_type(message_type, body) {
        return Err(CodecError::BodyMismatch {
            message_type: data.r#type,
        });
    }

    Ok(data.encode_to_vec())
}

/// Decode a message body.
pub fn decode_message_data(bytes: &[u8]) -> Result<MessageData, CodecError> {
    Ok(MessageData::decode(bytes)?)
}

/// Encode an envelope.
pub fn encode_message(message: &Message) -> Result<Vec<u8>, CodecError> {
    match &message.data_bytes {
        Some(bytes) if !bytes.is_empty() => {}
        _ => return Err(CodecError::MissingField("data_bytes")),
    }
    if message.hash.is_empty() {
        return Err(CodecError::MissingField("hash"));
    }
    required_enum("hash_scheme", message.hash_scheme, HashScheme::None)?;
    if message.signature.is_empty() {
        return Err(CodecError::MissingField("signature"));
    }
    required_enum(
        "signature_scheme",
        message.signature_scheme,
        SignatureScheme::None,
    )?;
    if message.signer.is_empty() {
        return Err(CodecError::MissingField("signer"));
    }

    Ok(message.encode_to_vec())
}

/// Decode an envelope.
pub fn decode_message(bytes: &[u8]) -> Result<Message, CodecError> {
    Ok(Message::decode(bytes)?)
}
