//! # Error Types
//!
//! Errors raised while encoding/decoding hub messages and converting time.

use thiserror::Error;

/// Errors from the canonical codec.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CodecError {
    /// A field the schema requires is absent or empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// An enumerated or numeric field holds a value outside its declared range.
    #[error("Field {field} out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },

    /// The body variant does not belong to the declared message type.
    #[error("Body does not match message type {message_type}")]
    BodyMismatch { message_type: i32 },

    /// The input bytes are not a valid protobuf encoding.
    #[error("Decode failed: {0}")]
    Decode(#[from] prost::DecodeError),
}

/// Errors converting between wall-clock time and epoch offsets.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TimeError {
    /// The instant precedes 2021-01-01T00:00:00Z.
    #[error("Time must be after the epoch (offset {offset_secs}s)")]
    BeforeEpoch { offset_secs: i64 },

    /// The offset does not fit in 32 bits.
    #[error("Time too far in the future (offset {offset_secs}s)")]
    TooFarInFuture { offset_secs: i64 },
}
