//! # Shared Types Crate
//!
//! Wire-level definitions shared by every hub-submit crate.
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | `wire` | Protobuf `Message` envelope, `MessageData` body, enums |
//! | `codec` | Canonical encode/decode with required-field checks |
//! | `time` | Epoch-offset timestamps (2021-01-01T00:00:00Z) |
//! | `limits` | Size and count bounds enforced by hubs |
//!
//! Field numbering in `wire` is an external contract with the hub and is
//! not defined here.

pub mod codec;
pub mod errors;
pub mod limits;
pub mod time;
pub mod wire;

pub use codec::{decode_message, decode_message_data, encode_message, encode_message_data};
pub use errors::{CodecError, TimeError};
pub use time::{farcaster_time_now, from_farcaster_time, to_farcaster_time, FARCASTER_EPOCH_UNIX_SECS};
pub use wire::{
    FarcasterNetwork, HashScheme, Message, MessageData, MessageType, SignatureScheme,
};
