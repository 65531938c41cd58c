//! # Protocol Limits
//!
//! Bounds enforced by hubs on incoming messages. Sizes are in bytes of UTF-8.

/// Length of a truncated content hash.
pub const MESSAGE_HASH_LENGTH: usize = 20;

/// Upper bound on an encoded `MessageData`.
pub const MAX_DATA_BYTES: usize = 2048;

/// Allowed distance into the future for a message timestamp.
pub const ALLOWED_CLOCK_SKEW_SECS: u32 = 10 * 60;

/// Text limit for a regular cast.
pub const MAX_CAST_TEXT_BYTES: usize = 320;

/// Text limit for a long cast. Long casts must also exceed
/// [`MAX_CAST_TEXT_BYTES`].
pub const MAX_LONG_CAST_TEXT_BYTES: usize = 1024;

pub const MAX_EMBEDS: usize = 2;

pub const MAX_MENTIONS: usize = 10;

pub const MAX_URL_BYTES: usize = 256;

// User data value limits
pub const MAX_PFP_BYTES: usize = 256;
pub const MAX_DISPLAY_BYTES: usize = 32;
pub const MAX_BIO_BYTES: usize = 256;
pub const MAX_USERNAME_BYTES: usize = 20;
/// Longest fname label, also the longest label of an `.eth` username
pub const MAX_FNAME_CHARS: usize = 16;
