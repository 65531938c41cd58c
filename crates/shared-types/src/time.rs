//! # Epoch-Offset Time
//!
//! Message timestamps count whole seconds since 2021-01-01T00:00:00Z and
//! must fit in a `u32`.

use chrono::{DateTime, TimeZone, Utc};

use crate::errors::TimeError;

/// 2021-01-01T00:00:00Z as Unix seconds.
pub const FARCASTER_EPOCH_UNIX_SECS: i64 = 1_609_459_200;

/// The reference epoch as a `DateTime`.
pub fn farcaster_epoch() -> DateTime<Utc> {
    Utc.timestamp_opt(FARCASTER_EPOCH_UNIX_SECS, 0)
        .single()
        .unwrap_or_default()
}

/// Convert a wall-clock instant to an epoch offset.
///
/// Sub-second precision is truncated toward the epoch.
pub fn to_farcaster_time(at: DateTime<Utc>) -> Result<u32, TimeError> {
    let offset_secs = at.timestamp() - FARCASTER_EPOCH_UNIX_SECS;
    if offset_secs < 0 {
        return Err(TimeError::BeforeEpoch { offset_secs });
    }
    u32::try_from(offset_secs).map_err(|_| TimeError::TooFarInFuture { offset_secs })
}

/// Convert an epoch offset back to a wall-clock instant.
pub fn from_farcaster_time(offset: u32) -> DateTime<Utc> {
    farcaster_epoch() + chrono::Duration::seconds(i64::from(offset))
}

/// Current time as an epoch offset.
pub fn farcaster_time_now() -> Result<u32, TimeError> {
    to_farcaster_time(Utc::now())
}
