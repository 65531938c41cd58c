//! # Message Builder
//!
//! Turns a typed body plus author metadata into a validated `MessageData`.

use chrono::{DateTime, Utc};
use shared_types::{farcaster_time_now, to_farcaster_time, FarcasterNetwork, MessageData};

use super::entities::MessageBody;
use super::errors::SubmitError;
use super::validation::validate_message_data;

/// Build a message body timestamped at `at`.
///
/// Sub-second precision is truncated.
pub fn build_message_data(
    fid: u64,
    body: MessageBody,
    at: DateTime<Utc>,
    network: FarcasterNetwork,
) -> Result<MessageData, SubmitError> {
    let timestamp = to_farcaster_time(at)?;
    let now = farcaster_time_now()?;
    build_at(fid, body, timestamp, network, now)
}

/// Build a message body with a precomputed epoch offset.
///
/// The offset is taken as-is, so the clock-skew rule is not applied.
pub fn build_message_data_at_offset(
    fid: u64,
    body: MessageBody,
    timestamp: u32,
    network: FarcasterNetwork,
) -> Result<MessageData, SubmitError> {
    build_at(fid, body, timestamp, network, timestamp)
}

fn build_at(
    fid: u64,
    body: MessageBody,
    timestamp: u32,
    network: FarcasterNetwork,
    now: u32,
) -> Result<MessageData, SubmitError> {
    let data = MessageData {
        r#type: body.message_type() as i32,
        fid,
        timestamp,
        network: network as i32,
        body: Some(body.into_wire()),
    };
    validate_message_data(&data, now)?;
    Ok(data)
}
