//! # Message Validation
//!
//! Rules a hub applies on ingestion, checked locally so a bad message never
//! leaves the process.

use shared_types::codec::body_matches_type;
use shared_types::limits::{
    ALLOWED_CLOCK_SKEW_SECS, MAX_BIO_BYTES, MAX_CAST_TEXT_BYTES, MAX_DISPLAY_BYTES, MAX_EMBEDS,
    MAX_FNAME_CHARS, MAX_LONG_CAST_TEXT_BYTES, MAX_MENTIONS, MAX_PFP_BYTES, MAX_URL_BYTES,
    MAX_USERNAME_BYTES, MESSAGE_HASH_LENGTH,
};
use shared_types::wire::{
    cast_add_body::Parent, embed, message_data::Body, reaction_body::Target, CastAddBody, CastId,
    CastRemoveBody, CastType, ReactionBody, ReactionType, UserDataBody, UserDataType,
};
use shared_types::{FarcasterNetwork, MessageData, MessageType};

use super::errors::ValidationError;

type Result<T> = std::result::Result<T, ValidationError>;

/// Validate a message body against hub rules.
///
/// `now` is the current epoch offset; the message may be at most
/// `ALLOWED_CLOCK_SKEW_SECS` ahead of it.
pub fn validate_message_data(data: &MessageData, now: u32) -> Result<()> {
    if data.fid == 0 {
        return Err(ValidationError::new("fid is missing"));
    }

    match FarcasterNetwork::try_from(data.network) {
        Ok(FarcasterNetwork::None) | Err(_) => {
            return Err(ValidationError::new("network is invalid"));
        }
        Ok(_) => {}
    }

    let message_type = match MessageType::try_from(data.r#type) {
        Ok(MessageType::None) | Err(_) => {
            return Err(ValidationError::new("message type is invalid"));
        }
        Ok(message_type) => message_type,
    };

    check_clock_skew(data.timestamp, now)?;

    let body = data
        .body
        .as_ref()
        .ok_or_else(|| ValidationError::new("body is missing"))?;
    if !body_matches_type(message_type, body) {
        return Err(ValidationError::new(format!(
            "body does not match message type {message_type:?}"
        )));
    }

    match body {
        Body::CastAddBody(cast) => validate_cast_add(cast),
        Body::CastRemoveBody(remove) => validate_cast_remove(remove),
        Body::ReactionBody(reaction) => validate_reaction(reaction),
        Body::UserDataBody(user_data) => validate_user_data(user_data),
    }
}

/// Reject timestamps too far in the future.
pub fn check_clock_skew(timestamp: u32, now: u32) -> Result<()> {
    if timestamp > now.saturating_add(ALLOWED_CLOCK_SKEW_SECS) {
        return Err(ValidationError::new(format!(
            "timestamp {timestamp} is more than {ALLOWED_CLOCK_SKEW_SECS}s ahead of {now}"
        )));
    }
    Ok(())
}

fn validate_cast_add(body: &CastAddBody) -> Result<()> {
    if !body.embeds_deprecated.is_empty() {
        return Err(ValidationError::new(
            "string embeds have been deprecated",
        ));
    }

    let text_len = body.text.len();
    match CastType::try_from(body.r#type) {
        Ok(CastType::Cast) => {
            if text_len > MAX_CAST_TEXT_BYTES {
                return Err(ValidationError::new(format!(
                    "text > {MAX_CAST_TEXT_BYTES} bytes"
                )));
            }
        }
        Ok(CastType::LongCast) => {
            if text_len <= MAX_CAST_TEXT_BYTES {
                return Err(ValidationError::new("text too short for long cast"));
            }
            if text_len > MAX_LONG_CAST_TEXT_BYTES {
                return Err(ValidationError::new(format!(
                    "text > {MAX_LONG_CAST_TEXT_BYTES} bytes for long cast"
                )));
            }
        }
        Err(_) => return Err(ValidationError::new("cast type is invalid")),
    }

    if body.embeds.len() > MAX_EMBEDS {
        return Err(ValidationError::new(format!(
            "embeds > {MAX_EMBEDS}"
        )));
    }
    if text_len == 0 && body.embeds.is_empty() && body.mentions.is_empty() {
        return Err(ValidationError::new("cast is empty"));
    }

    for embed in &body.embeds {
        match &embed.embed {
            Some(embed::Embed::Url(url)) => validate_url(url)?,
            Some(embed::Embed::CastId(cast_id)) => validate_cast_id(cast_id)?,
            None => return Err(ValidationError::new("embed is missing")),
        }
    }

    match &body.parent {
        Some(Parent::ParentCastId(cast_id)) => validate_cast_id(cast_id)?,
        Some(Parent::ParentUrl(url)) => validate_url(url)?,
        None => {}
    }

    if body.mentions.len() > MAX_MENTIONS {
        return Err(ValidationError::new(format!(
            "mentions > {MAX_MENTIONS}"
        )));
    }
    if body.mentions.len() != body.mentions_positions.len() {
        return Err(ValidationError::new(
            "mentions and mentionsPositions must match",
        ));
    }

    if body.mentions.contains(&0) {
        return Err(ValidationError::new("mention fid is missing"));
    }

    let mut previous: Option<u32> = None;
    for &position in &body.mentions_positions {
        if position as usize > text_len {
            return Err(ValidationError::new("mention position is past end of text"));
        }
        if let Some(prev) = previous {
            if position < prev {
                return Err(ValidationError::new("mentionsPositions must be sorted"));
            }
        }
        previous = Some(position);
    }

    Ok(())
}

fn validate_cast_remove(body: &CastRemoveBody) -> Result<()> {
    validate_message_hash(&body.target_hash)
}

fn validate_reaction(body: &ReactionBody) -> Result<()> {
    match ReactionType::try_from(body.r#type) {
        Ok(ReactionType::None) | Err(_) => {
            return Err(ValidationError::new("reaction type is invalid"));
        }
        Ok(_) => {}
    }

    match &body.target {
        Some(Target::TargetCastId(cast_id)) => validate_cast_id(cast_id),
        Some(Target::TargetUrl(url)) => validate_url(url),
        None => Err(ValidationError::new("target is missing")),
    }
}

fn validate_user_data(body: &UserDataBody) -> Result<()> {
    let (name, limit) = match UserDataType::try_from(body.r#type) {
        Ok(UserDataType::Pfp) => ("pfp", MAX_PFP_BYTES),
        Ok(UserDataType::Display) => ("display", MAX_DISPLAY_BYTES),
        Ok(UserDataType::Bio) => ("bio", MAX_BIO_BYTES),
        Ok(UserDataType::Url) => ("url", MAX_URL_BYTES),
        Ok(UserDataType::Username) => ("username", MAX_USERNAME_BYTES),
        Ok(UserDataType::None) | Err(_) => {
            return Err(ValidationError::new("user data type is invalid"));
        }
    };

    if body.value.len() > limit {
        return Err(ValidationError::new(format!(
            "{name} value > {limit} bytes"
        )));
    }

    // An empty username removes the current one.
    if body.r#type == UserDataType::Username as i32 && !body.value.is_empty() {
        validate_username(&body.value)?;
    }
    Ok(())
}

/// Accepts an fname (`alice`) or a single-label ENS name (`alice.eth`).
fn validate_username(value: &str) -> Result<()> {
    let label = value.strip_suffix(".eth").unwrap_or(value);
    if !is_fname(label) {
        return Err(ValidationError::new(format!(
            "username {value:?} is neither an fname nor an .eth name"
        )));
    }
    Ok(())
}

/// Lowercase letters, digits and `-`, not starting with `-`.
fn is_fname(label: &str) -> bool {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() || first.is_ascii_digit() => {}
        _ => return false,
    }
    label.len() <= MAX_FNAME_CHARS
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn validate_cast_id(cast_id: &CastId) -> Result<()> {
    if cast_id.fid == 0 {
        return Err(ValidationError::new("cast id fid is missing"));
    }
    validate_message_hash(&cast_id.hash)
}

fn validate_message_hash(hash: &[u8]) -> Result<()> {
    if hash.len() != MESSAGE_HASH_LENGTH {
        return Err(ValidationError::new(format!(
            "hash must be {MESSAGE_HASH_LENGTH} bytes, got {}",
            hash.len()
        )));
    }
    Ok(())
}

fn validate_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(ValidationError::new("url < 1 byte"));
    }
    if url.len() > MAX_URL_BYTES {
        return Err(ValidationError::new(format!(
            "url > {MAX_URL_BYTES} bytes"
        )));
    }
    Ok(())
}
