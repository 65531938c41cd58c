//! # Domain Entities
//!
//! Typed message bodies and the records produced by sealing and submitting.

use serde::Serialize;
use shared_types::wire::{
    cast_add_body::Parent, embed, message_data::Body, reaction_body::Target, CastAddBody, CastId,
    CastRemoveBody, Embed, ReactionBody, ReactionType, UserDataBody, UserDataType,
};
use shared_types::{Message, MessageType};

/// Type-specific payload of a message.
///
/// Each variant fixes the `MessageType` written to the body, so a body and
/// its type can never disagree.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageBody {
    CastAdd(CastAddBody),
    CastRemove(CastRemoveBody),
    ReactionAdd(ReactionBody),
    ReactionRemove(ReactionBody),
    UserDataAdd(UserDataBody),
}

impl MessageBody {
    /// A plain text cast.
    pub fn text(text: impl Into<String>) -> Self {
        MessageBody::CastAdd(CastAddBody {
            text: text.into(),
            ..Default::default()
        })
    }

    /// A text cast with URL embeds and an optional parent URL.
    pub fn cast(text: impl Into<String>, embed_urls: Vec<String>, parent_url: Option<String>) -> Self {
        MessageBody::CastAdd(CastAddBody {
            text: text.into(),
            embeds: embed_urls
                .into_iter()
                .map(|url| Embed {
                    embed: Some(embed::Embed::Url(url)),
                })
                .collect(),
            parent: parent_url.map(Parent::ParentUrl),
            ..Default::default()
        })
    }

    /// Remove a previously published cast by hash.
    pub fn remove_cast(target_hash: Vec<u8>) -> Self {
        MessageBody::CastRemove(CastRemoveBody { target_hash })
    }

    /// React to a cast.
    pub fn react(reaction: ReactionType, target: CastId) -> Self {
        MessageBody::ReactionAdd(ReactionBody {
            r#type: reaction as i32,
            target: Some(Target::TargetCastId(target)),
        })
    }

    /// Undo a reaction to a cast.
    pub fn unreact(reaction: ReactionType, target: CastId) -> Self {
        MessageBody::ReactionRemove(ReactionBody {
            r#type: reaction as i32,
            target: Some(Target::TargetCastId(target)),
        })
    }

    /// Set a profile field.
    pub fn user_data(field: UserDataType, value: impl Into<String>) -> Self {
        MessageBody::UserDataAdd(UserDataBody {
            r#type: field as i32,
            value: value.into(),
        })
    }

    pub fn message_type(&self) -> MessageType {
        match self {
            MessageBody::CastAdd(_) => MessageType::CastAdd,
            MessageBody::CastRemove(_) => MessageType::CastRemove,
            MessageBody::ReactionAdd(_) => MessageType::ReactionAdd,
            MessageBody::ReactionRemove(_) => MessageType::ReactionRemove,
            MessageBody::UserDataAdd(_) => MessageType::UserDataAdd,
        }
    }

    pub(crate) fn into_wire(self) -> Body {
        match self {
            MessageBody::CastAdd(body) => Body::CastAddBody(body),
            MessageBody::CastRemove(body) => Body::CastRemoveBody(body),
            MessageBody::ReactionAdd(body) | MessageBody::ReactionRemove(body) => {
                Body::ReactionBody(body)
            }
            MessageBody::UserDataAdd(body) => Body::UserDataBody(body),
        }
    }
}

/// A signed envelope ready for transmission.
#[derive(Clone, Debug, PartialEq)]
pub struct SealedEnvelope {
    /// The assembled envelope.
    pub message: Message,
    /// Encoded envelope; this is the HTTP body.
    pub bytes: Vec<u8>,
    /// Content hash of the encoded body.
    pub hash: Vec<u8>,
}

impl SealedEnvelope {
    pub fn hash_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.hash))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

/// Outcome of a successful submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    /// `0x`-prefixed content hash.
    pub hash_hex: String,
    /// HTTP status returned by the hub.
    pub status: u16,
    /// Size of the posted envelope in bytes.
    pub envelope_len: usize,
}
