//! # Wire Schema
//!
//! Protobuf messages exchanged with a hub. The structs are declared by hand
//! with `prost` derives; field numbers mirror the hub's `message.proto` and
//! MUST NOT be renumbered.
//!
//! ```text
//! Message (envelope)
//! ├── hash            = blake3_20(data_bytes)
//! ├── hash_scheme     = BLAKE3
//! ├── signature       = ed25519(hash)
//! ├── signature_scheme= ED25519
//! ├── signer          = public key
//! └── data_bytes      = encode(MessageData)
//! ```

use std::fmt;
use std::str::FromStr;

// =============================================================================
// ENVELOPE
// =============================================================================

/// Signed envelope transmitted to the hub.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Message {
    /// Decoded body. Left unset by this client; `data_bytes` is authoritative.
    #[prost(message, optional, tag = "1")]
    pub data: ::core::option::Option<MessageData>,
    /// Content hash of `data_bytes`.
    #[prost(bytes = "vec", tag = "2")]
    pub hash: Vec<u8>,
    /// Algorithm that produced `hash`.
    #[prost(enumeration = "HashScheme", tag = "3")]
    pub hash_scheme: i32,
    /// Signature over `hash`.
    #[prost(bytes = "vec", tag = "4")]
    pub signature: Vec<u8>,
    /// Algorithm that produced `signature`.
    #[prost(enumeration = "SignatureScheme", tag = "5")]
    pub signature_scheme: i32,
    /// Public key of the signer.
    #[prost(bytes = "vec", tag = "6")]
    pub signer: Vec<u8>,
    /// Canonical encoding of the body, exactly as hashed.
    #[prost(bytes = "vec", optional, tag = "7")]
    pub data_bytes: ::core::option::Option<Vec<u8>>,
}

/// Message body common to every message type.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MessageData {
    #[prost(enumeration = "MessageType", tag = "1")]
    pub r#type: i32,
    /// Author id (fid).
    #[prost(uint64, tag = "2")]
    pub fid: u64,
    /// Seconds since the 2021-01-01 epoch.
    #[prost(uint32, tag = "3")]
    pub timestamp: u32,
    #[prost(enumeration = "FarcasterNetwork", tag = "4")]
    pub network: i32,
    #[prost(oneof = "message_data::Body", tags = "5, 6, 7, 12")]
    pub body: ::core::option::Option<message_data::Body>,
}

/// Nested types of [`MessageData`].
pub mod message_data {
    /// Type-specific payload.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Body {
        #[prost(message, tag = "5")]
        CastAddBody(super::CastAddBody),
        #[prost(message, tag = "6")]
        CastRemoveBody(super::CastRemoveBody),
        #[prost(message, tag = "7")]
        ReactionBody(super::ReactionBody),
        #[prost(message, tag = "12")]
        UserDataBody(super::UserDataBody),
    }
}

// =============================================================================
// BODIES
// =============================================================================

/// Adds a new cast.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CastAddBody {
    /// Legacy string embeds. Rejected by validation.
    #[prost(string, repeated, tag = "1")]
    pub embeds_deprecated: Vec<String>,
    #[prost(uint64, repeated, tag = "2")]
    pub mentions: Vec<u64>,
    #[prost(string, tag = "4")]
    pub text: String,
    #[prost(uint32, repeated, tag = "5")]
    pub mentions_positions: Vec<u32>,
    #[prost(message, repeated, tag = "6")]
    pub embeds: Vec<Embed>,
    #[prost(oneof = "cast_add_body::Parent", tags = "3, 7")]
    pub parent: ::core::option::Option<cast_add_body::Parent>,
    #[prost(enumeration = "CastType", tag = "8")]
    pub r#type: i32,
}

/// Nested types of [`CastAddBody`].
pub mod cast_add_body {
    /// What the cast replies to.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Parent {
        #[prost(message, tag = "3")]
        ParentCastId(super::CastId),
        #[prost(string, tag = "7")]
        ParentUrl(String),
    }
}

/// Removes an existing cast.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CastRemoveBody {
    #[prost(bytes = "vec", tag = "1")]
    pub target_hash: Vec<u8>,
}

/// Identifies a cast by author and hash.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CastId {
    #[prost(uint64, tag = "1")]
    pub fid: u64,
    #[prost(bytes = "vec", tag = "2")]
    pub hash: Vec<u8>,
}

/// URL or cast embedded in a cast.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Embed {
    #[prost(oneof = "embed::Embed", tags = "1, 2")]
    pub embed: ::core::option::Option<embed::Embed>,
}

/// Nested types of [`Embed`].
pub mod embed {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Embed {
        #[prost(string, tag = "1")]
        Url(String),
        #[prost(message, tag = "2")]
        CastId(super::CastId),
    }
}

/// Adds or removes a reaction.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReactionBody {
    #[prost(enumeration = "ReactionType", tag = "1")]
    pub r#type: i32,
    #[prost(oneof = "reaction_body::Target", tags = "2, 3")]
    pub target: ::core::option::Option<reaction_body::Target>,
}

/// Nested types of [`ReactionBody`].
pub mod reaction_body {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Target {
        #[prost(message, tag = "2")]
        TargetCastId(super::CastId),
        #[prost(string, tag = "3")]
        TargetUrl(String),
    }
}

/// Sets a piece of profile metadata.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UserDataBody {
    #[prost(enumeration = "UserDataType", tag = "1")]
    pub r#type: i32,
    #[prost(string, tag = "2")]
    pub value: String,
}

// =============================================================================
// ENUMERATIONS
// =============================================================================

/// Algorithm tag carried next to the content hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum HashScheme {
    None = 0,
    /// BLAKE3 truncated to 20 bytes.
    Blake3 = 1,
}

/// Algorithm tag carried next to the signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SignatureScheme {
    None = 0,
    Ed25519 = 1,
    /// Ethereum typed-data signatures. Recognised on the wire, never produced here.
    Eip712 = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum MessageType {
    None = 0,
    CastAdd = 1,
    CastRemove = 2,
    ReactionAdd = 3,
    ReactionRemove = 4,
    UserDataAdd = 11,
}

/// Network a message is intended for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum FarcasterNetwork {
    None = 0,
    Mainnet = 1,
    Testnet = 2,
    Devnet = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CastType {
    Cast = 0,
    LongCast = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ReactionType {
    None = 0,
    Like = 1,
    Recast = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum UserDataType {
    None = 0,
    Pfp = 1,
    Display = 2,
    Bio = 3,
    Url = 5,
    Username = 6,
}

impl fmt::Display for FarcasterNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FarcasterNetwork::None => "none",
            FarcasterNetwork::Mainnet => "mainnet",
            FarcasterNetwork::Testnet => "testnet",
            FarcasterNetwork::Devnet => "devnet",
        };
        f.write_str(name)
    }
}

impl FromStr for FarcasterNetwork {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "1" => Ok(FarcasterNetwork::Mainnet),
            "testnet" | "2" => Ok(FarcasterNetwork::Testnet),
            "devnet" | "3" => Ok(FarcasterNetwork::Devnet),
            other => Err(format!("unknown network: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message as _;

    #[test]
    fn test_network_parse_and_display() {
        assert_eq!("mainnet".parse::<FarcasterNetwork>(), Ok(FarcasterNetwork::Mainnet));
        assert_eq!("DEVNET".parse::<FarcasterNetwork>(), Ok(FarcasterNetwork::Devnet));
        assert!("moon".parse::<FarcasterNetwork>().is_err());
        assert_eq!(FarcasterNetwork::Testnet.to_string(), "testnet");
    }

    #[test]
    fn test_enum_wire_values() {
        assert_eq!(HashScheme::Blake3 as i32, 1);
        assert_eq!(SignatureScheme::Ed25519 as i32, 1);
        assert_eq!(MessageType::UserDataAdd as i32, 11);
        assert_eq!(FarcasterNetwork::Mainnet as i32, 1);
    }

    #[test]
    fn test_body_field_number() {
        let data = MessageData {
            r#type: MessageType::CastAdd as i32,
            fid: 1,
            timestamp: 0,
            network: FarcasterNetwork::Mainnet as i32,
            body: Some(message_data::Body::CastAddBody(CastAddBody {
                text: "a".to_string(),
                ..Default::default()
            })),
        };
        let bytes = data.encode_to_vec();
        // type=1, fid=1, network=1, then field 5 length-delimited
        assert_eq!(hex::encode(&bytes), "0801100120012a03220161");
    }

    #[test]
    fn test_unset_data_is_omitted() {
        let message = Message {
            hash: vec![0xAB],
            data_bytes: Some(vec![]),
            ..Default::default()
        };
        let bytes = message.encode_to_vec();
        assert_eq!(hex::encode(bytes), "1201ab3a00");
    }
}
