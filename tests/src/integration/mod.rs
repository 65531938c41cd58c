//! Integration tests.

pub mod e2e_submit;
pub mod golden;
pub mod http_adapter;

use hub_submit::{build_message_data_at_offset, MessageBody};
use shared_crypto::Ed25519KeyPair;
use shared_types::{FarcasterNetwork, MessageData};

/// RFC 8032 section 7.1 TEST 1 secret key.
pub const RFC_SEED: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";

/// Public key for [`RFC_SEED`].
pub const RFC_PUBLIC_KEY: &str =
    "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

pub const GOLDEN_FID: u64 = 6833;
pub const GOLDEN_TEXT: &str = "Welcome to Go!";
pub const GOLDEN_TIMESTAMP: u32 = 97_631_842;

/// Envelope for the golden inputs, hex encoded.
pub const GOLDEN_ENVELOPE_HEX: &str = include_str!("../../fixtures/golden_envelope.hex");

pub fn golden_signer() -> Ed25519KeyPair {
    Ed25519KeyPair::from_hex_seed(RFC_SEED).expect("RFC seed is valid")
}

pub fn golden_data() -> MessageData {
    build_message_data_at_offset(
        GOLDEN_FID,
        MessageBody::text(GOLDEN_TEXT),
        GOLDEN_TIMESTAMP,
        FarcasterNetwork::Mainnet,
    )
    .expect("golden inputs are valid")
}

pub fn golden_envelope() -> Vec<u8> {
    hex::decode(GOLDEN_ENVELOPE_HEX.trim()).expect("fixture is hex")
}
