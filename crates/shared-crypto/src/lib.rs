//! # Shared Crypto - Message Hashing and Signing
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | BLAKE3 (20-byte output) | Content hash of an encoded message body |
//! | `signatures` | Ed25519 | Signing content hashes, verifying envelopes |
//!
//! ## Security Properties
//!
//! - **Ed25519**: Deterministic nonces, no RNG dependency, strict verification
//! - **BLAKE3**: Truncated XOF output, fixed 20-byte length

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod signatures;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{blake3_20, ContentHash, CONTENT_HASH_LENGTH};
pub use signatures::{
    public_key_from_seed, Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature, SEED_LENGTH,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
