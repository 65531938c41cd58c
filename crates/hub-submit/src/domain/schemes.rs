//! # Hash and Signature Schemes
//!
//! The envelope names its algorithms explicitly, so hashing and signing are
//! selected by scheme tag rather than assumed.

use shared_crypto::{blake3_20, Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
use shared_types::{HashScheme, SignatureScheme};

use super::errors::SubmitError;

/// Compute the content hash of `bytes` under `scheme`.
pub fn compute_hash(scheme: HashScheme, bytes: &[u8]) -> Result<Vec<u8>, SubmitError> {
    match scheme {
        HashScheme::Blake3 => Ok(blake3_20(bytes).to_vec()),
        HashScheme::None => Err(SubmitError::UnsupportedHashScheme(scheme as i32)),
    }
}

/// Produces signatures over content hashes.
///
/// Implementations must be deterministic for a given key and hash.
pub trait MessageSigner: Send + Sync {
    /// Tag written to `signature_scheme`.
    fn scheme(&self) -> SignatureScheme;

    /// Sign a content hash.
    fn sign_hash(&self, hash: &[u8]) -> Vec<u8>;

    /// Public key written to `signer`.
    fn signer_key(&self) -> Vec<u8>;
}

impl MessageSigner for Ed25519KeyPair {
    fn scheme(&self) -> SignatureScheme {
        SignatureScheme::Ed25519
    }

    fn sign_hash(&self, hash: &[u8]) -> Vec<u8> {
        self.sign(hash).as_bytes().to_vec()
    }

    fn signer_key(&self) -> Vec<u8> {
        self.public_key().as_bytes().to_vec()
    }
}

/// Check `signature` over `hash` for the declared scheme.
pub fn verify_signature(
    scheme: SignatureScheme,
    signer: &[u8],
    hash: &[u8],
    signature: &[u8],
) -> Result<(), SubmitError> {
    match scheme {
        SignatureScheme::Ed25519 => {
            let public_key = Ed25519PublicKey::from_slice(signer)
                .map_err(|e| SubmitError::InvalidSignature(format!("signer: {e}")))?;
            let signature = Ed25519Signature::from_slice(signature)?;
            public_key.verify(hash, &signature)?;
            Ok(())
        }
        SignatureScheme::Eip712 | SignatureScheme::None => {
            Err(SubmitError::UnsupportedSignatureScheme(scheme as i32))
        }
    }
}
