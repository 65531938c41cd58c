//! # BLAKE3 Content Hashing
//!
//! Message hashes are the first 20 bytes of the BLAKE3 extendable output
//! over the encoded message body.
//!
//! ## Properties
//!
//! - Output length is fixed regardless of input size
//! - Truncation is a prefix of the XOF stream, so it matches
//!   `blake3(data, dkLen = 20)` in other implementations

/// Length of a content hash in bytes.
pub const CONTENT_HASH_LENGTH: usize = 20;

/// Truncated BLAKE3 digest identifying a message body.
pub type ContentHash = [u8; CONTENT_HASH_LENGTH];

/// Hash data with BLAKE3 and keep 20 bytes.
pub fn blake3_20(data: &[u8]) -> ContentHash {
    let mut hasher = blake3::Hasher::new();
    hasher.update(data);

    let mut output = [0u8; CONTENT_HASH_LENGTH];
    hasher.finalize_xof().fill(&mut output);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_input_vector() {
        // Prefix of the published BLAKE3 digest of the empty string
        assert_eq!(
            hex::encode(blake3_20(b"")),
            "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9"
        );
    }

    #[test]
    fn test_prefix_of_full_digest() {
        let full = blake3::hash(b"abc");
        assert_eq!(&blake3_20(b"abc")[..], &full.as_bytes()[..CONTENT_HASH_LENGTH]);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(blake3_20(b"test"), blake3_20(b"test"));
    }

    #[test]
    fn test_different_inputs() {
        assert_ne!(blake3_20(b"input1"), blake3_20(b"input2"));
    }

    proptest! {
        #[test]
        fn prop_always_twenty_bytes(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
            prop_assert_eq!(blake3_20(&data).len(), 20);
        }
    }
}
