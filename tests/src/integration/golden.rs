//! # Golden Envelope Regression
//!
//! Fixed inputs must produce the exact envelope in
//! `fixtures/golden_envelope.hex`. Any byte change here means hubs and other
//! clients would disagree about hashes or signatures.
//!
//! Inputs: fid 6833, mainnet, cast "Welcome to Go!", offset 97631842,
//! RFC 8032 TEST 1 signing key.

#[cfg(test)]
mod tests {
    use hub_submit::{seal, verify_envelope};
    use shared_types::{decode_message, HashScheme, SignatureScheme};

    use crate::integration::{
        golden_data, golden_envelope, golden_signer, GOLDEN_FID, RFC_PUBLIC_KEY,
    };

    #[test]
    fn test_envelope_matches_fixture() {
        let sealed = seal(&golden_data(), HashScheme::Blake3, &golden_signer()).unwrap();
        assert_eq!(hex::encode(&sealed.bytes), hex::encode(golden_envelope()));
    }

    #[test]
    fn test_fixture_components() {
        let message = decode_message(&golden_envelope()).unwrap();

        assert!(message.data.is_none());
        assert_eq!(
            hex::encode(message.data_bytes.as_deref().unwrap()),
            "080110b13518e2fcc62e20012a10220e57656c636f6d6520746f20476f21"
        );
        assert_eq!(
            hex::encode(&message.hash),
            "0eeb75704be4c0d87807eae9362daf71771efde1"
        );
        assert_eq!(message.hash_scheme, HashScheme::Blake3 as i32);
        assert_eq!(message.signature_scheme, SignatureScheme::Ed25519 as i32);
        assert_eq!(hex::encode(&message.signer), RFC_PUBLIC_KEY);
    }

    #[test]
    fn test_fixture_verifies() {
        let message = decode_message(&golden_envelope()).unwrap();
        let data = verify_envelope(&message).unwrap();

        assert_eq!(data, golden_data());
        assert_eq!(data.fid, GOLDEN_FID);
    }

    #[test]
    fn test_field_order_is_canonical() {
        let bytes = golden_envelope();
        // hash (field 2) leads; data_bytes (field 7) trails with the body.
        assert_eq!(bytes[0], 0x12);
        let body_start = bytes.len() - 30;
        assert_eq!(&bytes[body_start - 2..body_start], &[0x3a, 0x1e]);
    }

    #[test]
    fn test_any_flipped_body_bit_is_caught() {
        let original = golden_envelope();
        let body_start = original.len() - 30;

        for index in body_start..original.len() {
            let mut bytes = original.clone();
            bytes[index] ^= 0x80;
            if let Ok(message) = decode_message(&bytes) {
                assert!(
                    verify_envelope(&message).is_err(),
                    "flip at byte {index} went unnoticed"
                );
            }
        }
    }
}
