//! # End-to-End Submission
//!
//! Service → submitter → receiver. The recorder stands in for the hub and
//! every captured body is checked the way a hub would check it.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use hub_submit::{
        build_message_data, verify_envelope, MessageBody, MessageSubmissionApi,
        RecordingSubmitter, SubmissionService, SubmitError,
    };
    use shared_crypto::Ed25519KeyPair;
    use shared_types::wire::{CastId, ReactionType, UserDataType};
    use shared_types::{decode_message, farcaster_time_now, FarcasterNetwork, MessageType};
    use tokio::sync::watch;

    use crate::integration::{golden_data, golden_envelope, golden_signer, RFC_PUBLIC_KEY};

    #[tokio::test]
    async fn test_golden_submission_bytes() {
        let recorder = RecordingSubmitter::accepting();
        let service = SubmissionService::new(recorder.clone(), golden_signer());

        let receipt = service.submit(golden_data()).await.unwrap();

        assert_eq!(recorder.bodies(), vec![golden_envelope()]);
        assert_eq!(receipt.hash_hex, "0x0eeb75704be4c0d87807eae9362daf71771efde1");
        assert_eq!(receipt.status, 200);
        assert_eq!(receipt.envelope_len, 158);
    }

    #[tokio::test]
    async fn test_receipt_serializes() {
        let service = SubmissionService::new(RecordingSubmitter::accepting(), golden_signer());
        let receipt = service.submit(golden_data()).await.unwrap();

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["status"], 200);
        assert_eq!(json["envelope_len"], 158);
        assert_eq!(json["hash_hex"], "0x0eeb75704be4c0d87807eae9362daf71771efde1");
    }

    #[tokio::test]
    async fn test_rejection_reports_status() {
        let recorder = RecordingSubmitter::with_status(400);
        let service = SubmissionService::new(recorder.clone(), golden_signer());

        let err = service.submit(golden_data()).await.unwrap_err();

        assert!(matches!(err, SubmitError::NonSuccessStatus { status: 400 }));
        // The body was still sent exactly once.
        assert_eq!(recorder.bodies(), vec![golden_envelope()]);
    }

    #[tokio::test]
    async fn test_every_body_type_passes_receiver_checks() {
        let recorder = RecordingSubmitter::accepting();
        let keypair = Ed25519KeyPair::generate();
        let signer_key = keypair.public_key().as_bytes().to_vec();
        let service = SubmissionService::new(recorder.clone(), keypair);

        let target = CastId {
            fid: 2,
            hash: vec![0xAB; 20],
        };
        let bodies = vec![
            MessageBody::text("gm"),
            MessageBody::cast(
                "with embed",
                vec!["https://example.com".to_string()],
                Some("https://example.com/channel".to_string()),
            ),
            MessageBody::remove_cast(vec![0xCD; 20]),
            MessageBody::react(ReactionType::Like, target.clone()),
            MessageBody::unreact(ReactionType::Recast, target),
            MessageBody::user_data(UserDataType::Username, "alice"),
        ];
        let expected_types: Vec<MessageType> = bodies.iter().map(|b| b.message_type()).collect();

        for body in bodies {
            let data = build_message_data(
                42,
                body,
                chrono::Utc::now(),
                FarcasterNetwork::Testnet,
            )
            .unwrap();
            service.submit(data).await.unwrap();
        }

        let recorded = recorder.bodies();
        assert_eq!(recorded.len(), expected_types.len());
        for (bytes, expected_type) in recorded.iter().zip(expected_types) {
            let message = decode_message(bytes).unwrap();
            assert_eq!(message.signer, signer_key);

            let data = verify_envelope(&message).unwrap();
            assert_eq!(data.fid, 42);
            assert_eq!(data.r#type, expected_type as i32);
            assert_eq!(data.network, FarcasterNetwork::Testnet as i32);
            assert!(data.timestamp <= farcaster_time_now().unwrap());
        }
    }

    #[tokio::test]
    async fn test_seal_matches_submitted_bytes() {
        let recorder = RecordingSubmitter::accepting();
        let service = SubmissionService::new(recorder.clone(), golden_signer());

        let sealed = service.seal(&golden_data()).unwrap();
        service.submit(golden_data()).await.unwrap();

        assert_eq!(recorder.bodies(), vec![sealed.bytes]);
        assert_eq!(hex::encode(&sealed.message.signer), RFC_PUBLIC_KEY);
    }

    #[tokio::test]
    async fn test_shutdown_before_submit_sends_nothing() {
        let recorder = RecordingSubmitter::accepting();
        let service = SubmissionService::new(recorder.clone(), golden_signer());
        let (tx, rx) = watch::channel(false);
        tx.send(true).unwrap();

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            service.submit_until(golden_data(), rx),
        )
        .await
        .unwrap();

        assert!(matches!(result, Err(SubmitError::Cancelled)));
        assert_eq!(recorder.request_count(), 0);
    }
}
