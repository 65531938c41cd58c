//! # HTTP Adapter Against a Local Hub
//!
//! A throwaway axum server on `127.0.0.1:0` plays the hub and captures what
//! the reqwest adapter actually puts on the wire.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Bytes;
    use axum::extract::State;
    use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use parking_lot::Mutex;

    use hub_submit::{
        HttpSubmitter, MessageSubmissionApi, MessageSubmitter, SubmissionService, SubmitError,
        TransportError,
    };

    use crate::integration::{golden_data, golden_envelope, golden_signer};

    #[derive(Clone, Debug)]
    struct Captured {
        content_type: Option<String>,
        has_authorization: bool,
        body: Vec<u8>,
    }

    #[derive(Clone)]
    struct HubState {
        status: StatusCode,
        captured: Arc<Mutex<Vec<Captured>>>,
    }

    async fn submit_message(
        State(state): State<HubState>,
        headers: HeaderMap,
        body: Bytes,
    ) -> (StatusCode, &'static str) {
        state.captured.lock().push(Captured {
            content_type: headers
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned),
            has_authorization: headers.contains_key(AUTHORIZATION),
            body: body.to_vec(),
        });
        (state.status, "{\"ok\":true}")
    }

    async fn stall() -> StatusCode {
        tokio::time::sleep(Duration::from_secs(10)).await;
        StatusCode::OK
    }

    /// Start a hub answering `status`; returns its base URL and capture log.
    async fn spawn_hub(status: StatusCode) -> (String, Arc<Mutex<Vec<Captured>>>) {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = HubState {
            status,
            captured: Arc::clone(&captured),
        };
        let app = Router::new()
            .route("/v1/submitMessage", post(submit_message))
            .route("/slow", post(stall))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}"), captured)
    }

    fn submitter(url: String) -> HttpSubmitter {
        HttpSubmitter::new(url, Duration::from_secs(5), Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn test_posts_raw_envelope_as_octet_stream() {
        let (base, captured) = spawn_hub(StatusCode::OK).await;
        let service = SubmissionService::new(
            submitter(format!("{base}/v1/submitMessage")),
            golden_signer(),
        );

        let receipt = service.submit(golden_data()).await.unwrap();
        assert_eq!(receipt.status, 200);

        let captured = captured.lock().clone();
        assert_eq!(captured.len(), 1);
        assert_eq!(
            captured[0].content_type.as_deref(),
            Some("application/octet-stream")
        );
        assert!(!captured[0].has_authorization);
        assert_eq!(captured[0].body, golden_envelope());
    }

    #[tokio::test]
    async fn test_bad_request_is_not_retried() {
        let (base, captured) = spawn_hub(StatusCode::BAD_REQUEST).await;
        let service = SubmissionService::new(
            submitter(format!("{base}/v1/submitMessage")),
            golden_signer(),
        );

        let err = service.submit(golden_data()).await.unwrap_err();

        assert!(matches!(err, SubmitError::NonSuccessStatus { status: 400 }));
        assert_eq!(captured.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_other_success_codes_are_errors() {
        let (base, _captured) = spawn_hub(StatusCode::ACCEPTED).await;
        let service = SubmissionService::new(
            submitter(format!("{base}/v1/submitMessage")),
            golden_signer(),
        );

        assert!(matches!(
            service.submit(golden_data()).await,
            Err(SubmitError::NonSuccessStatus { status: 202 })
        ));
    }

    #[tokio::test]
    async fn test_unknown_route_reports_404() {
        let (base, _captured) = spawn_hub(StatusCode::OK).await;
        let response = submitter(format!("{base}/v1/nope"))
            .submit(vec![1, 2, 3])
            .await
            .unwrap();
        assert_eq!(response.status, 404);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_slow_hub_times_out() {
        let (base, _captured) = spawn_hub(StatusCode::OK).await;
        let submitter = HttpSubmitter::new(
            format!("{base}/slow"),
            Duration::from_millis(200),
            Duration::from_secs(2),
        )
        .unwrap();

        let result = submitter.submit(golden_envelope()).await;
        assert!(matches!(result, Err(TransportError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_closed_port_is_connect_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = submitter(format!("http://{addr}/v1/submitMessage"))
            .submit(golden_envelope())
            .await;
        assert!(matches!(result, Err(TransportError::Connect(_))));
    }
}
