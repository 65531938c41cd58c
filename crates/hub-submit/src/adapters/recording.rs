//! In-memory submitter that records every posted body.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::ports::outbound::{MessageSubmitter, SubmitResponse, TransportError};

/// Records bodies and answers with a fixed status.
///
/// Clones share the same record.
#[derive(Clone)]
pub struct RecordingSubmitter {
    status: u16,
    bodies: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl RecordingSubmitter {
    /// A submitter that accepts everything with 200.
    pub fn accepting() -> Self {
        Self::with_status(200)
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            bodies: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Bodies received so far, in order.
    pub fn bodies(&self) -> Vec<Vec<u8>> {
        self.bodies.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.bodies.lock().len()
    }
}

impl Default for RecordingSubmitter {
    fn default() -> Self {
        Self::accepting()
    }
}

#[async_trait::async_trait]
impl MessageSubmitter for RecordingSubmitter {
    async fn submit(&self, body: Vec<u8>) -> Result<SubmitResponse, TransportError> {
        self.bodies.lock().push(body);
        Ok(SubmitResponse {
            status: self.status,
        })
    }
}
