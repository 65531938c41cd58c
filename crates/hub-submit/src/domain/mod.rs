//! # Domain Layer
//!
//! Pure message construction: no I/O.

pub mod builder;
pub mod entities;
pub mod envelope;
pub mod errors;
pub mod schemes;
pub mod validation;

pub use builder::{build_message_data, build_message_data_at_offset};
pub use entities::{MessageBody, SealedEnvelope, SubmissionReceipt};
pub use envelope::{seal, verify_envelope};
pub use errors::{SubmitError, ValidationError};
pub use schemes::{compute_hash, verify_signature, MessageSigner};
pub use validation::validate_message_data;
