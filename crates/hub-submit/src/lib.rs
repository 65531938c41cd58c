//! # Hub Submit
//!
//! Builds signed hub messages and posts them to a hub's HTTP API.
//!
//! ## Architecture
//!
//! Hexagonal layout:
//! - **Domain Layer** (`domain/`): Body construction, validation, hashing, signing. No I/O
//! - **Ports Layer** (`ports/`): `MessageSubmissionApi` in, `MessageSubmitter` out
//! - **Adapters** (`adapters/`): reqwest HTTP submitter and an in-memory recorder
//! - **Service Layer** (`service.rs`): Wires a signer and a submitter together
//!
//! ## Flow
//!
//! ```text
//! MessageBody ──build──→ MessageData ──encode──→ data_bytes
//!                                                   │
//!                                         BLAKE3-20 │
//!                                                   ↓
//!                              signer ──Ed25519──→ hash + signature
//!                                                   │
//!                                                   ↓
//!                                  Message envelope ──POST──→ hub
//! ```
//!
//! A submission is a single request. Anything other than HTTP 200 is an
//! error and nothing is retried.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;
pub mod telemetry;

// Re-export public API
pub use adapters::{HttpSubmitter, RecordingSubmitter};
pub use config::{ConfigError, SubmitConfig};
pub use domain::{
    build_message_data, build_message_data_at_offset, compute_hash, seal, validate_message_data,
    verify_envelope, MessageBody, MessageSigner, SealedEnvelope, SubmissionReceipt, SubmitError,
    ValidationError,
};
pub use ports::inbound::MessageSubmissionApi;
pub use ports::outbound::{MessageSubmitter, SubmitResponse, TransportError};
pub use service::SubmissionService;
pub use telemetry::{init_logging, LogConfig};
