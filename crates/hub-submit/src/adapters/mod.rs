//! # Adapters Layer
//!
//! Concrete implementations of the outbound ports.
//!
//! - `http` posts envelopes to a hub over HTTP(S)
//! - `recording` keeps envelopes in memory for tests and dry runs

pub mod http;
pub mod recording;

pub use http::HttpSubmitter;
pub use recording::RecordingSubmitter;
