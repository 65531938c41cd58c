//! # Hub-Submit Test Suite
//!
//! Cross-crate tests that need more than one crate or a live socket.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── fixtures/
//! │   └── golden_envelope.hex   # Reference envelope bytes
//! └── src/integration/
//!     ├── golden.rs             # Byte-exact regression against the fixture
//!     ├── e2e_submit.rs         # Service → submitter → receiver verification
//!     └── http_adapter.rs       # reqwest adapter against a local axum hub
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p hub-tests
//! cargo test -p hub-tests integration::http_adapter::
//! ```

#![allow(dead_code)]

pub mod integration;
