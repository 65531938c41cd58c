//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that callers use to seal and submit
//! - **Outbound (Driven)**: The transport a sealed envelope leaves through

pub mod inbound;
pub mod outbound;
