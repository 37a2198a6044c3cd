//! Capability-negotiated bridge between a completion assistant and a
//! language analysis backend.
//!
//! The bridge registers a resolver with the assistant's runtime once at
//! startup, after checking that the backend declares the bridging
//! protocol at the one supported version. Each later resolve request is
//! translated from the assistant's URI + byte-offset shape into the
//! backend's document-identifier/position shape and forwarded with its
//! cancellation token; results pass through unmodified.

pub mod bridge;
pub mod config;
pub mod document;
pub mod host;
pub mod log;
