//! Common utilities and types shared across the decoder.
//!
//! It includes:
//! 1. **Error Handling:** Build, decode, artifact, and configuration errors.
//! 2. **Bit Helpers:** Extraction, sign extension, and lane replication.

/// Bit manipulation helpers.
pub mod bits;

/// Error types for every stage of the pipeline.
pub mod error;

pub use error::{ArtifactError, BuildError, ConfigError, DecodeError, MalformedKind};
