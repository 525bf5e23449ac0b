//! Shared helpers for the decoder tests.

/// Builders for synthetic descriptors and encoded words.
pub mod builder;

/// Decoder instances and logging setup.
pub mod harness;
