//! Builders used by tests to create descriptors and matching words.

/// Descriptors written as bit patterns.
pub mod pattern;

/// Words that satisfy a descriptor's fixed bits.
pub mod word;
