//! Built-in instruction tables.
//!
//! Descriptor tables for the two ARMv7-A instruction sets, each with a lazily
//! compiled shared decoder.
//!
//! # Families
//!
//! * `arm`: A32, fixed 32-bit encodings dispatched on the condition nibble.
//! * `thumb`: T32, mixed 16/32-bit encodings dispatched on the leading five bits.

/// ARM (A32) table.
pub mod arm;

/// Thumb (T32) table.
pub mod thumb;

mod pieces;
