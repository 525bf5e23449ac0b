//! Encoding descriptor model.
//!
//! This module provides the declarative vocabulary instruction tables are written in:
//! 1. **Fields:** The closed set of operand slots a decoded instruction can carry.
//! 2. **Pieces:** Constant bits, operand bits, immediate pieces, and derived assignments.
//! 3. **Descriptors:** A mnemonic plus an ordered list of pieces summing to 16 or 32 bits,
//!    optionally restricted by per-field value constraints.
//!
//! Descriptors are validated and constraint-expanded before they reach the
//! trie builder.

/// Pieces of an encoding.
pub mod bitfield;

/// Descriptors, constraints, and constraint expansion.
pub mod descriptor;

/// Operand slots.
pub mod field;

pub use bitfield::BitField;
pub use descriptor::{Constraint, Expansion, FixedBits, InstructionDescriptor};
pub use field::Field;
