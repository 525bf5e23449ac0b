//! Bytecode program: opcodes, family layout, emitter, and artifact format.
//!
//! This module turns descriptors into the tables the interpreter executes:
//! 1. **Layout:** Constraint expansion, root dispatch, and trie construction.
//! 2. **Emitter:** Linearisation of the tries into an op stream and a branch-target table.
//! 3. **Program:** The immutable result, serializable to a byte buffer.

/// Bytecode emitter.
pub mod emit;

/// Family layout and root dispatch.
pub mod layout;

/// Opcodes and operand layouts.
pub mod opcode;

/// Compiled program and artifact format.
pub mod program;

pub use emit::{compile, emit};
pub use layout::{FamilyLayout, Roots};
pub use opcode::Opcode;
pub use program::Program;
