//! ARM and Thumb instruction decoder library.
//!
//! This crate turns declarative instruction descriptors into compact decode
//! tables and decodes instruction words with them:
//! 1. **Encoding:** Descriptors, bit pieces, operand slots, and constraints.
//! 2. **Trie:** Decision trees over fixed bits with specific-beats-generic fallback.
//! 3. **Bytecode:** Emission of the trees into a linear program and its artifact format.
//! 4. **Decode:** The interpreter, immediate expansion, and decoded records.
//! 5. **ISA:** The built-in ARM and Thumb descriptor tables.
//!
//! # Examples
//!
//! ```
//! use armdec_core::isa;
//!
//! let decoder = isa::arm::decoder().unwrap();
//! let insn = decoder.decode(0xE281_0004).unwrap();
//! assert_eq!(decoder.mnemonic(&insn), "ADD");
//! assert_eq!(insn.imm, Some(4));
//! ```

/// Program emission and artifact format.
pub mod bytecode;
/// Errors and bit helpers.
pub mod common;
/// Build configuration (per-family dispatch and widths).
pub mod config;
/// Interpreter, decoder, and decoded records.
pub mod decode;
/// Descriptor model.
pub mod encoding;
/// Built-in ARM and Thumb tables.
pub mod isa;
/// Decision-trie builder.
pub mod trie;

/// Root configuration type; use `Config::default()` or parse it from JSON.
pub use crate::config::Config;
/// Compiled decoder for one family.
pub use crate::decode::{DecodedInstruction, Decoder};
/// Descriptor model types.
pub use crate::encoding::{BitField, Field, InstructionDescriptor};
/// Compiled program.
pub use crate::bytecode::Program;
/// Error types.
pub use crate::common::error::{BuildError, DecodeError};
