//! Decoding: the interpreter and the records it produces.
//!
//! This module is the runtime half of the crate. It provides:
//! 1. **Decoder:** A compiled program paired with its family configuration.
//! 2. **Interpreter:** Execution of a program against one instruction word.
//! 3. **Expansion:** Modified-immediate and shift pseudocode.
//! 4. **Records:** `DecodedInstruction` and its typed operand views.

/// Immediate expansion and shift decoding.
pub mod expand;

/// Decoded instruction record.
pub mod instruction;

/// Bytecode interpreter.
pub mod interpreter;

pub use expand::ShiftKind;
pub use instruction::{Condition, DecodedInstruction, Shift};

use crate::bytecode::{self, Program};
use crate::common::error::{BuildError, DecodeError};
use crate::config::FamilyConfig;
use crate::encoding::InstructionDescriptor;

/// A compiled decoder for one encoding family.
///
/// Built once from descriptors (or loaded from an artifact) and then shared
/// read-only; decoding never mutates it.
#[derive(Clone, Debug)]
pub struct Decoder {
    program: Program,
    family: FamilyConfig,
}

impl Decoder {
    /// Compiles `descriptors` into a decoder.
    ///
    /// # Arguments
    ///
    /// * `descriptors` - Authored descriptors of one family.
    /// * `family` - Root dispatch and accepted widths.
    ///
    /// # Returns
    ///
    /// The decoder, or the first `BuildError` found in the tables.
    pub fn build(
        descriptors: &[InstructionDescriptor],
        family: &FamilyConfig,
    ) -> Result<Self, BuildError> {
        Self::build_traced(descriptors, family, false)
    }

    /// Like [`Decoder::build`], logging every descriptor expansion when `trace` is set.
    pub fn build_traced(
        descriptors: &[InstructionDescriptor],
        family: &FamilyConfig,
        trace: bool,
    ) -> Result<Self, BuildError> {
        let program = bytecode::compile(descriptors, family, trace)?;
        Ok(Self { program, family: family.clone() })
    }

    /// Wraps an already compiled (for example deserialized) program.
    pub const fn from_program(program: Program, family: FamilyConfig) -> Self {
        Self { program, family }
    }

    /// Decodes one instruction word.
    ///
    /// For mixed-width families the word is `hw1 << 16 | hw2`; a narrow
    /// encoding only looks at the top halfword.
    pub fn decode(&self, word: u32) -> Result<DecodedInstruction, DecodeError> {
        interpreter::run(&self.program, word)
    }

    /// Decodes from one or two halfwords of a mixed-width stream.
    ///
    /// # Arguments
    ///
    /// * `hw1` - The leading halfword.
    /// * `hw2` - The following halfword, if the stream has one.
    ///
    /// # Returns
    ///
    /// The decoded record, `DecodeError::Truncated` when a wide encoding is
    /// missing its second halfword, or `DecodeError::Undefined`.
    pub fn decode_halfwords(
        &self,
        hw1: u16,
        hw2: Option<u16>,
    ) -> Result<DecodedInstruction, DecodeError> {
        if self.family.word_width() == 16 {
            return self.decode(u32::from(hw1));
        }
        if hw2.is_none() && self.family.is_wide(hw1) {
            return Err(DecodeError::Truncated { halfword: hw1 });
        }
        let word = (u32::from(hw1) << 16) | u32::from(hw2.unwrap_or(0));
        let insn = self.decode(word)?;
        if hw2.is_none() && u32::from(insn.width) > 16 {
            return Err(DecodeError::Truncated { halfword: hw1 });
        }
        Ok(insn)
    }

    /// Mnemonic of a decoded record (empty if the index is unknown).
    pub fn mnemonic(&self, insn: &DecodedInstruction) -> &str {
        self.program.mnemonic(insn.mnemonic).unwrap_or_default()
    }

    /// The compiled program.
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// The family configuration the program was compiled for.
    pub const fn family(&self) -> &FamilyConfig {
        &self.family
    }
}
