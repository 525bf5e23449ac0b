//! Bytecode interpreter.
//!
//! Walks a [`Program`] against one word. Every step reads one op at the
//! current offset, updates the in-progress record or the immediate
//! accumulator, and moves to the next op or to a branch target.
//!
//! A correctly emitted program never jumps out of range, never meets an
//! unknown opcode, and never executes more ops than it contains. Any of
//! those is a table defect: it panics in debug builds and is reported as an
//! undefined instruction otherwise.

use super::expand::{adv_simd_expand_imm, arm_expand_imm, thumb_expand_imm};
use super::instruction::DecodedInstruction;
use crate::bytecode::{Opcode, Program};
use crate::common::bits;
use crate::common::error::DecodeError;
use crate::encoding::Field;

/// Runs `program` against `word`.
///
/// # Arguments
///
/// * `program` - The compiled tables.
/// * `word` - Instruction word (mixed-width families: `hw1 << 16 | hw2`).
///
/// # Returns
///
/// The decoded record, or `DecodeError::Undefined` if no encoding matches.
pub fn run(program: &Program, word: u32) -> Result<DecodedInstruction, DecodeError> {
    Machine { ops: program.ops(), targets: program.branch_targets(), word }.run()
}

struct Machine<'a> {
    ops: &'a [u8],
    targets: &'a [u16],
    word: u32,
}

impl Machine<'_> {
    fn run(&self) -> Result<DecodedInstruction, DecodeError> {
        let mut insn = DecodedInstruction::new(self.word);
        let mut imm: u64 = 0;
        let mut has_imm = false;
        let mut pc = 0usize;

        for _ in 0..=self.ops.len() {
            let Some(opcode) = self.ops.get(pc).copied().and_then(Opcode::from_byte) else {
                return Err(self.defect("bad opcode", pc));
            };
            let Some(args) = self.ops.get(pc + 1..pc + opcode.size()) else {
                return Err(self.defect("truncated op", pc));
            };
            let next = pc + opcode.size();

            pc = match opcode {
                Opcode::Fail => return Err(DecodeError::Undefined { word: self.word }),
                Opcode::ReturnOk => {
                    if has_imm {
                        insn.imm = Some(imm);
                    }
                    return Ok(insn);
                }
                Opcode::Step => {
                    let bit = bits::extract(self.word, u32::from(args[0]), 1);
                    self.target(lut(args[1], args[2]) + bit as usize, pc)?
                }
                Opcode::CmpNibble => {
                    let nibble = bits::extract(self.word, u32::from(args[0]), 4);
                    let equal = nibble == u32::from(args[1]);
                    self.target(lut(args[2], args[3]) + usize::from(equal), pc)?
                }
                Opcode::Lookup => {
                    let index = bits::extract(self.word, u32::from(args[0]), u32::from(args[1]));
                    self.target(lut(args[2], args[3]) + index as usize, pc)?
                }
                Opcode::SetMnemonic => {
                    insn.mnemonic = u16::from_le_bytes([args[0], args[1]]);
                    insn.width = args[2];
                    next
                }
                Opcode::Extract => {
                    let field = self.field(args[0], pc)?;
                    insn.set(field, self.bits(args[1], args[2]));
                    next
                }
                Opcode::ExtractScattered => {
                    let field = self.field(args[0], pc)?;
                    insn.merge(field, self.bits(args[1], args[2]) << args[3]);
                    next
                }
                Opcode::ExtractImmediate => {
                    imm |= u64::from(self.bits(args[0], args[1]));
                    has_imm = true;
                    next
                }
                Opcode::ExtractImmediateAt => {
                    imm |= u64::from(self.bits(args[0], args[1])) << args[2];
                    has_imm = true;
                    next
                }
                Opcode::SignExtend => {
                    imm = bits::sign_extend(imm, u32::from(args[0]));
                    next
                }
                Opcode::BranchNotXor => {
                    let j = u64::from(self.bits(args[0], 1));
                    let s = (imm >> args[2]) & 1;
                    imm |= ((j ^ s) ^ 1) << args[1];
                    has_imm = true;
                    next
                }
                Opcode::Assign => {
                    let field = self.field(args[0], pc)?;
                    insn.set(field, u32::from(u16::from_le_bytes([args[1], args[2]])));
                    next
                }
                Opcode::ExpandImmediateArm => {
                    let (value, carry) = arm_expand_imm((imm & 0xFFF) as u32);
                    imm = u64::from(value);
                    insn.carry = carry;
                    next
                }
                Opcode::ExpandImmediateThumb => {
                    let (value, carry) = thumb_expand_imm((imm & 0xFFF) as u32);
                    imm = u64::from(value);
                    insn.carry = carry;
                    next
                }
                Opcode::ExpandImmediateSimd => {
                    let op = insn.get(Field::Op).unwrap_or(0);
                    let cmode = insn.get(Field::Cmode).unwrap_or(0);
                    let Some(value) = adv_simd_expand_imm(op, cmode, (imm & 0xFF) as u32) else {
                        return Err(DecodeError::Undefined { word: self.word });
                    };
                    imm = value;
                    next
                }
            };
        }
        Err(self.defect("step budget exhausted", pc))
    }

    #[inline]
    fn bits(&self, shift: u8, width: u8) -> u32 {
        bits::extract(self.word, u32::from(shift), u32::from(width))
    }

    fn target(&self, index: usize, pc: usize) -> Result<usize, DecodeError> {
        match self.targets.get(index) {
            Some(&target) => Ok(usize::from(target)),
            None => Err(self.defect("branch target out of range", pc)),
        }
    }

    fn field(&self, slot: u8, pc: usize) -> Result<Field, DecodeError> {
        Field::from_index(usize::from(slot)).ok_or_else(|| self.defect("bad field slot", pc))
    }

    /// Reports a table defect.
    fn defect(&self, what: &str, pc: usize) -> DecodeError {
        if cfg!(debug_assertions) {
            panic!("decode program defect at op {pc}: {what} (word {:#010x})", self.word);
        }
        tracing::error!(pc, word = self.word, what, "decode program defect");
        DecodeError::Undefined { word: self.word }
    }
}

#[inline]
fn lut(lo: u8, hi: u8) -> usize {
    usize::from(u16::from_le_bytes([lo, hi]))
}
