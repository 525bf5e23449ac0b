//! Thumb (T32) encoding table.
//!
//! 16-bit Thumb and 32-bit Thumb-2 encodings of ARMv7-A. A 32-bit encoding is
//! decoded as `hw1 << 16 | hw2`, and a 16-bit encoding occupies the top
//! halfword of that word, so both widths share one offset convention.
//!
//! The five leading bits pick the width: `11101`, `11110`, and `11111`
//! introduce a 32-bit encoding, everything else is 16 bits.

use std::sync::OnceLock;

use super::pieces::{
    COND, E, I, IMM5, IMM8, IMM12, M, MASK, MSB, N, O, OPTION, P, PC_RN, R, RA, RD, RDHI, RDLO,
    REGLIST, RM, RN, ROTATE, RT, RT2, S, SAT4, SAT5, SH, SP_RD, SP_RN, TYPE, U, W, WIDTHM1,
};
use crate::common::error::BuildError;
use crate::config::Config;
use crate::decode::Decoder;
use crate::encoding::{BitField as B, Expansion, Field, InstructionDescriptor as Desc};

const FIRSTCOND: B = B::plain(Field::FirstCond, 4);
const ITMASK: B = B::plain(Field::ItMask, 4);
const REGLIST8: B = B::plain(Field::RegisterList, 8);
const SHIFT2: B = B::plain(Field::ShiftAmount, 2);
const SHIFT3: B = B::plain_at(Field::ShiftAmount, 3, 2);

// Low registers.
const RD3: B = B::reg(Field::Rd, 3);
const RN3: B = B::reg(Field::Rn, 3);
const RM3: B = B::reg(Field::Rm, 3);
const RT3: B = B::reg(Field::Rt, 3);
const RDN3: B = B::double(Field::Rd, Field::Rn, 3, 0);
const RDM3: B = B::double(Field::Rd, Field::Rm, 3, 0);

// High-register bit of the two-operand forms.
const DN: B = B::double(Field::Rd, Field::Rn, 1, 3);
const DM: B = B::double(Field::Rd, Field::Rm, 1, 3);

const IMM2: B = B::imm(2);
const IMM3: B = B::imm(3);
const IMM7: B = B::imm(7);

// `i:imm3:imm8` of the Thumb-2 data-processing immediates.
const IMM_I: B = B::imm_at(1, 11);
const IMM_3: B = B::imm_at(3, 8);

// `I1 = NOT(J1 XOR S)`, `I2 = NOT(J2 XOR S)` of the wide branches.
const J1: B = B::BranchNotXor { merge: 23 };
const J2: B = B::BranchNotXor { merge: 22 };

static DECODER: OnceLock<Result<Decoder, BuildError>> = OnceLock::new();

/// Returns the shared Thumb decoder, compiling it with the default configuration on first use.
pub fn decoder() -> Result<&'static Decoder, BuildError> {
    DECODER.get_or_init(|| build(&Config::default())).as_ref().map_err(Clone::clone)
}

/// Compiles the Thumb table with an explicit configuration.
///
/// # Arguments
///
/// * `config` - Supplies the Thumb family settings and build tracing.
pub fn build(config: &Config) -> Result<Decoder, BuildError> {
    let descriptors = descriptors();
    tracing::debug!(count = descriptors.len(), "building Thumb decoder");
    Decoder::build_traced(&descriptors, &config.thumb, config.general.trace_build)
}

/// The Thumb descriptor table, in authoring order.
pub fn descriptors() -> Vec<Desc> {
    vec![
        Desc::new("ADC", &[I, I, I, I, O, IMM_I, O, I, O, I, O, S, RN, O, IMM_3, RD, IMM8])
            .expand(Expansion::Thumb),
        Desc::new("ADC", &[O, I, O, O, O, O, O, I, O, I, RM3, RDN3]),
        Desc::new("ADC", &[
            I, I, I, O, I, O, I, I, O, I, O, S, RN, O, SHIFT3, RD, SHIFT2, TYPE, RM,
        ]),
        Desc::new("ADD", &[O, O, O, I, I, I, O, IMM3, RN3, RD3]),
        Desc::new("ADD", &[O, O, I, I, O, RDN3, IMM8]),
        Desc::new("ADD", &[I, I, I, I, O, IMM_I, O, I, O, O, O, S, RN, O, IMM_3, RD, IMM8])
            .expand(Expansion::Thumb),
        Desc::new("ADDW", &[I, I, I, I, O, IMM_I, I, O, O, O, O, O, RN, O, IMM_3, RD, IMM8]),
        Desc::new("ADD", &[O, O, O, I, I, O, O, RM3, RN3, RD3]),
        Desc::new("ADD", &[O, I, O, O, O, I, O, O, DN, RM, RDN3]),
        Desc::new("ADD", &[
            I, I, I, O, I, O, I, I, O, O, O, S, RN, O, SHIFT3, RD, SHIFT2, TYPE, RM,
        ]),
        Desc::new("ADD", &[I, O, I, O, I, RD3, IMM8, SP_RN]),
        Desc::new("ADD", &[I, O, I, I, O, O, O, O, O, IMM7, SP_RD, SP_RN]),
        Desc::new("ADDW", &[
            I, I, I, I, O, IMM_I, I, O, O, O, O, O, I, I, O, I, O, IMM_3, RD, IMM8, SP_RN,
        ]),
        Desc::new("ADD", &[O, I, O, O, O, I, O, O, DM, I, I, O, I, RDM3, SP_RN]),
        Desc::new("ADR", &[I, O, I, O, O, RD3, IMM8, PC_RN]),
        Desc::new("ADR", &[
            I, I, I, I, O, IMM_I, I, O, I, O, I, O, I, I, I, I, O, IMM_3, RD, IMM8, PC_RN,
        ]),
        Desc::new("ADR", &[
            I, I, I, I, O, IMM_I, I, O, O, O, O, O, I, I, I, I, O, IMM_3, RD, IMM8, PC_RN,
        ]),
        Desc::new("AND", &[I, I, I, I, O, IMM_I, O, O, O, O, O, S, RN, O, IMM_3, RD, IMM8])
            .expand(Expansion::Thumb),
        Desc::new("AND", &[O, I, O, O, O, O, O, O, O, O, RM3, RDN3]),
        Desc::new("AND", &[
            I, I, I, O, I, O, I, O, O, O, O, S, RN, O, SHIFT3, RD, SHIFT2, TYPE, RM,
        ]),
        Desc::new("ASR", &[O, O, O, I, O, IMM5, RM3, RD3]),
        Desc::new("ASR", &[
            I, I, I, O, I, O, I, O, O, I, O, S, I, I, I, I, O, B::imm_at(3, 2), RD, IMM2, I, O, RM,
        ]),
        Desc::new("ASR", &[O, I, O, O, O, O, O, I, O, O, RM3, RDN3]),
        Desc::new("ASR", &[I, I, I, I, I, O, I, O, O, I, O, S, RN, I, I, I, I, RD, O, O, O, O, RM]),
        Desc::new("B", &[I, I, O, I, COND, B::imm_signed(8, 1)]),
        Desc::new("B", &[I, I, I, O, O, B::imm_signed(11, 1)]),
        Desc::new("B", &[
            I, I, I, I, O, B::imm_signed(1, 20), COND, B::imm_at(6, 12), I, O, B::imm_at(1, 18), O,
            B::imm_at(1, 19), B::imm_at(11, 1),
        ]),
        Desc::new("B", &[
            I, I, I, I, O, B::imm_signed(1, 24), B::imm_at(10, 12), I, O, J1, I, J2,
            B::imm_at(11, 1),
        ]),
        Desc::new("BFC", &[
            I, I, I, I, O, O, I, I, O, I, I, O, I, I, I, I, O, B::imm_at(3, 2), RD, IMM2, O, MSB,
        ]),
        Desc::new("BFI", &[
            I, I, I, I, O, O, I, I, O, I, I, O, RN, O, B::imm_at(3, 2), RD, IMM2, O, MSB,
        ]),
        Desc::new("BIC", &[I, I, I, I, O, IMM_I, O, O, O, O, I, S, RN, O, IMM_3, RD, IMM8])
            .expand(Expansion::Thumb),
        Desc::new("BIC", &[O, I, O, O, O, O, I, I, I, O, RM3, RDN3]),
        Desc::new("BIC", &[
            I, I, I, O, I, O, I, O, O, O, I, S, RN, O, SHIFT3, RD, SHIFT2, TYPE, RM,
        ]),
        Desc::new("BKPT", &[I, O, I, I, I, I, I, O, IMM8]),
        Desc::new("BL", &[
            I, I, I, I, O, B::imm_signed(1, 24), B::imm_at(10, 12), I, I, J1, I, J2,
            B::imm_at(11, 1),
        ]),
        Desc::new("BLX", &[
            I, I, I, I, O, B::imm_signed(1, 24), B::imm_at(10, 12), I, I, J1, O, J2,
            B::imm_at(10, 2), O,
        ]),
        Desc::new("BLX", &[O, I, O, O, O, I, I, I, I, RM, O, O, O]),
        Desc::new("BX", &[O, I, O, O, O, I, I, I, O, RM, O, O, O]),
        Desc::new("BXJ", &[
            I, I, I, I, O, O, I, I, I, I, O, O, RM, I, O, O, O, I, I, I, I, O, O, O, O, O, O, O, O,
        ]),
        Desc::new("CBZ", &[I, O, I, I, O, O, B::imm_at(1, 6), I, B::imm_at(5, 1), RN3]),
        Desc::new("CBNZ", &[I, O, I, I, I, O, B::imm_at(1, 6), I, B::imm_at(5, 1), RN3]),
        Desc::new("CLREX", &[
            I, I, I, I, O, O, I, I, I, O, I, I, I, I, I, I, I, O, O, O, I, I, I, I, O, O, I, O, I,
            I, I, I,
        ]),
        Desc::new("CLZ", &[I, I, I, I, I, O, I, O, I, O, I, I, RM, I, I, I, I, RD, I, O, O, O, RM]),
        Desc::new("CMN", &[I, I, I, I, O, IMM_I, O, I, O, O, O, I, RN, O, IMM_3, I, I, I, I, IMM8])
            .expand(Expansion::Thumb),
        Desc::new("CMN", &[O, I, O, O, O, O, I, O, I, I, RM3, RN3]),
        Desc::new("CMN", &[
            I, I, I, O, I, O, I, I, O, O, O, I, RN, O, SHIFT3, I, I, I, I, SHIFT2, TYPE, RM,
        ]),
        Desc::new("CMP", &[O, O, I, O, I, RN3, IMM8]),
        Desc::new("CMP", &[I, I, I, I, O, IMM_I, O, I, I, O, I, I, RN, O, IMM_3, I, I, I, I, IMM8])
            .expand(Expansion::Thumb),
        Desc::new("CMP", &[O, I, O, O, O, O, I, O, I, O, RM3, RN3]),
        Desc::new("CMP", &[O, I, O, O, O, I, O, I, B::reg_at(Field::Rn, 1, 3), RM, RN3]),
        Desc::new("CMP", &[
            I, I, I, O, I, O, I, I, I, O, I, I, RN, O, SHIFT3, I, I, I, I, SHIFT2, TYPE, RM,
        ]),
        Desc::new("DBG", &[
            I, I, I, I, O, O, I, I, I, O, I, O, I, I, I, I, I, O, O, O, O, O, O, O, I, I, I, I,
            OPTION,
        ]),
        Desc::new("DMB", &[
            I, I, I, I, O, O, I, I, I, O, I, I, I, I, I, I, I, O, O, O, I, I, I, I, O, I, O, I,
            OPTION,
        ]),
        Desc::new("DSB", &[
            I, I, I, I, O, O, I, I, I, O, I, I, I, I, I, I, I, O, O, O, I, I, I, I, O, I, O, O,
            OPTION,
        ]),
        Desc::new("EOR", &[I, I, I, I, O, IMM_I, O, O, I, O, O, S, RN, O, IMM_3, RD, IMM8])
            .expand(Expansion::Thumb),
        Desc::new("EOR", &[O, I, O, O, O, O, O, O, O, I, RM3, RDN3]),
        Desc::new("EOR", &[
            I, I, I, O, I, O, I, O, I, O, O, S, RN, O, SHIFT3, RD, SHIFT2, TYPE, RM,
        ]),
        Desc::new("ISB", &[
            I, I, I, I, O, O, I, I, I, O, I, I, I, I, I, I, I, O, O, O, I, I, I, I, O, I, I, O,
            OPTION,
        ]),
        Desc::new("IT", &[I, O, I, I, I, I, I, I, FIRSTCOND, ITMASK]),
        Desc::new("LDM", &[I, I, O, O, I, RN3, REGLIST8]),
        Desc::new("LDM", &[I, I, I, O, I, O, O, O, I, O, W, I, RN, REGLIST]),
        Desc::new("LDMDB", &[I, I, I, O, I, O, O, I, O, O, W, I, RN, REGLIST]),
        Desc::new("LDR", &[O, I, I, O, I, IMM5, RN3, RT3]),
        Desc::new("LDR", &[I, O, O, I, I, RT3, IMM8, SP_RN]),
        Desc::new("LDR", &[I, I, I, I, I, O, O, O, I, I, O, I, RN, RT, IMM12]),
        Desc::new("LDR", &[I, I, I, I, I, O, O, O, O, I, O, I, RN, RT, I, P, U, W, IMM8]),
        Desc::new("LDR", &[O, I, O, O, I, RT3, IMM8, PC_RN]),
        Desc::new("LDR", &[I, I, I, I, I, O, O, O, U, I, O, I, I, I, I, I, RT, IMM12, PC_RN]),
        Desc::new("LDR", &[O, I, O, I, I, O, O, RM3, RN3, RT3]),
        Desc::new("LDR", &[I, I, I, I, I, O, O, O, O, I, O, I, RN, RT, O, O, O, O, O, O, IMM2, RM]),
        Desc::new("LDRB", &[O, I, I, I, I, IMM5, RN3, RT3]),
        Desc::new("LDRB", &[I, I, I, I, I, O, O, O, I, O, O, I, RN, RT, IMM12]),
        Desc::new("LDRB", &[I, I, I, I, I, O, O, O, O, O, O, I, RN, RT, I, P, U, W, IMM8]),
        Desc::new("LDRB", &[O, I, O, I, I, I, O, RM3, RN3, RT3]),
        Desc::new("LDRB", &[
            I, I, I, I, I, O, O, O, O, O, O, I, RN, RT, O, O, O, O, O, O, IMM2, RM,
        ]),
        Desc::new("LDRBT", &[I, I, I, I, I, O, O, O, O, O, O, I, RN, RT, I, I, I, O, IMM8]),
        Desc::new("LDRD", &[I, I, I, O, I, O, O, P, U, I, W, I, RN, RT, RT2, IMM8]),
        Desc::new("LDREX", &[I, I, I, O, I, O, O, O, O, I, O, I, RN, RT, I, I, I, I, IMM8]),
        Desc::new("LDREXB", &[
            I, I, I, O, I, O, O, O, I, I, O, I, RN, RT, I, I, I, I, O, I, O, O, I, I, I, I,
        ]),
        Desc::new("LDREXD", &[
            I, I, I, O, I, O, O, O, I, I, O, I, RN, RT, RT2, O, I, I, I, I, I, I, I,
        ]),
        Desc::new("LDREXH", &[
            I, I, I, O, I, O, O, O, I, I, O, I, RN, RT, I, I, I, I, O, I, O, I, I, I, I, I,
        ]),
        Desc::new("LDRH", &[I, O, O, O, I, IMM5, RN3, RT3]),
        Desc::new("LDRH", &[I, I, I, I, I, O, O, O, I, O, I, I, RN, RT, IMM12]),
        Desc::new("LDRH", &[I, I, I, I, I, O, O, O, O, O, I, I, RN, RT, I, P, U, W, IMM8]),
        Desc::new("LDRH", &[O, I, O, I, I, O, I, RM3, RN3, RT3]),
        Desc::new("LDRH", &[
            I, I, I, I, I, O, O, O, O, O, I, I, RN, RT, O, O, O, O, O, O, IMM2, RM,
        ]),
        Desc::new("LDRHT", &[I, I, I, I, I, O, O, O, O, O, I, I, RN, RT, I, I, I, O, IMM8]),
        Desc::new("LDRSB", &[I, I, I, I, I, O, O, I, I, O, O, I, RN, RT, IMM12]),
        Desc::new("LDRSB", &[I, I, I, I, I, O, O, I, O, O, O, I, RN, RT, I, P, U, W, IMM8]),
        Desc::new("LDRSB", &[O, I, O, I, O, I, I, RM3, RN3, RT3]),
        Desc::new("LDRSB", &[
            I, I, I, I, I, O, O, I, O, O, O, I, RN, RT, O, O, O, O, O, O, IMM2, RM,
        ]),
        Desc::new("LDRSBT", &[I, I, I, I, I, O, O, I, O, O, O, I, RN, RT, I, I, I, O, IMM8]),
        Desc::new("LDRSH", &[I, I, I, I, I, O, O, I, I, O, I, I, RN, RT, IMM12]),
        Desc::new("LDRSH", &[I, I, I, I, I, O, O, I, O, O, I, I, RN, RT, I, P, U, W, IMM8]),
        Desc::new("LDRSH", &[O, I, O, I, I, I, I, RM3, RN3, RT3]),
        Desc::new("LDRSH", &[
            I, I, I, I, I, O, O, I, O, O, I, I, RN, RT, O, O, O, O, O, O, IMM2, RM,
        ]),
        Desc::new("LDRSHT", &[I, I, I, I, I, O, O, I, O, O, I, I, RN, RT, I, I, I, O, IMM8]),
        Desc::new("LDRT", &[I, I, I, I, I, O, O, O, O, I, O, I, RN, RT, I, I, I, O, IMM8]),
        Desc::new("LSL", &[O, O, O, O, O, IMM5, RM3, RD3]),
        Desc::new("LSL", &[
            I, I, I, O, I, O, I, O, O, I, O, S, I, I, I, I, O, B::imm_at(3, 2), RD, IMM2, O, O, RM,
        ]),
        Desc::new("LSL", &[O, I, O, O, O, O, O, O, I, O, RM3, RDN3]),
        Desc::new("LSL", &[I, I, I, I, I, O, I, O, O, O, O, S, RN, I, I, I, I, RD, O, O, O, O, RM]),
        Desc::new("LSR", &[O, O, O, O, I, IMM5, RM3, RD3]),
        Desc::new("LSR", &[
            I, I, I, O, I, O, I, O, O, I, O, S, I, I, I, I, O, B::imm_at(3, 2), RD, IMM2, O, I, RM,
        ]),
        Desc::new("LSR", &[O, I, O, O, O, O, O, O, I, I, RM3, RDN3]),
        Desc::new("LSR", &[I, I, I, I, I, O, I, O, O, O, I, S, RN, I, I, I, I, RD, O, O, O, O, RM]),
        Desc::new("MLA", &[I, I, I, I, I, O, I, I, O, O, O, O, RN, RA, RD, O, O, O, O, RM]),
        Desc::new("MLS", &[I, I, I, I, I, O, I, I, O, O, O, O, RN, RA, RD, O, O, O, I, RM]),
        Desc::new("MOV", &[O, O, I, O, O, RD3, IMM8]),
        Desc::new("MOV", &[I, I, I, I, O, IMM_I, O, O, O, I, O, S, I, I, I, I, O, IMM_3, RD, IMM8])
            .expand(Expansion::Thumb),
        Desc::new("MOVW", &[
            I, I, I, I, O, IMM_I, I, O, O, I, O, O, B::imm_at(4, 12), O, IMM_3, RD, IMM8,
        ]),
        Desc::new("MOV", &[O, I, O, O, O, I, I, O, B::reg_at(Field::Rd, 1, 3), RM, RD3]),
        Desc::new("MOV", &[O, O, O, O, O, O, O, O, O, O, RM3, RD3]),
        Desc::new("MOV", &[
            I, I, I, O, I, O, I, O, O, I, O, S, I, I, I, I, O, O, O, O, RD, O, O, O, O, RM,
        ]),
        Desc::new("MOVT", &[
            I, I, I, I, O, IMM_I, I, O, I, I, O, O, B::imm_at(4, 12), O, IMM_3, RD, IMM8,
        ]),
        Desc::new("MRS", &[
            I, I, I, I, O, O, I, I, I, I, I, O, I, I, I, I, I, O, O, O, RD, O, O, O, O, O, O, O, O,
        ]),
        Desc::new("MSR", &[
            I, I, I, I, O, O, I, I, I, O, O, O, RN, I, O, O, O, MASK, O, O, O, O, O, O, O, O, O, O,
        ]),
        Desc::new("MUL", &[O, I, O, O, O, O, I, I, O, I, RN3, RDM3]),
        Desc::new("MUL", &[I, I, I, I, I, O, I, I, O, O, O, O, RN, I, I, I, I, RD, O, O, O, O, RM]),
        Desc::new("MVN", &[I, I, I, I, O, IMM_I, O, O, O, I, I, S, I, I, I, I, O, IMM_3, RD, IMM8])
            .expand(Expansion::Thumb),
        Desc::new("MVN", &[O, I, O, O, O, O, I, I, I, I, RM3, RD3]),
        Desc::new("MVN", &[
            I, I, I, O, I, O, I, O, O, I, I, S, I, I, I, I, O, SHIFT3, RD, SHIFT2, TYPE, RM,
        ]),
        Desc::new("NOP", &[I, O, I, I, I, I, I, I, O, O, O, O, O, O, O, O]),
        Desc::new("NOP", &[
            I, I, I, I, O, O, I, I, I, O, I, O, I, I, I, I, I, O, O, O, O, O, O, O, O, O, O, O, O,
            O, O, O,
        ]),
        Desc::new("ORN", &[I, I, I, I, O, IMM_I, O, O, O, I, I, S, RN, O, IMM_3, RD, IMM8])
            .expand(Expansion::Thumb),
        Desc::new("ORN", &[
            I, I, I, O, I, O, I, O, O, I, I, S, RN, O, SHIFT3, RD, SHIFT2, TYPE, RM,
        ]),
        Desc::new("ORR", &[I, I, I, I, O, IMM_I, O, O, O, I, O, S, RN, O, IMM_3, RD, IMM8])
            .expand(Expansion::Thumb),
        Desc::new("ORR", &[O, I, O, O, O, O, I, I, O, O, RM3, RDN3]),
        Desc::new("ORR", &[
            I, I, I, O, I, O, I, O, O, I, O, S, RN, O, SHIFT3, RD, SHIFT2, TYPE, RM,
        ]),
        Desc::new("PKHBT", &[
            I, I, I, O, I, O, I, O, I, I, O, O, RN, O, B::imm_at(3, 2), RD, IMM2, O, O, RM,
        ]),
        Desc::new("PKHTB", &[
            I, I, I, O, I, O, I, O, I, I, O, O, RN, O, B::imm_at(3, 2), RD, IMM2, I, O, RM,
        ]),
        Desc::new("PLD", &[I, I, I, I, I, O, O, O, I, O, W, I, RN, I, I, I, I, IMM12]),
        Desc::new("PLD", &[I, I, I, I, I, O, O, O, O, O, W, I, RN, I, I, I, I, I, I, O, O, IMM8]),
        Desc::new("PLD", &[I, I, I, I, I, O, O, O, U, O, O, I, I, I, I, I, I, I, I, I, IMM12]),
        Desc::new("PLD", &[
            I, I, I, I, I, O, O, O, O, O, W, I, RN, I, I, I, I, O, O, O, O, O, O, IMM2, RM,
        ]),
        Desc::new("PLI", &[I, I, I, I, I, O, O, I, I, O, O, I, RN, I, I, I, I, IMM12]),
        Desc::new("PLI", &[I, I, I, I, I, O, O, I, O, O, O, I, RN, I, I, I, I, I, I, O, O, IMM8]),
        Desc::new("PLI", &[I, I, I, I, I, O, O, I, U, O, O, I, I, I, I, I, I, I, I, I, IMM12]),
        Desc::new("PLI", &[
            I, I, I, I, I, O, O, I, O, O, O, I, RN, I, I, I, I, O, O, O, O, O, O, IMM2, RM,
        ]),
        Desc::new("POP", &[I, O, I, I, I, I, O, P, REGLIST8]),
        Desc::new("POP", &[I, I, I, O, I, O, O, O, I, O, I, I, I, I, O, I, REGLIST]),
        Desc::new("POP", &[
            I, I, I, I, I, O, O, O, O, I, O, I, I, I, O, I, RT, I, O, I, I, O, O, O, O, O, I, O, O,
        ]),
        Desc::new("PUSH", &[I, O, I, I, O, I, O, M, REGLIST8]),
        Desc::new("PUSH", &[I, I, I, O, I, O, O, I, O, O, I, O, I, I, O, I, REGLIST]),
        Desc::new("PUSH", &[
            I, I, I, I, I, O, O, O, O, I, O, O, I, I, O, I, RT, I, I, O, I, O, O, O, O, O, I, O, O,
        ]),
        Desc::new("QADD", &[
            I, I, I, I, I, O, I, O, I, O, O, O, RN, I, I, I, I, RD, I, O, O, O, RM,
        ]),
        Desc::new("QADD16", &[
            I, I, I, I, I, O, I, O, I, O, O, I, RN, I, I, I, I, RD, O, O, O, I, RM,
        ]),
        Desc::new("QADD8", &[
            I, I, I, I, I, O, I, O, I, O, O, O, RN, I, I, I, I, RD, O, O, O, I, RM,
        ]),
        Desc::new("QASX", &[
            I, I, I, I, I, O, I, O, I, O, I, O, RN, I, I, I, I, RD, O, O, O, I, RM,
        ]),
        Desc::new("QDADD", &[
            I, I, I, I, I, O, I, O, I, O, O, O, RN, I, I, I, I, RD, I, O, O, I, RM,
        ]),
        Desc::new("QDSUB", &[
            I, I, I, I, I, O, I, O, I, O, O, O, RN, I, I, I, I, RD, I, O, I, I, RM,
        ]),
        Desc::new("QSAX", &[
            I, I, I, I, I, O, I, O, I, I, I, O, RN, I, I, I, I, RD, O, O, O, I, RM,
        ]),
        Desc::new("QSUB", &[
            I, I, I, I, I, O, I, O, I, O, O, O, RN, I, I, I, I, RD, I, O, I, O, RM,
        ]),
        Desc::new("QSUB16", &[
            I, I, I, I, I, O, I, O, I, I, O, I, RN, I, I, I, I, RD, O, O, O, I, RM,
        ]),
        Desc::new("QSUB8", &[
            I, I, I, I, I, O, I, O, I, I, O, O, RN, I, I, I, I, RD, O, O, O, I, RM,
        ]),
        Desc::new("RBIT", &[
            I, I, I, I, I, O, I, O, I, O, O, I, RM, I, I, I, I, RD, I, O, I, O, RM,
        ]),
        Desc::new("REV", &[I, O, I, I, I, O, I, O, O, O, RM3, RD3]),
        Desc::new("REV", &[I, I, I, I, I, O, I, O, I, O, O, I, RM, I, I, I, I, RD, I, O, O, O, RM]),
        Desc::new("REV16", &[I, O, I, I, I, O, I, O, O, I, RM3, RD3]),
        Desc::new("REV16", &[
            I, I, I, I, I, O, I, O, I, O, O, I, RM, I, I, I, I, RD, I, O, O, I, RM,
        ]),
        Desc::new("REVSH", &[I, O, I, I, I, O, I, O, I, I, RM3, RD3]),
        Desc::new("REVSH", &[
            I, I, I, I, I, O, I, O, I, O, O, I, RM, I, I, I, I, RD, I, O, I, I, RM,
        ]),
        Desc::new("ROR", &[
            I, I, I, O, I, O, I, O, O, I, O, S, I, I, I, I, O, B::imm_at(3, 2), RD, IMM2, I, I, RM,
        ]),
        Desc::new("ROR", &[O, I, O, O, O, O, O, I, I, I, RM3, RDN3]),
        Desc::new("ROR", &[I, I, I, I, I, O, I, O, O, I, I, S, RN, I, I, I, I, RD, O, O, O, O, RM]),
        Desc::new("RRX", &[
            I, I, I, O, I, O, I, O, O, I, O, S, I, I, I, I, O, O, O, O, RD, O, O, I, I, RM,
        ]),
        Desc::new("RSB", &[O, I, O, O, O, O, I, O, O, I, RN3, RD3]),
        Desc::new("RSB", &[I, I, I, I, O, IMM_I, O, I, I, I, O, S, RN, O, IMM_3, RD, IMM8])
            .expand(Expansion::Thumb),
        Desc::new("RSB", &[
            I, I, I, O, I, O, I, I, I, I, O, S, RN, O, SHIFT3, RD, SHIFT2, TYPE, RM,
        ]),
        Desc::new("SADD16", &[
            I, I, I, I, I, O, I, O, I, O, O, I, RN, I, I, I, I, RD, O, O, O, O, RM,
        ]),
        Desc::new("SADD8", &[
            I, I, I, I, I, O, I, O, I, O, O, O, RN, I, I, I, I, RD, O, O, O, O, RM,
        ]),
        Desc::new("SASX", &[
            I, I, I, I, I, O, I, O, I, O, I, O, RN, I, I, I, I, RD, O, O, O, O, RM,
        ]),
        Desc::new("SBC", &[I, I, I, I, O, IMM_I, O, I, O, I, I, S, RN, O, IMM_3, RD, IMM8])
            .expand(Expansion::Thumb),
        Desc::new("SBC", &[O, I, O, O, O, O, O, I, I, O, RM3, RDN3]),
        Desc::new("SBC", &[
            I, I, I, O, I, O, I, I, O, I, I, S, RN, O, SHIFT3, RD, SHIFT2, TYPE, RM,
        ]),
        Desc::new("SBFX", &[
            I, I, I, I, O, O, I, I, O, I, O, O, RN, O, B::imm_at(3, 2), RD, IMM2, O, WIDTHM1,
        ]),
        Desc::new("SDIV", &[
            I, I, I, I, I, O, I, I, I, O, O, I, RN, I, I, I, I, RD, I, I, I, I, RM,
        ]),
        Desc::new("SEL", &[I, I, I, I, I, O, I, O, I, O, I, O, RN, I, I, I, I, RD, I, O, O, O, RM]),
        Desc::new("SETEND", &[I, O, I, I, O, I, I, O, O, I, O, I, E, O, O, O]),
        Desc::new("SEV", &[I, O, I, I, I, I, I, I, O, I, O, O, O, O, O, O]),
        Desc::new("SEV", &[
            I, I, I, I, O, O, I, I, I, O, I, O, I, I, I, I, I, O, O, O, O, O, O, O, O, O, O, O, O,
            I, O, O,
        ]),
        Desc::new("SHADD16", &[
            I, I, I, I, I, O, I, O, I, O, O, I, RN, I, I, I, I, RD, O, O, I, O, RM,
        ]),
        Desc::new("SHADD8", &[
            I, I, I, I, I, O, I, O, I, O, O, O, RN, I, I, I, I, RD, O, O, I, O, RM,
        ]),
        Desc::new("SHASX", &[
            I, I, I, I, I, O, I, O, I, O, I, O, RN, I, I, I, I, RD, O, O, I, O, RM,
        ]),
        Desc::new("SHSAX", &[
            I, I, I, I, I, O, I, O, I, I, I, O, RN, I, I, I, I, RD, O, O, I, O, RM,
        ]),
        Desc::new("SHSUB16", &[
            I, I, I, I, I, O, I, O, I, I, O, I, RN, I, I, I, I, RD, O, O, I, O, RM,
        ]),
        Desc::new("SHSUB8", &[
            I, I, I, I, I, O, I, O, I, I, O, O, RN, I, I, I, I, RD, O, O, I, O, RM,
        ]),
        Desc::new("SMLA", &[I, I, I, I, I, O, I, I, O, O, O, I, RN, RA, RD, O, O, N, M, RM]),
        Desc::new("SMLAD", &[I, I, I, I, I, O, I, I, O, O, I, O, RN, RA, RD, O, O, O, M, RM]),
        Desc::new("SMLAL", &[I, I, I, I, I, O, I, I, I, I, O, O, RN, RDLO, RDHI, O, O, O, O, RM]),
        Desc::new("SMLAL", &[I, I, I, I, I, O, I, I, I, I, O, O, RN, RDLO, RDHI, I, O, N, M, RM]),
        Desc::new("SMLALD", &[I, I, I, I, I, O, I, I, I, I, O, O, RN, RDLO, RDHI, I, I, O, M, RM]),
        Desc::new("SMLAW", &[I, I, I, I, I, O, I, I, O, O, I, I, RN, RA, RD, O, O, O, M, RM]),
        Desc::new("SMLSD", &[I, I, I, I, I, O, I, I, O, I, O, O, RN, RA, RD, O, O, O, M, RM]),
        Desc::new("SMLSLD", &[I, I, I, I, I, O, I, I, I, I, O, I, RN, RDLO, RDHI, I, I, O, M, RM]),
        Desc::new("SMMLA", &[I, I, I, I, I, O, I, I, O, I, O, I, RN, RA, RD, O, O, O, R, RM]),
        Desc::new("SMMLS", &[I, I, I, I, I, O, I, I, O, I, I, O, RN, RA, RD, O, O, O, R, RM]),
        Desc::new("SMMUL", &[
            I, I, I, I, I, O, I, I, O, I, O, I, RN, I, I, I, I, RD, O, O, O, R, RM,
        ]),
        Desc::new("SMUAD", &[
            I, I, I, I, I, O, I, I, O, O, I, O, RN, I, I, I, I, RD, O, O, O, M, RM,
        ]),
        Desc::new("SMUL", &[
            I, I, I, I, I, O, I, I, O, O, O, I, RN, I, I, I, I, RD, O, O, N, M, RM,
        ]),
        Desc::new("SMULL", &[I, I, I, I, I, O, I, I, I, O, O, O, RN, RDLO, RDHI, O, O, O, O, RM]),
        Desc::new("SMULW", &[
            I, I, I, I, I, O, I, I, O, O, I, I, RN, I, I, I, I, RD, O, O, O, M, RM,
        ]),
        Desc::new("SMUSD", &[
            I, I, I, I, I, O, I, I, O, I, O, O, RN, I, I, I, I, RD, O, O, O, M, RM,
        ]),
        Desc::new("SSAT", &[
            I, I, I, I, O, O, I, I, O, O, SH, O, RN, O, B::imm_at(3, 2), RD, IMM2, O, SAT5,
        ]),
        Desc::new("SSAT16", &[
            I, I, I, I, O, O, I, I, O, O, I, O, RN, O, O, O, O, RD, O, O, O, O, SAT4,
        ]),
        Desc::new("SSAX", &[
            I, I, I, I, I, O, I, O, I, I, I, O, RN, I, I, I, I, RD, O, O, O, O, RM,
        ]),
        Desc::new("SSUB16", &[
            I, I, I, I, I, O, I, O, I, I, O, I, RN, I, I, I, I, RD, O, O, O, O, RM,
        ]),
        Desc::new("SSUB8", &[
            I, I, I, I, I, O, I, O, I, I, O, O, RN, I, I, I, I, RD, O, O, O, O, RM,
        ]),
        Desc::new("STM", &[I, I, O, O, O, RN3, REGLIST8]),
        Desc::new("STM", &[I, I, I, O, I, O, O, O, I, O, W, O, RN, REGLIST]),
        Desc::new("STMDB", &[I, I, I, O, I, O, O, I, O, O, W, O, RN, REGLIST]),
        Desc::new("STR", &[O, I, I, O, O, IMM5, RN3, RT3]),
        Desc::new("STR", &[I, O, O, I, O, RT3, IMM8, SP_RN]),
        Desc::new("STR", &[I, I, I, I, I, O, O, O, I, I, O, O, RN, RT, IMM12]),
        Desc::new("STR", &[I, I, I, I, I, O, O, O, O, I, O, O, RN, RT, I, P, U, W, IMM8]),
        Desc::new("STR", &[O, I, O, I, O, O, O, RM3, RN3, RT3]),
        Desc::new("STR", &[I, I, I, I, I, O, O, O, O, I, O, O, RN, RT, O, O, O, O, O, O, IMM2, RM]),
        Desc::new("STRB", &[O, I, I, I, O, IMM5, RN3, RT3]),
        Desc::new("STRB", &[I, I, I, I, I, O, O, O, I, O, O, O, RN, RT, IMM12]),
        Desc::new("STRB", &[I, I, I, I, I, O, O, O, O, O, O, O, RN, RT, I, P, U, W, IMM8]),
        Desc::new("STRB", &[O, I, O, I, O, I, O, RM3, RN3, RT3]),
        Desc::new("STRB", &[
            I, I, I, I, I, O, O, O, O, O, O, O, RN, RT, O, O, O, O, O, O, IMM2, RM,
        ]),
        Desc::new("STRBT", &[I, I, I, I, I, O, O, O, O, O, O, O, RN, RT, I, I, I, O, IMM8]),
        Desc::new("STRD", &[I, I, I, O, I, O, O, P, U, I, W, O, RN, RT, RT2, IMM8]),
        Desc::new("STREX", &[I, I, I, O, I, O, O, O, O, I, O, O, RN, RT, RD, IMM8]),
        Desc::new("STREXB", &[
            I, I, I, O, I, O, O, O, I, I, O, O, RN, RT, I, I, I, I, O, I, O, O, RD,
        ]),
        Desc::new("STREXD", &[I, I, I, O, I, O, O, O, I, I, O, O, RN, RT, RT2, O, I, I, I, RD]),
        Desc::new("STREXH", &[
            I, I, I, O, I, O, O, O, I, I, O, O, RN, RT, I, I, I, I, O, I, O, I, RD,
        ]),
        Desc::new("STRH", &[I, O, O, O, O, IMM5, RN3, RT3]),
        Desc::new("STRH", &[I, I, I, I, I, O, O, O, I, O, I, O, RN, RT, IMM12]),
        Desc::new("STRH", &[I, I, I, I, I, O, O, O, O, O, I, O, RN, RT, I, P, U, W, IMM8]),
        Desc::new("STRH", &[O, I, O, I, O, O, I, RM3, RN3, RT3]),
        Desc::new("STRH", &[
            I, I, I, I, I, O, O, O, O, O, I, O, RN, RT, O, O, O, O, O, O, IMM2, RM,
        ]),
        Desc::new("STRHT", &[I, I, I, I, I, O, O, O, O, O, I, O, RN, RT, I, I, I, O, IMM8]),
        Desc::new("STRT", &[I, I, I, I, I, O, O, O, O, I, O, O, RN, RT, I, I, I, O, IMM8]),
        Desc::new("SUB", &[O, O, O, I, I, I, I, IMM3, RN3, RD3]),
        Desc::new("SUB", &[O, O, I, I, I, RDN3, IMM8]),
        Desc::new("SUB", &[I, I, I, I, O, IMM_I, O, I, I, O, I, S, RN, O, IMM_3, RD, IMM8])
            .expand(Expansion::Thumb),
        Desc::new("SUBW", &[I, I, I, I, O, IMM_I, I, O, I, O, I, O, RN, O, IMM_3, RD, IMM8]),
        Desc::new("SUB", &[O, O, O, I, I, O, I, RM3, RN3, RD3]),
        Desc::new("SUB", &[
            I, I, I, O, I, O, I, I, I, O, I, S, RN, O, SHIFT3, RD, SHIFT2, TYPE, RM,
        ]),
        Desc::new("SUB", &[I, O, I, I, O, O, O, O, I, IMM7, SP_RD, SP_RN]),
        Desc::new("SUBW", &[
            I, I, I, I, O, IMM_I, I, O, I, O, I, O, I, I, O, I, O, IMM_3, RD, IMM8, SP_RN,
        ]),
        Desc::new("SVC", &[I, I, O, I, I, I, I, I, IMM8]),
        Desc::new("SXTAB", &[
            I, I, I, I, I, O, I, O, O, I, O, O, RN, I, I, I, I, RD, I, O, ROTATE, RM,
        ]),
        Desc::new("SXTAB16", &[
            I, I, I, I, I, O, I, O, O, O, I, O, RN, I, I, I, I, RD, I, O, ROTATE, RM,
        ]),
        Desc::new("SXTAH", &[
            I, I, I, I, I, O, I, O, O, O, O, O, RN, I, I, I, I, RD, I, O, ROTATE, RM,
        ]),
        Desc::new("SXTB", &[I, O, I, I, O, O, I, O, O, I, RM3, RD3]),
        Desc::new("SXTB", &[
            I, I, I, I, I, O, I, O, O, I, O, O, I, I, I, I, I, I, I, I, RD, I, O, ROTATE, RM,
        ]),
        Desc::new("SXTB16", &[
            I, I, I, I, I, O, I, O, O, O, I, O, I, I, I, I, I, I, I, I, RD, I, O, ROTATE, RM,
        ]),
        Desc::new("SXTH", &[I, O, I, I, O, O, I, O, O, O, RM3, RD3]),
        Desc::new("SXTH", &[
            I, I, I, I, I, O, I, O, O, O, O, O, I, I, I, I, I, I, I, I, RD, I, O, ROTATE, RM,
        ]),
        Desc::new("TEQ", &[I, I, I, I, O, IMM_I, O, O, I, O, O, I, RN, O, IMM_3, I, I, I, I, IMM8])
            .expand(Expansion::Thumb),
        Desc::new("TEQ", &[
            I, I, I, O, I, O, I, O, I, O, O, I, RN, O, SHIFT3, I, I, I, I, SHIFT2, TYPE, RM,
        ]),
        Desc::new("TST", &[I, I, I, I, O, IMM_I, O, O, O, O, O, I, RN, O, IMM_3, I, I, I, I, IMM8])
            .expand(Expansion::Thumb),
        Desc::new("TST", &[O, I, O, O, O, O, I, O, O, O, RM3, RN3]),
        Desc::new("TST", &[
            I, I, I, O, I, O, I, O, O, O, O, I, RN, O, SHIFT3, I, I, I, I, SHIFT2, TYPE, RM,
        ]),
        Desc::new("UADD16", &[
            I, I, I, I, I, O, I, O, I, O, O, I, RN, I, I, I, I, RD, O, I, O, O, RM,
        ]),
        Desc::new("UADD8", &[
            I, I, I, I, I, O, I, O, I, O, O, O, RN, I, I, I, I, RD, O, I, O, O, RM,
        ]),
        Desc::new("UASX", &[
            I, I, I, I, I, O, I, O, I, O, I, O, RN, I, I, I, I, RD, O, I, O, O, RM,
        ]),
        Desc::new("UBFX", &[
            I, I, I, I, O, O, I, I, I, I, O, O, RN, O, B::imm_at(3, 2), RD, IMM2, O, WIDTHM1,
        ]),
        Desc::new("UDF", &[I, I, O, I, I, I, I, O, IMM8]),
        Desc::new("UDF", &[
            I, I, I, I, O, I, I, I, I, I, I, I, B::imm_at(4, 12), I, O, I, O, IMM12,
        ]),
        Desc::new("UDIV", &[
            I, I, I, I, I, O, I, I, I, O, I, I, RN, I, I, I, I, RD, I, I, I, I, RM,
        ]),
        Desc::new("UHADD16", &[
            I, I, I, I, I, O, I, O, I, O, O, I, RN, I, I, I, I, RD, O, I, I, O, RM,
        ]),
        Desc::new("UHADD8", &[
            I, I, I, I, I, O, I, O, I, O, O, O, RN, I, I, I, I, RD, O, I, I, O, RM,
        ]),
        Desc::new("UHASX", &[
            I, I, I, I, I, O, I, O, I, O, I, O, RN, I, I, I, I, RD, O, I, I, O, RM,
        ]),
        Desc::new("UHSAX", &[
            I, I, I, I, I, O, I, O, I, I, I, O, RN, I, I, I, I, RD, O, I, I, O, RM,
        ]),
        Desc::new("UHSUB16", &[
            I, I, I, I, I, O, I, O, I, I, O, I, RN, I, I, I, I, RD, O, I, I, O, RM,
        ]),
        Desc::new("UHSUB8", &[
            I, I, I, I, I, O, I, O, I, I, O, O, RN, I, I, I, I, RD, O, I, I, O, RM,
        ]),
        Desc::new("UMAAL", &[I, I, I, I, I, O, I, I, I, I, I, O, RN, RDLO, RDHI, O, I, I, O, RM]),
        Desc::new("UMLAL", &[I, I, I, I, I, O, I, I, I, I, I, O, RN, RDLO, RDHI, O, O, O, O, RM]),
        Desc::new("UMULL", &[I, I, I, I, I, O, I, I, I, O, I, O, RN, RDLO, RDHI, O, O, O, O, RM]),
        Desc::new("UQADD16", &[
            I, I, I, I, I, O, I, O, I, O, O, I, RN, I, I, I, I, RD, O, I, O, I, RM,
        ]),
        Desc::new("UQADD8", &[
            I, I, I, I, I, O, I, O, I, O, O, O, RN, I, I, I, I, RD, O, I, O, I, RM,
        ]),
        Desc::new("UQASX", &[
            I, I, I, I, I, O, I, O, I, O, I, O, RN, I, I, I, I, RD, O, I, O, I, RM,
        ]),
        Desc::new("UQSAX", &[
            I, I, I, I, I, O, I, O, I, I, I, O, RN, I, I, I, I, RD, O, I, O, I, RM,
        ]),
        Desc::new("UQSUB16", &[
            I, I, I, I, I, O, I, O, I, I, O, I, RN, I, I, I, I, RD, O, I, O, I, RM,
        ]),
        Desc::new("UQSUB8", &[
            I, I, I, I, I, O, I, O, I, I, O, O, RN, I, I, I, I, RD, O, I, O, I, RM,
        ]),
        Desc::new("USAD8", &[
            I, I, I, I, I, O, I, I, O, I, I, I, RN, I, I, I, I, RD, O, O, O, O, RM,
        ]),
        Desc::new("USADA8", &[I, I, I, I, I, O, I, I, O, I, I, I, RN, RA, RD, O, O, O, O, RM]),
        Desc::new("USAT", &[
            I, I, I, I, O, O, I, I, I, O, SH, O, RN, O, B::imm_at(3, 2), RD, IMM2, O, SAT5,
        ]),
        Desc::new("USAT16", &[
            I, I, I, I, O, O, I, I, I, O, I, O, RN, O, O, O, O, RD, O, O, O, O, SAT4,
        ]),
        Desc::new("USAX", &[
            I, I, I, I, I, O, I, O, I, I, I, O, RN, I, I, I, I, RD, O, I, O, O, RM,
        ]),
        Desc::new("USUB16", &[
            I, I, I, I, I, O, I, O, I, I, O, I, RN, I, I, I, I, RD, O, I, O, O, RM,
        ]),
        Desc::new("USUB8", &[
            I, I, I, I, I, O, I, O, I, I, O, O, RN, I, I, I, I, RD, O, I, O, O, RM,
        ]),
        Desc::new("UXTAB", &[
            I, I, I, I, I, O, I, O, O, I, O, I, RN, I, I, I, I, RD, I, O, ROTATE, RM,
        ]),
        Desc::new("UXTAB16", &[
            I, I, I, I, I, O, I, O, O, O, I, I, RN, I, I, I, I, RD, I, O, ROTATE, RM,
        ]),
        Desc::new("UXTAH", &[
            I, I, I, I, I, O, I, O, O, O, O, I, RN, I, I, I, I, RD, I, O, ROTATE, RM,
        ]),
        Desc::new("UXTB", &[I, O, I, I, O, O, I, O, I, I, RM3, RD3]),
        Desc::new("UXTB", &[
            I, I, I, I, I, O, I, O, O, I, O, I, I, I, I, I, I, I, I, I, RD, I, O, ROTATE, RM,
        ]),
        Desc::new("UXTB16", &[
            I, I, I, I, I, O, I, O, O, O, I, I, I, I, I, I, I, I, I, I, RD, I, O, ROTATE, RM,
        ]),
        Desc::new("UXTH", &[I, O, I, I, O, O, I, O, I, O, RM3, RD3]),
        Desc::new("UXTH", &[
            I, I, I, I, I, O, I, O, O, O, O, I, I, I, I, I, I, I, I, I, RD, I, O, ROTATE, RM,
        ]),
        Desc::new("WFE", &[I, O, I, I, I, I, I, I, O, O, I, O, O, O, O, O]),
        Desc::new("WFE", &[
            I, I, I, I, O, O, I, I, I, O, I, O, I, I, I, I, I, O, O, O, O, O, O, O, O, O, O, O, O,
            O, I, O,
        ]),
        Desc::new("WFI", &[I, O, I, I, I, I, I, I, O, O, I, I, O, O, O, O]),
        Desc::new("WFI", &[
            I, I, I, I, O, O, I, I, I, O, I, O, I, I, I, I, I, O, O, O, O, O, O, O, O, O, O, O, O,
            O, I, I,
        ]),
        Desc::new("YIELD", &[I, O, I, I, I, I, I, I, O, O, O, I, O, O, O, O]),
        Desc::new("YIELD", &[
            I, I, I, I, O, O, I, I, I, O, I, O, I, I, I, I, I, O, O, O, O, O, O, O, O, O, O, O, O,
            O, O, I,
        ]),
    ]
}
