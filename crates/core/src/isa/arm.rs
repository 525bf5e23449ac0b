//! ARM (A32) encoding table.
//!
//! Every ARMv7-A encoding the decoder understands, written as a descriptor per
//! encoding diagram. The conditional space is keyed on `cond`; encodings in
//! the unconditional space fix `cond = 1111` as constant bits.
//!
//! The table is compiled once on first use; [`decoder`] hands out the shared
//! instance.

use std::sync::OnceLock;

use super::pieces::{
    COND, E, I, IMM5, IMM8, IMM12, M, MASK, MSB, N, O, OPTION, P, PC_RN, R, RA, RD, RDHI, RDLO,
    REGLIST, RM, RN, ROTATE, RT, RT2, S, SAT4, SAT5, SH, SP_RN, TYPE, U, W, WIDTHM1,
};
use crate::common::error::BuildError;
use crate::config::Config;
use crate::decode::Decoder;
use crate::encoding::{BitField as B, Expansion, Field, InstructionDescriptor as Desc};

const D: B = B::plain(Field::D, 1);
const Q: B = B::plain(Field::Q, 1);
const LSB: B = B::plain(Field::Lsb, 5);
const SHIFT5: B = B::plain(Field::ShiftAmount, 5);
const COPROC: B = B::plain(Field::Coproc, 4);
const OPC1: B = B::plain(Field::Opc1, 4);
const OPC1_3: B = B::plain(Field::Opc1, 3);
const OPC2: B = B::plain(Field::Opc2, 3);
const CMODE: B = B::plain(Field::Cmode, 4);

const RS: B = B::reg(Field::Rs, 4);
const CRD: B = B::reg(Field::CRd, 4);
const CRN: B = B::reg(Field::CRn, 4);
const CRM: B = B::reg(Field::CRm, 4);
const VD: B = B::reg(Field::Vd, 4);
const VD_HI: B = B::reg_at(Field::Vd, 1, 4);

const IMM4: B = B::imm(4);
const IMM24: B = B::imm(24);

static DECODER: OnceLock<Result<Decoder, BuildError>> = OnceLock::new();

/// Returns the shared ARM decoder, compiling it with the default configuration on first use.
///
/// # Returns
///
/// The decoder, or the `BuildError` the built-in table produced.
pub fn decoder() -> Result<&'static Decoder, BuildError> {
    DECODER.get_or_init(|| build(&Config::default())).as_ref().map_err(Clone::clone)
}

/// Compiles the ARM table with an explicit configuration.
///
/// # Arguments
///
/// * `config` - Supplies the ARM family settings and build tracing.
pub fn build(config: &Config) -> Result<Decoder, BuildError> {
    let descriptors = descriptors();
    tracing::debug!(count = descriptors.len(), "building ARM decoder");
    Decoder::build_traced(&descriptors, &config.arm, config.general.trace_build)
}

/// The ARM descriptor table, in authoring order.
pub fn descriptors() -> Vec<Desc> {
    vec![
        Desc::new("ADC", &[COND, O, O, I, O, I, O, I, S, RN, RD, IMM12]).expand(Expansion::Arm),
        Desc::new("ADC", &[COND, O, O, O, O, I, O, I, S, RN, RD, SHIFT5, TYPE, O, RM]),
        Desc::new("ADC", &[COND, O, O, O, O, I, O, I, S, RN, RD, RS, O, TYPE, I, RM]),
        Desc::new("ADD", &[COND, O, O, I, O, I, O, O, S, RN, RD, IMM12]).expand(Expansion::Arm),
        Desc::new("ADD", &[COND, O, O, O, O, I, O, O, S, RN, RD, SHIFT5, TYPE, O, RM]),
        Desc::new("ADD", &[COND, O, O, O, O, I, O, O, S, RN, RD, RS, O, TYPE, I, RM]),
        Desc::new("ADD", &[COND, O, O, I, O, I, O, O, S, I, I, O, I, RD, IMM12, SP_RN])
            .expand(Expansion::Arm),
        Desc::new("ADD", &[
            COND, O, O, O, O, I, O, O, S, I, I, O, I, RD, SHIFT5, TYPE, O, RM, SP_RN,
        ]),
        Desc::new("ADR", &[COND, O, O, I, O, I, O, O, O, I, I, I, I, RD, IMM12, PC_RN])
            .expand(Expansion::Arm),
        Desc::new("ADR", &[COND, O, O, I, O, O, I, O, O, I, I, I, I, RD, IMM12, PC_RN])
            .expand(Expansion::Arm),
        Desc::new("AND", &[COND, O, O, I, O, O, O, O, S, RN, RD, IMM12]).expand(Expansion::Arm),
        Desc::new("AND", &[COND, O, O, O, O, O, O, O, S, RN, RD, SHIFT5, TYPE, O, RM]),
        Desc::new("AND", &[COND, O, O, O, O, O, O, O, S, RN, RD, RS, O, TYPE, I, RM]),
        Desc::new("ASR", &[COND, O, O, O, I, I, O, I, S, O, O, O, O, RD, IMM5, I, O, O, RM]),
        Desc::new("ASR", &[COND, O, O, O, I, I, O, I, S, O, O, O, O, RD, RM, O, I, O, I, RN]),
        Desc::new("B", &[COND, I, O, I, O, B::imm_signed(24, 2)]),
        Desc::new("BFC", &[COND, O, I, I, I, I, I, O, MSB, RD, LSB, O, O, I, I, I, I, I]),
        Desc::new("BFI", &[COND, O, I, I, I, I, I, O, MSB, RD, LSB, O, O, I, RN]),
        Desc::new("BIC", &[COND, O, O, I, I, I, I, O, S, RN, RD, IMM12]).expand(Expansion::Arm),
        Desc::new("BIC", &[COND, O, O, O, I, I, I, O, S, RN, RD, SHIFT5, TYPE, O, RM]),
        Desc::new("BIC", &[COND, O, O, O, I, I, I, O, S, RN, RD, RS, O, TYPE, I, RM]),
        Desc::new("BKPT", &[COND, O, O, O, I, O, O, I, O, B::imm_at(12, 4), O, I, I, I, IMM4]),
        Desc::new("BL", &[COND, I, O, I, I, B::imm_signed(24, 2)]),
        Desc::new("BLX", &[I, I, I, I, I, O, I, B::imm_at(1, 1), B::imm_signed(24, 2)]),
        Desc::new("BLX", &[
            COND, O, O, O, I, O, O, I, O, I, I, I, I, I, I, I, I, I, I, I, I, O, O, I, I, RM,
        ]),
        Desc::new("BX", &[
            COND, O, O, O, I, O, O, I, O, I, I, I, I, I, I, I, I, I, I, I, I, O, O, O, I, RM,
        ]),
        Desc::new("BXJ", &[
            COND, O, O, O, I, O, O, I, O, I, I, I, I, I, I, I, I, I, I, I, I, O, O, I, O, RM,
        ]),
        Desc::new("CDP", &[COND, I, I, I, O, OPC1, CRN, CRD, COPROC, OPC2, O, CRM]),
        Desc::new("CDP2", &[I, I, I, I, I, I, I, O, OPC1, CRN, CRD, COPROC, OPC2, O, CRM]),
        Desc::new("CLREX", &[
            I, I, I, I, O, I, O, I, O, I, I, I, I, I, I, I, I, I, I, I, O, O, O, O, O, O, O, I, I,
            I, I, I,
        ]),
        Desc::new("CLZ", &[
            COND, O, O, O, I, O, I, I, O, I, I, I, I, RD, I, I, I, I, O, O, O, I, RM,
        ]),
        Desc::new("CMN", &[COND, O, O, I, I, O, I, I, I, RN, O, O, O, O, IMM12])
            .expand(Expansion::Arm),
        Desc::new("CMN", &[COND, O, O, O, I, O, I, I, I, RN, O, O, O, O, SHIFT5, TYPE, O, RM]),
        Desc::new("CMN", &[COND, O, O, O, I, O, I, I, I, RN, O, O, O, O, RS, O, TYPE, I, RM]),
        Desc::new("CMP", &[COND, O, O, I, I, O, I, O, I, RN, O, O, O, O, IMM12])
            .expand(Expansion::Arm),
        Desc::new("CMP", &[COND, O, O, O, I, O, I, O, I, RN, O, O, O, O, SHIFT5, TYPE, O, RM]),
        Desc::new("CMP", &[COND, O, O, O, I, O, I, O, I, RN, O, O, O, O, RS, O, TYPE, I, RM]),
        Desc::new("DBG", &[
            COND, O, O, I, I, O, O, I, O, O, O, O, O, I, I, I, I, O, O, O, O, I, I, I, I, OPTION,
        ]),
        Desc::new("DMB", &[
            I, I, I, I, O, I, O, I, O, I, I, I, I, I, I, I, I, I, I, I, O, O, O, O, O, I, O, I,
            OPTION,
        ]),
        Desc::new("DSB", &[
            I, I, I, I, O, I, O, I, O, I, I, I, I, I, I, I, I, I, I, I, O, O, O, O, O, I, O, O,
            OPTION,
        ]),
        Desc::new("EOR", &[COND, O, O, I, O, O, O, I, S, RN, RD, IMM12]).expand(Expansion::Arm),
        Desc::new("EOR", &[COND, O, O, O, O, O, O, I, S, RN, RD, SHIFT5, TYPE, O, RM]),
        Desc::new("EOR", &[COND, O, O, O, O, O, O, I, S, RN, RD, RS, O, TYPE, I, RM]),
        Desc::new("ISB", &[
            I, I, I, I, O, I, O, I, O, I, I, I, I, I, I, I, I, I, I, I, O, O, O, O, O, I, I, O,
            OPTION,
        ]),
        Desc::new("LDC", &[COND, I, I, O, P, U, D, W, I, RN, CRD, COPROC, IMM8]),
        Desc::new("LDC2", &[I, I, I, I, I, I, O, P, U, D, W, I, RN, CRD, COPROC, IMM8]),
        Desc::new("LDM", &[COND, I, O, O, O, I, O, W, I, RN, REGLIST]),
        Desc::new("LDMDA", &[COND, I, O, O, O, O, O, W, I, RN, REGLIST]),
        Desc::new("LDMDB", &[COND, I, O, O, I, O, O, W, I, RN, REGLIST]),
        Desc::new("LDMIB", &[COND, I, O, O, I, I, O, W, I, RN, REGLIST]),
        Desc::new("LDR", &[COND, O, I, O, P, U, O, W, I, RN, RT, IMM12]),
        Desc::new("LDR", &[COND, O, I, I, P, U, O, W, I, RN, RT, SHIFT5, TYPE, O, RM]),
        Desc::new("LDRB", &[COND, O, I, O, P, U, I, W, I, RN, RT, IMM12]),
        Desc::new("LDRB", &[COND, O, I, I, P, U, I, W, I, RN, RT, SHIFT5, TYPE, O, RM]),
        Desc::new("LDRBT", &[COND, O, I, O, O, U, I, I, I, RN, RT, IMM12]),
        Desc::new("LDRBT", &[COND, O, I, I, O, U, I, I, I, RN, RT, SHIFT5, TYPE, O, RM]),
        Desc::new("LDRD", &[
            COND, O, O, O, P, U, I, W, O, RN, RT, B::imm_at(4, 4), I, I, O, I, IMM4,
        ]),
        Desc::new("LDRD", &[COND, O, O, O, P, U, O, W, O, RN, RT, O, O, O, O, I, I, O, I, RM]),
        Desc::new("LDREX", &[
            COND, O, O, O, I, I, O, O, I, RN, RT, I, I, I, I, I, O, O, I, I, I, I, I,
        ]),
        Desc::new("LDREXB", &[
            COND, O, O, O, I, I, I, O, I, RN, RT, I, I, I, I, I, O, O, I, I, I, I, I,
        ]),
        Desc::new("LDREXD", &[
            COND, O, O, O, I, I, O, I, I, RN, RT, I, I, I, I, I, O, O, I, I, I, I, I,
        ]),
        Desc::new("LDREXH", &[
            COND, O, O, O, I, I, I, I, I, RN, RT, I, I, I, I, I, O, O, I, I, I, I, I,
        ]),
        Desc::new("LDRH", &[
            COND, O, O, O, P, U, I, W, I, RN, RT, B::imm_at(4, 4), I, O, I, I, IMM4,
        ]),
        Desc::new("LDRH", &[COND, O, O, O, P, U, O, W, I, RN, RT, O, O, O, O, I, O, I, I, RM]),
        Desc::new("LDRHT", &[
            COND, O, O, O, O, U, I, I, I, RN, RT, B::imm_at(4, 4), I, O, I, I, IMM4,
        ]),
        Desc::new("LDRHT", &[COND, O, O, O, O, U, O, I, I, RN, RT, O, O, O, O, I, O, I, I, RM]),
        Desc::new("LDRSB", &[
            COND, O, O, O, P, U, I, W, I, RN, RT, B::imm_at(4, 4), I, I, O, I, IMM4,
        ]),
        Desc::new("LDRSB", &[COND, O, O, O, P, U, O, W, I, RN, RT, O, O, O, O, I, I, O, I, RM]),
        Desc::new("LDRSBT", &[
            COND, O, O, O, O, U, I, I, I, RN, RT, B::imm_at(4, 4), I, I, O, I, IMM4,
        ]),
        Desc::new("LDRSBT", &[COND, O, O, O, O, U, O, I, I, RN, RT, O, O, O, O, I, I, O, I, RM]),
        Desc::new("LDRSH", &[
            COND, O, O, O, P, U, I, W, I, RN, RT, B::imm_at(4, 4), I, I, I, I, IMM4,
        ]),
        Desc::new("LDRSH", &[COND, O, O, O, P, U, O, W, I, RN, RT, O, O, O, O, I, I, I, I, RM]),
        Desc::new("LDRSHT", &[
            COND, O, O, O, O, U, I, I, I, RN, RT, B::imm_at(4, 4), I, I, I, I, IMM4,
        ]),
        Desc::new("LDRSHT", &[COND, O, O, O, O, U, O, I, I, RN, RT, O, O, O, O, I, I, I, I, RM]),
        Desc::new("LDRT", &[COND, O, I, O, O, U, O, I, I, RN, RT, IMM12]),
        Desc::new("LDRT", &[COND, O, I, I, O, U, O, I, I, RN, RT, SHIFT5, TYPE, O, RM]),
        Desc::new("LSL", &[COND, O, O, O, I, I, O, I, S, O, O, O, O, RD, IMM5, O, O, O, RM]),
        Desc::new("LSL", &[COND, O, O, O, I, I, O, I, S, O, O, O, O, RD, RM, O, O, O, I, RN]),
        Desc::new("LSR", &[COND, O, O, O, I, I, O, I, S, O, O, O, O, RD, IMM5, O, I, O, RM]),
        Desc::new("LSR", &[COND, O, O, O, I, I, O, I, S, O, O, O, O, RD, RM, O, O, I, I, RN]),
        Desc::new("MCR", &[COND, I, I, I, O, OPC1_3, O, CRN, RT, COPROC, OPC2, I, CRM]),
        Desc::new("MCR2", &[I, I, I, I, I, I, I, O, OPC1_3, O, CRN, RT, COPROC, OPC2, I, CRM]),
        Desc::new("MCRR", &[COND, I, I, O, O, O, I, O, O, RT2, RT, COPROC, OPC1, CRM]),
        Desc::new("MCRR2", &[I, I, I, I, I, I, O, O, O, I, O, O, RT2, RT, COPROC, OPC1, CRM]),
        Desc::new("MLA", &[COND, O, O, O, O, O, O, I, S, RD, RA, RM, I, O, O, I, RN]),
        Desc::new("MLS", &[COND, O, O, O, O, O, I, I, O, RD, RA, RM, I, O, O, I, RN]),
        Desc::new("MOV", &[COND, O, O, I, I, I, O, I, S, O, O, O, O, RD, IMM12])
            .expand(Expansion::Arm),
        Desc::new("MOVW", &[COND, O, O, I, I, O, O, O, O, B::imm_at(4, 12), RD, IMM12]),
        Desc::new("MOV", &[
            COND, O, O, O, I, I, O, I, S, O, O, O, O, RD, O, O, O, O, O, O, O, O, RM,
        ]),
        Desc::new("MOVT", &[COND, O, O, I, I, O, I, O, O, B::imm_at(4, 12), RD, IMM12]),
        Desc::new("MRC", &[COND, I, I, I, O, OPC1_3, I, CRN, RT, COPROC, OPC2, I, CRM]),
        Desc::new("MRC2", &[I, I, I, I, I, I, I, O, OPC1_3, I, CRN, RT, COPROC, OPC2, I, CRM]),
        Desc::new("MRRC", &[COND, I, I, O, O, O, I, O, I, RT2, RT, COPROC, OPC1, CRM]),
        Desc::new("MRS", &[
            COND, O, O, O, I, O, O, O, O, I, I, I, I, RD, O, O, O, O, O, O, O, O, O, O, O, O,
        ]),
        Desc::new("MRRC2", &[I, I, I, I, I, I, O, O, O, I, O, I, RT2, RT, COPROC, OPC1, CRM]),
        Desc::new("MSR", &[COND, O, O, I, I, O, O, I, O, MASK, O, O, I, I, I, I, IMM12])
            .expand(Expansion::Arm),
        Desc::new("MSR", &[
            COND, O, O, O, I, O, O, I, O, MASK, O, O, I, I, I, I, O, O, O, O, O, O, O, O, RN,
        ]),
        Desc::new("MUL", &[COND, O, O, O, O, O, O, O, S, RD, O, O, O, O, RM, I, O, O, I, RN]),
        Desc::new("MVN", &[COND, O, O, I, I, I, I, I, S, O, O, O, O, RD, IMM12])
            .expand(Expansion::Arm),
        Desc::new("MVN", &[COND, O, O, O, I, I, I, I, S, O, O, O, O, RD, SHIFT5, TYPE, O, RM]),
        Desc::new("MVN", &[COND, O, O, O, I, I, I, I, S, O, O, O, O, RD, RS, O, TYPE, I, RM]),
        Desc::new("NOP", &[
            COND, O, O, I, I, O, O, I, O, O, O, O, O, I, I, I, I, O, O, O, O, O, O, O, O, O, O, O,
            O,
        ]),
        Desc::new("ORR", &[COND, O, O, I, I, I, O, O, S, RN, RD, IMM12]).expand(Expansion::Arm),
        Desc::new("ORR", &[COND, O, O, O, I, I, O, O, S, RN, RD, SHIFT5, TYPE, O, RM]),
        Desc::new("ORR", &[COND, O, O, O, I, I, O, O, S, RN, RD, RS, O, TYPE, I, RM]),
        Desc::new("PKHBT", &[COND, O, I, I, O, I, O, O, O, RN, RD, IMM5, O, O, I, RM]),
        Desc::new("PKHTB", &[COND, O, I, I, O, I, O, O, O, RN, RD, IMM5, I, O, I, RM]),
        Desc::new("PLD", &[I, I, I, I, O, I, O, I, U, R, O, I, RN, I, I, I, I, IMM12]),
        Desc::new("PLD", &[
            I, I, I, I, O, I, I, I, U, R, O, I, RN, I, I, I, I, SHIFT5, TYPE, O, RM,
        ]),
        Desc::new("PLI", &[I, I, I, I, O, I, O, O, U, I, O, I, RN, I, I, I, I, IMM12]),
        Desc::new("PLI", &[
            I, I, I, I, O, I, I, O, U, I, O, I, RN, I, I, I, I, SHIFT5, TYPE, O, RM,
        ]),
        Desc::new("POP", &[COND, I, O, O, O, I, O, I, I, I, I, O, I, REGLIST]),
        Desc::new("POP", &[
            COND, O, I, O, O, I, O, O, I, I, I, O, I, RT, O, O, O, O, O, O, O, O, O, I, O, O,
        ]),
        Desc::new("PUSH", &[COND, I, O, O, I, O, O, I, O, I, I, O, I, REGLIST]),
        Desc::new("PUSH", &[
            COND, O, I, O, I, O, O, I, O, I, I, O, I, RT, O, O, O, O, O, O, O, O, O, I, O, O,
        ]),
        Desc::new("QADD", &[COND, O, O, O, I, O, O, O, O, RN, RD, O, O, O, O, O, I, O, I, RM]),
        Desc::new("QADD16", &[COND, O, I, I, O, O, O, I, O, RN, RD, I, I, I, I, O, O, O, I, RM]),
        Desc::new("QADD8", &[COND, O, I, I, O, O, O, I, O, RN, RD, I, I, I, I, I, O, O, I, RM]),
        Desc::new("QASX", &[COND, O, I, I, O, O, O, I, O, RN, RD, I, I, I, I, O, O, I, I, RM]),
        Desc::new("QDADD", &[COND, O, O, O, I, O, I, O, O, RN, RD, O, O, O, O, O, I, O, I, RM]),
        Desc::new("QDSUB", &[COND, O, O, O, I, O, I, I, O, RN, RD, O, O, O, O, O, I, O, I, RM]),
        Desc::new("QSAX", &[COND, O, I, I, O, O, O, I, O, RN, RD, I, I, I, I, O, I, O, I, RM]),
        Desc::new("QSUB", &[COND, O, O, O, I, O, O, I, O, RN, RD, O, O, O, O, O, I, O, I, RM]),
        Desc::new("QSUB16", &[COND, O, I, I, O, O, O, I, O, RN, RD, I, I, I, I, O, I, I, I, RM]),
        Desc::new("QSUB8", &[COND, O, I, I, O, O, O, I, O, RN, RD, I, I, I, I, I, I, I, I, RM]),
        Desc::new("RBIT", &[
            COND, O, I, I, O, I, I, I, I, I, I, I, I, RD, I, I, I, I, O, O, I, I, RM,
        ]),
        Desc::new("REV", &[
            COND, O, I, I, O, I, O, I, I, I, I, I, I, RD, I, I, I, I, O, O, I, I, RM,
        ]),
        Desc::new("REV16", &[
            COND, O, I, I, O, I, O, I, I, I, I, I, I, RD, I, I, I, I, I, O, I, I, RM,
        ]),
        Desc::new("REVSH", &[
            COND, O, I, I, O, I, I, I, I, I, I, I, I, RD, I, I, I, I, I, O, I, I, RM,
        ]),
        Desc::new("ROR", &[COND, O, O, O, I, I, O, I, S, O, O, O, O, RD, IMM5, I, I, O, RM]),
        Desc::new("ROR", &[COND, O, O, O, I, I, O, I, S, O, O, O, O, RD, RM, O, I, I, I, RN]),
        Desc::new("RRX", &[
            COND, O, O, O, I, I, O, I, S, O, O, O, O, RD, O, O, O, O, O, I, I, O, RM,
        ]),
        Desc::new("RSB", &[COND, O, O, I, O, O, I, I, S, RN, RD, IMM12]).expand(Expansion::Arm),
        Desc::new("RSB", &[COND, O, O, O, O, O, I, I, S, RN, RD, SHIFT5, TYPE, O, RM]),
        Desc::new("RSB", &[COND, O, O, O, O, O, I, I, S, RN, RD, RS, O, TYPE, I, RM]),
        Desc::new("RSC", &[COND, O, O, I, O, I, I, I, S, RN, RD, IMM12]).expand(Expansion::Arm),
        Desc::new("RSC", &[COND, O, O, O, O, I, I, I, S, RN, RD, SHIFT5, TYPE, O, RM]),
        Desc::new("RSC", &[COND, O, O, O, O, I, I, I, S, RN, RD, RS, O, TYPE, I, RM]),
        Desc::new("SADD16", &[COND, O, I, I, O, O, O, O, I, RN, RD, I, I, I, I, O, O, O, I, RM]),
        Desc::new("SADD8", &[COND, O, I, I, O, O, O, O, I, RN, RD, I, I, I, I, I, O, O, I, RM]),
        Desc::new("SASX", &[COND, O, I, I, O, O, O, O, I, RN, RD, I, I, I, I, O, O, I, I, RM]),
        Desc::new("SBC", &[COND, O, O, I, O, I, I, O, S, RN, RD, IMM12]).expand(Expansion::Arm),
        Desc::new("SBC", &[COND, O, O, O, O, I, I, O, S, RN, RD, SHIFT5, TYPE, O, RM]),
        Desc::new("SBC", &[COND, O, O, O, O, I, I, O, S, RN, RD, RS, O, TYPE, I, RM]),
        Desc::new("SBFX", &[COND, O, I, I, I, I, O, I, WIDTHM1, RD, LSB, I, O, I, RN]),
        Desc::new("SEL", &[COND, O, I, I, O, I, O, O, O, RN, RD, I, I, I, I, I, O, I, I, RM]),
        Desc::new("SETEND", &[
            I, I, I, I, O, O, O, I, O, O, O, O, O, O, O, I, O, O, O, O, O, O, E, O, O, O, O, O, O,
            O, O, O,
        ]),
        Desc::new("SEV", &[
            COND, O, O, I, I, O, O, I, O, O, O, O, O, I, I, I, I, O, O, O, O, O, O, O, O, O, I, O,
            O,
        ]),
        Desc::new("SHADD16", &[COND, O, I, I, O, O, O, I, I, RN, RD, I, I, I, I, O, O, O, I, RM]),
        Desc::new("SHADD8", &[COND, O, I, I, O, O, O, I, I, RN, RD, I, I, I, I, I, O, O, I, RM]),
        Desc::new("SHASX", &[COND, O, I, I, O, O, O, I, I, RN, RD, I, I, I, I, O, O, I, I, RM]),
        Desc::new("SHSAX", &[COND, O, I, I, O, O, O, I, I, RN, RD, I, I, I, I, O, I, O, I, RM]),
        Desc::new("SHSUB16", &[COND, O, I, I, O, O, O, I, I, RN, RD, I, I, I, I, O, I, I, I, RM]),
        Desc::new("SHSUB8", &[COND, O, I, I, O, O, O, I, I, RN, RD, I, I, I, I, I, I, I, I, RM]),
        Desc::new("SMLA", &[COND, O, O, O, I, O, O, O, O, RD, RA, RM, I, M, N, O, RN]),
        Desc::new("SMLAD", &[COND, O, I, I, I, O, O, O, O, RD, RA, RM, O, O, M, I, RN]),
        Desc::new("SMLAL", &[COND, O, O, O, O, I, I, I, S, RDHI, RDLO, RM, I, O, O, I, RN]),
        Desc::new("SMLAL", &[COND, O, O, O, I, O, I, O, O, RDHI, RDLO, RM, I, M, N, O, RN]),
        Desc::new("SMLALD", &[COND, O, I, I, I, O, I, O, O, RDHI, RDLO, RM, O, O, M, I, RN]),
        Desc::new("SMLAW", &[COND, O, O, O, I, O, O, I, O, RD, RA, RM, I, M, O, O, RN]),
        Desc::new("SMLSD", &[COND, O, I, I, I, O, O, O, O, RD, RA, RM, O, I, M, I, RN]),
        Desc::new("SMLSLD", &[COND, O, I, I, I, O, I, O, O, RDHI, RDLO, RM, O, I, M, I, RN]),
        Desc::new("SMMLA", &[COND, O, I, I, I, O, I, O, I, RD, RA, RM, O, O, R, I, RN]),
        Desc::new("SMMLS", &[COND, O, I, I, I, O, I, O, I, RD, RA, RM, I, I, R, I, RN]),
        Desc::new("SMMUL", &[COND, O, I, I, I, O, I, O, I, RD, I, I, I, I, RM, O, O, R, I, RN]),
        Desc::new("SMUAD", &[COND, O, I, I, I, O, O, O, O, RD, I, I, I, I, RM, O, O, M, I, RN]),
        Desc::new("SMUL", &[COND, O, O, O, I, O, I, I, O, RD, O, O, O, O, RM, I, M, N, O, RN]),
        Desc::new("SMULL", &[COND, O, O, O, O, I, I, O, S, RDHI, RDLO, RM, I, O, O, I, RN]),
        Desc::new("SMULW", &[COND, O, O, O, I, O, O, I, O, RD, O, O, O, O, RM, I, M, I, O, RN]),
        Desc::new("SMUSD", &[COND, O, I, I, I, O, O, O, O, RD, I, I, I, I, RM, O, I, M, I, RN]),
        Desc::new("SSAT", &[COND, O, I, I, O, I, O, I, SAT5, RD, IMM5, SH, O, I, RN]),
        Desc::new("SSAT16", &[COND, O, I, I, O, I, O, I, O, SAT4, RD, I, I, I, I, O, O, I, I, RN]),
        Desc::new("SSAX", &[COND, O, I, I, O, O, O, O, I, RN, RD, I, I, I, I, O, I, O, I, RM]),
        Desc::new("SSUB16", &[COND, O, I, I, O, O, O, O, I, RN, RD, I, I, I, I, O, I, I, I, RM]),
        Desc::new("SSUB8", &[COND, O, I, I, O, O, O, O, I, RN, RD, I, I, I, I, I, I, I, I, RM]),
        Desc::new("STC", &[COND, I, I, O, P, U, D, W, O, RN, CRD, COPROC, IMM8]),
        Desc::new("STC2", &[I, I, I, I, I, I, O, P, U, D, W, O, RN, CRD, COPROC, IMM8]),
        Desc::new("STM", &[COND, I, O, O, O, I, O, W, O, RN, REGLIST]),
        Desc::new("STMDA", &[COND, I, O, O, O, O, O, W, O, RN, REGLIST]),
        Desc::new("STMDB", &[COND, I, O, O, I, O, O, W, O, RN, REGLIST]),
        Desc::new("STMIB", &[COND, I, O, O, I, I, O, W, O, RN, REGLIST]),
        Desc::new("STR", &[COND, O, I, O, P, U, O, W, O, RN, RT, IMM12]),
        Desc::new("STR", &[COND, O, I, I, P, U, O, W, O, RN, RT, SHIFT5, TYPE, O, RM]),
        Desc::new("STRB", &[COND, O, I, O, P, U, I, W, O, RN, RT, IMM12]),
        Desc::new("STRB", &[COND, O, I, I, P, U, I, W, O, RN, RT, SHIFT5, TYPE, O, RM]),
        Desc::new("STRBT", &[COND, O, I, O, O, U, I, I, O, RN, RT, IMM12]),
        Desc::new("STRBT", &[COND, O, I, I, O, U, I, I, O, RN, RT, SHIFT5, TYPE, O, RM]),
        Desc::new("STRD", &[
            COND, O, O, O, P, U, I, W, O, RN, RT, B::imm_at(4, 4), I, I, I, I, IMM4,
        ]),
        Desc::new("STRD", &[COND, O, O, O, P, U, O, W, O, RN, RT, O, O, O, O, I, I, I, I, RM]),
        Desc::new("STREX", &[COND, O, O, O, I, I, O, O, O, RN, RD, I, I, I, I, I, O, O, I, RT]),
        Desc::new("STREXB", &[COND, O, O, O, I, I, I, O, O, RN, RD, I, I, I, I, I, O, O, I, RT]),
        Desc::new("STREXD", &[COND, O, O, O, I, I, O, I, O, RN, RD, I, I, I, I, I, O, O, I, RT]),
        Desc::new("STREXH", &[COND, O, O, O, I, I, I, I, O, RN, RD, I, I, I, I, I, O, O, I, RT]),
        Desc::new("STRH", &[
            COND, O, O, O, P, U, I, W, O, RN, RT, B::imm_at(4, 4), I, O, I, I, IMM4,
        ]),
        Desc::new("STRH", &[COND, O, O, O, P, U, O, W, O, RN, RT, O, O, O, O, I, O, I, I, RM]),
        Desc::new("STRHT", &[
            COND, O, O, O, O, U, I, I, O, RN, RT, B::imm_at(4, 4), I, O, I, I, IMM4,
        ]),
        Desc::new("STRHT", &[COND, O, O, O, O, U, O, I, O, RN, RT, O, O, O, O, I, O, I, I, RM]),
        Desc::new("STRT", &[COND, O, I, O, O, U, O, I, O, RN, RT, IMM12]),
        Desc::new("STRT", &[COND, O, I, I, O, U, O, I, O, RN, RT, SHIFT5, TYPE, O, RM]),
        Desc::new("SUB", &[COND, O, O, I, O, O, I, O, S, RN, RD, IMM12]).expand(Expansion::Arm),
        Desc::new("SUB", &[COND, O, O, O, O, O, I, O, S, RN, RD, SHIFT5, TYPE, O, RM]),
        Desc::new("SUB", &[COND, O, O, O, O, O, I, O, S, RN, RD, RS, O, TYPE, I, RM]),
        Desc::new("SUB", &[COND, O, O, I, O, O, I, O, S, I, I, O, I, RD, IMM12, SP_RN])
            .expand(Expansion::Arm),
        Desc::new("SUB", &[
            COND, O, O, O, O, O, I, O, S, I, I, O, I, RD, SHIFT5, TYPE, O, RM, SP_RN,
        ]),
        Desc::new("SVC", &[COND, I, I, I, I, IMM24]),
        Desc::new("SWP", &[COND, O, O, O, I, O, O, O, O, RN, RT, O, O, O, O, I, O, O, I, RT2]),
        Desc::new("SWPB", &[COND, O, O, O, I, O, I, O, O, RN, RT, O, O, O, O, I, O, O, I, RT2]),
        Desc::new("SXTAB", &[COND, O, I, I, O, I, O, I, O, RN, RD, ROTATE, O, O, O, I, I, I, RM]),
        Desc::new("SXTAB16", &[COND, O, I, I, O, I, O, O, O, RN, RD, ROTATE, O, O, O, I, I, I, RM]),
        Desc::new("SXTAH", &[COND, O, I, I, O, I, O, I, I, RN, RD, ROTATE, O, O, O, I, I, I, RM]),
        Desc::new("SXTB", &[
            COND, O, I, I, O, I, O, I, O, I, I, I, I, RD, ROTATE, O, O, O, I, I, I, RM,
        ]),
        Desc::new("SXTB16", &[
            COND, O, I, I, O, I, O, O, O, I, I, I, I, RD, ROTATE, O, O, O, I, I, I, RM,
        ]),
        Desc::new("SXTH", &[
            COND, O, I, I, O, I, O, I, I, I, I, I, I, RD, ROTATE, O, O, O, I, I, I, RM,
        ]),
        Desc::new("TEQ", &[COND, O, O, I, I, O, O, I, I, RN, O, O, O, O, IMM12])
            .expand(Expansion::Arm),
        Desc::new("TEQ", &[COND, O, O, O, I, O, O, I, I, RN, O, O, O, O, SHIFT5, TYPE, O, RM]),
        Desc::new("TEQ", &[COND, O, O, O, I, O, O, I, I, RN, O, O, O, O, RS, O, TYPE, I, RM]),
        Desc::new("TST", &[COND, O, O, I, I, O, O, O, I, RN, O, O, O, O, IMM12])
            .expand(Expansion::Arm),
        Desc::new("TST", &[COND, O, O, O, I, O, O, O, I, RN, O, O, O, O, SHIFT5, TYPE, O, RM]),
        Desc::new("TST", &[COND, O, O, O, I, O, O, O, I, RN, O, O, O, O, RS, O, TYPE, I, RM]),
        Desc::new("UADD16", &[COND, O, I, I, O, O, I, O, I, RN, RD, I, I, I, I, O, O, O, I, RM]),
        Desc::new("UADD8", &[COND, O, I, I, O, O, I, O, I, RN, RD, I, I, I, I, I, O, O, I, RM]),
        Desc::new("UASX", &[COND, O, I, I, O, O, I, O, I, RN, RD, I, I, I, I, O, O, I, I, RM]),
        Desc::new("UBFX", &[COND, O, I, I, I, I, I, I, WIDTHM1, RD, LSB, I, O, I, RN]),
        Desc::new("UDF", &[COND, O, I, I, I, I, I, I, I, B::imm_at(12, 4), I, I, I, I, IMM4]),
        Desc::new("UHADD16", &[COND, O, I, I, O, O, I, I, I, RN, RD, I, I, I, I, O, O, O, I, RM]),
        Desc::new("UHADD8", &[COND, O, I, I, O, O, I, I, I, RN, RD, I, I, I, I, I, O, O, I, RM]),
        Desc::new("UHASX", &[COND, O, I, I, O, O, I, I, I, RN, RD, I, I, I, I, O, O, I, I, RM]),
        Desc::new("UHSAX", &[COND, O, I, I, O, O, I, I, I, RN, RD, I, I, I, I, O, I, O, I, RM]),
        Desc::new("UHSUB16", &[COND, O, I, I, O, O, I, I, I, RN, RD, I, I, I, I, O, I, I, I, RM]),
        Desc::new("UHSUB8", &[COND, O, I, I, O, O, I, I, I, RN, RD, I, I, I, I, I, I, I, I, RM]),
        Desc::new("UMAAL", &[COND, O, O, O, O, O, I, O, O, RDHI, RDLO, RM, I, O, O, I, RN]),
        Desc::new("UMLAL", &[COND, O, O, O, O, I, O, I, S, RDHI, RDLO, RM, I, O, O, I, RN]),
        Desc::new("UMULL", &[COND, O, O, O, O, I, O, O, S, RDHI, RDLO, RM, I, O, O, I, RN]),
        Desc::new("UQADD16", &[COND, O, I, I, O, O, I, I, O, RN, RD, I, I, I, I, O, O, O, I, RM]),
        Desc::new("UQADD8", &[COND, O, I, I, O, O, I, I, O, RN, RD, I, I, I, I, I, O, O, I, RM]),
        Desc::new("UQASX", &[COND, O, I, I, O, O, I, I, O, RN, RD, I, I, I, I, O, O, I, I, RM]),
        Desc::new("UQSAX", &[COND, O, I, I, O, O, I, I, O, RN, RD, I, I, I, I, O, I, O, I, RM]),
        Desc::new("UQSUB16", &[COND, O, I, I, O, O, I, I, O, RN, RD, I, I, I, I, O, I, I, I, RM]),
        Desc::new("UQSUB8", &[COND, O, I, I, O, O, I, I, O, RN, RD, I, I, I, I, I, I, I, I, RM]),
        Desc::new("USAD8", &[COND, O, I, I, I, I, O, O, O, RD, I, I, I, I, RM, O, O, O, I, RN]),
        Desc::new("USADA8", &[COND, O, I, I, I, I, O, O, O, RD, RA, RM, O, O, O, I, RN]),
        Desc::new("USAT", &[COND, O, I, I, O, I, I, I, SAT5, RD, IMM5, SH, O, I, RN]),
        Desc::new("USAT16", &[COND, O, I, I, O, I, I, I, O, SAT4, RD, I, I, I, I, O, O, I, I, RN]),
        Desc::new("USAX", &[COND, O, I, I, O, O, I, O, I, RN, RD, I, I, I, I, O, I, O, I, RM]),
        Desc::new("USUB16", &[COND, O, I, I, O, O, I, O, I, RN, RD, I, I, I, I, O, I, I, I, RM]),
        Desc::new("USUB8", &[COND, O, I, I, O, O, I, O, I, RN, RD, I, I, I, I, I, I, I, I, RM]),
        Desc::new("UXTAB", &[COND, O, I, I, O, I, I, I, O, RN, RD, ROTATE, O, O, O, I, I, I, RM]),
        Desc::new("UXTAB16", &[COND, O, I, I, O, I, I, O, O, RN, RD, ROTATE, O, O, O, I, I, I, RM]),
        Desc::new("UXTAH", &[COND, O, I, I, O, I, I, I, I, RN, RD, ROTATE, O, O, O, I, I, I, RM]),
        Desc::new("UXTB", &[
            COND, O, I, I, O, I, I, I, O, I, I, I, I, RD, ROTATE, O, O, O, I, I, I, RM,
        ]),
        Desc::new("UXTB16", &[
            COND, O, I, I, O, I, I, O, O, I, I, I, I, RD, ROTATE, O, O, O, I, I, I, RM,
        ]),
        Desc::new("UXTH", &[
            COND, O, I, I, O, I, I, I, I, I, I, I, I, RD, ROTATE, O, O, O, I, I, I, RM,
        ]),
        Desc::new("WFE", &[
            COND, O, O, I, I, O, O, I, O, O, O, O, O, I, I, I, I, O, O, O, O, O, O, O, O, O, O, I,
            O,
        ]),
        Desc::new("WFI", &[
            COND, O, O, I, I, O, O, I, O, O, O, O, O, I, I, I, I, O, O, O, O, O, O, O, O, O, O, I,
            I,
        ]),
        Desc::new("YIELD", &[
            COND, O, O, I, I, O, O, I, O, O, O, O, O, I, I, I, I, O, O, O, O, O, O, O, O, O, O, O,
            I,
        ]),
        Desc::new("MRS", &[
            COND, O, O, O, I, O, R, O, O, I, I, I, I, RD, O, O, O, O, O, O, O, O, O, O, O, O,
        ]),
        Desc::new("SMC", &[
            COND, O, O, O, I, O, I, I, O, O, O, O, O, O, O, O, O, O, O, O, O, O, I, I, I, IMM4,
        ]),
        simd_immediate("VMOV", 0, &[0, 2, 4, 6, 8, 10, 12, 13, 14, 15]),
        simd_immediate("VMOV", 1, &[14]),
        simd_immediate("VMVN", 1, &[0, 2, 4, 6, 8, 10, 12, 13]),
        simd_immediate("VORR", 0, &[1, 3, 5, 7, 9, 11]),
        simd_immediate("VBIC", 1, &[1, 3, 5, 7, 9, 11]),
    ]
}

/// One Advanced SIMD "one register and a modified immediate" encoding.
///
/// `a:b:c:d:e:f:g:h` is spread over bits 24, 18..16 and 3..0; `op` is a
/// constant bit, recorded in the `Op` slot when set so the expansion can read it.
fn simd_immediate(mnemonic: &str, op: u8, cmodes: &[u32]) -> Desc {
    let mut bits = vec![
        I, I, I, I, O, O, I, B::imm_at(1, 7), I, VD_HI, O, O, O, B::imm_at(3, 4), VD, CMODE, O, Q,
    ];
    if op == 0 {
        bits.extend([O, I, IMM4]);
    } else {
        bits.extend([I, I, IMM4, B::derived(Field::Op, 1)]);
    }
    Desc::new(mnemonic, &bits).constrain(Field::Cmode, cmodes).expand(Expansion::AdvSimd)
}
