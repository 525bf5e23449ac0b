//! Bit pieces shared by the ARM and Thumb tables.
//!
//! Names follow the architecture manual's encoding diagrams, so a table row
//! reads like the diagram it was taken from.

use crate::encoding::{BitField, Field};

pub(super) const O: BitField = BitField::ZERO;
pub(super) const I: BitField = BitField::ONE;

pub(super) const COND: BitField = BitField::plain(Field::Cond, 4);
pub(super) const S: BitField = BitField::plain(Field::S, 1);
pub(super) const W: BitField = BitField::plain(Field::W, 1);
pub(super) const P: BitField = BitField::plain(Field::P, 1);
pub(super) const U: BitField = BitField::plain(Field::U, 1);
pub(super) const M: BitField = BitField::plain(Field::M, 1);
pub(super) const N: BitField = BitField::plain(Field::N, 1);
pub(super) const R: BitField = BitField::plain(Field::R, 1);
pub(super) const E: BitField = BitField::plain(Field::E, 1);
pub(super) const SH: BitField = BitField::plain(Field::Sh, 1);
pub(super) const TYPE: BitField = BitField::plain(Field::ShiftType, 2);
pub(super) const ROTATE: BitField = BitField::plain(Field::Rotate, 2);
pub(super) const MSB: BitField = BitField::plain(Field::Msb, 5);
pub(super) const WIDTHM1: BitField = BitField::plain(Field::Widthm1, 5);
pub(super) const OPTION: BitField = BitField::plain(Field::Option, 4);
pub(super) const MASK: BitField = BitField::plain(Field::Mask, 2);
pub(super) const SAT4: BitField = BitField::plain(Field::SatImm, 4);
pub(super) const SAT5: BitField = BitField::plain(Field::SatImm, 5);
pub(super) const REGLIST: BitField = BitField::plain(Field::RegisterList, 16);

pub(super) const RD: BitField = BitField::reg(Field::Rd, 4);
pub(super) const RN: BitField = BitField::reg(Field::Rn, 4);
pub(super) const RM: BitField = BitField::reg(Field::Rm, 4);
pub(super) const RA: BitField = BitField::reg(Field::Ra, 4);
pub(super) const RT: BitField = BitField::reg(Field::Rt, 4);
pub(super) const RT2: BitField = BitField::reg(Field::Rt2, 4);
pub(super) const RDHI: BitField = BitField::reg(Field::RdHi, 4);
pub(super) const RDLO: BitField = BitField::reg(Field::RdLo, 4);

// Operands implied by the encoding rather than read from it.
pub(super) const SP_RN: BitField = BitField::derived(Field::Rn, 13);
pub(super) const SP_RD: BitField = BitField::derived(Field::Rd, 13);
pub(super) const PC_RN: BitField = BitField::derived(Field::Rn, 15);

pub(super) const IMM5: BitField = BitField::imm(5);
pub(super) const IMM8: BitField = BitField::imm(8);
pub(super) const IMM12: BitField = BitField::imm(12);
