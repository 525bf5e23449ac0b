//! Decoded instruction record and typed operand views.

use super::expand::{ShiftKind, decode_imm_shift};
use crate::encoding::Field;

/// Condition code of a conditional instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Equal (Z set).
    Eq,
    /// Not equal (Z clear).
    Ne,
    /// Carry set / unsigned higher or same.
    Cs,
    /// Carry clear / unsigned lower.
    Cc,
    /// Minus / negative.
    Mi,
    /// Plus / positive or zero.
    Pl,
    /// Overflow.
    Vs,
    /// No overflow.
    Vc,
    /// Unsigned higher.
    Hi,
    /// Unsigned lower or same.
    Ls,
    /// Signed greater than or equal.
    Ge,
    /// Signed less than.
    Lt,
    /// Signed greater than.
    Gt,
    /// Signed less than or equal.
    Le,
    /// Always.
    Al,
    /// The `0b1111` encoding: unconditional space on ARM, always on Thumb branches.
    Nv,
}

impl Condition {
    /// Decodes a four-bit condition field.
    pub const fn from_bits(bits: u32) -> Self {
        match bits & 0xF {
            0x0 => Self::Eq,
            0x1 => Self::Ne,
            0x2 => Self::Cs,
            0x3 => Self::Cc,
            0x4 => Self::Mi,
            0x5 => Self::Pl,
            0x6 => Self::Vs,
            0x7 => Self::Vc,
            0x8 => Self::Hi,
            0x9 => Self::Ls,
            0xA => Self::Ge,
            0xB => Self::Lt,
            0xC => Self::Gt,
            0xD => Self::Le,
            0xE => Self::Al,
            _ => Self::Nv,
        }
    }

    /// Assembly suffix (empty for `AL`).
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Cs => "cs",
            Self::Cc => "cc",
            Self::Mi => "mi",
            Self::Pl => "pl",
            Self::Vs => "vs",
            Self::Vc => "vc",
            Self::Hi => "hi",
            Self::Ls => "ls",
            Self::Ge => "ge",
            Self::Lt => "lt",
            Self::Gt => "gt",
            Self::Le => "le",
            Self::Al | Self::Nv => "",
        }
    }
}

/// Shift applied to the last register operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shift {
    /// Shift by an encoded constant, already run through DecodeImmShift.
    Immediate {
        /// Shift operation.
        kind: ShiftKind,
        /// Shift amount (1..=32, or 0 for no shift).
        amount: u32,
    },
    /// Shift by the bottom byte of a register.
    Register {
        /// Shift operation.
        kind: ShiftKind,
        /// Register holding the amount.
        rs: u32,
    },
}

/// Result of decoding one instruction word.
///
/// Every operand slot is optional, so an absent operand is distinguishable
/// from register 0 or a zero immediate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// The decoded word (for mixed-width families, `hw1 << 16 | hw2`).
    pub word: u32,
    /// Encoding width in bits (16 or 32); 0 until a mnemonic is set.
    pub width: u8,
    /// Index into the program's mnemonic table.
    pub mnemonic: u16,
    /// Immediate after merging, sign extension, and expansion.
    pub imm: Option<u64>,
    /// Carry-out of a modified-immediate expansion, when it defines one.
    pub carry: Option<bool>,
    values: [Option<u32>; Field::COUNT],
}

impl DecodedInstruction {
    /// Creates an empty record for `word`.
    pub const fn new(word: u32) -> Self {
        Self {
            word,
            width: 0,
            mnemonic: 0,
            imm: None,
            carry: None,
            values: [None; Field::COUNT],
        }
    }

    /// Value of an operand slot, if the encoding defines it.
    #[inline]
    pub const fn get(&self, field: Field) -> Option<u32> {
        self.values[field.index()]
    }

    /// Overwrites an operand slot.
    #[inline]
    pub const fn set(&mut self, field: Field, value: u32) {
        self.values[field.index()] = Some(value);
    }

    /// ORs `value` into an operand slot, treating an absent slot as zero.
    #[inline]
    pub const fn merge(&mut self, field: Field, value: u32) {
        let current = match self.values[field.index()] {
            Some(v) => v,
            None => 0,
        };
        self.values[field.index()] = Some(current | value);
    }

    /// Value of a register slot; `None` for non-register slots.
    pub const fn register(&self, field: Field) -> Option<u32> {
        if field.is_register() { self.get(field) } else { None }
    }

    /// Every defined slot with its value, in slot order.
    pub fn operands(&self) -> impl Iterator<Item = (Field, u32)> + '_ {
        Field::ALL
            .iter()
            .filter_map(|&field| self.get(field).map(|value| (field, value)))
    }

    /// Condition code, if the encoding carries one.
    pub fn cond(&self) -> Option<Condition> {
        self.get(Field::Cond).map(Condition::from_bits)
    }

    /// Register list of a block transfer as a bitmask (bit n = register n).
    pub fn reglist(&self) -> Option<u16> {
        self.get(Field::RegisterList).map(|list| list as u16)
    }

    /// Immediate reinterpreted as a signed value.
    pub fn imm_signed(&self) -> Option<i64> {
        self.imm.map(|imm| imm as i64)
    }

    /// Shift applied to the shifted register operand, if any.
    ///
    /// A register-controlled shift is reported when both `type` and `Rs`
    /// are present; otherwise the immediate amount (absent meaning 0) is
    /// run through DecodeImmShift.
    pub fn shift(&self) -> Option<Shift> {
        let kind = self.get(Field::ShiftType)?;
        if let Some(rs) = self.get(Field::Rs) {
            return Some(Shift::Register { kind: ShiftKind::from_type(kind), rs });
        }
        let amount = self.get(Field::ShiftAmount).unwrap_or(0);
        let (kind, amount) = decode_imm_shift(kind, amount);
        Some(Shift::Immediate { kind, amount })
    }
}
