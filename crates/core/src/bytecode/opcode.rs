//! Bytecode opcodes and their operand layouts.
//!
//! Each op is one opcode byte followed by a fixed number of operand bytes.
//! Branch-table offsets are stored as two bytes, low byte first. Word bit
//! positions (`shift`) count from the least significant bit of the word.

/// Opcode byte of a bytecode op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// No instruction matched.
    Fail = 0,
    /// `shift, lut_lo, lut_hi`: continue at `lut[off + bit]`.
    Step = 1,
    /// `shift, expected, lut_lo, lut_hi`: `lut[off]` if the nibble differs,
    /// `lut[off + 1]` if it equals `expected`.
    CmpNibble = 2,
    /// `shift, width, lut_lo, lut_hi`: continue at `lut[off + bits]`.
    Lookup = 3,
    /// Decoding finished.
    ReturnOk = 4,
    /// `index_lo, index_hi, size`: record the matched mnemonic and width.
    SetMnemonic = 5,
    /// `slot, shift, width`: store bits into a slot.
    Extract = 6,
    /// `slot, shift, width, merge`: OR bits into a slot at `merge`.
    ExtractScattered = 7,
    /// `shift, width`: OR bits into the immediate.
    ExtractImmediate = 8,
    /// `shift, width, merge`: OR bits into the immediate at `merge`.
    ExtractImmediateAt = 9,
    /// `total`: sign-extend the immediate from `total` bits.
    SignExtend = 10,
    /// `slot, value_lo, value_hi`: store a literal into a slot.
    Assign = 11,
    /// Apply ARMExpandImm to the immediate.
    ExpandImmediateArm = 12,
    /// Apply ThumbExpandImm to the immediate.
    ExpandImmediateThumb = 13,
    /// Apply AdvSIMDExpandImm to the immediate.
    ExpandImmediateSimd = 14,
    /// `shift, merge, sign_bit`: OR `NOT(bit XOR imm[sign_bit])` at `merge`.
    BranchNotXor = 15,
}

impl Opcode {
    /// Number of operand bytes following the opcode byte.
    pub const fn operands(self) -> usize {
        match self {
            Self::Fail
            | Self::ReturnOk
            | Self::ExpandImmediateArm
            | Self::ExpandImmediateThumb
            | Self::ExpandImmediateSimd => 0,
            Self::SignExtend => 1,
            Self::ExtractImmediate => 2,
            Self::Step
            | Self::SetMnemonic
            | Self::Extract
            | Self::ExtractImmediateAt
            | Self::Assign
            | Self::BranchNotXor => 3,
            Self::CmpNibble | Self::Lookup | Self::ExtractScattered => 4,
        }
    }

    /// Total size of the op in bytes.
    pub const fn size(self) -> usize {
        1 + self.operands()
    }

    /// Decodes an opcode byte.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        Some(match byte {
            0 => Self::Fail,
            1 => Self::Step,
            2 => Self::CmpNibble,
            3 => Self::Lookup,
            4 => Self::ReturnOk,
            5 => Self::SetMnemonic,
            6 => Self::Extract,
            7 => Self::ExtractScattered,
            8 => Self::ExtractImmediate,
            9 => Self::ExtractImmediateAt,
            10 => Self::SignExtend,
            11 => Self::Assign,
            12 => Self::ExpandImmediateArm,
            13 => Self::ExpandImmediateThumb,
            14 => Self::ExpandImmediateSimd,
            15 => Self::BranchNotXor,
            _ => return None,
        })
    }

    /// Mnemonic used in program dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fail => "FAIL",
            Self::Step => "STEP",
            Self::CmpNibble => "CMP_NIBBLE",
            Self::Lookup => "LOOKUP",
            Self::ReturnOk => "RETURN_OK",
            Self::SetMnemonic => "SET_MNEMONIC",
            Self::Extract => "EXTRACT",
            Self::ExtractScattered => "EXTRACT_SCATTERED",
            Self::ExtractImmediate => "EXTRACT_IMMEDIATE",
            Self::ExtractImmediateAt => "EXTRACT_IMMEDIATE_AT",
            Self::SignExtend => "SIGN_EXTEND",
            Self::Assign => "ASSIGN",
            Self::ExpandImmediateArm => "EXPAND_IMMEDIATE_ARM",
            Self::ExpandImmediateThumb => "EXPAND_IMMEDIATE_THUMB",
            Self::ExpandImmediateSimd => "EXPAND_IMMEDIATE_SIMD",
            Self::BranchNotXor => "BRANCH_NOT_XOR",
        }
    }
}
