//! Pieces of an encoding.
//!
//! An encoding is declared as an ordered list of [`BitField`] pieces, most
//! significant bit first. Each piece is either a fixed bit, a run of operand
//! bits routed into a slot or into the immediate accumulator, or a
//! zero-width assignment implied by the encoding itself.

use super::field::Field;

/// One piece of an instruction encoding.
///
/// `merge` is the bit position the piece lands at inside its destination.
/// Pieces sharing a destination are OR-ed together, which is how operands
/// split across non-adjacent bit ranges are reassembled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitField {
    /// A single fixed bit (0 or 1).
    Constant(u8),
    /// Register operand bits.
    Register {
        /// Destination slot.
        slot: Field,
        /// Number of bits.
        width: u8,
        /// Bit position inside the slot value.
        merge: u8,
    },
    /// Flag, selector, or other opaque operand bits.
    Plain {
        /// Destination slot.
        slot: Field,
        /// Number of bits.
        width: u8,
        /// Bit position inside the slot value.
        merge: u8,
    },
    /// Register bits written to two slots at once (`Rdn`, `Rdm`).
    DoubleRegister {
        /// First destination slot.
        first: Field,
        /// Second destination slot.
        second: Field,
        /// Number of bits.
        width: u8,
        /// Bit position inside both slot values.
        merge: u8,
    },
    /// Immediate bits placed at bit 0 of the immediate.
    Immediate {
        /// Number of bits.
        width: u8,
    },
    /// Immediate bits placed at `merge` inside the immediate.
    ScatteredImmediate {
        /// Number of bits.
        width: u8,
        /// Bit position inside the immediate.
        merge: u8,
    },
    /// Topmost immediate piece; the assembled immediate is sign-extended
    /// from `merge + width` bits.
    ScatteredSignExtendImmediate {
        /// Number of bits.
        width: u8,
        /// Bit position inside the immediate.
        merge: u8,
    },
    /// One encoding bit `J` stored as `NOT(J XOR S)` at `merge`, where `S`
    /// is the sign bit already merged by the sign-extending piece.
    BranchNotXor {
        /// Bit position inside the immediate.
        merge: u8,
    },
    /// Operand value implied by the encoding, consuming no bits.
    Derived {
        /// Destination slot.
        slot: Field,
        /// Value written.
        value: u16,
    },
}

impl BitField {
    /// A zero bit.
    pub const ZERO: Self = Self::Constant(0);
    /// A one bit.
    pub const ONE: Self = Self::Constant(1);

    /// Register piece at bit 0 of `slot`.
    pub const fn reg(slot: Field, width: u8) -> Self {
        Self::Register { slot, width, merge: 0 }
    }

    /// Register piece merged at `merge` inside `slot`.
    pub const fn reg_at(slot: Field, width: u8, merge: u8) -> Self {
        Self::Register { slot, width, merge }
    }

    /// Plain piece at bit 0 of `slot`.
    pub const fn plain(slot: Field, width: u8) -> Self {
        Self::Plain { slot, width, merge: 0 }
    }

    /// Plain piece merged at `merge` inside `slot`.
    pub const fn plain_at(slot: Field, width: u8, merge: u8) -> Self {
        Self::Plain { slot, width, merge }
    }

    /// Register piece written to both `first` and `second`.
    pub const fn double(first: Field, second: Field, width: u8, merge: u8) -> Self {
        Self::DoubleRegister { first, second, width, merge }
    }

    /// Plain immediate piece.
    pub const fn imm(width: u8) -> Self {
        Self::Immediate { width }
    }

    /// Scattered immediate piece.
    pub const fn imm_at(width: u8, merge: u8) -> Self {
        Self::ScatteredImmediate { width, merge }
    }

    /// Sign-extending scattered immediate piece.
    pub const fn imm_signed(width: u8, merge: u8) -> Self {
        Self::ScatteredSignExtendImmediate { width, merge }
    }

    /// Zero-width assignment.
    pub const fn derived(slot: Field, value: u16) -> Self {
        Self::Derived { slot, value }
    }

    /// Number of encoding bits this piece consumes.
    pub const fn width(&self) -> u32 {
        match *self {
            Self::Constant(_) | Self::BranchNotXor { .. } => 1,
            Self::Register { width, .. }
            | Self::Plain { width, .. }
            | Self::DoubleRegister { width, .. }
            | Self::Immediate { width }
            | Self::ScatteredImmediate { width, .. }
            | Self::ScatteredSignExtendImmediate { width, .. } => width as u32,
            Self::Derived { .. } => 0,
        }
    }

    /// Returns true for a fixed bit.
    pub const fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    /// Returns true for pieces routed into register slots.
    pub const fn is_register(&self) -> bool {
        matches!(self, Self::Register { .. } | Self::DoubleRegister { .. })
    }

    /// Returns true for pieces routed into the immediate accumulator.
    pub const fn is_immediate(&self) -> bool {
        matches!(
            self,
            Self::Immediate { .. }
                | Self::ScatteredImmediate { .. }
                | Self::ScatteredSignExtendImmediate { .. }
                | Self::BranchNotXor { .. }
        )
    }

    /// Returns true for pieces that merge at a non-zero position or
    /// combine with other pieces of the same destination.
    pub const fn is_scattered(&self) -> bool {
        match *self {
            Self::ScatteredImmediate { .. }
            | Self::ScatteredSignExtendImmediate { .. }
            | Self::BranchNotXor { .. } => true,
            Self::Register { merge, .. }
            | Self::Plain { merge, .. }
            | Self::DoubleRegister { merge, .. } => merge != 0,
            Self::Constant(_) | Self::Immediate { .. } | Self::Derived { .. } => false,
        }
    }

    /// Returns true for zero-width assignments.
    pub const fn is_derived(&self) -> bool {
        matches!(self, Self::Derived { .. })
    }

    /// Returns true if the piece writes into `field`.
    pub fn targets(&self, field: Field) -> bool {
        match *self {
            Self::Register { slot, .. } | Self::Plain { slot, .. } | Self::Derived { slot, .. } => {
                slot == field
            }
            Self::DoubleRegister { first, second, .. } => first == field || second == field,
            _ => false,
        }
    }
}
