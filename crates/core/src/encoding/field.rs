//! Operand slots of the decoded record.
//!
//! Every operand an encoding can carry is named by a closed [`Field`] enum.
//! The discriminant doubles as the slot number stored in `EXTRACT` and
//! `ASSIGN` operands, so the order of the variants is part of the serialized
//! program format.

use std::fmt;

/// A named operand slot in a [`DecodedInstruction`](crate::decode::DecodedInstruction).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Field {
    /// Destination register.
    Rd,
    /// First operand register.
    Rn,
    /// Second operand register.
    Rm,
    /// Shift-amount register.
    Rs,
    /// Accumulate register.
    Ra,
    /// Transfer register.
    Rt,
    /// Second transfer register.
    Rt2,
    /// High half of a long destination.
    RdHi,
    /// Low half of a long destination.
    RdLo,
    /// Coprocessor destination register.
    CRd,
    /// Coprocessor first operand register.
    CRn,
    /// Coprocessor second operand register.
    CRm,
    /// SIMD/VFP destination register (including the `D` high bit).
    Vd,
    /// SIMD/VFP first operand register (including the `N` high bit).
    Vn,
    /// SIMD/VFP second operand register (including the `M` high bit).
    Vm,
    /// Condition code.
    Cond,
    /// Set-flags bit.
    S,
    /// Write-back bit.
    W,
    /// Pre/post-index bit.
    P,
    /// Add/subtract offset bit.
    U,
    /// Long-transfer bit of coprocessor loads and stores.
    D,
    /// Top/bottom selector of the first operand.
    N,
    /// Top/bottom selector of the second operand, or exchange bit.
    M,
    /// Quadword bit.
    Q,
    /// Rounding bit.
    R,
    /// Endianness bit.
    E,
    /// Interrupt-flag selector.
    F,
    /// Halfword bit.
    H,
    /// Shift direction bit of saturating instructions.
    Sh,
    /// Shift type (LSL, LSR, ASR, ROR).
    ShiftType,
    /// Immediate shift amount.
    ShiftAmount,
    /// Byte rotation of extend instructions.
    Rotate,
    /// Least significant bit of a bit-field operation.
    Lsb,
    /// Most significant bit of a bit-field operation.
    Msb,
    /// Width minus one of a bit-field extract.
    Widthm1,
    /// Barrier or hint option.
    Option,
    /// Register list of block transfers.
    RegisterList,
    /// Saturation bit position.
    SatImm,
    /// Coprocessor number.
    Coproc,
    /// Coprocessor opcode 1.
    Opc1,
    /// Coprocessor opcode 2.
    Opc2,
    /// SIMD modified-immediate mode.
    Cmode,
    /// SIMD modified-immediate op bit.
    Op,
    /// SIMD element size.
    Size,
    /// First condition of an IT block.
    FirstCond,
    /// IT block mask.
    ItMask,
    /// Status register write mask.
    Mask,
}

impl Field {
    /// Number of operand slots.
    pub const COUNT: usize = Self::ALL.len();

    /// Every slot, in discriminant order.
    pub const ALL: [Self; 47] = [
        Self::Rd,
        Self::Rn,
        Self::Rm,
        Self::Rs,
        Self::Ra,
        Self::Rt,
        Self::Rt2,
        Self::RdHi,
        Self::RdLo,
        Self::CRd,
        Self::CRn,
        Self::CRm,
        Self::Vd,
        Self::Vn,
        Self::Vm,
        Self::Cond,
        Self::S,
        Self::W,
        Self::P,
        Self::U,
        Self::D,
        Self::N,
        Self::M,
        Self::Q,
        Self::R,
        Self::E,
        Self::F,
        Self::H,
        Self::Sh,
        Self::ShiftType,
        Self::ShiftAmount,
        Self::Rotate,
        Self::Lsb,
        Self::Msb,
        Self::Widthm1,
        Self::Option,
        Self::RegisterList,
        Self::SatImm,
        Self::Coproc,
        Self::Opc1,
        Self::Opc2,
        Self::Cmode,
        Self::Op,
        Self::Size,
        Self::FirstCond,
        Self::ItMask,
        Self::Mask,
    ];

    /// Slot number used in bytecode operands.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks a slot up by its bytecode number.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns true for general-purpose, coprocessor, and SIMD register slots.
    pub const fn is_register(self) -> bool {
        (self as u8) <= (Self::Vm as u8)
    }

    /// Architecture-manual name of the slot.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rd => "Rd",
            Self::Rn => "Rn",
            Self::Rm => "Rm",
            Self::Rs => "Rs",
            Self::Ra => "Ra",
            Self::Rt => "Rt",
            Self::Rt2 => "Rt2",
            Self::RdHi => "RdHi",
            Self::RdLo => "RdLo",
            Self::CRd => "CRd",
            Self::CRn => "CRn",
            Self::CRm => "CRm",
            Self::Vd => "Vd",
            Self::Vn => "Vn",
            Self::Vm => "Vm",
            Self::Cond => "cond",
            Self::S => "S",
            Self::W => "W",
            Self::P => "P",
            Self::U => "U",
            Self::D => "D",
            Self::N => "N",
            Self::M => "M",
            Self::Q => "Q",
            Self::R => "R",
            Self::E => "E",
            Self::F => "F",
            Self::H => "H",
            Self::Sh => "sh",
            Self::ShiftType => "type",
            Self::ShiftAmount => "imm5",
            Self::Rotate => "rotate",
            Self::Lsb => "lsb",
            Self::Msb => "msb",
            Self::Widthm1 => "widthm1",
            Self::Option => "option",
            Self::RegisterList => "register_list",
            Self::SatImm => "sat_imm",
            Self::Coproc => "coproc",
            Self::Opc1 => "opc1",
            Self::Opc2 => "opc2",
            Self::Cmode => "cmode",
            Self::Op => "op",
            Self::Size => "size",
            Self::FirstCond => "firstcond",
            Self::ItMask => "mask",
            Self::Mask => "msr_mask",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
