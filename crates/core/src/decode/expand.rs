//! Immediate expansion and shift decoding.
//!
//! Pure functions implementing the architecture manual's pseudocode for
//! modified immediates (ARM, Thumb, Advanced SIMD) and immediate shifts.

use crate::common::bits;

/// Shift operation applied to a register operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShiftKind {
    /// Logical shift left.
    Lsl,
    /// Logical shift right.
    Lsr,
    /// Arithmetic shift right.
    Asr,
    /// Rotate right.
    Ror,
    /// Rotate right by one through carry.
    Rrx,
}

impl ShiftKind {
    /// Shift selected by a two-bit `type` field when the amount comes from a register.
    pub const fn from_type(bits: u32) -> Self {
        match bits & 0b11 {
            0b00 => Self::Lsl,
            0b01 => Self::Lsr,
            0b10 => Self::Asr,
            _ => Self::Ror,
        }
    }
}

/// ARMExpandImm_C: expands a 12-bit ARM modified immediate.
///
/// The low byte is rotated right by twice the top nibble.
///
/// # Returns
///
/// The 32-bit value and the carry-out (bit 31 of the result), which is
/// `None` when the rotation is zero and the carry flag stays unchanged.
pub const fn arm_expand_imm(imm12: u32) -> (u32, Option<bool>) {
    let rotation = ((imm12 >> 8) & 0xF) * 2;
    let byte = imm12 & 0xFF;
    if rotation == 0 {
        return (byte, None);
    }
    let value = byte.rotate_right(rotation);
    (value, Some(value >> 31 == 1))
}

/// ThumbExpandImm_C: expands a 12-bit Thumb-2 modified immediate.
///
/// # Returns
///
/// The 32-bit value and the carry-out, `None` for the byte-replication forms.
pub const fn thumb_expand_imm(imm12: u32) -> (u32, Option<bool>) {
    let imm12 = imm12 & 0xFFF;
    if imm12 >> 10 == 0 {
        let byte = imm12 & 0xFF;
        let value = match (imm12 >> 8) & 0b11 {
            0b00 => byte,
            0b01 => (byte << 16) | byte,
            0b10 => (byte << 24) | (byte << 8),
            _ => byte * 0x0101_0101,
        };
        return (value, None);
    }
    let unrotated = 0x80 | (imm12 & 0x7F);
    let value = unrotated.rotate_right((imm12 >> 7) & 0x1F);
    (value, Some(value >> 31 == 1))
}

/// AdvSIMDExpandImm: expands an 8-bit SIMD modified immediate.
///
/// # Arguments
///
/// * `op` - The `op` bit of the encoding.
/// * `cmode` - The four-bit mode selector.
/// * `imm8` - The assembled `a:b:c:d:e:f:g:h` byte.
///
/// # Returns
///
/// The 64-bit pattern, or `None` for the undefined `cmode = 1111, op = 1` case.
pub const fn adv_simd_expand_imm(op: u32, cmode: u32, imm8: u32) -> Option<u64> {
    let imm8 = (imm8 & 0xFF) as u64;
    let low = cmode & 1 != 0;
    let value = match (cmode >> 1) & 0b111 {
        0b000 => bits::replicate(imm8, 32, 2),
        0b001 => bits::replicate(imm8 << 8, 32, 2),
        0b010 => bits::replicate(imm8 << 16, 32, 2),
        0b011 => bits::replicate(imm8 << 24, 32, 2),
        0b100 => bits::replicate(imm8, 16, 4),
        0b101 => bits::replicate(imm8 << 8, 16, 4),
        0b110 => {
            if low {
                bits::replicate((imm8 << 16) | 0xFFFF, 32, 2)
            } else {
                bits::replicate((imm8 << 8) | 0xFF, 32, 2)
            }
        }
        _ => match (low, op & 1 != 0) {
            (false, false) => bits::replicate(imm8, 8, 8),
            (false, true) => {
                let mut mask = 0;
                let mut i: u64 = 0;
                while i < 8 {
                    if imm8 & (1 << i) != 0 {
                        mask |= 0xFF << (8 * i);
                    }
                    i += 1;
                }
                mask
            }
            (true, false) => {
                let a = (imm8 >> 7) & 1;
                let b = (imm8 >> 6) & 1;
                let single = (a << 31)
                    | ((b ^ 1) << 30)
                    | (if b == 1 { 0b11111 << 25 } else { 0 })
                    | ((imm8 & 0x3F) << 19);
                bits::replicate(single, 32, 2)
            }
            (true, true) => return None,
        },
    };
    Some(value)
}

/// DecodeImmShift: turns a `type` field and a five-bit amount into a shift.
///
/// `LSR #0` and `ASR #0` encode a shift by 32, `ROR #0` encodes `RRX`.
pub const fn decode_imm_shift(kind: u32, imm5: u32) -> (ShiftKind, u32) {
    let imm5 = imm5 & 0x1F;
    match kind & 0b11 {
        0b00 => (ShiftKind::Lsl, imm5),
        0b01 => (ShiftKind::Lsr, if imm5 == 0 { 32 } else { imm5 }),
        0b10 => (ShiftKind::Asr, if imm5 == 0 { 32 } else { imm5 }),
        _ => {
            if imm5 == 0 {
                (ShiftKind::Rrx, 1)
            } else {
                (ShiftKind::Ror, imm5)
            }
        }
    }
}
