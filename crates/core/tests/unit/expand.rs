//! # Immediate Expansion Tests
//!
//! Golden values for the modified-immediate expansions and DecodeImmShift.

use armdec_core::decode::ShiftKind;
use armdec_core::decode::expand::{
    adv_simd_expand_imm, arm_expand_imm, decode_imm_shift, thumb_expand_imm,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::unrotated(0x0FF, 0xFF, None)]
#[case::rotate_by_two(0x104, 0x1, Some(false))]
#[case::into_top_bits(0x101, 0x4000_0000, Some(false))]
#[case::rotate_by_thirty(0xF01, 0x4, Some(false))]
#[case::sets_carry(0x4FF, 0xFF00_0000, Some(true))]
fn test_arm_expand_imm(#[case] imm12: u32, #[case] value: u32, #[case] carry: Option<bool>) {
    assert_eq!(arm_expand_imm(imm12), (value, carry));
}

#[rstest]
#[case::plain_byte(0x0FE, 0xFE, None)]
#[case::low_halves(0x155, 0x0055_0055, None)]
#[case::high_halves(0x255, 0x5500_5500, None)]
#[case::all_bytes(0x355, 0x5555_5555, None)]
#[case::rotated(0xC55, 0xD500, Some(false))]
#[case::rotated_into_sign(0x400, 0x8000_0000, Some(true))]
fn test_thumb_expand_imm(#[case] imm12: u32, #[case] value: u32, #[case] carry: Option<bool>) {
    assert_eq!(thumb_expand_imm(imm12), (value, carry));
}

#[rstest]
#[case::word_lane(0, 0b0000, 0xAB, 0x0000_00AB_0000_00AB)]
#[case::word_lane_shifted(0, 0b0010, 0xAB, 0x0000_AB00_0000_AB00)]
#[case::word_lane_top(0, 0b0110, 0xAB, 0xAB00_0000_AB00_0000)]
#[case::halfword_lane(0, 0b1000, 0xAB, 0x00AB_00AB_00AB_00AB)]
#[case::halfword_lane_shifted(0, 0b1010, 0xAB, 0xAB00_AB00_AB00_AB00)]
#[case::ones_filled(0, 0b1100, 0xAB, 0x0000_ABFF_0000_ABFF)]
#[case::ones_filled_wide(0, 0b1101, 0xAB, 0x00AB_FFFF_00AB_FFFF)]
#[case::byte_lanes(0, 0b1110, 0xAB, 0xABAB_ABAB_ABAB_ABAB)]
#[case::byte_mask(1, 0b1110, 0x81, 0xFF00_0000_0000_00FF)]
#[case::float_one(0, 0b1111, 0x70, 0x3F80_0000_3F80_0000)]
fn test_adv_simd_expand_imm(
    #[case] op: u32,
    #[case] cmode: u32,
    #[case] imm8: u32,
    #[case] expected: u64,
) {
    assert_eq!(adv_simd_expand_imm(op, cmode, imm8), Some(expected));
}

#[test]
fn test_adv_simd_reserved_form() {
    assert_eq!(adv_simd_expand_imm(1, 0b1111, 0x70), None);
}

#[rstest]
#[case::lsl(0b00, 0, ShiftKind::Lsl, 0)]
#[case::lsr_32(0b01, 0, ShiftKind::Lsr, 32)]
#[case::lsr(0b01, 5, ShiftKind::Lsr, 5)]
#[case::asr_32(0b10, 0, ShiftKind::Asr, 32)]
#[case::rrx(0b11, 0, ShiftKind::Rrx, 1)]
#[case::ror(0b11, 4, ShiftKind::Ror, 4)]
fn test_decode_imm_shift(
    #[case] kind: u32,
    #[case] imm5: u32,
    #[case] expected: ShiftKind,
    #[case] amount: u32,
) {
    assert_eq!(decode_imm_shift(kind, imm5), (expected, amount));
}
