//! # Table Construction Tests
//!
//! Small synthetic descriptor sets exercising trie precedence, build errors,
//! constraint expansion, and each operand extraction form.

use armdec_core::bytecode::{FamilyLayout, emit};
use armdec_core::common::error::MalformedKind;
use armdec_core::config::{Dispatch, FamilyConfig};
use armdec_core::encoding::{BitField, Field};
use armdec_core::{BuildError, DecodeError, Decoder, InstructionDescriptor};
use pretty_assertions::assert_eq;

use crate::common::builder::pattern::{desc, desc_with, pieces};
use crate::common::harness::init_tracing;

fn build(descriptors: &[InstructionDescriptor]) -> Decoder {
    init_tracing();
    Decoder::build(descriptors, &FamilyConfig::default()).unwrap()
}

fn mnemonic(decoder: &Decoder, word: u32) -> Option<String> {
    decoder.decode(word).ok().map(|insn| decoder.mnemonic(&insn).to_owned())
}

// ══════════════════════════════════════════════════════════
// 1. Precedence
// ══════════════════════════════════════════════════════════

#[test]
fn test_specific_beats_generic() {
    let decoder = build(&[
        desc("GENERIC", "1010 xxxx xxxx xxxx xxxx xxxx xxxx xxxx"),
        desc("SPECIFIC", "1010 0000 xxxx xxxx xxxx xxxx xxxx xxxx"),
    ]);
    assert_eq!(mnemonic(&decoder, 0xA000_0000).as_deref(), Some("SPECIFIC"));
    assert_eq!(mnemonic(&decoder, 0xA100_0000).as_deref(), Some("GENERIC"));
    assert_eq!(mnemonic(&decoder, 0x0000_0000), None);
}

#[test]
fn test_specific_wins_regardless_of_order() {
    let decoder = build(&[
        desc("SPECIFIC", "1010 0000 xxxx xxxx xxxx xxxx xxxx xxxx"),
        desc("GENERIC", "1010 xxxx xxxx xxxx xxxx xxxx xxxx xxxx"),
    ]);
    assert_eq!(mnemonic(&decoder, 0xA000_0000).as_deref(), Some("SPECIFIC"));
    assert_eq!(mnemonic(&decoder, 0xAF00_0000).as_deref(), Some("GENERIC"));
}

#[test]
fn test_nested_fallbacks() {
    let decoder = build(&[
        desc("ONE", "1xxx xxxx xxxx xxxx xxxx xxxx xxxx xxxx"),
        desc("TWO", "11xx xxxx xxxx xxxx xxxx xxxx xxxx xxxx"),
        desc("THREE", "111x xxxx xxxx xxxx xxxx xxxx xxxx xxxx"),
    ]);
    assert_eq!(mnemonic(&decoder, 0xE000_0000).as_deref(), Some("THREE"));
    assert_eq!(mnemonic(&decoder, 0xC000_0000).as_deref(), Some("TWO"));
    assert_eq!(mnemonic(&decoder, 0x8000_0000).as_deref(), Some("ONE"));
    assert_eq!(mnemonic(&decoder, 0x4000_0000), None);
}

#[test]
fn test_dead_end_continues_at_fallback() {
    let decoder = build(&[
        desc("HIGH", "1100 xxxx xxxx xxxx xxxx xxxx xxxx xxxx"),
        desc("ENDS", "1xxx xxxx xxxx xxxx xxxx xxxx xxxx xxx1"),
    ]);
    assert_eq!(mnemonic(&decoder, 0xC000_0000).as_deref(), Some("HIGH"));
    assert_eq!(mnemonic(&decoder, 0xC000_0001).as_deref(), Some("HIGH"));
    assert_eq!(mnemonic(&decoder, 0x8000_0001).as_deref(), Some("ENDS"));
    assert_eq!(decoder.decode(0x8000_0000), Err(DecodeError::Undefined { word: 0x8000_0000 }));
}

// ══════════════════════════════════════════════════════════
// 2. Build errors
// ══════════════════════════════════════════════════════════

#[test]
fn test_identical_fixed_bits_contradict() {
    let result = Decoder::build(
        &[
            desc("FIRST", "1111 0000 xxxx xxxx xxxx xxxx xxxx xxxx"),
            desc("SECOND", "1111 0000 xxxx xxxx xxxx xxxx xxxx xxxx"),
        ],
        &FamilyConfig::default(),
    );
    assert!(matches!(result, Err(BuildError::Contradiction { .. })), "{result:?}");
}

#[test]
fn test_disjoint_patterns_do_not_contradict() {
    // Neither pattern is a subset of the other, but a tested bit separates them.
    let decoder = build(&[
        desc("LEFT", "10xx xxxx xxxx xxxx xxxx xxxx xxxx xxxx"),
        desc("RIGHT", "11xx xxxx xxxx xxxx xxxx xxxx xxxx xxxx"),
    ]);
    assert_eq!(mnemonic(&decoder, 0x8000_0000).as_deref(), Some("LEFT"));
    assert_eq!(mnemonic(&decoder, 0xC000_0000).as_deref(), Some("RIGHT"));
}

#[test]
fn test_bad_width_is_malformed() {
    let result = Decoder::build(&[desc("SHORT", "1111 0000 xxxx")], &FamilyConfig::default());
    assert_eq!(
        result.err(),
        Some(BuildError::MalformedDescriptor {
            mnemonic: "SHORT".into(),
            reason: MalformedKind::Width(12),
        })
    );
}

#[test]
fn test_constraint_on_absent_field_is_malformed() {
    let d = desc("NOFIELD", "1111 xxxx xxxx xxxx xxxx xxxx xxxx xxxx")
        .constrain(Field::Option, &[1]);
    let result = Decoder::build(&[d], &FamilyConfig::default());
    assert_eq!(
        result.err(),
        Some(BuildError::MalformedDescriptor {
            mnemonic: "NOFIELD".into(),
            reason: MalformedKind::MissingConstraintField(Field::Option),
        })
    );
}

#[test]
fn test_oversized_constraint_value_is_malformed() {
    let d = desc_with("WIDE", "1111 xxxx xxxx xxxx xxxx xxxx xxxx", &[BitField::plain(
        Field::Option,
        4,
    )])
    .constrain(Field::Option, &[0x10]);
    let result = Decoder::build(&[d], &FamilyConfig::default());
    assert_eq!(
        result.err(),
        Some(BuildError::MalformedDescriptor {
            mnemonic: "WIDE".into(),
            reason: MalformedKind::ConstraintValueTooWide { field: Field::Option, value: 0x10 },
        })
    );
}

#[test]
fn test_empty_descriptor_set() {
    assert_eq!(Decoder::build(&[], &FamilyConfig::default()).err(), Some(BuildError::Empty));
}

#[test]
fn test_width_not_accepted_by_family() {
    let result = Decoder::build(&[desc("HALF", "1111 0000 xxxx xxxx")], &FamilyConfig::default());
    assert_eq!(
        result.err(),
        Some(BuildError::WidthMismatch { mnemonic: "HALF".into(), width: 16 })
    );
}

#[test]
fn test_unconditional_encoding_must_fix_the_nibble() {
    let result = Decoder::build(
        &[desc("LOOSE", "0xxx xxxx xxxx xxxx xxxx xxxx xxxx xxxx")],
        &FamilyConfig::arm(),
    );
    assert_eq!(result.err(), Some(BuildError::DispatchMismatch { mnemonic: "LOOSE".into() }));
}

#[test]
fn test_narrow_encoding_with_wide_prefix_is_rejected() {
    let result = Decoder::build(&[desc("CLASH", "1111 0xxx xxxx xxxx")], &FamilyConfig::thumb());
    assert_eq!(result.err(), Some(BuildError::DispatchMismatch { mnemonic: "CLASH".into() }));
}

// ══════════════════════════════════════════════════════════
// 3. Constraints
// ══════════════════════════════════════════════════════════

#[test]
fn test_constraint_expansion_restricts_values() {
    let d = desc_with("BARRIER", "1111 0101 0111 1111 1111 0000 0100", &[BitField::plain(
        Field::Option,
        4,
    )])
    .constrain(Field::Option, &[0b0010, 0b1111]);
    let decoder = build(&[d]);

    let insn = decoder.decode(0xF57F_F04F).unwrap();
    assert_eq!(insn.get(Field::Option), Some(0b1111));
    let insn = decoder.decode(0xF57F_F042).unwrap();
    assert_eq!(insn.get(Field::Option), Some(0b0010));
    assert!(decoder.decode(0xF57F_F041).is_err());
}

#[test]
fn test_constrained_field_beats_unconstrained_twin() {
    let loose = desc_with("LOOSE", "1111 0101 0111 1111 1111 0000 0100", &[BitField::plain(
        Field::Option,
        4,
    )]);
    let strict = loose.clone().constrain(Field::Option, &[0b0000]);
    let strict = InstructionDescriptor { mnemonic: "STRICT".into(), ..strict };
    let decoder = build(&[loose, strict]);
    assert_eq!(mnemonic(&decoder, 0xF57F_F040).as_deref(), Some("STRICT"));
    assert_eq!(mnemonic(&decoder, 0xF57F_F041).as_deref(), Some("LOOSE"));
}

// ══════════════════════════════════════════════════════════
// 4. Operand extraction
// ══════════════════════════════════════════════════════════

#[test]
fn test_scattered_immediate_reassembly() {
    let d = desc_with("SCATTER", "1111 0000 0000 0000 0000 0000", &[
        BitField::imm_at(4, 0),
        BitField::imm_at(4, 4),
    ]);
    let insn = build(&[d]).decode(0xF000_00AB).unwrap();
    assert_eq!(insn.imm, Some(0xBA));
}

#[test]
fn test_signed_immediate() {
    let d = desc_with("SIGNED", "1110 0000 0000 0000 0000 0000", &[BitField::imm_signed(8, 1)]);
    let decoder = build(&[d]);
    assert_eq!(decoder.decode(0xE000_00FF).unwrap().imm_signed(), Some(-2));
    assert_eq!(decoder.decode(0xE000_007F).unwrap().imm_signed(), Some(0xFE));
}

#[test]
fn test_scattered_register_and_double_register() {
    let d = desc_with("REGS", "1110 0000 0000 0000 0000 0000", &[
        BitField::reg_at(Field::Rd, 1, 3),
        BitField::reg(Field::Rm, 4),
        BitField::double(Field::Rd, Field::Rn, 3, 0),
    ]);
    // Rd bit 3 = 1, Rm = 0101, Rd/Rn low = 010
    let insn = build(&[d]).decode(0xE000_00AA).unwrap();
    assert_eq!(insn.register(Field::Rd), Some(0b1010));
    assert_eq!(insn.register(Field::Rn), Some(0b010));
    assert_eq!(insn.register(Field::Rm), Some(0b0101));
}

#[test]
fn test_derived_assignment_consumes_no_bits() {
    let mut bits = pieces("1110 0000 0000 0000 0000 0000 xxxx xxxx");
    bits.push(BitField::derived(Field::Size, 2));
    let decoder = build(&[InstructionDescriptor::new("SIZED", &bits)]);
    let insn = decoder.decode(0xE000_0012).unwrap();
    assert_eq!(insn.get(Field::Size), Some(2));
    assert_eq!(insn.imm, Some(0x12));
}

#[test]
fn test_branch_not_xor_pieces() {
    // S, then J1 and J2 folded in as NOT(J XOR S) at bits 3 and 2.
    let d = desc_with("BRANCH", "1111 0000 0000 0000 0000 0000 000", &[
        BitField::imm_signed(1, 4),
        BitField::BranchNotXor { merge: 3 },
        BitField::BranchNotXor { merge: 2 },
        BitField::imm_at(2, 0),
    ]);
    let decoder = build(&[d]);
    // S = 0, J1 = J2 = 1: I1 = I2 = 0.
    assert_eq!(decoder.decode(0xF000_000C).unwrap().imm_signed(), Some(0));
    // S = 0, J1 = J2 = 0: I1 = I2 = 1.
    assert_eq!(decoder.decode(0xF000_0000).unwrap().imm_signed(), Some(0b01100));
    // S = 1, J1 = J2 = 1: I1 = I2 = 1, sign-extended.
    assert_eq!(decoder.decode(0xF000_001F).unwrap().imm_signed(), Some(-1));
}

#[test]
fn test_not_xor_before_sign_is_malformed() {
    let d = desc_with("BACKWARDS", "1111 0000 0000 0000 0000 0000 000", &[
        BitField::BranchNotXor { merge: 3 },
        BitField::imm_signed(1, 4),
        BitField::imm(3),
    ]);
    let result = Decoder::build(&[d], &FamilyConfig::default());
    assert_eq!(
        result.err(),
        Some(BuildError::MalformedDescriptor {
            mnemonic: "BACKWARDS".into(),
            reason: MalformedKind::SignAfterNotXor,
        })
    );
}

#[test]
fn test_register_merged_past_the_slot_is_malformed() {
    let d = desc_with("HIGHREG", "1111 1111 1111 1111 1111 1111 1111", &[BitField::reg_at(
        Field::Rd,
        4,
        40,
    )]);
    let result = Decoder::build(&[d], &FamilyConfig::default());
    assert_eq!(
        result.err(),
        Some(BuildError::MalformedDescriptor {
            mnemonic: "HIGHREG".into(),
            reason: MalformedKind::MergeOutOfRange { merge: 40, width: 4, limit: 32 },
        })
    );
}

#[test]
fn test_immediate_merged_past_the_accumulator_is_malformed() {
    let d = desc_with("HIGHIMM", "1111 1111 1111 1111 1111 1111", &[BitField::imm_signed(
        8, 250,
    )]);
    let result = Decoder::build(&[d], &FamilyConfig::default());
    assert_eq!(
        result.err(),
        Some(BuildError::MalformedDescriptor {
            mnemonic: "HIGHIMM".into(),
            reason: MalformedKind::MergeOutOfRange { merge: 250, width: 8, limit: 64 },
        })
    );
}

#[test]
fn test_merge_bounds_are_inclusive() {
    // Rd bits land on 28..32 and the immediate on 56..64.
    let d = desc_with("TOP", "1111 0000 0000 0000 0000 0000", &[
        BitField::reg_at(Field::Rd, 4, 28),
        BitField::imm_at(4, 60),
    ]);
    let decoder = build(&[d]);
    let insn = decoder.decode(0xF000_00A5).unwrap();
    assert_eq!(insn.get(Field::Rd), Some(0xA000_0000));
    assert_eq!(insn.imm, Some(0x5000_0000_0000_0000));

    let d = desc_with("OVER", "1111 0000 0000 0000 0000 0000 0000", &[BitField::reg_at(
        Field::Rd,
        4,
        29,
    )]);
    assert!(matches!(
        d.validate(),
        Err(BuildError::MalformedDescriptor {
            reason: MalformedKind::MergeOutOfRange { merge: 29, .. },
            ..
        })
    ));
}

#[test]
fn test_zero_width_sign_piece_is_malformed() {
    let d = desc_with("NOSIGN", "1111 0000 0000 0000 0000 0000 0000 0000", &[
        BitField::imm_signed(0, 0),
    ]);
    assert_eq!(
        d.validate(),
        Err(BuildError::MalformedDescriptor {
            mnemonic: "NOSIGN".into(),
            reason: MalformedKind::EmptySignPiece,
        })
    );
}

#[test]
fn test_mnemonic_longer_than_length_prefix_is_malformed() {
    let name = "X".repeat(usize::from(u16::MAX) + 1);
    let d = desc(&name, "1111 xxxx xxxx xxxx xxxx xxxx xxxx xxxx");
    let result = Decoder::build(&[d], &FamilyConfig::default());
    assert_eq!(
        result.err(),
        Some(BuildError::MalformedDescriptor {
            mnemonic: name,
            reason: MalformedKind::MnemonicTooLong(usize::from(u16::MAX) + 1),
        })
    );

    let longest = "X".repeat(usize::from(u16::MAX));
    let decoder = build(&[desc(&longest, "1111 xxxx xxxx xxxx xxxx xxxx xxxx xxxx")]);
    let bytes = decoder.program().to_bytes().unwrap();
    let loaded = armdec_core::Program::from_bytes(&bytes).unwrap();
    assert_eq!(loaded.mnemonics(), &[longest]);
}

fn layout_without_mnemonics() -> FamilyLayout {
    let d = desc("LOST", "1111 xxxx xxxx xxxx xxxx xxxx xxxx xxxx");
    let mut layout = FamilyLayout::new(&[d], &FamilyConfig::default(), false).unwrap();
    layout.mnemonics.clear();
    layout
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "LOST was never interned")]
fn test_leaf_with_uninterned_mnemonic_asserts() {
    let _ = emit(&layout_without_mnemonics());
}

#[test]
#[cfg(not(debug_assertions))]
fn test_leaf_with_uninterned_mnemonic_is_reported() {
    assert_eq!(
        emit(&layout_without_mnemonics()).err(),
        Some(BuildError::UnknownMnemonic { mnemonic: "LOST".into() })
    );
}

// ══════════════════════════════════════════════════════════
// 5. Narrow families
// ══════════════════════════════════════════════════════════

#[test]
fn test_sixteen_bit_family() {
    let family = FamilyConfig { dispatch: Dispatch::Trie, widths: vec![16] };
    let decoder = Decoder::build(
        &[desc("HALF", "1011 xxxx xxxx xxxx"), desc("OTHER", "0xxx xxxx xxxx xxxx")],
        &family,
    )
    .unwrap();
    let insn = decoder.decode_halfwords(0xB123, None).unwrap();
    assert_eq!(decoder.mnemonic(&insn), "HALF");
    assert_eq!(insn.imm, Some(0x123));
    assert_eq!(insn.width, 16);
    assert_eq!(mnemonic(&decoder, 0x7FFF).as_deref(), Some("OTHER"));
    assert_eq!(mnemonic(&decoder, 0xC000), None);
}

#[test]
fn test_traced_build_matches_plain_build() {
    init_tracing();
    let descriptors = [
        desc("A", "1010 xxxx xxxx xxxx xxxx xxxx xxxx xxxx"),
        desc("B", "1011 xxxx xxxx xxxx xxxx xxxx xxxx xxxx"),
    ];
    let plain = Decoder::build(&descriptors, &FamilyConfig::default()).unwrap();
    let traced = Decoder::build_traced(&descriptors, &FamilyConfig::default(), true).unwrap();
    assert_eq!(plain.program(), traced.program());
}
