//! # Table Property Tests
//!
//! Whole-table checks of the built-in ARM and Thumb families.
//!
//! # Coverage
//!
//! - Construction: both tables build, deterministically, with sound leaves.
//! - Totality: every narrow Thumb halfword, and random ARM and wide Thumb words.
//! - Round trip: a word built from a descriptor decodes to an encoding that
//!   matches it, never to one that a strictly more specific match shadows.
//! - Operands: every decoded word carries exactly the slots and immediate
//!   its resolved encoding reads, recomputed from the pieces.

use std::sync::LazyLock;

use armdec_core::bytecode::{FamilyLayout, Roots};
use armdec_core::common::bits;
use armdec_core::config::{Config, FamilyConfig};
use armdec_core::encoding::{BitField, Field, InstructionDescriptor};
use armdec_core::isa;
use armdec_core::{DecodeError, DecodedInstruction, Decoder};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use proptest::sample::Index;

use crate::common::builder::word::{fill, fill_arm, strictly_more_specific};
use crate::common::harness::{arm, thumb};

static ARM_LAYOUT: LazyLock<FamilyLayout> = LazyLock::new(|| {
    FamilyLayout::new(&isa::arm::descriptors(), &FamilyConfig::arm(), false).unwrap()
});

static THUMB_LAYOUT: LazyLock<FamilyLayout> = LazyLock::new(|| {
    FamilyLayout::new(&isa::thumb::descriptors(), &FamilyConfig::thumb(), false).unwrap()
});

// ──────────────────────────────────────────────────────────
// Helpers
// ──────────────────────────────────────────────────────────

/// Fixed bits of `descriptor` as a (mask, value) pair over the family word.
fn word_pattern(descriptor: &InstructionDescriptor, word_width: u32) -> (u32, u32) {
    let fixed = descriptor.fixed_bits();
    let (mut mask, mut value) = (0u32, 0u32);
    for offset in 0..descriptor.width() {
        if let Some(bit) = fixed.get(offset) {
            let pos = word_width - 1 - offset;
            mask |= 1 << pos;
            value |= u32::from(bit) << pos;
        }
    }
    (mask, value)
}

fn is_conditional(descriptor: &InstructionDescriptor) -> bool {
    matches!(
        descriptor.bits.first(),
        Some(BitField::Plain { slot: Field::Cond, width: 4, merge: 0 })
    )
}

/// Descriptor index the layout's tries resolve `word` to.
fn route(layout: &FamilyLayout, word: u32) -> Option<usize> {
    let root = match &layout.roots {
        Roots::Single(root) => *root,
        Roots::Condition { shift, value, conditional, unconditional } => {
            if (word >> shift) & 0xF == *value { *unconditional } else { *conditional }
        }
        Roots::Table { shift, width, wide, narrow_root, wide_root } => {
            let prefix = (word >> shift) & ((1 << width) - 1);
            if wide.contains(&prefix) { *wide_root } else { *narrow_root }
        }
    };
    let word_width = layout.word_width;
    layout.tree.route(root, |offset| (word >> (word_width - 1 - offset)) & 1 == 1)
}

/// Operand slots and immediate that `descriptor` reads out of `word`,
/// computed from the pieces alone.
fn expected_operands(
    descriptor: &InstructionDescriptor,
    word: u32,
    word_width: u32,
) -> ([Option<u32>; Field::COUNT], Option<u64>) {
    let mut slots = [None; Field::COUNT];
    let mut pieces_per_slot = [0usize; Field::COUNT];
    for piece in &descriptor.bits {
        match *piece {
            BitField::Register { slot, .. } | BitField::Plain { slot, .. } => {
                pieces_per_slot[slot.index()] += 1;
            }
            BitField::DoubleRegister { first, second, .. } => {
                pieces_per_slot[first.index()] += 1;
                pieces_per_slot[second.index()] += 1;
            }
            _ => {}
        }
    }
    let put = |slots: &mut [Option<u32>; Field::COUNT], slot: Field, value: u32, merge: u8| {
        let current = slots[slot.index()];
        slots[slot.index()] = if pieces_per_slot[slot.index()] > 1 || merge != 0 {
            Some(current.unwrap_or(0) | value << merge)
        } else {
            Some(value)
        };
    };

    let (mut imm, mut has_imm, mut sign_total) = (0u64, false, None);
    for (offset, piece) in descriptor.pieces() {
        let width = piece.width();
        let value = bits::extract(word, word_width - offset - width, width);
        match *piece {
            BitField::Constant(_) => {}
            BitField::Register { slot, merge, .. } | BitField::Plain { slot, merge, .. } => {
                put(&mut slots, slot, value, merge);
            }
            BitField::DoubleRegister { first, second, merge, .. } => {
                put(&mut slots, first, value, merge);
                put(&mut slots, second, value, merge);
            }
            BitField::Immediate { .. } => {
                imm |= u64::from(value);
                has_imm = true;
            }
            BitField::ScatteredImmediate { merge, .. } => {
                imm |= u64::from(value) << merge;
                has_imm = true;
            }
            BitField::ScatteredSignExtendImmediate { merge, .. } => {
                imm |= u64::from(value) << merge;
                has_imm = true;
                sign_total = Some(u32::from(merge) + width);
            }
            BitField::BranchNotXor { merge } => {
                let sign = sign_total.map_or(0, |total| (imm >> (total - 1)) & 1);
                imm |= ((u64::from(value) ^ sign) ^ 1) << merge;
                has_imm = true;
            }
            BitField::Derived { slot, value: assigned } => {
                slots[slot.index()] = Some(u32::from(assigned));
            }
        }
    }
    if let Some(total) = sign_total {
        imm = bits::sign_extend(imm, total);
    }
    (slots, has_imm.then_some(imm))
}

/// Checks that `insn` carries exactly the operands `descriptor` reads.
fn check_operands(
    descriptor: &InstructionDescriptor,
    insn: &DecodedInstruction,
    word: u32,
    word_width: u32,
) {
    let (slots, imm) = expected_operands(descriptor, word, word_width);
    for field in Field::ALL {
        assert_eq!(
            insn.get(field),
            slots[field.index()],
            "{word:#010x} {}: {field}",
            descriptor.mnemonic
        );
    }
    if descriptor.expansion.is_none() {
        assert_eq!(insn.imm, imm, "{word:#010x} {}: immediate", descriptor.mnemonic);
    } else {
        assert!(insn.imm.is_some(), "{word:#010x} {}: immediate", descriptor.mnemonic);
    }
}

/// Checks one decoded word against the layout it was compiled from.
///
/// `expected` is the descriptor the word was built from, if any.
fn check_word(decoder: &Decoder, layout: &FamilyLayout, word: u32, expected: Option<usize>) {
    let decoded = decoder.decode(word);
    let routed = route(layout, word);
    match (decoded, routed) {
        (Ok(insn), Some(index)) => {
            let resolved = &layout.descriptors[index];
            assert_eq!(decoder.mnemonic(&insn), resolved.mnemonic, "{word:#010x}");
            assert_eq!(u32::from(insn.width), resolved.width(), "{word:#010x}");
            assert!(resolved.matches_word(word, layout.word_width), "{word:#010x}");
            check_operands(resolved, &insn, word, layout.word_width);
            if let Some(source) = expected {
                assert!(
                    source == index
                        || !strictly_more_specific(&layout.descriptors[source], resolved),
                    "{word:#010x}: {} shadowed by the less specific {}",
                    layout.descriptors[source].mnemonic,
                    resolved.mnemonic
                );
            }
        }
        (Err(DecodeError::Undefined { .. }), None) => {
            assert_eq!(expected, None, "{word:#010x} built from a descriptor is undefined");
        }
        (decoded, routed) => panic!("{word:#010x}: program {decoded:?} but trie {routed:?}"),
    }
}

// ══════════════════════════════════════════════════════════
// 1. Construction
// ══════════════════════════════════════════════════════════

#[test]
fn test_builtin_tables_build() {
    assert!(arm().program().mnemonics().len() > 100);
    assert!(thumb().program().mnemonics().len() > 100);
    assert!(arm().program().mnemonic_index("VMOV").is_some());
    assert!(thumb().program().mnemonic_index("CBNZ").is_some());
    assert_eq!(thumb().program().mnemonic_index("CBNZ.W"), None);
}

#[test]
fn test_rebuild_is_byte_identical() {
    let config = Config::default();
    for (first, second, shared) in [
        (isa::arm::build(&config), isa::arm::build(&config), arm()),
        (isa::thumb::build(&config), isa::thumb::build(&config), thumb()),
    ] {
        let first = first.unwrap().program().to_bytes().unwrap();
        let second = second.unwrap().program().to_bytes().unwrap();
        assert_eq!(first, second);
        assert_eq!(first, shared.program().to_bytes().unwrap());
    }
}

#[test]
fn test_mnemonic_table_is_sorted_and_unique() {
    for decoder in [arm(), thumb()] {
        let names = decoder.program().mnemonics();
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_leaves_test_every_fixed_bit() {
    for layout in [&*ARM_LAYOUT, &*THUMB_LAYOUT] {
        for id in layout.tree.ids() {
            let node = layout.tree.node(id);
            let Some(index) = node.resolved else { continue };
            assert_eq!(node.discriminator, None);
            let fixed = layout.descriptors[index].fixed_bits();
            assert_eq!(
                fixed.mask & !node.consumed,
                0,
                "{} resolved before all of its fixed bits were tested",
                layout.descriptors[index].mnemonic
            );
        }
    }
}

#[test]
fn test_each_descriptor_has_exactly_one_leaf() {
    for layout in [&*ARM_LAYOUT, &*THUMB_LAYOUT] {
        let mut hits = vec![0usize; layout.descriptors.len()];
        for id in layout.tree.ids() {
            if let Some(index) = layout.tree.node(id).resolved {
                hits[index] += 1;
            }
        }
        for (descriptor, count) in layout.descriptors.iter().zip(&hits) {
            assert_eq!(*count, 1, "{}", descriptor.mnemonic);
        }
    }
}

#[test]
fn test_every_descriptor_fits_its_family() {
    for d in isa::arm::descriptors() {
        assert_eq!(d.width(), 32, "{}", d.mnemonic);
        d.validate().unwrap();
    }
    for d in isa::thumb::descriptors() {
        assert!(matches!(d.width(), 16 | 32), "{}", d.mnemonic);
        d.validate().unwrap();
    }
}

// ══════════════════════════════════════════════════════════
// 2. Totality
// ══════════════════════════════════════════════════════════

#[test]
fn test_every_narrow_thumb_halfword() {
    let layout = &*THUMB_LAYOUT;
    let narrow: Vec<(usize, (u32, u32))> = layout
        .descriptors
        .iter()
        .enumerate()
        .filter(|(_, d)| d.width() == 16)
        .map(|(i, d)| (i, word_pattern(d, 32)))
        .collect();

    let mut defined = 0usize;
    for hw1 in 0..=u16::MAX {
        if thumb().family().is_wide(hw1) {
            continue;
        }
        let word = u32::from(hw1) << 16;
        let matching = narrow.iter().find(|(_, (mask, value))| word & mask == *value);
        check_word(thumb(), layout, word, matching.map(|&(i, _)| i));
        if matching.is_some() {
            defined += 1;
        }
    }
    assert!(defined > 50_000, "only {defined} narrow halfwords decode");
}

#[test]
fn test_every_leading_halfword_without_successor() {
    for hw1 in 0..=u16::MAX {
        match thumb().decode_halfwords(hw1, None) {
            Ok(insn) => assert_eq!(insn.width, 16, "{hw1:#06x}"),
            Err(DecodeError::Truncated { halfword }) => {
                assert_eq!(halfword, hw1);
                assert!(thumb().family().is_wide(hw1), "{hw1:#06x}");
            }
            Err(DecodeError::Undefined { .. }) => {
                assert!(!thumb().family().is_wide(hw1), "{hw1:#06x}");
            }
        }
    }
}

proptest! {
    #[test]
    fn test_arbitrary_arm_words(word in any::<u32>()) {
        let layout = &*ARM_LAYOUT;
        let unconditional = word >> 28 == 0xF;
        let matching = layout.descriptors.iter().position(|d| {
            let (mask, value) = word_pattern(d, 32);
            word & mask == value && !(unconditional && is_conditional(d))
        });
        check_word(arm(), layout, word, matching);
    }

    #[test]
    fn test_arbitrary_wide_thumb_words(suffix in 0u32..(1 << 27), prefix in 0b11101u32..=0b11111) {
        let word = (prefix << 27) | suffix;
        let layout = &*THUMB_LAYOUT;
        let matching = layout.descriptors.iter().position(|d| {
            let (mask, value) = word_pattern(d, 32);
            d.width() == 32 && word & mask == value
        });
        check_word(thumb(), layout, word, matching);
    }

    // ══════════════════════════════════════════════════════════
    // 3. Round trip
    // ══════════════════════════════════════════════════════════

    #[test]
    fn test_arm_descriptor_round_trip(index in any::<Index>(), free in any::<u32>()) {
        let layout = &*ARM_LAYOUT;
        let source = index.index(layout.descriptors.len());
        let word = fill_arm(&layout.descriptors[source], free);
        check_word(arm(), layout, word, Some(source));
    }

    #[test]
    fn test_thumb_descriptor_round_trip(index in any::<Index>(), free in any::<u32>()) {
        let layout = &*THUMB_LAYOUT;
        let source = index.index(layout.descriptors.len());
        let word = fill(&layout.descriptors[source], 32, free);
        check_word(thumb(), layout, word, Some(source));
    }
}
