//! # Artifact Tests
//!
//! Serialization of compiled programs: byte-format round trips, rejection of
//! corrupt buffers, and decoding with a reloaded program.

use armdec_core::common::error::ArtifactError;
use armdec_core::config::FamilyConfig;
use armdec_core::{Decoder, Program};
use pretty_assertions::assert_eq;

use crate::common::harness::{arm, thumb};

const ARM_SAMPLES: [u32; 6] =
    [0xE281_0004, 0xE92D_4010, 0xEAFF_FFFE, 0xF287_0F50, 0xF000_0000, 0xE7F1_23F4];

// ──────────────────────────────────────────────────────────
// Round trips
// ──────────────────────────────────────────────────────────

#[test]
fn test_arm_program_round_trip() {
    let bytes = arm().program().to_bytes().unwrap();
    let program = Program::from_bytes(&bytes).unwrap();
    assert_eq!(&program, arm().program());

    let reloaded = Decoder::from_program(program, FamilyConfig::arm());
    for word in ARM_SAMPLES {
        assert_eq!(reloaded.decode(word), arm().decode(word), "{word:#010x}");
    }
}

#[test]
fn test_thumb_program_round_trip() {
    let bytes = thumb().program().to_bytes().unwrap();
    let reloaded = Decoder::from_program(Program::from_bytes(&bytes).unwrap(), FamilyConfig::thumb());
    for hw1 in [0x4408u16, 0xBF18, 0xB108, 0xDE00, 0xB600] {
        let word = u32::from(hw1) << 16;
        assert_eq!(reloaded.decode(word), thumb().decode(word), "{hw1:#06x}");
    }
    assert_eq!(reloaded.decode(0xF7FF_FFFE), thumb().decode(0xF7FF_FFFE));
    assert_eq!(reloaded.decode_halfwords(0xF000, None), thumb().decode_halfwords(0xF000, None));
}

#[test]
fn test_program_json_round_trip() {
    let json = serde_json::to_string(thumb().program()).unwrap();
    let program: Program = serde_json::from_str(&json).unwrap();
    assert_eq!(&program, thumb().program());
}

#[test]
fn test_header_layout() {
    let program = Program::from_parts(vec![0, 4], vec![1], vec!["NOP".into()]);
    let bytes = program.to_bytes().unwrap();
    assert_eq!(&bytes[..4], b"ADTB");
    assert_eq!(bytes[4], 1);
    assert_eq!(&bytes[5..9], &2u32.to_le_bytes());
    assert_eq!(&bytes[9..13], &1u32.to_le_bytes());
    assert_eq!(&bytes[13..17], &1u32.to_le_bytes());
    assert_eq!(&bytes[17..], &[0, 4, 1, 0, 3, 0, b'N', b'O', b'P']);
}

// ──────────────────────────────────────────────────────────
// Corruption
// ──────────────────────────────────────────────────────────

#[test]
fn test_bad_magic() {
    let mut bytes = arm().program().to_bytes().unwrap();
    bytes[0] ^= 0xFF;
    assert_eq!(Program::from_bytes(&bytes), Err(ArtifactError::BadMagic));
}

#[test]
fn test_unsupported_version() {
    let mut bytes = arm().program().to_bytes().unwrap();
    bytes[4] = 9;
    assert_eq!(Program::from_bytes(&bytes), Err(ArtifactError::UnsupportedVersion(9)));
}

#[test]
fn test_truncated_artifact() {
    let bytes = arm().program().to_bytes().unwrap();
    assert_eq!(Program::from_bytes(&bytes[..bytes.len() - 1]), Err(ArtifactError::UnexpectedEof));
    assert_eq!(Program::from_bytes(&[]), Err(ArtifactError::UnexpectedEof));
}

#[test]
fn test_branch_target_outside_ops() {
    let bytes = Program::from_parts(vec![0, 4], vec![1, 7], vec![]).to_bytes().unwrap();
    assert_eq!(
        Program::from_bytes(&bytes),
        Err(ArtifactError::TargetOutOfRange { index: 1, target: 7 })
    );
}

#[test]
fn test_mnemonic_must_be_utf8() {
    let mut bytes = Program::from_parts(vec![0], vec![], vec!["A".into()]).to_bytes().unwrap();
    let last = bytes.len() - 1;
    bytes[last] = 0xFF;
    assert_eq!(Program::from_bytes(&bytes), Err(ArtifactError::InvalidMnemonic));
}

// ──────────────────────────────────────────────────────────
// Dumps
// ──────────────────────────────────────────────────────────

#[test]
fn test_dump_starts_with_root_dispatch() {
    assert!(arm().program().dump().starts_with("    0: CMP_NIBBLE 28 15 0 0\n"));
    assert!(thumb().program().dump().starts_with("    0: LOOKUP 27 5 0 0\n"));
}

#[test]
fn test_dump_names_every_mnemonic_it_sets() {
    let dump = thumb().program().dump();
    for name in ["BL", "CBZ", "IT", "UDF"] {
        assert!(dump.contains(&format!("; {name}\n")), "{name} missing from dump");
    }
}

#[test]
fn test_leaf_ops_end_with_expansion_then_mnemonic() {
    for decoder in [arm(), thumb()] {
        let dump = decoder.program().dump();
        let ops: Vec<&str> =
            dump.lines().filter_map(|line| line.split_whitespace().nth(1)).collect();
        let mut expansions = 0;
        for (i, pair) in ops.windows(2).enumerate() {
            match pair[0] {
                "EXPAND_IMMEDIATE_ARM" | "EXPAND_IMMEDIATE_THUMB" | "EXPAND_IMMEDIATE_SIMD" => {
                    expansions += 1;
                    assert_eq!(pair[1], "SET_MNEMONIC", "op {i}");
                }
                "SIGN_EXTEND" => assert!(
                    matches!(pair[1], "SET_MNEMONIC" | "EXPAND_IMMEDIATE_THUMB"),
                    "op {i} followed by {}",
                    pair[1]
                ),
                "SET_MNEMONIC" => assert_eq!(pair[1], "RETURN_OK", "op {i}"),
                _ => {}
            }
        }
        assert!(expansions > 0);
    }
}
