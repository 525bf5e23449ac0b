//! Error definitions for table construction, decoding, and artifact loading.
//!
//! This module defines every failure the crate can report. It provides:
//! 1. **Build Errors:** Defects in the descriptor tables, detected while compiling them.
//! 2. **Decode Errors:** Input-dependent outcomes of decoding a single word.
//! 3. **Artifact Errors:** Corrupt or foreign serialized programs.
//! 4. **Config Errors:** Malformed JSON configuration.
//!
//! Build errors stop table generation outright; a decode error is an
//! ordinary, frequent result ("undefined instruction") and never a bug.

use thiserror::Error;

use crate::encoding::Field;

/// Reason a single descriptor was rejected before trie construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MalformedKind {
    /// Total bit width is not 16 or 32. Carries the width actually declared.
    Width(u32),
    /// A constraint names a field that none of the descriptor's bits carry.
    MissingConstraintField(Field),
    /// A constraint value does not fit into the constrained field.
    ConstraintValueTooWide {
        /// Constrained field.
        field: Field,
        /// Offending value.
        value: u32,
    },
    /// A constraint lists no allowed values at all.
    EmptyConstraint(Field),
    /// A constrained field is split over several pieces.
    ScatteredConstraint(Field),
    /// A branch not-xor piece was declared before the sign piece it reads.
    SignAfterNotXor,
    /// A branch not-xor piece was declared without any sign piece.
    MissingSignPiece,
    /// More than one sign-extending piece was declared.
    DuplicateSignPiece,
    /// SIMD expansion requested but neither a `cmode` field nor assignment exists.
    MissingCmode,
    /// A piece merged so high that its bits leave the destination.
    MergeOutOfRange {
        /// Declared merge position.
        merge: u8,
        /// Width of the piece.
        width: u8,
        /// Bits available in the destination: 32 for slots, 64 for the immediate.
        limit: u32,
    },
    /// A sign-extending piece of zero width.
    EmptySignPiece,
    /// Mnemonic does not fit the 16-bit length prefix of the artifact.
    MnemonicTooLong(usize),
}

impl std::fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Width(total) => write!(f, "total width {total} is neither 16 nor 32"),
            Self::MissingConstraintField(field) => {
                write!(f, "constraint on {field} which is not among the bits")
            }
            Self::ConstraintValueTooWide { field, value } => {
                write!(f, "constraint value {value:#x} does not fit {field}")
            }
            Self::EmptyConstraint(field) => write!(f, "constraint on {field} allows nothing"),
            Self::ScatteredConstraint(field) => {
                write!(f, "constraint on {field} which is split into pieces")
            }
            Self::SignAfterNotXor => write!(f, "not-xor piece precedes the sign piece"),
            Self::MissingSignPiece => write!(f, "not-xor piece without a sign piece"),
            Self::DuplicateSignPiece => write!(f, "more than one sign-extending piece"),
            Self::MissingCmode => write!(f, "SIMD expansion without a cmode operand"),
            Self::MergeOutOfRange { merge, width, limit } => {
                write!(f, "{width}-bit piece merged at bit {merge} overflows {limit} bits")
            }
            Self::EmptySignPiece => write!(f, "sign-extending piece has no bits"),
            Self::MnemonicTooLong(len) => write!(f, "mnemonic of {len} bytes is too long"),
        }
    }
}

/// Fatal defects found while compiling a descriptor table.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A descriptor violates the descriptor model.
    #[error("malformed descriptor {mnemonic}: {reason}")]
    MalformedDescriptor {
        /// Mnemonic of the rejected descriptor.
        mnemonic: String,
        /// What is wrong with it.
        reason: MalformedKind,
    },

    /// Two descriptors remain indistinguishable once every constant bit is tested.
    #[error("contradiction: {first} and {second} have identical fixed bits")]
    Contradiction {
        /// First conflicting mnemonic.
        first: String,
        /// Second conflicting mnemonic.
        second: String,
    },

    /// A descriptor cannot be routed by the configured root dispatch.
    #[error("descriptor {mnemonic} does not fit the root dispatch")]
    DispatchMismatch {
        /// Mnemonic of the descriptor.
        mnemonic: String,
    },

    /// A descriptor width the family configuration does not accept.
    #[error("descriptor {mnemonic} is {width} bits wide, not accepted by this family")]
    WidthMismatch {
        /// Mnemonic of the descriptor.
        mnemonic: String,
        /// Declared width.
        width: u32,
    },

    /// An emitted table outgrew 16-bit addressing.
    #[error("{table} table exceeds 16-bit addressing")]
    TableOverflow {
        /// Which table overflowed.
        table: &'static str,
    },

    /// A resolved descriptor whose mnemonic the layout never interned.
    #[error("mnemonic {mnemonic} missing from the mnemonic table")]
    UnknownMnemonic {
        /// Mnemonic of the descriptor.
        mnemonic: String,
    },

    /// No descriptors were supplied.
    #[error("empty descriptor set")]
    Empty,
}

/// Outcome of decoding a word that does not produce an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No descriptor matches the word (architecturally undefined).
    #[error("undefined instruction {word:#010x}")]
    Undefined {
        /// The rejected word.
        word: u32,
    },

    /// A 32-bit leading halfword arrived without its second halfword.
    #[error("truncated 32-bit encoding, leading halfword {halfword:#06x}")]
    Truncated {
        /// The leading halfword.
        halfword: u16,
    },
}

/// Failures loading a serialized program.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArtifactError {
    /// The buffer does not start with the expected magic.
    #[error("bad magic")]
    BadMagic,
    /// The buffer was written by an incompatible format version.
    #[error("unsupported artifact version {0}")]
    UnsupportedVersion(u8),
    /// The buffer ended before all declared content was read.
    #[error("unexpected end of artifact")]
    UnexpectedEof,
    /// A branch target points outside the op table.
    #[error("branch target {index} points to {target}, outside the op table")]
    TargetOutOfRange {
        /// Index into the branch-target table.
        index: usize,
        /// The out-of-range op offset.
        target: u16,
    },
    /// A mnemonic is not valid UTF-8.
    #[error("mnemonic is not valid UTF-8")]
    InvalidMnemonic,
    /// A table or mnemonic is too large for its length field.
    #[error("{table} does not fit its length field")]
    TooLarge {
        /// What overflowed.
        table: &'static str,
    },
}

/// Failures reading a JSON configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON did not deserialize into a `Config`.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}
