//! Instruction descriptors and constraint expansion.

use super::bitfield::BitField;
use super::field::Field;
use crate::common::bits;
use crate::common::error::{BuildError, MalformedKind};

/// Immediate-expansion macro applied once all immediate pieces are merged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Expansion {
    /// ARMExpandImm: 8-bit value rotated right by twice a 4-bit amount.
    Arm,
    /// ThumbExpandImm: replicated byte patterns or a rotated 8-bit value.
    Thumb,
    /// AdvSIMDExpandImm: `cmode`/`op` driven 64-bit pattern.
    AdvSimd,
}

/// Restriction of one field to an explicit set of values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constraint {
    /// Constrained field.
    pub field: Field,
    /// Allowed values.
    pub values: Vec<u32>,
}

/// Fixed bits of a descriptor, indexed by offset from its first declared bit.
///
/// Bit `n` of `mask` is set when the piece covering offset `n` is a
/// constant; the matching bit of `value` holds that constant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedBits {
    /// Which offsets are fixed.
    pub mask: u32,
    /// Values of the fixed offsets.
    pub value: u32,
}

impl FixedBits {
    /// Returns the fixed value at `offset`, if any.
    #[inline]
    pub const fn get(&self, offset: u32) -> Option<bool> {
        if self.mask & (1 << offset) == 0 {
            None
        } else {
            Some(self.value & (1 << offset) != 0)
        }
    }

    /// Number of fixed offsets.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.mask.count_ones()
    }
}

/// A declarative record of one instruction variant's bit layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionDescriptor {
    /// Mnemonic reported for words matching this encoding.
    pub mnemonic: String,
    /// Pieces, most significant bit first.
    pub bits: Vec<BitField>,
    /// Fields restricted to explicit value sets.
    pub constraints: Vec<Constraint>,
    /// Immediate expansion applied after extraction.
    pub expansion: Option<Expansion>,
}

impl InstructionDescriptor {
    /// Creates a descriptor without constraints or expansion.
    pub fn new(mnemonic: impl Into<String>, bits: &[BitField]) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            bits: bits.to_vec(),
            constraints: Vec::new(),
            expansion: None,
        }
    }

    /// Restricts `field` to `values`.
    #[must_use]
    pub fn constrain(mut self, field: Field, values: &[u32]) -> Self {
        self.constraints.push(Constraint { field, values: values.to_vec() });
        self
    }

    /// Attaches an immediate expansion.
    #[must_use]
    pub const fn expand(mut self, expansion: Expansion) -> Self {
        self.expansion = Some(expansion);
        self
    }

    /// Total number of encoding bits.
    pub fn width(&self) -> u32 {
        self.bits.iter().map(BitField::width).sum()
    }

    /// Iterates pieces together with their starting offset.
    pub fn pieces(&self) -> impl Iterator<Item = (u32, &BitField)> + '_ {
        self.bits.iter().scan(0, |offset, piece| {
            let start = *offset;
            *offset += piece.width();
            Some((start, piece))
        })
    }

    /// Computes the fixed bits of this descriptor.
    pub fn fixed_bits(&self) -> FixedBits {
        let mut fixed = FixedBits::default();
        for (offset, piece) in self.pieces() {
            if let BitField::Constant(bit) = *piece {
                fixed.mask |= 1 << offset;
                if bit != 0 {
                    fixed.value |= 1 << offset;
                }
            }
        }
        fixed
    }

    /// Returns true if every fixed bit agrees with `word`.
    ///
    /// # Arguments
    ///
    /// * `word` - Instruction word; offset 0 maps to bit `word_width - 1`.
    /// * `word_width` - Width of the family word (16 or 32).
    pub fn matches_word(&self, word: u32, word_width: u32) -> bool {
        self.pieces().all(|(offset, piece)| match *piece {
            BitField::Constant(bit) => {
                bits::extract(word, word_width - 1 - offset, 1) == u32::from(bit)
            }
            _ => true,
        })
    }

    fn malformed(&self, reason: MalformedKind) -> BuildError {
        BuildError::MalformedDescriptor { mnemonic: self.mnemonic.clone(), reason }
    }

    /// Checks the descriptor against the descriptor model.
    ///
    /// # Returns
    ///
    /// `Ok(())` or `BuildError::MalformedDescriptor` naming the first defect.
    pub fn validate(&self) -> Result<(), BuildError> {
        let total = self.width();
        if total != 16 && total != 32 {
            return Err(self.malformed(MalformedKind::Width(total)));
        }
        if self.mnemonic.len() > usize::from(u16::MAX) {
            return Err(self.malformed(MalformedKind::MnemonicTooLong(self.mnemonic.len())));
        }

        for piece in &self.bits {
            let (merge, width, limit) = match *piece {
                BitField::Register { width, merge, .. }
                | BitField::Plain { width, merge, .. }
                | BitField::DoubleRegister { width, merge, .. } => (merge, width, 32),
                BitField::ScatteredImmediate { width, merge } => (merge, width, 64),
                BitField::ScatteredSignExtendImmediate { width, merge } => {
                    if u32::from(merge) + u32::from(width) == 0 {
                        return Err(self.malformed(MalformedKind::EmptySignPiece));
                    }
                    (merge, width, 64)
                }
                BitField::BranchNotXor { merge } => (merge, 1, 64),
                _ => continue,
            };
            if u32::from(merge) >= limit || u32::from(merge) + u32::from(width) > limit {
                return Err(self.malformed(MalformedKind::MergeOutOfRange { merge, width, limit }));
            }
        }

        for constraint in &self.constraints {
            let field = constraint.field;
            if constraint.values.is_empty() {
                return Err(self.malformed(MalformedKind::EmptyConstraint(field)));
            }
            let carriers: Vec<&BitField> = self
                .bits
                .iter()
                .filter(|piece| !piece.is_derived() && piece.targets(field))
                .collect();
            let width = match carriers.as_slice() {
                [] => return Err(self.malformed(MalformedKind::MissingConstraintField(field))),
                [piece] if !piece.is_scattered() => piece.width(),
                _ => return Err(self.malformed(MalformedKind::ScatteredConstraint(field))),
            };
            if let Some(&value) = constraint
                .values
                .iter()
                .find(|&&v| v > bits::mask(width) || v > u32::from(u16::MAX))
            {
                return Err(
                    self.malformed(MalformedKind::ConstraintValueTooWide { field, value })
                );
            }
        }

        let mut seen_sign = false;
        let mut pending_not_xor = false;
        for piece in &self.bits {
            match piece {
                BitField::ScatteredSignExtendImmediate { .. } => {
                    if seen_sign {
                        return Err(self.malformed(MalformedKind::DuplicateSignPiece));
                    }
                    if pending_not_xor {
                        return Err(self.malformed(MalformedKind::SignAfterNotXor));
                    }
                    seen_sign = true;
                }
                BitField::BranchNotXor { .. } if !seen_sign => pending_not_xor = true,
                _ => {}
            }
        }
        if pending_not_xor {
            return Err(self.malformed(MalformedKind::MissingSignPiece));
        }

        if self.expansion == Some(Expansion::AdvSimd)
            && !self.bits.iter().any(|piece| piece.targets(Field::Cmode))
        {
            return Err(self.malformed(MalformedKind::MissingCmode));
        }
        Ok(())
    }

    /// Replaces every constrained field by fixed bits, one descriptor per
    /// combination of allowed values.
    ///
    /// The constrained value stays visible to the decoded record through a
    /// trailing [`BitField::Derived`] assignment. A descriptor without
    /// constraints expands to a copy of itself.
    ///
    /// # Returns
    ///
    /// The concrete descriptors, or the validation error of `self`.
    pub fn expand_constraints(&self) -> Result<Vec<Self>, BuildError> {
        self.validate()?;
        let base = Self {
            constraints: Vec::new(),
            ..self.clone()
        };
        let mut out = vec![base];
        for constraint in &self.constraints {
            out = out
                .iter()
                .flat_map(|partial| {
                    constraint
                        .values
                        .iter()
                        .map(move |&value| partial.fix_field(constraint.field, value))
                })
                .collect();
        }
        Ok(out)
    }

    fn fix_field(&self, field: Field, value: u32) -> Self {
        let mut bits = Vec::with_capacity(self.bits.len() + 8);
        for piece in &self.bits {
            if !piece.is_derived() && piece.targets(field) {
                let width = piece.width();
                bits.extend(
                    (0..width)
                        .rev()
                        .map(|i| BitField::Constant(((value >> i) & 1) as u8)),
                );
            } else {
                bits.push(*piece);
            }
        }
        bits.push(BitField::Derived { slot: field, value: value as u16 });
        Self { bits, ..self.clone() }
    }
}
