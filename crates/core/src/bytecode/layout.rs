//! Family layout: constraint expansion, root dispatch, and trie construction.
//!
//! Turns a descriptor list and a [`FamilyConfig`] into the decision trees the
//! emitter linearises:
//! 1. **Expansion:** Every descriptor is validated and constraint-expanded.
//! 2. **Routing:** The configured root dispatch splits the expanded set
//!    into one or two candidate groups.
//! 3. **Tries:** One trie is built per group inside a shared arena.

use crate::common::bits;
use crate::common::error::BuildError;
use crate::config::{Dispatch, FamilyConfig};
use crate::encoding::{BitField, Field, FixedBits, InstructionDescriptor};
use crate::trie::{DecisionTree, NodeId};

/// Largest supported `LOOKUP` width.
const MAX_LOOKUP_WIDTH: u32 = 8;

/// Root dispatch of a laid-out family, with the roots of its tries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Roots {
    /// One trie.
    Single(NodeId),
    /// Condition-nibble split.
    Condition {
        /// Bit position of the nibble.
        shift: u32,
        /// Nibble value of the unconditional space.
        value: u32,
        /// Trie over conditional encodings.
        conditional: NodeId,
        /// Trie over unconditional encodings.
        unconditional: NodeId,
    },
    /// Width-selecting lookup.
    Table {
        /// Bit position of the looked-up bits.
        shift: u32,
        /// Number of looked-up bits.
        width: u32,
        /// Values routed to the wide trie.
        wide: Vec<u32>,
        /// Trie over narrow encodings.
        narrow_root: NodeId,
        /// Trie over full-width encodings.
        wide_root: NodeId,
    },
}

/// Expanded descriptors of one family and the tries built over them.
#[derive(Clone, Debug)]
pub struct FamilyLayout {
    /// Constraint-expanded descriptors; leaves index into this list.
    pub descriptors: Vec<InstructionDescriptor>,
    /// Sorted, de-duplicated mnemonic table.
    pub mnemonics: Vec<String>,
    /// Node arena holding every trie of the family.
    pub tree: DecisionTree,
    /// Root dispatch.
    pub roots: Roots,
    /// Width of the decoded word.
    pub word_width: u32,
}

impl FamilyLayout {
    /// Expands, routes, and builds the tries of a family.
    ///
    /// # Arguments
    ///
    /// * `descriptors` - Authored descriptors.
    /// * `family` - Root dispatch and accepted widths.
    /// * `trace` - Log each descriptor expansion at trace level.
    ///
    /// # Returns
    ///
    /// The layout, or the first `BuildError` encountered.
    pub fn new(
        descriptors: &[InstructionDescriptor],
        family: &FamilyConfig,
        trace: bool,
    ) -> Result<Self, BuildError> {
        if descriptors.is_empty() {
            return Err(BuildError::Empty);
        }

        let mut expanded = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            let variants = descriptor.expand_constraints()?;
            let width = descriptor.width();
            if !family.widths.contains(&width) {
                return Err(BuildError::WidthMismatch {
                    mnemonic: descriptor.mnemonic.clone(),
                    width,
                });
            }
            if trace {
                tracing::trace!(
                    mnemonic = %descriptor.mnemonic,
                    width,
                    variants = variants.len(),
                    "expanded descriptor"
                );
            }
            expanded.extend(variants);
        }

        let mut mnemonics: Vec<String> = expanded.iter().map(|d| d.mnemonic.clone()).collect();
        mnemonics.sort_unstable();
        mnemonics.dedup();
        if mnemonics.len() > usize::from(u16::MAX) + 1 {
            return Err(BuildError::TableOverflow { table: "mnemonic" });
        }

        let word_width = family.word_width();
        let fixed: Vec<FixedBits> = expanded.iter().map(InstructionDescriptor::fixed_bits).collect();
        let mut tree = DecisionTree::new();

        let roots = match &family.dispatch {
            Dispatch::Trie => {
                let all: Vec<usize> = (0..expanded.len()).collect();
                let width = common_width(&expanded, &all, word_width)?;
                Roots::Single(tree.build(&expanded, &all, width)?)
            }
            &Dispatch::ConditionNibble { shift, value } => {
                let (conditional, unconditional): (Vec<usize>, Vec<usize>) = (0..expanded.len())
                    .partition(|&i| is_conditional(&expanded[i], shift, word_width));
                for &i in &unconditional {
                    let nibble = fixed_word_bits(fixed[i], expanded[i].width(), word_width, shift, 4);
                    if nibble != Some(value) {
                        return Err(mismatch(&expanded[i]));
                    }
                }
                Roots::Condition {
                    shift,
                    value,
                    conditional: tree.build(&expanded, &conditional, word_width)?,
                    unconditional: tree.build(&expanded, &unconditional, word_width)?,
                }
            }
            Dispatch::Table { shift, width, wide } => {
                let (shift, width) = (*shift, *width);
                if width == 0 || width > MAX_LOOKUP_WIDTH {
                    return Err(BuildError::TableOverflow { table: "lookup" });
                }
                let (full, narrow): (Vec<usize>, Vec<usize>) =
                    (0..expanded.len()).partition(|&i| expanded[i].width() == word_width);
                for &i in &full {
                    let prefix = fixed_word_bits(fixed[i], word_width, word_width, shift, width);
                    if !prefix.is_some_and(|p| wide.contains(&p)) {
                        return Err(mismatch(&expanded[i]));
                    }
                }
                for &i in &narrow {
                    let prefix =
                        fixed_word_bits(fixed[i], expanded[i].width(), word_width, shift, width);
                    if prefix.is_some_and(|p| wide.contains(&p)) {
                        return Err(mismatch(&expanded[i]));
                    }
                }
                let narrow_width = common_width(&expanded, &narrow, word_width)?;
                Roots::Table {
                    shift,
                    width,
                    wide: wide.clone(),
                    narrow_root: tree.build(&expanded, &narrow, narrow_width)?,
                    wide_root: tree.build(&expanded, &full, word_width)?,
                }
            }
        };

        Ok(Self { descriptors: expanded, mnemonics, tree, roots, word_width })
    }

    /// Index of `name` in the mnemonic table.
    pub fn mnemonic_index(&self, name: &str) -> Option<u16> {
        self.mnemonics.binary_search_by(|m| m.as_str().cmp(name)).ok().map(|i| i as u16)
    }
}

fn mismatch(descriptor: &InstructionDescriptor) -> BuildError {
    BuildError::DispatchMismatch { mnemonic: descriptor.mnemonic.clone() }
}

/// Conditional encodings start with the four-bit condition field sitting
/// exactly on the dispatched nibble.
fn is_conditional(descriptor: &InstructionDescriptor, shift: u32, word_width: u32) -> bool {
    matches!(
        descriptor.bits.first(),
        Some(BitField::Plain { slot: Field::Cond, width: 4, merge: 0 })
    ) && descriptor.width() == word_width
        && word_width >= 4
        && shift == word_width - 4
}

/// Width shared by a group of candidates (`fallback` for an empty group).
fn common_width(
    descriptors: &[InstructionDescriptor],
    group: &[usize],
    fallback: u32,
) -> Result<u32, BuildError> {
    let Some(&first) = group.first() else {
        return Ok(fallback);
    };
    let width = descriptors[first].width();
    match group.iter().find(|&&i| descriptors[i].width() != width) {
        Some(&i) => Err(BuildError::WidthMismatch {
            mnemonic: descriptors[i].mnemonic.clone(),
            width: descriptors[i].width(),
        }),
        None => Ok(width),
    }
}

/// Reads `count` word bits starting at `shift` from a descriptor's fixed
/// bits; `None` if any of them is not fixed.
fn fixed_word_bits(
    fixed: FixedBits,
    descriptor_width: u32,
    word_width: u32,
    shift: u32,
    count: u32,
) -> Option<u32> {
    let mut value = 0;
    for k in 0..count {
        let word_bit = shift + k;
        let offset = word_width.checked_sub(word_bit + 1)?;
        if offset >= descriptor_width {
            return None;
        }
        if fixed.get(offset)? {
            value |= 1 << k;
        }
    }
    Some(value & bits::mask(count))
}
