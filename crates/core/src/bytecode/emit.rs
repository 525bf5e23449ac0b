//! Bytecode emitter.
//!
//! Linearises the tries of a [`FamilyLayout`] into a [`Program`]. The root
//! dispatch op is placed at offset 0. Every split node reserves its op and
//! its branch-table slots before its children are emitted, then back-patches
//! the slots with the children's offsets. Nodes are memoised, so a fallback
//! subtree shared by several dead ends is emitted once and jumped to from
//! each of them. Dead ends without a fallback share a single `FAIL` byte.

use super::layout::{FamilyLayout, Roots};
use super::opcode::Opcode;
use super::program::Program;
use crate::common::error::{BuildError, MalformedKind};
use crate::config::FamilyConfig;
use crate::encoding::{BitField, Expansion, Field, InstructionDescriptor};
use crate::trie::NodeId;

/// Compiles descriptors into a decode program.
///
/// # Arguments
///
/// * `descriptors` - Authored descriptors of one family.
/// * `family` - Root dispatch and accepted widths.
/// * `trace` - Log each descriptor expansion at trace level.
///
/// # Returns
///
/// The program, or the first `BuildError` encountered.
pub fn compile(
    descriptors: &[InstructionDescriptor],
    family: &FamilyConfig,
    trace: bool,
) -> Result<Program, BuildError> {
    let layout = FamilyLayout::new(descriptors, family, trace)?;
    let program = emit(&layout)?;
    tracing::debug!(
        descriptors = descriptors.len(),
        expanded = layout.descriptors.len(),
        nodes = layout.tree.len(),
        ops = program.ops.len(),
        targets = program.branch_targets.len(),
        mnemonics = program.mnemonics.len(),
        "compiled decode program"
    );
    Ok(program)
}

/// Emits the program of an already laid-out family.
pub fn emit(layout: &FamilyLayout) -> Result<Program, BuildError> {
    let mut emitter = Emitter {
        layout,
        ops: Vec::new(),
        targets: Vec::new(),
        emitted: vec![None; layout.tree.len()],
        fail: None,
    };
    emitter.root()?;
    Ok(Program {
        ops: emitter.ops,
        branch_targets: emitter.targets,
        mnemonics: layout.mnemonics.clone(),
    })
}

struct Emitter<'a> {
    layout: &'a FamilyLayout,
    ops: Vec<u8>,
    targets: Vec<u16>,
    emitted: Vec<Option<u16>>,
    fail: Option<u16>,
}

impl Emitter<'_> {
    fn root(&mut self) -> Result<(), BuildError> {
        let layout = self.layout;
        match &layout.roots {
            &Roots::Single(root) => {
                let _ = self.node(root)?;
            }
            &Roots::Condition { shift, value, conditional, unconditional } => {
                let lut = self.reserve_targets(2)?;
                let [lo, hi] = lut.to_le_bytes();
                let _ = self.push(Opcode::CmpNibble, &[shift as u8, value as u8, lo, hi])?;
                let conditional = self.node(conditional)?;
                let unconditional = self.node(unconditional)?;
                self.patch(lut, &[conditional, unconditional]);
            }
            Roots::Table { shift, width, wide, narrow_root, wide_root } => {
                let entries = 1usize << *width;
                let lut = self.reserve_targets(entries)?;
                let [lo, hi] = lut.to_le_bytes();
                let _ = self.push(Opcode::Lookup, &[*shift as u8, *width as u8, lo, hi])?;
                let narrow = self.node(*narrow_root)?;
                let full = self.node(*wide_root)?;
                let slots: Vec<u16> = (0..entries as u32)
                    .map(|prefix| if wide.contains(&prefix) { full } else { narrow })
                    .collect();
                self.patch(lut, &slots);
            }
        }
        Ok(())
    }

    /// Offset of the next op.
    fn here(&self) -> Result<u16, BuildError> {
        u16::try_from(self.ops.len()).map_err(|_| BuildError::TableOverflow { table: "op" })
    }

    fn push(&mut self, opcode: Opcode, operands: &[u8]) -> Result<u16, BuildError> {
        debug_assert_eq!(operands.len(), opcode.operands(), "{}", opcode.name());
        let at = self.here()?;
        self.ops.push(opcode as u8);
        self.ops.extend_from_slice(operands);
        Ok(at)
    }

    fn reserve_targets(&mut self, count: usize) -> Result<u16, BuildError> {
        let start = self.targets.len();
        if start + count > usize::from(u16::MAX) + 1 {
            return Err(BuildError::TableOverflow { table: "branch target" });
        }
        self.targets.resize(start + count, 0);
        Ok(start as u16)
    }

    fn patch(&mut self, lut: u16, offsets: &[u16]) {
        let start = usize::from(lut);
        self.targets[start..start + offsets.len()].copy_from_slice(offsets);
    }

    fn fail(&mut self) -> Result<u16, BuildError> {
        if let Some(at) = self.fail {
            return Ok(at);
        }
        let at = self.push(Opcode::Fail, &[])?;
        self.fail = Some(at);
        Ok(at)
    }

    /// Emits a node (once) and returns its op offset.
    fn node(&mut self, id: NodeId) -> Result<u16, BuildError> {
        if let Some(at) = self.emitted[id.index()] {
            return Ok(at);
        }
        let layout = self.layout;
        let node = layout.tree.node(id);
        let at = match (node.discriminator, node.zero, node.one, node.resolved) {
            (Some(offset), Some(zero), Some(one), _) => {
                let lut = self.reserve_targets(2)?;
                let [lo, hi] = lut.to_le_bytes();
                let shift = (layout.word_width - 1 - offset) as u8;
                let at = self.push(Opcode::Step, &[shift, lo, hi])?;
                self.emitted[id.index()] = Some(at);
                let zero = self.node(zero)?;
                let one = self.node(one)?;
                self.patch(lut, &[zero, one]);
                at
            }
            (_, _, _, Some(index)) => self.leaf(&layout.descriptors[index])?,
            _ => match node.fallback {
                Some(fallback) => self.node(fallback)?,
                None => self.fail()?,
            },
        };
        self.emitted[id.index()] = Some(at);
        Ok(at)
    }

    /// Emits the extraction sequence of a resolved descriptor.
    fn leaf(&mut self, descriptor: &InstructionDescriptor) -> Result<u16, BuildError> {
        let layout = self.layout;
        let at = self.here()?;
        let word_width = layout.word_width;

        let mut pieces_per_slot = [0u8; Field::COUNT];
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

        let mut sign_total: Option<u8> = None;
        for (offset, piece) in descriptor.pieces() {
            let shift = word_width.saturating_sub(offset + piece.width()) as u8;
            match *piece {
                BitField::Constant(_) => {}
                BitField::Register { slot, width, merge } | BitField::Plain { slot, width, merge } => {
                    let shared = pieces_per_slot[slot.index()] > 1;
                    self.extract(slot, shift, width, merge, shared)?;
                }
                BitField::DoubleRegister { first, second, width, merge } => {
                    for slot in [first, second] {
                        let shared = pieces_per_slot[slot.index()] > 1;
                        self.extract(slot, shift, width, merge, shared)?;
                    }
                }
                BitField::Immediate { width } => {
                    let _ = self.push(Opcode::ExtractImmediate, &[shift, width])?;
                }
                BitField::ScatteredImmediate { width, merge } => {
                    let _ = self.push(Opcode::ExtractImmediateAt, &[shift, width, merge])?;
                }
                BitField::ScatteredSignExtendImmediate { width, merge } => {
                    let _ = self.push(Opcode::ExtractImmediateAt, &[shift, width, merge])?;
                    sign_total = Some(merge + width);
                }
                BitField::BranchNotXor { merge } => {
                    let Some(total) = sign_total else {
                        return Err(BuildError::MalformedDescriptor {
                            mnemonic: descriptor.mnemonic.clone(),
                            reason: MalformedKind::MissingSignPiece,
                        });
                    };
                    let _ = self.push(Opcode::BranchNotXor, &[shift, merge, total - 1])?;
                }
                BitField::Derived { slot, value } => {
                    let [lo, hi] = value.to_le_bytes();
                    let _ = self.push(Opcode::Assign, &[slot as u8, lo, hi])?;
                }
            }
        }

        if let Some(total) = sign_total {
            let _ = self.push(Opcode::SignExtend, &[total])?;
        }
        match descriptor.expansion {
            Some(Expansion::Arm) => {
                let _ = self.push(Opcode::ExpandImmediateArm, &[])?;
            }
            Some(Expansion::Thumb) => {
                let _ = self.push(Opcode::ExpandImmediateThumb, &[])?;
            }
            Some(Expansion::AdvSimd) => {
                let _ = self.push(Opcode::ExpandImmediateSimd, &[])?;
            }
            None => {}
        }

        let index = layout.mnemonic_index(&descriptor.mnemonic);
        debug_assert!(index.is_some(), "{} was never interned", descriptor.mnemonic);
        let index = index.ok_or_else(|| BuildError::UnknownMnemonic {
            mnemonic: descriptor.mnemonic.clone(),
        })?;
        let [lo, hi] = index.to_le_bytes();
        let _ = self.push(Opcode::SetMnemonic, &[lo, hi, descriptor.width() as u8])?;
        let _ = self.push(Opcode::ReturnOk, &[])?;
        Ok(at)
    }

    fn extract(
        &mut self,
        slot: Field,
        shift: u8,
        width: u8,
        merge: u8,
        shared: bool,
    ) -> Result<(), BuildError> {
        let _ = if shared || merge != 0 {
            self.push(Opcode::ExtractScattered, &[slot as u8, shift, width, merge])?
        } else {
            self.push(Opcode::Extract, &[slot as u8, shift, width])?
        };
        Ok(())
    }
}
