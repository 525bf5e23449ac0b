//! Compiled decode program and its binary artifact format.
//!
//! A [`Program`] is the immutable output of table construction: the op
//! stream, the branch-target table, and the mnemonic table. It can be
//! written to a byte buffer and read back, so a build step may embed the
//! tables instead of compiling descriptors at start-up.
//!
//! Artifact layout (all integers little-endian):
//!
//! | Bytes | Content |
//! |-------|---------|
//! | 4 | magic `ADTB` |
//! | 1 | format version |
//! | 4 | op count |
//! | 4 | branch-target count |
//! | 4 | mnemonic count |
//! | n | ops |
//! | 2 each | branch targets |
//! | 2 + len each | length-prefixed UTF-8 mnemonics |

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::opcode::Opcode;
use crate::common::error::ArtifactError;

const MAGIC: &[u8; 4] = b"ADTB";
const VERSION: u8 = 1;

/// Immutable bytecode tables produced by the emitter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub(crate) ops: Vec<u8>,
    pub(crate) branch_targets: Vec<u16>,
    pub(crate) mnemonics: Vec<String>,
}

impl Program {
    /// Assembles a program from raw tables without validation.
    pub const fn from_parts(ops: Vec<u8>, branch_targets: Vec<u16>, mnemonics: Vec<String>) -> Self {
        Self { ops, branch_targets, mnemonics }
    }

    /// The op stream.
    pub fn ops(&self) -> &[u8] {
        &self.ops
    }

    /// The branch-target table.
    pub fn branch_targets(&self) -> &[u16] {
        &self.branch_targets
    }

    /// The mnemonic table, indexed by `DecodedInstruction::mnemonic`.
    pub fn mnemonics(&self) -> &[String] {
        &self.mnemonics
    }

    /// Looks up a mnemonic by index.
    pub fn mnemonic(&self, index: u16) -> Option<&str> {
        self.mnemonics.get(usize::from(index)).map(String::as_str)
    }

    /// Index of a mnemonic in the table.
    pub fn mnemonic_index(&self, name: &str) -> Option<u16> {
        self.mnemonics
            .binary_search_by(|m| m.as_str().cmp(name))
            .ok()
            .map(|i| i as u16)
    }

    /// Serializes the program into the artifact format.
    ///
    /// # Returns
    ///
    /// The artifact bytes, or `ArtifactError::TooLarge` when a count or a
    /// mnemonic length does not fit its field.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        let mut out = Vec::with_capacity(17 + self.ops.len() + 2 * self.branch_targets.len());
        out.extend_from_slice(MAGIC);
        out.push(VERSION);
        for (table, count) in [
            ("op table", self.ops.len()),
            ("branch-target table", self.branch_targets.len()),
            ("mnemonic table", self.mnemonics.len()),
        ] {
            let count = u32::try_from(count).map_err(|_| ArtifactError::TooLarge { table })?;
            out.extend_from_slice(&count.to_le_bytes());
        }
        out.extend_from_slice(&self.ops);
        for target in &self.branch_targets {
            out.extend_from_slice(&target.to_le_bytes());
        }
        for name in &self.mnemonics {
            let len = u16::try_from(name.len())
                .map_err(|_| ArtifactError::TooLarge { table: "mnemonic" })?;
            out.extend_from_slice(&len.to_le_bytes());
            out.extend_from_slice(name.as_bytes());
        }
        Ok(out)
    }

    /// Loads a program from the artifact format.
    ///
    /// # Returns
    ///
    /// The program, or an `ArtifactError` if the buffer is foreign,
    /// truncated, or holds a branch target outside the op table.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        let mut reader = Reader { bytes };
        if reader.take(4)? != MAGIC {
            return Err(ArtifactError::BadMagic);
        }
        let version = reader.take(1)?[0];
        if version != VERSION {
            return Err(ArtifactError::UnsupportedVersion(version));
        }
        let op_count = reader.u32()? as usize;
        let target_count = reader.u32()? as usize;
        let mnemonic_count = reader.u32()? as usize;

        let ops = reader.take(op_count)?.to_vec();
        let branch_targets = (0..target_count)
            .map(|_| reader.u16())
            .collect::<Result<Vec<_>, _>>()?;
        let mnemonics = (0..mnemonic_count)
            .map(|_| {
                let len = usize::from(reader.u16()?);
                String::from_utf8(reader.take(len)?.to_vec())
                    .map_err(|_| ArtifactError::InvalidMnemonic)
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some((index, &target)) = branch_targets
            .iter()
            .enumerate()
            .find(|&(_, &t)| usize::from(t) >= ops.len())
        {
            return Err(ArtifactError::TargetOutOfRange { index, target });
        }
        Ok(Self { ops, branch_targets, mnemonics })
    }

    /// Renders the op stream as one op per line, for debugging table builds.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mut pc = 0;
        while pc < self.ops.len() {
            let Some(op) = Opcode::from_byte(self.ops[pc]) else {
                let _ = writeln!(out, "{pc:5}: .byte {:#04x}", self.ops[pc]);
                pc += 1;
                continue;
            };
            let end = (pc + op.size()).min(self.ops.len());
            let operands = &self.ops[pc + 1..end];
            let _ = write!(out, "{pc:5}: {}", op.name());
            for operand in operands {
                let _ = write!(out, " {operand}");
            }
            if op == Opcode::SetMnemonic && operands.len() >= 2 {
                let index = u16::from_le_bytes([operands[0], operands[1]]);
                let _ = write!(out, " ; {}", self.mnemonic(index).unwrap_or("?"));
            }
            out.push('\n');
            pc = end;
        }
        out
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
}

impl<'a> Reader<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8], ArtifactError> {
        if self.bytes.len() < n {
            return Err(ArtifactError::UnexpectedEof);
        }
        let (head, tail) = self.bytes.split_at(n);
        self.bytes = tail;
        Ok(head)
    }

    fn u16(&mut self) -> Result<u16, ArtifactError> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    fn u32(&mut self) -> Result<u32, ArtifactError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }
}
