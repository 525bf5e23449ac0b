//! Configuration for table construction.
//!
//! This module defines how each encoding family is compiled. It provides:
//! 1. **Defaults:** The root dispatch and accepted widths of the ARM and Thumb families.
//! 2. **Structures:** `Config`, split into general settings and one `FamilyConfig` per family.
//! 3. **Enums:** `Dispatch`, the kind of op placed at the root of a family's program.
//!
//! Configuration is supplied as JSON, or use `Config::default()` for the built-in families.

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants.
mod defaults {
    /// Bit position of the ARM condition nibble.
    pub const ARM_COND_SHIFT: u32 = 28;

    /// Condition nibble value marking the unconditional ARM space.
    pub const ARM_UNCONDITIONAL: u32 = 0b1111;

    /// Bit position of the five leading bits that select a Thumb encoding width.
    pub const THUMB_PREFIX_SHIFT: u32 = 27;

    /// Number of leading bits inspected to select a Thumb encoding width.
    pub const THUMB_PREFIX_WIDTH: u32 = 5;

    /// Leading five-bit values that introduce a 32-bit Thumb-2 encoding.
    pub const THUMB_WIDE_PREFIXES: [u32; 3] = [0b11101, 0b11110, 0b11111];

    /// Word width used when a family lists no widths.
    pub const WORD_WIDTH: u32 = 32;
}

/// Kind of op placed at the root of a family's program.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Dispatch {
    /// A single trie over all descriptors.
    #[default]
    Trie,
    /// A `CMP_NIBBLE` separating the nibble at `shift` equal to `value`
    /// (unconditional space) from everything else (conditional space).
    ///
    /// Descriptors whose first piece is the condition field go to the
    /// conditional trie; every other descriptor must fix the nibble.
    ConditionNibble {
        /// Bit position of the nibble.
        shift: u32,
        /// Nibble value of the unconditional space.
        value: u32,
    },
    /// A `LOOKUP` over `width` bits at `shift`, routing the listed values
    /// to the full-width trie and all others to the narrow trie.
    Table {
        /// Bit position of the looked-up bits.
        shift: u32,
        /// Number of looked-up bits.
        width: u32,
        /// Values that select full-width encodings.
        wide: Vec<u32>,
    },
}

/// Compilation settings of one encoding family.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FamilyConfig {
    /// Root dispatch.
    #[serde(default)]
    pub dispatch: Dispatch,

    /// Accepted descriptor widths; the largest is the decoded word width.
    #[serde(default = "FamilyConfig::default_widths")]
    pub widths: Vec<u32>,
}

impl FamilyConfig {
    fn default_widths() -> Vec<u32> {
        vec![defaults::WORD_WIDTH]
    }

    /// Width of the words this family decodes.
    pub fn word_width(&self) -> u32 {
        self.widths.iter().copied().max().unwrap_or(defaults::WORD_WIDTH)
    }

    /// Returns true if a 16-bit leading halfword needs a second halfword.
    ///
    /// # Arguments
    ///
    /// * `halfword` - The leading halfword.
    pub fn is_wide(&self, halfword: u16) -> bool {
        match &self.dispatch {
            Dispatch::Table { shift, width, wide } => {
                let word = u32::from(halfword) << 16;
                let prefix = crate::common::bits::extract(word, *shift, *width);
                wide.contains(&prefix)
            }
            _ => !self.widths.contains(&16),
        }
    }

    /// ARM family: condition-nibble root, 32-bit encodings.
    pub fn arm() -> Self {
        Self {
            dispatch: Dispatch::ConditionNibble {
                shift: defaults::ARM_COND_SHIFT,
                value: defaults::ARM_UNCONDITIONAL,
            },
            widths: vec![32],
        }
    }

    /// Thumb family: five-bit lookup root, 16- and 32-bit encodings.
    pub fn thumb() -> Self {
        Self {
            dispatch: Dispatch::Table {
                shift: defaults::THUMB_PREFIX_SHIFT,
                width: defaults::THUMB_PREFIX_WIDTH,
                wide: defaults::THUMB_WIDE_PREFIXES.to_vec(),
            },
            widths: vec![16, 32],
        }
    }
}

impl Default for FamilyConfig {
    fn default() -> Self {
        Self { dispatch: Dispatch::Trie, widths: Self::default_widths() }
    }
}

/// General build settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Log every descriptor expansion at trace level while building.
    #[serde(default)]
    pub trace_build: bool,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use armdec_core::config::{Config, Dispatch};
///
/// let config = Config::from_json(r#"{ "arm": { "dispatch": "Trie" } }"#).unwrap();
/// assert_eq!(config.arm.dispatch, Dispatch::Trie);
/// assert_eq!(config.arm.widths, vec![32]);
/// assert_eq!(config.thumb.widths, vec![16, 32]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// ARM (32-bit) family.
    #[serde(default = "FamilyConfig::arm")]
    pub arm: FamilyConfig,
    /// Thumb (16/32-bit) family.
    #[serde(default = "FamilyConfig::thumb")]
    pub thumb: FamilyConfig,
}

impl Config {
    /// Parses a JSON configuration; missing sections take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            arm: FamilyConfig::arm(),
            thumb: FamilyConfig::thumb(),
        }
    }
}
