use armdec_core::encoding::{BitField, Field, InstructionDescriptor};

/// Overwrites the fixed bits of `descriptor` in `free`.
///
/// Offset 0 of the descriptor lands on bit `word_width - 1`, so a 16-bit
/// descriptor in a 32-bit family fills the top halfword and leaves the rest
/// of `free` untouched.
pub fn fill(descriptor: &InstructionDescriptor, word_width: u32, free: u32) -> u32 {
    let fixed = descriptor.fixed_bits();
    let mut word = free;
    for offset in 0..descriptor.width() {
        if let Some(bit) = fixed.get(offset) {
            let pos = word_width - 1 - offset;
            word = (word & !(1 << pos)) | (u32::from(bit) << pos);
        }
    }
    word
}

/// Like [`fill`], keeping the condition nibble of a conditional ARM encoding
/// out of the unconditional space.
pub fn fill_arm(descriptor: &InstructionDescriptor, free: u32) -> u32 {
    let word = fill(descriptor, 32, free);
    let conditional = matches!(
        descriptor.bits.first(),
        Some(BitField::Plain { slot: Field::Cond, width: 4, merge: 0 })
    );
    if conditional && word >> 28 == 0xF { word & !(1 << 28) } else { word }
}

/// True if the fixed bits of `general` are a strict subset of those of `specific`,
/// with the same values on the shared bits.
pub fn strictly_more_specific(
    specific: &InstructionDescriptor,
    general: &InstructionDescriptor,
) -> bool {
    let (s, g) = (specific.fixed_bits(), general.fixed_bits());
    let width = specific.width().min(general.width());
    let mut extra = false;
    for offset in 0..width {
        match (s.get(offset), g.get(offset)) {
            (Some(a), Some(b)) if a != b => return false,
            (None, Some(_)) => return false,
            (Some(_), None) => extra = true,
            _ => {}
        }
    }
    extra
}
