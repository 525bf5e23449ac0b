use armdec_core::encoding::{BitField, InstructionDescriptor};

/// Turns a pattern such as `"1010_xxxx"` into pieces.
///
/// `0` and `1` are constant bits, each run of `x` becomes one immediate piece,
/// and `_` or spaces are ignored.
pub fn pieces(pattern: &str) -> Vec<BitField> {
    let mut out = Vec::new();
    let mut run = 0u8;
    for c in pattern.chars().filter(|c| !matches!(c, '_' | ' ')) {
        if c == 'x' {
            run += 1;
            continue;
        }
        if run > 0 {
            out.push(BitField::imm(run));
            run = 0;
        }
        match c {
            '0' => out.push(BitField::ZERO),
            '1' => out.push(BitField::ONE),
            other => panic!("unexpected pattern character {other:?}"),
        }
    }
    if run > 0 {
        out.push(BitField::imm(run));
    }
    out
}

/// Descriptor built from a pattern alone.
pub fn desc(mnemonic: &str, pattern: &str) -> InstructionDescriptor {
    InstructionDescriptor::new(mnemonic, &pieces(pattern))
}

/// Descriptor built from a pattern prefix followed by explicit pieces.
pub fn desc_with(mnemonic: &str, prefix: &str, tail: &[BitField]) -> InstructionDescriptor {
    let mut bits = pieces(prefix);
    bits.extend_from_slice(tail);
    InstructionDescriptor::new(mnemonic, &bits)
}
