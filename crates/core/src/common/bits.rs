//! Bit manipulation helpers shared by the builder, interpreter, and expansions.

/// Returns a mask of the low `width` bits (`width` may be 32).
#[inline]
pub const fn mask(width: u32) -> u32 {
    if width >= 32 { u32::MAX } else { (1 << width) - 1 }
}

/// Extracts `width` bits of `word` starting at bit `shift`.
///
/// # Arguments
///
/// * `word` - The source word.
/// * `shift` - Index of the lowest extracted bit.
/// * `width` - Number of bits to extract.
///
/// # Returns
///
/// The extracted bits, right-aligned.
#[inline]
pub const fn extract(word: u32, shift: u32, width: u32) -> u32 {
    if shift >= 32 {
        return 0;
    }
    (word >> shift) & mask(width)
}

/// Sign-extends the low `bits` of `value` to 64 bits.
///
/// A width of zero or of 64 and above returns `value` unchanged.
#[inline]
pub const fn sign_extend(value: u64, bits: u32) -> u64 {
    if bits == 0 || bits >= 64 {
        return value;
    }
    let shift = 64 - bits;
    (((value << shift) as i64) >> shift) as u64
}

/// Repeats the low `width` bits of `value` `count` times, lowest copy first.
#[inline]
pub const fn replicate(value: u64, width: u32, count: u32) -> u64 {
    let lane = if width >= 64 { value } else { value & ((1 << width) - 1) };
    let mut out = 0;
    let mut i = 0;
    while i < count {
        out |= lane << (i * width);
        i += 1;
    }
    out
}
