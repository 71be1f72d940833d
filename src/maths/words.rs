//! High 32-bit word view of a binary64 value: sign, the 11-bit biased
//! exponent and the top 20 mantissa bits.

use super::{f64_from_bits, f64_to_bits};

const LO_MASK: u64 = 0xffff_ffffu64;

#[inline(always)]
pub fn hi_word(x: f64) -> u32 {
    (f64_to_bits(x) >> 32) as u32
}

/// Replaces the high word of `x`, keeping its low word.
#[inline(always)]
pub fn with_hi_word(x: f64, hi: u32) -> f64 {
    f64_from_bits(((hi as u64) << 32) | (f64_to_bits(x) & LO_MASK))
}
