//! Binary64 layout constants and the split ln(2) used by [`ln`](super::ln).

/// Bias of the 11-bit exponent field.
pub const EXPONENT_BIAS: i32 = 1023;

// fdlibm split: ln2 = LN2_HI + LN2_LO. LN2_HI keeps its low 21 mantissa bits
// clear so k*LN2_HI is exact for every |k| < 2^11.
pub const LN2_HI: f64 = f64::from_bits(0x3fe6_2e42_fee0_0000);
pub const LN2_LO: f64 = f64::from_bits(0x3dea_39ef_3579_3c76);

/// 2^54, lifts subnormals into the normal range.
pub const TWO54: f64 = f64::from_bits(0x4350_0000_0000_0000);

// High-word views of the binary64 fields.
pub(crate) const HIGH_SIGNIFICAND_MASK: u32 = 0x000f_ffff;
pub(crate) const HIGH_MAX_NORMAL_EXP: u32 = 0x7ff0_0000; // Inf/NaN
pub(crate) const HIGH_MIN_NORMAL_EXP: u32 = 0x0010_0000; // 2^-1022
pub(crate) const HIGH_BIASED_EXP_0: u32 = 0x3ff0_0000; // 2^0
