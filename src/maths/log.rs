//! Natural logarithm ln(x) implementation.
//!
//! fdlibm-style reduction on the high word: x = 2^k * (1+f) with
//! sqrt(2)/2 <= 1+f < sqrt(2). With s = f/(2+f), log(1+f) = f - s*(f - R(z))
//! where R is a minimax fit in z = s^2 (Lg1..Lg7). k*ln2 is added back through
//! the LN2_HI/LN2_LO split so the exponent part carries no rounding error.
//! Error < 1 ulp.

use super::consts::{
    EXPONENT_BIAS, HIGH_BIASED_EXP_0, HIGH_MAX_NORMAL_EXP, HIGH_MIN_NORMAL_EXP,
    HIGH_SIGNIFICAND_MASK, LN2_HI, LN2_LO, TWO54,
};
use super::{hi_word, isnan, with_hi_word};

const ONE_THIRD: f64 = f64::from_bits(0x3fd5_5555_5555_5555);

const LG1: f64 = f64::from_bits(0x3fe5_5555_5555_5593); // 6.666666666666735130e-01
const LG2: f64 = f64::from_bits(0x3fd9_9999_9997_fa04); // 3.999999999940941908e-01
const LG3: f64 = f64::from_bits(0x3fd2_4924_9422_9359); // 2.857142874366239149e-01
const LG4: f64 = f64::from_bits(0x3fcc_71c5_1d8e_78af); // 2.222219843214978396e-01
const LG5: f64 = f64::from_bits(0x3fc7_4664_96cb_03de); // 1.818357216161805012e-01
const LG6: f64 = f64::from_bits(0x3fc3_9a09_d078_c69f); // 1.531383769920937332e-01
const LG7: f64 = f64::from_bits(0x3fc2_f112_df3e_5244); // 1.479819860511658591e-01

// (hx + NORM_ROUND) carries into bit 20 once the mantissa passes sqrt(2).
const NORM_ROUND: u32 = 0x95f64;
const NORM_CARRY: u32 = 0x10_0000;

// Mantissa band where f - s*(f - R) loses less than the hfsq form.
const BAND_LO: i32 = 0x6147a;
const BAND_HI: i32 = 0x6b851;

/// Natural logarithm of `x`.
///
/// `ln(±0) = -inf`, `ln(x < 0) = NaN`, `ln(NaN) = NaN`, `ln(+inf) = +inf`.
///
/// ```
/// let y = fastln::ln(core::f64::consts::E);
/// assert!((y - 1.0).abs() <= f64::EPSILON);
/// ```
#[inline]
pub fn ln(x: f64) -> f64 {
    if x == 0.0 {
        return f64::NEG_INFINITY;
    }
    if isnan(x) || x < 0.0 {
        return f64::NAN;
    }

    let mut hx = hi_word(x);
    let mut xc = x;
    let mut k = 0i32;
    if hx < HIGH_MIN_NORMAL_EXP {
        // 0 < x < 2^-1022
        k -= 54;
        xc = x * TWO54;
        hx = hi_word(xc);
    }
    if hx >= HIGH_MAX_NORMAL_EXP {
        return x + x;
    }
    k += (hx >> 20) as i32 - EXPONENT_BIAS;
    hx &= HIGH_SIGNIFICAND_MASK;

    // normalize x or x/2
    let i = (hx + NORM_ROUND) & NORM_CARRY;
    xc = with_hi_word(xc, hx | (i ^ HIGH_BIASED_EXP_0));
    k += (i >> 20) as i32;
    let f = xc - 1.0;
    let dk = k as f64;

    if (HIGH_SIGNIFICAND_MASK & (2 + hx)) < 3 {
        // -2^-20 <= f < 2^-20
        if f == 0.0 {
            if k == 0 {
                return 0.0;
            }
            return dk * LN2_HI + dk * LN2_LO;
        }
        let r = f * f * (0.5 - ONE_THIRD * f);
        if k == 0 {
            return f - r;
        }
        return dk * LN2_HI - ((r - dk * LN2_LO) - f);
    }

    let s = f / (2.0 + f);
    let z = s * s;
    let w = z * z;
    let t1 = w * (LG2 + w * (LG4 + w * LG6));
    let t2 = z * (LG1 + w * (LG3 + w * (LG5 + w * LG7)));
    let r = t2 + t1;

    let hm = hx as i32;
    if ((hm - BAND_LO) | (BAND_HI - hm)) > 0 {
        let hfsq = 0.5 * f * f;
        if k == 0 {
            return f - (hfsq - s * (hfsq + r));
        }
        return dk * LN2_HI - ((hfsq - (s * (hfsq + r) + dk * LN2_LO)) - f);
    }
    if k == 0 {
        return f - s * (f - r);
    }
    dk * LN2_HI - ((s * (f - r) - dk * LN2_LO) - f)
}
