//! ulp measurement shared by the crate's unit suite and the MPFR tests.

#![allow(dead_code)]

#[cfg(feature = "mpfr")]
use rug::Float;

#[cfg(feature = "mpfr")]
pub const MPFR_PREC: u32 = 256;

pub fn ulp_size(x: f64) -> f64 {
    if x == 0.0 {
        return f64::from_bits(1);
    }
    if x.is_nan() || x.is_infinite() {
        return f64::NAN;
    }
    let next = if x.is_sign_negative() {
        x.next_down()
    } else {
        x.next_up()
    };
    (next - x).abs()
}

/// Distance between two doubles in ulps of `expected`.
pub fn ulp_error(actual: f64, expected: f64) -> f64 {
    let diff = (actual - expected).abs();
    if diff == 0.0 {
        return 0.0;
    }
    let ulp = ulp_size(expected);
    if !ulp.is_finite() || ulp == 0.0 {
        return f64::INFINITY;
    }
    diff / ulp
}

/// ln(x) at MPFR_PREC bits, not rounded to f64.
#[cfg(feature = "mpfr")]
pub fn mpfr_ln_exact(x: f64) -> Float {
    let mut v = Float::with_val(MPFR_PREC, x);
    v.ln_mut();
    v
}

#[cfg(feature = "mpfr")]
pub fn mpfr_ln_f64(x: f64) -> f64 {
    mpfr_ln_exact(x).to_f64()
}

/// Error of `actual` against the unrounded value `exact`, in ulps of the
/// double nearest to `exact`. A faithful result stays strictly below 1.
#[cfg(feature = "mpfr")]
pub fn ulp_error_exact(actual: f64, exact: &Float) -> f64 {
    let ulp = ulp_size(exact.to_f64());
    if !ulp.is_finite() || ulp == 0.0 {
        return f64::INFINITY;
    }
    let mut diff = Float::with_val(MPFR_PREC, actual);
    diff -= exact;
    diff.abs_mut();
    diff /= ulp;
    diff.to_f64()
}
