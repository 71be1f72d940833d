//! Natural logarithm and the IEEE-754 word helpers it is built on.
//!
//! Everything here is bit-level and libm-free so it runs under no_std. The
//! word accessors and classification predicates are exported because `ln`
//! treats them as its leaf primitives.

#![allow(clippy::excessive_precision)]
#![allow(clippy::unusual_byte_groupings)]

mod classify;
pub mod consts;
mod log;
mod words;

pub use classify::isnan;
pub use log::ln;
pub use words::{hi_word, with_hi_word};

// ========= bit helpers =========

#[inline(always)]
fn f64_from_bits(u: u64) -> f64 {
    f64::from_bits(u)
}
#[inline(always)]
fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}
