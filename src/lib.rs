#![no_std]
//! IEEE-754 binary64 natural logarithm computed directly from the bit
//! pattern, with no libm underneath.
//!
//! ```
//! assert_eq!(fastln::ln(1.0), 0.0);
//! assert_eq!(fastln::ln(0.0), f64::NEG_INFINITY);
//! assert!(fastln::ln(-1.0).is_nan());
//! ```

#[cfg(test)]
extern crate std;

pub mod maths;

pub use maths::ln;

#[cfg(test)]
#[path = "../tests/support/mod.rs"]
mod test_support;
