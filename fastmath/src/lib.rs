//! Self-contained transcendental approximations for hosts without a libm.
//!
//! Nothing in here calls into `std`'s float math; everything is built from bit manipulation and
//! fixed polynomials so that the module links without any system libraries.

use std::f32::consts::LOG2_E;

pub mod bits;

pub use crate::bits::{bits_to_float, float_to_bits};
use crate::bits::{normalized_mantissa, unbiased_exponent};

/// Returned by [`fast_log2`] for arguments that are not strictly positive.
pub const LOG2_SENTINEL: f32 = -100.;

/// Minimax fit of the natural log over mantissas in [1, 2), constant term first.
#[allow(clippy::excessive_precision)]
const MANTISSA_LN_COEFFICIENTS: [f32; 5] = [
  -1.7417939,
  2.8212026,
  -1.4699568,
  0.44717955,
  -0.056570851,
];

#[allow(clippy::approx_constant)]
pub const LOG10_2: f32 = 0.30103;
/// log2(10) / 10, so that `fast_pow2(db * DB_TO_LOG2) == 10^(db / 10)`
pub const DB_TO_LOG2: f32 = 0.332193;

#[allow(clippy::approx_constant)]
const LN_2: f32 = 0.693147;
/// Taylor coefficients of `e^t` up to `t^4 / 4!`
const EXP_TAYLOR_COEFFICIENTS: [f32; 5] = [1., 1., 0.5, 0.166667, 0.041667];

/// Largest magnitude exponent `fast_pow2` will evaluate before saturating
pub const POW2_MAX_EXPONENT: f32 = 50.;
/// 2^50
pub const POW2_SATURATION_HIGH: f32 = 1125899906842624.;
/// 2^-50
pub const POW2_SATURATION_LOW: f32 = 8.88e-16;

/// Base 2 logarithm.  Absolute error is below 1e-3 for normal positive inputs.  Subnormals are
/// outside that bound: their exponent field reads as -127, so e.g. `1e-40` comes out near -127
/// rather than -132.9.
///
/// Zero, negative, and NaN inputs all return [`LOG2_SENTINEL`] instead of `-inf` or NaN.
#[inline]
pub fn fast_log2(x: f32) -> f32 {
  if x.is_nan() || x <= 0. {
    log::trace!("fast_log2 called with non-positive argument {x}; returning sentinel");
    return LOG2_SENTINEL;
  }

  let bits = float_to_bits(x);
  let exponent = unbiased_exponent(bits);
  let m = normalized_mantissa(bits);

  let [c0, c1, c2, c3, c4] = MANTISSA_LN_COEFFICIENTS;
  let ln_m = c0 + m * (c1 + m * (c2 + m * (c3 + m * c4)));
  exponent as f32 + ln_m * LOG2_E
}

/// Base 10 logarithm, derived from [`fast_log2`].  Shares its domain and sentinel.
#[inline]
pub fn fast_log10(x: f32) -> f32 { fast_log2(x) * LOG10_2 }

/// Raises 2 to `x`.  Saturates to 2^50 above 50 and to 2^-50 below -50, so the integer part is
/// applied with at most 50 multiplications.
#[inline]
pub fn fast_pow2(x: f32) -> f32 {
  if x > POW2_MAX_EXPONENT {
    return POW2_SATURATION_HIGH;
  }
  if x < -POW2_MAX_EXPONENT {
    return POW2_SATURATION_LOW;
  }

  // truncates towards zero, so `xf` is in (-1, 1) with the same sign as `x`
  let xi = x as i32;
  let xf = x - xi as f32;
  let t = xf * LN_2;

  let [c0, c1, c2, c3, c4] = EXP_TAYLOR_COEFFICIENTS;
  let mut r = c0 + t * (c1 + t * (c2 + t * (c3 + t * c4)));

  let step = if xi >= 0 { 2. } else { 0.5 };
  for _ in 0..xi.unsigned_abs() {
    r *= step;
  }
  r
}

/// Converts decibels (power ratio) to a linear ratio: `10^(db / 10)`.
#[inline]
pub fn db_to_linear(db: f32) -> f32 { fast_pow2(db * DB_TO_LOG2) }

/// Converts a linear power ratio to decibels: `10 * log10(ratio)`.
#[inline]
pub fn linear_to_db(ratio: f32) -> f32 { 10. * fast_log10(ratio) }
