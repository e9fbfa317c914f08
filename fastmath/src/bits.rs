//! Lossless reinterpretation between `f32` and its IEEE-754 bit pattern.
//!
//! These relabel the same 32 bits; they never perform a numeric conversion.  NaN payloads,
//! signalling NaNs, infinities, and subnormals all survive a round trip untouched.

use fastapprox::bits;

pub const SIGN_MASK: u32 = 0x8000_0000;
pub const EXPONENT_MASK: u32 = 0x7F80_0000;
pub const MANTISSA_MASK: u32 = 0x007F_FFFF;
pub const EXPONENT_SHIFT: u32 = 23;
pub const EXPONENT_BIAS: i32 = 127;
/// Exponent field of `1.0`.  OR-ing a mantissa into this yields a value in [1, 2).
pub const ONE_EXPONENT_BITS: u32 = 0x3F80_0000;

#[inline(always)]
pub fn float_to_bits(x: f32) -> u32 { bits::to_bits(x) }

#[inline(always)]
pub fn bits_to_float(b: u32) -> f32 { bits::from_bits(b) }

/// Unbiased binary exponent of `x`.  Zero and subnormals report `-127`.
#[inline]
pub fn unbiased_exponent(bits: u32) -> i32 {
  ((bits & EXPONENT_MASK) >> EXPONENT_SHIFT) as i32 - EXPONENT_BIAS
}

/// Mantissa of `bits` with the exponent forced to that of `1.0`, so the result is in [1, 2).
#[inline]
pub fn normalized_mantissa(bits: u32) -> f32 {
  bits_to_float((bits & MANTISSA_MASK) | ONE_EXPONENT_BITS)
}
