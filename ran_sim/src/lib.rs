//! Closed-form estimators for the physical properties of a disaggregated RAN hardware design:
//! power, thermal, signal integrity, RF link budget, baseband throughput, and switching fabric.
//!
//! Every estimator is a pure function of its scalar arguments.  Degenerate inputs never produce an
//! error: they resolve to a clamped category, a zero result, or the log2 sentinel, as documented on
//! each function.  With the `exports` feature (on by default), each estimator is also exposed to
//! the host as an unmangled `compute_*` symbol.

pub mod compute;
pub mod digital;
pub mod fabric;
pub mod power;
pub mod rf;
pub mod signal_integrity;

#[cfg(feature = "exports")]
pub mod exports;

#[cfg(test)]
mod tests;

pub use fastmath::{
  bits_to_float, db_to_linear, fast_log10, fast_log2, fast_pow2, float_to_bits, linear_to_db,
  LOG2_SENTINEL,
};

pub use crate::{
  compute::ai_throughput,
  digital::{fft_latency, ldpc_throughput},
  fabric::{link_power, switching_latency},
  power::{block_power, power_density, thermal, BlockType},
  rf::{beamforming_gain, snr, spectral_efficiency},
  signal_integrity::{rc_delay, signal_integrity_loss},
};
