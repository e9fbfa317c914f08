//! Distributed unit baseband processing: LDPC decode throughput and FFT latency.

use fastmath::fast_log2;
use log::debug;

/// Fraction of peak decoder throughput achieved in practice
const LDPC_HW_EFFICIENCY: f32 = 0.85;

/// LDPC decoder throughput in Gbps.
#[inline]
pub fn ldpc_throughput(code_rate: f32, clock_ghz: f32, parallelism: i32) -> f32 {
  clock_ghz * parallelism as f32 * code_rate * LDPC_HW_EFFICIENCY
}

/// Latency in ns of a radix-2 FFT spread across `parallel_units` butterfly units.
///
/// Returns 0 if any of the size, clock, or unit count is non-positive.
#[inline]
pub fn fft_latency(fft_size: i32, clock_ghz: f32, parallel_units: i32) -> f32 {
  if parallel_units <= 0 || fft_size <= 0 || clock_ghz <= 0. {
    debug!(
      "Degenerate FFT configuration (size={fft_size}, clock={clock_ghz} GHz, \
       units={parallel_units}); latency is 0"
    );
    return 0.;
  }

  let stages = fast_log2(fft_size as f32);
  let cycles = stages * (fft_size as f32 / parallel_units as f32);
  cycles / (clock_ghz * 1e9) * 1e9
}
