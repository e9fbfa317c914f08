//! Centralized unit AI accelerator throughput.

/// Effective TOPS after utilization and numeric precision derating.
#[inline]
pub fn ai_throughput(tops: f32, utilization: f32, precision_factor: f32) -> f32 {
  tops * utilization * precision_factor
}
