//! Radio unit link estimates: array gain, SNR, and Shannon capacity.

use fastmath::{db_to_linear, fast_log2, linear_to_db};
use log::debug;

/// Thermal noise floor over the 400 MHz reference bandwidth: -174 dBm/Hz + 10*log10(400e6)
pub const NOISE_FLOOR_DBM: f32 = -88.;

/// Gain of a uniform array in dBi: `10 * log10(N) + element gain`.  Returns 0 for `N <= 0`.
#[inline]
pub fn beamforming_gain(num_antennas: i32, element_gain_dbi: f32) -> f32 {
  if num_antennas <= 0 {
    debug!("Non-positive antenna count {num_antennas}; beamforming gain is 0");
    return 0.;
  }
  linear_to_db(num_antennas as f32) + element_gain_dbi
}

/// Received SNR in dB against the fixed reference noise floor.
#[inline]
pub fn snr(tx_power_dbm: f32, path_loss_db: f32, noise_figure_db: f32) -> f32 {
  tx_power_dbm - path_loss_db - NOISE_FLOOR_DBM - noise_figure_db
}

/// Shannon capacity in Gbps: `B * log2(1 + 10^(snr / 10))` with B in GHz.
#[inline]
pub fn spectral_efficiency(snr_db: f32, bandwidth_ghz: f32) -> f32 {
  let snr_linear = db_to_linear(snr_db);
  bandwidth_ghz * fast_log2(1. + snr_linear)
}
