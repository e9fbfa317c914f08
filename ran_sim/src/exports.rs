//! Unmangled entry points called by the host.  Argument order and units match the Rust-level
//! functions these delegate to.

use crate::{compute, digital, fabric, power, rf, signal_integrity};

#[cfg(all(feature = "host_log_err", not(feature = "bindgen")))]
extern "C" {
  fn log_err(ptr: *const u8, len: usize);
}

/// Installs panic reporting (and, with `bindgen`, console logging).  Optional; the `compute_*`
/// functions work without it.
#[cfg(any(feature = "bindgen", feature = "host_log_err"))]
#[no_mangle]
pub extern "C" fn ran_sim_init() {
  #[cfg(feature = "bindgen")]
  common::maybe_init();
  #[cfg(not(feature = "bindgen"))]
  common::set_raw_panic_hook(log_err);
}

// Power analysis

/// `block_type`: 0 = unknown, 1 = AFE, 2 = digital logic, 3 = IO/SerDes, 4 = compute core,
/// 5 = switching fabric.  Returns mW.
#[no_mangle]
pub extern "C" fn compute_block_power(
  block_type: i32,
  freq_ghz: f32,
  vdd: f32,
  active_factor: f32,
) -> f32 {
  power::block_power(block_type, freq_ghz, vdd, active_factor)
}

/// mW/mm^2
#[no_mangle]
pub extern "C" fn compute_power_density(total_power_mw: f32, area_mm2: f32) -> f32 {
  power::power_density(total_power_mw, area_mm2)
}

/// Degrees C
#[no_mangle]
pub extern "C" fn compute_thermal(power_mw: f32, r_thermal_c_per_w: f32, ambient_c: f32) -> f32 {
  power::thermal(power_mw, r_thermal_c_per_w, ambient_c)
}

// Signal integrity

/// fs
#[no_mangle]
pub extern "C" fn compute_rc_delay(length_um: f32, rc_product_fs_per_um2: f32) -> f32 {
  signal_integrity::rc_delay(length_um, rc_product_fs_per_um2)
}

/// dB
#[no_mangle]
pub extern "C" fn compute_signal_integrity(freq_ghz: f32, trace_length_mm: f32) -> f32 {
  signal_integrity::signal_integrity_loss(freq_ghz, trace_length_mm)
}

// RF / beamforming (RU)

/// dBi
#[no_mangle]
pub extern "C" fn compute_beamforming_gain(num_antennas: i32, element_gain_dbi: f32) -> f32 {
  rf::beamforming_gain(num_antennas, element_gain_dbi)
}

/// dB
#[no_mangle]
pub extern "C" fn compute_snr(tx_power_dbm: f32, path_loss_db: f32, noise_figure_db: f32) -> f32 {
  rf::snr(tx_power_dbm, path_loss_db, noise_figure_db)
}

/// Gbps
#[no_mangle]
pub extern "C" fn compute_spectral_efficiency(snr_db: f32, bandwidth_ghz: f32) -> f32 {
  rf::spectral_efficiency(snr_db, bandwidth_ghz)
}

// Digital processing (DU)

/// Gbps
#[no_mangle]
pub extern "C" fn compute_ldpc_throughput(code_rate: f32, clock_ghz: f32, parallelism: i32) -> f32 {
  digital::ldpc_throughput(code_rate, clock_ghz, parallelism)
}

/// ns
#[no_mangle]
pub extern "C" fn compute_fft_latency(fft_size: i32, clock_ghz: f32, parallel_units: i32) -> f32 {
  digital::fft_latency(fft_size, clock_ghz, parallel_units)
}

// AI / compute (CU)

/// Effective TOPS
#[no_mangle]
pub extern "C" fn compute_ai_throughput(tops: f32, utilization: f32, precision_factor: f32) -> f32 {
  compute::ai_throughput(tops, utilization, precision_factor)
}

// Switching fabric (IO)

/// ns
#[no_mangle]
pub extern "C" fn compute_switching_latency(fabric_ports: i32, clock_ghz: f32) -> f32 {
  fabric::switching_latency(fabric_ports, clock_ghz)
}

/// mW
#[no_mangle]
pub extern "C" fn compute_link_power(data_rate_gbps: f32, energy_per_bit_pj: f32) -> f32 {
  fabric::link_power(data_rate_gbps, energy_per_bit_pj)
}
