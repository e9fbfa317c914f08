use crate::*;

use self::helpers::{assert_close, plot_error};


#[test]
fn compute_core_block_power() {
  // dynamic: 0.5 * 15pF * 0.8^2 * 2GHz = 9.6 mW, leakage: 0.8 * 0.15 = 0.12 mW
  assert_close(block_power(4, 2.0, 0.8, 0.5), 9.72, 1e-4);
}

#[test]
fn block_power_per_category() {
  let expected_caps = [0.0, 2.5, 8.0, 1.2, 15.0, 4.0];
  for (raw, &cap) in expected_caps.iter().enumerate() {
    let block_type = BlockType::from_raw(raw as i32);
    assert_eq!(block_type as i32, raw as i32);
    assert_eq!(block_type.capacitance_pf(), cap);

    // with no switching activity, only leakage remains
    assert_close(block_power(raw as i32, 1.0, 1.0, 0.0), cap * 0.01, 1e-7);
  }
  assert_eq!(block_power(0, 3.0, 1.1, 1.0), 0.);
}

#[test]
fn power_density_and_thermal() {
  assert_eq!(power_density(500., 4.), 125.);
  assert_eq!(power_density(-10., 2.), -5.);
  assert_eq!(thermal(2_000., 10., 25.), 45.);
  assert_eq!(thermal(0., 100., -40.), -40.);
  assert_close(thermal(9.72, 50., 25.), 25.486, 1e-4);
}

#[test]
fn signal_integrity_formulas() {
  assert_close(rc_delay(100., 0.5), 1_900., 1e-2);
  assert_eq!(rc_delay(0., 123.), 0.);
  assert_eq!(rc_delay(-100., 0.5), rc_delay(100., 0.5));

  assert_close(signal_integrity_loss(28., 100.), 168., 1e-3);
  assert_eq!(signal_integrity_loss(0., 100.), 0.);
}

#[test]
fn beamforming_gain_of_64_element_array() {
  assert_close(beamforming_gain(64, 5.0), 23.06, 0.01);
  assert_close(beamforming_gain(1, 3.0), 3.0, 1e-3);
  assert_close(beamforming_gain(256, 0.), 24.08, 0.01);
}

#[test]
fn snr_is_exact() {
  assert_eq!(snr(20.0, 100.0, 3.0), 5.0);
  assert_eq!(snr(0., 88., 0.), 0.);
}

#[test]
fn spectral_efficiency_follows_shannon() {
  for (snr_db, expected) in [(0., 1.), (10., 3.4594), (20., 6.6582), (30., 9.9672), (-10., 0.1375)] {
    assert_close(spectral_efficiency(snr_db, 1.), expected, 3e-3);
  }
  assert_close(spectral_efficiency(10., 0.4), 0.4 * 3.4594, 3e-3);
  assert_eq!(spectral_efficiency(10., 0.), 0.);
}

#[test]
fn spectral_efficiency_saturates_for_extreme_snr() {
  // 10^(200/10) saturates at 2^50, so capacity tops out around 50 bits/s/Hz
  assert_close(spectral_efficiency(200., 1.), 50., 1e-3);
  assert_close(spectral_efficiency(-200., 1.), 0., 1e-3);
}

#[test]
fn digital_processing() {
  assert_close(ldpc_throughput(0.5, 1.0, 16), 6.8, 1e-5);
  assert_eq!(ldpc_throughput(0.5, 1.0, 0), 0.);

  assert_close(fft_latency(1024, 1.0, 4), 2_560., 0.1);
  assert_close(fft_latency(4096, 2.0, 8), 3_072., 0.1);
  assert_close(fft_latency(1000, 1.5, 3), 2_214.6, 0.1);
}

#[test]
fn compute_and_fabric() {
  assert_close(ai_throughput(400., 0.6, 0.5), 120., 1e-4);
  assert_close(link_power(112., 5.), 560., 1e-4);
  assert_close(switching_latency(32, 2.0), 6.1429, 1e-3);
  assert_close(switching_latency(1, 1.0), 128. / 112., 1e-3);
}

#[cfg(feature = "exports")]
#[test]
fn exports_delegate() {
  use crate::exports::*;

  assert_eq!(compute_block_power(4, 2.0, 0.8, 0.5), block_power(4, 2.0, 0.8, 0.5));
  assert_eq!(compute_power_density(10., 0.), 0.);
  assert_eq!(compute_thermal(1_000., 1., 20.), 21.);
  assert_eq!(compute_rc_delay(10., 1.), rc_delay(10., 1.));
  assert_eq!(compute_signal_integrity(10., 10.), signal_integrity_loss(10., 10.));
  assert_eq!(compute_beamforming_gain(64, 5.), beamforming_gain(64, 5.));
  assert_eq!(compute_snr(20.0, 100.0, 3.0), 5.0);
  assert_eq!(compute_spectral_efficiency(10., 1.), spectral_efficiency(10., 1.));
  assert_eq!(compute_ldpc_throughput(0.5, 1., 16), ldpc_throughput(0.5, 1., 16));
  assert_eq!(compute_fft_latency(1024, 1., 0), 0.);
  assert_eq!(compute_ai_throughput(1., 2., 3.), 6.);
  assert_eq!(compute_switching_latency(32, 2.), switching_latency(32, 2.));
  assert_eq!(compute_link_power(2., 3.), 6.);
}

#[test]
fn log2_error_curve() {
  let max_err = plot_error(1., 8., fast_log2, f32::log2);
  assert!(max_err < 1e-3, "max_err={max_err}");
}

#[test]
fn pow2_tracks_fastapprox() {
  let mut p = 0.;
  while p < 30. {
    let ours = fast_pow2(p);
    let theirs = fastapprox::fast::pow2(p);
    assert!(((ours - theirs) / theirs).abs() < 3e-3, "p={p}, ours={ours}, theirs={theirs}");
    p += 0.37;
  }
}
