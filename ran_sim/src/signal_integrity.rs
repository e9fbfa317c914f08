//! On-die interconnect delay and board-level channel loss.

/// Elmore coefficient for a distributed RC line
const ELMORE_COEFFICIENT: f32 = 0.38;

/// Skin-effect loss, dB per GHz per mm
const SKIN_LOSS_DB_PER_GHZ_MM: f32 = 0.04;
/// Dielectric loss, dB per GHz per mm
const DIELECTRIC_LOSS_DB_PER_GHZ_MM: f32 = 0.02;

/// Elmore delay of a distributed RC wire in fs: `0.38 * RC * L^2`.
#[inline]
pub fn rc_delay(length_um: f32, rc_product_fs_per_um2: f32) -> f32 {
  ELMORE_COEFFICIENT * rc_product_fs_per_um2 * length_um * length_um
}

/// Insertion loss of a PCB trace in dB, as the sum of skin-effect and dielectric loss, each linear
/// in frequency and length.
#[inline]
pub fn signal_integrity_loss(freq_ghz: f32, trace_length_mm: f32) -> f32 {
  let skin = SKIN_LOSS_DB_PER_GHZ_MM * freq_ghz * trace_length_mm;
  let dielectric = DIELECTRIC_LOSS_DB_PER_GHZ_MM * freq_ghz * trace_length_mm;
  skin + dielectric
}
