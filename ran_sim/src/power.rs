//! Power and thermal estimates.

use log::debug;

/// Hardware block categories, as encoded by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum BlockType {
  Unknown = 0,
  /// ADC/DAC analog front end
  AnalogFrontEnd = 1,
  DigitalLogic = 2,
  /// IO/SerDes
  SerDes = 3,
  ComputeCore = 4,
  SwitchingFabric = 5,
}

/// Representative switching capacitance per block category in pF, indexed by `BlockType`
const CAPACITANCE_PF: [f32; 6] = [0.0, 2.5, 8.0, 1.2, 15.0, 4.0];

/// Leakage is modeled as a flat 1% of switching capacitance
const LEAKAGE_RATIO: f32 = 0.01;

impl BlockType {
  /// Maps the raw host encoding to a category.  Anything outside of [0, 5] is treated as
  /// `Unknown`, which contributes no capacitance.
  pub fn from_raw(raw: i32) -> Self {
    match raw {
      0 => BlockType::Unknown,
      1 => BlockType::AnalogFrontEnd,
      2 => BlockType::DigitalLogic,
      3 => BlockType::SerDes,
      4 => BlockType::ComputeCore,
      5 => BlockType::SwitchingFabric,
      _ => {
        debug!("Invalid block type {raw}; treating as unknown");
        BlockType::Unknown
      },
    }
  }

  pub const fn capacitance_pf(self) -> f32 { CAPACITANCE_PF[self as usize] }
}

/// Dynamic + leakage power of a block in mW.
///
/// Dynamic power is `a * C * V^2 * f`; leakage is `V * C * 1%`.
#[inline]
pub fn block_power(block_type: i32, freq_ghz: f32, vdd: f32, active_factor: f32) -> f32 {
  let cap_pf = BlockType::from_raw(block_type).capacitance_pf();
  let dynamic_mw = active_factor * cap_pf * 1e-12 * vdd * vdd * freq_ghz * 1e9 * 1e3;
  let static_mw = vdd * (cap_pf * LEAKAGE_RATIO);
  dynamic_mw + static_mw
}

/// Power density in mW/mm^2.  Non-positive areas yield 0.
#[inline]
pub fn power_density(total_power_mw: f32, area_mm2: f32) -> f32 {
  if area_mm2 <= 0. {
    debug!("Non-positive area {area_mm2} mm^2; power density is 0");
    return 0.;
  }
  total_power_mw / area_mm2
}

/// Junction temperature in degrees C given dissipated power and a junction-to-ambient thermal
/// resistance in C/W.
#[inline]
pub fn thermal(power_mw: f32, r_thermal_c_per_w: f32, ambient_c: f32) -> f32 {
  ambient_c + (power_mw * 0.001) * r_thermal_c_per_w
}
