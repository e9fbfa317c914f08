//! IO switching fabric latency and link power.

use fastmath::fast_log2;

/// Time to serialize a 128-bit header over a PAM4 112G lane, in ns
pub const SERDES_HEADER_LATENCY_NS: f32 = 128. / 112.;

/// Two pipeline stages per level of the switch tree
const PIPELINE_STAGES_PER_LEVEL: f32 = 2.;

/// Cut-through switching latency in ns: SerDes header latency plus `2 * log2(ports)` pipeline
/// stages at `clock_ghz`.
///
/// Non-positive port counts go through the log2 sentinel and a zero clock divides through to an
/// infinite result.
#[inline]
pub fn switching_latency(fabric_ports: i32, clock_ghz: f32) -> f32 {
  let pipeline_stages = fast_log2(fabric_ports as f32) * PIPELINE_STAGES_PER_LEVEL;
  let fabric_latency_ns = pipeline_stages / clock_ghz;
  SERDES_HEADER_LATENCY_NS + fabric_latency_ns
}

/// Link power in mW.  Gbps * pJ/bit is exactly mW.
#[inline]
pub fn link_power(data_rate_gbps: f32, energy_per_bit_pj: f32) -> f32 {
  data_rate_gbps * energy_per_bit_pj
}
