//! Linear CPU power model.

use crate::power::cpu::CpuPowerModel;

/// Share of TDP drawn by an idle CPU in the default model.
pub const DEFAULT_IDLE_FRACTION: f64 = 0.5;

/// A power model based on linear interpolation between the minimum and maximum power consumption values.
///
/// Unlike simulation-oriented models, an idle CPU (0% utilization) is assumed to be powered on
/// and draws `min_power`.
#[derive(Clone)]
pub struct LinearCpuPowerModel {
    min_power: f64,
    max_power: f64,
    factor: f64,
}

impl LinearCpuPowerModel {
    /// Creates a linear power model.
    ///
    /// * `min_power` - The minimum power consumption in W (at 0% utilization).
    /// * `max_power` - The maximum power consumption in W (at 100% utilization).
    pub fn new(min_power: f64, max_power: f64) -> Self {
        Self {
            min_power,
            max_power,
            factor: max_power - min_power,
        }
    }

    /// Creates a linear power model from the thermal design power of a CPU.
    ///
    /// The CPU draws `idle_fraction * tdp` when idle and the full `tdp` at 100% utilization.
    /// See [Fan X. et al. Power provisioning for a warehouse-sized computer (ISCA, 2007)](https://ieeexplore.ieee.org/document/4404806).
    pub fn from_tdp(tdp: f64, idle_fraction: f64) -> Self {
        Self::new(tdp * idle_fraction, tdp)
    }

    /// Returns the maximum power consumption in W.
    pub fn max_power(&self) -> f64 {
        self.max_power
    }
}

impl CpuPowerModel for LinearCpuPowerModel {
    fn get_power(&self, utilization: f64) -> f64 {
        self.min_power + self.factor * utilization
    }
}
