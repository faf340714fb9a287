//! Capacity-proportional DRAM power model.

use crate::power::memory::MemoryPowerModel;

/// Power draw of 256 GB of server DRAM in W.
///
/// See Table 1 in [Lee S. et al. GreenDIMM (MICRO, 2021)](https://dl.acm.org/doi/fullHtml/10.1145/3466752.3480089).
pub const DRAM_WATTS_PER_256GB: f64 = 25.9;

/// A power model where the DRAM power consumption is proportional to the installed capacity
/// and does not depend on utilization.
#[derive(Clone)]
pub struct CapacityMemoryPowerModel {
    memory_size: f64,
    reference_size: f64,
    reference_power: f64,
}

impl CapacityMemoryPowerModel {
    /// Creates the model for `memory_size` GB of DRAM using the default 25.9 W per 256 GB.
    pub fn new(memory_size: f64) -> Self {
        Self::custom_model(memory_size, 256., DRAM_WATTS_PER_256GB)
    }

    /// Creates the model with a custom reference point.
    ///
    /// * `memory_size` - Installed memory in GB.
    /// * `reference_size` - Memory size in GB for which the power draw is known.
    /// * `reference_power` - Power draw in W of `reference_size` GB of memory.
    pub fn custom_model(memory_size: f64, reference_size: f64, reference_power: f64) -> Self {
        Self {
            memory_size,
            reference_size,
            reference_power,
        }
    }
}

impl MemoryPowerModel for CapacityMemoryPowerModel {
    fn get_power(&self, _utilization: f64) -> f64 {
        (self.memory_size / self.reference_size) * self.reference_power
    }
}
