//! Embodied emissions of memory and storage.

use crate::embodied::EmbodiedModel;

/// Embodied emissions of DRAM, kg CO₂ per GB.
pub const DRAM_EMISSIONS_PER_GB: f64 = 0.3;
/// Embodied emissions of SSD storage, kg CO₂ per GB.
pub const SSD_EMISSIONS_PER_GB: f64 = 0.015;
/// Embodied emissions of HDD storage, kg CO₂ per GB.
pub const HDD_EMISSIONS_PER_GB: f64 = 0.06;

/// Emissions model where the embodied emissions are proportional to the capacity.
#[derive(Clone, Debug, PartialEq)]
pub struct CapacityEmbodiedModel {
    emissions_per_gb: f64,
}

impl CapacityEmbodiedModel {
    /// Creates the model.
    ///
    /// * `emissions_per_gb` - Embodied emissions in kg CO₂ per GB.
    pub fn new(emissions_per_gb: f64) -> Self {
        Self { emissions_per_gb }
    }

    /// DRAM model.
    pub fn dram() -> Self {
        Self::new(DRAM_EMISSIONS_PER_GB)
    }

    /// SSD model.
    pub fn ssd() -> Self {
        Self::new(SSD_EMISSIONS_PER_GB)
    }

    /// HDD model.
    pub fn hdd() -> Self {
        Self::new(HDD_EMISSIONS_PER_GB)
    }
}

impl EmbodiedModel for CapacityEmbodiedModel {
    fn get_emissions(&self, capacity: f64) -> f64 {
        capacity * self.emissions_per_gb
    }
}
