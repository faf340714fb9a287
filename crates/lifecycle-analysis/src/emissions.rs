//! Embodied and operational emissions of a hardware configuration.

use log::debug;

use lifecycle_models::embodied::capacity::CapacityEmbodiedModel;
use lifecycle_models::embodied::die::DieEmbodiedModel;
use lifecycle_models::embodied::EmbodiedModel;
use lifecycle_models::power::cpu_models::linear::{LinearCpuPowerModel, DEFAULT_IDLE_FRACTION};
use lifecycle_models::power::host::{HostPowerModel, HostPowerModelBuilder};
use lifecycle_models::power::memory_models::capacity::CapacityMemoryPowerModel;
use lifecycle_models::power::storage_models::presence::PresenceStoragePowerModel;

use crate::components::{ComponentBreakdown, OpexBreakdown};
use crate::hardware::HardwareConfig;

/// Hours of operation per year. The year is approximated by 52 weeks (364 days).
pub const HOURS_PER_YEAR: f64 = 24. * 7. * 52.;

/// Returns the fraction of the maximum power drawn at `utilization` percent
/// by a CPU that draws `idle_percent` percent of its maximum power when idle.
///
/// The result is not clamped, out-of-range utilization is extrapolated.
pub fn normalized_power_usage(utilization: f64, idle_percent: f64) -> f64 {
    let slope = (100. - idle_percent) / 100.;
    (idle_percent + utilization * slope) / 100.
}

/// Emissions model of a server made of a CPU, DRAM, SSD and HDD storage.
///
/// Embodied emissions follow the ACT model, operational emissions are derived from
/// the power draw of the components and the grid carbon intensity.
#[derive(Clone, Debug)]
pub struct EmissionsModel {
    cpu_embodied: DieEmbodiedModel,
    dram_embodied: CapacityEmbodiedModel,
    ssd_embodied: CapacityEmbodiedModel,
    hdd_embodied: CapacityEmbodiedModel,
    cpu_idle_fraction: f64,
}

impl EmissionsModel {
    /// Creates the model with default parameters (CPU idle power at 50% of TDP).
    pub fn new() -> Self {
        Self {
            cpu_embodied: DieEmbodiedModel::new(),
            dram_embodied: CapacityEmbodiedModel::dram(),
            ssd_embodied: CapacityEmbodiedModel::ssd(),
            hdd_embodied: CapacityEmbodiedModel::hdd(),
            cpu_idle_fraction: DEFAULT_IDLE_FRACTION,
        }
    }

    /// Sets the share of TDP drawn by an idle CPU, in percent.
    pub fn with_cpu_idle_percent(mut self, idle_percent: f64) -> Self {
        self.cpu_idle_fraction = idle_percent / 100.;
        self
    }

    /// Replaces the die emissions model.
    pub fn with_die_model(mut self, model: DieEmbodiedModel) -> Self {
        self.cpu_embodied = model;
        self
    }

    /// Returns the share of TDP drawn by an idle CPU, in percent.
    pub fn cpu_idle_percent(&self) -> f64 {
        self.cpu_idle_fraction * 100.
    }

    /// Builds the power model of a host with the given configuration.
    pub fn host_power_model(&self, config: &HardwareConfig) -> HostPowerModel {
        HostPowerModelBuilder::new()
            .cpu(Box::new(LinearCpuPowerModel::from_tdp(
                config.cpu_tdp_watts,
                self.cpu_idle_fraction,
            )))
            .memory(Box::new(CapacityMemoryPowerModel::new(config.dram_capacity_gb)))
            .ssd(Box::new(PresenceStoragePowerModel::ssd(config.ssd_capacity_gb)))
            .hdd(Box::new(PresenceStoragePowerModel::hdd(config.hdd_capacity_gb)))
            .build()
    }

    /// Computes the embodied emissions of the configuration in kg CO₂.
    pub fn capex_emissions(&self, config: &HardwareConfig) -> ComponentBreakdown {
        ComponentBreakdown::new(
            self.cpu_embodied.get_emissions(config.packaging_size),
            self.dram_embodied.get_emissions(config.dram_capacity_gb),
            self.ssd_embodied.get_emissions(config.ssd_capacity_gb),
            self.hdd_embodied.get_emissions(config.hdd_capacity_gb),
        )
    }

    /// Computes the operational emissions of the configuration.
    ///
    /// * `utilization` - CPU utilization in percent, nominally 0-100.
    /// * `grid_intensity` - Grid carbon intensity in g CO₂ per kWh.
    pub fn opex_emissions(&self, config: &HardwareConfig, utilization: f64, grid_intensity: f64) -> OpexBreakdown {
        let watts = self.host_power_model(config).get_power_breakdown(utilization / 100.);
        let power = ComponentBreakdown::new(
            watts.cpu / 1000.,
            watts.memory / 1000.,
            watts.ssd / 1000.,
            watts.hdd / 1000.,
        );
        let annual_energy = power.total() * HOURS_PER_YEAR;
        let opex_per_year = annual_energy * grid_intensity / 1000.;
        debug!(
            "power {:.4} kW, energy {:.1} kWh/year, opex {:.1} kg/year at {}% utilization and {} g/kWh",
            power.total(),
            annual_energy,
            opex_per_year,
            utilization,
            grid_intensity
        );
        OpexBreakdown {
            power,
            annual_energy,
            grid_intensity,
            opex_per_year,
        }
    }
}

impl Default for EmissionsModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the embodied emissions of the configuration using the default model.
pub fn capex_emissions(config: &HardwareConfig) -> ComponentBreakdown {
    EmissionsModel::new().capex_emissions(config)
}

/// Computes the operational emissions of the configuration using the default model.
pub fn opex_emissions(config: &HardwareConfig, utilization: f64, grid_intensity: f64) -> OpexBreakdown {
    EmissionsModel::new().opex_emissions(config, utilization, grid_intensity)
}
