//! Host power model.

use crate::power::cpu::CpuPowerModel;
use crate::power::memory::MemoryPowerModel;
use crate::power::storage::StoragePowerModel;

/// Power consumption of a host split by component, in W.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PowerBreakdown {
    /// CPU power consumption.
    pub cpu: f64,
    /// Memory power consumption.
    pub memory: f64,
    /// Solid state drives power consumption.
    pub ssd: f64,
    /// Hard disk drives power consumption.
    pub hdd: f64,
}

impl PowerBreakdown {
    /// Returns the total power consumption of all components.
    pub fn total(&self) -> f64 {
        self.cpu + self.memory + self.ssd + self.hdd
    }
}

/// A model for estimating the power consumption of a physical host.
///
/// The host power consumption is modeled using the following parts:
/// - CPU power consumption estimated using the provided CPU power model
/// - memory power consumption estimated using the provided memory power model
/// - SSD and HDD power consumption estimated using the provided storage power models
///
/// Missing parts do not contribute to the host power consumption.
#[derive(Clone, Default)]
pub struct HostPowerModel {
    cpu_power_model: Option<Box<dyn CpuPowerModel>>,
    memory_power_model: Option<Box<dyn MemoryPowerModel>>,
    ssd_power_model: Option<Box<dyn StoragePowerModel>>,
    hdd_power_model: Option<Box<dyn StoragePowerModel>>,
}

impl HostPowerModel {
    /// Returns the per-component power consumption of a host in W at the given CPU utilization.
    ///
    /// Memory and storage are evaluated at the same utilization.
    pub fn get_power_breakdown(&self, utilization: f64) -> PowerBreakdown {
        PowerBreakdown {
            cpu: self.cpu_power_model.as_ref().map_or(0., |m| m.get_power(utilization)),
            memory: self.memory_power_model.as_ref().map_or(0., |m| m.get_power(utilization)),
            ssd: self.ssd_power_model.as_ref().map_or(0., |m| m.get_power(utilization)),
            hdd: self.hdd_power_model.as_ref().map_or(0., |m| m.get_power(utilization)),
        }
    }

    /// Returns the total power consumption of a host in W at the given CPU utilization.
    pub fn get_power(&self, utilization: f64) -> f64 {
        self.get_power_breakdown(utilization).total()
    }
}

/// Builder for [`HostPowerModel`].
#[derive(Default)]
pub struct HostPowerModelBuilder {
    model: HostPowerModel,
}

impl HostPowerModelBuilder {
    /// Creates a builder for the host without any components.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the CPU power model.
    pub fn cpu(mut self, cpu_power_model: Box<dyn CpuPowerModel>) -> Self {
        self.model.cpu_power_model = Some(cpu_power_model);
        self
    }

    /// Sets the memory power model.
    pub fn memory(mut self, memory_power_model: Box<dyn MemoryPowerModel>) -> Self {
        self.model.memory_power_model = Some(memory_power_model);
        self
    }

    /// Sets the SSD power model.
    pub fn ssd(mut self, ssd_power_model: Box<dyn StoragePowerModel>) -> Self {
        self.model.ssd_power_model = Some(ssd_power_model);
        self
    }

    /// Sets the HDD power model.
    pub fn hdd(mut self, hdd_power_model: Box<dyn StoragePowerModel>) -> Self {
        self.model.hdd_power_model = Some(hdd_power_model);
        self
    }

    /// Builds the host power model.
    pub fn build(self) -> HostPowerModel {
        self.model
    }
}
