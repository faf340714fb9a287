//! Hardware configuration of a compared server.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::LifecycleError;

/// Role of a system in a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemRole {
    /// The hardware currently in operation.
    Old,
    /// The replacement candidate.
    New,
}

impl Display for SystemRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemRole::Old => f.write_str("old"),
            SystemRole::New => f.write_str("new"),
        }
    }
}

fn default_lifetime() -> u32 {
    20
}

/// Hardware configuration of a server, immutable during a comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HardwareConfig {
    /// Die area in cm² (the packaging size is assumed to be equal to the die size).
    pub packaging_size: f64,
    /// Benchmark score for the selected workload.
    /// `None` if the CPU was never measured on this workload.
    #[serde(default)]
    pub performance_indicator: Option<f64>,
    /// Intended service life in years. Informational only.
    #[serde(default = "default_lifetime")]
    pub lifetime_years: u32,
    /// DRAM capacity in GB.
    pub dram_capacity_gb: f64,
    /// SSD capacity in GB.
    #[serde(default)]
    pub ssd_capacity_gb: f64,
    /// HDD capacity in GB.
    #[serde(default)]
    pub hdd_capacity_gb: f64,
    /// CPU thermal design power in W.
    pub cpu_tdp_watts: f64,
}

impl HardwareConfig {
    /// Creates hardware configuration.
    pub fn new(
        packaging_size: f64,
        performance_indicator: Option<f64>,
        lifetime_years: u32,
        dram_capacity_gb: f64,
        ssd_capacity_gb: f64,
        hdd_capacity_gb: f64,
        cpu_tdp_watts: f64,
    ) -> Self {
        Self {
            packaging_size,
            performance_indicator,
            lifetime_years,
            dram_capacity_gb,
            ssd_capacity_gb,
            hdd_capacity_gb,
            cpu_tdp_watts,
        }
    }

    /// Returns the performance indicator of the system playing `role`,
    /// failing if it is absent, non-positive or not finite.
    pub fn performance(&self, role: SystemRole) -> Result<f64, LifecycleError> {
        match self.performance_indicator {
            None => Err(LifecycleError::MissingPerformanceIndicator(role)),
            Some(value) if !(value.is_finite() && value > 0.) => {
                Err(LifecycleError::InvalidPerformanceIndicator { role, value })
            }
            Some(value) => Ok(value),
        }
    }
}
