//! Scenario files.

use std::collections::BTreeMap;

use log::info;
use serde::{Deserialize, Serialize};

use crate::catalog::{find_cpu, SharedHardware, Workload};
use crate::comparison::{Comparator, ComparisonResult, OpexSource, Scenario};
use crate::emissions::EmissionsModel;
use crate::error::LifecycleError;
use crate::grid::{GridIntensityTable, GERMANY};
use crate::hardware::HardwareConfig;

/// Holds raw scenario config parsed from YAML file.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
struct RawScenarioConfig {
    pub time_horizon: Option<usize>,
    pub utilization: Option<f64>,
    pub country: Option<String>,
    pub workload: Option<Workload>,
    pub opex_source: Option<OpexSource>,
    pub cpu_idle_percent: Option<f64>,
    pub current_cpu: Option<String>,
    pub new_cpu: Option<String>,
    pub current_hardware: Option<HardwareConfig>,
    pub new_hardware: Option<HardwareConfig>,
    pub shared: Option<SharedHardware>,
    pub grid_intensities: Option<BTreeMap<String, f64>>,
    pub sweep: Option<SweepConfig>,
}

/// Countries and utilization levels to evaluate in a sweep.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct SweepConfig {
    /// Countries to evaluate, in output order.
    pub countries: Vec<String>,
    /// CPU utilization levels in percent.
    pub utilizations: Vec<f64>,
}

/// Represents a resolved scenario: hardware to compare and the deployment parameters.
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    /// Deployment parameters.
    pub scenario: Scenario,
    /// Hardware currently in operation.
    pub current_hardware: HardwareConfig,
    /// Replacement candidate. `None` evaluates the current hardware alone.
    pub new_hardware: Option<HardwareConfig>,
    /// Share of TDP drawn by an idle CPU, in percent.
    pub cpu_idle_percent: f64,
    /// Grid intensities including overrides from the file.
    pub grid: GridIntensityTable,
    /// Sweep section of the file, if present.
    pub sweep: Option<SweepConfig>,
}

fn resolve_hardware(
    cpu: Option<String>,
    explicit: Option<HardwareConfig>,
    workload: Workload,
    shared: &SharedHardware,
    field: &str,
) -> Result<Option<HardwareConfig>, LifecycleError> {
    match (cpu, explicit) {
        (Some(_), Some(_)) => Err(LifecycleError::InvalidScenario(format!(
            "both {field}_cpu and {field}_hardware are set"
        ))),
        (Some(name), None) => find_cpu(&name)?.hardware_config(workload, shared).map(Some),
        (None, explicit) => Ok(explicit),
    }
}

impl ScenarioConfig {
    /// Reads scenario from YAML file (uses default values if some parameters are absent).
    pub fn from_file(file_name: &str) -> Result<Self, LifecycleError> {
        let content = std::fs::read_to_string(file_name).map_err(|source| LifecycleError::Io {
            path: file_name.to_string(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        info!("Loaded scenario from {}", file_name);
        Ok(config)
    }

    /// Parses scenario from YAML string.
    pub fn from_yaml(content: &str) -> Result<Self, LifecycleError> {
        let raw: RawScenarioConfig = serde_yaml::from_str(content)?;

        let workload = raw.workload.unwrap_or(Workload::SpecRate);
        let shared = raw.shared.unwrap_or_default();
        let current_hardware = resolve_hardware(raw.current_cpu, raw.current_hardware, workload, &shared, "current")?
            .ok_or_else(|| LifecycleError::InvalidScenario("current hardware is not set".to_string()))?;
        let new_hardware = resolve_hardware(raw.new_cpu, raw.new_hardware, workload, &shared, "new")?;

        let time_horizon = raw.time_horizon.unwrap_or(20);
        if time_horizon == 0 {
            return Err(LifecycleError::InvalidScenario("time_horizon must be positive".to_string()));
        }

        let mut grid = GridIntensityTable::new();
        for (country, intensity) in raw.grid_intensities.unwrap_or_default() {
            grid.insert(&country, intensity);
        }

        let scenario = Scenario::new(
            time_horizon,
            raw.country.as_deref().unwrap_or(GERMANY),
            raw.utilization.unwrap_or(40.),
        )
        .with_workload(workload)
        .with_opex_source(raw.opex_source.unwrap_or_default());

        Ok(Self {
            scenario,
            current_hardware,
            new_hardware,
            cpu_idle_percent: raw.cpu_idle_percent.unwrap_or(50.),
            grid,
            sweep: raw.sweep,
        })
    }

    /// Returns the comparator configured by this scenario.
    pub fn comparator(&self) -> Comparator {
        Comparator::new(
            EmissionsModel::new().with_cpu_idle_percent(self.cpu_idle_percent),
            self.grid.clone(),
        )
    }

    /// Runs the comparison for the given deployment parameters.
    ///
    /// Without new hardware the current hardware is evaluated alone.
    pub fn run_with(&self, comparator: &Comparator, scenario: &Scenario) -> Result<ComparisonResult, LifecycleError> {
        match &self.new_hardware {
            Some(new) => comparator.combine_systems(new, &self.current_hardware, scenario),
            None => comparator.compare_single(&self.current_hardware, scenario),
        }
    }

    /// Runs the comparison described by the file.
    pub fn run(&self) -> Result<ComparisonResult, LifecycleError> {
        self.run_with(&self.comparator(), &self.scenario)
    }
}
