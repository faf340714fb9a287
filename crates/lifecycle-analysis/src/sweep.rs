//! Evaluation of a scenario over several countries and utilization levels.

use itertools::Itertools;
use log::info;
use serde::Serialize;

use crate::comparison::ComparisonResult;
use crate::error::LifecycleError;
use crate::scenario::{ScenarioConfig, SweepConfig};

/// Contains result of one sweep point.
#[derive(Serialize, Debug, Clone)]
pub struct SweepResult {
    /// Country of the run.
    pub country: String,
    /// CPU utilization of the run in percent.
    pub utilization: f64,
    /// Grid carbon intensity the run was computed with, g CO₂ per kWh.
    pub grid_intensity: f64,
    /// Comparison outcome.
    pub result: ComparisonResult,
}

/// Runs the scenario for every combination of the given countries and utilization levels.
///
/// Results are ordered by country first, in the order they are listed.
pub fn run_sweep(config: &ScenarioConfig, sweep: &SweepConfig) -> Result<Vec<SweepResult>, LifecycleError> {
    let comparator = config.comparator();
    let results = sweep
        .countries
        .iter()
        .cartesian_product(sweep.utilizations.iter())
        .map(|(country, utilization)| {
            let mut scenario = config.scenario.clone();
            scenario.country = country.clone();
            scenario.utilization = *utilization;
            let result = config.run_with(&comparator, &scenario)?;
            Ok(SweepResult {
                country: country.clone(),
                utilization: *utilization,
                grid_intensity: result.opex.grid_intensity,
                result,
            })
        })
        .collect::<Result<Vec<_>, LifecycleError>>()?;
    info!("Sweep finished: {} runs", results.len());
    Ok(results)
}

/// Runs the sweep configured in the scenario file, or a single run at the scenario settings
/// if the file has no sweep section.
pub fn run_configured_sweep(config: &ScenarioConfig) -> Result<Vec<SweepResult>, LifecycleError> {
    let sweep = config.sweep.clone().unwrap_or_else(|| SweepConfig {
        countries: vec![config.scenario.country.clone()],
        utilizations: vec![config.scenario.utilization],
    });
    run_sweep(config, &sweep)
}
