//! Comparison of the lifecycle emissions of two servers.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::catalog::Workload;
use crate::components::{ComponentBreakdown, OpexBreakdown};
use crate::emissions::EmissionsModel;
use crate::error::LifecycleError;
use crate::grid::{GridIntensityTable, GERMANY};
use crate::hardware::{HardwareConfig, SystemRole};
use crate::intersection::{find_break_even, find_level_crossing, Point};
use crate::power_advisor;
use crate::projection::{combine_series, project_accumulated_opex, AccumulatedSeries};

/// Where the operational emissions per year come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpexSource {
    /// Computed from the component power models and the grid intensity.
    #[default]
    Model,
    /// Looked up in the HPE Power Advisor table.
    /// The power breakdown is still computed from the component models.
    PowerAdvisor,
}

/// Deployment parameters shared by both compared systems.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    /// Number of yearly samples in the projection.
    pub time_horizon: usize,
    /// Country used to look up the grid carbon intensity.
    pub country: String,
    /// CPU utilization in percent.
    pub utilization: f64,
    /// Workload the performance indicators were taken from.
    pub workload: Workload,
    /// Where operational emissions per year come from.
    pub opex_source: OpexSource,
}

impl Scenario {
    /// Creates a scenario for the SPECrate workload with modeled operational emissions.
    pub fn new(time_horizon: usize, country: &str, utilization: f64) -> Self {
        Self {
            time_horizon,
            country: country.to_string(),
            utilization,
            workload: Workload::SpecRate,
            opex_source: OpexSource::Model,
        }
    }

    /// Sets the workload.
    pub fn with_workload(mut self, workload: Workload) -> Self {
        self.workload = workload;
        self
    }

    /// Sets the source of operational emissions.
    pub fn with_opex_source(mut self, opex_source: OpexSource) -> Self {
        self.opex_source = opex_source;
        self
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new(20, GERMANY, 40.)
    }
}

/// Outcome of a comparison, consumed by presentation layers.
///
/// Elements of `relative_savings` and `ratio` are `None` where their denominator is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// Accumulated emissions of the new system, including its embodied emissions.
    pub new_system: AccumulatedSeries,
    /// Accumulated operational emissions of the old system.
    pub old_system: AccumulatedSeries,
    /// `new - old` for every year.
    pub abs_savings: Vec<f64>,
    /// `1 - old / new` for every year.
    pub relative_savings: Vec<Option<f64>>,
    /// `new / old` for every year.
    pub ratio: Vec<Option<f64>>,
    /// Old performance divided by new performance.
    pub performance_factor: f64,
    /// Embodied emissions of the system behind the new curve.
    pub capex: ComponentBreakdown,
    /// Operational emissions of the system behind the new curve.
    pub opex: OpexBreakdown,
    /// Break-even point, if the curves cross within the horizon.
    pub break_even: Option<Point>,
}

impl ComparisonResult {
    /// Embodied emissions that the new curve starts from.
    pub fn embodied_emissions(&self) -> f64 {
        self.capex.total()
    }

    /// Returns the number of years worth showing on a chart: three years past the first year
    /// where the new system has accumulated less than the old one, capped by `max_years`.
    /// If that never happens, the whole horizon up to `max_years` is shown.
    pub fn display_horizon(&self, max_years: usize) -> usize {
        let limit = max_years.min(self.old_system.len());
        self.relative_savings
            .iter()
            .position(|s| matches!(s, Some(v) if *v < 0.))
            .map_or(limit, |year| (year + 3).min(limit))
    }
}

fn divide(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0. {
        None
    } else {
        Some(numerator / denominator)
    }
}

fn derive_savings(new: &AccumulatedSeries, old: &AccumulatedSeries) -> (Vec<f64>, Vec<Option<f64>>, Vec<Option<f64>>) {
    let pairs = || new.iter().zip(old.iter());
    let abs_savings = pairs().map(|(n, o)| n - o).collect();
    let relative_savings = pairs().map(|(n, o)| divide(o, n).map(|r| 1. - r)).collect();
    let ratio = pairs().map(|(n, o)| divide(n, o)).collect();
    (abs_savings, relative_savings, ratio)
}

/// Returns `old / new` performance, the share of machine time the new system needs for the same work.
pub fn performance_factor(old: &HardwareConfig, new: &HardwareConfig) -> Result<f64, LifecycleError> {
    let old_performance = old.performance(SystemRole::Old)?;
    let new_performance = new.performance(SystemRole::New)?;
    Ok(old_performance / new_performance)
}

/// Runs comparisons with a fixed emissions model and grid intensity table.
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    emissions: EmissionsModel,
    grid: GridIntensityTable,
}

impl Comparator {
    /// Creates a comparator.
    pub fn new(emissions: EmissionsModel, grid: GridIntensityTable) -> Self {
        Self { emissions, grid }
    }

    /// Returns the emissions model.
    pub fn emissions_model(&self) -> &EmissionsModel {
        &self.emissions
    }

    /// Returns the grid intensity table.
    pub fn grid(&self) -> &GridIntensityTable {
        &self.grid
    }

    fn opex(&self, config: &HardwareConfig, role: SystemRole, scenario: &Scenario) -> Result<OpexBreakdown, LifecycleError> {
        let intensity = self.grid.intensity(&scenario.country);
        let mut opex = self.emissions.opex_emissions(config, scenario.utilization, intensity);
        if scenario.opex_source == OpexSource::PowerAdvisor {
            opex.opex_per_year = power_advisor::opex_per_year(&scenario.country, scenario.utilization, role)?;
        }
        Ok(opex)
    }

    /// Compares replacing `old` with `new`.
    ///
    /// Fails before computing anything if either performance indicator is unusable.
    pub fn combine_systems(
        &self,
        new: &HardwareConfig,
        old: &HardwareConfig,
        scenario: &Scenario,
    ) -> Result<ComparisonResult, LifecycleError> {
        let performance_factor = performance_factor(old, new)?;

        let old_opex = self.opex(old, SystemRole::Old, scenario)?;
        let new_opex = self.opex(new, SystemRole::New, scenario)?;
        let new_capex = self.emissions.capex_emissions(new);

        let old_system = project_accumulated_opex(old_opex.opex_per_year, scenario.time_horizon);
        let new_raw = project_accumulated_opex(new_opex.opex_per_year, scenario.time_horizon);
        let new_system = combine_series(&new_raw, performance_factor, new_capex.total());
        let break_even = find_break_even(&old_system, &new_system);
        let (abs_savings, relative_savings, ratio) = derive_savings(&new_system, &old_system);

        info!(
            "Compared systems in '{}' at {}% utilization: capex {:.1} kg, opex {:.1} vs {:.1} kg/year, factor {:.3}, break-even {:?}",
            scenario.country,
            scenario.utilization,
            new_capex.total(),
            old_opex.opex_per_year,
            new_opex.opex_per_year,
            performance_factor,
            break_even
        );

        Ok(ComparisonResult {
            new_system,
            old_system,
            abs_savings,
            relative_savings,
            ratio,
            performance_factor,
            capex: new_capex,
            opex: new_opex,
            break_even,
        })
    }

    /// Evaluates keeping the current hardware.
    ///
    /// The new curve is the current one shifted by its embodied emissions, and the break-even point
    /// is where the accumulated operational emissions reach the embodied emissions.
    pub fn compare_single(&self, config: &HardwareConfig, scenario: &Scenario) -> Result<ComparisonResult, LifecycleError> {
        let opex = self.opex(config, SystemRole::Old, scenario)?;
        let capex = self.emissions.capex_emissions(config);

        let old_system = project_accumulated_opex(opex.opex_per_year, scenario.time_horizon);
        let new_system = combine_series(&old_system, 1., capex.total());
        let break_even = find_level_crossing(&old_system, capex.total());
        let (abs_savings, relative_savings, ratio) = derive_savings(&new_system, &old_system);
        debug!("Single system: capex {:.1} kg, break-even {:?}", capex.total(), break_even);

        Ok(ComparisonResult {
            new_system,
            old_system,
            abs_savings,
            relative_savings,
            ratio,
            performance_factor: 1.,
            capex,
            opex,
            break_even,
        })
    }
}

/// Compares replacing `old` with `new` using the default emissions model and grid intensities.
pub fn combine_systems(
    new: &HardwareConfig,
    old: &HardwareConfig,
    time_horizon: usize,
    country: &str,
    utilization: f64,
) -> Result<ComparisonResult, LifecycleError> {
    Comparator::default().combine_systems(new, old, &Scenario::new(time_horizon, country, utilization))
}
