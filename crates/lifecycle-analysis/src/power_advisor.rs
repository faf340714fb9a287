//! Operational emissions taken from HPE Power Advisor estimates.
//!
//! The table covers one pair of reference servers (old and new) for a few countries and
//! utilization levels. The advisor reports emissions for 4 years of operation.

use crate::error::LifecycleError;
use crate::grid::{GERMANY, POLAND, SWEDEN};
use crate::hardware::SystemRole;

const YEARS_ESTIMATED: f64 = 4.;

/// Utilization levels (percent) covered by the table.
pub const UTILIZATION_LEVELS: [u32; 3] = [30, 60, 90];

// (old, new) emissions in kg CO₂ for 4 years
fn four_year_emissions(country: &str, utilization: u32) -> Option<(f64, f64)> {
    match (country, utilization) {
        (GERMANY | POLAND, 30) => Some((2312., 2047.)),
        (GERMANY | POLAND, 60) => Some((3276., 3246.)),
        (GERMANY | POLAND, 90) => Some((4249., 4459.)),
        (SWEDEN, 30) => Some((158., 149.)),
        (SWEDEN, 60) => Some((227., 236.)),
        (SWEDEN, 90) => Some((296., 324.)),
        _ => None,
    }
}

/// Returns operational emissions in kg CO₂ per year of the reference system playing `role`.
///
/// Fails if the country or the utilization level is not covered by the table.
pub fn opex_per_year(country: &str, utilization: f64, role: SystemRole) -> Result<f64, LifecycleError> {
    let missing = || LifecycleError::MissingPowerAdvisorEntry {
        country: country.to_string(),
        utilization,
        role,
    };
    if utilization.fract() != 0. || utilization < 0. {
        return Err(missing());
    }
    let (old, new) = four_year_emissions(&country.to_lowercase(), utilization as u32).ok_or_else(missing)?;
    let emissions = match role {
        SystemRole::Old => old,
        SystemRole::New => new,
    };
    Ok(emissions / YEARS_ESTIMATED)
}
