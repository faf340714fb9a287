//! Errors of lifecycle comparisons.

use thiserror::Error;

use crate::catalog::Workload;
use crate::hardware::SystemRole;

/// Errors that reject a comparison before it is computed.
///
/// Numeric degeneracies (no intersection, division by zero) are not errors
/// and are reported as `None` values in the results.
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// The performance indicator is absent for the selected workload.
    #[error("performance indicator of the {0} system is not available for the selected workload")]
    MissingPerformanceIndicator(SystemRole),

    /// The performance indicator can't be used as a divisor.
    #[error("performance indicator of the {role} system must be positive and finite, got {value}")]
    InvalidPerformanceIndicator {
        /// System the indicator belongs to.
        role: SystemRole,
        /// Rejected value.
        value: f64,
    },

    /// Strict grid intensity lookup failed.
    #[error("no grid carbon intensity for country '{0}'")]
    UnknownCountry(String),

    /// CPU name is not in the catalog.
    #[error("unknown CPU '{0}'")]
    UnknownCpu(String),

    /// Catalog CPU has no score for the workload.
    #[error("workload {workload} was never measured on CPU '{cpu}'")]
    WorkloadUnavailable {
        /// Catalog name of the CPU.
        cpu: String,
        /// Requested workload.
        workload: Workload,
    },

    /// Power Advisor table has no estimate for the setting.
    #[error("no power advisor entry for {role} system in '{country}' at {utilization}% utilization")]
    MissingPowerAdvisorEntry {
        /// Requested country.
        country: String,
        /// Requested utilization in percent.
        utilization: f64,
        /// Requested system.
        role: SystemRole,
    },

    /// Scenario file is inconsistent.
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),

    /// Scenario file can't be read.
    #[error("can't read file {path}: {source}")]
    Io {
        /// Path of the file.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Scenario file is not valid YAML or has unknown fields.
    #[error("can't parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
