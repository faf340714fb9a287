#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod comparison;
pub mod components;
pub mod emissions;
pub mod error;
pub mod format;
pub mod grid;
pub mod hardware;
pub mod intersection;
pub mod power_advisor;
pub mod projection;
pub mod scenario;
pub mod sweep;

pub use comparison::{combine_systems, ComparisonResult, Comparator, Scenario};
pub use components::{Component, ComponentBreakdown, OpexBreakdown};
pub use emissions::{capex_emissions, opex_emissions, EmissionsModel};
pub use error::LifecycleError;
pub use hardware::{HardwareConfig, SystemRole};
pub use intersection::{find_break_even, segment_intersect, Point};
pub use projection::{project_accumulated_opex, AccumulatedSeries};
