//! Grid carbon intensity of deployment countries.

use std::collections::BTreeMap;

use log::warn;

use crate::error::LifecycleError;

/// Key of Sweden.
pub const SWEDEN: &str = "sweden";
/// Key of Germany, the default deployment country.
pub const GERMANY: &str = "germany";
/// Key of Poland.
pub const POLAND: &str = "poland";

/// Grid carbon intensity in g CO₂ per kWh keyed by lowercase country name.
///
/// Built-in values are 2023 averages reported by [Electricity Maps](https://app.electricitymaps.com).
#[derive(Debug, Clone, PartialEq)]
pub struct GridIntensityTable {
    intensities: BTreeMap<String, f64>,
}

impl GridIntensityTable {
    /// Creates an empty table.
    pub fn empty() -> Self {
        Self {
            intensities: BTreeMap::new(),
        }
    }

    /// Creates the table with built-in values.
    pub fn new() -> Self {
        Self::empty()
            .with_intensity(SWEDEN, 25.)
            .with_intensity(GERMANY, 344.)
            .with_intensity(POLAND, 652.)
    }

    /// Adds or replaces the intensity of `country`.
    pub fn with_intensity(mut self, country: &str, intensity: f64) -> Self {
        self.insert(country, intensity);
        self
    }

    /// Adds or replaces the intensity of `country` in place.
    pub fn insert(&mut self, country: &str, intensity: f64) {
        self.intensities.insert(country.to_lowercase(), intensity);
    }

    /// Returns the intensity of `country`, or an error if it is not in the table.
    pub fn try_intensity(&self, country: &str) -> Result<f64, LifecycleError> {
        self.intensities
            .get(&country.to_lowercase())
            .copied()
            .ok_or_else(|| LifecycleError::UnknownCountry(country.to_string()))
    }

    /// Returns the intensity of `country`.
    ///
    /// Unknown countries are treated as having a zero-carbon grid, which makes all operational
    /// emissions vanish. A warning is logged in this case.
    pub fn intensity(&self, country: &str) -> f64 {
        match self.try_intensity(country) {
            Ok(intensity) => intensity,
            Err(_) => {
                warn!("No grid carbon intensity for country '{}', assuming 0 g/kWh", country);
                0.
            }
        }
    }

    /// Checks whether `country` is in the table.
    pub fn contains(&self, country: &str) -> bool {
        self.intensities.contains_key(&country.to_lowercase())
    }

    /// Returns known countries in alphabetical order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.intensities.keys().map(|k| k.as_str())
    }
}

impl Default for GridIntensityTable {
    fn default() -> Self {
        Self::new()
    }
}
