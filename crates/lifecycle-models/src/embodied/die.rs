//! Embodied emissions of a processor die.

use crate::embodied::EmbodiedModel;

/// Emissions model of integrated circuit manufacturing based on die area.
///
/// See [Gupta U. et al. ACT: Designing sustainable computer systems with an architectural carbon
/// modeling tool (ISCA, 2022)](https://ugupta.com/files/Gupta_ISCA2022_ACT.pdf).
/// The packaging size is assumed to be equal to the die size.
#[derive(Clone, Debug, PartialEq)]
pub struct DieEmbodiedModel {
    /// Emissions of procuring raw materials, kg CO₂ per cm².
    pub materials_per_area: f64,
    /// Fab energy, kWh per cm².
    pub energy_per_area: f64,
    /// Carbon intensity of the fab energy, kg CO₂ per kWh.
    pub fab_carbon_intensity: f64,
    /// Emissions of gases used in the fab, kg CO₂ per cm².
    pub gases_per_area: f64,
    /// Fab yield, 0-1.
    pub fab_yield: f64,
}

impl DieEmbodiedModel {
    /// Creates the model with the ACT default parameters.
    pub fn new() -> Self {
        Self {
            materials_per_area: 0.5,
            energy_per_area: 2.15,
            fab_carbon_intensity: 0.365,
            gases_per_area: 0.3,
            fab_yield: 0.875,
        }
    }

    /// Returns the emissions per cm² of die area before accounting for fab yield.
    pub fn emissions_per_area(&self) -> f64 {
        self.fab_carbon_intensity * self.energy_per_area + self.gases_per_area + self.materials_per_area
    }
}

impl Default for DieEmbodiedModel {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbodiedModel for DieEmbodiedModel {
    fn get_emissions(&self, area: f64) -> f64 {
        (self.emissions_per_area() * area) / self.fab_yield
    }
}
