//! Per-component breakdowns of emissions and power.

use std::fmt::{Display, Formatter};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Hardware components covered by the emissions model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Processor.
    Cpu,
    /// DRAM.
    Ram,
    /// Solid state storage.
    Ssd,
    /// Hard disk storage.
    Hdd,
}

impl Component {
    /// All components in display order.
    pub const ALL: [Component; 4] = [Component::Cpu, Component::Ram, Component::Ssd, Component::Hdd];
}

impl Display for Component {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Component::Cpu => "CPU",
            Component::Ram => "RAM",
            Component::Ssd => "SSD",
            Component::Hdd => "HDD",
        };
        f.write_str(name)
    }
}

/// Non-negative values keyed by component.
///
/// The total is always derived from the components, so it can't get out of sync with them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComponentBreakdown {
    /// Processor value.
    pub cpu: f64,
    /// DRAM value.
    pub ram: f64,
    /// Solid state storage value.
    pub ssd: f64,
    /// Hard disk storage value.
    pub hdd: f64,
}

impl ComponentBreakdown {
    /// Creates a breakdown from per-component values.
    pub fn new(cpu: f64, ram: f64, ssd: f64, hdd: f64) -> Self {
        Self { cpu, ram, ssd, hdd }
    }

    /// Returns the value of `component`.
    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::Cpu => self.cpu,
            Component::Ram => self.ram,
            Component::Ssd => self.ssd,
            Component::Hdd => self.hdd,
        }
    }

    /// Returns the sum over all components.
    pub fn total(&self) -> f64 {
        self.cpu + self.ram + self.ssd + self.hdd
    }

    /// Returns the share of `component` in the total, or `None` if the total is zero.
    pub fn share(&self, component: Component) -> Option<f64> {
        let total = self.total();
        if total == 0. {
            None
        } else {
            Some(self.get(component) / total)
        }
    }

    /// Returns a breakdown with every component multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.cpu * factor, self.ram * factor, self.ssd * factor, self.hdd * factor)
    }

    /// Iterates over components in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Component, f64)> + '_ {
        Component::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl Serialize for ComponentBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ComponentBreakdown", 5)?;
        state.serialize_field("CPU", &self.cpu)?;
        state.serialize_field("RAM", &self.ram)?;
        state.serialize_field("SSD", &self.ssd)?;
        state.serialize_field("HDD", &self.hdd)?;
        state.serialize_field("TOTAL", &self.total())?;
        state.end()
    }
}

/// Operational emissions of a system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OpexBreakdown {
    /// Instantaneous power draw by component, kW.
    pub power: ComponentBreakdown,
    /// Energy consumed in a year, kWh.
    pub annual_energy: f64,
    /// Grid carbon intensity used for the estimate, g CO₂ per kWh.
    pub grid_intensity: f64,
    /// Operational emissions, kg CO₂ per year.
    pub opex_per_year: f64,
}

impl OpexBreakdown {
    /// Returns the operational emissions per year attributed to each component, kg CO₂.
    pub fn emissions_per_year(&self) -> ComponentBreakdown {
        let total_power = self.power.total();
        if total_power == 0. {
            return ComponentBreakdown::default();
        }
        self.power.scaled(self.opex_per_year / total_power)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown() {
        let breakdown = ComponentBreakdown::new(10., 20., 5., 15.);
        assert_eq!(breakdown.total(), 50.);
        assert_eq!(breakdown.share(Component::Ram), Some(0.4));
        assert_eq!(ComponentBreakdown::default().share(Component::Cpu), None);
        assert_eq!(breakdown.scaled(2.).total(), 100.);
        assert_eq!(breakdown.iter().map(|(c, _)| c.to_string()).collect::<Vec<_>>(), ["CPU", "RAM", "SSD", "HDD"]);
    }

    #[test]
    fn test_serialized_with_total() {
        let json = serde_json::to_string(&ComponentBreakdown::new(1., 2., 0., 0.5)).unwrap();
        assert_eq!(json, r#"{"CPU":1.0,"RAM":2.0,"SSD":0.0,"HDD":0.5,"TOTAL":3.5}"#);
    }
}
