//! Accumulation of emissions over time.

use serde::Serialize;

/// Cumulative emissions in kg CO₂, one entry per year index starting at time zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AccumulatedSeries(Vec<f64>);

impl AccumulatedSeries {
    /// Wraps yearly accumulated values.
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Returns the yearly values.
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Returns the number of years.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether the series has no years.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value at `year`.
    pub fn get(&self, year: usize) -> Option<f64> {
        self.0.get(year).copied()
    }

    /// Returns the value at year 0.
    pub fn first(&self) -> Option<f64> {
        self.0.first().copied()
    }

    /// Returns the value of the last year.
    pub fn last(&self) -> Option<f64> {
        self.0.last().copied()
    }

    /// Returns the series with every entry multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0.iter().map(|v| v * factor).collect())
    }

    /// Returns the series with `amount` added to every entry.
    pub fn offset(&self, amount: f64) -> Self {
        Self(self.0.iter().map(|v| v + amount).collect())
    }

    /// Checks that no year has less accumulated than the previous one.
    pub fn is_non_decreasing(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }

    /// Iterates over the yearly values.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

impl From<AccumulatedSeries> for Vec<f64> {
    fn from(series: AccumulatedSeries) -> Self {
        series.0
    }
}

/// Projects operational emissions linearly over `time_horizon` years.
///
/// Entry `i` equals `i * opex_per_year`, so the first entry is always zero.
/// A zero horizon yields an empty series.
pub fn project_accumulated_opex(opex_per_year: f64, time_horizon: usize) -> AccumulatedSeries {
    AccumulatedSeries((0..time_horizon).map(|i| i as f64 * opex_per_year).collect())
}

/// Builds the accumulated curve of a replacement system from its raw opex projection.
///
/// Opex is scaled by `performance_factor` and the embodied emissions are added to every entry,
/// so the curve starts at `capex_total`.
pub fn combine_series(raw_opex: &AccumulatedSeries, performance_factor: f64, capex_total: f64) -> AccumulatedSeries {
    raw_opex.scaled(performance_factor).offset(capex_total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection() {
        let series = project_accumulated_opex(12.5, 4);
        assert_eq!(series.values(), &[0., 12.5, 25., 37.5]);
        assert_eq!(series.first(), Some(0.));
        assert_eq!(series.last(), Some(37.5));
        assert!(series.is_non_decreasing());
    }

    #[test]
    fn test_empty_horizon() {
        let series = project_accumulated_opex(100., 0);
        assert!(series.is_empty());
        assert_eq!(series.first(), None);
        assert!(series.is_non_decreasing());
    }

    #[test]
    fn test_combine_series() {
        let raw = project_accumulated_opex(10., 3);
        let combined = combine_series(&raw, 0.5, 100.);
        assert_eq!(combined.values(), &[100., 105., 110.]);
        assert_eq!(Vec::from(combined).len(), 3);
    }

    #[test]
    fn test_serialized_as_array() {
        let json = serde_json::to_string(&project_accumulated_opex(1., 3)).unwrap();
        assert_eq!(json, "[0.0,1.0,2.0]");
    }
}
