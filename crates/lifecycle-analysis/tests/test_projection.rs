mod common;

use approx::assert_abs_diff_eq;

use lifecycle_analysis::projection::combine_series;
use lifecycle_analysis::{combine_systems, project_accumulated_opex};

use common::{new_server, old_server};

#[test]
fn test_linearity() {
    for (rate, horizon) in [(0., 5), (438.1558272, 20), (1e-3, 50), (12345.678, 3)] {
        let series = project_accumulated_opex(rate, horizon);
        assert_eq!(series.len(), horizon);
        for i in 0..horizon {
            assert_eq!(series.get(i), Some(i as f64 * rate));
        }
    }
}

#[test]
fn test_new_curve_starts_at_capex() {
    let raw = project_accumulated_opex(900., 20);
    let combined = combine_series(&raw, 1. / 3.55, 236.);
    assert_eq!(combined.first(), Some(236.));
    assert_abs_diff_eq!(combined.get(10).unwrap(), 236. + 9000. / 3.55, epsilon = 1e-9);
}

#[test]
fn test_monotonicity() {
    let result = combine_systems(&new_server(), &old_server(), 20, "poland", 75.).unwrap();
    assert!(result.old_system.is_non_decreasing());
    assert!(result.new_system.is_non_decreasing());
}
