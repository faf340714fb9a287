//! Tests for memory power models.

use approx::assert_abs_diff_eq;

use crate::power::host::HostPowerModelBuilder;
use crate::power::memory_models::capacity::{CapacityMemoryPowerModel, DRAM_WATTS_PER_256GB};

#[test]
fn test_capacity_model() {
    let model = HostPowerModelBuilder::new()
        .memory(Box::new(CapacityMemoryPowerModel::new(512.)))
        .build();

    assert_abs_diff_eq!(model.get_power(0.), 2. * DRAM_WATTS_PER_256GB);
    assert_abs_diff_eq!(model.get_power(0.9), 51.8, epsilon = 1e-9);

    let empty = CapacityMemoryPowerModel::new(0.);
    assert_eq!(
        HostPowerModelBuilder::new().memory(Box::new(empty)).build().get_power(0.5),
        0.
    );
}

#[test]
fn test_capacity_model_custom_reference() {
    let model = HostPowerModelBuilder::new()
        .memory(Box::new(CapacityMemoryPowerModel::custom_model(240., 8., 3.)))
        .build();
    assert_abs_diff_eq!(model.get_power(0.5), 90., epsilon = 1e-9);
}
