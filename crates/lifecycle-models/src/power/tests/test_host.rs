//! Tests for the composed host power model.

use approx::assert_abs_diff_eq;

use crate::power::cpu_models::linear::LinearCpuPowerModel;
use crate::power::host::{HostPowerModel, HostPowerModelBuilder, PowerBreakdown};
use crate::power::memory_models::capacity::CapacityMemoryPowerModel;
use crate::power::storage_models::presence::PresenceStoragePowerModel;

#[test]
fn test_empty_host() {
    let model = HostPowerModel::default();
    assert_eq!(model.get_power_breakdown(0.7), PowerBreakdown::default());
    assert_eq!(model.get_power(0.7), 0.);
}

#[test]
fn test_full_host() {
    let model = HostPowerModelBuilder::new()
        .cpu(Box::new(LinearCpuPowerModel::from_tdp(130., 0.5)))
        .memory(Box::new(CapacityMemoryPowerModel::new(512.)))
        .ssd(Box::new(PresenceStoragePowerModel::ssd(3200.)))
        .hdd(Box::new(PresenceStoragePowerModel::hdd(0.)))
        .build();

    let breakdown = model.get_power_breakdown(0.4);
    assert_abs_diff_eq!(breakdown.cpu, 91., epsilon = 1e-9);
    assert_abs_diff_eq!(breakdown.memory, 51.8, epsilon = 1e-9);
    assert_eq!(breakdown.ssd, 3.);
    assert_eq!(breakdown.hdd, 0.);
    assert_abs_diff_eq!(breakdown.total(), 145.8, epsilon = 1e-9);
    assert_abs_diff_eq!(model.get_power(0.4), breakdown.total());
}

#[test]
fn test_cloned_host_is_independent() {
    let model = HostPowerModelBuilder::new()
        .cpu(Box::new(LinearCpuPowerModel::new(10., 20.)))
        .build();
    let copy = model.clone();
    assert_eq!(model.get_power(0.5), copy.get_power(0.5));
}
