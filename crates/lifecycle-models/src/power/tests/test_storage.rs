//! Tests for storage power models.

use crate::power::host::HostPowerModelBuilder;
use crate::power::storage_models::presence::{PresenceStoragePowerModel, HDD_POWER, SSD_POWER};

#[test]
fn test_presence_model() {
    let model = HostPowerModelBuilder::new()
        .ssd(Box::new(PresenceStoragePowerModel::ssd(3200.)))
        .hdd(Box::new(PresenceStoragePowerModel::hdd(8000.)))
        .build();

    let breakdown = model.get_power_breakdown(0.3);
    assert_eq!(breakdown.ssd, SSD_POWER);
    assert_eq!(breakdown.hdd, HDD_POWER);
    assert_eq!(model.get_power(0.3), 10.);
}

#[test]
fn test_presence_model_without_capacity() {
    let model = HostPowerModelBuilder::new()
        .ssd(Box::new(PresenceStoragePowerModel::ssd(0.)))
        .hdd(Box::new(PresenceStoragePowerModel::hdd(0.)))
        .build();
    assert_eq!(model.get_power(1.), 0.);

    // any positive capacity switches the tier on
    let tiny = PresenceStoragePowerModel::new(0.5, 2.);
    assert_eq!(HostPowerModelBuilder::new().ssd(Box::new(tiny)).build().get_power(0.), 2.);
}
