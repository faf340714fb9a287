//! Presence-based storage power model.

use crate::power::storage::StoragePowerModel;

/// Average power draw of an SSD in W.
pub const SSD_POWER: f64 = 3.;
/// Average power draw of an HDD in W.
pub const HDD_POWER: f64 = 7.;

/// A power model where the storage tier draws a fixed power when any capacity is installed and nothing otherwise.
///
/// Average values are taken from
/// [SSD vs HDD power efficiency](https://www.ssstc.com/knowledge-detail/ssd-vs-hdd-power-efficiency/).
#[derive(Clone)]
pub struct PresenceStoragePowerModel {
    capacity: f64,
    power: f64,
}

impl PresenceStoragePowerModel {
    /// Creates the model.
    ///
    /// * `capacity` - Installed capacity in GB.
    /// * `power` - Power draw in W when `capacity` is positive.
    pub fn new(capacity: f64, power: f64) -> Self {
        Self { capacity, power }
    }

    /// Solid state drive tier with `capacity` GB.
    pub fn ssd(capacity: f64) -> Self {
        Self::new(capacity, SSD_POWER)
    }

    /// Hard disk drive tier with `capacity` GB.
    pub fn hdd(capacity: f64) -> Self {
        Self::new(capacity, HDD_POWER)
    }
}

impl StoragePowerModel for PresenceStoragePowerModel {
    fn get_power(&self, _utilization: f64) -> f64 {
        if self.capacity > 0. {
            self.power
        } else {
            0.
        }
    }
}
