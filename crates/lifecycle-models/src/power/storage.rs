//! Storage device power model trait.

use dyn_clone::{clone_trait_object, DynClone};

/// A model for estimating the power consumption of a storage device (SSD or HDD) based on its utilization.
pub trait StoragePowerModel: DynClone {
    /// Returns storage device power consumption in W.
    ///
    /// I/O utilization should be passed as a float in 0.0-1.0 range.
    fn get_power(&self, utilization: f64) -> f64;
}

clone_trait_object!(StoragePowerModel);
