//! Embodied (manufacturing) emissions models.

use dyn_clone::{clone_trait_object, DynClone};

pub mod capacity;
pub mod die;
#[cfg(test)]
mod tests;

/// A model for estimating the one-time emissions caused by manufacturing a component.
pub trait EmbodiedModel: DynClone {
    /// Returns the embodied emissions in kg CO₂.
    ///
    /// * `amount` - Size of the component in the model units (cm² of die area, GB of capacity, etc).
    fn get_emissions(&self, amount: f64) -> f64;
}

clone_trait_object!(EmbodiedModel);
