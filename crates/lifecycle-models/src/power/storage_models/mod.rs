//! A collection of storage power models.

pub mod presence;
