//! A collection of memory power models.

pub mod capacity;
