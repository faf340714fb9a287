//! A collection of CPU power models.

pub mod linear;
