#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod embodied;
pub mod power;
