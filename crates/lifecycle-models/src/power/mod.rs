//! Power consumption models.

pub mod cpu;
pub mod cpu_models;
pub mod host;
pub mod memory;
pub mod memory_models;
pub mod storage;
pub mod storage_models;
#[cfg(test)]
mod tests;
