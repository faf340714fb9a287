#![allow(dead_code)]

use lifecycle_analysis::HardwareConfig;

pub fn old_server() -> HardwareConfig {
    HardwareConfig::new(5.41, Some(1.), 20, 512., 3200., 0., 130.)
}

pub fn new_server() -> HardwareConfig {
    HardwareConfig::new(19.08, Some(3.55), 20, 512., 3200., 0., 350.)
}

pub const DIE_FACTOR: f64 = (0.365 * 2.15 + 0.3 + 0.5) / 0.875;
