//! Reference data of server CPUs and benchmark workloads.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::LifecycleError;
use crate::hardware::HardwareConfig;

/// Benchmark workload used to compare the performance of two CPUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Workload {
    /// SPECint rate: throughput of many concurrent copies.
    #[serde(rename = "SPECrate")]
    SpecRate,
    /// SPECint speed: single-copy execution time.
    #[serde(rename = "SPECspeed")]
    SpecSpeed,
    /// Sorted tuples per second.
    Sorting,
    /// TPC-H query runs per hour.
    #[serde(rename = "TPC-H")]
    TpcH,
}

impl Workload {
    /// All workloads in selection order.
    pub const ALL: [Workload; 4] = [Workload::SpecRate, Workload::SpecSpeed, Workload::Sorting, Workload::TpcH];
}

impl Display for Workload {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Workload::SpecRate => "SPECrate",
            Workload::SpecSpeed => "SPECspeed",
            Workload::Sorting => "Sorting",
            Workload::TpcH => "TPC-H",
        };
        f.write_str(name)
    }
}

/// CPU vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CpuMake {
    /// Intel.
    Intel,
    /// AMD.
    #[serde(rename = "AMD")]
    Amd,
}

/// Catalog record of a server CPU.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CpuEntry {
    /// Model name, unique within the catalog.
    pub name: &'static str,
    /// Vendor.
    pub make: CpuMake,
    /// Year of release.
    pub launch_year: u32,
    /// Number of cores.
    pub core_count: u32,
    /// Number of hardware threads.
    pub thread_count: u32,
    /// Thermal design power in W.
    pub tdp: f64,
    /// Die size in mm².
    pub die_size: f64,
    /// SPECint rate score.
    pub specint_rate: Option<f64>,
    /// SPECint speed score.
    pub specint: Option<f64>,
    /// Sorting throughput, tuples per second.
    pub sorted_tuples_per_s: Option<f64>,
    /// TPC-H runs per hour.
    pub tpch_runs_per_h: Option<f64>,
}

impl CpuEntry {
    /// Returns the benchmark score of the CPU for `workload`, if it was measured.
    pub fn performance(&self, workload: Workload) -> Option<f64> {
        match workload {
            Workload::SpecRate => self.specint_rate,
            Workload::SpecSpeed => self.specint,
            Workload::Sorting => self.sorted_tuples_per_s,
            Workload::TpcH => self.tpch_runs_per_h,
        }
    }

    /// Builds the hardware configuration of a server with this CPU.
    ///
    /// The die size is converted from mm² to cm². Fails if the workload was never measured on this CPU.
    pub fn hardware_config(&self, workload: Workload, shared: &SharedHardware) -> Result<HardwareConfig, LifecycleError> {
        let performance = self.performance(workload).ok_or_else(|| LifecycleError::WorkloadUnavailable {
            cpu: self.name.to_string(),
            workload,
        })?;
        Ok(HardwareConfig::new(
            self.die_size / 100.,
            Some(performance),
            shared.lifetime_years,
            shared.dram_capacity_gb,
            shared.ssd_capacity_gb,
            shared.hdd_capacity_gb,
            self.tdp,
        ))
    }
}

/// Memory and storage equipment shared by the compared servers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SharedHardware {
    /// Intended service life in years.
    pub lifetime_years: u32,
    /// DRAM capacity in GB.
    pub dram_capacity_gb: f64,
    /// SSD capacity in GB.
    pub ssd_capacity_gb: f64,
    /// HDD capacity in GB.
    pub hdd_capacity_gb: f64,
}

impl Default for SharedHardware {
    /// 8 x 64 GB DRAM, 2 x 1600 GB SSD, no HDD.
    fn default() -> Self {
        Self {
            lifetime_years: 20,
            dram_capacity_gb: 8. * 64.,
            ssd_capacity_gb: 2. * 1600.,
            hdd_capacity_gb: 0.,
        }
    }
}

const fn intel(
    name: &'static str,
    launch_year: u32,
    cores: u32,
    threads: u32,
    tdp: f64,
    die_size: f64,
    scores: [f64; 4],
) -> CpuEntry {
    CpuEntry {
        name,
        make: CpuMake::Intel,
        launch_year,
        core_count: cores,
        thread_count: threads,
        tdp,
        die_size,
        specint_rate: Some(scores[0]),
        specint: Some(scores[1]),
        sorted_tuples_per_s: Some(scores[2]),
        tpch_runs_per_h: Some(scores[3]),
    }
}

// AMD parts were only measured with SPEC CPU
const fn amd(
    name: &'static str,
    launch_year: u32,
    cores: u32,
    threads: u32,
    tdp: f64,
    die_size: f64,
    specint_rate: f64,
    specint: f64,
) -> CpuEntry {
    CpuEntry {
        name,
        make: CpuMake::Amd,
        launch_year,
        core_count: cores,
        thread_count: threads,
        tdp,
        die_size,
        specint_rate: Some(specint_rate),
        specint: Some(specint),
        sorted_tuples_per_s: None,
        tpch_runs_per_h: None,
    }
}

/// Built-in CPU catalog.
pub static CPU_CATALOG: [CpuEntry; 12] = [
    intel("Intel Xeon E7-4880 v2", 2014, 15, 30, 130., 541., [61.111111111111, 6.02222222222222, 153846.153, 40.07]),
    intel("Intel Xeon E7-4850 v4", 2016, 32, 16, 115., 456., [109.25, 6.66666666666667, 157455.642777, 40.1731641924089]),
    intel("Intel Xeon Platinum 8180", 2017, 56, 28, 205., 628., [141., 9.324, 255325.124631, 88.63]),
    intel("Intel Xeon Platinum 8259CL", 2019, 48, 24, 165., 754., [140., 10.3, 328031.52382944, 89.4327282049957]),
    intel("Intel Xeon Platinum 8352Y", 2021, 32, 64, 205., 660., [215., 11.6777, 373634.831734, 117.173425457684]),
    intel("Intel Xeon Platinum 8480CL", 2023, 56, 112, 350., 4. * 477., [443.5, 14.725, 466539.876, 177.949663971718]),
    amd("AMD EPYC 7601", 2017, 32, 64, 180., 213., 151., 7.16),
    amd("AMD EPYC 7402P", 2019, 24, 48, 180., 74., 170., 8.65),
    amd("AMD EPYC 7302P", 2019, 16, 32, 155., 74., 118., 8.55),
    amd("AMD EPYC 7513", 2021, 32, 64, 200., 8. * 81., 252., 12.3),
    amd("AMD EPYC 7773X", 2021, 64, 128, 280., 8. * 81., 406., 12.3),
    amd("AMD EPYC 9554", 2022, 64, 128, 360., 8. * 72., 655., 14.9),
];

/// Looks up a CPU by its exact catalog name.
pub fn find_cpu(name: &str) -> Result<&'static CpuEntry, LifecycleError> {
    CPU_CATALOG
        .iter()
        .find(|cpu| cpu.name == name)
        .ok_or_else(|| LifecycleError::UnknownCpu(name.to_string()))
}

/// Returns workloads that can't be used to compare the two CPUs because one of them was never measured on them.
pub fn disabled_workloads(current: &CpuEntry, new: &CpuEntry) -> Vec<Workload> {
    Workload::ALL
        .into_iter()
        .filter(|w| current.performance(*w).is_none() || new.performance(*w).is_none())
        .collect()
}

/// Keeps `selected` if it is available for both CPUs, otherwise falls back to the first available workload.
pub fn resolve_workload(current: &CpuEntry, new: &CpuEntry, selected: Workload) -> Option<Workload> {
    let disabled = disabled_workloads(current, new);
    if !disabled.contains(&selected) {
        return Some(selected);
    }
    Workload::ALL.into_iter().find(|w| !disabled.contains(w))
}
