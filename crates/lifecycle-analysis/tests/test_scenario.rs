mod common;

use approx::assert_abs_diff_eq;

use lifecycle_analysis::catalog::Workload;
use lifecycle_analysis::comparison::OpexSource;
use lifecycle_analysis::scenario::ScenarioConfig;
use lifecycle_analysis::sweep::{run_configured_sweep, run_sweep};
use lifecycle_analysis::{combine_systems, LifecycleError};

use common::{new_server, old_server};

fn name_wrapper(file_name: &str) -> String {
    format!("test-configs/{}", file_name)
}

#[test]
fn test_catalog_scenario() {
    let config = ScenarioConfig::from_file(&name_wrapper("catalog.yaml")).unwrap();
    assert_eq!(config.scenario.workload, Workload::SpecRate);
    assert_eq!(config.scenario.opex_source, OpexSource::Model);
    assert_abs_diff_eq!(config.current_hardware.packaging_size, 5.41, epsilon = 1e-12);
    let new = config.new_hardware.as_ref().unwrap();
    assert_abs_diff_eq!(new.packaging_size, 19.08, epsilon = 1e-12);
    assert_eq!(new.cpu_tdp_watts, 350.);

    let result = config.run().unwrap();
    assert_abs_diff_eq!(result.performance_factor, 61.111111111111 / 443.5, epsilon = 1e-12);
    assert!(result.break_even.is_some());
}

#[test]
fn test_explicit_scenario() {
    let config = ScenarioConfig::from_file(&name_wrapper("explicit.yaml")).unwrap();
    assert_eq!(config.current_hardware.lifetime_years, 20);
    assert_eq!(config.current_hardware.hdd_capacity_gb, 0.);
    assert_eq!(config.new_hardware.as_ref().unwrap().lifetime_years, 10);

    let expected = combine_systems(&new_server(), &old_server(), 20, "germany", 40.).unwrap();
    assert_eq!(config.run().unwrap(), expected);
}

#[test]
fn test_single_scenario() {
    let config = ScenarioConfig::from_file(&name_wrapper("single.yaml")).unwrap();
    assert!(config.new_hardware.is_none());
    assert_eq!(config.current_hardware.performance_indicator, Some(117.173425457684));
    assert_eq!(config.current_hardware.dram_capacity_gb, 256.);

    let result = config.run().unwrap();
    assert_eq!(result.new_system.len(), 15);
    assert_abs_diff_eq!(result.capex.hdd, 240., epsilon = 1e-9);
    assert_abs_diff_eq!(result.opex.power.total(), 0.1969, epsilon = 1e-12);
    let break_even = result.break_even.unwrap();
    assert_abs_diff_eq!(break_even.y, result.capex.total(), epsilon = 1e-9);
    assert_abs_diff_eq!(break_even.x, result.capex.total() / result.opex.opex_per_year, epsilon = 1e-9);
}

#[test]
fn test_sweep() {
    let config = ScenarioConfig::from_file(&name_wrapper("sweep.yaml")).unwrap();
    let results = run_configured_sweep(&config).unwrap();
    assert_eq!(results.len(), 9);
    assert_eq!(results[0].country, "sweden");
    assert_eq!(results[0].utilization, 30.);
    assert_eq!(results[2].utilization, 90.);
    assert_eq!(results[3].country, "france");
    assert_eq!(results[3].grid_intensity, 56.);
    assert_eq!(results[8].grid_intensity, 652.);

    // a dirtier grid pays off sooner
    let sweden = results[1].result.break_even.map(|p| p.x).unwrap_or(f64::INFINITY);
    let poland = results[7].result.break_even.map(|p| p.x).unwrap_or(f64::INFINITY);
    assert!(poland < sweden);
}

#[test]
fn test_sweep_defaults_to_scenario() {
    let config = ScenarioConfig::from_file(&name_wrapper("catalog.yaml")).unwrap();
    let results = run_configured_sweep(&config).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].country, "germany");
    assert_eq!(results[0].result, config.run().unwrap());

    let sweep = lifecycle_analysis::scenario::SweepConfig {
        countries: vec![],
        utilizations: vec![40.],
    };
    assert!(run_sweep(&config, &sweep).unwrap().is_empty());
}

#[test]
fn test_sweep_reports_intensity_of_run() {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = ScenarioConfig::from_file(&name_wrapper("catalog.yaml")).unwrap();
    let sweep = lifecycle_analysis::scenario::SweepConfig {
        countries: vec!["Germany".to_string(), "atlantis".to_string()],
        utilizations: vec![40.],
    };
    let results = run_sweep(&config, &sweep).unwrap();
    assert_eq!(results[0].grid_intensity, 344.);
    assert_eq!(results[1].grid_intensity, 0.);
    for point in &results {
        assert_eq!(point.grid_intensity, point.result.opex.grid_intensity);
    }
}

#[test]
fn test_invalid_scenarios() {
    let result = ScenarioConfig::from_file(&name_wrapper("invalid.yaml"));
    assert!(matches!(result, Err(LifecycleError::InvalidScenario(_))));

    let result = ScenarioConfig::from_file(&name_wrapper("missing.yaml"));
    assert!(matches!(result, Err(LifecycleError::Io { .. })));

    let result = ScenarioConfig::from_yaml("country: germany\n");
    assert!(matches!(result, Err(LifecycleError::InvalidScenario(_))));

    let result = ScenarioConfig::from_yaml("time_horizon: 0\ncurrent_cpu: AMD EPYC 7513\n");
    assert!(matches!(result, Err(LifecycleError::InvalidScenario(_))));

    let result = ScenarioConfig::from_yaml("current_cpu: AMD EPYC 7513\ncolour: blue\n");
    assert!(matches!(result, Err(LifecycleError::Yaml(_))));

    // misspelled fields of nested sections are rejected instead of falling back to defaults
    let result = ScenarioConfig::from_yaml(
        "current_hardware:\n  packaging_size: 5.41\n  performance_indicator: 1\n  dram_capacity_gb: 512\n  ssd_capacity: 3200\n  cpu_tdp_watts: 130\n",
    );
    assert!(matches!(result, Err(LifecycleError::Yaml(_))));

    let result = ScenarioConfig::from_yaml("current_cpu: AMD EPYC 7513\nshared:\n  dram_gb: 1024\n");
    assert!(matches!(result, Err(LifecycleError::Yaml(_))));

    let result = ScenarioConfig::from_yaml(
        "current_cpu: AMD EPYC 7513\nsweep:\n  countries: [sweden]\n  utilizations: [30]\n  utilisation: 60\n",
    );
    assert!(matches!(result, Err(LifecycleError::Yaml(_))));

    let result = ScenarioConfig::from_yaml("current_cpu: Pentium II\n");
    assert!(matches!(result, Err(LifecycleError::UnknownCpu(_))));

    let result = ScenarioConfig::from_yaml("workload: Sorting\ncurrent_cpu: AMD EPYC 7513\n");
    assert!(matches!(result, Err(LifecycleError::WorkloadUnavailable { .. })));
}

#[test]
fn test_defaults() {
    let config = ScenarioConfig::from_yaml("current_cpu: AMD EPYC 7513\nnew_cpu: AMD EPYC 7773X\n").unwrap();
    assert_eq!(config.scenario.time_horizon, 20);
    assert_eq!(config.scenario.country, "germany");
    assert_eq!(config.scenario.utilization, 40.);
    assert_eq!(config.cpu_idle_percent, 50.);
    assert!(config.sweep.is_none());
}
