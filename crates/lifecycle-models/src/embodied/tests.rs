use approx::assert_abs_diff_eq;

use crate::embodied::capacity::CapacityEmbodiedModel;
use crate::embodied::die::DieEmbodiedModel;
use crate::embodied::EmbodiedModel;

#[test]
fn test_die_model() {
    let model = DieEmbodiedModel::new();
    assert_abs_diff_eq!(model.emissions_per_area(), 1.58475, epsilon = 1e-12);
    // (0.365 * 2.15 + 0.3 + 0.5) * 5.41 / 0.875
    assert_abs_diff_eq!(model.get_emissions(5.41), 9.798282857142857, epsilon = 1e-9);
    assert_eq!(model.get_emissions(0.), 0.);
}

#[test]
fn test_die_model_custom_yield() {
    let perfect = DieEmbodiedModel {
        fab_yield: 1.,
        ..DieEmbodiedModel::default()
    };
    assert_abs_diff_eq!(perfect.get_emissions(10.), 15.8475, epsilon = 1e-9);
    assert!(DieEmbodiedModel::new().get_emissions(10.) > perfect.get_emissions(10.));
}

#[test]
fn test_capacity_models() {
    assert_abs_diff_eq!(CapacityEmbodiedModel::dram().get_emissions(512.), 153.6, epsilon = 1e-9);
    assert_abs_diff_eq!(CapacityEmbodiedModel::ssd().get_emissions(3200.), 48., epsilon = 1e-9);
    assert_abs_diff_eq!(CapacityEmbodiedModel::hdd().get_emissions(1000.), 60., epsilon = 1e-9);
    assert_eq!(CapacityEmbodiedModel::new(1.).get_emissions(0.), 0.);
}

#[test]
fn test_boxed_models() {
    let models: Vec<Box<dyn EmbodiedModel>> = vec![
        Box::new(DieEmbodiedModel::new()),
        Box::new(CapacityEmbodiedModel::dram()),
    ];
    let cloned = models.clone();
    for (a, b) in models.iter().zip(cloned.iter()) {
        assert_eq!(a.get_emissions(2.), b.get_emissions(2.));
    }
}
