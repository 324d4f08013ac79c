//! Descents over the registered catalog fields.

use approx::assert_relative_eq;
use slope_core::{Point, ScalarField};
use slope_fields::Registry;
use slope_solvers::descent::{self, Config, Status};

#[test]
fn bowl_from_unit_point_converges_near_origin() {
    let registry = Registry::new();
    let bowl = registry.get(2).expect("bowl is registered");

    let config = Config {
        start: Point::new(1.0, 1.0),
        learning_rate: 0.1,
        epsilon: 0.001,
        max_steps: 1000,
    };
    let trajectory = descent::descend(bowl, &config).expect("valid config");

    assert_eq!(trajectory.status(), Status::Converged);
    assert!(trajectory.len() < 1000);

    let end = trajectory.last();
    assert!(end.x.abs() < config.epsilon);
    assert!(end.y.abs() < config.epsilon);
}

#[test]
fn every_field_yields_a_consistent_trajectory() {
    let registry = Registry::new();
    let config = Config {
        learning_rate: 0.1,
        ..Config::starting_at(1.0, 2.0)
    };

    for field in &registry {
        let trajectory = descent::descend(field, &config).expect("valid config");

        assert!(trajectory.len() >= 1);
        assert!(trajectory.len() <= 101);
        assert_eq!(trajectory.first().point(), config.start);

        for point in &trajectory {
            assert_relative_eq!(point.z, field.value(point.x, point.y));
        }
    }
}

#[test]
fn trough_descends_toward_its_valley() {
    // 0.5·sin(x) + 0.5·y² has minima at x = −π/2 + 2kπ, y = 0.
    let registry = Registry::new();
    let trough = registry.get(4).expect("trough is registered");

    let config = Config {
        learning_rate: 0.5,
        epsilon: 1e-9,
        max_steps: 10_000,
        ..Config::starting_at(0.0, 1.0)
    };
    let trajectory = descent::descend(trough, &config).expect("valid config");

    assert_eq!(trajectory.status(), Status::Converged);
    let end = trajectory.last();
    assert_relative_eq!(end.x, -std::f64::consts::FRAC_PI_2, epsilon = 1e-6);
    assert_relative_eq!(end.y, 0.0, epsilon = 1e-6);
    assert_relative_eq!(end.z, -0.5, epsilon = 1e-9);
}

#[test]
fn crater_rim_is_a_fixed_point() {
    // The gradient of (x² + y²)·exp(−(x² + y²)/2) vanishes on the circle r² = 2.
    let registry = Registry::new();
    let crater = registry.get(5).expect("crater is registered");

    let config = Config::starting_at(1.0, 1.0);
    let trajectory = descent::descend(crater, &config).expect("valid config");

    assert_eq!(trajectory.len(), 2);
    assert_eq!(trajectory.last().point(), Point::new(1.0, 1.0));
}

#[test]
fn concurrent_descents_share_one_registry() {
    let registry = Registry::new();
    let config = Config {
        learning_rate: 0.1,
        ..Config::starting_at(1.0, 2.0)
    };

    let serial: Vec<_> = registry
        .iter()
        .map(|field| descent::descend(field, &config).expect("valid config"))
        .collect();

    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = registry
            .iter()
            .map(|field| scope.spawn(move || descent::descend(field, &config)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("thread panicked").expect("valid config"))
            .collect()
    });

    assert_eq!(serial, parallel);
}
