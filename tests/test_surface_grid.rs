//! Surface grid evaluation: reference points, shape contract and the
//! negative-radicand policy.

use ponde::{build_grid, fold, AngleRange, PondeError, ShapeConstants, SurfaceEvaluator};
use std::f64::consts::{FRAC_PI_2, TAU};

fn ranges(n: usize, m: usize) -> (AngleRange, AngleRange) {
    (
        AngleRange::full_turn(n).expect("theta range"),
        AngleRange::full_turn(m).expect("phi range"),
    )
}

#[test]
fn test_reference_point_at_zero_angles() {
    let (theta, phi) = ranges(100, 100);
    let grid = build_grid(&theta, &phi, 9.0, 4.0).expect("Failed to build grid");

    let p = grid.point(0, 0).unwrap();
    assert!((p[0] - 13.0).abs() < 1e-12, "x should be 13, got {}", p[0]);
    assert!(p[1].abs() < 1e-12);
    assert!(p[2].abs() < 1e-12);
}

#[test]
fn test_quarter_turn_radius_relation() {
    let theta = AngleRange::from_values(vec![FRAC_PI_2]).unwrap();
    let phi = AngleRange::from_values(vec![0.0]).unwrap();
    let grid = build_grid(&theta, &phi, 9.0, 4.0).unwrap();
    let [x, y, z] = grid.point(0, 0).unwrap();

    let f = fold(FRAC_PI_2);
    let r = (16.0 - 81.0 * f.sin().powi(2)).sqrt();
    assert_eq!(z, 0.0);
    assert!(((x * x + y * y).sqrt() - (9.0 * f.cos() + r)).abs() < 1e-9);
}

#[test]
fn test_grid_shape_follows_phi_rows_theta_columns() {
    for &(n, m) in &[(1, 1), (3, 7), (10, 4), (100, 100)] {
        let (theta, phi) = ranges(n, m);
        let grid = build_grid(&theta, &phi, 9.0, 4.0).unwrap();
        assert_eq!(grid.shape(), (m, n));
        assert_eq!(grid.x.shape(), (m, n));
        assert_eq!(grid.y.shape(), (m, n));
        assert_eq!(grid.z.shape(), (m, n));
    }
}

#[test]
fn test_columns_share_theta_rows_share_phi() {
    let (theta, phi) = ranges(9, 6);
    let grid = build_grid(&theta, &phi, 9.0, 4.0).unwrap();

    // z depends only on phi (row) and f(theta); with phi = 0 every z is 0
    assert!(grid.z.row(0).unwrap().iter().all(|z| z.abs() < 1e-12));
    // last phi sample is 2π, so that row matches the first
    let last = phi.len() - 1;
    for j in 0..theta.len() {
        assert!((grid.x.at(0, j) - grid.x.at(last, j)).abs() < 1e-9);
    }
}

#[test]
fn test_zero_samples_rejected() {
    assert!(matches!(
        AngleRange::full_turn(0),
        Err(PondeError::InvalidRange(_))
    ));
}

#[test]
fn test_violating_constants_fail_fast() {
    let (theta, phi) = ranges(100, 100);
    let err = build_grid(&theta, &phi, 10.0, 1.0).unwrap_err();
    assert!(matches!(err, PondeError::ShapeConstants { .. }), "got {:?}", err);
}

#[test]
fn test_per_cell_guard_counts_every_violation() {
    let (theta, phi) = ranges(100, 50);
    let shape = ShapeConstants::positive(10.0, 1.0).unwrap();
    let eval = SurfaceEvaluator::new(shape);

    // Every phi row repeats the theta columns, so the violating cells are
    // the negative-radicand columns times the number of rows.
    let bad_columns: Vec<usize> = theta
        .iter()
        .enumerate()
        .filter(|&(_, t)| eval.radicand(t) < 0.0)
        .map(|(j, _)| j)
        .collect();
    assert!(!bad_columns.is_empty());

    match eval.build_grid(&theta, &phi) {
        Err(PondeError::Domain { row, col, violations, .. }) => {
            assert_eq!(row, 0);
            assert_eq!(col, bad_columns[0]);
            assert_eq!(violations, bad_columns.len() * phi.len());
        }
        other => panic!("expected a domain error, got {:?}", other),
    }
}

#[test]
fn test_admissible_constants_never_trip_guard() {
    // just above the bound
    let a = 10.0;
    let b = a * (std::f64::consts::FRAC_PI_8).sin() * 1.000_001;
    let (theta, phi) = ranges(200, 3);
    let grid = build_grid(&theta, &phi, a, b).unwrap();
    assert!(grid.points().all(|p| p.iter().all(|v| v.is_finite())));
}

#[test]
fn test_grid_is_closed_around_theta() {
    let (theta, phi) = ranges(25, 5);
    assert_eq!(theta.values()[24], TAU);
    let grid = build_grid(&theta, &phi, 9.0, 4.0).unwrap();
    for i in 0..phi.len() {
        let first = grid.point(i, 0).unwrap();
        let last = grid.point(i, 24).unwrap();
        for k in 0..3 {
            assert!((first[k] - last[k]).abs() < 1e-9);
        }
    }
}

#[test]
fn test_non_finite_samples_rejected() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(
            matches!(
                AngleRange::from_values(vec![bad]),
                Err(PondeError::InvalidRange(_))
            ),
            "{} should be rejected",
            bad
        );
    }
}

#[test]
fn test_nan_angle_never_yields_a_point() {
    let eval = SurfaceEvaluator::new(ShapeConstants::new(9.0, 4.0).unwrap());
    for (theta, phi) in [(f64::NAN, 0.0), (0.0, f64::NAN), (f64::INFINITY, 0.0)] {
        assert!(
            matches!(eval.point_at(theta, phi), Err(PondeError::InvalidRange(_))),
            "point_at({}, {}) should fail",
            theta,
            phi
        );
    }
}

#[test]
fn test_grid_points_are_always_finite() {
    let theta = AngleRange::from_values(vec![0.0, 1.0, -7.5, 100.0]).unwrap();
    let phi = AngleRange::from_values(vec![0.0, 3.0]).unwrap();
    let grid = build_grid(&theta, &phi, 9.0, 4.0).unwrap();
    assert!(grid.points().all(|p| p.iter().all(|c| c.is_finite())));

    // a NaN phi cannot even be sampled, so it never reaches build_grid
    assert!(AngleRange::from_values(vec![0.0, f64::NAN]).is_err());
}
