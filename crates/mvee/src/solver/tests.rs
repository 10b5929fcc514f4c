use super::*;
use crate::cfg::CONTAINMENT_EPS;
use crate::hull::Point2;
use nalgebra::{dmatrix, vector, DVector};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn hull_of(raw: &[(f64, f64)]) -> ConvexHull {
    let pts: Vec<Point2> = raw.iter().map(|&(x, y)| vector![x, y]).collect();
    ConvexHull::from_points(&pts).unwrap()
}

#[test]
fn square_converges_to_circumcircle() {
    let hull = hull_of(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let sol = solve(&hull, &MveeCfg::default()).unwrap();
    assert!(sol.converged);
    assert!((sol.shape.center[0] - 5.0).abs() < 1e-9);
    assert!((sol.shape.center[1] - 5.0).abs() < 1e-9);
    // Circle of radius 5√2: A = I / 50.
    let expected = dmatrix![1.0 / 50.0, 0.0; 0.0, 1.0 / 50.0];
    assert!((&sol.shape.a - expected).amax() < 1e-12);
}

#[test]
fn triangle_touches_every_vertex() {
    let hull = hull_of(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
    let sol = solve(&hull, &MveeCfg::default()).unwrap();
    assert!(sol.converged);
    for p in hull.vertices() {
        let v = sol.shape.quadratic_form2(*p).unwrap();
        assert!((v - 1.0).abs() < 1e-9, "vertex {p:?} gives {v}");
    }
    // Uniform weights are already optimal for a simplex; centre is the centroid.
    assert!((sol.shape.center[0] - 4.0 / 3.0).abs() < 1e-9);
    assert!((sol.shape.center[1] - 1.0).abs() < 1e-9);
}

#[test]
fn unit_cube_in_three_dimensions() {
    let mut corners = Vec::new();
    for i in 0..8u32 {
        corners.push([(i & 1) as f64, ((i >> 1) & 1) as f64, ((i >> 2) & 1) as f64]);
    }
    let points = DMatrix::from_fn(3, 8, |r, c| corners[c][r]);
    let sol = solve_columns(&points, &MveeCfg::default()).unwrap();
    assert!(sol.converged);
    assert!((&sol.shape.center - DVector::from_element(3, 0.5)).amax() < 1e-9);
    // Sphere of radius √3/2.
    assert!((&sol.shape.a - DMatrix::identity(3, 3) * (4.0 / 3.0)).amax() < 1e-9);
    for c in 0..8 {
        assert!(sol.shape.contains_eps(&points.column(c).into_owned(), 1e-6).unwrap());
    }
    assert!(!sol
        .shape
        .contains_eps(&DVector::from_element(3, 1.5), 1e-9)
        .unwrap());
    assert!(matches!(
        sol.shape.contains_eps(&DVector::zeros(2), 1e-9),
        Err(MveeError::Shape(_))
    ));
}

#[test]
fn weights_stay_on_the_simplex() {
    let mut rng = StdRng::seed_from_u64(2024);
    let pts: Vec<Point2> = (0..40)
        .map(|_| vector![rng.gen_range(-20.0..20.0), rng.gen_range(-5.0..5.0)])
        .collect();
    let hull = ConvexHull::from_points(&pts).unwrap();
    let sol = solve(&hull, &MveeCfg::default()).unwrap();
    assert_eq!(sol.weights.len(), hull.len());
    assert!((sol.weights.sum() - 1.0).abs() < 1e-9);
    assert!(sol.weights.iter().all(|&w| w >= -1e-15));
}

#[test]
fn iteration_cap_reports_non_convergence() {
    let hull = hull_of(&[(0.0, 0.0), (9.0, 1.0), (10.0, 4.0), (3.0, 7.0), (-2.0, 3.0)]);
    let cfg = MveeCfg {
        tol: 1e-12,
        max_iterations: 1,
    };
    let sol = solve(&hull, &cfg).unwrap();
    assert!(!sol.converged);
    assert_eq!(sol.iterations, 1);
    assert!(sol.final_err > cfg.tol);
    assert!(crate::ellipse::EllipseParams::from_shape(&sol.shape).is_ok());

    let none = solve(
        &hull,
        &MveeCfg {
            tol: 1e-3,
            max_iterations: 0,
        },
    )
    .unwrap();
    assert!(!none.converged);
    assert_eq!(none.iterations, 0);
    assert!(none.final_err.is_infinite());
}

#[test]
fn degenerate_inputs_are_reported() {
    let segment = hull_of(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    assert_eq!(
        solve(&segment, &MveeCfg::default()).unwrap_err(),
        MveeError::Degenerate(Degeneracy::Collinear { vertices: 2 })
    );

    let two = dmatrix![0.0, 1.0; 0.0, 1.0];
    assert_eq!(
        solve_columns(&two, &MveeCfg::default()).unwrap_err(),
        MveeError::Degenerate(Degeneracy::TooFewPoints { got: 2, need: 3 })
    );

    // Three collinear columns lift to a moment matrix with two equal rows.
    let line = dmatrix![0.0, 1.0, 2.0; 0.0, 1.0, 2.0];
    assert_eq!(
        solve_columns(&line, &MveeCfg::default()).unwrap_err(),
        MveeError::Degenerate(Degeneracy::Singular)
    );

    let nan = dmatrix![0.0, 1.0, f64::NAN; 0.0, 0.0, 1.0];
    assert_eq!(
        solve_columns(&nan, &MveeCfg::default()).unwrap_err(),
        MveeError::Degenerate(Degeneracy::NonFinite { index: 2 })
    );
}

#[test]
fn invalid_tolerance_rejected() {
    let hull = hull_of(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
    for tol in [-1.0, f64::NAN, f64::INFINITY] {
        let cfg = MveeCfg {
            tol,
            ..MveeCfg::default()
        };
        assert!(matches!(
            solve(&hull, &cfg),
            Err(MveeError::InvalidConfig { field: "tol", .. })
        ));
    }
}

#[test]
fn argmax_prefers_first_maximum() {
    assert_eq!(argmax(&DVector::from_vec(vec![1.0, 3.0, 3.0, 2.0])), (1, 3.0));
    assert_eq!(argmax(&DVector::from_vec(vec![f64::NAN, 2.0])), (1, 2.0));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn ellipse_encloses_hull(
        raw in prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 4..25),
    ) {
        let pts: Vec<Point2> = raw.iter().map(|&(x, y)| vector![x, y]).collect();
        let hull = ConvexHull::from_points(&pts).unwrap();
        prop_assume!(hull.len() >= 3 && hull.area() > 1.0);
        let cfg = MveeCfg { tol: 1e-4, max_iterations: 200_000 };
        let sol = solve(&hull, &cfg).unwrap();
        prop_assume!(sol.converged);
        // Khachiyan stops at an approximate optimum; the slack scales with tol.
        for p in &pts {
            let col = DVector::from_column_slice(p.as_slice());
            prop_assert!(
                sol.shape.contains_eps(&col, CONTAINMENT_EPS).unwrap(),
                "point {:?} at {}",
                p,
                sol.shape.quadratic_form2(*p).unwrap()
            );
        }
    }
}
