//! Numeric property tests for the solver registry.
//!
//! These catch arithmetic slips that are structurally fine but
//! numerically wrong (sign errors, swapped operands, missing square
//! roots). Fixed case counts keep CI stable.

use proptest::prelude::*;
use tutor_catalog::{ParamValue, Params, ProblemType};
use tutor_solver::{solve, Solution, SolutionValue};

fn num_params(pairs: &[(&str, f64)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), ParamValue::Number(*v)))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// For any two legs, the computed hypotenuse satisfies the identity
    /// |a^2 + b^2 - c^2| < 1e-3.
    #[test]
    fn pythagorean_round_trip(a in 0.5f64..50.0, b in 0.5f64..50.0) {
        let solution = solve(
            ProblemType::PythagoreanTheorem,
            &num_params(&[("a", a), ("b", b)]),
        )
        .unwrap();
        let Solution::Computed { result, .. } = &solution else {
            panic!("two legs must compute, got {solution:?}");
        };
        let SolutionValue::Number(c) = result.value else {
            panic!("expected a numeric hypotenuse");
        };
        prop_assert!((a * a + b * b - c * c).abs() < 1e-3);
    }

    /// With exactly one angle missing, result + given == 180 within 1e-3.
    #[test]
    fn triangle_angle_completion(a in 1.0f64..100.0, b in 1.0f64..75.0) {
        let solution = solve(
            ProblemType::TriangleAngles,
            &num_params(&[("angle_a", a), ("angle_b", b)]),
        )
        .unwrap();
        let Solution::Computed { result, .. } = &solution else {
            panic!("two angles below 175 must compute, got {solution:?}");
        };
        let SolutionValue::Number(third) = result.value else {
            panic!("expected a numeric angle");
        };
        prop_assert!((third + a + b - 180.0).abs() < 1e-3);
    }

    /// A missing leg recomputes the given hypotenuse.
    #[test]
    fn missing_leg_round_trip(a in 0.5f64..30.0, b in 0.5f64..30.0) {
        let c = (a * a + b * b).sqrt();
        let solution = solve(
            ProblemType::PythagoreanTheorem,
            &num_params(&[("a", a), ("c", c)]),
        )
        .unwrap();
        let Solution::Computed { result, .. } = &solution else {
            panic!("leg plus hypotenuse must compute, got {solution:?}");
        };
        let SolutionValue::Number(solved_b) = result.value else {
            panic!("expected a numeric leg");
        };
        prop_assert!((solved_b - b).abs() < 1e-3);
    }

    /// Triangle area scales linearly in the base.
    #[test]
    fn triangle_area_linearity(base in 0.5f64..40.0, height in 0.5f64..40.0) {
        let once = solve(
            ProblemType::TriangleArea,
            &num_params(&[("base", base), ("height", height)]),
        )
        .unwrap();
        let doubled = solve(
            ProblemType::TriangleArea,
            &num_params(&[("base", 2.0 * base), ("height", height)]),
        )
        .unwrap();
        let (Some(a1), Some(a2)) = (once.primary_number(), doubled.primary_number()) else {
            panic!("both solves must compute");
        };
        prop_assert!((2.0 * a1 - a2).abs() < 1e-6);
    }
}
