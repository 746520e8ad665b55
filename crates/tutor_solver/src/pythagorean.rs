//! Inverse solver for the Pythagorean theorem: branch on which of the
//! three sides is absent, validating feasibility before any square root.

use crate::solution::{Computed, Solution, SolutionValue};
use tutor_catalog::{get_number, Params, ProblemType};
use tutor_math::{approx_eq, format_number};

const TY: ProblemType = ProblemType::PythagoreanTheorem;

/// True when (a, b, c) is a Pythagorean triple in whole numbers.
fn is_triple(a: f64, b: f64, c: f64) -> bool {
    let (ra, rb, rc) = (a.round(), b.round(), c.round());
    approx_eq(a, ra) && approx_eq(b, rb) && approx_eq(c, rc) && ra * ra + rb * rb == rc * rc
}

fn computed(side: &'static str, value: f64, a: f64, b: f64, c: f64, lines: Vec<String>) -> Solution {
    let mut properties = vec![(
        "solved_side".to_string(),
        side.to_string(),
    )];
    properties.push((
        "pythagorean_triple".to_string(),
        is_triple(a, b, c).to_string(),
    ));
    Solution::Computed {
        ty: TY,
        result: Computed {
            value: SolutionValue::Number(value),
            formula: "a^2 + b^2 = c^2".to_string(),
            calculation: lines,
            units: None,
            properties,
        },
    }
}

pub fn solve(params: &Params) -> Solution {
    let a = get_number(params, "a");
    let b = get_number(params, "b");
    let c = get_number(params, "c");

    for (name, value) in [("a", a), ("b", b), ("c", c)] {
        if let Some(v) = value {
            if v <= 0.0 {
                return Solution::InvalidGeometry {
                    ty: TY,
                    reason: format!("side {name} must be positive, got {}", format_number(v)),
                };
            }
        }
    }

    match (a, b, c) {
        // Over-determined: check the identity instead of solving.
        (Some(a), Some(b), Some(c)) => {
            let expected = (a * a + b * b).sqrt();
            let consistent = approx_eq(a * a + b * b, c * c);
            Solution::Verification {
                ty: TY,
                consistent,
                expected,
                actual: c,
                detail: if consistent {
                    format!(
                        "{}^2 + {}^2 = {}^2 holds within tolerance.",
                        format_number(a),
                        format_number(b),
                        format_number(c)
                    )
                } else {
                    format!(
                        "{}^2 + {}^2 = {} but c^2 = {}.",
                        format_number(a),
                        format_number(b),
                        format_number(a * a + b * b),
                        format_number(c * c)
                    )
                },
            }
        }
        (Some(a), Some(b), None) => {
            let c = (a * a + b * b).sqrt();
            computed(
                "c",
                c,
                a,
                b,
                c,
                vec![
                    format!("c^2 = {}^2 + {}^2", format_number(a), format_number(b)),
                    format!("c^2 = {} + {}", format_number(a * a), format_number(b * b)),
                    format!("c^2 = {}", format_number(a * a + b * b)),
                    format!("c = sqrt({}) = {}", format_number(a * a + b * b), format_number(c)),
                ],
            )
        }
        (Some(a), None, Some(c)) => match missing_leg(a, c, "a") {
            Ok((b, lines)) => computed("b", b, a, b, c, lines),
            Err(solution) => solution,
        },
        (None, Some(b), Some(c)) => match missing_leg(b, c, "b") {
            Ok((a, lines)) => computed("a", a, a, b, c, lines),
            Err(solution) => solution,
        },
        _ => {
            let missing = [("a", a), ("b", b), ("c", c)]
                .iter()
                .filter(|(_, v)| v.is_none())
                .map(|(k, _)| *k)
                .collect();
            Solution::InsufficientInformation { ty: TY, missing }
        }
    }
}

/// Solve for the leg paired with `given_leg`. Feasibility: the hypotenuse
/// must not be shorter than the given leg.
fn missing_leg(
    given_leg: f64,
    hypotenuse: f64,
    given_name: &str,
) -> Result<(f64, Vec<String>), Solution> {
    let diff = hypotenuse * hypotenuse - given_leg * given_leg;
    if diff <= 0.0 {
        return Err(Solution::InvalidGeometry {
            ty: TY,
            reason: format!(
                "hypotenuse {} is not longer than leg {} = {}; no right triangle exists",
                format_number(hypotenuse),
                given_name,
                format_number(given_leg)
            ),
        });
    }
    let leg = diff.sqrt();
    let lines = vec![
        format!(
            "leg^2 = {}^2 - {}^2",
            format_number(hypotenuse),
            format_number(given_leg)
        ),
        format!(
            "leg^2 = {} - {}",
            format_number(hypotenuse * hypotenuse),
            format_number(given_leg * given_leg)
        ),
        format!("leg = sqrt({}) = {}", format_number(diff), format_number(leg)),
    ];
    Ok((leg, lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_catalog::ParamValue;

    fn params(pairs: &[(&str, f64)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), ParamValue::Number(*v)))
            .collect()
    }

    #[test]
    fn test_hypotenuse_from_legs() {
        let solution = solve(&params(&[("a", 3.0), ("b", 4.0)]));
        assert_eq!(solution.primary_number(), Some(5.0));
        let computed = solution.as_computed().unwrap();
        assert!(computed
            .properties
            .contains(&("pythagorean_triple".to_string(), "true".to_string())));
    }

    #[test]
    fn test_missing_leg() {
        let solution = solve(&params(&[("a", 5.0), ("c", 13.0)]));
        assert!((solution.primary_number().unwrap() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_infeasible_hypotenuse() {
        let solution = solve(&params(&[("a", 10.0), ("c", 6.0)]));
        assert!(matches!(solution, Solution::InvalidGeometry { .. }));
    }

    #[test]
    fn test_overdetermined_triple() {
        let solution = solve(&params(&[("a", 3.0), ("b", 4.0), ("c", 5.0)]));
        assert!(matches!(
            solution,
            Solution::Verification {
                consistent: true,
                ..
            }
        ));
    }

    #[test]
    fn test_overdetermined_mismatch() {
        let solution = solve(&params(&[("a", 3.0), ("b", 4.0), ("c", 6.0)]));
        assert!(matches!(
            solution,
            Solution::Verification {
                consistent: false,
                ..
            }
        ));
    }

    #[test]
    fn test_single_side_is_insufficient() {
        let solution = solve(&params(&[("a", 3.0)]));
        assert_eq!(
            solution,
            Solution::InsufficientInformation {
                ty: ProblemType::PythagoreanTheorem,
                missing: vec!["b", "c"],
            }
        );
    }

    #[test]
    fn test_non_triple_is_flagged_false() {
        let solution = solve(&params(&[("a", 2.0), ("b", 3.0)]));
        let computed = solution.as_computed().unwrap();
        assert!(computed
            .properties
            .contains(&("pythagorean_triple".to_string(), "false".to_string())));
    }
}
