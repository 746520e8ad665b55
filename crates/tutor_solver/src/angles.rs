//! Triangle angle-sum solver.

use crate::solution::{Computed, Solution, SolutionValue};
use tutor_catalog::{get_number, Params, ProblemType};
use tutor_math::{approx_eq, format_number};

const TY: ProblemType = ProblemType::TriangleAngles;
const ANGLE_SUM: f64 = 180.0;

pub fn solve(params: &Params) -> Solution {
    let angles = [
        ("angle_a", get_number(params, "angle_a")),
        ("angle_b", get_number(params, "angle_b")),
        ("angle_c", get_number(params, "angle_c")),
    ];

    for (name, value) in &angles {
        if let Some(v) = value {
            if *v <= 0.0 || *v >= ANGLE_SUM {
                return Solution::InvalidGeometry {
                    ty: TY,
                    reason: format!(
                        "{name} must be strictly between 0 and 180 degrees, got {}",
                        format_number(*v)
                    ),
                };
            }
        }
    }

    let given: Vec<(&str, f64)> = angles
        .iter()
        .filter_map(|(k, v)| v.map(|v| (*k, v)))
        .collect();

    match given.len() {
        // Over-determined: all three given, check the sum.
        3 => {
            let sum: f64 = given.iter().map(|(_, v)| v).sum();
            let consistent = approx_eq(sum, ANGLE_SUM);
            Solution::Verification {
                ty: TY,
                consistent,
                expected: ANGLE_SUM,
                actual: sum,
                detail: if consistent {
                    "The three angles sum to 180 degrees.".to_string()
                } else {
                    format!("The three angles sum to {}, not 180.", format_number(sum))
                },
            }
        }
        2 => {
            let sum: f64 = given.iter().map(|(_, v)| v).sum();
            let third = ANGLE_SUM - sum;
            if third <= 0.0 {
                return Solution::InvalidGeometry {
                    ty: TY,
                    reason: format!(
                        "the given angles already sum to {} degrees",
                        format_number(sum)
                    ),
                };
            }
            Solution::Computed {
                ty: TY,
                result: Computed {
                    value: SolutionValue::Number(third),
                    formula: "A + B + C = 180".to_string(),
                    calculation: vec![
                        format!(
                            "C = 180 - ({} + {})",
                            format_number(given[0].1),
                            format_number(given[1].1)
                        ),
                        format!("C = 180 - {}", format_number(sum)),
                        format!("C = {}", format_number(third)),
                    ],
                    units: Some("degrees".to_string()),
                    properties: Vec::new(),
                },
            }
        }
        _ => {
            let missing = angles
                .iter()
                .filter(|(_, v)| v.is_none())
                .map(|(k, _)| *k)
                .collect();
            Solution::InsufficientInformation { ty: TY, missing }
        }
    }
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
    fn test_third_angle() {
        let solution = solve(&params(&[("angle_a", 50.0), ("angle_b", 60.0)]));
        assert_eq!(solution.primary_number(), Some(70.0));
    }

    #[test]
    fn test_angle_completion_property() {
        let solution = solve(&params(&[("angle_a", 37.5), ("angle_b", 88.25)]));
        let third = solution.primary_number().unwrap();
        assert!((third + 37.5 + 88.25 - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_overdetermined() {
        let solution = solve(&params(&[
            ("angle_a", 50.0),
            ("angle_b", 60.0),
            ("angle_c", 70.0),
        ]));
        assert!(matches!(
            solution,
            Solution::Verification {
                consistent: true,
                ..
            }
        ));
    }

    #[test]
    fn test_degenerate_sum() {
        let solution = solve(&params(&[("angle_a", 100.0), ("angle_b", 90.0)]));
        assert!(matches!(solution, Solution::InvalidGeometry { .. }));
    }

    #[test]
    fn test_one_angle_is_insufficient() {
        let solution = solve(&params(&[("angle_a", 50.0)]));
        assert_eq!(
            solution,
            Solution::InsufficientInformation {
                ty: TY,
                missing: vec!["angle_b", "angle_c"],
            }
        );
    }
}
