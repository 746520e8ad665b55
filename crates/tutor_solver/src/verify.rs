//! Verification: re-derive confidence in a solution by substituting the
//! result back into the defining relationship of its problem type.
//!
//! Equation roots are re-checked with the same bounded evaluator the
//! solver used, so a systematic evaluator bug is invisible here; this
//! pass catches arithmetic and transcription mismatches only.

use crate::rational::eval_both_sides;
use crate::solution::{Solution, SolutionValue};
use tutor_catalog::{get_number, get_text, Problem, ProblemType};
use tutor_math::{approx_eq, format_number, parse_equation, parse_rational, TOLERANCE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    High,
    Medium,
    Low,
    NotApplicable,
}

impl Confidence {
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
            Confidence::NotApplicable => "N/A",
        }
    }
}

#[derive(Debug, Clone)]
pub struct VerificationReport {
    pub confidence: Confidence,
    pub summary: String,
    pub checks: Vec<String>,
}

fn confidence_from_residual(residual: f64) -> Confidence {
    if residual < TOLERANCE {
        Confidence::High
    } else if residual < 10.0 * TOLERANCE {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

fn not_applicable(reason: &str) -> VerificationReport {
    VerificationReport {
        confidence: Confidence::NotApplicable,
        summary: reason.to_string(),
        checks: Vec::new(),
    }
}

fn residual_report(residual: f64, relationship: &str, check: String) -> VerificationReport {
    let confidence = confidence_from_residual(residual);
    VerificationReport {
        confidence,
        summary: match confidence {
            Confidence::High => format!("{relationship} holds within tolerance."),
            Confidence::Medium => format!("{relationship} holds only loosely; check rounding."),
            _ => format!("{relationship} does not hold for the reported result."),
        },
        checks: vec![check],
    }
}

/// Re-derive confidence for `solution` against the original `problem`.
pub fn verify(problem: &Problem, solution: &Solution) -> VerificationReport {
    match solution {
        Solution::Verification {
            consistent, detail, ..
        } => VerificationReport {
            confidence: if *consistent {
                Confidence::High
            } else {
                Confidence::Low
            },
            summary: detail.clone(),
            checks: Vec::new(),
        },
        Solution::InsufficientInformation { .. } => {
            not_applicable("Nothing to verify: the problem was under-determined.")
        }
        Solution::InvalidGeometry { .. } => {
            not_applicable("Nothing to verify: the input describes no valid figure.")
        }
        Solution::Computed { ty, result } => match ty {
            ProblemType::PythagoreanTheorem => verify_pythagorean(problem, result),
            ProblemType::TriangleAngles => verify_angles(problem, result),
            ProblemType::RationalEquation => verify_equation_roots(problem, result),
            ProblemType::SimplifyRational | ProblemType::AddRational => {
                verify_equivalence(problem, result)
            }
            ProblemType::RationalFunctionAnalysis => VerificationReport {
                confidence: Confidence::High,
                summary: "Structural analysis re-derived from the parsed function.".to_string(),
                checks: Vec::new(),
            },
            _ => verify_recomputed(problem, result),
        },
    }
}

fn verify_pythagorean(
    problem: &Problem,
    result: &crate::solution::Computed,
) -> VerificationReport {
    let SolutionValue::Number(solved) = result.value else {
        return not_applicable("No numeric side to verify.");
    };
    let solved_side = result
        .properties
        .iter()
        .find(|(k, _)| k == "solved_side")
        .map(|(_, v)| v.as_str())
        .unwrap_or("c");
    let mut a = get_number(&problem.params, "a");
    let mut b = get_number(&problem.params, "b");
    let mut c = get_number(&problem.params, "c");
    match solved_side {
        "a" => a = Some(solved),
        "b" => b = Some(solved),
        _ => c = Some(solved),
    }
    let (Some(a), Some(b), Some(c)) = (a, b, c) else {
        return not_applicable("Sides unavailable for the identity check.");
    };
    let residual = (a * a + b * b - c * c).abs();
    residual_report(
        residual,
        "The Pythagorean identity",
        format!(
            "|{}^2 + {}^2 - {}^2| = {}",
            format_number(a),
            format_number(b),
            format_number(c),
            format_number(residual)
        ),
    )
}

fn verify_angles(problem: &Problem, result: &crate::solution::Computed) -> VerificationReport {
    let SolutionValue::Number(third) = result.value else {
        return not_applicable("No angle to verify.");
    };
    let given: f64 = ["angle_a", "angle_b", "angle_c"]
        .iter()
        .filter_map(|k| get_number(&problem.params, k))
        .sum();
    let residual = (given + third - 180.0).abs();
    residual_report(
        residual,
        "The 180-degree angle sum",
        format!(
            "{} + {} = {}",
            format_number(given),
            format_number(third),
            format_number(given + third)
        ),
    )
}

fn verify_equation_roots(
    problem: &Problem,
    result: &crate::solution::Computed,
) -> VerificationReport {
    let SolutionValue::Roots(roots) = &result.value else {
        return not_applicable("No root set to verify.");
    };
    if roots.solutions.is_empty() {
        return not_applicable("No accepted roots; nothing to substitute back.");
    }
    let Some(text) = get_text(&problem.params, "equation") else {
        return not_applicable("Original equation text unavailable.");
    };
    let Ok((lhs, rhs)) = parse_equation(text) else {
        return not_applicable("Original equation no longer parses.");
    };

    let mut checks = Vec::new();
    let mut verified = 0usize;
    for &root in &roots.solutions {
        match eval_both_sides(&lhs, &rhs, root) {
            Some((lv, rv)) if approx_eq(lv, rv) => {
                verified += 1;
                checks.push(format!(
                    "x = {}: both sides evaluate to {}",
                    format_number(root),
                    format_number(lv)
                ));
            }
            Some((lv, rv)) => checks.push(format!(
                "x = {}: sides disagree ({} vs {})",
                format_number(root),
                format_number(lv),
                format_number(rv)
            )),
            None => checks.push(format!(
                "x = {}: a side is undefined at the root",
                format_number(root)
            )),
        }
    }
    let confidence = if verified == roots.solutions.len() {
        Confidence::High
    } else if verified > 0 {
        Confidence::Medium
    } else {
        Confidence::Low
    };
    VerificationReport {
        confidence,
        summary: format!(
            "{verified} of {} accepted root(s) satisfy the original equation.",
            roots.solutions.len()
        ),
        checks,
    }
}

fn verify_equivalence(
    problem: &Problem,
    result: &crate::solution::Computed,
) -> VerificationReport {
    let SolutionValue::Expression(simplified) = &result.value else {
        return not_applicable("No expression to verify.");
    };
    let Some(original_text) = get_text(&problem.params, "expression") else {
        return not_applicable("Original expression text unavailable.");
    };
    let (Ok(original), Ok(reduced)) = (parse_rational(original_text), parse_rational(simplified))
    else {
        return not_applicable("Expressions no longer parse.");
    };

    // Probe points chosen away from small-integer poles.
    const PROBES: [f64; 6] = [-7.3, -2.6, -0.9, 0.7, 3.8, 6.1];
    let mut checks = Vec::new();
    let mut compared = 0usize;
    let mut agreed = 0usize;
    for x in PROBES {
        let (Some(a), Some(b)) = (original.eval_f64(x), reduced.eval_f64(x)) else {
            continue;
        };
        compared += 1;
        if approx_eq(a, b) {
            agreed += 1;
        } else {
            checks.push(format!(
                "x = {}: original gives {}, simplified gives {}",
                format_number(x),
                format_number(a),
                format_number(b)
            ));
        }
    }
    if compared == 0 {
        return not_applicable("No probe point avoided the domain restrictions.");
    }
    let confidence = if agreed == compared {
        Confidence::High
    } else if agreed > 0 {
        Confidence::Medium
    } else {
        Confidence::Low
    };
    VerificationReport {
        confidence,
        summary: format!("Original and simplified forms agree at {agreed}/{compared} probes."),
        checks,
    }
}

/// Generic metric check: recompute every reported number from the inputs.
fn verify_recomputed(problem: &Problem, result: &crate::solution::Computed) -> VerificationReport {
    let recomputed = crate::registry::solve(problem.ty, &problem.params);
    let Ok(Solution::Computed {
        result: fresh, ..
    }) = recomputed
    else {
        return not_applicable("Inputs no longer recompute.");
    };
    let pairs: Vec<(f64, f64)> = match (&result.value, &fresh.value) {
        (SolutionValue::Number(a), SolutionValue::Number(b)) => vec![(*a, *b)],
        (SolutionValue::Point(ax, ay), SolutionValue::Point(bx, by)) => {
            vec![(*ax, *bx), (*ay, *by)]
        }
        (SolutionValue::Measures(a), SolutionValue::Measures(b)) if a.len() == b.len() => a
            .iter()
            .zip(b)
            .map(|(m1, m2)| (m1.value, m2.value))
            .collect(),
        _ => return not_applicable("Result shape changed between runs."),
    };
    let residual = pairs
        .iter()
        .map(|(a, b)| (a - b).abs())
        .fold(0.0f64, f64::max);
    residual_report(
        residual,
        "Recomputation from the given inputs",
        format!("max residual {}", format_number(residual)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tutor_catalog::Params;

    fn problem_for(input: &str) -> Problem {
        Problem::resolve(input, None, None, Params::new(), BTreeMap::new()).unwrap()
    }

    #[test]
    fn test_pythagorean_high_confidence() {
        let problem = problem_for("A right triangle has legs 3 and 4. Find the hypotenuse.");
        let solution = crate::solve(problem.ty, &problem.params).unwrap();
        let report = verify(&problem, &solution);
        assert_eq!(report.confidence, Confidence::High);
    }

    #[test]
    fn test_angles_high_confidence() {
        let problem =
            problem_for("Two angles of a triangle measure 50 and 60 degrees. Find the missing angle.");
        let solution = crate::solve(problem.ty, &problem.params).unwrap();
        let report = verify(&problem, &solution);
        assert_eq!(report.confidence, Confidence::High);
    }

    #[test]
    fn test_equation_roots_verified() {
        let problem = problem_for("Solve 1/(x - 2) = 3/(x + 2).");
        let solution = crate::solve(problem.ty, &problem.params).unwrap();
        let report = verify(&problem, &solution);
        assert_eq!(report.confidence, Confidence::High);
        assert_eq!(report.checks.len(), 1);
    }

    #[test]
    fn test_insufficient_is_not_applicable() {
        let problem = problem_for("Find the area of a triangle with base 6.");
        let solution = crate::solve(problem.ty, &problem.params).unwrap();
        let report = verify(&problem, &solution);
        assert_eq!(report.confidence, Confidence::NotApplicable);
    }

    #[test]
    fn test_simplify_equivalence() {
        let problem = problem_for("Simplify (x^2 - 4)/(x + 2).");
        let solution = crate::solve(problem.ty, &problem.params).unwrap();
        let report = verify(&problem, &solution);
        assert_eq!(report.confidence, Confidence::High);
    }
}
