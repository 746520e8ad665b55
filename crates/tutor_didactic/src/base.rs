//! Stage 1: base step generation.
//!
//! One canonical sequence per problem type: state the formula,
//! substitute, compute, state the result. The last step of a successful
//! solve carries `final_answer = true`; under-determined and degenerate
//! outcomes produce a short explanatory trace with no final answer.

use crate::step::{Step, StepExpression};
use tutor_catalog::{Problem, ProblemType};
use tutor_content::{labels, ContentDb};
use tutor_math::format_number;
use tutor_solver::{Computed, Solution, SolutionValue};

fn text(s: impl Into<String>) -> StepExpression {
    StepExpression::Text(s.into())
}

/// The formula shown when a solution carries none (insufficient input,
/// invalid geometry): first entry of the type's lesson formula table.
fn lesson_formula(ty: ProblemType) -> String {
    ContentDb::global()
        .theory(ty)
        .and_then(|t| t.formulas.first())
        .map(|(_, formula)| (*formula).to_string())
        .unwrap_or_default()
}

pub fn generate(problem: &Problem, solution: &Solution) -> Vec<Step> {
    match solution {
        Solution::InsufficientInformation { ty, missing } => {
            insufficient_steps(*ty, missing)
        }
        Solution::InvalidGeometry { ty, reason } => invalid_steps(*ty, reason),
        Solution::Verification {
            ty,
            consistent,
            expected,
            actual,
            detail,
        } => verification_steps(*ty, *consistent, *expected, *actual, detail),
        Solution::Computed { ty, result } => computed_steps(problem, *ty, result),
    }
}

fn insufficient_steps(ty: ProblemType, missing: &[&'static str]) -> Vec<Step> {
    vec![
        Step::base(
            1,
            labels::STATE_FORMULA,
            format!("Recall what the {} requires.", ty.title().to_lowercase()),
            text(lesson_formula(ty)),
            "Listing the formula shows which measurements are needed.",
        ),
        Step::base(
            2,
            labels::REPORT_MISSING,
            format!("The problem does not provide: {}.", missing.join(", ")),
            text(format!("missing: {}", missing.join(", "))),
            "Without these values the formula cannot be evaluated; no answer is possible yet.",
        ),
    ]
}

fn invalid_steps(ty: ProblemType, reason: &str) -> Vec<Step> {
    vec![
        Step::base(
            1,
            labels::STATE_FORMULA,
            format!("Recall what the {} requires.", ty.title().to_lowercase()),
            text(lesson_formula(ty)),
            "The formula only applies to measurements that describe a real figure.",
        ),
        Step::base(
            2,
            labels::CHECK_FEASIBILITY,
            format!("The given values describe no valid figure: {reason}."),
            text(reason.to_string()),
            "Checking feasibility before computing prevents a meaningless answer.",
        ),
    ]
}

fn verification_steps(
    ty: ProblemType,
    consistent: bool,
    expected: f64,
    actual: f64,
    detail: &str,
) -> Vec<Step> {
    let verdict = if consistent {
        "The given values are mutually consistent."
    } else {
        "The given values are NOT mutually consistent."
    };
    vec![
        Step::base(
            1,
            labels::STATE_FORMULA,
            "State the relationship every valid input must satisfy.",
            text(lesson_formula(ty)),
            "All values were supplied, so the task is a consistency check, not a computation.",
        ),
        Step::base(
            2,
            labels::SUBSTITUTE,
            "Substitute every given value into the relationship.",
            text(detail.to_string()),
            "Substituting all values at once exposes any disagreement.",
        ),
        Step::base(
            3,
            labels::COMPUTE,
            "Compare both sides within tolerance.",
            StepExpression::Transition {
                before: format_number(actual),
                operation: "compare".to_string(),
                after: format_number(expected),
            },
            "A difference below the tolerance counts as agreement.",
        ),
        Step::base(4, labels::RESULT, verdict, text(verdict), detail.to_string()).as_final(),
    ]
}

fn computed_steps(problem: &Problem, ty: ProblemType, result: &Computed) -> Vec<Step> {
    match ty {
        ProblemType::RationalEquation => equation_steps(result),
        ProblemType::SimplifyRational => simplify_steps(result),
        ProblemType::AddRational => add_steps(result),
        ProblemType::RationalFunctionAnalysis => analysis_steps(result),
        ProblemType::PythagoreanTheorem => pythagorean_steps(result),
        _ => metric_steps(problem, ty, result),
    }
}

fn result_display(result: &Computed) -> String {
    let value = match &result.value {
        SolutionValue::Number(n) => format_number(*n),
        SolutionValue::Point(x, y) => format!("({}, {})", format_number(*x), format_number(*y)),
        SolutionValue::Measures(measures) => measures
            .iter()
            .map(|m| format!("{} = {}", m.name, format_number(m.value)))
            .collect::<Vec<_>>()
            .join(", "),
        SolutionValue::Expression(e) => e.clone(),
        SolutionValue::Roots(roots) => {
            if roots.solutions.is_empty() {
                "no solution".to_string()
            } else {
                format!(
                    "x = {}",
                    roots
                        .solutions
                        .iter()
                        .map(|x| format_number(*x))
                        .collect::<Vec<_>>()
                        .join(", x = ")
                )
            }
        }
        SolutionValue::Analysis(report) => report.simplified.clone(),
    };
    match &result.units {
        Some(units) => format!("{value} {units}"),
        None => value,
    }
}

/// The shared four-step sequence for the closed-form metric solvers.
fn metric_steps(problem: &Problem, ty: ProblemType, result: &Computed) -> Vec<Step> {
    let substitute_line = result.calculation.first().cloned().unwrap_or_default();
    let compute_line = result.calculation.last().cloned().unwrap_or_default();
    let mut steps = vec![
        Step::base(
            1,
            labels::STATE_FORMULA,
            format!("Start from the {} formula.", ty.title().to_lowercase()),
            text(result.formula.clone()),
            "The formula links the given measurements to the quantity asked for.",
        )
        .with_rule(&result.formula),
        Step::base(
            2,
            labels::SUBSTITUTE,
            "Substitute the given values into the formula.",
            text(substitute_line.clone()),
            "Each symbol is replaced by the measurement the problem provides.",
        ),
        Step::base(
            3,
            labels::COMPUTE,
            "Carry out the arithmetic.",
            StepExpression::Transition {
                before: substitute_line,
                operation: "evaluate".to_string(),
                after: compute_line,
            },
            "With every value in place, only arithmetic remains.",
        ),
        Step::base(
            4,
            labels::RESULT,
            format!("State the result: {}.", result_display(result)),
            text(result_display(result)),
            "The answer is reported together with its units.",
        )
        .as_final(),
    ];
    if let Some(hint) = visual_hint_for(ty, problem) {
        steps[0] = steps[0].clone().with_visual_hint(&hint);
    }
    steps
}

fn visual_hint_for(ty: ProblemType, _problem: &Problem) -> Option<String> {
    match ty {
        ProblemType::TriangleArea => {
            Some("Sketch the triangle; the height meets the base at a right angle.".to_string())
        }
        ProblemType::TrapezoidArea => {
            Some("Sketch the trapezoid with the two parallel bases horizontal.".to_string())
        }
        ProblemType::CircleMeasures => {
            Some("Draw the circle and mark the radius from center to edge.".to_string())
        }
        ProblemType::PointDistance | ProblemType::PointMidpoint => {
            Some("Plot both points and connect them on a coordinate grid.".to_string())
        }
        ProblemType::PrismVolume | ProblemType::CylinderVolume => {
            Some("Picture the solid as its base swept through the height.".to_string())
        }
        _ => None,
    }
}

fn pythagorean_steps(result: &Computed) -> Vec<Step> {
    let solved_leg = result
        .properties
        .iter()
        .any(|(k, v)| k == "solved_side" && v != "c");
    let substitute_line = result.calculation.first().cloned().unwrap_or_default();
    let compute_line = result.calculation.last().cloned().unwrap_or_default();
    let is_triple = result
        .properties
        .iter()
        .any(|(k, v)| k == "pythagorean_triple" && v == "true");

    let mut steps = vec![Step::base(
        1,
        labels::STATE_FORMULA,
        "Start from the Pythagorean theorem.",
        text(result.formula.clone()),
        "In a right triangle the legs and the hypotenuse are tied together by this identity.",
    )
    .with_rule("a^2 + b^2 = c^2")
    .with_visual_hint("Sketch the right triangle; the hypotenuse faces the right angle.")];

    if solved_leg {
        steps.push(Step::base(
            0,
            labels::CHECK_FEASIBILITY,
            "Confirm the hypotenuse is the longest side.",
            text("c^2 - leg^2 > 0".to_string()),
            "A square root only exists when the hypotenuse exceeds the given leg.",
        ));
    }
    steps.push(Step::base(
        0,
        labels::SUBSTITUTE,
        "Substitute the known sides.",
        text(substitute_line.clone()),
        "The unknown side is the only symbol left.",
    ));
    steps.push(Step::base(
        0,
        labels::COMPUTE,
        "Square, combine, and take the square root.",
        StepExpression::Transition {
            before: substitute_line,
            operation: "square and solve".to_string(),
            after: compute_line,
        },
        "Undoing the square with a root gives the side length.",
    ));
    let result_desc = if is_triple {
        format!(
            "State the result: {}. The sides form a Pythagorean triple.",
            result_display(result)
        )
    } else {
        format!("State the result: {}.", result_display(result))
    };
    steps.push(
        Step::base(
            0,
            labels::RESULT,
            result_desc,
            text(result_display(result)),
            "Side lengths are positive, so only the positive root applies.",
        )
        .as_final(),
    );

    renumber(steps)
}

fn equation_steps(result: &Computed) -> Vec<Step> {
    let restrictions = result
        .properties
        .iter()
        .find(|(k, _)| k == "restrictions")
        .map(|(_, v)| v.clone())
        .unwrap_or_else(|| "none".to_string());
    let cleared = result.calculation.get(1).cloned().unwrap_or_default();
    let extraneous_text = match &result.value {
        SolutionValue::Roots(roots) if !roots.extraneous.is_empty() => format!(
            "rejected: x = {}",
            roots
                .extraneous
                .iter()
                .map(|x| format_number(*x))
                .collect::<Vec<_>>()
                .join(", x = ")
        ),
        _ => "no candidate violates a restriction".to_string(),
    };

    renumber(vec![
        Step::base(
            0,
            labels::IDENTIFY_RESTRICTIONS,
            "List the domain restrictions before any algebra.",
            text(restrictions),
            "Values that zero a denominator can never be solutions, whatever the algebra says.",
        )
        .with_rule("denominator != 0"),
        Step::base(
            0,
            labels::FIND_CANDIDATES,
            "Clear the denominators and test candidate values.",
            text(cleared),
            "Cross-multiplying removes the fractions; candidates that balance both sides are kept.",
        )
        .with_rule("a/b = c/d  =>  a*d = c*b"),
        Step::base(
            0,
            labels::CHECK_EXTRANEOUS,
            "Reject candidates that land on a restriction.",
            text(extraneous_text),
            "A root of the cleared equation that breaks a restriction is extraneous.",
        ),
        Step::base(
            0,
            labels::STATE_SOLUTION,
            format!("State the solution: {}.", result_display(result)),
            text(result_display(result)),
            "Only candidates that survive the restriction check are solutions.",
        )
        .as_final(),
    ])
}

fn simplify_steps(result: &Computed) -> Vec<Step> {
    let factor_lines = result
        .calculation
        .iter()
        .take(result.calculation.len().saturating_sub(1))
        .cloned()
        .collect::<Vec<_>>()
        .join("; ");
    let cancelled = result
        .properties
        .iter()
        .find(|(k, _)| k == "cancelled_factor")
        .map(|(_, v)| v.clone())
        .unwrap_or_default();
    let restrictions = result
        .properties
        .iter()
        .find(|(k, _)| k == "restrictions")
        .map(|(_, v)| v.clone())
        .unwrap_or_else(|| "none".to_string());
    let cancel_text = if cancelled == "1" {
        "nothing cancels; the expression is already in lowest terms".to_string()
    } else {
        format!("cancel the common factor ({cancelled})")
    };

    renumber(vec![
        Step::base(
            0,
            labels::FACTOR,
            "Factor the numerator and the denominator.",
            text(factor_lines),
            "Only matching factors, never matching terms, may be cancelled.",
        ),
        Step::base(
            0,
            labels::CANCEL,
            "Cancel the factors the top and bottom share.",
            text(cancel_text),
            "A nonzero factor over itself is 1 and drops out.",
        )
        .with_rule("(a*k)/(b*k) = a/b, k != 0"),
        Step::base(
            0,
            labels::IDENTIFY_RESTRICTIONS,
            "Keep the original domain restrictions.",
            text(restrictions),
            "Cancelling a factor hides it from the formula but not from the domain.",
        ),
        Step::base(
            0,
            labels::RESULT,
            format!("State the simplified form: {}.", result_display(result)),
            text(result_display(result)),
            "The reduced expression equals the original everywhere both are defined.",
        )
        .as_final(),
    ])
}

fn add_steps(result: &Computed) -> Vec<Step> {
    let restrictions = result
        .properties
        .iter()
        .find(|(k, _)| k == "restrictions")
        .map(|(_, v)| v.clone())
        .unwrap_or_else(|| "none".to_string());
    let lcd_line = result.calculation.first().cloned().unwrap_or_default();
    let combine_line = result.calculation.get(1).cloned().unwrap_or_default();

    renumber(vec![
        Step::base(
            0,
            labels::IDENTIFY_RESTRICTIONS,
            "Note where each denominator is zero.",
            text(restrictions),
            "The combined expression inherits every restriction of the originals.",
        ),
        Step::base(
            0,
            labels::FIND_LCD,
            "Find the common denominator.",
            text(lcd_line),
            "Fractions only combine once they share a denominator.",
        ),
        Step::base(
            0,
            labels::COMBINE,
            "Rewrite each fraction over it and combine the numerators.",
            text(combine_line),
            "With equal denominators, only the numerators add.",
        )
        .with_rule("a/c + b/c = (a + b)/c"),
        Step::base(
            0,
            labels::RESULT,
            format!("State the combined form: {}.", result_display(result)),
            text(result_display(result)),
            "The sum is reported in lowest terms.",
        )
        .as_final(),
    ])
}

fn analysis_steps(result: &Computed) -> Vec<Step> {
    let SolutionValue::Analysis(report) = &result.value else {
        return metric_steps_fallback(result);
    };
    let zeros_line = result.calculation.first().cloned().unwrap_or_default();
    let holes_line = result.calculation.get(1).cloned().unwrap_or_default();
    let degree_line = result.calculation.get(2).cloned().unwrap_or_default();
    let summary = {
        let vertical = if report.vertical_asymptotes.is_empty() {
            "no vertical asymptote".to_string()
        } else {
            format!(
                "vertical asymptote(s) at x = {}",
                report
                    .vertical_asymptotes
                    .iter()
                    .map(|x| format_number(*x))
                    .collect::<Vec<_>>()
                    .join(", x = ")
            )
        };
        let horizontal = match report.horizontal_asymptote {
            Some(y) => format!("horizontal asymptote y = {}", format_number(y)),
            None => "no horizontal asymptote".to_string(),
        };
        format!("{vertical}; {horizontal}")
    };

    renumber(vec![
        Step::base(
            0,
            labels::IDENTIFY_RESTRICTIONS,
            "Find where the denominator is zero.",
            text(zeros_line),
            "The function is undefined exactly at the denominator's zeros.",
        ),
        Step::base(
            0,
            labels::FACTOR,
            "Classify each zero as a hole or an asymptote.",
            text(holes_line),
            "A zero shared with the numerator cancels and leaves a hole, not an asymptote.",
        ),
        Step::base(
            0,
            labels::ANALYZE_DEGREES,
            "Compare the degrees for end behavior.",
            text(degree_line),
            "The degree comparison is a three-way fork deciding the horizontal asymptote.",
        )
        .with_visual_hint("Sketch the asymptotes as dashed lines before plotting points."),
        Step::base(
            0,
            labels::RESULT,
            format!("Summarize the structure: {summary}."),
            text(summary),
            "Together these facts describe the whole graph's frame.",
        )
        .as_final(),
    ])
}

/// Fallback for a malformed analysis payload; keeps the generator total.
fn metric_steps_fallback(result: &Computed) -> Vec<Step> {
    renumber(vec![Step::base(
        0,
        labels::RESULT,
        format!("State the result: {}.", result_display(result)),
        text(result_display(result)),
        "Direct result.",
    )
    .as_final()])
}

/// Assign contiguous ordinals from 1.
fn renumber(mut steps: Vec<Step>) -> Vec<Step> {
    for (i, step) in steps.iter_mut().enumerate() {
        step.number = i + 1;
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tutor_catalog::Params;
    use tutor_solver::solve;

    fn solved(input: &str) -> (Problem, Solution) {
        let problem = Problem::resolve(input, None, None, Params::new(), BTreeMap::new()).unwrap();
        let solution = solve(problem.ty, &problem.params).unwrap();
        (problem, solution)
    }

    #[test]
    fn test_metric_sequence_shape() {
        let (problem, solution) = solved("Find the area of a triangle with base 6 and height 8.");
        let steps = generate(&problem, &solution);
        assert_eq!(steps.len(), 4);
        assert_eq!(
            steps.iter().map(|s| s.label.as_str()).collect::<Vec<_>>(),
            vec![
                labels::STATE_FORMULA,
                labels::SUBSTITUTE,
                labels::COMPUTE,
                labels::RESULT
            ]
        );
        assert!(steps.last().unwrap().final_answer);
        assert_eq!(steps.iter().filter(|s| s.final_answer).count(), 1);
    }

    #[test]
    fn test_ordinals_contiguous_from_one() {
        let (problem, solution) = solved("A right triangle has leg 5 and hypotenuse 13.");
        let steps = generate(&problem, &solution);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.number, i + 1);
        }
    }

    #[test]
    fn test_leg_case_includes_feasibility_step() {
        let (problem, solution) = solved("A right triangle has leg 5 and hypotenuse 13.");
        let steps = generate(&problem, &solution);
        assert!(steps.iter().any(|s| s.label == labels::CHECK_FEASIBILITY));
        assert_eq!(steps.len(), 5);
    }

    #[test]
    fn test_insufficient_has_no_final_answer() {
        let (problem, solution) = solved("Find the area of a triangle with base 6.");
        let steps = generate(&problem, &solution);
        assert!(steps.iter().all(|s| !s.final_answer));
    }

    #[test]
    fn test_equation_sequence() {
        let (problem, solution) = solved("Solve 1/(x - 2) = 3/(x + 2).");
        let steps = generate(&problem, &solution);
        assert_eq!(steps[0].label, labels::IDENTIFY_RESTRICTIONS);
        assert!(steps.last().unwrap().final_answer);
        assert!(steps
            .last()
            .unwrap()
            .description
            .contains("x = 4"));
    }

    #[test]
    fn test_base_steps_carry_no_enrichment() {
        let (problem, solution) = solved("Find the area of a circle with radius 5.");
        let steps = generate(&problem, &solution);
        for step in steps {
            assert!(step.renderings.is_none());
            assert!(step.error_prevention.is_none());
            assert!(step.scaffolding.is_none());
        }
    }
}
