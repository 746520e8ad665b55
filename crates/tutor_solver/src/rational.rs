//! Rational-expression solvers.
//!
//! The equation solver is a bounded numeric search over a fixed candidate
//! set. It has no completeness guarantee; every root set it returns
//! carries `exhaustive: false`. Candidates that land on a domain
//! restriction are moved to the extraneous list, never reported as
//! solutions.

use crate::solution::{Computed, FunctionAnalysis, RootSet, Solution, SolutionValue};
use crate::SolverError;
use num_rational::BigRational;
use num_traits::ToPrimitive;
use tracing::trace;
use tutor_catalog::{get_text, Params, ProblemType};
use tutor_math::{approx_eq, format_number, parse_equation, parse_rational, RationalExpr};

/// The fixed candidate set: integers -20..=20 without 0, plus six
/// fractional probes.
pub fn candidates() -> Vec<BigRational> {
    let mut out: Vec<BigRational> = (-20i64..=20)
        .filter(|n| *n != 0)
        .map(|n| BigRational::from_integer(n.into()))
        .collect();
    for (n, d) in [(1i64, 2i64), (-1, 2), (1, 3), (-1, 3), (3, 2), (-3, 2)] {
        out.push(BigRational::new(n.into(), d.into()));
    }
    out
}

fn to_f64_list(values: &[BigRational]) -> Vec<f64> {
    let mut out: Vec<f64> = values.iter().filter_map(|v| v.to_f64()).collect();
    out.sort_by(|a, b| a.partial_cmp(b).expect("restriction values are finite"));
    out
}

fn restrictions_of(exprs: &[&RationalExpr]) -> Vec<BigRational> {
    let mut out: Vec<BigRational> = Vec::new();
    for expr in exprs {
        for root in expr.restrictions() {
            if !out.contains(&root) {
                out.push(root);
            }
        }
    }
    out.sort();
    out
}

fn describe_restrictions(values: &[BigRational]) -> String {
    if values.is_empty() {
        return "none".to_string();
    }
    values
        .iter()
        .filter_map(|v| v.to_f64())
        .map(|v| format!("x != {}", format_number(v)))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn equation(params: &Params) -> Result<Solution, SolverError> {
    let ty = ProblemType::RationalEquation;
    let Some(text) = get_text(params, "equation") else {
        return Ok(Solution::InsufficientInformation {
            ty,
            missing: vec!["equation"],
        });
    };
    let (lhs, rhs) = parse_equation(text)?;
    let restrictions = restrictions_of(&[&lhs, &rhs]);

    // Clear denominators by cross-multiplication; the bounded search runs
    // on the cleared sides so restricted candidates still evaluate.
    let cleared_l = &lhs.numer * &rhs.denom;
    let cleared_r = &rhs.numer * &lhs.denom;

    let mut accepted: Vec<BigRational> = Vec::new();
    for candidate in candidates() {
        let Some(x) = candidate.to_f64() else {
            continue;
        };
        let lv = cleared_l.eval_f64(x);
        let rv = cleared_r.eval_f64(x);
        // Evaluation failures exclude the candidate, nothing more.
        if !lv.is_finite() || !rv.is_finite() {
            continue;
        }
        if approx_eq(lv, rv) {
            trace!(candidate = x, "candidate satisfies cleared equation");
            accepted.push(candidate);
        }
    }

    let (extraneous, solutions): (Vec<BigRational>, Vec<BigRational>) = accepted
        .into_iter()
        .partition(|candidate| restrictions.contains(candidate));

    let roots = RootSet {
        solutions: to_f64_list(&solutions),
        extraneous: to_f64_list(&extraneous),
        exhaustive: false,
    };
    let calculation = vec![
        format!("Domain restrictions: {}", describe_restrictions(&restrictions)),
        format!("Cross-multiplied: {} = {}", cleared_l, cleared_r),
        match roots.solutions.len() {
            0 => "No candidate in the search set satisfies the equation.".to_string(),
            _ => format!(
                "x = {}",
                roots
                    .solutions
                    .iter()
                    .map(|x| format_number(*x))
                    .collect::<Vec<_>>()
                    .join(", x = ")
            ),
        },
    ];
    Ok(Solution::Computed {
        ty,
        result: Computed {
            value: SolutionValue::Roots(roots),
            formula: format!("{} = {}", lhs, rhs),
            calculation,
            units: None,
            properties: vec![(
                "restrictions".to_string(),
                describe_restrictions(&restrictions),
            )],
        },
    })
}

pub fn simplify(params: &Params) -> Result<Solution, SolverError> {
    let ty = ProblemType::SimplifyRational;
    let Some(text) = get_text(params, "expression") else {
        return Ok(Solution::InsufficientInformation {
            ty,
            missing: vec!["expression"],
        });
    };
    let expr = parse_rational(text)?;
    let restrictions = restrictions_of(&[&expr]);
    let (reduced, cancelled) = expr.simplified();

    let mut calculation = Vec::new();
    if cancelled.is_one() {
        calculation.push(format!("{} is already in lowest terms.", expr));
    } else {
        calculation.push(format!(
            "Numerator: {} = ({}) * ({})",
            expr.numer, cancelled, reduced.numer
        ));
        calculation.push(format!(
            "Denominator: {} = ({}) * ({})",
            expr.denom, cancelled, reduced.denom
        ));
        calculation.push(format!("Cancel the common factor ({cancelled})."));
    }
    calculation.push(format!("Result: {}", reduced));

    Ok(Solution::Computed {
        ty,
        result: Computed {
            value: SolutionValue::Expression(reduced.to_string()),
            formula: expr.to_string(),
            calculation,
            units: None,
            properties: vec![
                ("cancelled_factor".to_string(), cancelled.to_string()),
                (
                    "restrictions".to_string(),
                    describe_restrictions(&restrictions),
                ),
            ],
        },
    })
}

pub fn add(params: &Params) -> Result<Solution, SolverError> {
    let ty = ProblemType::AddRational;
    let Some(text) = get_text(params, "expression") else {
        return Ok(Solution::InsufficientInformation {
            ty,
            missing: vec!["expression"],
        });
    };
    // The parser already combines the sum over a common denominator.
    let combined = parse_rational(text)?;
    let restrictions = restrictions_of(&[&combined]);
    let (reduced, cancelled) = combined.simplified();

    let mut calculation = vec![format!(
        "Common denominator: {}",
        combined.denom
    )];
    calculation.push(format!("Combined: {}", combined));
    if !cancelled.is_one() {
        calculation.push(format!("Cancel the common factor ({cancelled})."));
    }
    calculation.push(format!("Result: {}", reduced));

    Ok(Solution::Computed {
        ty,
        result: Computed {
            value: SolutionValue::Expression(reduced.to_string()),
            formula: text.to_string(),
            calculation,
            units: None,
            properties: vec![(
                "restrictions".to_string(),
                describe_restrictions(&restrictions),
            )],
        },
    })
}

pub fn analysis(params: &Params) -> Result<Solution, SolverError> {
    let ty = ProblemType::RationalFunctionAnalysis;
    let Some(text) = get_text(params, "function") else {
        return Ok(Solution::InsufficientInformation {
            ty,
            missing: vec!["function"],
        });
    };
    // Accept an optional "f(x) =" / "y =" head.
    let body = match text.rfind('=') {
        Some(pos) => text[pos + 1..].trim(),
        None => text,
    };
    let expr = parse_rational(body)?;
    let (reduced, cancelled) = expr.simplified();

    let restrictions = to_f64_list(&expr.restrictions());
    let holes = to_f64_list(&cancelled.rational_roots());
    let vertical = to_f64_list(&reduced.denom.rational_roots());
    let horizontal = expr.horizontal_asymptote();

    let report = FunctionAnalysis {
        function: expr.to_string(),
        simplified: reduced.to_string(),
        restrictions: restrictions.clone(),
        vertical_asymptotes: vertical.clone(),
        holes: holes.clone(),
        horizontal_asymptote: horizontal,
        numer_degree: expr.numer.degree(),
        denom_degree: expr.denom.degree(),
    };

    let degree_line = {
        let n = report.numer_degree;
        let d = report.denom_degree;
        if n < d {
            format!("deg(numerator) = {n} < deg(denominator) = {d}: horizontal asymptote y = 0")
        } else if n == d {
            format!(
                "deg(numerator) = deg(denominator) = {n}: horizontal asymptote y = {}",
                horizontal.map(format_number).unwrap_or_default()
            )
        } else {
            format!("deg(numerator) = {n} > deg(denominator) = {d}: no horizontal asymptote")
        }
    };
    let calculation = vec![
        format!(
            "Denominator zeros: {}",
            if restrictions.is_empty() {
                "none".to_string()
            } else {
                restrictions
                    .iter()
                    .map(|x| format_number(*x))
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        ),
        format!(
            "Holes (cancelled factors): {}",
            if holes.is_empty() {
                "none".to_string()
            } else {
                holes
                    .iter()
                    .map(|x| format_number(*x))
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        ),
        degree_line,
    ];

    Ok(Solution::Computed {
        ty,
        result: Computed {
            value: SolutionValue::Analysis(report),
            formula: expr.to_string(),
            calculation,
            units: None,
            properties: Vec::new(),
        },
    })
}

/// Shared by the solver and the verification module: evaluate both
/// original sides at `x`, `None` when either side is undefined there.
pub fn eval_both_sides(lhs: &RationalExpr, rhs: &RationalExpr, x: f64) -> Option<(f64, f64)> {
    Some((lhs.eval_f64(x)?, rhs.eval_f64(x)?))
}
