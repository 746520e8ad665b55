//! Workbook section assembly: an ordered list of named sections, each a
//! list of label/value rows. Presentation-agnostic; fonts, colors and
//! canvas work belong to the external renderer.

use crate::options::{TutorOptions, VerificationDetail};
use tutor_catalog::Problem;
use tutor_content::ContentDb;
use tutor_didactic::TraceItem;
use tutor_math::format_number;
use tutor_solver::{Solution, SolutionValue, VerificationReport};

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub label: String,
    pub value: String,
}

impl Row {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Row {
        Row {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Stable machine name, e.g. "steps".
    pub name: &'static str,
    pub title: String,
    pub rows: Vec<Row>,
}

/// Assemble the ordered section list. Section order is fixed; flags only
/// decide presence, never position.
pub fn assemble(
    problem: &Problem,
    solution: &Solution,
    steps: &[TraceItem],
    verification: &VerificationReport,
    options: &TutorOptions,
) -> Vec<Section> {
    let db = ContentDb::global();
    let mut sections = Vec::new();

    sections.push(problem_section(problem));
    sections.push(steps_section(steps));
    sections.push(lesson_section(problem));
    sections.push(solution_section(solution));
    if let Some(section) = analysis_section(problem, solution, options) {
        sections.push(section);
    }
    sections.push(verification_section(verification, options));
    if options.include_pedagogical_notes {
        let notes = db.notes_for(problem.ty);
        if !notes.is_empty() {
            sections.push(Section {
                name: "pedagogical_notes",
                title: "Notes for the Teacher".to_string(),
                rows: notes
                    .iter()
                    .enumerate()
                    .map(|(i, n)| Row::new(format!("Note {}", i + 1), *n))
                    .collect(),
            });
        }
    }
    if options.include_alternative_methods {
        let alternatives = db.alternatives_for(problem.ty);
        if !alternatives.is_empty() {
            sections.push(Section {
                name: "alternatives",
                title: "Other Ways to Solve It".to_string(),
                rows: alternatives
                    .iter()
                    .enumerate()
                    .map(|(i, a)| Row::new(format!("Method {}", i + 1), *a))
                    .collect(),
            });
        }
    }
    sections
}

fn problem_section(problem: &Problem) -> Section {
    let mut rows = vec![
        Row::new("Problem", problem.raw_input.clone()),
        Row::new("Type", problem.ty.title()),
    ];
    if let Some(scenario) = &problem.scenario {
        rows.push(Row::new("Scenario", scenario.clone()));
    }
    for (key, value) in &problem.params {
        let rendered = match value {
            tutor_catalog::ParamValue::Number(n) => format_number(*n),
            tutor_catalog::ParamValue::Text(t) => t.clone(),
            tutor_catalog::ParamValue::Point(x, y) => {
                format!("({}, {})", format_number(*x), format_number(*y))
            }
        };
        rows.push(Row::new(format!("given: {key}"), rendered));
    }
    Section {
        name: "problem",
        title: "Problem Statement".to_string(),
        rows,
    }
}

fn steps_section(steps: &[TraceItem]) -> Section {
    let rows = steps
        .iter()
        .map(|item| match item {
            TraceItem::Step(step) => {
                let description = step
                    .adapted_description
                    .as_ref()
                    .unwrap_or(&step.description);
                Row::new(
                    format!("Step {}", step.number),
                    format!("{} | {}", description, step.expression.display()),
                )
            }
            TraceItem::Bridge(bridge) => Row::new("Bridge", bridge.text.clone()),
        })
        .collect();
    Section {
        name: "steps",
        title: "Solution Steps".to_string(),
        rows,
    }
}

fn lesson_section(problem: &Problem) -> Section {
    let mut rows = Vec::new();
    if let Some(theory) = ContentDb::global().theory(problem.ty) {
        rows.push(Row::new("Overview", theory.overview));
        for (label, formula) in theory.formulas {
            rows.push(Row::new(*label, *formula));
        }
    }
    Section {
        name: "lesson",
        title: "Lesson".to_string(),
        rows,
    }
}

fn solution_section(solution: &Solution) -> Section {
    let rows = match solution {
        Solution::Computed { result, .. } => {
            let mut rows = vec![Row::new("Formula", result.formula.clone())];
            match &result.value {
                SolutionValue::Number(n) => rows.push(Row::new("Result", format_number(*n))),
                SolutionValue::Point(x, y) => rows.push(Row::new(
                    "Result",
                    format!("({}, {})", format_number(*x), format_number(*y)),
                )),
                SolutionValue::Measures(measures) => {
                    for m in measures {
                        rows.push(Row::new(m.name, format_number(m.value)));
                    }
                }
                SolutionValue::Expression(e) => rows.push(Row::new("Result", e.clone())),
                SolutionValue::Roots(roots) => {
                    rows.push(Row::new(
                        "Solutions",
                        if roots.solutions.is_empty() {
                            "none found in the search set".to_string()
                        } else {
                            roots
                                .solutions
                                .iter()
                                .map(|x| format_number(*x))
                                .collect::<Vec<_>>()
                                .join(", ")
                        },
                    ));
                    if !roots.extraneous.is_empty() {
                        rows.push(Row::new(
                            "Extraneous",
                            roots
                                .extraneous
                                .iter()
                                .map(|x| format_number(*x))
                                .collect::<Vec<_>>()
                                .join(", "),
                        ));
                    }
                }
                SolutionValue::Analysis(report) => {
                    rows.push(Row::new("Simplified", report.simplified.clone()));
                    rows.push(Row::new(
                        "Vertical asymptotes",
                        if report.vertical_asymptotes.is_empty() {
                            "none".to_string()
                        } else {
                            report
                                .vertical_asymptotes
                                .iter()
                                .map(|x| format!("x = {}", format_number(*x)))
                                .collect::<Vec<_>>()
                                .join(", ")
                        },
                    ));
                    rows.push(Row::new(
                        "Horizontal asymptote",
                        match report.horizontal_asymptote {
                            Some(y) => format!("y = {}", format_number(y)),
                            None => "none".to_string(),
                        },
                    ));
                    if !report.holes.is_empty() {
                        rows.push(Row::new(
                            "Holes",
                            report
                                .holes
                                .iter()
                                .map(|x| format!("x = {}", format_number(*x)))
                                .collect::<Vec<_>>()
                                .join(", "),
                        ));
                    }
                }
            }
            if let Some(units) = &result.units {
                rows.push(Row::new("Units", units.clone()));
            }
            rows
        }
        Solution::InsufficientInformation { missing, .. } => vec![Row::new(
            "Outcome",
            format!("insufficient information; missing: {}", missing.join(", ")),
        )],
        Solution::InvalidGeometry { reason, .. } => {
            vec![Row::new("Outcome", format!("invalid geometry: {reason}"))]
        }
        Solution::Verification {
            consistent, detail, ..
        } => vec![
            Row::new(
                "Outcome",
                if *consistent {
                    "given values are consistent"
                } else {
                    "given values are inconsistent"
                },
            ),
            Row::new("Detail", detail.clone()),
        ],
    };
    Section {
        name: "solution",
        title: "Solution".to_string(),
        rows,
    }
}

/// Computation trace, extra properties, and (flag-gated) the common
/// mistakes for the problem type.
fn analysis_section(
    problem: &Problem,
    solution: &Solution,
    options: &TutorOptions,
) -> Option<Section> {
    let mut rows = Vec::new();
    if let Solution::Computed { result, .. } = solution {
        for line in &result.calculation {
            rows.push(Row::new("Work", line.clone()));
        }
        for (key, value) in &result.properties {
            rows.push(Row::new(key.clone(), value.clone()));
        }
        if let SolutionValue::Roots(roots) = &result.value {
            rows.push(Row::new(
                "Search exhaustive",
                if roots.exhaustive { "yes" } else { "no" },
            ));
        }
    }
    if options.include_common_mistakes {
        let db = ContentDb::global();
        let mut seen: Vec<&str> = Vec::new();
        for item_label in [
            "state-formula",
            "substitute",
            "compute",
            "identify-restrictions",
            "check-extraneous",
            "factor",
            "cancel",
            "find-lcd",
            "combine",
            "analyze-degrees",
        ] {
            for &mistake in db.mistakes_for(problem.ty, item_label) {
                if !seen.contains(&mistake) {
                    seen.push(mistake);
                    rows.push(Row::new("Common mistake", mistake));
                }
            }
        }
    }
    if rows.is_empty() {
        return None;
    }
    Some(Section {
        name: "analysis",
        title: "Analysis".to_string(),
        rows,
    })
}

fn verification_section(report: &VerificationReport, options: &TutorOptions) -> Section {
    let mut rows = vec![
        Row::new("Confidence", report.confidence.label()),
        Row::new("Summary", report.summary.clone()),
    ];
    if options.verification_detail == VerificationDetail::Detailed {
        for check in &report.checks {
            rows.push(Row::new("Check", check.clone()));
        }
    }
    Section {
        name: "verification",
        title: "Verification".to_string(),
        rows,
    }
}
