//! Conversions from engine types to the transport DTOs.

use tutor_api_models as api;
use tutor_catalog::ParamValue;
use tutor_didactic::{Step, StepExpression, TraceItem};
use tutor_engine::Solved;
use tutor_solver::{Solution, SolutionValue};

fn param_display(value: &ParamValue) -> String {
    match value {
        ParamValue::Number(n) => format!("{n}"),
        ParamValue::Text(t) => t.clone(),
        ParamValue::Point(x, y) => format!("({x}, {y})"),
    }
}

fn solution_json(solution: &Solution) -> api::SolutionJson {
    match solution {
        Solution::Computed { result, .. } => {
            let mut number = None;
            let mut point = None;
            let mut measures = Vec::new();
            let mut roots = None;
            let mut expression = None;
            let mut analysis = None;
            match &result.value {
                SolutionValue::Number(n) => number = Some(*n),
                SolutionValue::Point(x, y) => point = Some((*x, *y)),
                SolutionValue::Measures(list) => {
                    measures = list
                        .iter()
                        .map(|m| api::MeasureJson {
                            name: m.name.to_string(),
                            value: m.value,
                            formula: m.formula.to_string(),
                        })
                        .collect();
                }
                SolutionValue::Roots(set) => {
                    roots = Some(api::RootSetJson {
                        solutions: set.solutions.clone(),
                        extraneous: set.extraneous.clone(),
                        exhaustive: set.exhaustive,
                    });
                }
                SolutionValue::Expression(e) => expression = Some(e.clone()),
                SolutionValue::Analysis(report) => {
                    analysis = Some(api::AnalysisJson {
                        function: report.function.clone(),
                        simplified: report.simplified.clone(),
                        restrictions: report.restrictions.clone(),
                        vertical_asymptotes: report.vertical_asymptotes.clone(),
                        holes: report.holes.clone(),
                        horizontal_asymptote: report.horizontal_asymptote,
                        numer_degree: report.numer_degree,
                        denom_degree: report.denom_degree,
                    });
                }
            }
            api::SolutionJson::Computed {
                number,
                point,
                measures,
                roots,
                expression,
                analysis,
                formula: result.formula.clone(),
                calculation: result.calculation.clone(),
                units: result.units.clone(),
                properties: result.properties.clone(),
            }
        }
        Solution::InsufficientInformation { missing, .. } => {
            api::SolutionJson::InsufficientInformation {
                missing: missing.iter().map(|m| m.to_string()).collect(),
            }
        }
        Solution::InvalidGeometry { reason, .. } => api::SolutionJson::InvalidGeometry {
            reason: reason.clone(),
        },
        Solution::Verification {
            consistent,
            expected,
            actual,
            detail,
            ..
        } => api::SolutionJson::Verification {
            consistent: *consistent,
            expected: *expected,
            actual: *actual,
            detail: detail.clone(),
        },
    }
}

fn step_json(step: &Step) -> api::StepJson {
    api::StepJson {
        number: step.number,
        label: step.label.clone(),
        description: step.description.clone(),
        expression: match &step.expression {
            StepExpression::Text(text) => text.clone(),
            transition => transition.display(),
        },
        reasoning: step.reasoning.clone(),
        rule: step.rule.clone(),
        visual_hint: step.visual_hint.clone(),
        final_answer: step.final_answer,
        renderings: step.renderings.as_ref().map(|r| api::RenderingsJson {
            conceptual: r.conceptual.clone(),
            procedural: r.procedural.clone(),
            visual: r.visual.clone(),
            algebraic: r.algebraic.clone(),
        }),
        adapted_description: step.adapted_description.clone(),
        adapted_reasoning: step.adapted_reasoning.clone(),
        follows_from: step.follows_from,
        error_prevention: step.error_prevention.as_ref().map(|ep| {
            api::ErrorPreventionJson {
                common_mistakes: ep.common_mistakes.clone(),
                self_check: ep.self_check.clone(),
                troubleshooting: ep.troubleshooting.clone(),
            }
        }),
        scaffolding: step.scaffolding.as_ref().map(|s| api::ScaffoldingJson {
            guiding_questions: s.guiding_questions.clone(),
            substeps: s.substeps.clone(),
            hints: s.hints.clone(),
            alternative_methods: s.alternative_methods.clone(),
        }),
    }
}

/// Build the complete JSON response for a solved problem.
pub fn to_json(solved: &Solved) -> api::SolvedJson {
    api::SolvedJson {
        schema_version: api::SCHEMA_VERSION,
        problem: api::ProblemJson {
            problem_type: solved.problem.ty.name().to_string(),
            raw_input: solved.problem.raw_input.clone(),
            normalized_input: solved.problem.normalized_input.clone(),
            parameters: solved
                .problem
                .params
                .iter()
                .map(|(k, v)| (k.clone(), param_display(v)))
                .collect(),
            scenario: solved.problem.scenario.clone(),
        },
        solution: solution_json(&solved.solution),
        steps: solved
            .steps
            .iter()
            .map(|item| match item {
                TraceItem::Step(step) => api::TraceItemJson::Step(step_json(step)),
                TraceItem::Bridge(bridge) => api::TraceItemJson::Bridge(api::BridgeJson {
                    from_step: bridge.from_step,
                    to_step: bridge.to_step,
                    text: bridge.text.clone(),
                }),
            })
            .collect(),
        sections: solved
            .sections
            .iter()
            .map(|section| api::SectionJson {
                name: section.name.to_string(),
                title: section.title.clone(),
                rows: section
                    .rows
                    .iter()
                    .map(|row| api::RowJson {
                        label: row.label.clone(),
                        value: row.value.clone(),
                    })
                    .collect(),
            })
            .collect(),
        diagram: solved.diagram.as_ref().map(|d| api::DiagramJson {
            kind: format!("{:?}", d.kind),
            measures: d.measures.clone(),
        }),
        verification: api::VerificationJson {
            confidence: solved.verification.confidence.label().to_string(),
            summary: solved.verification.summary.clone(),
            checks: solved.verification.checks.clone(),
        },
    }
}
