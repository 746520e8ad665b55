//! The configured engine instance and its `solve()` entry point.

use crate::diagram::{diagram_for, DiagramSpec};
use crate::error::TutorError;
use crate::options::TutorOptions;
use crate::sections::{assemble, Section};
use std::collections::BTreeMap;
use tracing::{debug, info};
use tutor_catalog::{catalog, Params, Problem, ProblemType};
use tutor_content::{labels, ContentDb};
use tutor_didactic::{synthesize, Step, StepExpression, TraceItem};
use tutor_solver::{verify, Solution, VerificationReport};

/// One call's worth of input.
#[derive(Debug, Clone, Default)]
pub struct SolveRequest {
    pub problem: String,
    pub scenario: Option<String>,
    pub parameters: Params,
    /// Trusted-caller escape hatch; an unregistered name falls back to
    /// pattern classification.
    pub problem_type: Option<String>,
    pub context: BTreeMap<String, String>,
}

impl SolveRequest {
    pub fn for_text(problem: impl Into<String>) -> SolveRequest {
        SolveRequest {
            problem: problem.into(),
            ..SolveRequest::default()
        }
    }
}

/// Everything a single `solve()` call produces. Created and consumed
/// within that call; nothing persists on the tutor itself.
#[derive(Debug, Clone)]
pub struct Solved {
    pub problem: Problem,
    pub solution: Solution,
    pub steps: Vec<TraceItem>,
    pub sections: Vec<Section>,
    pub diagram: Option<DiagramSpec>,
    pub verification: VerificationReport,
}

/// A configured tutor. Stateless across calls: the options and the
/// shared lookup tables are frozen at construction, so one instance may
/// serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Tutor {
    options: TutorOptions,
}

impl Tutor {
    pub fn new(options: TutorOptions) -> Tutor {
        // Force both process-wide tables to build now rather than inside
        // the first call.
        let _ = catalog();
        let _ = ContentDb::global();
        Tutor { options }
    }

    pub fn options(&self) -> &TutorOptions {
        &self.options
    }

    /// Run the full pipeline. Fatal failures abort the call; partial
    /// results are never returned.
    pub fn solve(&self, request: &SolveRequest) -> Result<Solved, TutorError> {
        let explicit = request
            .problem_type
            .as_deref()
            .and_then(ProblemType::from_name);
        let problem = Problem::resolve(
            &request.problem,
            request.scenario.as_deref(),
            explicit,
            request.parameters.clone(),
            request.context.clone(),
        )?;
        debug!(ty = %problem.ty, "problem resolved");

        let solution =
            tutor_solver::solve(problem.ty, &problem.params).map_err(|source| {
                TutorError::Solver {
                    ty: problem.ty.name().to_string(),
                    input: request.problem.clone(),
                    source,
                }
            })?;

        let mut steps = synthesize(&problem, &solution, &self.options.to_synthesis_options());
        let verification = verify(&problem, &solution);
        if self.options.include_verification_in_steps {
            steps.push(verification_step(&steps, &verification));
        }

        let sections = assemble(&problem, &solution, &steps, &verification, &self.options);
        let diagram = diagram_for(&problem);
        info!(
            ty = %problem.ty,
            steps = steps.len(),
            confidence = verification.confidence.label(),
            "solve complete"
        );
        Ok(Solved {
            problem,
            solution,
            steps,
            sections,
            diagram,
            verification,
        })
    }
}

impl Default for Tutor {
    fn default() -> Self {
        Tutor::new(TutorOptions::default())
    }
}

/// The appended verification step continues the ordinal sequence and is
/// never the final answer.
fn verification_step(steps: &[TraceItem], report: &VerificationReport) -> TraceItem {
    let next = steps
        .iter()
        .filter_map(|i| i.as_step().map(|s| s.number))
        .max()
        .unwrap_or(0)
        + 1;
    TraceItem::Step(Step::base(
        next,
        labels::RESULT,
        format!("Check the answer (confidence: {}).", report.confidence.label()),
        StepExpression::Text(report.summary.clone()),
        "Substituting the result back into the defining relationship guards against slips.",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_is_stateless_across_calls() {
        let tutor = Tutor::default();
        let request = SolveRequest::for_text("Find the area of a triangle with base 6 and height 8.");
        let first = tutor.solve(&request).unwrap();
        let second = tutor.solve(&request).unwrap();
        assert_eq!(first.solution, second.solution);
        assert_eq!(first.steps, second.steps);
    }

    #[test]
    fn test_verification_step_appended_when_enabled() {
        let mut options = TutorOptions::default();
        options.include_verification_in_steps = true;
        let tutor = Tutor::new(options);
        let solved = tutor
            .solve(&SolveRequest::for_text(
                "Find the area of a triangle with base 6 and height 8.",
            ))
            .unwrap();
        let last = solved.steps.last().unwrap().as_step().unwrap();
        assert!(last.description.contains("confidence"));
        assert!(!last.final_answer);
        // Ordinals stay contiguous including the appended step.
        let ordinals: Vec<usize> = solved
            .steps
            .iter()
            .filter_map(|i| i.as_step().map(|s| s.number))
            .collect();
        let expected: Vec<usize> = (1..=ordinals.len()).collect();
        assert_eq!(ordinals, expected);
    }

    #[test]
    fn test_unknown_explicit_type_falls_back_to_patterns() {
        let tutor = Tutor::default();
        let mut request = SolveRequest::for_text("Find the area of a circle with radius 5.");
        request.problem_type = Some("no_such_type".to_string());
        let solved = tutor.solve(&request).unwrap();
        assert_eq!(solved.problem.ty, ProblemType::CircleMeasures);
    }

    #[test]
    fn test_explicit_type_bypasses_classification() {
        let tutor = Tutor::default();
        let mut request = SolveRequest::for_text("some text with a radius 5 in it");
        request.problem_type = Some("circle_measures".to_string());
        let solved = tutor.solve(&request).unwrap();
        assert_eq!(solved.problem.ty, ProblemType::CircleMeasures);
    }
}
