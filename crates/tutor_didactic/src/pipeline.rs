//! The fixed-order synthesis pipeline.
//!
//! Stage order is part of the contract:
//! 1. base generation (always)
//! 2. adaptive enhancement (skipped iff level = basic)
//! 3. bridge insertion (gated by the connective-explanations flag, reads
//!    stage-2 output)
//! 4. error-prevention annotation (gated; steps only)
//! 5. scaffolding expansion (only at the scaffolded level; steps only)
//!
//! Every stage is a total pass producing a new list; no stage observes
//! another step's in-progress transformation.

use crate::step::{ExplanationLevel, TraceItem};
use crate::{base, bridges, enhance, error_prevention, scaffolding};
use tracing::debug;
use tutor_catalog::Problem;
use tutor_solver::Solution;

/// Pipeline configuration, derived from the engine's construction-time
/// options.
#[derive(Debug, Clone, Copy, Default)]
pub struct SynthesisOptions {
    pub level: ExplanationLevel,
    /// Gates stage 3 (bridges between adjacent steps).
    pub conceptual_connections: bool,
    /// Gates stage 4 (mistake lists, self-checks, troubleshooting).
    pub error_prevention: bool,
}

/// Synthesize the explanation trace for a solved problem.
pub fn synthesize(
    problem: &Problem,
    solution: &Solution,
    options: &SynthesisOptions,
) -> Vec<TraceItem> {
    // Stage 1: always.
    let steps = base::generate(problem, solution);
    debug!(ty = %problem.ty, steps = steps.len(), "base steps generated");

    // Stage 2: skipped iff basic.
    let steps = if options.level == ExplanationLevel::Basic {
        steps
    } else {
        enhance::apply(&steps, options.level, problem.ty)
    };

    // Stage 3: bridges read the enhanced steps.
    let items: Vec<TraceItem> = if options.conceptual_connections {
        bridges::insert(steps)
    } else {
        steps.into_iter().map(TraceItem::Step).collect()
    };

    // Stage 4: steps only.
    let items = if options.error_prevention {
        error_prevention::annotate(items, problem.ty)
    } else {
        items
    };

    // Stage 5: steps only, scaffolded level only.
    if options.level == ExplanationLevel::Scaffolded {
        scaffolding::expand(items, problem.ty)
    } else {
        items
    }
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

    const TRIANGLE: &str = "Find the area of a triangle with base 6 and height 8.";

    #[test]
    fn test_disabled_pipeline_equals_base_output() {
        let (problem, solution) = solved(TRIANGLE);
        let options = SynthesisOptions {
            level: ExplanationLevel::Basic,
            conceptual_connections: false,
            error_prevention: false,
        };
        let items = synthesize(&problem, &solution, &options);
        let raw = base::generate(&problem, &solution);
        assert_eq!(items.len(), raw.len());
        for (item, step) in items.iter().zip(&raw) {
            assert_eq!(item.as_step().unwrap(), step, "field-for-field equality");
        }
    }

    #[test]
    fn test_bridge_count_with_n_base_steps() {
        let (problem, solution) = solved(TRIANGLE);
        let n = base::generate(&problem, &solution).len();
        let options = SynthesisOptions {
            level: ExplanationLevel::Detailed,
            conceptual_connections: true,
            error_prevention: false,
        };
        let items = synthesize(&problem, &solution, &options);
        assert_eq!(items.len(), 2 * n - 1);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.is_bridge(), i % 2 == 1);
        }
    }

    #[test]
    fn test_stage_four_never_touches_bridges() {
        let (problem, solution) = solved(TRIANGLE);
        let options = SynthesisOptions {
            level: ExplanationLevel::Scaffolded,
            conceptual_connections: true,
            error_prevention: true,
        };
        let items = synthesize(&problem, &solution, &options);
        for item in items {
            match item {
                TraceItem::Step(step) => {
                    assert!(step.error_prevention.is_some());
                    assert!(step.scaffolding.is_some());
                    assert!(step.renderings.is_some());
                }
                TraceItem::Bridge(_) => {
                    // Bridges have no enrichment fields at all; their type
                    // makes stage 4/5 exclusion structural.
                }
            }
        }
    }

    #[test]
    fn test_ordinals_ignore_bridges() {
        let (problem, solution) = solved("Solve 1/(x - 2) = 3/(x + 2).");
        let options = SynthesisOptions {
            level: ExplanationLevel::Intermediate,
            conceptual_connections: true,
            error_prevention: false,
        };
        let items = synthesize(&problem, &solution, &options);
        let ordinals: Vec<usize> = items
            .iter()
            .filter_map(|i| i.as_step().map(|s| s.number))
            .collect();
        let expected: Vec<usize> = (1..=ordinals.len()).collect();
        assert_eq!(ordinals, expected);
    }

    #[test]
    fn test_exactly_one_final_answer_on_success() {
        let (problem, solution) = solved(TRIANGLE);
        let options = SynthesisOptions {
            level: ExplanationLevel::Scaffolded,
            conceptual_connections: true,
            error_prevention: true,
        };
        let items = synthesize(&problem, &solution, &options);
        let finals = items
            .iter()
            .filter_map(|i| i.as_step())
            .filter(|s| s.final_answer)
            .count();
        assert_eq!(finals, 1);
    }

    #[test]
    fn test_basic_level_skips_enhancement_even_with_bridges() {
        let (problem, solution) = solved(TRIANGLE);
        let options = SynthesisOptions {
            level: ExplanationLevel::Basic,
            conceptual_connections: true,
            error_prevention: false,
        };
        let items = synthesize(&problem, &solution, &options);
        for item in &items {
            if let Some(step) = item.as_step() {
                assert!(step.renderings.is_none());
                assert!(step.adapted_description.is_none());
            }
        }
        // Bridges still appear: the flags are independent.
        assert!(items.iter().any(|i| i.is_bridge()));
    }
}
