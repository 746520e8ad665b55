//! Stage 2: adaptive explanation enhancement.
//!
//! Attaches four parallel renderings per step, a vocabulary-adapted
//! description/reasoning for the configured level, and a back-reference
//! to the previous step. Skipped entirely at the basic level.

use crate::step::{ExplanationLevel, Renderings, Step};
use crate::vocabulary;
use tutor_catalog::ProblemType;
use tutor_content::labels;

fn conceptual_for(label: &str, ty: ProblemType) -> String {
    let title = ty.title().to_lowercase();
    match label {
        labels::STATE_FORMULA => format!(
            "Every {title} problem is an instance of one fixed relationship; naming it first \
             turns the problem into fill-in-the-blanks."
        ),
        labels::SUBSTITUTE => "Substitution converts a general law into a statement about this \
             specific figure."
            .to_string(),
        labels::COMPUTE => "Once every quantity is numeric, the remaining work is arithmetic \
             with no decisions left."
            .to_string(),
        labels::RESULT | labels::STATE_SOLUTION => {
            "A result is only an answer once it is attached to what was asked.".to_string()
        }
        labels::IDENTIFY_RESTRICTIONS => "The domain is part of the expression's identity; \
             losing a restriction changes which function is being discussed."
            .to_string(),
        labels::CHECK_EXTRANEOUS => "Transforming an equation can enlarge its solution set; \
             checking against the original domain shrinks it back."
            .to_string(),
        labels::FACTOR => "Factored form exposes structure that the expanded form hides."
            .to_string(),
        labels::CANCEL => "Cancellation is division of both top and bottom by the same \
             nonzero quantity."
            .to_string(),
        labels::FIND_LCD | labels::COMBINE => "A common denominator puts both fractions on \
             the same scale so their parts can be counted together."
            .to_string(),
        labels::CHECK_FEASIBILITY => "Checking feasibility first guarantees the upcoming \
             arithmetic describes a real figure."
            .to_string(),
        labels::ANALYZE_DEGREES => "For large inputs only the leading terms matter; the \
             degree comparison captures that."
            .to_string(),
        _ => format!("This step moves the {title} problem one stage closer to its answer."),
    }
}

fn procedural_for(step: &Step) -> String {
    format!(
        "Perform: {}. Concretely: {}",
        step.description,
        step.expression.display()
    )
}

fn visual_for(step: &Step) -> String {
    step.visual_hint
        .clone()
        .unwrap_or_else(|| "Write the expression on its own line and box the quantity that changes.".to_string())
}

/// Total pass over the step list; returns a new list with enrichment
/// fields filled. Base fields are copied unchanged.
pub fn apply(steps: &[Step], level: ExplanationLevel, ty: ProblemType) -> Vec<Step> {
    let mut out = Vec::with_capacity(steps.len());
    let mut previous: Option<usize> = None;
    for step in steps {
        let mut enhanced = step.clone();
        enhanced.renderings = Some(Renderings {
            conceptual: conceptual_for(&step.label, ty),
            procedural: procedural_for(step),
            visual: visual_for(step),
            algebraic: step.expression.display(),
        });
        enhanced.adapted_description = Some(vocabulary::adapt(&step.description, level));
        enhanced.adapted_reasoning = Some(vocabulary::adapt(&step.reasoning, level));
        enhanced.follows_from = previous;
        previous = Some(step.number);
        out.push(enhanced);
    }
    out
}
