//! Stage 3: bridge insertion.
//!
//! One bridge between every adjacent pair of already-enhanced steps,
//! explaining the transition. Bridges carry no ordinal and are excluded
//! from all later stages.

use crate::step::{Bridge, Step, TraceItem};
use tutor_content::labels;

fn bridge_text(from: &Step, to: &Step) -> String {
    match (from.label.as_str(), to.label.as_str()) {
        (labels::STATE_FORMULA, labels::SUBSTITUTE) => {
            "With the formula chosen, the known values can take the places of its symbols."
                .to_string()
        }
        (labels::SUBSTITUTE, labels::COMPUTE) => {
            "Every symbol now has a number, so the expression can simply be evaluated.".to_string()
        }
        (labels::COMPUTE, labels::RESULT) => {
            "The arithmetic has settled the value; all that remains is to state it as the answer."
                .to_string()
        }
        (labels::STATE_FORMULA, labels::CHECK_FEASIBILITY) => {
            "Before solving, the inputs must be checked against what the formula assumes."
                .to_string()
        }
        (labels::CHECK_FEASIBILITY, labels::SUBSTITUTE) => {
            "The inputs are feasible, so substitution can proceed safely.".to_string()
        }
        (labels::IDENTIFY_RESTRICTIONS, labels::FIND_CANDIDATES) => {
            "With the forbidden values recorded, the equation itself can be attacked.".to_string()
        }
        (labels::FIND_CANDIDATES, labels::CHECK_EXTRANEOUS) => {
            "Each surviving candidate must now face the restrictions found at the start."
                .to_string()
        }
        (labels::CHECK_EXTRANEOUS, labels::STATE_SOLUTION) => {
            "What remains after the rejection test is the actual solution set.".to_string()
        }
        (labels::FACTOR, labels::CANCEL) => {
            "Factoring has exposed the shared pieces; now they can be cancelled.".to_string()
        }
        (labels::IDENTIFY_RESTRICTIONS, labels::FIND_LCD) => {
            "Knowing where the denominators vanish, a common denominator can be built.".to_string()
        }
        (labels::FIND_LCD, labels::COMBINE) => {
            "Over one shared denominator, the numerators are ready to merge.".to_string()
        }
        _ => format!(
            "Step {} hands its result directly to step {}.",
            from.number, to.number
        ),
    }
}

/// Total pass: wraps steps into trace items with a bridge between each
/// adjacent pair. N steps in, 2N-1 items out.
pub fn insert(steps: Vec<Step>) -> Vec<TraceItem> {
    let mut out: Vec<TraceItem> = Vec::with_capacity(steps.len() * 2);
    for step in steps {
        let bridge = match out.last() {
            Some(TraceItem::Step(previous)) => Some(Bridge {
                from_step: previous.number,
                to_step: step.number,
                text: bridge_text(previous, &step),
            }),
            _ => None,
        };
        if let Some(bridge) = bridge {
            out.push(TraceItem::Bridge(bridge));
        }
        out.push(TraceItem::Step(step));
    }
    out
}
