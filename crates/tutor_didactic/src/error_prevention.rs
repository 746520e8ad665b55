//! Stage 4: error-prevention annotation.
//!
//! Per step: the lookup-keyed common-mistake list (problem type, then
//! step label; unmatched labels get an empty list, not a missing one), a
//! generated self-check question, and the type's troubleshooting tips.
//! Applies to steps only; bridges pass through untouched.

use crate::step::{ErrorPrevention, TraceItem};
use tutor_catalog::ProblemType;
use tutor_content::{labels, ContentDb};

fn self_check_for(label: &str) -> String {
    match label {
        labels::STATE_FORMULA => {
            "Does the formula you wrote match the quantity the problem asks for?".to_string()
        }
        labels::SUBSTITUTE => {
            "Did each number land on the symbol that names its measurement?".to_string()
        }
        labels::COMPUTE => "If you redo the arithmetic bottom-up, do you get the same value?"
            .to_string(),
        labels::RESULT | labels::STATE_SOLUTION => {
            "Is the answer in the units and form the question asked for?".to_string()
        }
        labels::IDENTIFY_RESTRICTIONS => {
            "Did you check every denominator, not just the first one?".to_string()
        }
        labels::CHECK_EXTRANEOUS => {
            "Did you test each candidate against the original equation, not the cleared one?"
                .to_string()
        }
        labels::FACTOR => "Does re-expanding your factors reproduce the original expression?"
            .to_string(),
        labels::CANCEL => "Did you cancel whole factors rather than individual terms?".to_string(),
        labels::FIND_LCD => "Does every denominator divide your common denominator?".to_string(),
        labels::COMBINE => "Did the denominators stay fixed while the numerators combined?"
            .to_string(),
        labels::CHECK_FEASIBILITY => {
            "Would the check still pass if the sides were labeled the other way around?".to_string()
        }
        labels::ANALYZE_DEGREES => {
            "Did you compare the degrees of the original, uncancelled polynomials?".to_string()
        }
        _ => "Re-read the step: does each claim follow from the one before it?".to_string(),
    }
}

/// Total pass over the trace; a new list is returned with every step
/// annotated and every bridge untouched.
pub fn annotate(items: Vec<TraceItem>, ty: ProblemType) -> Vec<TraceItem> {
    let db = ContentDb::global();
    items
        .into_iter()
        .map(|item| match item {
            TraceItem::Bridge(bridge) => TraceItem::Bridge(bridge),
            TraceItem::Step(mut step) => {
                step.error_prevention = Some(ErrorPrevention {
                    common_mistakes: db
                        .mistakes_for(ty, &step.label)
                        .iter()
                        .map(|m| m.to_string())
                        .collect(),
                    self_check: self_check_for(&step.label),
                    troubleshooting: db
                        .troubleshooting_for(ty)
                        .iter()
                        .map(|t| t.to_string())
                        .collect(),
                });
                TraceItem::Step(step)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{Step, StepExpression};

    fn step_with_label(label: &str) -> TraceItem {
        TraceItem::Step(Step::base(
            1,
            label,
            "",
            StepExpression::Text(String::new()),
            "",
        ))
    }

    #[test]
    fn test_known_label_gets_mistakes() {
        let items = annotate(
            vec![step_with_label(labels::SUBSTITUTE)],
            ProblemType::TriangleArea,
        );
        let ep = items[0].as_step().unwrap().error_prevention.as_ref().unwrap();
        assert!(!ep.common_mistakes.is_empty());
    }

    #[test]
    fn test_unmatched_label_gets_empty_present_list() {
        let items = annotate(
            vec![step_with_label("no-such-label")],
            ProblemType::TriangleArea,
        );
        let ep = items[0].as_step().unwrap().error_prevention.as_ref().unwrap();
        assert!(ep.common_mistakes.is_empty());
        assert!(!ep.self_check.is_empty());
    }

    #[test]
    fn test_bridges_pass_through_untouched() {
        let bridge = TraceItem::Bridge(crate::step::Bridge {
            from_step: 1,
            to_step: 2,
            text: "t".into(),
        });
        let items = annotate(vec![bridge.clone()], ProblemType::TriangleArea);
        assert_eq!(items[0], bridge);
    }
}
