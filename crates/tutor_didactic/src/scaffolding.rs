//! Stage 5: scaffolding expansion, applied only at the scaffolded level.
//!
//! Attaches guiding questions, a sub-step breakdown, four graduated
//! hints of increasing specificity, and alternative-method suggestions.
//! Steps only; bridges are never touched.

use crate::step::{Scaffolding, Step, StepExpression, TraceItem};
use tutor_catalog::ProblemType;
use tutor_content::{labels, ContentDb};

fn guiding_questions(step: &Step) -> Vec<String> {
    match step.label.as_str() {
        labels::STATE_FORMULA => vec![
            "What quantity is the problem asking for?".to_string(),
            "Which formula produces exactly that quantity?".to_string(),
        ],
        labels::SUBSTITUTE => vec![
            "Which given number matches which symbol?".to_string(),
            "Is any symbol still without a value?".to_string(),
        ],
        labels::COMPUTE => vec![
            "Which operation comes first under the order of operations?".to_string(),
            "Can you estimate the answer before computing it exactly?".to_string(),
        ],
        labels::IDENTIFY_RESTRICTIONS => vec![
            "Where is each denominator equal to zero?".to_string(),
            "Why are those values off-limits?".to_string(),
        ],
        labels::CHECK_EXTRANEOUS => vec![
            "Which candidates touch a restricted value?".to_string(),
            "What happens if you substitute one into the original equation?".to_string(),
        ],
        labels::FACTOR => vec![
            "What factoring pattern fits (difference of squares, common factor, trinomial)?"
                .to_string(),
        ],
        _ => vec!["What does this step accomplish toward the final answer?".to_string()],
    }
}

/// Break a step into smaller actions a student can follow one at a time.
fn substeps(step: &Step) -> Vec<String> {
    match &step.expression {
        StepExpression::Transition {
            before,
            operation,
            after,
        } => vec![
            format!("Write down the starting expression: {before}"),
            format!("Apply: {operation}"),
            format!("Check the result matches: {after}"),
        ],
        StepExpression::Text(line) => vec![
            "Copy the expression onto its own line.".to_string(),
            format!("Work left to right: {line}"),
            "Compare what changed against the previous step.".to_string(),
        ],
    }
}

/// Four hints of increasing specificity, the last nearly the answer.
fn hints(step: &Step) -> Vec<String> {
    vec![
        "Look back at the previous step; what does it leave you holding?".to_string(),
        format!("This step is about: {}.", step.description),
        format!("The reasoning is: {}", step.reasoning),
        format!("Concretely: {}.", step.expression.display()),
    ]
}

/// Total pass; returns a new list with every step expanded and every
/// bridge untouched.
pub fn expand(items: Vec<TraceItem>, ty: ProblemType) -> Vec<TraceItem> {
    let db = ContentDb::global();
    items
        .into_iter()
        .map(|item| match item {
            TraceItem::Bridge(bridge) => TraceItem::Bridge(bridge),
            TraceItem::Step(mut step) => {
                step.scaffolding = Some(Scaffolding {
                    guiding_questions: guiding_questions(&step),
                    substeps: substeps(&step),
                    hints: hints(&step),
                    alternative_methods: db
                        .alternatives_for(ty)
                        .iter()
                        .map(|a| a.to_string())
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

    fn step() -> TraceItem {
        TraceItem::Step(Step::base(
            1,
            labels::COMPUTE,
            "Carry out the arithmetic.",
            StepExpression::Transition {
                before: "A = (1/2) * 6 * 8".into(),
                operation: "evaluate".into(),
                after: "A = 24".into(),
            },
            "Only arithmetic remains.",
        ))
    }

    #[test]
    fn test_four_graduated_hints() {
        let items = expand(vec![step()], ProblemType::TriangleArea);
        let scaffolding = items[0].as_step().unwrap().scaffolding.as_ref().unwrap();
        assert_eq!(scaffolding.hints.len(), 4);
        // The last hint is the most specific: it contains the actual math.
        assert!(scaffolding.hints[3].contains("A = 24"));
    }

    #[test]
    fn test_substeps_follow_the_transition() {
        let items = expand(vec![step()], ProblemType::TriangleArea);
        let scaffolding = items[0].as_step().unwrap().scaffolding.as_ref().unwrap();
        assert_eq!(scaffolding.substeps.len(), 3);
    }

    #[test]
    fn test_bridges_not_expanded() {
        let bridge = TraceItem::Bridge(crate::step::Bridge {
            from_step: 1,
            to_step: 2,
            text: "t".into(),
        });
        let items = expand(vec![bridge.clone()], ProblemType::TriangleArea);
        assert_eq!(items[0], bridge);
    }
}
