//! Explanation units: steps, bridges, and the enrichment metadata the
//! pipeline stages attach.

/// Verbosity/vocabulary level for generated explanations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplanationLevel {
    /// Terse: base steps only, no enrichment.
    Basic,
    /// Enriched steps with everyday vocabulary substitutions.
    #[default]
    Intermediate,
    /// Enriched steps with full technical vocabulary.
    Detailed,
    /// Everything, plus guiding questions, sub-steps and graduated hints.
    Scaffolded,
}

/// The expression a step shows: either a single line of math text or an
/// explicit before/operation/after transition.
#[derive(Debug, Clone, PartialEq)]
pub enum StepExpression {
    Text(String),
    Transition {
        before: String,
        operation: String,
        after: String,
    },
}

impl StepExpression {
    /// Flat rendering for sections and adaptive text.
    pub fn display(&self) -> String {
        match self {
            StepExpression::Text(text) => text.clone(),
            StepExpression::Transition {
                before,
                operation,
                after,
            } => format!("{before} --[{operation}]--> {after}"),
        }
    }
}

/// Four parallel renderings of one step, attached by the adaptive
/// enhancement stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Renderings {
    pub conceptual: String,
    pub procedural: String,
    pub visual: String,
    pub algebraic: String,
}

/// Error-prevention annotations, attached per step by stage 4.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorPrevention {
    /// Looked up by problem type then step label; empty when the label
    /// has no table entry (present, not missing).
    pub common_mistakes: Vec<String>,
    pub self_check: String,
    pub troubleshooting: Vec<String>,
}

/// Scaffolding metadata, attached only at the scaffolded level.
#[derive(Debug, Clone, PartialEq)]
pub struct Scaffolding {
    pub guiding_questions: Vec<String>,
    pub substeps: Vec<String>,
    /// Exactly four hints of increasing specificity.
    pub hints: Vec<String>,
    pub alternative_methods: Vec<String>,
}

/// One explanation step.
///
/// Base fields are set by the generator and never change afterwards;
/// enrichment stages only fill the `Option` fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Ordinal, contiguous from 1 over non-bridge items.
    pub number: usize,
    pub label: String,
    pub description: String,
    pub expression: StepExpression,
    pub reasoning: String,
    pub rule: Option<String>,
    pub visual_hint: Option<String>,
    /// True on exactly one step per successful solve.
    pub final_answer: bool,

    // --- enrichment, additive only ---
    pub renderings: Option<Renderings>,
    pub adapted_description: Option<String>,
    pub adapted_reasoning: Option<String>,
    /// Back-reference to the previous step's ordinal.
    pub follows_from: Option<usize>,
    pub error_prevention: Option<ErrorPrevention>,
    pub scaffolding: Option<Scaffolding>,
}

impl Step {
    /// A bare base step with no enrichment.
    pub fn base(
        number: usize,
        label: &str,
        description: impl Into<String>,
        expression: StepExpression,
        reasoning: impl Into<String>,
    ) -> Step {
        Step {
            number,
            label: label.to_string(),
            description: description.into(),
            expression,
            reasoning: reasoning.into(),
            rule: None,
            visual_hint: None,
            final_answer: false,
            renderings: None,
            adapted_description: None,
            adapted_reasoning: None,
            follows_from: None,
            error_prevention: None,
            scaffolding: None,
        }
    }

    pub fn with_rule(mut self, rule: &str) -> Step {
        self.rule = Some(rule.to_string());
        self
    }

    pub fn with_visual_hint(mut self, hint: &str) -> Step {
        self.visual_hint = Some(hint.to_string());
        self
    }

    pub fn as_final(mut self) -> Step {
        self.final_answer = true;
        self
    }
}

/// Connective record between two adjacent steps. Carries no ordinal and
/// is never itself enriched by later stages.
#[derive(Debug, Clone, PartialEq)]
pub struct Bridge {
    pub from_step: usize,
    pub to_step: usize,
    pub text: String,
}

/// An item in the synthesized trace.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceItem {
    Step(Step),
    Bridge(Bridge),
}

impl TraceItem {
    pub fn as_step(&self) -> Option<&Step> {
        match self {
            TraceItem::Step(step) => Some(step),
            TraceItem::Bridge(_) => None,
        }
    }

    pub fn is_bridge(&self) -> bool {
        matches!(self, TraceItem::Bridge(_))
    }
}
