//! JSON DTOs shared by the CLI (and any future FFI layer).
//!
//! Transport models are kept independent from engine internals on
//! purpose; the CLI owns the conversions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable schema version for JSON outputs.
pub const SCHEMA_VERSION: u8 = 1;

/// The resolved problem as it went into the solver.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProblemJson {
    pub problem_type: String,
    pub raw_input: String,
    pub normalized_input: String,
    pub parameters: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
}

/// A named numeric result.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MeasureJson {
    pub name: String,
    pub value: f64,
    pub formula: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RootSetJson {
    pub solutions: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub extraneous: Vec<f64>,
    /// False when the bounded candidate search may have missed roots.
    pub exhaustive: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnalysisJson {
    pub function: String,
    pub simplified: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub restrictions: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub vertical_asymptotes: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub holes: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_asymptote: Option<f64>,
    pub numer_degree: usize,
    pub denom_degree: usize,
}

/// Tagged solution payload.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolutionJson {
    Computed {
        #[serde(skip_serializing_if = "Option::is_none")]
        number: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        point: Option<(f64, f64)>,
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        measures: Vec<MeasureJson>,
        #[serde(skip_serializing_if = "Option::is_none")]
        roots: Option<RootSetJson>,
        #[serde(skip_serializing_if = "Option::is_none")]
        expression: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        analysis: Option<AnalysisJson>,
        formula: String,
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        calculation: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        units: Option<String>,
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        properties: Vec<(String, String)>,
    },
    InsufficientInformation {
        missing: Vec<String>,
    },
    InvalidGeometry {
        reason: String,
    },
    Verification {
        consistent: bool,
        expected: f64,
        actual: f64,
        detail: String,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RenderingsJson {
    pub conceptual: String,
    pub procedural: String,
    pub visual: String,
    pub algebraic: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorPreventionJson {
    /// Empty (not absent) when the step label has no table entry.
    pub common_mistakes: Vec<String>,
    pub self_check: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub troubleshooting: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScaffoldingJson {
    pub guiding_questions: Vec<String>,
    pub substeps: Vec<String>,
    pub hints: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub alternative_methods: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StepJson {
    pub number: usize,
    pub label: String,
    pub description: String,
    pub expression: String,
    pub reasoning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_hint: Option<String>,
    pub final_answer: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renderings: Option<RenderingsJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adapted_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adapted_reasoning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follows_from: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_prevention: Option<ErrorPreventionJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaffolding: Option<ScaffoldingJson>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BridgeJson {
    pub from_step: usize,
    pub to_step: usize,
    pub text: String,
}

/// A trace item: a numbered step or an unnumbered bridge.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "item", rename_all = "snake_case")]
pub enum TraceItemJson {
    Step(StepJson),
    Bridge(BridgeJson),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RowJson {
    pub label: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SectionJson {
    pub name: String,
    pub title: String,
    pub rows: Vec<RowJson>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DiagramJson {
    pub kind: String,
    pub measures: Vec<(String, f64)>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VerificationJson {
    pub confidence: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub checks: Vec<String>,
}

/// Complete solve() response.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SolvedJson {
    pub schema_version: u8,
    pub problem: ProblemJson,
    pub solution: SolutionJson,
    pub steps: Vec<TraceItemJson>,
    pub sections: Vec<SectionJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagram: Option<DiagramJson>,
    pub verification: VerificationJson,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_round_trips() {
        let solution = SolutionJson::InsufficientInformation {
            missing: vec!["height".to_string()],
        };
        let json = serde_json::to_string(&solution).unwrap();
        assert!(json.contains("insufficient_information"));
        let back: SolutionJson = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, SolutionJson::InsufficientInformation { .. }));
    }

    #[test]
    fn test_bridge_items_are_tagged() {
        let item = TraceItemJson::Bridge(BridgeJson {
            from_step: 1,
            to_step: 2,
            text: "t".to_string(),
        });
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"item\":\"bridge\""));
    }
}
