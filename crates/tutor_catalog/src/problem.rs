//! The immutable, fully resolved problem record.

use crate::classify::{classify, ClassifyError};
use crate::extract::{default_params, extract_params};
use crate::normalize::normalize_text;
use crate::params::{merge, Params};
use crate::problem_type::ProblemType;
use std::collections::BTreeMap;
use std::time::SystemTime;

/// A classified, parameter-resolved problem. Immutable once built; the
/// whole downstream pipeline (solver, step synthesis, sections) reads it
/// by reference.
#[derive(Debug, Clone)]
pub struct Problem {
    pub ty: ProblemType,
    pub raw_input: String,
    pub normalized_input: String,
    pub params: Params,
    pub scenario: Option<String>,
    pub context: BTreeMap<String, String>,
    pub created_at: SystemTime,
}

impl Problem {
    /// Classify and resolve raw input into a `Problem`.
    ///
    /// `caller_params` win over type defaults, which win over values the
    /// extraction routine captured from the text.
    pub fn resolve(
        input: &str,
        scenario: Option<&str>,
        explicit: Option<ProblemType>,
        caller_params: Params,
        context: BTreeMap<String, String>,
    ) -> Result<Problem, ClassifyError> {
        let ty = classify(input, scenario, explicit)?;
        let normalized = normalize_text(input);
        let extracted = extract_params(ty, &normalized);
        let params = merge(extracted, default_params(ty), caller_params);
        Ok(Problem {
            ty,
            raw_input: input.to_string(),
            normalized_input: normalized,
            params,
            scenario: scenario.map(str::to_string),
            context,
            created_at: SystemTime::now(),
        })
    }
}
