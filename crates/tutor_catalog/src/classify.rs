//! First-registered-match classification over the recognizer catalog.

use crate::normalize::normalize_text;
use crate::patterns::catalog;
use crate::problem_type::ProblemType;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("no recognizer pattern matched input: '{input}'")]
    NoMatch { input: String },
}

/// Map input text to a problem type.
///
/// An `explicit` type wins unconditionally (trusted-caller escape hatch).
/// Otherwise the catalog is walked in declaration order; for each type its
/// patterns are tested, in order, against the normalized input and then
/// against the raw scenario text. The first matching pattern of the first
/// matching type decides. This is first-registered-match, not
/// most-specific-match.
pub fn classify(
    input: &str,
    scenario: Option<&str>,
    explicit: Option<ProblemType>,
) -> Result<ProblemType, ClassifyError> {
    if let Some(ty) = explicit {
        debug!(ty = %ty, "classification bypassed by explicit type");
        return Ok(ty);
    }

    let normalized = normalize_text(input);
    for entry in catalog() {
        for pattern in &entry.patterns {
            if pattern.is_match(&normalized) {
                debug!(ty = %entry.ty, pattern = %pattern, "matched on input");
                return Ok(entry.ty);
            }
            if let Some(scenario) = scenario {
                if pattern.is_match(scenario) {
                    debug!(ty = %entry.ty, pattern = %pattern, "matched on scenario");
                    return Ok(entry.ty);
                }
            }
        }
    }

    Err(ClassifyError::NoMatch {
        input: input.to_string(),
    })
}
