//! Solution variants. Recoverable outcomes (missing fields, impossible
//! geometry, consistency checks) are data, never errors.

use tutor_catalog::ProblemType;

/// A named numeric result, for solvers that report several (circle area
/// and circumference, rectangle area and perimeter).
#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    pub name: &'static str,
    pub value: f64,
    pub formula: &'static str,
}

/// Accepted and rejected roots of an equation.
///
/// `exhaustive` is always `false` for the bounded candidate search: roots
/// outside the probe set are silently missed, and the flag tells the
/// caller so.
#[derive(Debug, Clone, PartialEq)]
pub struct RootSet {
    pub solutions: Vec<f64>,
    pub extraneous: Vec<f64>,
    pub exhaustive: bool,
}

/// Structural report for a rational function.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionAnalysis {
    pub function: String,
    pub simplified: String,
    pub restrictions: Vec<f64>,
    pub vertical_asymptotes: Vec<f64>,
    pub holes: Vec<f64>,
    pub horizontal_asymptote: Option<f64>,
    pub numer_degree: usize,
    pub denom_degree: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SolutionValue {
    Number(f64),
    Point(f64, f64),
    Measures(Vec<Measure>),
    Roots(RootSet),
    Expression(String),
    Analysis(FunctionAnalysis),
}

/// The payload of a successful computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Computed {
    pub value: SolutionValue,
    pub formula: String,
    pub calculation: Vec<String>,
    pub units: Option<String>,
    /// Extra named facts, e.g. `("pythagorean_triple", "true")`.
    pub properties: Vec<(String, String)>,
}

/// Every solver returns exactly one of these; the category tag always
/// matches the problem's type.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    Computed {
        ty: ProblemType,
        result: Computed,
    },
    InsufficientInformation {
        ty: ProblemType,
        missing: Vec<&'static str>,
    },
    InvalidGeometry {
        ty: ProblemType,
        reason: String,
    },
    /// Over-determined input: all values were given, so the solver checks
    /// their mutual consistency instead of computing anything new.
    Verification {
        ty: ProblemType,
        consistent: bool,
        expected: f64,
        actual: f64,
        detail: String,
    },
}

impl Solution {
    pub fn ty(&self) -> ProblemType {
        match self {
            Solution::Computed { ty, .. }
            | Solution::InsufficientInformation { ty, .. }
            | Solution::InvalidGeometry { ty, .. }
            | Solution::Verification { ty, .. } => *ty,
        }
    }

    /// Whether the call produced an answer (computed or a completed
    /// consistency check).
    pub fn is_resolved(&self) -> bool {
        matches!(
            self,
            Solution::Computed { .. } | Solution::Verification { .. }
        )
    }

    pub fn as_computed(&self) -> Option<&Computed> {
        match self {
            Solution::Computed { result, .. } => Some(result),
            _ => None,
        }
    }

    /// The primary numeric result, when there is a single one.
    pub fn primary_number(&self) -> Option<f64> {
        match self {
            Solution::Computed { result, .. } => match &result.value {
                SolutionValue::Number(n) => Some(*n),
                SolutionValue::Measures(measures) => measures.first().map(|m| m.value),
                _ => None,
            },
            _ => None,
        }
    }
}
