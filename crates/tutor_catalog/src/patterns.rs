//! The ordered recognizer catalog.
//!
//! One entry per [`ProblemType`], in [`ProblemType::ALL`] order, each with
//! an ordered list of compiled patterns. Built once and shared by
//! reference; classification is first-registered-match, so both the entry
//! order and the per-entry pattern order are part of the contract.

use crate::problem_type::ProblemType;
use regex::Regex;
use std::sync::OnceLock;

/// A catalog entry: a type and its ordered recognizers.
pub struct TypeEntry {
    pub ty: ProblemType,
    pub patterns: Vec<Regex>,
}

fn recognizers(ty: ProblemType) -> &'static [&'static str] {
    match ty {
        ProblemType::PythagoreanTheorem => &[
            r"(?i)hypotenuse",
            r"(?i)pythagor",
            r"(?i)(?:missing|third|find|unknown).*side.*right triangle",
            r"(?i)legs? (?:of|are|measure)",
            r"(?i)right triangle",
        ],
        ProblemType::TriangleAngles => &[
            r"(?i)(?:missing|third|unknown) angle",
            r"(?i)angles? of a triangle",
            r"(?i)triangle.*angles? (?:are|measure)",
        ],
        ProblemType::TriangleArea => &[
            r"(?i)area of (?:a |the )?triangle",
            r"(?i)triangle.*base.*height",
        ],
        ProblemType::TrianglePerimeter => &[
            r"(?i)perimeter of (?:a |the )?triangle",
            r"(?i)triangle with sides",
        ],
        ProblemType::TrapezoidArea => &[r"(?i)trapezoid", r"(?i)trapezium"],
        ProblemType::PrismVolume => &[
            r"(?i)rectangular prism",
            r"(?i)volume of (?:a |the )?(?:prism|box)",
        ],
        ProblemType::CylinderVolume => &[r"(?i)cylinder"],
        ProblemType::CircleMeasures => &[
            r"(?i)circle",
            r"(?i)circumference",
            r"(?i)\bradius\b",
            r"(?i)\bdiameter\b",
        ],
        ProblemType::RectangleMeasures => &[r"(?i)rectangle"],
        ProblemType::SquareMeasures => &[
            r"(?i)(?:area|perimeter) of (?:a |the )?square",
            r"(?i)square with side",
            r"(?i)side of a square",
        ],
        ProblemType::PointDistance => &[r"(?i)distance between", r"(?i)how far"],
        ProblemType::PointMidpoint => &[r"(?i)midpoint"],
        ProblemType::RationalEquation => &[r"(?i)rational equation", r"(?i)\bsolve\b.*="],
        ProblemType::RationalFunctionAnalysis => &[
            r"(?i)asymptote",
            r"(?i)\bholes?\b",
            r"(?i)domain of",
            r"(?i)analyz",
            r"(?i)end behavior",
        ],
        ProblemType::AddRational => &[
            r"(?i)(?:add|sum|subtract|combine).*(?:fraction|rational|expression)",
            r"(?i)\bcombine\b",
            // Two parenthesized denominators joined by + or -.
            r"/\([^)]*\) ?[+-]",
        ],
        ProblemType::SimplifyRational => &[
            r"(?i)\bsimplify\b",
            r"(?i)\breduce\b",
            r"(?i)lowest terms",
        ],
    }
}

/// The process-wide recognizer catalog, compiled once.
pub fn catalog() -> &'static [TypeEntry] {
    static CATALOG: OnceLock<Vec<TypeEntry>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        ProblemType::ALL
            .iter()
            .map(|&ty| TypeEntry {
                ty,
                patterns: recognizers(ty)
                    .iter()
                    .map(|p| Regex::new(p).expect("recognizer pattern must compile"))
                    .collect(),
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_declaration_order() {
        let cat = catalog();
        assert_eq!(cat.len(), ProblemType::ALL.len());
        for (entry, ty) in cat.iter().zip(ProblemType::ALL) {
            assert_eq!(entry.ty, ty);
        }
    }

    #[test]
    fn test_every_type_has_at_least_one_pattern() {
        for entry in catalog() {
            assert!(!entry.patterns.is_empty(), "{} has no recognizers", entry.ty);
        }
    }
}
