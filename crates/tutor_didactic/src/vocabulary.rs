//! Per-level vocabulary substitution tables.
//!
//! Each explanation level owns its table; the basic level rewrites
//! technical terms into everyday language, the intermediate level glosses
//! them inline, and the detailed/scaffolded levels mostly keep them.

use crate::step::ExplanationLevel;

type Table = &'static [(&'static str, &'static str)];

const BASIC: Table = &[
    ("hypotenuse", "longest side (across from right angle)"),
    ("circumference", "distance around the circle"),
    ("perimeter", "distance around the outside"),
    ("radius", "distance from the center to the edge"),
    ("denominator", "bottom of the fraction"),
    ("numerator", "top of the fraction"),
    ("extraneous", "false"),
    ("asymptote", "line the graph gets ever closer to"),
    ("domain restrictions", "values x is not allowed to be"),
    ("variable", "unknown number"),
    ("substitute", "plug in"),
];

const INTERMEDIATE: Table = &[
    ("hypotenuse", "hypotenuse (the longest side)"),
    ("extraneous", "extraneous (invalid)"),
    ("asymptote", "asymptote (approach line)"),
    ("denominator", "denominator (bottom)"),
];

const DETAILED: Table = &[];

const SCAFFOLDED: Table = &[
    ("hypotenuse", "hypotenuse (the longest side, across from the right angle)"),
    ("extraneous", "extraneous (it breaks a domain restriction)"),
    ("denominator", "denominator (bottom of the fraction)"),
];

pub fn table(level: ExplanationLevel) -> Table {
    match level {
        ExplanationLevel::Basic => BASIC,
        ExplanationLevel::Intermediate => INTERMEDIATE,
        ExplanationLevel::Detailed => DETAILED,
        ExplanationLevel::Scaffolded => SCAFFOLDED,
    }
}

/// Apply the level's substitutions to a piece of explanation text.
pub fn adapt(text: &str, level: ExplanationLevel) -> String {
    let mut out = text.to_string();
    for (term, replacement) in table(level) {
        out = out.replace(term, replacement);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_substitutes() {
        let adapted = adapt("the hypotenuse is unknown", ExplanationLevel::Basic);
        assert_eq!(adapted, "the longest side (across from right angle) is unknown");
    }

    #[test]
    fn test_detailed_keeps_terms() {
        let text = "the hypotenuse is unknown";
        assert_eq!(adapt(text, ExplanationLevel::Detailed), text);
    }

    #[test]
    fn test_each_level_has_its_own_table() {
        assert_ne!(table(ExplanationLevel::Basic).len(), 0);
        assert_ne!(
            table(ExplanationLevel::Basic),
            table(ExplanationLevel::Intermediate)
        );
        assert_ne!(
            table(ExplanationLevel::Intermediate),
            table(ExplanationLevel::Scaffolded)
        );
    }
}
