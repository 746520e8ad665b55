//! Type-specific parameter extraction from normalized input text.
//!
//! Each routine is forgiving: whatever it cannot find it simply leaves
//! out, and the solver reports the missing fields as an
//! `InsufficientInformation` outcome rather than an error.

use crate::params::{ParamValue, Params};
use crate::problem_type::ProblemType;
use regex::Regex;
use std::sync::OnceLock;

const NUM: &str = r"-?\d+(?:\.\d+)?";

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NUM).expect("number pattern must compile"))
}

fn point_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"\( ?({NUM}) ?, ?({NUM}) ?\)")).expect("point pattern must compile")
    })
}

/// All bare numbers in the text, in order of appearance.
fn all_numbers(input: &str) -> Vec<f64> {
    number_re()
        .find_iter(input)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// A number introduced by one of the given labels, e.g.
/// `labeled(input, &["base"])` matches "base of 6", "base = 6", "base: 6".
fn labeled(input: &str, labels: &[&str]) -> Option<f64> {
    for label in labels {
        let pattern = format!(r"(?i)\b{label}\b[^0-9(]{{0,16}}({NUM})");
        let re = Regex::new(&pattern).expect("labeled pattern must compile");
        if let Some(caps) = re.captures(input) {
            if let Ok(n) = caps[1].parse() {
                return Some(n);
            }
        }
    }
    None
}

/// Two numbers introduced together, e.g. "legs 3 and 4", "bases 4 and 6".
fn labeled_pair(input: &str, labels: &[&str]) -> Option<(f64, f64)> {
    for label in labels {
        let pattern = format!(r"(?i)\b{label}\b[^0-9(]{{0,16}}({NUM})(?:, ?| and | ?by ?)({NUM})");
        let re = Regex::new(&pattern).expect("labeled pair pattern must compile");
        if let Some(caps) = re.captures(input) {
            if let (Ok(a), Ok(b)) = (caps[1].parse(), caps[2].parse()) {
                return Some((a, b));
            }
        }
    }
    None
}

/// Coordinate pairs like `(1, 2)`, in order of appearance.
fn points(input: &str) -> Vec<(f64, f64)> {
    point_re()
        .captures_iter(input)
        .filter_map(|caps| {
            let x = caps[1].parse().ok()?;
            let y = caps[2].parse().ok()?;
            Some((x, y))
        })
        .collect()
}

/// Strip leading command words ("solve", "find the asymptotes of", ...)
/// and trailing punctuation, leaving the mathematical payload.
fn math_payload(input: &str) -> Option<String> {
    const COMMAND_WORDS: &[&str] = &[
        "solve", "simplify", "combine", "add", "subtract", "reduce", "analyze", "analyse", "find",
        "state", "the", "a", "an", "asymptotes", "asymptote", "holes", "domain", "behavior", "of",
        "and", "for", "equation", "expression", "function", "rational",
    ];
    let mut rest = input.trim();
    loop {
        let Some(word) = rest.split_whitespace().next() else {
            return None;
        };
        let bare: String = word
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect::<String>()
            .to_ascii_lowercase();
        if bare.len() == word.len() && COMMAND_WORDS.contains(&bare.as_str()) {
            rest = rest[word.len()..].trim_start();
        } else {
            break;
        }
    }
    let payload = rest.trim_end_matches(['.', '?', '!', ' ']);
    if payload.is_empty() {
        None
    } else {
        Some(payload.to_string())
    }
}

fn insert_num(params: &mut Params, key: &str, value: f64) {
    params.insert(key.to_string(), ParamValue::Number(value));
}

/// Run the extraction routine for `ty` against normalized input text.
pub fn extract_params(ty: ProblemType, input: &str) -> Params {
    let mut params = Params::new();
    match ty {
        ProblemType::PythagoreanTheorem => {
            if let Some((a, b)) = labeled_pair(input, &["legs", "sides"]) {
                insert_num(&mut params, "a", a);
                insert_num(&mut params, "b", b);
            }
            if let Some(c) = labeled(input, &["hypotenuse"]) {
                insert_num(&mut params, "c", c);
            }
            if !params.contains_key("a") {
                if let Some(a) = labeled(input, &["leg", "side"]) {
                    insert_num(&mut params, "a", a);
                }
            }
            if params.is_empty() {
                let nums = all_numbers(input);
                for (key, value) in ["a", "b", "c"].iter().zip(nums) {
                    insert_num(&mut params, key, value);
                }
            }
        }
        ProblemType::TriangleAngles => {
            let nums = all_numbers(input);
            for (key, value) in ["angle_a", "angle_b", "angle_c"].iter().zip(nums) {
                insert_num(&mut params, key, value);
            }
        }
        ProblemType::TriangleArea => {
            extract_labeled_or_positional(&mut params, input, &[("base", "base"), ("height", "height")]);
        }
        ProblemType::TrianglePerimeter => {
            let nums = all_numbers(input);
            for (key, value) in ["side_a", "side_b", "side_c"].iter().zip(nums) {
                insert_num(&mut params, key, value);
            }
        }
        ProblemType::TrapezoidArea => {
            if let Some((a, b)) = labeled_pair(input, &["bases"]) {
                insert_num(&mut params, "base_a", a);
                insert_num(&mut params, "base_b", b);
            }
            if let Some(h) = labeled(input, &["height"]) {
                insert_num(&mut params, "height", h);
            }
        }
        ProblemType::PrismVolume => {
            extract_labeled_or_positional(
                &mut params,
                input,
                &[("length", "length"), ("width", "width"), ("height", "height")],
            );
        }
        ProblemType::CylinderVolume => {
            extract_labeled_or_positional(
                &mut params,
                input,
                &[("radius", "radius"), ("height", "height")],
            );
        }
        ProblemType::CircleMeasures => {
            if let Some(r) = labeled(input, &["radius"]) {
                insert_num(&mut params, "radius", r);
            } else if let Some(d) = labeled(input, &["diameter"]) {
                insert_num(&mut params, "diameter", d);
            } else if let Some(&n) = all_numbers(input).first() {
                insert_num(&mut params, "radius", n);
            }
        }
        ProblemType::RectangleMeasures => {
            extract_labeled_or_positional(
                &mut params,
                input,
                &[("length", "length"), ("width", "width")],
            );
        }
        ProblemType::SquareMeasures => {
            if let Some(s) = labeled(input, &["side"]).or_else(|| all_numbers(input).first().copied())
            {
                insert_num(&mut params, "side", s);
            }
        }
        ProblemType::PointDistance | ProblemType::PointMidpoint => {
            let pts = points(input);
            if let Some(&(x, y)) = pts.first() {
                params.insert("p1".into(), ParamValue::Point(x, y));
            }
            if let Some(&(x, y)) = pts.get(1) {
                params.insert("p2".into(), ParamValue::Point(x, y));
            }
        }
        ProblemType::RationalEquation => {
            if let Some(payload) = math_payload(input) {
                params.insert("equation".into(), ParamValue::Text(payload));
            }
        }
        ProblemType::RationalFunctionAnalysis => {
            if let Some(payload) = math_payload(input) {
                params.insert("function".into(), ParamValue::Text(payload));
            }
        }
        ProblemType::AddRational | ProblemType::SimplifyRational => {
            if let Some(payload) = math_payload(input) {
                params.insert("expression".into(), ParamValue::Text(payload));
            }
        }
    }
    params
}

/// Try labeled extraction for each `(key, label)`; if nothing was labeled,
/// fall back to bare numbers in order of appearance.
fn extract_labeled_or_positional(params: &mut Params, input: &str, keys: &[(&str, &str)]) {
    for (key, label) in keys {
        if let Some(n) = labeled(input, &[label]) {
            insert_num(params, key, n);
        }
    }
    if params.is_empty() {
        let nums = all_numbers(input);
        for ((key, _), value) in keys.iter().zip(nums) {
            insert_num(params, key, value);
        }
    }
}

/// Problem-type defaults: keys the extractors never produce.
pub fn default_params(ty: ProblemType) -> Params {
    let mut params = Params::new();
    match ty {
        ProblemType::TriangleAngles => {
            params.insert("units".into(), ParamValue::Text("degrees".into()));
        }
        ProblemType::RationalEquation
        | ProblemType::RationalFunctionAnalysis
        | ProblemType::AddRational
        | ProblemType::SimplifyRational => {}
        _ => {
            params.insert("units".into(), ParamValue::Text("units".into()));
        }
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{get_number, get_point, get_text};

    #[test]
    fn test_extract_triangle_area() {
        let params = extract_params(
            ProblemType::TriangleArea,
            "find the area of a triangle with base 6 and height 8",
        );
        assert_eq!(get_number(&params, "base"), Some(6.0));
        assert_eq!(get_number(&params, "height"), Some(8.0));
    }

    #[test]
    fn test_extract_pythagorean_legs() {
        let params = extract_params(
            ProblemType::PythagoreanTheorem,
            "a right triangle has legs 3 and 4. find the hypotenuse",
        );
        assert_eq!(get_number(&params, "a"), Some(3.0));
        assert_eq!(get_number(&params, "b"), Some(4.0));
        assert_eq!(get_number(&params, "c"), None);
    }

    #[test]
    fn test_extract_points() {
        let params = extract_params(
            ProblemType::PointDistance,
            "find the distance between (1, 2) and (4, 6)",
        );
        assert_eq!(get_point(&params, "p1"), Some((1.0, 2.0)));
        assert_eq!(get_point(&params, "p2"), Some((4.0, 6.0)));
    }

    #[test]
    fn test_extract_equation_payload() {
        let params = extract_params(ProblemType::RationalEquation, "Solve 1/(x - 2) = 3/(x + 2).");
        assert_eq!(get_text(&params, "equation"), Some("1/(x - 2) = 3/(x + 2)"));
    }

    #[test]
    fn test_extract_analysis_payload() {
        let params = extract_params(
            ProblemType::RationalFunctionAnalysis,
            "Find the asymptotes of (2x^2 + 1)/(x^2 - 4).",
        );
        assert_eq!(get_text(&params, "function"), Some("(2x^2 + 1)/(x^2 - 4)"));
    }

    #[test]
    fn test_missing_values_are_left_out() {
        let params = extract_params(ProblemType::TriangleArea, "area of a triangle with base 6");
        assert_eq!(get_number(&params, "base"), Some(6.0));
        assert!(!params.contains_key("height"));
    }

    #[test]
    fn test_negative_coordinates() {
        let params = extract_params(
            ProblemType::PointMidpoint,
            "find the midpoint of (-2, 4) and (6, -8)",
        );
        assert_eq!(get_point(&params, "p1"), Some((-2.0, 4.0)));
        assert_eq!(get_point(&params, "p2"), Some((6.0, -8.0)));
    }
}
