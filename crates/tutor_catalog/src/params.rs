//! Parameter values and the merge that produces a final parameter map.

use std::collections::BTreeMap;

/// A single resolved parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Number(f64),
    Text(String),
    Point(f64, f64),
}

/// Final parameter mapping. `BTreeMap` keeps iteration deterministic,
/// which the section assembler and the tests rely on.
pub type Params = BTreeMap<String, ParamValue>;

pub fn get_number(params: &Params, key: &str) -> Option<f64> {
    match params.get(key) {
        Some(ParamValue::Number(n)) => Some(*n),
        Some(ParamValue::Text(t)) => t.parse().ok(),
        _ => None,
    }
}

pub fn get_point(params: &Params, key: &str) -> Option<(f64, f64)> {
    match params.get(key) {
        Some(ParamValue::Point(x, y)) => Some((*x, *y)),
        _ => None,
    }
}

pub fn get_text<'a>(params: &'a Params, key: &str) -> Option<&'a str> {
    match params.get(key) {
        Some(ParamValue::Text(t)) => Some(t.as_str()),
        _ => None,
    }
}

/// Merge parameter layers in increasing precedence:
/// pattern-extracted values, then problem-type defaults, then
/// caller-supplied parameters, which win on key collision.
pub fn merge(extracted: Params, defaults: Params, caller: Params) -> Params {
    let mut merged = extracted;
    for (k, v) in defaults {
        merged.insert(k, v);
    }
    for (k, v) in caller {
        merged.insert(k, v);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> ParamValue {
        ParamValue::Number(n)
    }

    #[test]
    fn test_merge_precedence() {
        let mut extracted = Params::new();
        extracted.insert("base".into(), num(6.0));
        extracted.insert("height".into(), num(8.0));

        let mut defaults = Params::new();
        defaults.insert("units".into(), ParamValue::Text("units".into()));

        let mut caller = Params::new();
        caller.insert("height".into(), num(10.0));

        let merged = merge(extracted, defaults, caller);
        assert_eq!(get_number(&merged, "base"), Some(6.0));
        assert_eq!(get_number(&merged, "height"), Some(10.0));
        assert_eq!(get_text(&merged, "units"), Some("units"));
    }

    #[test]
    fn test_get_number_coerces_text() {
        let mut params = Params::new();
        params.insert("radius".into(), ParamValue::Text("5".into()));
        assert_eq!(get_number(&params, "radius"), Some(5.0));
    }
}
