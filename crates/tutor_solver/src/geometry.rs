//! Metric solvers: single closed-form formula per shape.
//!
//! Each follows the three regimes: exactly-determined computes,
//! under-determined names the missing fields, over-determined (where a
//! result value was supplied alongside the inputs) verifies consistency
//! within the shared tolerance.

use crate::registry::{missing_numbers, units};
use crate::solution::{Computed, Measure, Solution, SolutionValue};
use std::f64::consts::PI;
use tutor_catalog::{get_number, Params, ProblemType};
use tutor_math::{approx_eq, format_number};

fn positive(values: &[(&str, f64)]) -> Result<(), String> {
    for (name, value) in values {
        if *value <= 0.0 {
            return Err(format!("{name} must be positive, got {}", format_number(*value)));
        }
    }
    Ok(())
}

fn verification(ty: ProblemType, expected: f64, actual: f64, what: &str) -> Solution {
    let consistent = approx_eq(expected, actual);
    Solution::Verification {
        ty,
        consistent,
        expected,
        actual,
        detail: if consistent {
            format!(
                "Given {what} {} matches the computed value {}.",
                format_number(actual),
                format_number(expected)
            )
        } else {
            format!(
                "Given {what} {} disagrees with the computed value {}.",
                format_number(actual),
                format_number(expected)
            )
        },
    }
}

pub fn triangle_area(params: &Params) -> Solution {
    let ty = ProblemType::TriangleArea;
    let missing = missing_numbers(params, &["base", "height"]);
    if !missing.is_empty() {
        return Solution::InsufficientInformation { ty, missing };
    }
    let base = get_number(params, "base").expect("checked above");
    let height = get_number(params, "height").expect("checked above");
    if let Err(reason) = positive(&[("base", base), ("height", height)]) {
        return Solution::InvalidGeometry { ty, reason };
    }
    let area = 0.5 * base * height;
    // Over-determined: the area itself was supplied too.
    if let Some(given) = get_number(params, "area") {
        return verification(ty, area, given, "area");
    }
    Solution::Computed {
        ty,
        result: Computed {
            value: SolutionValue::Number(area),
            formula: "A = (1/2) * b * h".to_string(),
            calculation: vec![
                format!(
                    "A = (1/2) * {} * {}",
                    format_number(base),
                    format_number(height)
                ),
                format!("A = {}", format_number(area)),
            ],
            units: Some(units::square(params)),
            properties: Vec::new(),
        },
    }
}

pub fn triangle_perimeter(params: &Params) -> Solution {
    let ty = ProblemType::TrianglePerimeter;
    let missing = missing_numbers(params, &["side_a", "side_b", "side_c"]);
    if !missing.is_empty() {
        return Solution::InsufficientInformation { ty, missing };
    }
    let a = get_number(params, "side_a").expect("checked above");
    let b = get_number(params, "side_b").expect("checked above");
    let c = get_number(params, "side_c").expect("checked above");
    if let Err(reason) = positive(&[("side_a", a), ("side_b", b), ("side_c", c)]) {
        return Solution::InvalidGeometry { ty, reason };
    }
    // Triangle inequality: the three lengths must close.
    let (max, rest) = (a.max(b).max(c), a + b + c - a.max(b).max(c));
    if max >= rest {
        return Solution::InvalidGeometry {
            ty,
            reason: format!(
                "sides {}, {}, {} violate the triangle inequality",
                format_number(a),
                format_number(b),
                format_number(c)
            ),
        };
    }
    let perimeter = a + b + c;
    Solution::Computed {
        ty,
        result: Computed {
            value: SolutionValue::Number(perimeter),
            formula: "P = a + b + c".to_string(),
            calculation: vec![
                format!(
                    "P = {} + {} + {}",
                    format_number(a),
                    format_number(b),
                    format_number(c)
                ),
                format!("P = {}", format_number(perimeter)),
            ],
            units: Some(units::base(params)),
            properties: Vec::new(),
        },
    }
}

pub fn trapezoid_area(params: &Params) -> Solution {
    let ty = ProblemType::TrapezoidArea;
    let missing = missing_numbers(params, &["base_a", "base_b", "height"]);
    if !missing.is_empty() {
        return Solution::InsufficientInformation { ty, missing };
    }
    let b1 = get_number(params, "base_a").expect("checked above");
    let b2 = get_number(params, "base_b").expect("checked above");
    let h = get_number(params, "height").expect("checked above");
    if let Err(reason) = positive(&[("base_a", b1), ("base_b", b2), ("height", h)]) {
        return Solution::InvalidGeometry { ty, reason };
    }
    let area = 0.5 * (b1 + b2) * h;
    Solution::Computed {
        ty,
        result: Computed {
            value: SolutionValue::Number(area),
            formula: "A = (1/2) * (b1 + b2) * h".to_string(),
            calculation: vec![
                format!(
                    "A = (1/2) * ({} + {}) * {}",
                    format_number(b1),
                    format_number(b2),
                    format_number(h)
                ),
                format!("A = (1/2) * {} * {}", format_number(b1 + b2), format_number(h)),
                format!("A = {}", format_number(area)),
            ],
            units: Some(units::square(params)),
            properties: Vec::new(),
        },
    }
}

pub fn prism_volume(params: &Params) -> Solution {
    let ty = ProblemType::PrismVolume;
    let missing = missing_numbers(params, &["length", "width", "height"]);
    if !missing.is_empty() {
        return Solution::InsufficientInformation { ty, missing };
    }
    let l = get_number(params, "length").expect("checked above");
    let w = get_number(params, "width").expect("checked above");
    let h = get_number(params, "height").expect("checked above");
    if let Err(reason) = positive(&[("length", l), ("width", w), ("height", h)]) {
        return Solution::InvalidGeometry { ty, reason };
    }
    let volume = l * w * h;
    Solution::Computed {
        ty,
        result: Computed {
            value: SolutionValue::Number(volume),
            formula: "V = l * w * h".to_string(),
            calculation: vec![
                format!(
                    "V = {} * {} * {}",
                    format_number(l),
                    format_number(w),
                    format_number(h)
                ),
                format!("V = {}", format_number(volume)),
            ],
            units: Some(units::cubic(params)),
            properties: Vec::new(),
        },
    }
}

pub fn cylinder_volume(params: &Params) -> Solution {
    let ty = ProblemType::CylinderVolume;
    let missing = missing_numbers(params, &["radius", "height"]);
    if !missing.is_empty() {
        return Solution::InsufficientInformation { ty, missing };
    }
    let r = get_number(params, "radius").expect("checked above");
    let h = get_number(params, "height").expect("checked above");
    if let Err(reason) = positive(&[("radius", r), ("height", h)]) {
        return Solution::InvalidGeometry { ty, reason };
    }
    let volume = PI * r * r * h;
    Solution::Computed {
        ty,
        result: Computed {
            value: SolutionValue::Number(volume),
            formula: "V = pi * r^2 * h".to_string(),
            calculation: vec![
                format!("V = pi * {}^2 * {}", format_number(r), format_number(h)),
                format!("V = pi * {} * {}", format_number(r * r), format_number(h)),
                format!("V = {}", format_number(volume)),
            ],
            units: Some(units::cubic(params)),
            properties: Vec::new(),
        },
    }
}

pub fn circle_measures(params: &Params) -> Solution {
    let ty = ProblemType::CircleMeasures;
    // A diameter is accepted in place of the radius.
    let radius = match get_number(params, "radius") {
        Some(r) => r,
        None => match get_number(params, "diameter") {
            Some(d) => d / 2.0,
            None => {
                return Solution::InsufficientInformation {
                    ty,
                    missing: vec!["radius"],
                }
            }
        },
    };
    if radius <= 0.0 {
        return Solution::InvalidGeometry {
            ty,
            reason: format!("radius must be positive, got {}", format_number(radius)),
        };
    }
    let area = PI * radius * radius;
    let circumference = 2.0 * PI * radius;
    if let Some(given) = get_number(params, "area") {
        return verification(ty, area, given, "area");
    }
    Solution::Computed {
        ty,
        result: Computed {
            value: SolutionValue::Measures(vec![
                Measure {
                    name: "area",
                    value: area,
                    formula: "A = pi * r^2",
                },
                Measure {
                    name: "circumference",
                    value: circumference,
                    formula: "C = 2 * pi * r",
                },
            ]),
            formula: "A = pi * r^2; C = 2 * pi * r".to_string(),
            calculation: vec![
                format!("A = pi * {}^2 = {}", format_number(radius), format_number(area)),
                format!(
                    "C = 2 * pi * {} = {}",
                    format_number(radius),
                    format_number(circumference)
                ),
            ],
            units: Some(units::base(params)),
            properties: vec![("radius".to_string(), format_number(radius))],
        },
    }
}

pub fn rectangle_measures(params: &Params) -> Solution {
    let ty = ProblemType::RectangleMeasures;
    let missing = missing_numbers(params, &["length", "width"]);
    if !missing.is_empty() {
        return Solution::InsufficientInformation { ty, missing };
    }
    let l = get_number(params, "length").expect("checked above");
    let w = get_number(params, "width").expect("checked above");
    if let Err(reason) = positive(&[("length", l), ("width", w)]) {
        return Solution::InvalidGeometry { ty, reason };
    }
    let area = l * w;
    let perimeter = 2.0 * (l + w);
    Solution::Computed {
        ty,
        result: Computed {
            value: SolutionValue::Measures(vec![
                Measure {
                    name: "area",
                    value: area,
                    formula: "A = l * w",
                },
                Measure {
                    name: "perimeter",
                    value: perimeter,
                    formula: "P = 2(l + w)",
                },
            ]),
            formula: "A = l * w; P = 2(l + w)".to_string(),
            calculation: vec![
                format!(
                    "A = {} * {} = {}",
                    format_number(l),
                    format_number(w),
                    format_number(area)
                ),
                format!(
                    "P = 2({} + {}) = {}",
                    format_number(l),
                    format_number(w),
                    format_number(perimeter)
                ),
            ],
            units: Some(units::base(params)),
            properties: Vec::new(),
        },
    }
}

pub fn square_measures(params: &Params) -> Solution {
    let ty = ProblemType::SquareMeasures;
    let Some(side) = get_number(params, "side") else {
        return Solution::InsufficientInformation {
            ty,
            missing: vec!["side"],
        };
    };
    if side <= 0.0 {
        return Solution::InvalidGeometry {
            ty,
            reason: format!("side must be positive, got {}", format_number(side)),
        };
    }
    let area = side * side;
    let perimeter = 4.0 * side;
    Solution::Computed {
        ty,
        result: Computed {
            value: SolutionValue::Measures(vec![
                Measure {
                    name: "area",
                    value: area,
                    formula: "A = s^2",
                },
                Measure {
                    name: "perimeter",
                    value: perimeter,
                    formula: "P = 4s",
                },
            ]),
            formula: "A = s^2; P = 4s".to_string(),
            calculation: vec![
                format!("A = {}^2 = {}", format_number(side), format_number(area)),
                format!("P = 4 * {} = {}", format_number(side), format_number(perimeter)),
            ],
            units: Some(units::base(params)),
            properties: Vec::new(),
        },
    }
}
