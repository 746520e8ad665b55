//! Coordinate-plane solvers: distance and midpoint.

use crate::solution::{Computed, Solution, SolutionValue};
use tutor_catalog::{get_point, Params, ProblemType};
use tutor_math::format_number;

fn require_points(
    params: &Params,
    ty: ProblemType,
) -> Result<((f64, f64), (f64, f64)), Solution> {
    let p1 = get_point(params, "p1");
    let p2 = get_point(params, "p2");
    match (p1, p2) {
        (Some(p1), Some(p2)) => Ok((p1, p2)),
        _ => {
            let mut missing = Vec::new();
            if p1.is_none() {
                missing.push("p1");
            }
            if p2.is_none() {
                missing.push("p2");
            }
            Err(Solution::InsufficientInformation { ty, missing })
        }
    }
}

pub fn distance(params: &Params) -> Solution {
    let ty = ProblemType::PointDistance;
    let ((x1, y1), (x2, y2)) = match require_points(params, ty) {
        Ok(points) => points,
        Err(solution) => return solution,
    };
    let dx = x2 - x1;
    let dy = y2 - y1;
    let d = (dx * dx + dy * dy).sqrt();
    Solution::Computed {
        ty,
        result: Computed {
            value: SolutionValue::Number(d),
            formula: "d = sqrt((x2 - x1)^2 + (y2 - y1)^2)".to_string(),
            calculation: vec![
                format!(
                    "d = sqrt(({} - {})^2 + ({} - {})^2)",
                    format_number(x2),
                    format_number(x1),
                    format_number(y2),
                    format_number(y1)
                ),
                format!(
                    "d = sqrt({}^2 + {}^2) = sqrt({})",
                    format_number(dx),
                    format_number(dy),
                    format_number(dx * dx + dy * dy)
                ),
                format!("d = {}", format_number(d)),
            ],
            units: None,
            properties: vec![
                ("dx".to_string(), format_number(dx)),
                ("dy".to_string(), format_number(dy)),
            ],
        },
    }
}

pub fn midpoint(params: &Params) -> Solution {
    let ty = ProblemType::PointMidpoint;
    let ((x1, y1), (x2, y2)) = match require_points(params, ty) {
        Ok(points) => points,
        Err(solution) => return solution,
    };
    let mx = (x1 + x2) / 2.0;
    let my = (y1 + y2) / 2.0;
    Solution::Computed {
        ty,
        result: Computed {
            value: SolutionValue::Point(mx, my),
            formula: "M = ((x1 + x2)/2, (y1 + y2)/2)".to_string(),
            calculation: vec![
                format!(
                    "M = (({} + {})/2, ({} + {})/2)",
                    format_number(x1),
                    format_number(x2),
                    format_number(y1),
                    format_number(y2)
                ),
                format!("M = ({}, {})", format_number(mx), format_number(my)),
            ],
            units: None,
            properties: Vec::new(),
        },
    }
}
