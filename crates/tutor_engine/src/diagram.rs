//! Presentation-agnostic diagram specification for the external
//! renderer: a shape kind plus named measures, no coordinates, fonts or
//! colors.

use tutor_catalog::{get_number, get_point, Problem, ProblemType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    RightTriangle,
    Triangle,
    Circle,
    Rectangle,
    Square,
    Trapezoid,
    Prism,
    Cylinder,
    CoordinatePlane,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagramSpec {
    pub kind: DiagramKind,
    pub measures: Vec<(String, f64)>,
}

fn numbered(problem: &Problem, keys: &[&str]) -> Vec<(String, f64)> {
    keys.iter()
        .filter_map(|k| get_number(&problem.params, k).map(|v| (k.to_string(), v)))
        .collect()
}

/// Geometry problems get a diagram; the rational family does not.
pub fn diagram_for(problem: &Problem) -> Option<DiagramSpec> {
    let (kind, measures) = match problem.ty {
        ProblemType::PythagoreanTheorem => (
            DiagramKind::RightTriangle,
            numbered(problem, &["a", "b", "c"]),
        ),
        ProblemType::TriangleAngles => (
            DiagramKind::Triangle,
            numbered(problem, &["angle_a", "angle_b", "angle_c"]),
        ),
        ProblemType::TriangleArea => (DiagramKind::Triangle, numbered(problem, &["base", "height"])),
        ProblemType::TrianglePerimeter => (
            DiagramKind::Triangle,
            numbered(problem, &["side_a", "side_b", "side_c"]),
        ),
        ProblemType::TrapezoidArea => (
            DiagramKind::Trapezoid,
            numbered(problem, &["base_a", "base_b", "height"]),
        ),
        ProblemType::PrismVolume => (
            DiagramKind::Prism,
            numbered(problem, &["length", "width", "height"]),
        ),
        ProblemType::CylinderVolume => (
            DiagramKind::Cylinder,
            numbered(problem, &["radius", "height"]),
        ),
        ProblemType::CircleMeasures => {
            (DiagramKind::Circle, numbered(problem, &["radius", "diameter"]))
        }
        ProblemType::RectangleMeasures => (
            DiagramKind::Rectangle,
            numbered(problem, &["length", "width"]),
        ),
        ProblemType::SquareMeasures => (DiagramKind::Square, numbered(problem, &["side"])),
        ProblemType::PointDistance | ProblemType::PointMidpoint => {
            let mut measures = Vec::new();
            if let Some((x, y)) = get_point(&problem.params, "p1") {
                measures.push(("x1".to_string(), x));
                measures.push(("y1".to_string(), y));
            }
            if let Some((x, y)) = get_point(&problem.params, "p2") {
                measures.push(("x2".to_string(), x));
                measures.push(("y2".to_string(), y));
            }
            (DiagramKind::CoordinatePlane, measures)
        }
        ProblemType::RationalEquation
        | ProblemType::RationalFunctionAnalysis
        | ProblemType::AddRational
        | ProblemType::SimplifyRational => return None,
    };
    Some(DiagramSpec { kind, measures })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tutor_catalog::Params;

    #[test]
    fn test_geometry_gets_diagram() {
        let problem = Problem::resolve(
            "Find the area of a triangle with base 6 and height 8.",
            None,
            None,
            Params::new(),
            BTreeMap::new(),
        )
        .unwrap();
        let spec = diagram_for(&problem).unwrap();
        assert_eq!(spec.kind, DiagramKind::Triangle);
        assert_eq!(spec.measures.len(), 2);
    }

    #[test]
    fn test_rational_gets_none() {
        let problem = Problem::resolve(
            "Simplify (x^2 - 4)/(x + 2).",
            None,
            None,
            Params::new(),
            BTreeMap::new(),
        )
        .unwrap();
        assert!(diagram_for(&problem).is_none());
    }
}
