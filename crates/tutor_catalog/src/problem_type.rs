/// Which lesson family a problem type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Geometry,
    RationalExpressions,
}

/// The closed catalog of recognized problem archetypes.
///
/// Declaration order is load-bearing: the classifier tests types in the
/// order of [`ProblemType::ALL`] and the first match wins. New types must
/// be appended with their position chosen deliberately (more specific
/// recognizers before more general ones).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProblemType {
    PythagoreanTheorem,
    TriangleAngles,
    TriangleArea,
    TrianglePerimeter,
    TrapezoidArea,
    PrismVolume,
    CylinderVolume,
    CircleMeasures,
    RectangleMeasures,
    SquareMeasures,
    PointDistance,
    PointMidpoint,
    RationalEquation,
    RationalFunctionAnalysis,
    AddRational,
    SimplifyRational,
}

impl ProblemType {
    /// Every registered type, in classification priority order.
    pub const ALL: [ProblemType; 16] = [
        ProblemType::PythagoreanTheorem,
        ProblemType::TriangleAngles,
        ProblemType::TriangleArea,
        ProblemType::TrianglePerimeter,
        ProblemType::TrapezoidArea,
        ProblemType::PrismVolume,
        ProblemType::CylinderVolume,
        ProblemType::CircleMeasures,
        ProblemType::RectangleMeasures,
        ProblemType::SquareMeasures,
        ProblemType::PointDistance,
        ProblemType::PointMidpoint,
        ProblemType::RationalEquation,
        ProblemType::RationalFunctionAnalysis,
        ProblemType::AddRational,
        ProblemType::SimplifyRational,
    ];

    /// Stable identifier used on the wire and in config files.
    pub fn name(&self) -> &'static str {
        match self {
            ProblemType::PythagoreanTheorem => "pythagorean_theorem",
            ProblemType::TriangleAngles => "triangle_angles",
            ProblemType::TriangleArea => "triangle_area",
            ProblemType::TrianglePerimeter => "triangle_perimeter",
            ProblemType::TrapezoidArea => "trapezoid_area",
            ProblemType::PrismVolume => "prism_volume",
            ProblemType::CylinderVolume => "cylinder_volume",
            ProblemType::CircleMeasures => "circle_measures",
            ProblemType::RectangleMeasures => "rectangle_measures",
            ProblemType::SquareMeasures => "square_measures",
            ProblemType::PointDistance => "point_distance",
            ProblemType::PointMidpoint => "point_midpoint",
            ProblemType::RationalEquation => "rational_equation",
            ProblemType::RationalFunctionAnalysis => "rational_function_analysis",
            ProblemType::AddRational => "add_rational",
            ProblemType::SimplifyRational => "simplify_rational",
        }
    }

    /// Inverse of [`name`](Self::name). Unknown names yield `None`, which
    /// callers treat as "not a registered type" (the classifier then runs
    /// the pattern path instead).
    pub fn from_name(name: &str) -> Option<ProblemType> {
        ProblemType::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// Human-facing title for section headers and CLI output.
    pub fn title(&self) -> &'static str {
        match self {
            ProblemType::PythagoreanTheorem => "Pythagorean Theorem",
            ProblemType::TriangleAngles => "Triangle Angle Sum",
            ProblemType::TriangleArea => "Triangle Area",
            ProblemType::TrianglePerimeter => "Triangle Perimeter",
            ProblemType::TrapezoidArea => "Trapezoid Area",
            ProblemType::PrismVolume => "Rectangular Prism Volume",
            ProblemType::CylinderVolume => "Cylinder Volume",
            ProblemType::CircleMeasures => "Circle Measures",
            ProblemType::RectangleMeasures => "Rectangle Measures",
            ProblemType::SquareMeasures => "Square Measures",
            ProblemType::PointDistance => "Distance Between Points",
            ProblemType::PointMidpoint => "Midpoint of a Segment",
            ProblemType::RationalEquation => "Rational Equation",
            ProblemType::RationalFunctionAnalysis => "Rational Function Analysis",
            ProblemType::AddRational => "Adding Rational Expressions",
            ProblemType::SimplifyRational => "Simplifying Rational Expressions",
        }
    }

    pub fn family(&self) -> Family {
        match self {
            ProblemType::RationalEquation
            | ProblemType::RationalFunctionAnalysis
            | ProblemType::AddRational
            | ProblemType::SimplifyRational => Family::RationalExpressions,
            _ => Family::Geometry,
        }
    }

    /// Canonical example text. Classifying this text must return the same
    /// type (catalog self-consistency, enforced by tests).
    pub fn canonical_example(&self) -> &'static str {
        match self {
            ProblemType::PythagoreanTheorem => {
                "A right triangle has legs 3 and 4. Find the hypotenuse."
            }
            ProblemType::TriangleAngles => {
                "Two angles of a triangle measure 50 and 60 degrees. Find the missing angle."
            }
            ProblemType::TriangleArea => "Find the area of a triangle with base 6 and height 8.",
            ProblemType::TrianglePerimeter => {
                "Find the perimeter of a triangle with sides 3, 4 and 5."
            }
            ProblemType::TrapezoidArea => {
                "Find the area of a trapezoid with bases 4 and 6 and height 3."
            }
            ProblemType::PrismVolume => {
                "Find the volume of a rectangular prism with length 2, width 3 and height 4."
            }
            ProblemType::CylinderVolume => {
                "Find the volume of a cylinder with radius 2 and height 5."
            }
            ProblemType::CircleMeasures => "Find the area of a circle with radius 5.",
            ProblemType::RectangleMeasures => {
                "Find the area of a rectangle with length 7 and width 3."
            }
            ProblemType::SquareMeasures => "Find the perimeter of a square with side 4.",
            ProblemType::PointDistance => "Find the distance between (1, 2) and (4, 6).",
            ProblemType::PointMidpoint => "Find the midpoint of (2, 4) and (6, 8).",
            ProblemType::RationalEquation => "Solve 1/(x - 2) = 3/(x + 2).",
            ProblemType::RationalFunctionAnalysis => {
                "Find the asymptotes of (2x^2 + 1)/(x^2 - 4)."
            }
            ProblemType::AddRational => "Combine 1/(x + 1) + 2/(x - 1).",
            ProblemType::SimplifyRational => "Simplify (x^2 - 4)/(x + 2).",
        }
    }
}

impl std::fmt::Display for ProblemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for ty in ProblemType::ALL {
            assert_eq!(ProblemType::from_name(ty.name()), Some(ty));
        }
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert_eq!(ProblemType::from_name("quintic_equation"), None);
    }

    #[test]
    fn test_all_is_deduplicated() {
        let mut seen = std::collections::HashSet::new();
        for ty in ProblemType::ALL {
            assert!(seen.insert(ty), "duplicate catalog entry: {ty}");
        }
    }
}
