//! The static tables behind [`ContentDb`](crate::ContentDb).

use crate::labels;
use crate::{ContentDb, Theory};
use rustc_hash::FxHashMap;
use tutor_catalog::ProblemType;

fn theory_table() -> FxHashMap<ProblemType, Theory> {
    use ProblemType::*;
    let mut map = FxHashMap::default();
    let mut add = |ty, overview, formulas| {
        map.insert(ty, Theory { overview, formulas });
    };

    add(
        PythagoreanTheorem,
        "In a right triangle the square of the hypotenuse equals the sum of \
         the squares of the legs. The hypotenuse is always the side across \
         from the right angle, and always the longest side.",
        &[
            ("Pythagorean theorem", "a^2 + b^2 = c^2"),
            ("Solving for the hypotenuse", "c = sqrt(a^2 + b^2)"),
            ("Solving for a leg", "a = sqrt(c^2 - b^2)"),
        ],
    );
    add(
        TriangleAngles,
        "The three interior angles of any triangle add up to 180 degrees. \
         Knowing two angles always determines the third.",
        &[("Angle sum", "A + B + C = 180")],
    );
    add(
        TriangleArea,
        "The area of a triangle is half the product of a base and the \
         height drawn perpendicular to that base. Any side can serve as \
         the base as long as the height is measured to it.",
        &[("Triangle area", "A = (1/2) * b * h")],
    );
    add(
        TrianglePerimeter,
        "The perimeter of a triangle is the total distance around it: the \
         sum of its three side lengths.",
        &[("Triangle perimeter", "P = a + b + c")],
    );
    add(
        TrapezoidArea,
        "A trapezoid has two parallel sides (the bases). Its area is the \
         average of the bases times the height between them.",
        &[("Trapezoid area", "A = (1/2) * (b1 + b2) * h")],
    );
    add(
        PrismVolume,
        "The volume of a rectangular prism is the product of its three \
         edge lengths. It counts how many unit cubes fit inside.",
        &[("Prism volume", "V = l * w * h")],
    );
    add(
        CylinderVolume,
        "A cylinder is a circle swept through a height. Its volume is the \
         area of the circular base times the height.",
        &[("Cylinder volume", "V = pi * r^2 * h")],
    );
    add(
        CircleMeasures,
        "The radius determines everything about a circle. The area grows \
         with the square of the radius; the circumference grows linearly.",
        &[
            ("Circle area", "A = pi * r^2"),
            ("Circumference", "C = 2 * pi * r"),
            ("Diameter", "d = 2r"),
        ],
    );
    add(
        RectangleMeasures,
        "A rectangle's area is length times width; its perimeter is twice \
         the sum of length and width.",
        &[
            ("Rectangle area", "A = l * w"),
            ("Rectangle perimeter", "P = 2(l + w)"),
        ],
    );
    add(
        SquareMeasures,
        "A square is a rectangle with equal sides, so one measurement \
         determines both its area and its perimeter.",
        &[("Square area", "A = s^2"), ("Square perimeter", "P = 4s")],
    );
    add(
        PointDistance,
        "The distance between two points follows from the Pythagorean \
         theorem applied to the horizontal and vertical changes.",
        &[(
            "Distance formula",
            "d = sqrt((x2 - x1)^2 + (y2 - y1)^2)",
        )],
    );
    add(
        PointMidpoint,
        "The midpoint of a segment averages the coordinates of its \
         endpoints.",
        &[("Midpoint formula", "M = ((x1 + x2)/2, (y1 + y2)/2)")],
    );
    add(
        RationalEquation,
        "A rational equation sets two fraction expressions equal. Any \
         value that zeroes a denominator is excluded from the domain; a \
         candidate root that lands on such a value is extraneous and must \
         be rejected even if the transformed equation accepts it.",
        &[
            ("Domain restriction", "denominator != 0"),
            ("Root check", "substitute x back into both sides"),
        ],
    );
    add(
        RationalFunctionAnalysis,
        "The behavior of a rational function is read off the degrees and \
         leading coefficients of its numerator and denominator: zeros of \
         the denominator give vertical asymptotes or holes, and the degree \
         comparison gives the end behavior.",
        &[
            ("Vertical asymptote", "denominator zero that does not cancel"),
            ("Hole", "common factor of numerator and denominator"),
            ("Horizontal asymptote (deg n < deg d)", "y = 0"),
            ("Horizontal asymptote (deg n = deg d)", "y = leading ratio"),
        ],
    );
    add(
        AddRational,
        "Fractions only add when they share a denominator. The least \
         common denominator (LCD) is the smallest expression every \
         denominator divides; each fraction is rescaled to it before the \
         numerators are combined.",
        &[
            ("LCD", "least common multiple of the denominators"),
            ("Addition", "a/c + b/c = (a + b)/c"),
        ],
    );
    add(
        SimplifyRational,
        "A rational expression is simplified by factoring numerator and \
         denominator and cancelling their common factors. Cancelled \
         factors still restrict the domain.",
        &[
            ("Cancellation", "(a*k)/(b*k) = a/b, k != 0"),
            ("Domain restriction", "original denominator != 0"),
        ],
    );
    map
}

type MistakeRow = ((ProblemType, &'static str), &'static [&'static str]);

const MISTAKES: &[MistakeRow] = &[
    (
        (ProblemType::TriangleArea, labels::STATE_FORMULA),
        &["Using b * h without the 1/2, which doubles the area."],
    ),
    (
        (ProblemType::TriangleArea, labels::SUBSTITUTE),
        &[
            "Swapping base and height (harmless here, but a habit that hurts with slant heights).",
            "Using a slant side instead of the perpendicular height.",
        ],
    ),
    (
        (ProblemType::PythagoreanTheorem, labels::STATE_FORMULA),
        &["Writing a + b = c instead of a^2 + b^2 = c^2."],
    ),
    (
        (ProblemType::PythagoreanTheorem, labels::SUBSTITUTE),
        &["Putting a leg where the hypotenuse belongs; c is always the longest side."],
    ),
    (
        (ProblemType::PythagoreanTheorem, labels::COMPUTE),
        &[
            "Forgetting the square root at the end and reporting c^2.",
            "Adding the sides before squaring: (a + b)^2 is not a^2 + b^2.",
        ],
    ),
    (
        (ProblemType::TriangleAngles, labels::COMPUTE),
        &["Subtracting from 90 or 360 instead of 180."],
    ),
    (
        (ProblemType::CircleMeasures, labels::SUBSTITUTE),
        &["Using the diameter where the formula expects the radius."],
    ),
    (
        (ProblemType::CircleMeasures, labels::COMPUTE),
        &["Computing 2 * pi * r for area or pi * r^2 for circumference."],
    ),
    (
        (ProblemType::TrapezoidArea, labels::SUBSTITUTE),
        &["Averaging a base with the height instead of the two bases."],
    ),
    (
        (ProblemType::PointDistance, labels::SUBSTITUTE),
        &["Mixing coordinates from different points when forming the differences."],
    ),
    (
        (ProblemType::PointDistance, labels::COMPUTE),
        &["Dropping the square root, reporting the squared distance."],
    ),
    (
        (ProblemType::PointMidpoint, labels::COMPUTE),
        &["Subtracting the coordinates instead of averaging them."],
    ),
    (
        (ProblemType::RationalEquation, labels::IDENTIFY_RESTRICTIONS),
        &["Skipping the restriction list entirely, which hides extraneous roots."],
    ),
    (
        (ProblemType::RationalEquation, labels::CHECK_EXTRANEOUS),
        &["Keeping a root that zeroes a denominator because it satisfied the cleared equation."],
    ),
    (
        (ProblemType::SimplifyRational, labels::FACTOR),
        &["Cancelling terms instead of factors: the x in (x + 2)/x does not cancel."],
    ),
    (
        (ProblemType::SimplifyRational, labels::CANCEL),
        &["Forgetting that the cancelled factor still restricts the domain."],
    ),
    (
        (ProblemType::AddRational, labels::FIND_LCD),
        &["Multiplying all denominators together when a smaller common denominator exists."],
    ),
    (
        (ProblemType::AddRational, labels::COMBINE),
        &["Adding denominators as well as numerators."],
    ),
    (
        (ProblemType::RationalFunctionAnalysis, labels::ANALYZE_DEGREES),
        &["Calling a cancelled denominator zero an asymptote when it is a hole."],
    ),
];

type TypeRows = (ProblemType, &'static [&'static str]);

const NOTES: &[TypeRows] = &[
    (
        ProblemType::TriangleArea,
        &[
            "Students who see why the 1/2 appears (a triangle is half a parallelogram) stop forgetting it.",
            "Have students point to the height; it is the most commonly misidentified measurement.",
        ],
    ),
    (
        ProblemType::PythagoreanTheorem,
        &[
            "Square tiles on each side make the identity concrete before the algebra.",
            "Emphasize that the theorem only applies to right triangles.",
        ],
    ),
    (
        ProblemType::TriangleAngles,
        &["Tearing the corners off a paper triangle and lining them up shows the 180-degree sum physically."],
    ),
    (
        ProblemType::CircleMeasures,
        &["Students regularly conflate area and circumference; asking 'is the answer a length or a surface?' catches most slips."],
    ),
    (
        ProblemType::RationalEquation,
        &["Always collect domain restrictions before any algebra; restrictions found late tend to be forgotten."],
    ),
    (
        ProblemType::SimplifyRational,
        &["The cancelled factor is invisible in the simplified form; insist the restriction is written next to the answer."],
    ),
    (
        ProblemType::AddRational,
        &["Numeric warm-ups (1/6 + 1/4) transfer directly to the algebraic LCD procedure."],
    ),
    (
        ProblemType::RationalFunctionAnalysis,
        &["Degree comparison is a three-way fork; a small table of the three cases is worth memorizing."],
    ),
];

const ALTERNATIVES: &[TypeRows] = &[
    (
        ProblemType::TriangleArea,
        &[
            "Heron's formula computes the area from three sides when no height is known.",
            "On a grid, the shoelace formula works directly from vertex coordinates.",
        ],
    ),
    (
        ProblemType::PythagoreanTheorem,
        &[
            "Recognize scaled Pythagorean triples (3-4-5, 5-12-13) to skip the arithmetic.",
            "Trigonometric ratios solve the triangle when an angle is known instead of a side.",
        ],
    ),
    (
        ProblemType::TriangleAngles,
        &["Exterior-angle reasoning: an exterior angle equals the sum of the two remote interior angles."],
    ),
    (
        ProblemType::CircleMeasures,
        &["Work from the diameter: A = (pi/4) d^2 avoids halving first."],
    ),
    (
        ProblemType::PointDistance,
        &["Sketch the right triangle on the grid and apply the Pythagorean theorem directly."],
    ),
    (
        ProblemType::RationalEquation,
        &[
            "Cross-multiplication, when each side is a single fraction.",
            "Multiplying through by the LCD clears all denominators at once.",
        ],
    ),
    (
        ProblemType::SimplifyRational,
        &["Polynomial long division also reduces the expression when the degrees allow it."],
    ),
    (
        ProblemType::AddRational,
        &["Combine two fractions at a time instead of finding one LCD for all of them."],
    ),
    (
        ProblemType::RationalFunctionAnalysis,
        &["Evaluate the function at a few large inputs to confirm the end behavior numerically."],
    ),
];

const TROUBLESHOOTING: &[TypeRows] = &[
    (
        ProblemType::PythagoreanTheorem,
        &[
            "If c^2 - b^2 comes out negative, the labeled hypotenuse is not the longest side.",
            "A non-integer answer is normal; only special triangles give whole numbers.",
        ],
    ),
    (
        ProblemType::TriangleAngles,
        &["If the result is negative, the given angles already exceed 180 degrees; re-check the values."],
    ),
    (
        ProblemType::CircleMeasures,
        &["An answer that quadruples when the input doubles is an area; one that doubles is a circumference."],
    ),
    (
        ProblemType::RationalEquation,
        &["If both sides are undefined at a candidate, that candidate was never in the domain."],
    ),
    (
        ProblemType::SimplifyRational,
        &["If nothing cancels, verify each factorization by re-expanding it."],
    ),
    (
        ProblemType::AddRational,
        &["If the result looks too messy, the LCD was probably larger than necessary."],
    ),
    (
        ProblemType::RationalFunctionAnalysis,
        &["A zero of the denominator that also zeroes the numerator needs the factored form to classify."],
    ),
];

pub(crate) fn build() -> ContentDb {
    ContentDb {
        theory: theory_table(),
        mistakes: MISTAKES.iter().copied().collect(),
        notes: NOTES.iter().copied().collect(),
        alternatives: ALTERNATIVES.iter().copied().collect(),
        troubleshooting: TROUBLESHOOTING.iter().copied().collect(),
    }
}
