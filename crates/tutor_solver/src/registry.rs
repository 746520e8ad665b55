//! Exhaustive-match solver dispatch.
//!
//! The source of this design kept a string-keyed registry of bound
//! methods; here the closed [`ProblemType`] enum makes a missing solver a
//! compile error instead of a runtime `SolverNotFound`.

use crate::solution::Solution;
use crate::{angles, coordinate, geometry, pythagorean, rational};
use thiserror::Error;
use tracing::debug;
use tutor_catalog::{Params, ProblemType};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error(transparent)]
    Parse(#[from] tutor_math::ParseError),
}

/// Dispatch to the solver for `ty`. Pure: same inputs, same output, no
/// side effects beyond trace logging.
pub fn solve(ty: ProblemType, params: &Params) -> Result<Solution, SolverError> {
    debug!(ty = %ty, "dispatching solver");
    let solution = match ty {
        ProblemType::PythagoreanTheorem => pythagorean::solve(params),
        ProblemType::TriangleAngles => angles::solve(params),
        ProblemType::TriangleArea => geometry::triangle_area(params),
        ProblemType::TrianglePerimeter => geometry::triangle_perimeter(params),
        ProblemType::TrapezoidArea => geometry::trapezoid_area(params),
        ProblemType::PrismVolume => geometry::prism_volume(params),
        ProblemType::CylinderVolume => geometry::cylinder_volume(params),
        ProblemType::CircleMeasures => geometry::circle_measures(params),
        ProblemType::RectangleMeasures => geometry::rectangle_measures(params),
        ProblemType::SquareMeasures => geometry::square_measures(params),
        ProblemType::PointDistance => coordinate::distance(params),
        ProblemType::PointMidpoint => coordinate::midpoint(params),
        ProblemType::RationalEquation => rational::equation(params)?,
        ProblemType::RationalFunctionAnalysis => rational::analysis(params)?,
        ProblemType::AddRational => rational::add(params)?,
        ProblemType::SimplifyRational => rational::simplify(params)?,
    };
    debug_assert_eq!(solution.ty(), ty, "solution category must match problem type");
    Ok(solution)
}

/// Units helpers shared by the metric solvers.
pub(crate) mod units {
    use tutor_catalog::{get_text, Params};

    pub fn base(params: &Params) -> String {
        get_text(params, "units").unwrap_or("units").to_string()
    }

    pub fn square(params: &Params) -> String {
        format!("square {}", base(params))
    }

    pub fn cubic(params: &Params) -> String {
        format!("cubic {}", base(params))
    }
}

/// Report which of `keys` are absent from `params` as numbers.
pub(crate) fn missing_numbers(params: &Params, keys: &[&'static str]) -> Vec<&'static str> {
    keys.iter()
        .filter(|k| tutor_catalog::get_number(params, k).is_none())
        .copied()
        .collect()
}
