//! Solver registry: one pure function per problem archetype, dispatched
//! by exhaustive match over the closed [`ProblemType`] catalog, plus the
//! verification module that re-derives confidence in a solution.

pub mod angles;
pub mod coordinate;
pub mod geometry;
pub mod pythagorean;
pub mod rational;
pub mod registry;
pub mod solution;
pub mod verify;

pub use registry::{solve, SolverError};
pub use solution::{
    Computed, FunctionAnalysis, Measure, RootSet, Solution, SolutionValue,
};
pub use verify::{verify, Confidence, VerificationReport};
