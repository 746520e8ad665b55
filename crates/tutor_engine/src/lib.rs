//! Engine crate: owns the construction-time configuration and the
//! `solve()` call that runs the whole pipeline — classification,
//! parameter resolution, solver dispatch, step synthesis, verification,
//! and workbook-section assembly.

pub mod diagram;
pub mod error;
pub mod options;
pub mod sections;
pub mod tutor;

pub use diagram::{DiagramKind, DiagramSpec};
pub use error::TutorError;
pub use options::{TutorOptions, VerificationDetail};
pub use sections::{Row, Section};
pub use tutor::{SolveRequest, Solved, Tutor};
