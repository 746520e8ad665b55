use thiserror::Error;
use tutor_catalog::ClassifyError;
use tutor_solver::SolverError;

/// Fatal failures. Recoverable outcomes (insufficient information,
/// invalid geometry, consistency checks) are `Solution` variants and
/// never appear here.
#[derive(Error, Debug)]
pub enum TutorError {
    #[error(transparent)]
    Classification(#[from] ClassifyError),
    /// Solver failure, annotated with the problem type and original
    /// input text.
    #[error("solver failed for '{ty}' on input '{input}': {source}")]
    Solver {
        ty: String,
        input: String,
        #[source]
        source: SolverError,
    },
    /// Any other unexpected internal failure, annotated the same way.
    #[error("internal failure for '{ty}' on input '{input}': {message}")]
    Internal {
        ty: String,
        input: String,
        message: String,
    },
}
