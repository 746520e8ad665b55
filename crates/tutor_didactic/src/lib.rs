//! Didactic layer: turns a [`tutor_solver::Solution`] into an ordered,
//! pedagogically enriched explanation trace.
//!
//! Pure post-processing over solver output: the pipeline never changes a
//! solution, and every enrichment stage only adds fields to steps, never
//! removes or mutates the base ones.

pub mod base;
pub mod bridges;
pub mod enhance;
pub mod error_prevention;
pub mod pipeline;
pub mod scaffolding;
pub mod step;
pub mod vocabulary;

pub use pipeline::{synthesize, SynthesisOptions};
pub use step::{
    Bridge, ErrorPrevention, ExplanationLevel, Renderings, Scaffolding, Step, StepExpression,
    TraceItem,
};
