//! Exact math support for the rational-expression family: univariate
//! polynomials over `BigRational`, rational expressions built from them,
//! and a real tokenizer/parser for textbook input (including Unicode-free
//! ASCII normalized by the catalog crate).

pub mod numeric;
pub mod parse;
pub mod poly;
pub mod rational;

pub use numeric::{approx_eq, approx_zero, format_number, TOLERANCE};
pub use parse::{parse_equation, parse_rational, ParseError};
pub use poly::Poly;
pub use rational::RationalExpr;
