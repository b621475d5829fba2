//! Errors raised for malformed input, before any pivoting happens.
//!
//! Infeasible, unbounded and iteration-limited runs are *not* errors: they are reported through
//! [`Status`](crate::solvers::Status) on an otherwise successful [`OptimizeResult`](crate::solvers::OptimizeResult).
use thiserror::Error;

pub use crate::matrix::ShapeError;

#[derive(Error, Debug, PartialEq)]
pub enum LinearProgramError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("The dimensions of your cost- and constraint arrays do not align: {0}")]
    IncompatibleInputDimensions(String),
    #[error("Invalid bounds for variable {index}: lower bound {lower} is incompatible with upper bound {upper}.")]
    InvalidBound { index: usize, lower: f64, upper: f64 },
    #[error("A parameter was set to an invalid value. {0}")]
    InvalidParameter(&'static str),
}
