use ninterp::error::{InterpolateError, ValidateError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterpError {
    #[error(transparent)]
    Validation(#[from] ValidateError),
    #[error(transparent)]
    Interpolation(#[from] InterpolateError),
}

/// Errors that can occur when building a [`Table`](crate::Table).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    #[error("axis lengths differ: {x} x values, {y} y values")]
    LengthMismatch { x: usize, y: usize },

    #[error("a table needs at least 2 points, got {len}")]
    TooShort { len: usize },

    #[error("non-finite value at index {index}")]
    NonFinite { index: usize },

    #[error("independent axis is not strictly monotonic at index {index}")]
    NotMonotonic { index: usize },
}
