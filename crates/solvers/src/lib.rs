//! Bracketed root-finding solvers for shockline.
//!
//! Solvers drive the residual of a one-variable [`EquationProblem`] to zero
//! on a caller-supplied bracket. Every solver reports the same [`Solution`]
//! record (status, root, residual, iteration and evaluation counts) and emits
//! events to an [`Observer`] so callers can trace or stop the iteration.
//!
//! [`EquationProblem`]: shockline_core::EquationProblem
//! [`Observer`]: shockline_core::Observer
//! [`Solution`]: equation::Solution

pub mod equation;
