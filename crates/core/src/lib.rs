//! Core traits and types for shockline.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! the gas-dynamics models build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`EquationProblem`] — adapts solver variables to model inputs and computes
//!   residuals from model outputs

mod model;
mod observer;
mod problems;

pub use observer::Observer;
pub use problems::EquationProblem;
pub use {model::Model, model::Snapshot};
