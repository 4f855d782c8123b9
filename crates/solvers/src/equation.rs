//! Solvers for equation problems — finding roots of scalar equations.
//!
//! An [`EquationProblem`] maps solver variables `x: [f64; N]` to model inputs,
//! calls the model, and computes residuals. Solvers in this module drive those
//! residuals toward zero.
//!
//! # Solvers
//!
//! - [`bisection`] — guaranteed convergence on a bracketed interval
//! - [`brent`] — inverse quadratic interpolation with a bisection fallback,
//!   usually far fewer evaluations than bisection on smooth residuals
//!
//! Both solvers share the bracket contract: endpoints must be finite and
//! distinct, and the residuals at the endpoints must differ in sign. A bracket
//! without a sign change is reported as [`BracketError::NoSignChange`] rather
//! than returning a meaningless root.
//!
//! [`EquationProblem`]: shockline_core::EquationProblem

mod best;
mod bracket;
mod config;
mod error;
mod evaluate;
mod method;
mod solution;

pub mod bisection;
pub mod brent;

pub use bracket::{Bracket, BracketError, Sign};
pub use config::{Config, ConfigError};
pub use error::SolveError;
pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use method::{Method, solve_with};
pub use solution::{Solution, Status};
