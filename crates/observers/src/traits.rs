//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasPoint`] — events that carry the evaluated `x`
//! - [`HasResidual`] — events that carry a residual value
//! - [`HasBracket`] — events that may carry the current search bracket
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use shockline_core::Observer;
//! use shockline_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use shockline_core::{EquationProblem, Model};

use shockline_solvers::equation::{bisection, brent};

/// An event that carries the evaluated solver variable.
pub trait HasPoint {
    /// Returns the `x` value that was evaluated (or attempted).
    fn x(&self) -> f64;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no residual
    /// is available.
    fn residual(&self) -> f64;
}

/// An event that may carry the solver's current bracket.
pub trait HasBracket {
    /// Returns the bracket as `[left, right]`, if the event has one.
    fn bracket(&self) -> Option<[f64; 2]>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- bisection::Event ---

impl<M, P> HasPoint for bisection::Event<'_, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn x(&self) -> f64 {
        bisection::Event::x(self)
    }
}

impl<M, P> HasResidual for bisection::Event<'_, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn residual(&self) -> f64 {
        match self.result() {
            Ok(eval) => eval.residuals[0],
            Err(_) => f64::NAN,
        }
    }
}

impl<M, P> HasBracket for bisection::Event<'_, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn bracket(&self) -> Option<[f64; 2]> {
        bisection::Event::bracket(self)
    }
}

// --- brent::Event ---

impl<M, P> HasPoint for brent::Event<'_, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn x(&self) -> f64 {
        brent::Event::x(self)
    }
}

impl<M, P> HasResidual for brent::Event<'_, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn residual(&self) -> f64 {
        match self.result() {
            Ok(eval) => eval.residuals[0],
            Err(_) => f64::NAN,
        }
    }
}

impl<M, P> HasBracket for brent::Event<'_, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn bracket(&self) -> Option<[f64; 2]> {
        brent::Event::bracket(self)
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for brent::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
