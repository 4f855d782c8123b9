use shockline_core::{EquationProblem, Model};

use crate::equation::EvaluateResult;

/// How Brent's method chose the point it just evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Inverse quadratic interpolation or secant step.
    Interpolation,
    /// Bisection fallback when interpolation would be too slow or leave the bracket.
    Bisection,
}

/// Event emitted by Brent's method for each evaluation.
pub enum Event<'a, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Bracket endpoint evaluation.
    Endpoint {
        /// The x value that was evaluated.
        x: f64,
        /// The result of the evaluation.
        result: &'a EvaluateResult<M, P, 1>,
    },
    /// Iteration step evaluation.
    Step {
        /// The x value that was evaluated.
        x: f64,
        /// Bracket the step was taken from, ordered left to right.
        bracket: [f64; 2],
        /// How the step was chosen.
        kind: StepKind,
        /// The result of the evaluation.
        result: &'a EvaluateResult<M, P, 1>,
    },
}

impl<'a, M, P> Event<'a, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Returns the evaluated x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Event::Endpoint { x, .. } | Event::Step { x, .. } => *x,
        }
    }

    /// Returns the evaluation result.
    pub fn result(&self) -> &'a EvaluateResult<M, P, 1> {
        match self {
            Event::Endpoint { result, .. } | Event::Step { result, .. } => result,
        }
    }

    /// Returns the bracket for step events.
    #[must_use]
    pub fn bracket(&self) -> Option<[f64; 2]> {
        match self {
            Event::Step { bracket, .. } => Some(*bracket),
            Event::Endpoint { .. } => None,
        }
    }
}
