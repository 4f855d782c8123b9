use shockline_core::{EquationProblem, Model};

use crate::equation::{Bracket, EvaluateResult};

/// One bisection evaluation, passed to the observer before the solver
/// acts on it.
///
/// `result` is the evaluation outcome; a failed evaluation can be recovered
/// from with [`Action::AssumeResidualSign`](super::Action::AssumeResidualSign).
pub enum Event<'a, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// The lower end of the caller's bracket.
    Left {
        x: f64,
        result: &'a EvaluateResult<M, P, 1>,
    },
    /// The upper end of the caller's bracket.
    Right {
        x: f64,
        result: &'a EvaluateResult<M, P, 1>,
    },
    /// The midpoint of `bracket`, which has a sign change.
    Midpoint {
        x: f64,
        bracket: &'a Bracket,
        result: &'a EvaluateResult<M, P, 1>,
    },
}

impl<'a, M, P> Event<'a, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Event::Left { x, .. } | Event::Right { x, .. } | Event::Midpoint { x, .. } => *x,
        }
    }

    pub fn result(&self) -> &'a EvaluateResult<M, P, 1> {
        match self {
            Event::Left { result, .. }
            | Event::Right { result, .. }
            | Event::Midpoint { result, .. } => result,
        }
    }

    /// Returns `[left, right]` for midpoint events.
    #[must_use]
    pub fn bracket(&self) -> Option<[f64; 2]> {
        match self {
            Event::Midpoint { bracket, .. } => Some(bracket.as_array()),
            Event::Left { .. } | Event::Right { .. } => None,
        }
    }
}
