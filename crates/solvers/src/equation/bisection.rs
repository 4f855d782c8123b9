//! Bisection for single-variable equation problems.
//!
//! # Algorithm
//!
//! Bisection evaluates both bracket endpoints, checks that their residuals
//! differ in sign, then repeatedly evaluates the midpoint and keeps the half
//! that still contains the sign change. Convergence is guaranteed for any
//! continuous residual with a valid bracket; each iteration halves the width.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluation:
//!
//! - [`Event::Left`] and [`Event::Right`] for the bracket endpoints
//! - [`Event::Midpoint`] for each iteration, with the current bracket
//!
//! Observers can return [`Action::StopEarly`] to halt with the best evaluation
//! so far, or [`Action::AssumeResidualSign`] to keep going past a failed
//! evaluation (or to steer the bracket) when domain knowledge says which side
//! of the root a point lies on.

mod action;
mod eval_context;
mod event;

pub use action::Action;
pub use event::Event;

use shockline_core::{EquationProblem, Model, Observer};

use super::{Bracket, Config, Solution, SolveError, Status, best::Best, bracket::Bounds};

use eval_context::{Decision, EvalContext};

/// Errors returned by the bisection solver.
pub type Error = SolveError;

/// Finds a root of the equation using the bisection method.
///
/// The observer receives an [`Event`] for every evaluation.
/// See the [module docs](self) for details on observer actions.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or has no sign change, or if
/// the model or problem fails and the observer does not recover with
/// [`Action::AssumeResidualSign`].
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let bounds = Bounds::new(bracket)?;
    let [left, right] = bounds.as_array();

    let mut ctx = EvalContext::new(model, problem, &mut observer);
    let mut best = Best::empty();

    let (eval, decision) = ctx.left_endpoint(left);
    if let Some(eval) = eval {
        best.update(eval);
    }
    let left_sign = match decision {
        Decision::Continue(sign) => sign,
        Decision::StopEarly => return best.finish(Status::StoppedByObserver, 0, ctx.evals()),
        Decision::Error(error) => return Err(error),
    };

    let (eval, decision) = ctx.right_endpoint(right);
    if let Some(eval) = eval {
        best.update(eval);
    }
    let right_sign = match decision {
        Decision::Continue(sign) => sign,
        Decision::StopEarly => return best.finish(Status::StoppedByObserver, 0, ctx.evals()),
        Decision::Error(error) => return Err(error),
    };

    if best.is_residual_converged(config.residual_tol()) {
        return best.finish(Status::Converged, 0, ctx.evals());
    }

    let mut bracket = Bracket::new(bounds, left_sign, right_sign)?;

    for iter in 1..=config.max_iters() {
        let mid = bracket.midpoint();
        let (eval, decision) = ctx.midpoint(mid, &bracket);
        if let Some(eval) = eval {
            best.update(eval);
        }

        match decision {
            Decision::Continue(sign) => bracket.shrink(mid, sign),
            Decision::StopEarly => {
                return best.finish(Status::StoppedByObserver, iter, ctx.evals());
            }
            Decision::Error(error) => return Err(error),
        }

        if best.is_residual_converged(config.residual_tol())
            || bracket.is_x_converged(config.x_abs_tol(), config.x_rel_tol())
        {
            return best.finish(Status::Converged, iter, ctx.evals());
        }
    }

    best.finish(Status::MaxIters, config.max_iters(), ctx.evals())
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or has no sign change, or if
/// the model or problem fails during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use thiserror::Error;

    use crate::equation::BracketError;

    /// Model that squares its input.
    struct SquareModel;
    impl Model for SquareModel {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(input * input)
        }
    }

    /// Equation problem that drives the model output to a target value.
    struct TargetOutputProblem {
        target: f64,
    }
    impl EquationProblem<1> for TargetOutputProblem {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
            Ok(x[0])
        }

        fn residuals(
            &self,
            _input: &Self::Input,
            output: &Self::Output,
        ) -> Result<[f64; 1], Self::Error> {
            Ok([output - self.target])
        }
    }

    #[derive(Debug, Error)]
    #[error("undefined above {limit}")]
    struct Undefined {
        limit: f64,
    }

    /// Model that fails above a limit, like a relation leaving its domain.
    struct LimitedSquare {
        limit: f64,
    }
    impl Model for LimitedSquare {
        type Input = f64;
        type Output = f64;
        type Error = Undefined;

        fn call(&self, input: &f64) -> Result<f64, Self::Error> {
            if *input > self.limit {
                Err(Undefined { limit: self.limit })
            } else {
                Ok(input * input)
            }
        }
    }

    #[test]
    fn finds_square_root() {
        let solution = solve_unobserved(
            &SquareModel,
            &TargetOutputProblem { target: 9.0 },
            [0.0, 10.0],
            &Config::default(),
        )
        .expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 3.0, epsilon = 1e-10);
        assert_relative_eq!(solution.snapshot.output, 9.0, epsilon = 1e-9);
        assert_eq!(solution.evals, solution.iters + 2);
    }

    #[test]
    fn normalizes_reversed_bracket() {
        let solution = solve_unobserved(
            &SquareModel,
            &TargetOutputProblem { target: 36.0 },
            [10.0, 0.0],
            &Config::default(),
        )
        .expect("should solve with reversed bracket");

        assert!(solution.converged());
        assert_relative_eq!(solution.x, 6.0, epsilon = 1e-10);
    }

    #[test]
    fn endpoint_root_converges_without_iterating() {
        let solution = solve_unobserved(
            &SquareModel,
            &TargetOutputProblem { target: 4.0 },
            [2.0, 10.0],
            &Config::default(),
        )
        .expect("endpoint is a root");

        assert!(solution.converged());
        assert_eq!(solution.iters, 0);
        assert_eq!(solution.evals, 2);
        assert_relative_eq!(solution.x, 2.0);
    }

    #[test]
    fn errors_on_no_sign_change() {
        let result = solve_unobserved(
            &SquareModel,
            &TargetOutputProblem { target: 9.0 },
            [5.0, 10.0],
            &Config::default(),
        );

        assert!(matches!(
            result,
            Err(Error::InvalidBracket(BracketError::NoSignChange))
        ));
    }

    #[test]
    fn errors_on_bad_bracket() {
        let problem = TargetOutputProblem { target: 25.0 };

        let result = solve_unobserved(&SquareModel, &problem, [5.0, 5.0], &Config::default());
        assert!(matches!(
            result,
            Err(Error::InvalidBracket(BracketError::ZeroWidth))
        ));

        let result = solve_unobserved(&SquareModel, &problem, [f64::NAN, 1.0], &Config::default());
        assert!(matches!(
            result,
            Err(Error::InvalidBracket(BracketError::NonFinite))
        ));
    }

    #[test]
    fn zero_iters_returns_best_endpoint() {
        let config = Config::new(0, 1e-12, 1e-12, 1e-12).expect("valid config");
        let solution = solve_unobserved(
            &SquareModel,
            &TargetOutputProblem { target: 9.0 },
            [2.0, 10.0],
            &config,
        )
        .expect("should return best endpoint");

        // |4 - 9| = 5 beats |100 - 9| = 91.
        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 0);
        assert_relative_eq!(solution.x, 2.0);
    }

    #[test]
    fn observer_can_stop_iteration() {
        let mut midpoints = 0usize;
        let observer = |event: &Event<'_, SquareModel, TargetOutputProblem>| {
            if let Event::Midpoint { .. } = event {
                midpoints += 1;
                if midpoints >= 3 {
                    return Some(Action::StopEarly);
                }
            }
            None
        };

        let solution = solve(
            &SquareModel,
            &TargetOutputProblem { target: 9.0 },
            [0.0, 10.0],
            &Config::default(),
            observer,
        )
        .expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
        assert_eq!(solution.evals, 5);
    }

    #[test]
    fn model_failure_propagates_without_recovery() {
        let result = solve_unobserved(
            &LimitedSquare { limit: 4.0 },
            &TargetOutputProblem { target: 9.0 },
            [0.0, 10.0],
            &Config::default(),
        );

        assert!(matches!(result, Err(Error::Model(_))));
    }

    #[test]
    fn assumed_sign_recovers_from_model_failure() {
        // Failures happen above the root, where the residual would be positive.
        let observer = |event: &Event<'_, LimitedSquare, TargetOutputProblem>| {
            event.result().as_ref().err().map(|_| Action::assume_positive())
        };

        let solution = solve(
            &LimitedSquare { limit: 4.0 },
            &TargetOutputProblem { target: 9.0 },
            [0.0, 10.0],
            &Config::default(),
            observer,
        )
        .expect("should recover");

        assert!(solution.converged());
        assert_relative_eq!(solution.x, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn midpoint_events_report_shrinking_bracket() {
        let mut widths = Vec::new();
        let observer = |event: &Event<'_, SquareModel, TargetOutputProblem>| {
            if let Some([left, right]) = event.bracket() {
                widths.push(right - left);
            }
            None
        };

        solve(
            &SquareModel,
            &TargetOutputProblem { target: 2.0 },
            [0.0, 2.0],
            &Config::default(),
            observer,
        )
        .expect("should solve");

        assert!(widths.len() > 10);
        assert!(widths.windows(2).all(|w| w[1] < w[0]));
    }
}
