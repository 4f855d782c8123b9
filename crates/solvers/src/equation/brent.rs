//! Brent's method for single-variable equation problems.
//!
//! # Algorithm
//!
//! Brent's method keeps a bracket with a sign change like bisection, but
//! proposes each new point by inverse quadratic interpolation (or a secant
//! step when only two distinct points are known). A proposal is rejected in
//! favor of a bisection step when it would leave the bracket or when the
//! steps stop shrinking fast enough, so convergence is never slower than
//! bisection and usually superlinear on smooth residuals.
//!
//! # Observer Events
//!
//! - [`Event::Endpoint`] for each bracket endpoint
//! - [`Event::Step`] for each iteration, with the bracket it was taken from
//!   and the [`StepKind`] that produced it
//!
//! Observers can return [`Action::StopEarly`] to halt with the best evaluation
//! so far. Brent's interpolation needs residual values, so a failed evaluation
//! cannot be recovered from and is returned as an error.

mod action;
mod event;
mod state;

pub use action::Action;
pub use event::{Event, StepKind};

use shockline_core::{EquationProblem, Model, Observer};

use super::{
    Bracket, Config, Sign, Solution, SolveError, Status, best::Best, bracket::Bounds, evaluate,
};

use state::State;

/// Errors returned by Brent's method.
pub type Error = SolveError;

/// Finds a root of the equation using Brent's method.
///
/// The observer receives an [`Event`] for every evaluation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or has no sign change, or if
/// the model or problem fails during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let bounds = Bounds::new(bracket)?;
    let [left, right] = bounds.as_array();

    let mut search = Search {
        model,
        problem,
        observer,
        best: Best::empty(),
        evals: 0,
    };

    let Some(f_left) = search.eval(left, None)? else {
        return search.finish(Status::StoppedByObserver, 0);
    };
    let Some(f_right) = search.eval(right, None)? else {
        return search.finish(Status::StoppedByObserver, 0);
    };

    if search.best.is_residual_converged(config.residual_tol()) {
        return search.finish(Status::Converged, 0);
    }

    Bracket::new(bounds, Sign::of(f_left), Sign::of(f_right))?;

    let mut state = State::new(left, f_left, right, f_right);

    for iter in 1..=config.max_iters() {
        if state.is_x_converged(config) {
            return search.finish(Status::Converged, iter - 1);
        }

        let bracket = state.bracket();
        let (x, kind) = state.advance(config);
        let Some(residual) = search.eval(x, Some((bracket, kind)))? else {
            return search.finish(Status::StoppedByObserver, iter);
        };

        if search.best.is_residual_converged(config.residual_tol()) {
            return search.finish(Status::Converged, iter);
        }

        state.accept(residual);
    }

    if state.is_x_converged(config) {
        return search.finish(Status::Converged, config.max_iters());
    }
    search.finish(Status::MaxIters, config.max_iters())
}

/// Runs Brent's method without observation.
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

struct Search<'p, M: Model, P, Obs> {
    model: &'p M,
    problem: &'p P,
    observer: Obs,
    best: Best<M::Input, M::Output>,
    evals: usize,
}

impl<M, P, Obs> Search<'_, M, P, Obs>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    /// Evaluates `x`, emits its event, and tracks the best evaluation.
    ///
    /// Returns `Ok(None)` when the observer stops the solver.
    fn eval(&mut self, x: f64, step: Option<([f64; 2], StepKind)>) -> Result<Option<f64>, Error> {
        self.evals += 1;
        let result = evaluate(self.model, self.problem, [x]);

        let action = match step {
            None => self.observer.observe(&Event::Endpoint { x, result: &result }),
            Some((bracket, kind)) => self.observer.observe(&Event::Step {
                x,
                bracket,
                kind,
                result: &result,
            }),
        };

        match (result, action) {
            (Ok(eval), action) => {
                let residual = eval.residuals[0];
                self.best.update(eval);
                Ok(action.is_none().then_some(residual))
            }
            (Err(_), Some(Action::StopEarly)) => Ok(None),
            (Err(error), None) => Err(error.into()),
        }
    }

    fn finish(self, status: Status, iters: usize) -> Result<Solution<M::Input, M::Output>, Error> {
        self.best.finish(status, iters, self.evals)
    }
}
