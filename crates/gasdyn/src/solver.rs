use shockline_core::{EquationProblem, Model, Observer};
use shockline_solvers::equation::{
    Config, Method, Solution, Status, bisection, brent, solve_with,
};

use crate::GasError;

/// Root-finding method and tolerances used by the inverse relations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Solver {
    pub method: Method,
    pub config: Config,
}

impl Solver {
    /// Creates solver settings.
    #[must_use]
    pub fn new(method: Method, config: Config) -> Self {
        Self { method, config }
    }

    /// Solves a scalar equation problem on `bracket`.
    ///
    /// A run that stops at the iteration limit is an error; a run stopped by
    /// the observer is returned as-is so the caller can inspect it.
    ///
    /// # Errors
    ///
    /// Returns [`GasError::Solver`] for an invalid bracket (including one with
    /// no sign change) or a failed evaluation, and [`GasError::NotConverged`]
    /// when the iteration limit is reached.
    pub fn solve<M, P, Obs>(
        &self,
        model: &M,
        problem: &P,
        bracket: [f64; 2],
        observer: Obs,
    ) -> Result<Solution<M::Input, M::Output>, GasError>
    where
        M: Model,
        P: EquationProblem<1, Input = M::Input, Output = M::Output>,
        Obs: for<'a> Observer<bisection::Event<'a, M, P>, bisection::Action>
            + for<'a> Observer<brent::Event<'a, M, P>, brent::Action>,
    {
        let solution = solve_with(self.method, model, problem, bracket, &self.config, observer)?;
        match solution.status {
            Status::Converged | Status::StoppedByObserver => Ok(solution),
            Status::MaxIters => Err(GasError::NotConverged {
                iters: solution.iters,
                x: solution.x,
                residual: solution.residual,
            }),
        }
    }
}
