use std::{fmt, str::FromStr};

use shockline_core::{EquationProblem, Model, Observer};

use super::{Config, Solution, SolveError, bisection, brent};

/// A bracketed root-finding method selected at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Interval halving; see [`bisection`].
    Bisection,
    /// Brent's method; see [`brent`].
    #[default]
    Brent,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Bisection => f.write_str("bisection"),
            Method::Brent => f.write_str("brent"),
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bisection" | "bisect" => Ok(Method::Bisection),
            "brent" | "brentq" => Ok(Method::Brent),
            other => Err(format!("unknown root-finding method: {other}")),
        }
    }
}

/// Solves an equation problem with the selected method.
///
/// The observer must accept the events of both solvers. The no-op observer
/// `()` and observers written against the capability traits in
/// `shockline-observers` do.
///
/// # Errors
///
/// Returns the selected solver's error.
pub fn solve_with<M, P, Obs>(
    method: Method,
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, SolveError>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<bisection::Event<'a, M, P>, bisection::Action>
        + for<'a> Observer<brent::Event<'a, M, P>, brent::Action>,
{
    match method {
        Method::Bisection => bisection::solve(model, problem, bracket, config, observer),
        Method::Brent => brent::solve(model, problem, bracket, config, observer),
    }
}
