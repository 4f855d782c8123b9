//! Shared fixtures for the cross-crate tests.

use shockline_core::{EquationProblem, Model};
use shockline_solvers::equation::{SolveError, evaluate};

/// Mach numbers of the printed `p/pt` table used in the interpolation tests.
pub const TABLE_MACHS: [f64; 5] = [1.70, 1.71, 1.72, 1.73, 1.74];

/// `p/pt` at [`TABLE_MACHS`] for `γ = 1.4`, rounded to five places.
pub const TABLE_PRESSURE_RATIOS: [f64; 5] = [0.20259, 0.19956, 0.19656, 0.19361, 0.19070];

/// Evaluates a scalar problem's residual at `x`.
///
/// # Errors
///
/// Returns an error if the model or problem fails at `x`.
pub fn residual_at<M, P>(model: &M, problem: &P, x: f64) -> Result<f64, SolveError>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let evaluation = evaluate(model, problem, [x])?;
    Ok(evaluation.residuals[0])
}
