use thiserror::Error;

use shockline_core::{EquationProblem, Model, Snapshot};

/// A successful evaluation: the point, its residuals, and the model call.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    pub x: [f64; N],
    pub residuals: [f64; N],
    pub snapshot: Snapshot<I, O>,
}

/// Which side of an evaluation failed.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    #[error("model call failed")]
    Model(#[source] ME),
    /// Mapping `x` to an input, or computing residuals, failed.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Outcome of [`evaluate`] for a model and problem pair.
pub type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<<M as Model>::Error, <P as EquationProblem<N>>::Error>,
>;

/// Maps `x` to a model input, calls the model, and computes residuals.
///
/// # Errors
///
/// Returns the first failure, tagged with the side it came from.
pub fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: EquationProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let residuals = problem
        .residuals(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        residuals,
        snapshot: Snapshot::new(input, output),
    })
}
