use shockline_core::{EquationProblem, Model, Observer};

use crate::equation::{Bracket, EvaluateResult, Evaluation, Sign, SolveError, evaluate};

use super::{Action, Event};

/// How the solver proceeds after one evaluation.
#[derive(Debug)]
pub(super) enum Decision {
    /// Keep the half of the bracket implied by this residual sign.
    Continue(Sign),
    StopEarly,
    Error(SolveError),
}

type EvalOutcome<I, O> = (Option<Evaluation<I, O, 1>>, Decision);

/// Evaluates points, emits events, and counts model calls.
pub(super) struct EvalContext<'ctx, M, P, Obs> {
    model: &'ctx M,
    problem: &'ctx P,
    observer: &'ctx mut Obs,
    evals: usize,
}

impl<'ctx, M, P, Obs> EvalContext<'ctx, M, P, Obs>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'evt> Observer<Event<'evt, M, P>, Action>,
{
    pub(super) fn new(model: &'ctx M, problem: &'ctx P, observer: &'ctx mut Obs) -> Self {
        Self {
            model,
            problem,
            observer,
            evals: 0,
        }
    }

    /// Returns the number of evaluations performed so far.
    pub(super) fn evals(&self) -> usize {
        self.evals
    }

    /// Evaluates the left endpoint and returns the observer decision.
    pub(super) fn left_endpoint(&mut self, x: f64) -> EvalOutcome<M::Input, M::Output> {
        let result = self.evaluate(x);
        let action = self.observer.observe(&Event::Left { x, result: &result });
        Self::decide(result, action)
    }

    /// Evaluates the right endpoint and returns the observer decision.
    pub(super) fn right_endpoint(&mut self, x: f64) -> EvalOutcome<M::Input, M::Output> {
        let result = self.evaluate(x);
        let action = self.observer.observe(&Event::Right { x, result: &result });
        Self::decide(result, action)
    }

    /// Evaluates the midpoint and returns the observer decision.
    pub(super) fn midpoint(
        &mut self,
        x: f64,
        bracket: &Bracket,
    ) -> EvalOutcome<M::Input, M::Output> {
        let result = self.evaluate(x);
        let action = self.observer.observe(&Event::Midpoint {
            x,
            bracket,
            result: &result,
        });
        Self::decide(result, action)
    }

    fn evaluate(&mut self, x: f64) -> EvaluateResult<M, P, 1> {
        self.evals += 1;
        evaluate(self.model, self.problem, [x])
    }

    /// An assumed sign overrides the residual and drops the evaluation from
    /// the candidates for the reported root.
    fn decide(
        result: EvaluateResult<M, P, 1>,
        action: Option<Action>,
    ) -> EvalOutcome<M::Input, M::Output> {
        match (result, action) {
            (result, Some(Action::StopEarly)) => (result.ok(), Decision::StopEarly),
            (_, Some(Action::AssumeResidualSign(sign))) => (None, Decision::Continue(sign)),
            (Ok(eval), None) => {
                let sign = Sign::of(eval.residuals[0]);
                (Some(eval), Decision::Continue(sign))
            }
            (Err(error), None) => (None, Decision::Error(error.into())),
        }
    }
}
