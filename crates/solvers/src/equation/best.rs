use super::{Evaluation, Solution, SolveError, Status};

/// The evaluation with the smallest residual magnitude seen so far.
///
/// Empty until the first successful evaluation, which may never come if
/// every evaluation fails and an observer keeps the solver going.
pub(crate) struct Best<I, O> {
    eval: Option<Evaluation<I, O, 1>>,
}

impl<I, O> Best<I, O> {
    pub(crate) fn empty() -> Self {
        Self { eval: None }
    }

    /// Keeps `eval` if it beats the current best; ties keep the earlier one.
    pub(crate) fn update(&mut self, eval: Evaluation<I, O, 1>) {
        if let Some(best) = self.eval.as_ref()
            && eval.residuals[0].abs() >= best.residuals[0].abs()
        {
            return;
        }
        self.eval = Some(eval);
    }

    pub(crate) fn is_residual_converged(&self, residual_tol: f64) -> bool {
        self.eval
            .as_ref()
            .is_some_and(|eval| eval.residuals[0].abs() <= residual_tol)
    }

    /// Builds the solver record from the best evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NoSuccessfulEvaluation`] if nothing was recorded.
    pub(crate) fn finish(
        self,
        status: Status,
        iters: usize,
        evals: usize,
    ) -> Result<Solution<I, O>, SolveError> {
        let Evaluation {
            x: [x],
            residuals: [residual],
            snapshot,
        } = self.eval.ok_or(SolveError::NoSuccessfulEvaluation)?;

        Ok(Solution {
            status,
            x,
            residual,
            snapshot,
            iters,
            evals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use shockline_core::Snapshot;

    /// An evaluation of `M² − 4` at Mach `x`.
    fn at_mach(x: f64) -> Evaluation<f64, f64, 1> {
        Evaluation {
            x: [x],
            residuals: [x * x - 4.0],
            snapshot: Snapshot::new(x, x * x),
        }
    }

    #[test]
    fn smallest_magnitude_wins_regardless_of_sign() {
        let mut best = Best::empty();
        for mach in [1.0, 3.0, 2.1, 1.8] {
            best.update(at_mach(mach));
        }

        let solution = best.finish(Status::MaxIters, 2, 4).unwrap();
        assert_relative_eq!(solution.x, 2.1);
        assert_relative_eq!(solution.residual, 0.41, epsilon = 1e-12);
        assert_relative_eq!(solution.snapshot.output, 4.41, epsilon = 1e-12);
        assert_eq!((solution.iters, solution.evals), (2, 4));
    }

    #[test]
    fn ties_keep_the_first_evaluation() {
        let mut best = Best::empty();
        best.update(at_mach(1.0));
        best.update(Evaluation {
            residuals: [3.0],
            ..at_mach(5.0)
        });

        let solution = best.finish(Status::Converged, 0, 2).unwrap();
        assert_relative_eq!(solution.x, 1.0);
    }

    #[test]
    fn residual_tolerance_needs_an_evaluation() {
        let mut best = Best::empty();
        assert!(!best.is_residual_converged(f64::INFINITY));

        best.update(at_mach(2.01));
        assert!(!best.is_residual_converged(1e-3));
        assert!(best.is_residual_converged(0.1));
    }

    #[test]
    fn finishing_empty_is_an_error() {
        let best: Best<f64, f64> = Best::empty();
        assert!(matches!(
            best.finish(Status::StoppedByObserver, 0, 3),
            Err(SolveError::NoSuccessfulEvaluation)
        ));
    }
}
