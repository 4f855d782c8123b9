use shockline_core::Snapshot;

/// Why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket width or the residual met its tolerance.
    Converged,
    MaxIters,
    /// An observer returned a stop action.
    StoppedByObserver,
}

/// The result of a bracketed root solve.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the root.
    pub x: f64,

    /// Residual at the reported root estimate.
    pub residual: f64,

    /// Snapshot at the reported root estimate.
    pub snapshot: Snapshot<I, O>,

    /// Iteration count when the solver finished.
    ///
    /// Endpoint evaluations are not counted as iterations.
    pub iters: usize,

    /// Number of model evaluations, including the bracket endpoints.
    pub evals: usize,
}

impl<I, O> Solution<I, O> {
    /// Returns true if the solver met its tolerances.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
