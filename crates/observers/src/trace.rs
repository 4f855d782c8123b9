use serde::Serialize;
use shockline_core::Observer;

use crate::traits::{CanStopEarly, HasBracket, HasPoint, HasResidual};

/// One recorded solver evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TraceRow {
    /// 1-based evaluation index, endpoints included.
    pub eval: usize,
    /// Evaluated solver variable.
    pub x: f64,
    /// Residual at `x`, or `NaN` if the evaluation failed.
    pub residual: f64,
    /// Bracket the evaluation was taken from, if the solver reported one.
    pub bracket: Option<[f64; 2]>,
}

/// Records every evaluation a solver makes.
///
/// Pass `&mut trace` to a solver so the rows remain available afterwards.
/// An optional evaluation limit stops the solver once reached.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    rows: Vec<TraceRow>,
    limit: Option<usize>,
}

impl Trace {
    /// Creates an empty trace with no evaluation limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty trace that stops the solver after `limit` evaluations.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            rows: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Returns the recorded rows in evaluation order.
    #[must_use]
    pub fn rows(&self) -> &[TraceRow] {
        &self.rows
    }

    /// Consumes the trace and returns its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<TraceRow> {
        self.rows
    }

    fn record<E>(&mut self, event: &E) -> bool
    where
        E: HasPoint + HasResidual + HasBracket,
    {
        self.rows.push(TraceRow {
            eval: self.rows.len() + 1,
            x: event.x(),
            residual: event.residual(),
            bracket: event.bracket(),
        });
        self.limit.is_some_and(|limit| self.rows.len() >= limit)
    }
}

impl<E, A> Observer<E, A> for Trace
where
    E: HasPoint + HasResidual + HasBracket,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event).then(A::stop_early)
    }
}

impl<E, A> Observer<E, A> for &mut Trace
where
    E: HasPoint + HasResidual + HasBracket,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event).then(A::stop_early)
    }
}
