use crate::equation::Sign;

/// What an observer can ask the bisection solver to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Halt and report the best evaluation so far.
    StopEarly,

    /// Treat the just-evaluated point as having a residual of this sign.
    ///
    /// Lets the solver continue past a model failure when the caller knows
    /// which side of the root the point is on, e.g. a relation undefined
    /// beyond some limit. The evaluation, if any, is discarded rather than
    /// considered for the reported root.
    AssumeResidualSign(Sign),
}

impl Action {
    /// Shorthand for `AssumeResidualSign(Sign::Positive)`.
    #[must_use]
    pub fn assume_positive() -> Self {
        Self::AssumeResidualSign(Sign::Positive)
    }

    /// Shorthand for `AssumeResidualSign(Sign::Negative)`.
    #[must_use]
    pub fn assume_negative() -> Self {
        Self::AssumeResidualSign(Sign::Negative)
    }
}
