use std::cmp::Ordering;

use thiserror::Error;

/// Reasons a bracket cannot be searched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    #[error("bracket endpoints must be finite")]
    NonFinite,

    #[error("bracket endpoints must differ")]
    ZeroWidth,

    #[error("no sign change: the bracket does not contain a root")]
    NoSignChange,
}

/// An interval known to contain a root, with the residual sign at each end.
///
/// The two signs always differ; [`Bracket::shrink`] replaces whichever end
/// shares the sign of the new point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    ends: [f64; 2],
    left_sign: Sign,
}

impl Bracket {
    /// Pairs ordered bounds with their residual signs.
    ///
    /// # Errors
    ///
    /// Returns [`BracketError::NoSignChange`] if both ends have the same sign.
    pub(crate) fn new(
        bounds: Bounds,
        left_sign: Sign,
        right_sign: Sign,
    ) -> Result<Self, BracketError> {
        if left_sign == right_sign {
            return Err(BracketError::NoSignChange);
        }
        Ok(Self {
            ends: bounds.as_array(),
            left_sign,
        })
    }

    /// Returns `[left, right]`.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        self.ends
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.ends[0] + self.ends[1])
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.ends[1] - self.ends[0]
    }

    /// Returns true once the width is within `x_abs_tol + x_rel_tol·|mid|`.
    #[must_use]
    pub fn is_x_converged(&self, x_abs_tol: f64, x_rel_tol: f64) -> bool {
        self.width() <= x_abs_tol + x_rel_tol * self.midpoint().abs()
    }

    /// Moves one end to `x`, keeping the sign change inside.
    pub(crate) fn shrink(&mut self, x: f64, sign: Sign) {
        let end = usize::from(sign != self.left_sign);
        self.ends[end] = x;
    }
}

/// Sign of a residual; zero counts as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}

/// Finite, distinct endpoints in ascending order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Orders a caller-supplied bracket.
    ///
    /// # Errors
    ///
    /// Returns a [`BracketError`] for non-finite or equal endpoints.
    pub(crate) fn new([a, b]: [f64; 2]) -> Result<Self, BracketError> {
        if !(a.is_finite() && b.is_finite()) {
            return Err(BracketError::NonFinite);
        }
        match a.partial_cmp(&b) {
            Some(Ordering::Less) => Ok(Self { left: a, right: b }),
            Some(Ordering::Greater) => Ok(Self { left: b, right: a }),
            _ => Err(BracketError::ZeroWidth),
        }
    }

    pub(crate) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}
