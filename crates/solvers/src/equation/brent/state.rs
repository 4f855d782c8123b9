use crate::equation::{Config, Sign};

use super::StepKind;

/// Working points of Brent's method.
///
/// `b` is the current estimate, `c` the contrapoint keeping the sign change
/// with `b`, and `a` the previous estimate used for interpolation.
/// `d` is the last step and `e` the step before it.
#[derive(Debug, Clone, Copy)]
pub(super) struct State {
    a: f64,
    fa: f64,
    b: f64,
    fb: f64,
    c: f64,
    fc: f64,
    d: f64,
    e: f64,
}

impl State {
    /// Creates the initial state from two endpoints with opposite residual signs.
    pub(super) fn new(left: f64, f_left: f64, right: f64, f_right: f64) -> Self {
        let mut state = Self {
            a: left,
            fa: f_left,
            b: right,
            fb: f_right,
            c: left,
            fc: f_left,
            d: right - left,
            e: right - left,
        };
        state.orient();
        state
    }

    /// Returns the current bracket as `[left, right]`.
    pub(super) fn bracket(&self) -> [f64; 2] {
        [self.b.min(self.c), self.b.max(self.c)]
    }

    /// Returns the step tolerance at the current estimate.
    pub(super) fn tolerance(&self, config: &Config) -> f64 {
        2.0 * f64::EPSILON * self.b.abs()
            + 0.5 * (config.x_abs_tol() + config.x_rel_tol() * self.b.abs())
    }

    /// Returns true if the bracket half-width is within tolerance.
    pub(super) fn is_x_converged(&self, config: &Config) -> bool {
        (0.5 * (self.c - self.b)).abs() <= self.tolerance(config)
    }

    /// Chooses the next point and moves the current estimate to it.
    ///
    /// The residual at the returned point must be supplied with [`Self::accept`]
    /// before the next call.
    pub(super) fn advance(&mut self, config: &Config) -> (f64, StepKind) {
        let tol = self.tolerance(config);
        let xm = 0.5 * (self.c - self.b);

        let kind = match self.interpolate(xm, tol) {
            Some(step) => {
                self.e = self.d;
                self.d = step;
                StepKind::Interpolation
            }
            None => {
                self.d = xm;
                self.e = xm;
                StepKind::Bisection
            }
        };

        self.a = self.b;
        self.fa = self.fb;
        self.b += if self.d.abs() > tol {
            self.d
        } else {
            tol.copysign(xm)
        };

        (self.b, kind)
    }

    /// Records the residual at the current estimate and restores the bracket.
    pub(super) fn accept(&mut self, residual: f64) {
        self.fb = residual;
        if Sign::of(self.fb) == Sign::of(self.fc) {
            self.c = self.a;
            self.fc = self.fa;
            self.d = self.b - self.a;
            self.e = self.d;
        }
        self.orient();
    }

    /// Keeps `b` as the point with the smaller residual magnitude.
    fn orient(&mut self) {
        if self.fc.abs() < self.fb.abs() {
            self.a = self.b;
            self.b = self.c;
            self.c = self.a;
            self.fa = self.fb;
            self.fb = self.fc;
            self.fc = self.fa;
        }
    }

    /// Returns an acceptable interpolation step, or `None` to bisect.
    fn interpolate(&self, xm: f64, tol: f64) -> Option<f64> {
        if self.e.abs() < tol || self.fa.abs() <= self.fb.abs() {
            return None;
        }

        let s = self.fb / self.fa;
        #[allow(clippy::float_cmp)]
        let (p, q) = if self.a == self.c {
            (2.0 * xm * s, 1.0 - s)
        } else {
            let q = self.fa / self.fc;
            let r = self.fb / self.fc;
            (
                s * (2.0 * xm * q * (q - r) - (self.b - self.a) * (r - 1.0)),
                (q - 1.0) * (r - 1.0) * (s - 1.0),
            )
        };
        let (p, q) = if p > 0.0 { (p, -q) } else { (-p, q) };

        let min1 = 3.0 * xm * q - (tol * q).abs();
        let min2 = (self.e * q).abs();
        if 2.0 * p < min1.min(min2) {
            Some(p / q)
        } else {
            None
        }
    }
}
