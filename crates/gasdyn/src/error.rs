use thiserror::Error;

use shockline_interp::TableError;
use shockline_solvers::equation::SolveError;

/// Errors returned by the gas-dynamics relations.
#[derive(Debug, Error)]
pub enum GasError {
    #[error("specific-heat ratio must be finite and greater than 1, got {0}")]
    InvalidGamma(f64),

    #[error("Mach number must be finite and positive, got {0}")]
    InvalidMach(f64),

    #[error("{quantity} must be finite and positive, got {value}")]
    InvalidRatio { quantity: &'static str, value: f64 },

    #[error("{quantity} must be finite and in range, got {degrees}°")]
    InvalidAngle {
        quantity: &'static str,
        degrees: f64,
    },

    #[error("supersonic flow required, got M = {0}")]
    Subsonic(f64),

    #[error("area ratio A/A* must be at least 1, got {0}")]
    AreaBelowSonic(f64),

    #[error("a normal shock requires a supersonic normal Mach number, got {0}")]
    SubsonicNormalMach(f64),

    #[error("shock angle {angle_deg}° is outside [{min_deg}°, 90°] for M = {mach}")]
    ShockAngleOutOfRange {
        mach: f64,
        angle_deg: f64,
        min_deg: f64,
    },

    #[error("deflection {deflection_deg}° exceeds the maximum {max_deg}° at M = {mach}; the shock detaches")]
    Detached {
        mach: f64,
        deflection_deg: f64,
        max_deg: f64,
    },

    #[error("solver stopped after {iters} iterations without converging (x = {x}, residual = {residual})")]
    NotConverged { iters: usize, x: f64, residual: f64 },

    #[error(transparent)]
    Solver(#[from] SolveError),

    #[error(transparent)]
    Table(#[from] TableError),
}

/// Returns `mach` if it is finite and positive.
pub(crate) fn check_mach(mach: f64) -> Result<f64, GasError> {
    if mach.is_finite() && mach > 0.0 {
        Ok(mach)
    } else {
        Err(GasError::InvalidMach(mach))
    }
}

/// Returns `value` if it is finite and positive.
pub(crate) fn check_ratio(quantity: &'static str, value: f64) -> Result<f64, GasError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GasError::InvalidRatio { quantity, value })
    }
}
