//! Jump conditions across a normal shock.

use crate::{GasError, Gamma, error::check_mach};

/// Flow ratios across a normal shock, downstream over upstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalShock {
    pub upstream_mach: f64,
    pub downstream_mach: f64,
    /// Static pressure ratio `p2/p1`.
    pub pressure_ratio: f64,
    /// Density ratio `ρ2/ρ1`.
    pub density_ratio: f64,
    /// Static temperature ratio `T2/T1`.
    pub temperature_ratio: f64,
    /// Total-pressure ratio `pt2/pt1`, at most 1.
    pub total_pressure_ratio: f64,
}

impl NormalShock {
    /// Computes the jump conditions for upstream Mach number `mach`.
    ///
    /// At `M = 1` the shock has zero strength and every ratio is 1.
    ///
    /// # Errors
    ///
    /// Returns [`GasError::SubsonicNormalMach`] for `M < 1`, or
    /// [`GasError::InvalidMach`] if `mach` is not finite and positive.
    pub fn new(mach: f64, gamma: Gamma) -> Result<Self, GasError> {
        let mach = check_mach(mach)?;
        if mach < 1.0 {
            return Err(GasError::SubsonicNormalMach(mach));
        }

        let g = gamma.value();
        let m2 = mach * mach;

        let downstream_mach = (gamma.stagnation_factor(mach) / (g * m2 - gamma.half_gm1())).sqrt();
        let pressure_ratio = 1.0 + 2.0 * g / (g + 1.0) * (m2 - 1.0);
        let density_ratio = (g + 1.0) * m2 / ((g - 1.0) * m2 + 2.0);
        let total_pressure_ratio =
            density_ratio.powf(g / (g - 1.0)) * pressure_ratio.powf(-1.0 / (g - 1.0));

        Ok(Self {
            upstream_mach: mach,
            downstream_mach,
            pressure_ratio,
            density_ratio,
            temperature_ratio: pressure_ratio / density_ratio,
            total_pressure_ratio,
        })
    }
}
