use crate::GasError;

/// Ratio of specific heats `γ = cp / cv`.
///
/// Always finite and greater than one, so the exponents built from
/// `γ − 1` are finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Gamma(f64);

impl Gamma {
    /// Diatomic ideal gas, the usual value for air.
    pub const AIR: Gamma = Gamma(1.4);

    /// Creates a validated specific-heat ratio.
    ///
    /// # Errors
    ///
    /// Returns [`GasError::InvalidGamma`] unless `value` is finite and `> 1`.
    pub fn new(value: f64) -> Result<Self, GasError> {
        if value.is_finite() && value > 1.0 {
            Ok(Self(value))
        } else {
            Err(GasError::InvalidGamma(value))
        }
    }

    /// Returns the ratio as a plain number.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// `(γ − 1) / 2`
    pub(crate) fn half_gm1(self) -> f64 {
        0.5 * (self.0 - 1.0)
    }

    /// `(γ + 1) / (2 (γ − 1))`, the exponent of the area–Mach relation.
    pub(crate) fn area_exponent(self) -> f64 {
        (self.0 + 1.0) / (2.0 * (self.0 - 1.0))
    }

    /// `1 + (γ − 1)/2 · M²`, the stagnation-to-static temperature ratio.
    pub(crate) fn stagnation_factor(self, mach: f64) -> f64 {
        1.0 + self.half_gm1() * mach * mach
    }
}

impl Default for Gamma {
    fn default() -> Self {
        Self::AIR
    }
}

impl TryFrom<f64> for Gamma {
    type Error = GasError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rejects_non_physical_values() {
        for value in [1.0, 0.5, -1.4, f64::NAN, f64::INFINITY] {
            assert!(matches!(Gamma::new(value), Err(GasError::InvalidGamma(_))));
        }
    }

    #[test]
    fn air_exponents() {
        let gamma = Gamma::default();
        assert_relative_eq!(gamma.value(), 1.4);
        assert_relative_eq!(gamma.half_gm1(), 0.2, epsilon = 1e-15);
        assert_relative_eq!(gamma.area_exponent(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(gamma.stagnation_factor(2.0), 1.8, epsilon = 1e-15);
    }
}
