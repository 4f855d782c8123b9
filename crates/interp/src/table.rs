use ndarray::Array1;

use crate::{Extrapolate, Interp1D, InterpError, Strategy1D, TableError};

/// Tabulated points of a monotonic relation, stored ascending in `x`.
///
/// A table given with a descending independent axis is reversed on
/// construction (both axes together), so callers can pass rows in the order a
/// printed gas table lists them.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Table {
    /// Builds a table from parallel sequences.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the lengths differ, fewer than two points
    /// are given, any value is non-finite, or `x` is not strictly monotonic.
    pub fn new(x: impl Into<Vec<f64>>, y: impl Into<Vec<f64>>) -> Result<Self, TableError> {
        let mut x = x.into();
        let mut y = y.into();

        if x.len() != y.len() {
            return Err(TableError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(TableError::TooShort { len: x.len() });
        }
        if let Some(index) = x
            .iter()
            .zip(&y)
            .position(|(a, b)| !a.is_finite() || !b.is_finite())
        {
            return Err(TableError::NonFinite { index });
        }

        let descending = x[1] < x[0];
        if let Some(index) = x.windows(2).position(|pair| {
            if descending {
                pair[1] >= pair[0]
            } else {
                pair[1] <= pair[0]
            }
        }) {
            return Err(TableError::NotMonotonic { index: index + 1 });
        }

        if descending {
            x.reverse();
            y.reverse();
        }

        Ok(Self { x, y })
    }

    /// Returns the independent axis, ascending.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Returns the dependent axis, in the same order as [`Self::x`].
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false; a valid table has at least two points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Returns the range of the independent axis as `[min, max]`.
    #[must_use]
    pub fn domain(&self) -> [f64; 2] {
        [self.x[0], self.x[self.x.len() - 1]]
    }

    /// Returns the table with its axes swapped.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NotMonotonic`] if `y` is not strictly monotonic,
    /// so it cannot serve as an independent axis.
    pub fn inverse(&self) -> Result<Self, TableError> {
        Self::new(self.y.clone(), self.x.clone())
    }

    /// Builds an interpolator over the table.
    ///
    /// # Errors
    ///
    /// Returns an [`InterpError`] if `ninterp` rejects the grid.
    pub fn interpolator(
        &self,
        strategy: Strategy1D,
        extrapolate: Extrapolate<f64>,
    ) -> Result<Interp1D, InterpError> {
        Interp1D::new(
            Array1::from(self.x.clone()),
            Array1::from(self.y.clone()),
            strategy,
            extrapolate,
        )
    }

    /// Linearly interpolates `y` at `x`, clamping to the nearest endpoint
    /// outside the table.
    ///
    /// # Errors
    ///
    /// Returns an [`InterpError`] if `ninterp` rejects the grid.
    pub fn lookup(&self, x: f64) -> Result<f64, InterpError> {
        self.interpolator(Strategy1D::Linear, Extrapolate::Clamp)?
            .interpolate(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn machs() -> Vec<f64> {
        vec![1.70, 1.71, 1.72, 1.73, 1.74]
    }

    fn pressure_ratios() -> Vec<f64> {
        vec![0.20259, 0.19956, 0.19656, 0.19361, 0.19070]
    }

    #[test]
    fn mach_to_pressure_ratio() {
        let table = Table::new(machs(), pressure_ratios()).expect("valid table");
        assert_relative_eq!(table.lookup(1.715).unwrap(), 0.198_06, epsilon = 1e-12);
    }

    #[test]
    fn pressure_ratio_to_mach_reverses_axis() {
        let table = Table::new(machs(), pressure_ratios())
            .and_then(|table| table.inverse())
            .expect("invertible table");

        assert_eq!(table.x()[0], 0.19070);
        assert_eq!(table.y()[0], 1.74);
        assert_relative_eq!(table.lookup(0.198).unwrap(), 1.7152, epsilon = 1e-12);
    }

    #[test]
    fn rounded_ratio_maps_near_original_mach() {
        let forward = Table::new(machs(), pressure_ratios()).unwrap();
        let inverse = forward.inverse().unwrap();

        let mach = inverse.lookup(0.198).unwrap();
        let back = forward.lookup(mach).unwrap();

        assert_relative_eq!(back, 0.198, epsilon = 1e-4);
        assert!((mach - 1.715).abs() > 1e-5);
    }

    #[test]
    fn descending_input_is_reversed() {
        let table = Table::new(pressure_ratios(), machs()).expect("valid table");
        assert_eq!(table.domain(), [0.19070, 0.20259]);
        assert_eq!(table.y()[4], 1.70);
    }

    #[test]
    fn out_of_range_clamps_to_endpoints() {
        let table = Table::new(machs(), pressure_ratios()).unwrap();
        assert_relative_eq!(table.lookup(1.5).unwrap(), 0.20259);
        assert_relative_eq!(table.lookup(2.0).unwrap(), 0.19070);
    }

    #[test]
    fn error_extrapolation_rejects_out_of_range() {
        let interp = Table::new(machs(), pressure_ratios())
            .unwrap()
            .interpolator(Strategy1D::Linear, Extrapolate::Error)
            .unwrap();
        assert!(interp.interpolate(2.0).is_err());
    }

    #[test]
    fn rejects_invalid_tables() {
        assert_eq!(
            Table::new(vec![1.0, 2.0], vec![1.0]),
            Err(TableError::LengthMismatch { x: 2, y: 1 })
        );
        assert_eq!(
            Table::new(vec![1.0], vec![1.0]),
            Err(TableError::TooShort { len: 1 })
        );
        assert_eq!(
            Table::new(vec![1.0, f64::NAN], vec![1.0, 2.0]),
            Err(TableError::NonFinite { index: 1 })
        );
        assert_eq!(
            Table::new(vec![1.0, 2.0, 1.5], vec![1.0, 2.0, 3.0]),
            Err(TableError::NotMonotonic { index: 2 })
        );
        assert_eq!(
            Table::new(vec![1.0, 1.0], vec![1.0, 2.0]),
            Err(TableError::NotMonotonic { index: 1 })
        );
    }

    #[test]
    fn inverse_requires_monotonic_values() {
        let table = Table::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0]).unwrap();
        assert!(matches!(
            table.inverse(),
            Err(TableError::NotMonotonic { .. })
        ));
    }
}
