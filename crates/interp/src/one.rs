use ndarray::Array1;
use ninterp::{
    prelude::{Interp1DOwned, Interpolator},
    strategy::enums::Strategy1DEnum,
};
use shockline_core::Model;

use super::{error::InterpError, extrapolate::Extrapolate};

/// Interpolation strategy between neighboring grid points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy1D {
    #[default]
    Linear,
    Nearest,
    LeftNearest,
    RightNearest,
}

impl From<Strategy1D> for Strategy1DEnum {
    fn from(strategy: Strategy1D) -> Self {
        match strategy {
            Strategy1D::Linear => ninterp::strategy::Linear.into(),
            Strategy1D::Nearest => ninterp::strategy::Nearest.into(),
            Strategy1D::LeftNearest => ninterp::strategy::LeftNearest.into(),
            Strategy1D::RightNearest => ninterp::strategy::RightNearest.into(),
        }
    }
}

/// A one-dimensional interpolator over an ascending grid.
pub struct Interp1D(Interp1DOwned<f64, Strategy1DEnum>);

impl Interp1D {
    /// Builds an interpolator from grid points and values.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::Validation`] if `x` is not ascending or the
    /// arrays do not match in length.
    pub fn new(
        x: Array1<f64>,
        f_x: Array1<f64>,
        strategy: Strategy1D,
        extrapolate: Extrapolate<f64>,
    ) -> Result<Self, InterpError> {
        Ok(Self(Interp1DOwned::new(
            x,
            f_x,
            strategy.into(),
            extrapolate.into(),
        )?))
    }

    /// Interpolates at a single point.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::Interpolation`] if the point is outside the grid
    /// and extrapolation is [`Extrapolate::Error`].
    pub fn interpolate(&self, x: f64) -> Result<f64, InterpError> {
        self.0.interpolate(&[x]).map_err(Into::into)
    }
}

impl Model for Interp1D {
    type Input = f64;
    type Output = f64;
    type Error = InterpError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.interpolate(*input)
    }
}
