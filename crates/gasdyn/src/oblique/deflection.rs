use std::convert::Infallible;

use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

use shockline_core::{EquationProblem, Model};

use crate::{GasError, Gamma, error::check_mach, isentropic::mach_angle};

/// Upstream Mach number and shock angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShockInput {
    pub mach: f64,
    pub shock_angle: Angle,
}

/// Model evaluating the θ–δ–M relation.
///
/// Any shock angle in `(0°, 90°]` is accepted. Below the Mach angle the
/// relation gives a negative deflection, which keeps the residual of
/// [`ShockAngle`] defined across brackets that start near zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deflection {
    pub gamma: Gamma,
}

impl Deflection {
    #[must_use]
    pub fn new(gamma: Gamma) -> Self {
        Self { gamma }
    }
}

impl Model for Deflection {
    type Input = ShockInput;
    type Output = Angle;
    type Error = GasError;

    fn call(&self, input: &ShockInput) -> Result<Angle, GasError> {
        let mach = check_mach(input.mach)?;
        let theta = input.shock_angle.get::<radian>();
        if !(theta > 0.0 && theta <= FRAC_PI_2_WITH_SLACK) {
            return Err(GasError::InvalidAngle {
                quantity: "shock angle",
                degrees: input.shock_angle.get::<degree>(),
            });
        }
        Ok(Angle::new::<radian>(
            tan_deflection(mach, theta, self.gamma).atan(),
        ))
    }
}

/// Equation problem for the shock angle that produces a target deflection.
///
/// The solver variable is the shock angle in degrees. The residual compares
/// tangents, `tan δ(θ) − tan δ`, matching the form of the relation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShockAngle {
    mach: f64,
    deflection: Angle,
}

impl ShockAngle {
    /// Creates the problem for upstream `mach` and a target `deflection`.
    ///
    /// # Errors
    ///
    /// Returns an error if `mach` is invalid or `deflection` is negative,
    /// not finite, or 90° or more.
    pub fn new(mach: f64, deflection: Angle) -> Result<Self, GasError> {
        let degrees = deflection.get::<degree>();
        if !(0.0..90.0).contains(&degrees) {
            return Err(GasError::InvalidAngle {
                quantity: "deflection",
                degrees,
            });
        }
        Ok(Self {
            mach: check_mach(mach)?,
            deflection,
        })
    }

    #[must_use]
    pub fn mach(&self) -> f64 {
        self.mach
    }

    #[must_use]
    pub fn deflection(&self) -> Angle {
        self.deflection
    }
}

impl EquationProblem<1> for ShockAngle {
    type Input = ShockInput;
    type Output = Angle;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<ShockInput, Self::Error> {
        Ok(ShockInput {
            mach: self.mach,
            shock_angle: Angle::new::<degree>(x[0]),
        })
    }

    fn residuals(&self, _input: &ShockInput, output: &Angle) -> Result<[f64; 1], Self::Error> {
        Ok([output.get::<radian>().tan() - self.deflection.get::<radian>().tan()])
    }
}

/// The largest deflection an attached shock can produce, and its shock angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetachmentLimit {
    pub shock_angle: Angle,
    pub deflection: Angle,
}

/// Computes the detachment limit for upstream Mach number `mach`.
///
/// At `M = 1` the limit is a 90° shock with no deflection.
///
/// # Errors
///
/// Returns [`GasError::Subsonic`] for `M < 1`, or [`GasError::InvalidMach`]
/// if `mach` is not finite and positive.
pub fn max_deflection(mach: f64, gamma: Gamma) -> Result<DetachmentLimit, GasError> {
    mach_angle(mach)?;

    let g = gamma.value();
    let m2 = mach * mach;
    let root = ((g + 1.0) * ((g + 1.0) / 16.0 * m2 * m2 + gamma.half_gm1() * m2 + 1.0)).sqrt();
    let sin2 = ((g + 1.0) / 4.0 * m2 - 1.0 + root) / (g * m2);
    let theta = sin2.min(1.0).sqrt().asin();

    Ok(DetachmentLimit {
        shock_angle: Angle::new::<radian>(theta),
        deflection: Angle::new::<radian>(tan_deflection(mach, theta, gamma).atan()),
    })
}

/// `tan δ` for shock angle `theta` in radians.
pub(crate) fn tan_deflection(mach: f64, theta: f64, gamma: Gamma) -> f64 {
    let g = gamma.value();
    let m2 = mach * mach;
    let (sin, cos) = theta.sin_cos();
    2.0 * cos / sin * (m2 * sin * sin - 1.0) / (m2 * (g + (2.0 * theta).cos()) + 2.0)
}

// 90° converted through degrees can land an ulp above π/2.
const FRAC_PI_2_WITH_SLACK: f64 = std::f64::consts::FRAC_PI_2 + 1e-12;
