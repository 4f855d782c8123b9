//! Isentropic flow of a calorically perfect gas.
//!
//! The stagnation ratios and `A/A*` are closed-form functions of Mach number.
//! Going the other way, from an area ratio back to Mach number, has two
//! solutions (one subsonic, one supersonic) and is solved numerically; see
//! [`area_mach`].

pub mod area_mach;

use uom::si::{angle::radian, f64::Angle};

use shockline_interp::Table;

use crate::{
    GasError, Gamma,
    error::{check_mach, check_ratio},
};

pub use area_mach::{
    AreaRatio, Branch, DownstreamMach, Stations, mach_from_area_ratio, solve_downstream_mach,
};

/// Static-to-stagnation pressure ratio `p/pt`.
///
/// # Errors
///
/// Returns [`GasError::InvalidMach`] unless `mach` is finite and positive.
pub fn pressure_ratio(mach: f64, gamma: Gamma) -> Result<f64, GasError> {
    let g = gamma.value();
    Ok(temperature_ratio(mach, gamma)?.powf(g / (g - 1.0)))
}

/// Static-to-stagnation temperature ratio `T/Tt`.
///
/// # Errors
///
/// Returns [`GasError::InvalidMach`] unless `mach` is finite and positive.
pub fn temperature_ratio(mach: f64, gamma: Gamma) -> Result<f64, GasError> {
    let mach = check_mach(mach)?;
    Ok(gamma.stagnation_factor(mach).recip())
}

/// Static-to-stagnation density ratio `ρ/ρt`.
///
/// # Errors
///
/// Returns [`GasError::InvalidMach`] unless `mach` is finite and positive.
pub fn density_ratio(mach: f64, gamma: Gamma) -> Result<f64, GasError> {
    let g = gamma.value();
    Ok(temperature_ratio(mach, gamma)?.powf(1.0 / (g - 1.0)))
}

/// Area ratio `A/A*` relative to the sonic throat.
///
/// Equal to 1 at `M = 1` and greater than 1 elsewhere.
///
/// # Errors
///
/// Returns [`GasError::InvalidMach`] unless `mach` is finite and positive.
pub fn area_ratio(mach: f64, gamma: Gamma) -> Result<f64, GasError> {
    let mach = check_mach(mach)?;
    let g = gamma.value();
    let scaled = 2.0 / (g + 1.0) * gamma.stagnation_factor(mach);
    Ok(scaled.powf(gamma.area_exponent()) / mach)
}

/// Mach angle `μ = asin(1/M)`.
///
/// # Errors
///
/// Returns [`GasError::Subsonic`] for `M < 1`, or
/// [`GasError::InvalidMach`] if `mach` is not finite.
pub fn mach_angle(mach: f64) -> Result<Angle, GasError> {
    let mach = check_mach(mach)?;
    if mach < 1.0 {
        return Err(GasError::Subsonic(mach));
    }
    Ok(Angle::new::<radian>(mach.recip().asin()))
}

/// Builds a `(Mach, p/pt)` table from the closed-form pressure ratio.
///
/// # Errors
///
/// Returns an error if any Mach number is invalid or the Mach numbers are not
/// strictly monotonic.
pub fn pressure_table(machs: &[f64], gamma: Gamma) -> Result<Table, GasError> {
    let ratios = machs
        .iter()
        .map(|&mach| pressure_ratio(mach, gamma))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Table::new(machs.to_vec(), ratios)?)
}

/// Returns `ratio` if it is a usable `A/A*`.
pub(crate) fn check_sonic_area(ratio: f64) -> Result<f64, GasError> {
    let ratio = check_ratio("A/A*", ratio)?;
    if ratio < 1.0 {
        return Err(GasError::AreaBelowSonic(ratio));
    }
    Ok(ratio)
}
