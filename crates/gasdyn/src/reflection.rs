//! Regular reflection of an oblique shock from a straight wall.
//!
//! The incident shock turns the flow toward the wall by `δ`. The reflected
//! shock must turn it back by the same `δ` so the flow leaves parallel to the
//! wall, so its shock angle solves the θ–δ–M relation at the Mach number
//! behind the incident shock, on the weak branch.

use uom::si::f64::Angle;

use shockline_core::Observer;
use shockline_solvers::equation::{Solution, bisection, brent};

use crate::{
    GasError, Gamma, Solver,
    oblique::{Deflection, ObliqueShock, ShockAngle, ShockBranch, ShockInput, solve_shock_angle},
};

/// The incident and reflected shocks of a regular reflection.
#[derive(Debug, Clone)]
pub struct RegularReflection {
    pub incident: ObliqueShock,
    pub reflected: ObliqueShock,
    /// Angle between the reflected shock and the wall, `β = θ₂ − δ`.
    pub reflected_wall_angle: Angle,
    /// The solve that found the reflected shock angle.
    pub solution: Solution<ShockInput, Angle>,
}

impl RegularReflection {
    /// Solves the reflection of a shock at `shock_angle` in a flow at `mach`.
    ///
    /// The observer sees the reflected shock-angle solve.
    ///
    /// # Errors
    ///
    /// Returns [`GasError::Detached`] if the flow behind the incident shock
    /// cannot be turned back by `δ` with an attached shock, in which case no
    /// regular reflection exists. Returns an error if the incident shock is
    /// invalid or the solve fails.
    pub fn solve<Obs>(
        mach: f64,
        shock_angle: Angle,
        gamma: Gamma,
        solver: &Solver,
        observer: Obs,
    ) -> Result<Self, GasError>
    where
        Obs: for<'a> Observer<bisection::Event<'a, Deflection, ShockAngle>, bisection::Action>
            + for<'a> Observer<brent::Event<'a, Deflection, ShockAngle>, brent::Action>,
    {
        let incident = ObliqueShock::from_shock_angle(mach, shock_angle, gamma)?;
        let solution = solve_shock_angle(
            incident.downstream_mach,
            incident.deflection,
            gamma,
            ShockBranch::Weak,
            solver,
            observer,
        )?;

        let reflected = ObliqueShock::from_shock_angle(
            incident.downstream_mach,
            solution.snapshot.input.shock_angle,
            gamma,
        )?;

        Ok(Self {
            incident,
            reflected,
            reflected_wall_angle: reflected.shock_angle - incident.deflection,
            solution,
        })
    }

    /// Mach number of the flow leaving the reflected shock.
    #[must_use]
    pub fn final_mach(&self) -> f64 {
        self.reflected.downstream_mach
    }
}
