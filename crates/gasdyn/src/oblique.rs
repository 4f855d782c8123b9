//! Oblique shocks and the θ–δ–M relation.
//!
//! For upstream Mach number `M` and shock angle `θ`, the flow deflection `δ`
//! satisfies
//!
//! ```text
//! tan δ = 2 cot θ · (M² sin²θ − 1) / (M² (γ + cos 2θ) + 2)
//! ```
//!
//! The deflection is zero at the Mach angle and at 90°, and peaks at the
//! detachment limit in between. Every deflection below the limit is produced
//! by two shock angles: the weak solution between the Mach angle and the
//! limit, and the strong one above it. [`ShockBranch`] selects which.

mod deflection;
mod shock;

pub use deflection::{Deflection, DetachmentLimit, ShockAngle, ShockInput, max_deflection};
pub use shock::ObliqueShock;

use uom::si::{angle::degree, f64::Angle};

use shockline_core::Observer;
use shockline_solvers::equation::{Solution, bisection, brent};

use crate::{GasError, Gamma, Solver, error::check_mach, isentropic::mach_angle};

/// A fixed bracket in degrees for the weak branch at moderate Mach numbers.
///
/// Weak solutions stay below 45° for the deflections reached behind a first
/// shock in air at low supersonic Mach numbers. [`ShockBranch::Weak`] picks a
/// bracket from the detachment limit instead and works at any Mach number.
pub const WEAK_SHOCK_BRACKET: [f64; 2] = [1e-3, 45.0];

/// Which of the two shock angles producing a deflection to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShockBranch {
    /// The shallower shock, with supersonic flow downstream in most cases.
    #[default]
    Weak,
    /// The steeper shock, with subsonic flow downstream.
    Strong,
}

impl ShockBranch {
    /// Returns the shock-angle bracket in degrees covering this branch.
    ///
    /// # Errors
    ///
    /// Returns [`GasError::Subsonic`] unless `mach` is supersonic.
    pub fn bracket(self, mach: f64, gamma: Gamma) -> Result<[f64; 2], GasError> {
        let limit = max_deflection(mach, gamma)?;
        Ok(self.bracket_below(mach_angle(mach)?, &limit))
    }

    fn bracket_below(self, mach_angle: Angle, limit: &DetachmentLimit) -> [f64; 2] {
        let at_limit = limit.shock_angle.get::<degree>();
        match self {
            ShockBranch::Weak => [mach_angle.get::<degree>(), at_limit],
            ShockBranch::Strong => [at_limit, 90.0],
        }
    }
}

/// Deflection angle produced by a shock at `shock_angle`.
///
/// # Errors
///
/// Returns [`GasError::Subsonic`] unless `mach` is supersonic, and
/// [`GasError::ShockAngleOutOfRange`] unless the shock angle lies between the
/// Mach angle and 90°.
pub fn deflection_angle(mach: f64, shock_angle: Angle, gamma: Gamma) -> Result<Angle, GasError> {
    Ok(ObliqueShock::from_shock_angle(mach, shock_angle, gamma)?.deflection)
}

/// Solves for the shock angle producing `deflection`, searching `bracket`
/// (in degrees).
///
/// The residual is `tan δ(θ) − tan δ`, so a bracket reaching below the Mach
/// angle is allowed; the relation is negative there.
///
/// # Errors
///
/// Returns an error if `mach` is not supersonic, the deflection is negative,
/// the bracket does not contain a solution, or the solver fails to converge.
pub fn shock_angle<Obs>(
    mach: f64,
    deflection: Angle,
    gamma: Gamma,
    bracket: [f64; 2],
    solver: &Solver,
    observer: Obs,
) -> Result<Solution<ShockInput, Angle>, GasError>
where
    Obs: for<'a> Observer<bisection::Event<'a, Deflection, ShockAngle>, bisection::Action>
        + for<'a> Observer<brent::Event<'a, Deflection, ShockAngle>, brent::Action>,
{
    let problem = ShockAngle::new(supersonic(mach)?, deflection)?;
    solver.solve(&Deflection::new(gamma), &problem, bracket, observer)
}

/// Solves for the shock angle producing `deflection` on the chosen branch.
///
/// # Errors
///
/// Returns [`GasError::Detached`] if `deflection` exceeds the detachment
/// limit, in which case no attached shock exists, or any error from
/// [`shock_angle`].
pub fn solve_shock_angle<Obs>(
    mach: f64,
    deflection: Angle,
    gamma: Gamma,
    branch: ShockBranch,
    solver: &Solver,
    observer: Obs,
) -> Result<Solution<ShockInput, Angle>, GasError>
where
    Obs: for<'a> Observer<bisection::Event<'a, Deflection, ShockAngle>, bisection::Action>
        + for<'a> Observer<brent::Event<'a, Deflection, ShockAngle>, brent::Action>,
{
    let mach = supersonic(mach)?;
    let limit = max_deflection(mach, gamma)?;
    if deflection > limit.deflection {
        return Err(GasError::Detached {
            mach,
            deflection_deg: deflection.get::<degree>(),
            max_deg: limit.deflection.get::<degree>(),
        });
    }

    let bracket = branch.bracket_below(mach_angle(mach)?, &limit);
    shock_angle(mach, deflection, gamma, bracket, solver, observer)
}

fn supersonic(mach: f64) -> Result<f64, GasError> {
    let mach = check_mach(mach)?;
    if mach <= 1.0 {
        return Err(GasError::Subsonic(mach));
    }
    Ok(mach)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use shockline_solvers::equation::{BracketError, Config, Method, SolveError};

    fn degrees(value: f64) -> Angle {
        Angle::new::<degree>(value)
    }

    #[test]
    fn deflection_of_the_incident_shock() {
        let delta = deflection_angle(2.2, degrees(35.0), Gamma::AIR).unwrap();
        assert_relative_eq!(delta.get::<degree>(), 9.212_319_247_232_05, epsilon = 1e-10);
    }

    #[test]
    fn weak_and_strong_solutions() {
        let solver = Solver::default();
        let delta = degrees(10.0);

        let weak = solve_shock_angle(2.0, delta, Gamma::AIR, ShockBranch::Weak, &solver, ())
            .expect("weak shock");
        let strong = solve_shock_angle(2.0, delta, Gamma::AIR, ShockBranch::Strong, &solver, ())
            .expect("strong shock");

        assert_relative_eq!(weak.x, 39.313_931_844_818_87, epsilon = 1e-8);
        assert_relative_eq!(strong.x, 83.700_080_375_746_91, epsilon = 1e-8);
        assert_relative_eq!(
            weak.snapshot.output.get::<degree>(),
            10.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn fixed_weak_bracket_matches_branch_bracket() {
        let solver = Solver::new(Method::Bisection, Config::default());
        let fixed = shock_angle(3.0, degrees(20.0), Gamma::AIR, WEAK_SHOCK_BRACKET, &solver, ())
            .expect("root below 45 degrees");
        let branch = solve_shock_angle(3.0, degrees(20.0), Gamma::AIR, ShockBranch::Weak, &solver, ())
            .expect("weak shock");

        assert_relative_eq!(fixed.x, 37.763_634_148_375_77, epsilon = 1e-8);
        assert_relative_eq!(fixed.x, branch.x, epsilon = 1e-8);
    }

    #[test]
    fn deflection_beyond_limit_detaches() {
        let result = solve_shock_angle(
            2.0,
            degrees(25.0),
            Gamma::AIR,
            ShockBranch::Weak,
            &Solver::default(),
            (),
        );
        assert!(matches!(result, Err(GasError::Detached { .. })));
    }

    #[test]
    fn bracket_without_solution_is_an_error() {
        let result = shock_angle(
            2.0,
            degrees(10.0),
            Gamma::AIR,
            [50.0, 60.0],
            &Solver::default(),
            (),
        );
        assert!(matches!(
            result,
            Err(GasError::Solver(SolveError::InvalidBracket(
                BracketError::NoSignChange
            )))
        ));
    }

    #[test]
    fn zero_deflection_is_a_mach_wave() {
        let solution = solve_shock_angle(
            2.0,
            degrees(0.0),
            Gamma::AIR,
            ShockBranch::Weak,
            &Solver::default(),
            (),
        )
        .expect("Mach wave");
        assert_relative_eq!(solution.x, 30.0, epsilon = 1e-9);
    }

    #[test]
    fn branch_brackets_meet_at_the_limit() {
        let weak = ShockBranch::Weak.bracket(2.0, Gamma::AIR).unwrap();
        let strong = ShockBranch::Strong.bracket(2.0, Gamma::AIR).unwrap();

        assert_relative_eq!(weak[0], 30.0, epsilon = 1e-12);
        assert_eq!(weak[1], strong[0]);
        assert_eq!(strong[1], 90.0);
    }

    #[test]
    fn requires_supersonic_flow() {
        let result = solve_shock_angle(
            0.8,
            degrees(5.0),
            Gamma::AIR,
            ShockBranch::Weak,
            &Solver::default(),
            (),
        );
        assert!(matches!(result, Err(GasError::Subsonic(_))));
    }
}
