use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

use crate::{
    GasError, Gamma, Solver, error::check_mach, isentropic::mach_angle, normal_shock::NormalShock,
};

use super::{ShockBranch, deflection::tan_deflection, solve_shock_angle};

/// Slack allowed below the Mach angle for shock angles found by a solver.
const MACH_ANGLE_SLACK: f64 = 1e-10;

/// The flow through an attached oblique shock.
///
/// Ratios are downstream over upstream. The normal components see the jump
/// conditions of a [`NormalShock`]; the tangential component is unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObliqueShock {
    pub upstream_mach: f64,
    pub shock_angle: Angle,
    pub deflection: Angle,
    /// Upstream Mach number normal to the shock, `M·sin θ`.
    pub upstream_normal_mach: f64,
    /// Downstream Mach number normal to the shock.
    pub downstream_normal_mach: f64,
    /// Downstream Mach number, `M2n / sin(θ − δ)`.
    pub downstream_mach: f64,
    pub pressure_ratio: f64,
    pub density_ratio: f64,
    pub temperature_ratio: f64,
    pub total_pressure_ratio: f64,
}

impl ObliqueShock {
    /// Computes the shock for upstream Mach number `mach` at `shock_angle`.
    ///
    /// # Errors
    ///
    /// Returns [`GasError::Subsonic`] for subsonic `mach`, and
    /// [`GasError::ShockAngleOutOfRange`] unless the shock angle lies between
    /// the Mach angle and 90°.
    pub fn from_shock_angle(mach: f64, shock_angle: Angle, gamma: Gamma) -> Result<Self, GasError> {
        let mach = check_mach(mach)?;
        let mu = mach_angle(mach)?.get::<radian>();
        let theta = shock_angle.get::<radian>();

        if !(theta >= mu - MACH_ANGLE_SLACK && theta <= std::f64::consts::FRAC_PI_2 + 1e-12) {
            return Err(GasError::ShockAngleOutOfRange {
                mach,
                angle_deg: shock_angle.get::<degree>(),
                min_deg: mu.to_degrees(),
            });
        }

        // The normal component is sonic at the Mach angle; keep rounding from
        // making it subsonic.
        let upstream_normal_mach = (mach * theta.sin()).max(1.0);
        let normal = NormalShock::new(upstream_normal_mach, gamma)?;

        let delta = tan_deflection(mach, theta, gamma).atan().max(0.0);
        let downstream_mach = normal.downstream_mach / (theta - delta).sin();

        Ok(Self {
            upstream_mach: mach,
            shock_angle,
            deflection: Angle::new::<radian>(delta),
            upstream_normal_mach,
            downstream_normal_mach: normal.downstream_mach,
            downstream_mach,
            pressure_ratio: normal.pressure_ratio,
            density_ratio: normal.density_ratio,
            temperature_ratio: normal.temperature_ratio,
            total_pressure_ratio: normal.total_pressure_ratio,
        })
    }

    /// Finds the shock on `branch` that turns the flow by `deflection`.
    ///
    /// # Errors
    ///
    /// Returns [`GasError::Detached`] if the deflection exceeds the
    /// detachment limit, or an error if the shock-angle solve fails.
    pub fn from_deflection(
        mach: f64,
        deflection: Angle,
        gamma: Gamma,
        branch: ShockBranch,
        solver: &Solver,
    ) -> Result<Self, GasError> {
        let solution = solve_shock_angle(mach, deflection, gamma, branch, solver, ())?;
        Self::from_shock_angle(mach, solution.snapshot.input.shock_angle, gamma)
    }

    /// Returns true if the flow behind the shock is still supersonic.
    #[must_use]
    pub fn is_supersonic_downstream(&self) -> bool {
        self.downstream_mach > 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn degrees(value: f64) -> Angle {
        Angle::new::<degree>(value)
    }

    #[test]
    fn incident_shock_state() {
        let shock = ObliqueShock::from_shock_angle(2.2, degrees(35.0), Gamma::AIR).unwrap();

        assert_relative_eq!(shock.deflection.get::<degree>(), 9.212_319_247_232_05, epsilon = 1e-10);
        assert_relative_eq!(shock.upstream_normal_mach, 1.261_868_159_972_301_4, epsilon = 1e-12);
        assert_relative_eq!(shock.downstream_normal_mach, 0.806_060_420_951_572_4, epsilon = 1e-12);
        assert_relative_eq!(shock.downstream_mach, 1.852_852_688_592_029, epsilon = 1e-10);
        assert_relative_eq!(shock.pressure_ratio, 1.691_029_795_343_862, epsilon = 1e-12);
        assert_relative_eq!(shock.total_pressure_ratio, 0.985_410_390_757_620_6, epsilon = 1e-12);
        assert!(shock.is_supersonic_downstream());
    }

    #[test]
    fn mach_wave_leaves_flow_unchanged() {
        let mu = mach_angle(2.0).unwrap();
        let shock = ObliqueShock::from_shock_angle(2.0, mu, Gamma::AIR).unwrap();

        assert_relative_eq!(shock.deflection.get::<degree>(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(shock.downstream_mach, 2.0, epsilon = 1e-12);
        assert_relative_eq!(shock.pressure_ratio, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn ninety_degrees_is_a_normal_shock() {
        let shock = ObliqueShock::from_shock_angle(2.0, degrees(90.0), Gamma::AIR).unwrap();
        let normal = NormalShock::new(2.0, Gamma::AIR).unwrap();

        assert!(shock.deflection.get::<degree>().abs() < 1e-12);
        assert_relative_eq!(shock.downstream_mach, normal.downstream_mach, epsilon = 1e-12);
        assert!(!shock.is_supersonic_downstream());
    }

    #[test]
    fn shock_angle_below_mach_angle_is_rejected() {
        let result = ObliqueShock::from_shock_angle(2.0, degrees(20.0), Gamma::AIR);
        assert!(matches!(
            result,
            Err(GasError::ShockAngleOutOfRange { min_deg, .. }) if (min_deg - 30.0).abs() < 1e-9
        ));
        assert!(ObliqueShock::from_shock_angle(2.0, degrees(91.0), Gamma::AIR).is_err());
    }

    #[test]
    fn from_deflection_recovers_the_shock() {
        let incident = ObliqueShock::from_shock_angle(2.2, degrees(35.0), Gamma::AIR).unwrap();
        let solved = ObliqueShock::from_deflection(
            2.2,
            incident.deflection,
            Gamma::AIR,
            ShockBranch::Weak,
            &Solver::default(),
        )
        .unwrap();

        assert_relative_eq!(solved.shock_angle.get::<degree>(), 35.0, epsilon = 1e-8);
        assert_relative_eq!(solved.downstream_mach, incident.downstream_mach, epsilon = 1e-8);
    }
}
