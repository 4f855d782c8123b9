//! The area–Mach relation between two stations of a duct.
//!
//! For steady adiabatic flow between stations 1 and 2,
//!
//! ```text
//! A2/A1 = (M1/M2) · (pt1/pt2) · [(1 + (γ−1)/2·M2²) / (1 + (γ−1)/2·M1²)]^((γ+1)/(2(γ−1)))
//! ```
//!
//! The total-pressure ratio carries any entropy change between the stations
//! and is 1 for isentropic flow. [`AreaRatio`] evaluates the right-hand side
//! and [`DownstreamMach`] poses "which `M2` gives this area ratio?" as an
//! equation problem. Every area ratio has a subsonic and a supersonic
//! solution, so the bracket decides which one is found.

use std::convert::Infallible;

use shockline_core::{EquationProblem, Model, Observer};
use shockline_solvers::equation::{Solution, bisection, brent};

use crate::{
    GasError, Gamma, Solver,
    error::{check_mach, check_ratio},
};

use super::check_sonic_area;

/// Flow conditions at the two stations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stations {
    pub upstream_mach: f64,
    pub downstream_mach: f64,
    /// Downstream-to-upstream total-pressure ratio `pt2/pt1`.
    pub total_pressure_ratio: f64,
}

impl Stations {
    /// Stations connected by isentropic flow.
    #[must_use]
    pub fn isentropic(upstream_mach: f64, downstream_mach: f64) -> Self {
        Self {
            upstream_mach,
            downstream_mach,
            total_pressure_ratio: 1.0,
        }
    }
}

/// Model computing the area ratio `A2/A1` implied by two stations.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaRatio {
    pub gamma: Gamma,
}

impl AreaRatio {
    #[must_use]
    pub fn new(gamma: Gamma) -> Self {
        Self { gamma }
    }
}

impl Model for AreaRatio {
    type Input = Stations;
    type Output = f64;
    type Error = GasError;

    fn call(&self, input: &Stations) -> Result<f64, GasError> {
        let m1 = check_mach(input.upstream_mach)?;
        let m2 = check_mach(input.downstream_mach)?;
        let pt_ratio = check_ratio("total-pressure ratio", input.total_pressure_ratio)?;

        let stagnation = self.gamma.stagnation_factor(m2) / self.gamma.stagnation_factor(m1);
        Ok(m1 / m2 / pt_ratio * stagnation.powf(self.gamma.area_exponent()))
    }
}

/// Equation problem for the downstream Mach number giving a target `A2/A1`.
///
/// The solver variable is `M2`, and the residual is the computed area ratio
/// minus the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DownstreamMach {
    upstream_mach: f64,
    area_ratio: f64,
    total_pressure_ratio: f64,
}

impl DownstreamMach {
    /// Creates an isentropic problem.
    ///
    /// # Errors
    ///
    /// Returns an error unless `upstream_mach` and `area_ratio` are finite
    /// and positive.
    pub fn new(upstream_mach: f64, area_ratio: f64) -> Result<Self, GasError> {
        Ok(Self {
            upstream_mach: check_mach(upstream_mach)?,
            area_ratio: check_ratio("area ratio", area_ratio)?,
            total_pressure_ratio: 1.0,
        })
    }

    /// Sets the total-pressure ratio `pt2/pt1` across the duct.
    ///
    /// # Errors
    ///
    /// Returns [`GasError::InvalidRatio`] unless `ratio` is finite and positive.
    pub fn with_total_pressure_ratio(mut self, ratio: f64) -> Result<Self, GasError> {
        self.total_pressure_ratio = check_ratio("total-pressure ratio", ratio)?;
        Ok(self)
    }

    #[must_use]
    pub fn upstream_mach(&self) -> f64 {
        self.upstream_mach
    }

    #[must_use]
    pub fn area_ratio(&self) -> f64 {
        self.area_ratio
    }

    #[must_use]
    pub fn total_pressure_ratio(&self) -> f64 {
        self.total_pressure_ratio
    }
}

impl EquationProblem<1> for DownstreamMach {
    type Input = Stations;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Stations, Self::Error> {
        Ok(Stations {
            upstream_mach: self.upstream_mach,
            downstream_mach: x[0],
            total_pressure_ratio: self.total_pressure_ratio,
        })
    }

    fn residuals(&self, _input: &Stations, output: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([output - self.area_ratio])
    }
}

/// Which of the two area–Mach solutions to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Subsonic,
    Supersonic,
}

impl Branch {
    /// Smallest Mach number searched on the subsonic branch.
    pub const MIN_MACH: f64 = 1e-6;

    /// Largest Mach number searched on the supersonic branch.
    pub const MAX_MACH: f64 = 100.0;

    /// Returns the Mach-number bracket covering this branch.
    #[must_use]
    pub fn bracket(self) -> [f64; 2] {
        match self {
            Branch::Subsonic => [Self::MIN_MACH, 1.0],
            Branch::Supersonic => [1.0, Self::MAX_MACH],
        }
    }
}

/// Solves for the downstream Mach number on a caller-supplied bracket.
///
/// # Errors
///
/// Returns an error if the bracket has no sign change (it does not contain a
/// solution), if a Mach number in the bracket is not positive, or if the
/// solver fails to converge.
pub fn solve_downstream_mach<Obs>(
    problem: &DownstreamMach,
    gamma: Gamma,
    bracket: [f64; 2],
    solver: &Solver,
    observer: Obs,
) -> Result<Solution<Stations, f64>, GasError>
where
    Obs: for<'a> Observer<bisection::Event<'a, AreaRatio, DownstreamMach>, bisection::Action>
        + for<'a> Observer<brent::Event<'a, AreaRatio, DownstreamMach>, brent::Action>,
{
    solver.solve(&AreaRatio::new(gamma), problem, bracket, observer)
}

/// Finds the Mach number with the given `A/A*` on the chosen branch.
///
/// # Errors
///
/// Returns [`GasError::AreaBelowSonic`] for `A/A* < 1`, which no flow can
/// reach, or an error if the ratio lies beyond the branch's Mach range.
pub fn mach_from_area_ratio(
    area_ratio: f64,
    branch: Branch,
    gamma: Gamma,
    solver: &Solver,
) -> Result<f64, GasError> {
    let area_ratio = check_sonic_area(area_ratio)?;
    let problem = DownstreamMach::new(1.0, area_ratio)?;
    let solution = solve_downstream_mach(&problem, gamma, branch.bracket(), solver, ())?;
    Ok(solution.x)
}
