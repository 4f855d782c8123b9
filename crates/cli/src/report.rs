//! Serializable results and their text rendering.

use std::fmt;

use serde::Serialize;
use uom::si::angle::degree;

use shockline_gasdyn::{oblique::ObliqueShock, reflection::RegularReflection};
use shockline_observers::TraceRow;
use shockline_solvers::equation::{Method, Solution, Status};

/// The solver record: how a root was found.
#[derive(Debug, Clone, Serialize)]
pub struct SolveRecord {
    pub method: String,
    pub status: &'static str,
    pub converged: bool,
    pub iterations: usize,
    pub evals: usize,
    pub root: f64,
    pub residual: f64,
}

impl SolveRecord {
    pub fn new<I, O>(method: Method, solution: &Solution<I, O>) -> Self {
        Self {
            method: method.to_string(),
            status: match solution.status {
                Status::Converged => "converged",
                Status::MaxIters => "max iterations",
                Status::StoppedByObserver => "stopped",
            },
            converged: solution.converged(),
            iterations: solution.iters,
            evals: solution.evals,
            root: solution.x,
            residual: solution.residual,
        }
    }
}

impl fmt::Display for SolveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "solver:       {} ({})", self.method, self.status)?;
        writeln!(f, "  converged:  {}", self.converged)?;
        writeln!(f, "  iterations: {}", self.iterations)?;
        writeln!(f, "  evals:      {}", self.evals)?;
        writeln!(f, "  root:       {}", self.root)?;
        write!(f, "  residual:   {:e}", self.residual)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AreaMachReport {
    pub gamma: f64,
    pub upstream_mach: f64,
    pub area_ratio: f64,
    pub total_pressure_ratio: f64,
    pub bracket: [f64; 2],
    pub downstream_mach: f64,
    pub solver: SolveRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<TraceRow>>,
}

impl fmt::Display for AreaMachReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "area–Mach (γ = {})", self.gamma)?;
        writeln!(
            f,
            "M1 = {}, A2/A1 = {}, pt2/pt1 = {}",
            self.upstream_mach, self.area_ratio, self.total_pressure_ratio
        )?;
        writeln!(f, "bracket = [{}, {}]", self.bracket[0], self.bracket[1])?;
        writeln!(f, "M2 = {}", self.downstream_mach)?;
        write!(f, "{}", self.solver)?;
        write_trace(f, self.trace.as_deref())
    }
}

/// An oblique shock with angles in degrees.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ShockReport {
    pub upstream_mach: f64,
    pub shock_angle_deg: f64,
    pub deflection_deg: f64,
    pub upstream_normal_mach: f64,
    pub downstream_normal_mach: f64,
    pub downstream_mach: f64,
    pub pressure_ratio: f64,
    pub density_ratio: f64,
    pub temperature_ratio: f64,
    pub total_pressure_ratio: f64,
}

impl From<&ObliqueShock> for ShockReport {
    fn from(shock: &ObliqueShock) -> Self {
        Self {
            upstream_mach: shock.upstream_mach,
            shock_angle_deg: shock.shock_angle.get::<degree>(),
            deflection_deg: shock.deflection.get::<degree>(),
            upstream_normal_mach: shock.upstream_normal_mach,
            downstream_normal_mach: shock.downstream_normal_mach,
            downstream_mach: shock.downstream_mach,
            pressure_ratio: shock.pressure_ratio,
            density_ratio: shock.density_ratio,
            temperature_ratio: shock.temperature_ratio,
            total_pressure_ratio: shock.total_pressure_ratio,
        }
    }
}

impl fmt::Display for ShockReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  M upstream:    {:.6}", self.upstream_mach)?;
        writeln!(f, "  shock angle:   {:.4}°", self.shock_angle_deg)?;
        writeln!(f, "  deflection:    {:.4}°", self.deflection_deg)?;
        writeln!(f, "  Mn upstream:   {:.6}", self.upstream_normal_mach)?;
        writeln!(f, "  Mn downstream: {:.6}", self.downstream_normal_mach)?;
        writeln!(f, "  M downstream:  {:.6}", self.downstream_mach)?;
        writeln!(f, "  p2/p1:         {:.6}", self.pressure_ratio)?;
        write!(f, "  pt2/pt1:       {:.6}", self.total_pressure_ratio)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReflectionReport {
    pub gamma: f64,
    pub incident: ShockReport,
    pub reflected: ShockReport,
    /// Angle between the reflected shock and the wall.
    pub reflected_wall_angle_deg: f64,
    pub final_mach: f64,
    pub solver: SolveRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<TraceRow>>,
}

impl ReflectionReport {
    pub fn new(
        gamma: f64,
        method: Method,
        reflection: &RegularReflection,
        trace: Option<Vec<TraceRow>>,
    ) -> Self {
        Self {
            gamma,
            incident: ShockReport::from(&reflection.incident),
            reflected: ShockReport::from(&reflection.reflected),
            reflected_wall_angle_deg: reflection.reflected_wall_angle.get::<degree>(),
            final_mach: reflection.final_mach(),
            solver: SolveRecord::new(method, &reflection.solution),
            trace,
        }
    }
}

impl fmt::Display for ReflectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "regular reflection (γ = {})", self.gamma)?;
        writeln!(f, "incident shock:\n{}", self.incident)?;
        writeln!(f, "reflected shock:\n{}", self.reflected)?;
        writeln!(f, "β = θ₂ − δ = {:.4}°", self.reflected_wall_angle_deg)?;
        writeln!(f, "M3 = {:.6}", self.final_mach)?;
        write!(f, "{}", self.solver)?;
        write_trace(f, self.trace.as_deref())
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct InterpReport {
    pub query: f64,
    pub value: f64,
    pub inverse: bool,
    /// Range of the axis the query was made on.
    pub domain: [f64; 2],
    pub in_range: bool,
}

impl fmt::Display for InterpReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (from, to) = if self.inverse { ("y", "x") } else { ("x", "y") };
        write!(f, "{from} = {} -> {to} = {:.6}", self.query, self.value)?;
        if !self.in_range {
            write!(f, " (outside [{}, {}])", self.domain[0], self.domain[1])?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub area_mach: AreaMachReport,
    pub reflection: ReflectionReport,
    pub interpolation: Vec<InterpReport>,
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", self.area_mach)?;
        writeln!(f, "{}\n", self.reflection)?;
        writeln!(f, "Mach ↔ p/pt table")?;
        for (i, report) in self.interpolation.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{report}")?;
        }
        Ok(())
    }
}

fn write_trace(f: &mut fmt::Formatter<'_>, rows: Option<&[TraceRow]>) -> fmt::Result {
    let Some(rows) = rows else {
        return Ok(());
    };
    write!(f, "\n{:>5}  {:>22}  {:>12}", "eval", "x", "residual")?;
    for row in rows {
        write!(f, "\n{:>5}  {:>22.15}  {:>12.4e}", row.eval, row.x, row.residual)?;
        if let Some([left, right]) = row.bracket {
            write!(f, "  [{left:.12}, {right:.12}]")?;
        }
    }
    Ok(())
}
