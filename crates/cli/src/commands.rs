use uom::si::{angle::degree, f64::Angle};

use shockline_gasdyn::{
    Gamma, Solver,
    isentropic::{DownstreamMach, solve_downstream_mach},
    reflection::RegularReflection,
};
use shockline_interp::{Extrapolate, Strategy1D, Table};
use shockline_observers::Trace;

use crate::{
    CliError,
    report::{AreaMachReport, DemoReport, InterpReport, ReflectionReport, SolveRecord},
};

/// Mach numbers of the built-in gas table.
pub const TABLE_MACHS: [f64; 5] = [1.70, 1.71, 1.72, 1.73, 1.74];

/// `p/pt` for [`TABLE_MACHS`] at `γ = 1.4`, as printed in gas tables.
pub const TABLE_PRESSURE_RATIOS: [f64; 5] = [0.20259, 0.19956, 0.19656, 0.19361, 0.19070];

/// Inputs of an area–Mach solve.
#[derive(Debug, Clone, Copy)]
pub struct AreaMach {
    pub upstream_mach: f64,
    pub area_ratio: f64,
    pub total_pressure_ratio: f64,
    pub bracket: [f64; 2],
}

pub fn area_mach(
    args: AreaMach,
    gamma: Gamma,
    solver: &Solver,
    keep_trace: bool,
) -> Result<AreaMachReport, CliError> {
    let problem = DownstreamMach::new(args.upstream_mach, args.area_ratio)?
        .with_total_pressure_ratio(args.total_pressure_ratio)?;

    let mut trace = Trace::new();
    let solution = solve_downstream_mach(&problem, gamma, args.bracket, solver, &mut trace)?;

    Ok(AreaMachReport {
        gamma: gamma.value(),
        upstream_mach: args.upstream_mach,
        area_ratio: args.area_ratio,
        total_pressure_ratio: args.total_pressure_ratio,
        bracket: args.bracket,
        downstream_mach: solution.x,
        solver: SolveRecord::new(solver.method, &solution),
        trace: keep_trace.then(|| trace.into_rows()),
    })
}

pub fn reflection(
    mach: f64,
    shock_angle_deg: f64,
    gamma: Gamma,
    solver: &Solver,
    keep_trace: bool,
) -> Result<ReflectionReport, CliError> {
    let mut trace = Trace::new();
    let reflection = RegularReflection::solve(
        mach,
        Angle::new::<degree>(shock_angle_deg),
        gamma,
        solver,
        &mut trace,
    )?;

    Ok(ReflectionReport::new(
        gamma.value(),
        solver.method,
        &reflection,
        keep_trace.then(|| trace.into_rows()),
    ))
}

/// Looks up `query` in `table`, or in its inverse when `inverse` is set.
pub fn interp(
    table: &Table,
    query: f64,
    inverse: bool,
    extrapolate: Extrapolate<f64>,
) -> Result<InterpReport, CliError> {
    let table = if inverse {
        table.inverse()?
    } else {
        table.clone()
    };
    let value = table
        .interpolator(Strategy1D::Linear, extrapolate)?
        .interpolate(query)?;
    let domain = table.domain();

    Ok(InterpReport {
        query,
        value,
        inverse,
        domain,
        in_range: (domain[0]..=domain[1]).contains(&query),
    })
}

/// The built-in Mach vs `p/pt` table.
pub fn default_table() -> Result<Table, CliError> {
    Ok(Table::new(TABLE_MACHS, TABLE_PRESSURE_RATIOS)?)
}

/// Runs the worked examples with the given solver.
pub fn demo(gamma: Gamma, solver: &Solver, keep_trace: bool) -> Result<DemoReport, CliError> {
    let area_mach = area_mach(
        AreaMach {
            upstream_mach: 0.5,
            area_ratio: 2.5,
            total_pressure_ratio: 1.0,
            bracket: [1.0001, 10.0],
        },
        gamma,
        solver,
        keep_trace,
    )?;
    let reflection = reflection(2.2, 35.0, gamma, solver, keep_trace)?;

    let table = default_table()?;
    let interpolation = vec![
        interp(&table, 1.715, false, Extrapolate::Clamp)?,
        interp(&table, 0.198, true, Extrapolate::Clamp)?,
    ];

    Ok(DemoReport {
        area_mach,
        reflection,
        interpolation,
    })
}
