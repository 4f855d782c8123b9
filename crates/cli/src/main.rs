//! `shockline` — command-line front end for the compressible-flow relations.

mod cli;
mod commands;
mod error;
mod report;

use std::{error::Error as _, fmt, process::ExitCode};

use clap::Parser;
use serde::Serialize;

use shockline_interp::Table;

use cli::{Cli, Commands, Format};
use commands::AreaMach;
use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            let mut source = error.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let global = &cli.global;
    let gamma = global.gamma()?;
    let solver = global.solver()?;

    match cli.command {
        Commands::AreaMach {
            m1,
            area_ratio,
            total_pressure_ratio,
            lower,
            upper,
        } => {
            let args = AreaMach {
                upstream_mach: m1,
                area_ratio,
                total_pressure_ratio,
                bracket: [lower, upper],
            };
            let report = commands::area_mach(args, gamma, &solver, global.trace)?;
            emit(&report, global.format)
        }
        Commands::Reflection { mach, shock_angle } => {
            let report = commands::reflection(mach, shock_angle, gamma, &solver, global.trace)?;
            emit(&report, global.format)
        }
        Commands::Interp {
            query,
            x,
            y,
            inverse,
            extrapolate,
        } => {
            let table = match (x, y) {
                (Some(x), Some(y)) => Table::new(x, y)?,
                _ => commands::default_table()?,
            };
            let report = commands::interp(&table, query, inverse, extrapolate.into())?;
            emit(&report, global.format)
        }
        Commands::Demo => {
            let report = commands::demo(gamma, &solver, global.trace)?;
            emit(&report, global.format)
        }
    }
}

fn emit<R: Serialize + fmt::Display>(report: &R, format: Format) -> Result<(), CliError> {
    match format {
        Format::Text => println!("{report}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}
