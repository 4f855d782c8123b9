use clap::{Args, Parser, Subcommand, ValueEnum};

use shockline_gasdyn::{Gamma, Solver};
use shockline_interp::Extrapolate;
use shockline_solvers::equation::{Config, Method};

use crate::CliError;

#[derive(Debug, Parser)]
#[command(name = "shockline")]
#[command(version)]
#[command(about = "Compressible-flow calculator: area–Mach solves, shock reflection, and gas tables", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Ratio of specific heats
    #[arg(long, global = true, default_value_t = 1.4)]
    pub gamma: f64,

    /// Root-finding method (bisection or brent)
    #[arg(long, global = true, default_value_t = Method::Brent)]
    pub method: Method,

    /// Maximum solver iterations
    #[arg(long, global = true, default_value_t = 100)]
    pub max_iters: usize,

    /// Absolute tolerance on the bracket width
    #[arg(long, global = true, default_value_t = 1e-12)]
    pub x_tol: f64,

    /// Tolerance on the residual
    #[arg(long, global = true, default_value_t = 1e-12)]
    pub residual_tol: f64,

    /// Include every solver evaluation in the output
    #[arg(long, global = true)]
    pub trace: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

impl GlobalArgs {
    /// Validates the specific-heat ratio.
    pub fn gamma(&self) -> Result<Gamma, CliError> {
        Ok(Gamma::new(self.gamma)?)
    }

    /// Builds the solver settings.
    pub fn solver(&self) -> Result<Solver, CliError> {
        let config = Config::new(
            self.max_iters,
            self.x_tol,
            Config::default().x_rel_tol(),
            self.residual_tol,
        )?;
        Ok(Solver::new(self.method, config))
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Solve the area–Mach relation for the downstream Mach number
    AreaMach {
        /// Upstream Mach number
        #[arg(long)]
        m1: f64,

        /// Area ratio A2/A1
        #[arg(long)]
        area_ratio: f64,

        /// Total-pressure ratio pt2/pt1 (1 for isentropic flow)
        #[arg(long, default_value_t = 1.0)]
        total_pressure_ratio: f64,

        /// Lower end of the Mach bracket
        #[arg(long, default_value_t = 1.0001)]
        lower: f64,

        /// Upper end of the Mach bracket
        #[arg(long, default_value_t = 10.0)]
        upper: f64,
    },

    /// Solve the regular reflection of an oblique shock from a wall
    Reflection {
        /// Upstream Mach number
        #[arg(long)]
        mach: f64,

        /// Incident shock angle (degrees)
        #[arg(long)]
        shock_angle: f64,
    },

    /// Interpolate a monotone table (defaults to Mach vs p/pt)
    Interp {
        /// Value to look up on the independent axis
        #[arg(long)]
        query: f64,

        /// Independent axis, comma separated
        #[arg(long, value_delimiter = ',', requires = "y")]
        x: Option<Vec<f64>>,

        /// Dependent axis, comma separated
        #[arg(long, value_delimiter = ',', requires = "x")]
        y: Option<Vec<f64>>,

        /// Look up x from y instead
        #[arg(long)]
        inverse: bool,

        /// Behavior outside the table
        #[arg(long, value_enum, default_value_t = ExtrapolateArg::Clamp)]
        extrapolate: ExtrapolateArg,
    },

    /// Run the area–Mach, reflection, and interpolation examples
    Demo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExtrapolateArg {
    /// Use the nearest endpoint value
    Clamp,
    /// Extend the end segments linearly
    Enable,
    /// Fail for queries outside the table
    Error,
}

impl From<ExtrapolateArg> for Extrapolate<f64> {
    fn from(arg: ExtrapolateArg) -> Self {
        match arg {
            ExtrapolateArg::Clamp => Extrapolate::Clamp,
            ExtrapolateArg::Enable => Extrapolate::Enable,
            ExtrapolateArg::Error => Extrapolate::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "shockline",
            "reflection",
            "--mach",
            "2.2",
            "--shock-angle",
            "35",
            "--method",
            "bisection",
            "--format",
            "json",
        ])
        .expect("valid arguments");

        assert_eq!(cli.global.method, Method::Bisection);
        assert_eq!(cli.global.format, Format::Json);
        assert!(matches!(
            cli.command,
            Commands::Reflection { mach, shock_angle } if mach == 2.2 && shock_angle == 35.0
        ));
    }

    #[test]
    fn area_mach_defaults_to_supersonic_bracket() {
        let cli = Cli::try_parse_from(["shockline", "area-mach", "--m1", "0.5", "--area-ratio", "2.5"])
            .expect("valid arguments");

        let Commands::AreaMach { lower, upper, total_pressure_ratio, .. } = cli.command else {
            panic!("expected area-mach");
        };
        assert_eq!([lower, upper], [1.0001, 10.0]);
        assert_eq!(total_pressure_ratio, 1.0);
    }

    #[test]
    fn interp_parses_comma_separated_axes() {
        let cli = Cli::try_parse_from([
            "shockline", "interp", "--query", "1.5", "--x", "1,2", "--y", "3,4",
        ])
        .expect("valid arguments");

        let Commands::Interp { x, y, .. } = cli.command else {
            panic!("expected interp");
        };
        assert_eq!(x, Some(vec![1.0, 2.0]));
        assert_eq!(y, Some(vec![3.0, 4.0]));
    }

    #[test]
    fn interp_axes_must_come_together() {
        assert!(Cli::try_parse_from(["shockline", "interp", "--query", "1.5", "--x", "1,2"]).is_err());
    }

    #[test]
    fn unknown_method_is_rejected() {
        assert!(Cli::try_parse_from(["shockline", "demo", "--method", "newton"]).is_err());
    }

    #[test]
    fn invalid_settings_are_reported() {
        let cli = Cli::try_parse_from(["shockline", "demo", "--gamma", "0.9"]).unwrap();
        assert!(cli.global.gamma().is_err());

        let cli = Cli::try_parse_from(["shockline", "demo", "--x-tol=-1"]).unwrap();
        assert!(matches!(cli.global.solver(), Err(CliError::Config(_))));
    }
}
