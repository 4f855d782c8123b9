use thiserror::Error;

use shockline_gasdyn::GasError;
use shockline_interp::{InterpError, TableError};
use shockline_solvers::equation::ConfigError;

/// Errors reported by the command-line tool.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Gas(#[from] GasError),

    #[error("invalid solver settings: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid table: {0}")]
    Table(#[from] TableError),

    #[error("interpolation failed: {0}")]
    Interp(#[from] InterpError),

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}
