//! Monotone lookup tables and one-dimensional interpolation.
//!
//! Compressible-flow tables list a dependent ratio against Mach number, and
//! are read in both directions: Mach to ratio, and ratio back to Mach.
//! Interpolation needs an ascending independent axis, but ratios such as
//! `p/pt` fall as Mach rises. [`Table`] accepts either orientation, stores
//! the points ascending in `x`, and [`Table::inverse`] swaps the axes so the
//! same table can be queried the other way.
//!
//! Interpolation is delegated to `ninterp` through [`Interp1D`], which is a
//! [`Model`](shockline_core::Model) so it can also serve as the model side of
//! an equation problem.

mod error;
mod extrapolate;
mod one;
mod table;

pub use error::{InterpError, TableError};
pub use extrapolate::Extrapolate;
pub use one::{Interp1D, Strategy1D};
pub use table::Table;
