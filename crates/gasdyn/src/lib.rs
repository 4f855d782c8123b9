//! Compressible-flow relations for a calorically perfect gas.
//!
//! - [`isentropic`] — stagnation ratios, `A/A*`, and the area–Mach relation
//!   between two stations solved for the downstream Mach number
//! - [`normal_shock`] — jump conditions across a normal shock
//! - [`oblique`] — the θ–δ–M relation, shock-angle solves on either branch,
//!   and full [`ObliqueShock`](oblique::ObliqueShock) states
//! - [`reflection`] — regular reflection of an oblique shock from a wall
//!
//! Relations that cannot be inverted in closed form are posed as
//! [`EquationProblem`](shockline_core::EquationProblem)s over a
//! [`Model`](shockline_core::Model) and solved with the bracketed
//! root-finders in `shockline-solvers`, selected through [`Solver`].
//!
//! Angles are [`uom`] quantities; Mach numbers and ratios are plain `f64`.

mod error;
mod gamma;
mod solver;

pub mod isentropic;
pub mod normal_shock;
pub mod oblique;
pub mod reflection;

pub use error::GasError;
pub use gamma::Gamma;
pub use solver::Solver;
