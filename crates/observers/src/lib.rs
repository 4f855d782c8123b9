//! Reusable observers for shockline solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the bracketed root-finders in `shockline-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasPoint`], [`HasResidual`], [`HasBracket`], [`CanStopEarly`])
//! - [`Trace`] — records one [`TraceRow`] per evaluation, the solver's
//!   iteration log
//!
//! [`Observer`]: shockline_core::Observer
//! [`HasPoint`]: traits::HasPoint
//! [`HasResidual`]: traits::HasResidual
//! [`HasBracket`]: traits::HasBracket
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod trace;

pub use trace::{Trace, TraceRow};
