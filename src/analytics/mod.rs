//! Growth analytics module
//!
//! Provides the statistics layer over weight and shedding records: a
//! growth-rate dispersion figure, a next-shedding forecast, and chart data
//! projection.
//!
//! ## Architecture
//!
//! - **Pure functions**: every calculation takes already-loaded record
//!   slices and returns plain values; no state, no I/O
//! - **Degenerate input policy**: insufficient data yields `0.0` / `None`,
//!   zero-length intervals are skipped or rejected; NaN never escapes
//!
//! All calculations happen on the client side using local records,
//! following the app's local-first principle.

mod types;

#[cfg(test)]
mod types_tests;

pub use types::*;

/// Calculator module for the statistics computations
pub mod calculator;
