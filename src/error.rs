//! Errors for the polygon method
//!
//! The method is only defined for an integer side count of at least 3.
//! Everything else is rejected up front rather than fed to the trig
//! functions, which would happily return garbage for degenerate angles.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for polygon bound computations
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum PolygonError {
    /// A polygon needs at least 3 sides; fewer is geometrically degenerate.
    #[error("polygon needs at least 3 sides, got {0}")]
    TooFewSides(i64),

    /// Side count given as a float that is not an exact integer
    /// (includes NaN and infinities).
    #[error("side count must be a whole number, got {0}")]
    NonIntegerSides(f64),
}
