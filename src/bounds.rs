//! The `PiBounds` value type
//!
//! A bracket around pi: the inscribed polygon perimeter from below, the
//! circumscribed one from above. Plain `f64` pair with value semantics.

use serde::{Deserialize, Serialize};

/// A two-sided bracket around pi produced by the polygon method.
///
/// For any valid side count, `inscribed < pi < circumscribed`, and the
/// bracket tightens as the side count grows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PiBounds {
    /// Lower bound: perimeter-derived estimate from the inscribed n-gon.
    pub inscribed: f64,

    /// Upper bound: perimeter-derived estimate from the circumscribed n-gon.
    pub circumscribed: f64,
}

impl PiBounds {
    /// Width of the bracket: `circumscribed - inscribed`.
    pub fn width(&self) -> f64 {
        self.circumscribed - self.inscribed
    }

    /// Arithmetic mean of the two bounds.
    pub fn midpoint(&self) -> f64 {
        (self.inscribed + self.circumscribed) / 2.0
    }

    /// Whether `x` lies inside the closed bracket.
    pub fn contains(&self, x: f64) -> bool {
        self.inscribed <= x && x <= self.circumscribed
    }
}

impl std::fmt::Display for PiBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.inscribed, self.circumscribed)
    }
}
