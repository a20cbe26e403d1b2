//! Polygon bounds on pi
//!
//! The classic method: a regular n-gon inscribed in the unit circle has
//! perimeter `2n * sin(pi/n)`, a circumscribed one `2n * tan(pi/n)`.
//! Halving (circumference of the unit circle is `2*pi`) gives
//! `n*sin(pi/n) <= pi <= n*tan(pi/n)`, tightening as n grows.
//!
//! Ref: https://arxiv.org/abs/2008.07995

use crate::{PiBounds, PolygonError};

/// Compute the polygon bracket around pi for an `n`-sided polygon.
///
/// Returns [`PolygonError::TooFewSides`] for `n < 3`; a polygon with
/// fewer sides is degenerate and the formulas stop meaning anything.
///
/// # Examples
///
/// ```
/// use archimedes::pi_bounds;
///
/// let b = pi_bounds(360).unwrap();
/// assert!(b.inscribed < std::f64::consts::PI);
/// assert!(std::f64::consts::PI < b.circumscribed);
/// ```
pub fn pi_bounds(n: i64) -> Result<PiBounds, PolygonError> {
    if n < 3 {
        return Err(PolygonError::TooFewSides(n));
    }

    // Half the central angle subtended by one side, in radians.
    let angle = std::f64::consts::PI / n as f64;
    let sides = n as f64;

    Ok(PiBounds {
        inscribed: sides * angle.sin(),
        circumscribed: sides * angle.tan(),
    })
}

/// Checked entry point for callers holding a float side count.
///
/// Rejects NaN, infinities and non-integral values with
/// [`PolygonError::NonIntegerSides`], then delegates to [`pi_bounds`].
pub fn pi_bounds_from_f64(n: f64) -> Result<PiBounds, PolygonError> {
    if !n.is_finite() || n.fract() != 0.0 || n.abs() > i64::MAX as f64 {
        return Err(PolygonError::NonIntegerSides(n));
    }
    pi_bounds(n as i64)
}
