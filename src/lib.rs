//! Archimedes - polygon bounds on pi
//!
//! This crate provides one computation and its supporting types:
//! - [`pi_bounds`]: bracket pi between inscribed and circumscribed
//!   regular n-gon perimeter estimates
//! - [`PiBounds`]: the resulting `(inscribed, circumscribed)` pair
//! - [`PolygonError`]: rejection of degenerate side counts

mod bounds;
mod error;
mod polygon;

pub use bounds::PiBounds;
pub use error::PolygonError;
pub use polygon::{pi_bounds, pi_bounds_from_f64};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{pi_bounds, pi_bounds_from_f64, PiBounds, PolygonError};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_public_surface() {
        let b = pi_bounds(96).unwrap();
        assert!(b.contains(PI));
        // Archimedes's own 96-gon bracket: 3 10/71 < pi < 3 1/7
        assert!(b.inscribed > 3.0 + 10.0 / 71.0 - 1e-3);
        assert!(b.circumscribed < 3.0 + 1.0 / 7.0 + 1e-3);
    }

    #[test]
    fn test_midpoint_beats_both_bounds() {
        // The midpoint is a better estimate than either endpoint
        let b = pi_bounds(12).unwrap();
        let mid_err = (b.midpoint() - PI).abs();
        assert!(mid_err < (b.inscribed - PI).abs());
        assert!(mid_err < (b.circumscribed - PI).abs());
    }

    #[test]
    fn test_error_values_propagate() {
        let err = pi_bounds(1).unwrap_err();
        assert_eq!(err, PolygonError::TooFewSides(1));
        assert!(err.to_string().contains("at least 3 sides"));
    }

    #[test]
    fn test_bounds_serialize_as_object() {
        let b = pi_bounds(3).unwrap();
        let json = serde_json::to_value(&b).unwrap();
        assert!(json.get("inscribed").is_some());
        assert!(json.get("circumscribed").is_some());
    }
}
