//! Helpers over polylines stored as point slices.

use smooth_core::{Result, SmoothError};

use crate::point::points_equal;
use crate::Point2;

/// Whether the polyline is a ring: first and last point exactly equal.
///
/// A ring whose seam is off by rounding error is reported as open.
pub fn is_closed(points: &[Point2]) -> bool {
    match (points.first(), points.last()) {
        (Some(&first), Some(&last)) if points.len() > 1 => points_equal(first, last),
        _ => false,
    }
}

/// Fail with [`SmoothError::InvalidInput`] unless `points` has at least `min` entries.
pub fn ensure_min_len(points: &[Point2], min: usize, algorithm: &str) -> Result<()> {
    if points.len() < min {
        return Err(SmoothError::InvalidInput(format!(
            "{} needs at least {} points, got {}",
            algorithm,
            min,
            points.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn test_is_closed() {
        let ring = vec![dvec2(0.0, 0.0), dvec2(1.0, 0.0), dvec2(0.0, 1.0), dvec2(0.0, 0.0)];
        assert!(is_closed(&ring));

        let open = vec![dvec2(0.0, 0.0), dvec2(1.0, 0.0), dvec2(0.0, 1.0)];
        assert!(!is_closed(&open));

        let nearly = vec![dvec2(0.0, 0.0), dvec2(1.0, 0.0), dvec2(1e-12, 0.0)];
        assert!(!is_closed(&nearly));
    }

    #[test]
    fn test_is_closed_short_inputs() {
        assert!(!is_closed(&[]));
        assert!(!is_closed(&[dvec2(1.0, 1.0)]));
    }

    #[test]
    fn test_ensure_min_len() {
        let pts = vec![dvec2(0.0, 0.0), dvec2(1.0, 1.0)];
        assert!(ensure_min_len(&pts, 2, "test").is_ok());
        let err = ensure_min_len(&pts, 3, "taubin").unwrap_err();
        assert_eq!(
            err,
            SmoothError::InvalidInput("taubin needs at least 3 points, got 2".into())
        );
    }
}
