//! Taubin lambda/mu low-pass filter.

use log::{debug, warn};
use smooth_core::{Result, Validate};
use smooth_math::{ensure_min_len, is_closed, weighted_sum2, Point2};

use crate::params::TaubinParams;

pub(crate) const MIN_POINTS: usize = 3;

/// Smooth `points` with `iterations` rounds of a `lambda` pass followed by a `mu` pass.
///
/// Interior points move toward (`factor > 0`) or away from (`factor < 0`)
/// the average of their neighbours. Open polylines keep both endpoints; on a
/// ring the seam point is moved too and written back to both ends. The
/// output has the same length as the input.
pub fn taubin(points: &[Point2], lambda: f64, mu: f64, iterations: usize) -> Result<Vec<Point2>> {
    TaubinParams {
        lambda,
        mu,
        iterations,
    }
    .validate()?;
    ensure_min_len(points, MIN_POINTS, "taubin")?;
    if !recommended_factors(lambda, mu) {
        warn!(
            "taubin factors lambda = {}, mu = {} are outside lambda > 0, mu < 0, |mu| >= lambda",
            lambda, mu
        );
    }

    let closed = is_closed(points);
    let mut line = points.to_vec();
    for _ in 0..iterations {
        for factor in [lambda, mu] {
            relax(&mut line, factor, closed);
        }
    }

    debug!(
        "taubin: {} points, closed = {}, {} iterations",
        line.len(),
        closed,
        iterations
    );
    Ok(line)
}

/// A shrink pass followed by an inflate pass at least as strong.
fn recommended_factors(lambda: f64, mu: f64) -> bool {
    lambda > 0.0 && mu < 0.0 && mu.abs() >= lambda
}

/// One in-place pass over the interior points.
///
/// Each new point is held back one step before being written, so the
/// neighbour average at `i` always reads the values from before this pass.
fn relax(line: &mut [Point2], factor: f64, closed: bool) {
    let n = line.len();
    let seam_neighbours = (line[1], line[n - 2]);

    let mut pending = line[0];
    for i in 1..n - 1 {
        let avg = weighted_sum2(line[i + 1], line[i - 1], 0.5, 0.5);
        line[i - 1] = pending;
        pending = weighted_sum2(line[i], avg, 1.0 - factor, factor);
    }
    line[n - 2] = pending;

    if closed {
        let avg = weighted_sum2(seam_neighbours.0, seam_neighbours.1, 0.5, 0.5);
        let seam = weighted_sum2(line[0], avg, 1.0 - factor, factor);
        line[0] = seam;
        line[n - 1] = seam;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use smooth_core::SmoothError;
    use smooth_math::dvec2;

    fn zigzag() -> Vec<Point2> {
        vec![
            dvec2(0.0, 0.0),
            dvec2(1.0, 1.0),
            dvec2(2.0, 0.0),
            dvec2(3.0, 1.0),
            dvec2(4.0, 0.0),
        ]
    }

    #[test]
    fn test_single_iteration() {
        let out = taubin(&zigzag(), 0.5, -0.5, 1).unwrap();
        let expected = [
            (0.0, 0.0),
            (1.0, 0.625),
            (2.0, 0.5),
            (3.0, 0.625),
            (4.0, 0.0),
        ];
        for (p, &(x, y)) in out.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(p.x, x, epsilon = 1e-12);
            assert_abs_diff_eq!(p.y, y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_neighbours_read_before_pass() {
        // A pass with factor 1 replaces each interior point by the average of
        // its neighbours as they were before the pass.
        let mut line = zigzag();
        relax(&mut line, 1.0, false);
        assert_eq!(line[1], dvec2(1.0, 0.0));
        assert_eq!(line[2], dvec2(2.0, 1.0));
        assert_eq!(line[3], dvec2(3.0, 0.0));
    }

    #[test]
    fn test_recommended_factors() {
        assert!(recommended_factors(0.5, -0.5));
        assert!(recommended_factors(0.5, -0.53));
        assert!(!recommended_factors(0.5, -0.4));
        assert!(!recommended_factors(0.0, -0.5));
        assert!(!recommended_factors(0.5, 0.5));
    }

    #[test]
    fn test_zero_iterations_is_identity() {
        let out = taubin(&zigzag(), 0.5, -0.5, 0).unwrap();
        assert_eq!(out, zigzag());
    }

    #[test]
    fn test_too_short() {
        let err = taubin(&[dvec2(0.0, 0.0), dvec2(1.0, 0.0)], 0.5, -0.5, 5).unwrap_err();
        assert!(matches!(err, SmoothError::InvalidInput(_)));
    }

    #[test]
    fn test_three_point_ring() {
        let ring = vec![dvec2(0.0, 0.0), dvec2(2.0, 0.0), dvec2(0.0, 0.0)];
        let out = taubin(&ring, 0.5, -0.5, 3).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], out[2]);
    }
}
