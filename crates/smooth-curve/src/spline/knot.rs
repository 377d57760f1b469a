//! Chord-length knot spacing for Catmull-Rom windows.

use smooth_core::{Result, SmoothError};
use smooth_math::{points_equal, Point2};

/// Advance knot `t` across the chord from `prev` to `next`.
///
/// Returns `t + |next - prev|^alpha`. `alpha = 0` gives uniform spacing,
/// `0.5` centripetal, `1` chord length.
pub fn next_knot(t: f64, alpha: f64, prev: Point2, next: Point2) -> f64 {
    t + prev.distance(next).powf(alpha)
}

/// Knots `[0, t1, t2, t3]` for a 4-point window.
///
/// Fails with [`SmoothError::DegenerateGeometry`] when two consecutive
/// window points coincide, a chord length is not finite (NaN or infinite
/// coordinates), or a knot interval collapses, since evaluation divides by
/// every interval.
pub fn window_knots(window: &[Point2; 4], alpha: f64) -> Result<[f64; 4]> {
    let mut knots = [0.0; 4];
    for j in 0..3 {
        let (prev, next) = (window[j], window[j + 1]);
        if points_equal(prev, next) {
            return Err(SmoothError::DegenerateGeometry(format!(
                "zero-length chord at {}",
                prev
            )));
        }
        if !prev.distance(next).is_finite() {
            return Err(SmoothError::DegenerateGeometry(format!(
                "non-finite chord between {} and {}",
                prev, next
            )));
        }
        knots[j + 1] = next_knot(knots[j], alpha, prev, next);
        if knots[j + 1] <= knots[j] {
            return Err(SmoothError::DegenerateGeometry(format!(
                "knot interval collapsed between {} and {}",
                prev, next
            )));
        }
    }
    Ok(knots)
}

/// `subdivs - 1` evenly spaced values strictly between `start` and `end`.
pub fn resample(start: f64, end: f64, subdivs: usize) -> Vec<f64> {
    let step = (end - start) / subdivs as f64;
    (1..subdivs).map(|i| start + i as f64 * step).collect()
}
