//! Catmull-Rom resampling with `|chord|^alpha` knot spacing.

use log::debug;
use smooth_core::{Result, SmoothError, Validate};
use smooth_math::{ensure_min_len, is_closed, weighted_sum2, Point2};

use crate::params::CatmullRomParams;
use crate::smooth::try_buffer;
use crate::spline::{resample, window_knots, window_points};

pub(crate) const MIN_POINTS: usize = 4;

/// Pass a Catmull-Rom spline through every point of `points` and sample
/// each segment `subdivisions` times.
///
/// `alpha` picks the knot spacing: 0 uniform, 0.5 centripetal, 1 chordal.
/// The output holds `subdivisions * (n - 1) + 1` points and contains every
/// input point unchanged. Consecutive duplicate points are rejected with
/// [`SmoothError::DegenerateGeometry`] before anything is evaluated.
pub fn catmull_rom(points: &[Point2], alpha: f64, subdivisions: usize) -> Result<Vec<Point2>> {
    CatmullRomParams {
        alpha,
        subdivisions,
    }
    .validate()?;
    ensure_min_len(points, MIN_POINTS, "catmull-rom")?;

    let closed = is_closed(points);
    let n = points.len();
    let capacity = subdivisions
        .checked_mul(n - 1)
        .and_then(|c| c.checked_add(1))
        .ok_or_else(|| {
            SmoothError::InvalidInput(format!(
                "catmull-rom output for {} points at {} subdivisions does not fit in memory",
                n, subdivisions
            ))
        })?;

    let augmented = with_phantoms(points, closed);
    let windows = augmented
        .windows(4)
        .map(|w| {
            let window = [w[0], w[1], w[2], w[3]];
            window_knots(&window, alpha).map(|knots| (window, knots))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut out = try_buffer(capacity, "catmull-rom output")?;
    out.push(augmented[1]);
    for (window, knots) in &windows {
        let params = resample(knots[1], knots[2], subdivisions);
        out.extend(window_points(window, knots, &params));
        out.push(window[2]);
    }

    debug!(
        "catmull-rom: {} -> {} points, closed = {}, alpha = {}",
        n,
        out.len(),
        closed,
        alpha
    );
    Ok(out)
}

/// Pad with one point at each end so every segment has a 4-point window.
///
/// Rings wrap around the seam; open polylines reflect the end point
/// through its neighbour.
fn with_phantoms(points: &[Point2], closed: bool) -> Vec<Point2> {
    let n = points.len();
    let (head, tail) = if closed {
        (points[n - 2], points[1])
    } else {
        (
            weighted_sum2(points[0], points[1], 2.0, -1.0),
            weighted_sum2(points[n - 1], points[n - 2], 2.0, -1.0),
        )
    };

    let mut augmented = Vec::with_capacity(n + 2);
    augmented.push(head);
    augmented.extend_from_slice(points);
    augmented.push(tail);
    augmented
}
