//! Chaikin corner cutting, generalized to `2^k` points per corner.

use log::debug;
use smooth_core::{Result, SmoothError, Validate};
use smooth_math::{ensure_min_len, is_closed, weighted_sum2, weighted_sum3, Point2};

use crate::params::ChaikinParams;
use crate::smooth::try_buffer;

pub(crate) const MIN_POINTS: usize = 3;

/// Cut every corner of `points` into `2^refinement_level` points.
///
/// Open polylines with `keep_ends` keep their first and last point, giving
/// `2^k * (n - 2) + 2` points. Otherwise the ends are pulled inward along
/// the first and last edge. Rings always take the second form and come
/// back closed without an extra seam point.
pub fn chaikin(points: &[Point2], refinement_level: u32, keep_ends: bool) -> Result<Vec<Point2>> {
    let params = ChaikinParams {
        refinement_level,
        keep_ends,
    };
    params.validate()?;
    ensure_min_len(points, MIN_POINTS, "chaikin")?;

    let closed = is_closed(points);
    let mut line = points.to_vec();
    if closed {
        // Wrap so the seam gets a corner of its own.
        line.push(points[1]);
    }
    let n = line.len();

    let samples = params
        .samples_per_corner()
        .ok_or_else(|| SmoothError::InvalidInput("chaikin refinement level overflow".into()))?;
    let capacity = samples
        .checked_mul(n - 1)
        .and_then(|c| c.checked_add(2))
        .ok_or_else(|| {
            SmoothError::InvalidInput(format!(
                "chaikin output for {} points at level {} does not fit in memory",
                points.len(),
                refinement_level
            ))
        })?;

    let mut out = try_buffer(capacity, "chaikin output")?;
    let weights = corner_weights(samples)?;
    out.push(line[0]);
    for corner in line.windows(3) {
        for &(f, g, h) in &weights {
            out.push(weighted_sum3(corner[0], corner[1], corner[2], f, g, h));
        }
    }

    if keep_ends && !closed {
        out.push(line[n - 1]);
    } else {
        let e = samples as f64;
        let near = 0.5 * (1.0 + 1.0 / e);
        let far = 0.5 * (1.0 - 1.0 / e);
        out[0] = weighted_sum2(line[0], line[1], near, far);
        if !closed {
            out.push(weighted_sum2(line[n - 2], line[n - 1], far, near));
        }
    }

    debug!(
        "chaikin: {} -> {} points, closed = {}, level = {}",
        points.len(),
        out.len(),
        closed,
        refinement_level
    );
    Ok(out)
}

/// Weights `(F, G, H)` on `(previous, corner, next)` for each sample `j`.
///
/// Closed form of `k` rounds of quarter/three-quarter corner cutting.
/// Every triple sums to 1 and leans toward the corner point.
fn corner_weights(samples: usize) -> Result<Vec<(f64, f64, f64)>> {
    let e = samples as f64;
    let mut weights = try_buffer(samples, "chaikin corner weights")?;
    weights.extend((0..samples).map(|j| {
        let j = j as f64;
        let f = 0.5 - 0.5 / e - j * (1.0 / e - (j + 1.0) * 0.5 / e / e);
        let g = 0.5 + 0.5 / e + j * (1.0 / e - (j + 1.0) / e / e);
        let h = j * (j + 1.0) * 0.5 / e / e;
        (f, g, h)
    }));
    Ok(weights)
}
