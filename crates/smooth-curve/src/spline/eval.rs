//! Pyramidal (Barry-Goldman) evaluation of a 4-point Catmull-Rom window.

use smooth_math::{weighted_sum2, Point2};

/// Evaluate the window at parameter `t`, normally taken from `knots[1]..knots[2]`.
///
/// Three levels of pairwise linear interpolation collapse 4 points to 1.
/// The first two levels blend neighbours over their own knot spans, the
/// last blends over the middle span `knots[1]..knots[2]`.
pub fn window_point(window: &[Point2; 4], knots: &[f64; 4], t: f64) -> Point2 {
    let mut level = *window;
    for r in 1..4usize {
        let shift = r.saturating_sub(2);
        for i in 0..(4 - r) {
            let hi = knots[i + r - shift];
            let lo = knots[i + shift];
            let left = (hi - t) / (hi - lo);
            let right = (t - lo) / (hi - lo);
            // level[i + 1] still holds the previous level here.
            level[i] = weighted_sum2(level[i], level[i + 1], left, right);
        }
    }
    level[0]
}

pub fn window_points(window: &[Point2; 4], knots: &[f64; 4], params: &[f64]) -> Vec<Point2> {
    params
        .iter()
        .map(|&t| window_point(window, knots, t))
        .collect()
}
