//! Point arithmetic shared by every smoother.
//!
//! The weighted sums are written out per component, in a fixed operand
//! order, so that every smoother produces bit-identical output for the same
//! input regardless of how the vector type lowers its operators.

use crate::Point2;

/// Componentwise `w1 * a + w2 * b`.
///
/// The weights are not normalized; pass weights summing to 1 for an affine
/// combination.
#[inline]
pub fn weighted_sum2(a: Point2, b: Point2, w1: f64, w2: f64) -> Point2 {
    Point2::new(w1 * a.x + w2 * b.x, w1 * a.y + w2 * b.y)
}

/// Componentwise `w1 * a + w2 * b + w3 * c`.
#[inline]
pub fn weighted_sum3(a: Point2, b: Point2, c: Point2, w1: f64, w2: f64, w3: f64) -> Point2 {
    Point2::new(
        w1 * a.x + w2 * b.x + w3 * c.x,
        w1 * a.y + w2 * b.y + w3 * c.y,
    )
}

/// Exact equality on both coordinates, no tolerance.
#[inline]
pub fn points_equal(a: Point2, b: Point2) -> bool {
    a.x == b.x && a.y == b.y
}
