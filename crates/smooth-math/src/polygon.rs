use serde::{Deserialize, Serialize};

use crate::point::points_equal;
use crate::Point2;

/// A polygon with one exterior ring and any number of interior rings (holes).
///
/// Every ring is stored closed: its last point equals its first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    pub exterior: Vec<Point2>,
    pub interiors: Vec<Vec<Point2>>,
}

impl Polygon {
    /// Build a polygon, closing any ring whose last point differs from its first.
    pub fn new(exterior: Vec<Point2>, interiors: Vec<Vec<Point2>>) -> Self {
        Self {
            exterior: close_ring(exterior),
            interiors: interiors.into_iter().map(close_ring).collect(),
        }
    }

    pub fn from_exterior(exterior: Vec<Point2>) -> Self {
        Self::new(exterior, Vec::new())
    }

    /// Exterior ring first, then the interiors in order.
    pub fn rings(&self) -> impl Iterator<Item = &[Point2]> + '_ {
        std::iter::once(self.exterior.as_slice()).chain(self.interiors.iter().map(Vec::as_slice))
    }

    pub fn ring_count(&self) -> usize {
        1 + self.interiors.len()
    }
}

fn close_ring(mut ring: Vec<Point2>) -> Vec<Point2> {
    if let (Some(&first), Some(&last)) = (ring.first(), ring.last()) {
        if !points_equal(first, last) {
            ring.push(first);
        }
    }
    ring
}
