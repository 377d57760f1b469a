pub mod point;
pub mod polygon;
pub mod polyline;

pub use glam::{dvec2, DVec2};
pub use point::{points_equal, weighted_sum2, weighted_sum3};
pub use polygon::Polygon;
pub use polyline::{ensure_min_len, is_closed};

pub type Point2 = DVec2;
