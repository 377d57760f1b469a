//! Knot spacing and pyramidal evaluation for 4-point Catmull-Rom windows.

pub mod eval;
pub mod knot;

pub use eval::{window_point, window_points};
pub use knot::{next_knot, resample, window_knots};
