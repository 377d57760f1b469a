//! Polyline smoothing: Taubin filtering, Chaikin corner cutting, and
//! Catmull-Rom resampling.

pub mod batch;
pub mod params;
pub mod smooth;
pub mod spline;

pub use batch::{smooth_batch, smooth_polygon};
pub use params::{CatmullRomParams, ChaikinParams, SmoothingMethod, TaubinParams};
pub use smooth::{catmull_rom, chaikin, taubin, Smoother};
