//! The three polyline smoothers and the trait that unifies them.

mod catmull_rom;
mod chaikin;
mod taubin;

use smooth_core::{Result, SmoothError};
use smooth_math::Point2;

use crate::params::{CatmullRomParams, ChaikinParams, SmoothingMethod, TaubinParams};

pub use catmull_rom::catmull_rom;
pub use chaikin::chaikin;
pub use taubin::taubin;

/// An empty buffer with room for `len` items.
///
/// Sizes past what the allocator can serve fail with
/// [`SmoothError::InvalidInput`] instead of panicking.
pub(crate) fn try_buffer<T>(len: usize, what: &str) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|e| {
        SmoothError::InvalidInput(format!("{} of {} entries cannot be allocated: {}", what, len, e))
    })?;
    Ok(buf)
}

/// A polyline smoother with fixed parameters.
///
/// Rings (first point exactly equal to last) are detected from the input
/// and come back as rings.
pub trait Smoother: Send + Sync {
    /// Smooth `points` into a new polyline. The input is never modified.
    fn smooth(&self, points: &[Point2]) -> Result<Vec<Point2>>;

    /// Shortest polyline this smoother accepts.
    fn min_points(&self) -> usize;
}

impl Smoother for TaubinParams {
    fn smooth(&self, points: &[Point2]) -> Result<Vec<Point2>> {
        taubin(points, self.lambda, self.mu, self.iterations)
    }

    fn min_points(&self) -> usize {
        taubin::MIN_POINTS
    }
}

impl Smoother for ChaikinParams {
    fn smooth(&self, points: &[Point2]) -> Result<Vec<Point2>> {
        chaikin(points, self.refinement_level, self.keep_ends)
    }

    fn min_points(&self) -> usize {
        chaikin::MIN_POINTS
    }
}

impl Smoother for CatmullRomParams {
    fn smooth(&self, points: &[Point2]) -> Result<Vec<Point2>> {
        catmull_rom(points, self.alpha, self.subdivisions)
    }

    fn min_points(&self) -> usize {
        catmull_rom::MIN_POINTS
    }
}

impl Smoother for SmoothingMethod {
    fn smooth(&self, points: &[Point2]) -> Result<Vec<Point2>> {
        match self {
            Self::Taubin(p) => p.smooth(points),
            Self::Chaikin(p) => p.smooth(points),
            Self::CatmullRom(p) => p.smooth(points),
        }
    }

    fn min_points(&self) -> usize {
        match self {
            Self::Taubin(p) => p.min_points(),
            Self::Chaikin(p) => p.min_points(),
            Self::CatmullRom(p) => p.min_points(),
        }
    }
}
