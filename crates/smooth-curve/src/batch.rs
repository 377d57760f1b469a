//! Smoothing many polylines, or every ring of a polygon, in one call.

use rayon::prelude::*;
use smooth_core::Result;
use smooth_math::{Point2, Polygon};

use crate::smooth::Smoother;

/// Smooth each polyline independently, in parallel.
///
/// Results come back in input order. If any polyline fails, the error of the
/// first failing polyline (by input position) is returned and nothing else.
pub fn smooth_batch<S>(lines: &[Vec<Point2>], smoother: &S) -> Result<Vec<Vec<Point2>>>
where
    S: Smoother + ?Sized,
{
    let results: Vec<Result<Vec<Point2>>> = lines
        .par_iter()
        .map(|line| smoother.smooth(line))
        .collect();
    results.into_iter().collect()
}

/// Smooth the exterior and every interior ring of `polygon` with the same smoother.
pub fn smooth_polygon<S>(polygon: &Polygon, smoother: &S) -> Result<Polygon>
where
    S: Smoother + ?Sized,
{
    let exterior = smoother.smooth(&polygon.exterior)?;
    let interiors = smooth_batch(&polygon.interiors, smoother)?;
    Ok(Polygon {
        exterior,
        interiors,
    })
}
