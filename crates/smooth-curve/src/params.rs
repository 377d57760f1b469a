//! Smoothing parameters, loadable from configuration data.

use serde::{Deserialize, Serialize};
use smooth_core::{Result, SmoothError, Validate};

/// Taubin low-pass filter parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaubinParams {
    /// Shrinking factor, applied first in every iteration. Usually in `(0, 1)`.
    pub lambda: f64,
    /// Inflating factor, applied second. Usually negative with `|mu| >= lambda`.
    pub mu: f64,
    pub iterations: usize,
}

impl Default for TaubinParams {
    fn default() -> Self {
        Self {
            lambda: 0.5,
            mu: -0.5,
            iterations: 5,
        }
    }
}

impl Validate for TaubinParams {
    fn validate(&self) -> Result<()> {
        if !self.lambda.is_finite() || !self.mu.is_finite() {
            return Err(SmoothError::ParameterOutOfRange(format!(
                "taubin factors must be finite, got lambda = {}, mu = {}",
                self.lambda, self.mu
            )));
        }
        Ok(())
    }
}

/// Chaikin corner-cutting parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaikinParams {
    /// Each corner is cut into `2^refinement_level` points.
    pub refinement_level: u32,
    /// Keep the first and last point of an open polyline. Ignored for rings.
    pub keep_ends: bool,
}

impl ChaikinParams {
    /// Points generated per corner, or `None` if `2^refinement_level` overflows.
    pub fn samples_per_corner(&self) -> Option<usize> {
        2usize.checked_pow(self.refinement_level)
    }
}

impl Default for ChaikinParams {
    fn default() -> Self {
        Self {
            refinement_level: 5,
            keep_ends: true,
        }
    }
}

impl Validate for ChaikinParams {
    fn validate(&self) -> Result<()> {
        if self.samples_per_corner().is_none() {
            return Err(SmoothError::InvalidInput(format!(
                "chaikin refinement level {} is too large",
                self.refinement_level
            )));
        }
        Ok(())
    }
}

/// Catmull-Rom resampling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatmullRomParams {
    /// Knot exponent in `[0, 1]`: 0 uniform, 0.5 centripetal, 1 chordal.
    pub alpha: f64,
    /// Output segments per input segment, at least 1.
    pub subdivisions: usize,
}

impl Default for CatmullRomParams {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            subdivisions: 10,
        }
    }
}

impl Validate for CatmullRomParams {
    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(SmoothError::ParameterOutOfRange(format!(
                "catmull-rom alpha must lie in [0, 1], got {}",
                self.alpha
            )));
        }
        if self.subdivisions == 0 {
            return Err(SmoothError::InvalidInput(
                "catmull-rom needs at least 1 subdivision".into(),
            ));
        }
        Ok(())
    }
}

/// One of the three smoothers together with its parameters.
///
/// Serialized with a `method` tag, e.g. `{"method": "chaikin", "keep_ends": false}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum SmoothingMethod {
    Taubin(TaubinParams),
    Chaikin(ChaikinParams),
    CatmullRom(CatmullRomParams),
}

impl Validate for SmoothingMethod {
    fn validate(&self) -> Result<()> {
        match self {
            Self::Taubin(p) => p.validate(),
            Self::Chaikin(p) => p.validate(),
            Self::CatmullRom(p) => p.validate(),
        }
    }
}
