use crate::error::Result;

/// Check a set of smoothing parameters before any point is computed.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
