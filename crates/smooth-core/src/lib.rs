pub mod error;
pub mod traits;

pub use error::{Result, SmoothError};
pub use traits::Validate;
