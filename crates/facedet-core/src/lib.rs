pub mod error;
pub mod types;

pub use error::{DetectError, Result};
pub use types::*;
