//! Prelude for common imports used throughout the sitenav crates

pub use crate::error::{Error, Result, ResultExt};
pub use tracing::{debug, warn};
