//! Unitconv Core - Fundamental types
//!
//! This crate provides the core types used throughout Unitconv:
//! - `UnitError`: Errors for lookups, strict conversion and parsing
//! - `ErrorReport`: Serializable error for tool consumers
//! - `as_sigfigs`: Display formatting to N significant digits

mod error;
mod format;

pub use error::{UnitError, ErrorReport, codes};
pub use format::{as_sigfigs, DEFAULT_SIGFIGS, MAX_SIGFIGS};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{UnitError, ErrorReport, as_sigfigs};
    pub use crate::error::codes;
}
