//! Tracing/logging setup shared by the shell binaries.

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use self::tracing::{init, LogFormat, LogSettings};
