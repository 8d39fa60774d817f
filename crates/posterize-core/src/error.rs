//! Error types for posterize-core
//!
//! Provides a unified error type for the core crate. Each variant captures
//! enough context for diagnostics without exposing internal details.

use thiserror::Error;

/// Posterize core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Gamma value outside the usable range
    #[error("invalid gamma: {0} (must be finite and > 0)")]
    InvalidGamma(f32),

    /// Bin count outside the supported range
    #[error("invalid bin count: {count} (must be in {min}..={max})")]
    InvalidBinCount { count: usize, min: usize, max: usize },

    /// Lookup table with the wrong number of entries
    #[error("lookup table must have {expected} entries, got {actual}")]
    LutLength { expected: usize, actual: usize },

    /// Buffer length mismatch between paired buffers
    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    BufferLength { expected: usize, actual: usize },
}

/// Result type alias for posterize-core operations
pub type Result<T> = std::result::Result<T, Error>;
