//! Error types for posterize-cluster

use thiserror::Error;

/// Errors that can occur while clustering, building or remapping tables
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClusterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] posterize_core::Error),

    /// Empty image
    #[error("empty image: no pixels to process")]
    EmptyImage,

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Replacement list does not line up with the palette
    #[error("palette has {palette} entries but {replacements} replacements were given")]
    PaletteLengthMismatch { palette: usize, replacements: usize },

    /// Lookup table with the wrong number of entries
    #[error("lookup table must have 256 entries, got {0}")]
    LutLength(usize),

    /// A lookup table value that the palette does not contain
    #[error("lookup table value {value} (intensity {index}) is not in the palette")]
    UnmatchedColor { value: u8, index: usize },

    /// A bin without population under [`EmptyBinPolicy::Reject`]
    ///
    /// [`EmptyBinPolicy::Reject`]: crate::EmptyBinPolicy::Reject
    #[error("bin {bin} ({start}..{end}) has no pixels")]
    DegenerateBin { bin: usize, start: usize, end: usize },
}

/// Result type for clustering operations
pub type ClusterResult<T> = Result<T, ClusterError>;
