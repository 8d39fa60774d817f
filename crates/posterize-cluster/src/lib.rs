//! Posterize Cluster - Adaptive histogram clustering
//!
//! This crate turns an 8-bit grayscale buffer into a small number of output
//! levels chosen to minimize within-level variance:
//!
//! - **Borders** ([`borders`]): cut points splitting `0..256` into bins
//! - **Optimizer** ([`optimize`]): iterative variance-minimizing border search
//! - **Posterization** ([`posterize`]): full gamma → histogram → optimizer →
//!   lookup table pipeline
//! - **Remapping** ([`remap`]): substitute output values for the palette
//! - **Applying** ([`apply`]): run tables over pixel buffers
//! - **Session** ([`session`]): long-lived owner of a buffer and parameters

pub mod apply;
pub mod borders;
pub mod error;
pub mod optimize;
pub mod posterize;
pub mod remap;
pub mod session;

// Re-export core types
pub use posterize_core;

// Re-export error types
pub use error::{ClusterError, ClusterResult};

pub use apply::{apply, apply_lut, apply_remapped, apply_with_table};
pub use borders::{BorderMove, BorderSet};
pub use optimize::{
    BinStats, DEFAULT_MAX_ITERATIONS, EmptyBinPolicy, OptimizeOptions, OptimizeReport,
    OptimizedBins, Termination, bin_stats, optimize_bins, resolve_means,
};
pub use posterize::{Posterization, build, build_lut};
pub use remap::remap_lut;
pub use session::Posterizer;
