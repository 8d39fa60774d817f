//! Posterize - variance-minimizing grayscale posterization
//!
//! Reduces an 8-bit grayscale image to a handful of intensity levels, for
//! workflows such as grayscale laser engraving where few tonal levels are
//! easier to reproduce.
//!
//! # Overview
//!
//! - Gamma pre/post correction so clustering happens in a perceptual space
//! - Histogram-driven bin optimizer producing a 256-entry lookup table
//! - Palette remapping onto caller-chosen output levels
//! - A [`Posterizer`] session that recomputes on every parameter change
//!
//! # Example
//!
//! ```
//! use posterize::{OptimizeOptions, PosterizeParams, Posterizer};
//!
//! let pixels: Vec<u8> = (0..=255).cycle().take(1024).collect();
//! let mut session =
//!     Posterizer::new(pixels, PosterizeParams::default(), OptimizeOptions::default()).unwrap();
//! assert_eq!(session.posterization().palette().len(), 3);
//!
//! session.increment_bins().unwrap();
//! assert_eq!(session.posterization().palette().len(), 4);
//!
//! let engraved = session.remapped_output(&[0, 96, 192, 255]).unwrap();
//! assert_eq!(engraved.len(), 1024);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use posterize_core::*;

// Re-export the clustering crate as a module and its main entry points
pub use posterize_cluster as cluster;
pub use posterize_cluster::{
    ClusterError, ClusterResult, EmptyBinPolicy, OptimizeOptions, Posterization, Posterizer,
    build, remap_lut,
};
