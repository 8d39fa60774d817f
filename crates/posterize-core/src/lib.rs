//! Posterize Core - Basic building blocks for grayscale posterization
//!
//! This crate provides the leaf components shared by the rest of the
//! workspace:
//!
//! - [`gamma`] - power-law encode/decode and precomputed [`GammaTable`]s
//! - [`Histogram`] - 256-bin intensity counts with interval statistics
//! - [`Lut`] - 256-entry intensity lookup tables
//! - [`PosterizeParams`] - the gamma/bin-count configuration record
//!
//! All intensities are single-channel 8-bit values. Color handling, image
//! decoding and display are left to callers.

pub mod error;
pub mod gamma;
pub mod histogram;
pub mod lut;
pub mod params;

pub use error::{Error, Result};
pub use gamma::{
    DEFAULT_GAMMA, GAMMA_MAX, GAMMA_MIN, GAMMA_STEP, GammaTable, decode_gamma, encode_gamma,
};
pub use histogram::Histogram;
pub use lut::{LUT_SIZE, Lut, Run};
pub use params::{DEFAULT_BINS, MAX_BINS, MIN_BINS, PosterizeParams};
