//! Posterization parameters
//!
//! [`PosterizeParams`] is the only long-lived configuration: a gamma value
//! and a bin count. It is an immutable value; every mutator returns a new
//! record, so derived results can never go stale behind the caller's back.

use crate::error::{Error, Result};
use crate::gamma::{DEFAULT_GAMMA, GAMMA_MAX, GAMMA_MIN, GAMMA_STEP, validate_gamma};
use crate::lut::LUT_SIZE;

/// Fewest bins a posterization can have.
pub const MIN_BINS: usize = 2;
/// Most bins a posterization can have: one per intensity.
pub const MAX_BINS: usize = LUT_SIZE;
/// Bin count used when none is given.
pub const DEFAULT_BINS: usize = 3;

/// Gamma value and bin count for one posterization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PosterizeParams {
    gamma: f32,
    no_bins: usize,
}

impl PosterizeParams {
    /// Create a validated parameter record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGamma`] if `gamma` lies outside
    /// `[GAMMA_MIN, GAMMA_MAX]` and [`Error::InvalidBinCount`] if `no_bins`
    /// lies outside `[MIN_BINS, MAX_BINS]`.
    pub fn new(gamma: f32, no_bins: usize) -> Result<Self> {
        validate_gamma(gamma)?;
        if !(GAMMA_MIN..=GAMMA_MAX).contains(&gamma) {
            return Err(Error::InvalidGamma(gamma));
        }
        if !(MIN_BINS..=MAX_BINS).contains(&no_bins) {
            return Err(Error::InvalidBinCount {
                count: no_bins,
                min: MIN_BINS,
                max: MAX_BINS,
            });
        }
        Ok(Self { gamma, no_bins })
    }

    /// Gamma applied before clustering.
    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    /// Number of output levels.
    pub fn no_bins(&self) -> usize {
        self.no_bins
    }

    /// Move gamma by `steps` increments of [`GAMMA_STEP`], clamped to
    /// `[GAMMA_MIN, GAMMA_MAX]`.
    pub fn step_gamma(self, steps: i32) -> Self {
        let gamma = (self.gamma + steps as f32 * GAMMA_STEP).clamp(GAMMA_MIN, GAMMA_MAX);
        Self { gamma, ..self }
    }

    /// Move the bin count by `delta`, clamped to `[MIN_BINS, MAX_BINS]`.
    pub fn step_bins(self, delta: isize) -> Self {
        let no_bins = self
            .no_bins
            .saturating_add_signed(delta)
            .clamp(MIN_BINS, MAX_BINS);
        Self { no_bins, ..self }
    }

    pub fn increment_gamma(self) -> Self {
        self.step_gamma(1)
    }

    pub fn decrement_gamma(self) -> Self {
        self.step_gamma(-1)
    }

    pub fn increment_bins(self) -> Self {
        self.step_bins(1)
    }

    pub fn decrement_bins(self) -> Self {
        self.step_bins(-1)
    }

    /// Replace gamma, clamping into `[GAMMA_MIN, GAMMA_MAX]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGamma`] for NaN.
    pub fn with_gamma(self, gamma: f32) -> Result<Self> {
        if gamma.is_nan() {
            return Err(Error::InvalidGamma(gamma));
        }
        Ok(Self {
            gamma: gamma.clamp(GAMMA_MIN, GAMMA_MAX),
            ..self
        })
    }

    /// Replace the bin count, clamping into `[MIN_BINS, MAX_BINS]`.
    pub fn with_bins(self, no_bins: usize) -> Self {
        Self {
            no_bins: no_bins.clamp(MIN_BINS, MAX_BINS),
            ..self
        }
    }
}

impl Default for PosterizeParams {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            no_bins: DEFAULT_BINS,
        }
    }
}
