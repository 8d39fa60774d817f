//! Interactive posterization session
//!
//! A [`Posterizer`] owns one original buffer together with the current
//! parameters and result. Every parameter change recomputes a complete
//! [`Posterization`] and swaps it in; if the recomputation fails, the
//! previous parameters and result stay in place.

use crate::apply::{apply_remapped, apply_with_table};
use crate::optimize::OptimizeOptions;
use crate::posterize::{Posterization, build};
use crate::{ClusterError, ClusterResult};
use posterize_core::PosterizeParams;

/// Long-lived owner of an original buffer and its current posterization.
#[derive(Debug, Clone)]
pub struct Posterizer {
    original: Vec<u8>,
    options: OptimizeOptions,
    current: Posterization,
}

impl Posterizer {
    /// Take ownership of `original` and compute its first posterization.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError::EmptyImage`] for an empty buffer and any
    /// error [`build`] reports.
    pub fn new(
        original: Vec<u8>,
        params: PosterizeParams,
        options: OptimizeOptions,
    ) -> ClusterResult<Self> {
        if original.is_empty() {
            return Err(ClusterError::EmptyImage);
        }
        let current = build(&original, &params, &options)?;
        Ok(Self {
            original,
            options,
            current,
        })
    }

    /// The untouched input buffer.
    pub fn original(&self) -> &[u8] {
        &self.original
    }

    /// Current parameters.
    pub fn params(&self) -> &PosterizeParams {
        self.current.params()
    }

    /// Current result.
    pub fn posterization(&self) -> &Posterization {
        &self.current
    }

    /// Optimizer settings used for every recomputation.
    pub fn options(&self) -> &OptimizeOptions {
        &self.options
    }

    /// Recompute with `params`, keeping the old state on failure.
    pub fn set_params(&mut self, params: PosterizeParams) -> ClusterResult<&Posterization> {
        let next = build(&self.original, &params, &self.options)?;
        tracing::debug!(
            gamma = params.gamma(),
            no_bins = params.no_bins(),
            palette = ?next.palette(),
            "posterization recomputed"
        );
        self.current = next;
        Ok(&self.current)
    }

    pub fn increment_bins(&mut self) -> ClusterResult<&Posterization> {
        self.set_params(self.params().increment_bins())
    }

    pub fn decrement_bins(&mut self) -> ClusterResult<&Posterization> {
        self.set_params(self.params().decrement_bins())
    }

    pub fn increment_gamma(&mut self) -> ClusterResult<&Posterization> {
        self.set_params(self.params().increment_gamma())
    }

    pub fn decrement_gamma(&mut self) -> ClusterResult<&Posterization> {
        self.set_params(self.params().decrement_gamma())
    }

    /// The posterized buffer: gamma-encode, look up, gamma-decode.
    pub fn output(&self) -> Vec<u8> {
        apply_with_table(
            &self.original,
            self.current.lut(),
            self.current.gamma_table(),
        )
    }

    /// The buffer with each cluster painted in its replacement value.
    ///
    /// `replacements[i]` replaces `posterization().palette()[i]`. Remapped
    /// values are literal output intensities and are not gamma-decoded.
    ///
    /// # Errors
    ///
    /// See [`crate::remap_lut`].
    pub fn remapped_output(&self, replacements: &[u8]) -> ClusterResult<Vec<u8>> {
        let remapped = self.current.remap(replacements)?;
        Ok(apply_remapped(
            &self.original,
            &remapped,
            self.current.gamma_table(),
        ))
    }
}
