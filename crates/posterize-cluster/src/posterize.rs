//! Full posterization: gamma, histogram, optimizer and lookup table
//!
//! [`build`] runs the whole recomputation from an original buffer and a
//! parameter record and returns a fresh [`Posterization`]. Nothing is cached
//! between calls; identical inputs give identical outputs.

use crate::borders::BorderSet;
use crate::optimize::{
    BinStats, OptimizeOptions, OptimizeReport, OptimizedBins, optimize_bins, resolve_means,
};
use crate::remap::remap_lut;
use crate::{ClusterError, ClusterResult};
use posterize_core::{GammaTable, Histogram, Lut, PosterizeParams};

/// Result of clustering one buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Posterization {
    params: PosterizeParams,
    gamma: GammaTable,
    lut: Lut,
    palette: Vec<u8>,
    borders: BorderSet,
    stats: Vec<BinStats>,
    report: OptimizeReport,
}

impl Posterization {
    /// Parameters this posterization was built with.
    pub fn params(&self) -> &PosterizeParams {
        &self.params
    }

    /// Gamma tables matching `params().gamma()`.
    pub fn gamma_table(&self) -> &GammaTable {
        &self.gamma
    }

    /// Table from gamma-encoded intensity to representative value.
    pub fn lut(&self) -> &Lut {
        &self.lut
    }

    /// Representative value of each bin, in bin order.
    pub fn palette(&self) -> &[u8] {
        &self.palette
    }

    /// Final bin borders.
    pub fn borders(&self) -> &BorderSet {
        &self.borders
    }

    /// Final per-bin statistics.
    pub fn stats(&self) -> &[BinStats] {
        &self.stats
    }

    /// Optimizer diagnostics.
    pub fn report(&self) -> &OptimizeReport {
        &self.report
    }

    /// Substitute `replacements[i]` for `palette()[i]` in the lookup table.
    ///
    /// See [`remap_lut`].
    pub fn remap(&self, replacements: &[u8]) -> ClusterResult<Lut> {
        remap_lut(&self.palette, self.lut.as_slice(), replacements)
    }
}

/// Truncate a representative value to an intensity.
///
/// `as` saturates, so out-of-range means clamp to 0 or 255.
#[inline]
fn to_intensity(mean: f64) -> u8 {
    mean as u8
}

/// Expand borders and per-bin representative values into a dense table and
/// the matching palette.
///
/// # Errors
///
/// Returns [`ClusterError::InvalidParameters`] if `means` does not have one
/// entry per bin.
pub fn build_lut(borders: &BorderSet, means: &[f64]) -> ClusterResult<(Lut, Vec<u8>)> {
    if means.len() != borders.no_bins() {
        return Err(ClusterError::InvalidParameters(format!(
            "{} bins but {} representative values",
            borders.no_bins(),
            means.len()
        )));
    }

    let mut lut = Lut::constant(0);
    let mut palette = Vec::with_capacity(means.len());
    for (range, &mean) in borders.ranges().zip(means) {
        let value = to_intensity(mean);
        lut.fill_range(range, value)?;
        palette.push(value);
    }
    Ok((lut, palette))
}

/// Posterize `buffer` from scratch.
///
/// The buffer is gamma-encoded, histogrammed and partitioned into
/// `params.no_bins()` bins; the returned lookup table maps gamma-encoded
/// intensities to their bin's representative value.
///
/// # Errors
///
/// Returns [`ClusterError::EmptyImage`] for an empty buffer, and propagates
/// optimizer and empty-bin policy errors.
///
/// # Example
///
/// ```
/// use posterize_cluster::{OptimizeOptions, build};
/// use posterize_core::PosterizeParams;
///
/// let buffer: Vec<u8> = (0..=255).collect();
/// let params = PosterizeParams::new(1.0, 4).unwrap();
/// let result = build(&buffer, &params, &OptimizeOptions::default()).unwrap();
/// assert_eq!(result.palette().len(), 4);
/// assert_eq!(result.lut().run_count(), 4);
/// ```
pub fn build(
    buffer: &[u8],
    params: &PosterizeParams,
    options: &OptimizeOptions,
) -> ClusterResult<Posterization> {
    if buffer.is_empty() {
        return Err(ClusterError::EmptyImage);
    }

    let gamma = GammaTable::new(params.gamma())?;
    let encoded = gamma.encode(buffer);
    let hist = Histogram::from_buffer(&encoded);

    let OptimizedBins {
        borders,
        stats,
        report,
    } = optimize_bins(&hist, params.no_bins(), options)?;

    let means = resolve_means(&stats, &borders, options.empty_bins)?;
    let (lut, palette) = build_lut(&borders, &means)?;

    Ok(Posterization {
        params: *params,
        gamma,
        lut,
        palette,
        borders,
        stats,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimize::EmptyBinPolicy;

    #[test]
    fn test_build_lut_fills_ranges() {
        let borders = BorderSet::from_borders(vec![10, 200]).unwrap();
        let (lut, palette) = build_lut(&borders, &[4.9, 120.2, 230.999]).unwrap();
        assert_eq!(palette, vec![4, 120, 230]);
        assert_eq!(lut.map(0), 4);
        assert_eq!(lut.map(9), 4);
        assert_eq!(lut.map(10), 120);
        assert_eq!(lut.map(199), 120);
        assert_eq!(lut.map(200), 230);
        assert_eq!(lut.map(255), 230);
    }

    #[test]
    fn test_build_lut_rejects_wrong_length() {
        let borders = BorderSet::uniform(3).unwrap();
        assert!(build_lut(&borders, &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_build_shapes() {
        let buffer: Vec<u8> = (0..4096u32).map(|i| (i * 37 % 256) as u8).collect();
        for no_bins in [2usize, 3, 5, 16] {
            let params = PosterizeParams::new(1.0, no_bins).unwrap();
            let p = build(&buffer, &params, &OptimizeOptions::default()).unwrap();
            assert_eq!(p.lut().as_slice().len(), 256);
            assert_eq!(p.palette().len(), no_bins);
            assert_eq!(p.borders().no_bins(), no_bins);
            assert_eq!(p.stats().len(), no_bins);
        }
    }

    #[test]
    fn test_build_empty_buffer() {
        let params = PosterizeParams::default();
        assert_eq!(
            build(&[], &params, &OptimizeOptions::default()),
            Err(ClusterError::EmptyImage)
        );
    }

    #[test]
    fn test_build_reject_policy_surfaces_empty_bin() {
        let params = PosterizeParams::new(1.0, 2).unwrap();
        let opts = OptimizeOptions {
            empty_bins: EmptyBinPolicy::Reject,
            ..Default::default()
        };
        assert!(matches!(
            build(&[100, 100, 100, 100], &params, &opts),
            Err(ClusterError::DegenerateBin { bin: 1, .. })
        ));
    }

    #[test]
    fn test_remap_through_result() {
        let buffer = [10u8, 10, 10, 240, 240, 240];
        let params = PosterizeParams::new(1.0, 2).unwrap();
        let p = build(&buffer, &params, &OptimizeOptions::default()).unwrap();
        assert_eq!(p.palette(), &[10, 240]);
        let remapped = p.remap(&[0, 255]).unwrap();
        assert_eq!(remapped.map(10), 0);
        assert_eq!(remapped.map(240), 255);
    }
}
