//! Bin borders
//!
//! `no_bins` bins are described by `no_bins - 1` cut points. Bin 0 covers
//! `0..borders[0]`, bin `i` covers `borders[i-1]..borders[i]`, and the last
//! bin covers `borders[last]..256`. [`BorderSet`] keeps the cut points
//! strictly increasing inside `1..=255`, so every bin owns at least one
//! intensity and the bins tile `0..256` exactly once.

use crate::{ClusterError, ClusterResult};
use posterize_core::{Error, LUT_SIZE, MAX_BINS, MIN_BINS};
use std::ops::Range;

/// One single-unit border adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderMove {
    /// Border at this index moved one intensity down
    Decrement(usize),
    /// Border at this index moved one intensity up
    Increment(usize),
}

/// Ordered cut points between adjacent bins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BorderSet {
    borders: Vec<usize>,
}

impl BorderSet {
    /// Uniform initial partition: border `i` sits at `(256 / no_bins) * (i + 1)`.
    ///
    /// Integer division truncates, so the last bin absorbs the remainder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBinCount`] unless `no_bins` is in `2..=256`.
    pub fn uniform(no_bins: usize) -> ClusterResult<Self> {
        check_bin_count(no_bins)?;
        let step = LUT_SIZE / no_bins;
        let borders = (1..no_bins).map(|i| step * i).collect();
        Ok(Self { borders })
    }

    /// Use explicit cut points.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError::InvalidParameters`] unless the borders are
    /// strictly increasing inside `1..=255`, and [`Error::InvalidBinCount`]
    /// if they describe fewer than two bins.
    pub fn from_borders(borders: Vec<usize>) -> ClusterResult<Self> {
        check_bin_count(borders.len() + 1)?;
        let mut prev = 0;
        for &b in &borders {
            if b <= prev || b >= LUT_SIZE {
                return Err(ClusterError::InvalidParameters(format!(
                    "borders must be strictly increasing within 1..=255, got {borders:?}"
                )));
            }
            prev = b;
        }
        Ok(Self { borders })
    }

    /// Number of bins.
    pub fn no_bins(&self) -> usize {
        self.borders.len() + 1
    }

    /// The cut points.
    pub fn borders(&self) -> &[usize] {
        &self.borders
    }

    /// Half-open intensity range of `bin`.
    ///
    /// # Panics
    ///
    /// Panics if `bin >= self.no_bins()`.
    pub fn bin_range(&self, bin: usize) -> Range<usize> {
        let start = if bin == 0 { 0 } else { self.borders[bin - 1] };
        let end = self.borders.get(bin).copied().unwrap_or(LUT_SIZE);
        start..end
    }

    /// Ranges of all bins, in order.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.no_bins()).map(|bin| self.bin_range(bin))
    }

    /// Index of the bin that contains `value`.
    pub fn bin_of(&self, value: u8) -> usize {
        self.borders.partition_point(|&b| b <= value as usize)
    }

    /// Shrink `bin` by one intensity, handing it to a neighbour.
    ///
    /// The first bin gives up its top value, the last bin its bottom value.
    /// An inner bin gives a value to whichever neighbour has the strictly
    /// smaller variance, preferring the right neighbour on ties.
    ///
    /// Returns `None`, leaving the borders untouched, when the move would
    /// empty a bin's range.
    pub fn shrink_bin(&mut self, bin: usize, variances: &[f64]) -> Option<BorderMove> {
        let last = self.no_bins() - 1;
        let mv = if bin == 0 {
            BorderMove::Decrement(0)
        } else if bin == last {
            BorderMove::Increment(last - 1)
        } else if variances[bin - 1] < variances[bin + 1] {
            BorderMove::Increment(bin - 1)
        } else {
            BorderMove::Decrement(bin)
        };

        let (index, target) = match mv {
            BorderMove::Decrement(i) => (i, self.borders[i].checked_sub(1)?),
            BorderMove::Increment(i) => (i, self.borders[i] + 1),
        };
        let lower = if index == 0 { 0 } else { self.borders[index - 1] };
        let upper = self.borders.get(index + 1).copied().unwrap_or(LUT_SIZE);
        if target <= lower || target >= upper {
            return None;
        }

        self.borders[index] = target;
        Some(mv)
    }
}

fn check_bin_count(no_bins: usize) -> ClusterResult<()> {
    if !(MIN_BINS..=MAX_BINS).contains(&no_bins) {
        return Err(Error::InvalidBinCount {
            count: no_bins,
            min: MIN_BINS,
            max: MAX_BINS,
        }
        .into());
    }
    Ok(())
}
