//! Variance-minimizing bin optimizer
//!
//! Starting from a uniform partition, the optimizer repeatedly finds the
//! bin with the largest within-bin variance and shrinks it by one intensity,
//! giving that intensity to a neighbour. It stops as soon as the summed
//! variance fails to strictly decrease, when no legal move is left, or when
//! the iteration cap is reached. In every case the result is the partition
//! with the lowest summed variance seen.
//!
//! Each iteration depends on the previous border set, so the loop is
//! sequential by nature.

use crate::borders::BorderSet;
use crate::{ClusterError, ClusterResult};
use posterize_core::Histogram;
use std::ops::Range;

/// Iteration cap used when none is given.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// How to pick the representative value of a bin that holds no pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyBinPolicy {
    /// Reuse the mean of the nearest populated bin below, or above if
    /// there is none below
    #[default]
    InheritNeighbor,
    /// Use the midpoint of the bin's own intensity range
    Midpoint,
    /// Use intensity 0
    Zero,
    /// Fail with [`ClusterError::DegenerateBin`]
    Reject,
}

/// Optimizer settings.
#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    /// Upper bound on evaluated iterations; must be at least 1
    pub max_iterations: usize,
    /// Representative-value policy for empty bins
    pub empty_bins: EmptyBinPolicy,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            empty_bins: EmptyBinPolicy::default(),
        }
    }
}

/// Population, mean and variance of one bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinStats {
    /// Number of pixels in the bin
    pub population: u64,
    /// Population-weighted mean; `None` for an empty bin
    pub mean: Option<f64>,
    /// Population-weighted variance around `mean`; 0 for an empty bin
    pub variance: f64,
}

impl BinStats {
    /// Compute the statistics of `range` in `hist`.
    pub fn from_histogram(hist: &Histogram, range: Range<usize>) -> Self {
        let population = hist.population(range.clone());
        let mean = hist.interval_mean(range.clone());
        let variance = mean.map_or(0.0, |m| hist.interval_variance(range, m));
        Self {
            population,
            mean,
            variance,
        }
    }

    /// True if no pixels fall in the bin.
    pub fn is_empty(&self) -> bool {
        self.population == 0
    }
}

/// Why the optimizer stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Summed variance stopped decreasing
    Converged,
    /// The bin to shrink could not give up an intensity
    Pinned,
    /// `max_iterations` was reached while variance was still decreasing
    IterationCap,
}

/// Diagnostics of one optimizer run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizeReport {
    /// Iterations evaluated, including the final stopping one
    pub iterations: usize,
    /// Summed variance of the uniform starting partition
    pub initial_variance: f64,
    /// Summed variance of the returned partition
    pub total_variance: f64,
    /// Stopping reason
    pub termination: Termination,
}

/// Optimized partition of a histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedBins {
    /// Final borders
    pub borders: BorderSet,
    /// Statistics of each bin under `borders`
    pub stats: Vec<BinStats>,
    /// Run diagnostics
    pub report: OptimizeReport,
}

/// Statistics of every bin of `borders`.
pub fn bin_stats(hist: &Histogram, borders: &BorderSet) -> Vec<BinStats> {
    borders
        .ranges()
        .map(|range| BinStats::from_histogram(hist, range))
        .collect()
}

/// Index of the largest variance; the first one wins ties.
fn max_variance_bin(variances: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in variances.iter().enumerate().skip(1) {
        if v > variances[best] {
            best = i;
        }
    }
    best
}

/// Partition `hist` into `no_bins` bins of minimal summed variance.
///
/// # Errors
///
/// Returns [`ClusterError::EmptyImage`] for an empty histogram,
/// [`ClusterError::InvalidParameters`] if `max_iterations` is 0, and a core
/// error for a bin count outside `2..=256`.
pub fn optimize_bins(
    hist: &Histogram,
    no_bins: usize,
    options: &OptimizeOptions,
) -> ClusterResult<OptimizedBins> {
    if hist.is_empty() {
        return Err(ClusterError::EmptyImage);
    }
    if options.max_iterations == 0 {
        return Err(ClusterError::InvalidParameters(
            "max_iterations must be >= 1".to_string(),
        ));
    }

    let mut borders = BorderSet::uniform(no_bins)?;
    let mut previous = f64::INFINITY;
    let mut best: Option<(BorderSet, Vec<BinStats>)> = None;
    let mut initial_variance = None;
    let mut termination = Termination::IterationCap;
    let mut iterations = 0;

    while iterations < options.max_iterations {
        iterations += 1;

        let stats = bin_stats(hist, &borders);
        let variances: Vec<f64> = stats.iter().map(|s| s.variance).collect();
        let total: f64 = variances.iter().sum();
        initial_variance.get_or_insert(total);

        tracing::trace!(iterations, total, borders = ?borders.borders(), "optimizer step");

        if total >= previous {
            termination = Termination::Converged;
            break;
        }
        previous = total;

        best = Some((borders.clone(), stats));

        let bin = max_variance_bin(&variances);

        if borders.shrink_bin(bin, &variances).is_none() {
            termination = Termination::Pinned;
            break;
        }
    }

    if termination == Termination::IterationCap {
        tracing::warn!(
            max_iterations = options.max_iterations,
            total_variance = previous,
            "bin optimizer hit its iteration cap; keeping best borders so far"
        );
    }

    // The first iteration always improves on +inf, so `best` is set
    let (borders, stats) = best.ok_or_else(|| {
        ClusterError::InvalidParameters("optimizer evaluated no partition".to_string())
    })?;
    let report = OptimizeReport {
        iterations,
        initial_variance: initial_variance.unwrap_or(previous),
        total_variance: previous,
        termination,
    };

    tracing::debug!(
        no_bins,
        iterations,
        total_variance = report.total_variance,
        termination = ?termination,
        "bin optimizer finished"
    );

    Ok(OptimizedBins {
        borders,
        stats,
        report,
    })
}

/// Representative value of every bin, with empty bins filled per `policy`.
///
/// # Errors
///
/// Returns [`ClusterError::DegenerateBin`] under [`EmptyBinPolicy::Reject`]
/// and [`ClusterError::EmptyImage`] if every bin is empty.
pub fn resolve_means(
    stats: &[BinStats],
    borders: &BorderSet,
    policy: EmptyBinPolicy,
) -> ClusterResult<Vec<f64>> {
    if stats.iter().all(BinStats::is_empty) {
        return Err(ClusterError::EmptyImage);
    }

    let mut means = Vec::with_capacity(stats.len());
    for (bin, s) in stats.iter().enumerate() {
        let mean = match (s.mean, policy) {
            (Some(mean), _) => mean,
            (None, EmptyBinPolicy::InheritNeighbor) => stats[..bin]
                .iter()
                .rev()
                .chain(stats[bin + 1..].iter())
                .find_map(|s| s.mean)
                .unwrap_or(0.0),
            (None, EmptyBinPolicy::Midpoint) => {
                let range = borders.bin_range(bin);
                (range.start + range.end - 1) as f64 / 2.0
            }
            (None, EmptyBinPolicy::Zero) => 0.0,
            (None, EmptyBinPolicy::Reject) => {
                let range = borders.bin_range(bin);
                return Err(ClusterError::DegenerateBin {
                    bin,
                    start: range.start,
                    end: range.end,
                });
            }
        };
        means.push(mean);
    }
    Ok(means)
}
