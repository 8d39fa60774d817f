//! Intensity histograms
//!
//! Counts the occurrences of each of the 256 byte values in a buffer and
//! answers population, mean and variance queries over half-open intensity
//! ranges. Those interval statistics drive the bin optimizer.

use crate::lut::LUT_SIZE;
use std::ops::Range;

/// Buffers at least this long are counted in parallel when the
/// `parallel` feature is enabled.
pub const PARALLEL_THRESHOLD: usize = 1 << 16;

/// A 256-bin histogram of 8-bit intensities.
///
/// The sum of all counts equals the length of the buffer it was built from.
#[derive(Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; LUT_SIZE],
}

impl Histogram {
    /// Count every value in `buffer`.
    ///
    /// With the `parallel` feature, large buffers are split into chunks whose
    /// partial histograms are summed; the result is identical either way.
    ///
    /// # Example
    ///
    /// ```
    /// use posterize_core::Histogram;
    ///
    /// let hist = Histogram::from_buffer(&[3, 3, 200]);
    /// assert_eq!(hist.count(3), 2);
    /// assert_eq!(hist.total(), 3);
    /// ```
    pub fn from_buffer(buffer: &[u8]) -> Self {
        #[cfg(feature = "parallel")]
        {
            if buffer.len() >= PARALLEL_THRESHOLD {
                return Self::from_buffer_parallel(buffer);
            }
        }
        Self::from_buffer_sequential(buffer)
    }

    /// Single-threaded counting pass.
    pub fn from_buffer_sequential(buffer: &[u8]) -> Self {
        let mut counts = [0u64; LUT_SIZE];
        for &v in buffer {
            counts[v as usize] += 1;
        }
        Self { counts }
    }

    /// Chunked fold/reduce over rayon's thread pool.
    #[cfg(feature = "parallel")]
    pub fn from_buffer_parallel(buffer: &[u8]) -> Self {
        use rayon::prelude::*;

        const CHUNK: usize = 1 << 14;
        let counts = buffer
            .par_chunks(CHUNK)
            .fold(
                || [0u64; LUT_SIZE],
                |mut acc, chunk| {
                    for &v in chunk {
                        acc[v as usize] += 1;
                    }
                    acc
                },
            )
            .reduce(
                || [0u64; LUT_SIZE],
                |mut a, b| {
                    for (x, y) in a.iter_mut().zip(b.iter()) {
                        *x += y;
                    }
                    a
                },
            );
        Self { counts }
    }

    /// Build directly from counts.
    pub fn from_counts(counts: [u64; LUT_SIZE]) -> Self {
        Self { counts }
    }

    /// Occurrences of `value`.
    #[inline]
    pub fn count(&self, value: u8) -> u64 {
        self.counts[value as usize]
    }

    /// All 256 counts.
    pub fn counts(&self) -> &[u64; LUT_SIZE] {
        &self.counts
    }

    /// Total number of samples.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// True if no samples were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Number of samples whose value lies in `range`.
    pub fn population(&self, range: Range<usize>) -> u64 {
        self.counts[clip(range)].iter().sum()
    }

    /// Population-weighted mean of the values in `range`.
    ///
    /// Returns `None` when the range holds no samples.
    pub fn interval_mean(&self, range: Range<usize>) -> Option<f64> {
        let range = clip(range);
        let start = range.start;
        let mut population = 0u64;
        let mut weighted = 0.0f64;
        for (offset, &count) in self.counts[range].iter().enumerate() {
            population += count;
            weighted += count as f64 * (start + offset) as f64;
        }
        if population == 0 {
            None
        } else {
            Some(weighted / population as f64)
        }
    }

    /// Population-weighted variance of the values in `range` around `mean`.
    ///
    /// An empty range has variance 0.
    pub fn interval_variance(&self, range: Range<usize>, mean: f64) -> f64 {
        let range = clip(range);
        let start = range.start;
        let mut population = 0u64;
        let mut sum_sq = 0.0f64;
        for (offset, &count) in self.counts[range].iter().enumerate() {
            let d = mean - (start + offset) as f64;
            population += count;
            sum_sq += d * d * count as f64;
        }
        if population == 0 {
            0.0
        } else {
            sum_sq / population as f64
        }
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            counts: [0; LUT_SIZE],
        }
    }
}

impl std::fmt::Debug for Histogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Only non-zero bins
        f.debug_map()
            .entries(
                self.counts
                    .iter()
                    .enumerate()
                    .filter(|&(_, &c)| c != 0),
            )
            .finish()
    }
}

fn clip(range: Range<usize>) -> Range<usize> {
    let end = range.end.min(LUT_SIZE);
    range.start.min(end)..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_length() {
        let buffer: Vec<u8> = (0..1000u32).map(|i| (i * 7 % 256) as u8).collect();
        let hist = Histogram::from_buffer(&buffer);
        assert_eq!(hist.total(), 1000);
        assert!(!hist.is_empty());
    }

    #[test]
    fn test_empty_buffer() {
        let hist = Histogram::from_buffer(&[]);
        assert!(hist.is_empty());
        assert_eq!(hist.total(), 0);
        assert_eq!(hist.interval_mean(0..256), None);
        assert_eq!(hist.interval_variance(0..256, 10.0), 0.0);
    }

    #[test]
    fn test_interval_stats() {
        // 10 x 2 and 10 x 4 -> mean 3, variance 1
        let mut buffer = vec![2u8; 10];
        buffer.extend(std::iter::repeat_n(4u8, 10));
        let hist = Histogram::from_buffer(&buffer);

        assert_eq!(hist.population(0..3), 10);
        assert_eq!(hist.population(0..256), 20);
        let mean = hist.interval_mean(0..256).unwrap();
        assert!((mean - 3.0).abs() < 1e-12);
        let var = hist.interval_variance(0..256, mean);
        assert!((var - 1.0).abs() < 1e-12);

        assert_eq!(hist.interval_mean(5..256), None);
        assert_eq!(hist.interval_mean(3..5), Some(4.0));
    }

    #[test]
    fn test_range_is_clipped() {
        let hist = Histogram::from_buffer(&[255, 255]);
        assert_eq!(hist.population(200..400), 2);
        assert_eq!(hist.population(300..400), 0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let buffer: Vec<u8> = (0..(PARALLEL_THRESHOLD * 3 + 17))
            .map(|i| (i.wrapping_mul(2654435761) >> 7) as u8)
            .collect();
        assert_eq!(
            Histogram::from_buffer_parallel(&buffer),
            Histogram::from_buffer_sequential(&buffer)
        );
    }
}
