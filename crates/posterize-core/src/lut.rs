//! 256-entry intensity lookup tables
//!
//! A [`Lut`] maps every 8-bit input intensity to an output intensity. It is
//! used for gamma tables, for the posterization table produced by clustering,
//! and for palette-remapped tables.

use crate::error::{Error, Result};
use std::ops::Range;

/// Number of distinct 8-bit intensities.
pub const LUT_SIZE: usize = 256;

/// A 256-entry lookup table over 8-bit intensities.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lut([u8; LUT_SIZE]);

impl Lut {
    /// Identity mapping.
    pub fn identity() -> Self {
        let mut table = [0u8; LUT_SIZE];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = i as u8;
        }
        Self(table)
    }

    /// Table with every entry set to `value`.
    pub fn constant(value: u8) -> Self {
        Self([value; LUT_SIZE])
    }

    /// Wrap an existing table.
    pub fn from_array(table: [u8; LUT_SIZE]) -> Self {
        Self(table)
    }

    /// Copy a table from a slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LutLength`] unless the slice has exactly 256 entries.
    pub fn from_slice(table: &[u8]) -> Result<Self> {
        let table: [u8; LUT_SIZE] = table.try_into().map_err(|_| Error::LutLength {
            expected: LUT_SIZE,
            actual: table.len(),
        })?;
        Ok(Self(table))
    }

    /// Look up a single intensity.
    #[inline]
    pub fn map(&self, value: u8) -> u8 {
        self.0[value as usize]
    }

    /// Borrow the raw table.
    pub fn as_array(&self) -> &[u8; LUT_SIZE] {
        &self.0
    }

    /// Borrow the raw table as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Fill the half-open intensity range with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the range is reversed or
    /// reaches past 256.
    pub fn fill_range(&mut self, range: Range<usize>, value: u8) -> Result<()> {
        if range.start > range.end || range.end > LUT_SIZE {
            return Err(Error::InvalidParameter(format!(
                "range {}..{} is not inside 0..{LUT_SIZE}",
                range.start, range.end
            )));
        }
        self.0[range].fill(value);
        Ok(())
    }

    /// Map every value of `buffer` into a new buffer.
    pub fn apply(&self, buffer: &[u8]) -> Vec<u8> {
        buffer.iter().map(|&v| self.map(v)).collect()
    }

    /// Map every value of `buffer` in place.
    pub fn apply_in_place(&self, buffer: &mut [u8]) {
        for v in buffer.iter_mut() {
            *v = self.map(*v);
        }
    }

    /// Map `src` into the equally sized `dst`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] if the buffers differ in length.
    pub fn apply_into(&self, src: &[u8], dst: &mut [u8]) -> Result<()> {
        if src.len() != dst.len() {
            return Err(Error::BufferLength {
                expected: src.len(),
                actual: dst.len(),
            });
        }
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = self.map(s);
        }
        Ok(())
    }

    /// Compose two tables: the result maps `v` to `outer.map(self.map(v))`.
    pub fn then(&self, outer: &Lut) -> Lut {
        let mut table = [0u8; LUT_SIZE];
        for (entry, &v) in table.iter_mut().zip(self.0.iter()) {
            *entry = outer.map(v);
        }
        Lut(table)
    }

    /// Maximal runs of equal adjacent entries, left to right.
    pub fn runs(&self) -> Runs<'_> {
        Runs {
            table: &self.0,
            pos: 0,
        }
    }

    /// Number of maximal runs.
    pub fn run_count(&self) -> usize {
        self.runs().count()
    }
}

impl Default for Lut {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::fmt::Debug for Lut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Print runs rather than 256 raw entries
        f.debug_list()
            .entries(self.runs().map(|r| (r.range, r.value)))
            .finish()
    }
}

impl AsRef<[u8]> for Lut {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::ops::Index<u8> for Lut {
    type Output = u8;

    fn index(&self, value: u8) -> &u8 {
        &self.0[value as usize]
    }
}

/// A maximal run of equal entries in a [`Lut`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Half-open intensity range covered by the run
    pub range: Range<usize>,
    /// Output value shared by the run
    pub value: u8,
}

/// Iterator over the runs of a [`Lut`].
pub struct Runs<'a> {
    table: &'a [u8; LUT_SIZE],
    pos: usize,
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        if self.pos >= LUT_SIZE {
            return None;
        }
        let start = self.pos;
        let value = self.table[start];
        let mut end = start + 1;
        while end < LUT_SIZE && self.table[end] == value {
            end += 1;
        }
        self.pos = end;
        Some(Run {
            range: start..end,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let lut = Lut::identity();
        for v in 0..=255u8 {
            assert_eq!(lut.map(v), v);
        }
        assert_eq!(lut.run_count(), 256);
    }

    #[test]
    fn test_from_slice_length() {
        assert!(Lut::from_slice(&[0u8; 256]).is_ok());
        assert_eq!(
            Lut::from_slice(&[0u8; 255]),
            Err(Error::LutLength {
                expected: 256,
                actual: 255
            })
        );
    }

    #[test]
    fn test_fill_range_and_runs() {
        let mut lut = Lut::constant(0);
        lut.fill_range(100..200, 7).unwrap();
        let runs: Vec<Run> = lut.runs().collect();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[1], Run { range: 100..200, value: 7 });
        assert_eq!(runs[2].range, 200..256);
        assert!(lut.fill_range(10..257, 1).is_err());
    }

    #[test]
    fn test_apply_variants() {
        let mut lut = Lut::constant(9);
        lut.fill_range(0..128, 3).unwrap();
        let src = [0u8, 127, 128, 255];
        assert_eq!(lut.apply(&src), vec![3, 3, 9, 9]);

        let mut buf = src;
        lut.apply_in_place(&mut buf);
        assert_eq!(buf, [3, 3, 9, 9]);

        let mut short = [0u8; 3];
        assert!(lut.apply_into(&src, &mut short).is_err());
    }

    #[test]
    fn test_then_composes() {
        let invert = Lut::from_array(std::array::from_fn(|i| 255 - i as u8));
        let twice = invert.then(&invert);
        assert_eq!(twice, Lut::identity());
    }
}
