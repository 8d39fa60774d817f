//! Palette remapping
//!
//! Replaces the representative values found by clustering with
//! caller-chosen output values (for example the discrete power levels of an
//! engraving laser) while keeping the run structure of the lookup table.

use crate::{ClusterError, ClusterResult};
use posterize_core::{LUT_SIZE, Lut};

/// Position of `value` in `palette`; the first match wins.
fn palette_index(palette: &[u8], value: u8) -> Option<usize> {
    palette.iter().position(|&p| p == value)
}

/// Derive a lookup table with `replacements[i]` substituted for
/// `palette[i]`.
///
/// The table is scanned left to right; every time its value changes, the
/// new value is looked up in `palette` and its replacement is used for the
/// whole run. Run boundaries are preserved; bins and means are not
/// recomputed. Neither input is modified.
///
/// # Errors
///
/// - [`ClusterError::PaletteLengthMismatch`] if `replacements` and `palette`
///   differ in length
/// - [`ClusterError::LutLength`] if `lut` does not have 256 entries
/// - [`ClusterError::UnmatchedColor`] if a run value is missing from
///   `palette`
pub fn remap_lut(palette: &[u8], lut: &[u8], replacements: &[u8]) -> ClusterResult<Lut> {
    if palette.len() != replacements.len() {
        return Err(ClusterError::PaletteLengthMismatch {
            palette: palette.len(),
            replacements: replacements.len(),
        });
    }
    if lut.len() != LUT_SIZE {
        return Err(ClusterError::LutLength(lut.len()));
    }

    let mut table = [0u8; LUT_SIZE];
    let mut current: Option<(u8, u8)> = None;
    for (index, (&value, out)) in lut.iter().zip(table.iter_mut()).enumerate() {
        let replacement = match current {
            Some((raw, replacement)) if raw == value => replacement,
            _ => {
                let i = palette_index(palette, value)
                    .ok_or(ClusterError::UnmatchedColor { value, index })?;
                current = Some((value, replacements[i]));
                replacements[i]
            }
        };
        *out = replacement;
    }

    Ok(Lut::from_array(table))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_runs() -> Vec<u8> {
        let mut lut = vec![50u8; 80];
        lut.extend(std::iter::repeat_n(150u8, 90));
        lut.extend(std::iter::repeat_n(200u8, 86));
        lut
    }

    #[test]
    fn test_remap_preserves_runs() {
        let lut = three_runs();
        let out = remap_lut(&[50, 150, 200], &lut, &[0, 128, 255]).unwrap();
        let runs: Vec<_> = out.runs().map(|r| (r.range, r.value)).collect();
        assert_eq!(runs, vec![(0..80, 0), (80..170, 128), (170..256, 255)]);
    }

    #[test]
    fn test_remap_length_mismatch() {
        let lut = three_runs();
        let palette = [50u8, 150, 200];
        assert_eq!(
            remap_lut(&palette, &lut, &[0, 128]),
            Err(ClusterError::PaletteLengthMismatch {
                palette: 3,
                replacements: 2
            })
        );
        assert_eq!(lut, three_runs());
    }

    #[test]
    fn test_remap_bad_lut_length() {
        assert_eq!(
            remap_lut(&[1], &[1u8; 255], &[2]),
            Err(ClusterError::LutLength(255))
        );
    }

    #[test]
    fn test_remap_unmatched_value() {
        let lut = three_runs();
        assert_eq!(
            remap_lut(&[50, 200], &lut, &[0, 255]),
            Err(ClusterError::UnmatchedColor {
                value: 150,
                index: 80
            })
        );
    }

    #[test]
    fn test_remap_duplicate_palette_first_match_wins() {
        let lut = vec![7u8; 256];
        let out = remap_lut(&[7, 7], &lut, &[1, 2]).unwrap();
        assert_eq!(out, Lut::constant(1));
    }
}
