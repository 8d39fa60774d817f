//! Applying lookup tables to pixel buffers

use crate::ClusterResult;
use posterize_core::{GammaTable, Lut};

/// Gamma-encode, look up, and gamma-decode every pixel of `buffer`.
///
/// The three steps are folded into one composed table first, so each pixel
/// costs a single lookup.
///
/// # Errors
///
/// Returns a core error for an invalid gamma.
pub fn apply(buffer: &[u8], lut: &Lut, gamma: f32) -> ClusterResult<Vec<u8>> {
    let table = GammaTable::new(gamma)?;
    Ok(apply_with_table(buffer, lut, &table))
}

/// Like [`apply`] with prebuilt gamma tables.
pub fn apply_with_table(buffer: &[u8], lut: &Lut, gamma: &GammaTable) -> Vec<u8> {
    let composed = gamma.encode_lut().then(lut).then(gamma.decode_lut());
    composed.apply(buffer)
}

/// Look up every pixel of an already gamma-encoded `buffer`.
pub fn apply_lut(buffer: &[u8], lut: &Lut) -> Vec<u8> {
    lut.apply(buffer)
}

/// Gamma-encode and look up every pixel, without decoding.
///
/// Used with palette-remapped tables, whose values are literal output
/// intensities rather than gamma-space ones.
pub fn apply_remapped(buffer: &[u8], remapped: &Lut, gamma: &GammaTable) -> Vec<u8> {
    gamma.encode_lut().then(remapped).apply(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_unit_gamma_is_plain_lookup() {
        let mut lut = Lut::constant(200);
        lut.fill_range(0..100, 20).unwrap();
        let buffer = [0u8, 99, 100, 255];
        assert_eq!(apply(&buffer, &lut, 1.0).unwrap(), vec![20, 20, 200, 200]);
        assert_eq!(apply_lut(&buffer, &lut), vec![20, 20, 200, 200]);
    }

    #[test]
    fn test_apply_matches_step_by_step() {
        let gamma = GammaTable::new(2.2).unwrap();
        let mut lut = Lut::constant(180);
        lut.fill_range(0..60, 15).unwrap();
        let buffer: Vec<u8> = (0..=255).collect();

        let encoded = gamma.encode(&buffer);
        let expected = gamma.decode(&lut.apply(&encoded));
        assert_eq!(apply_with_table(&buffer, &lut, &gamma), expected);
    }

    #[test]
    fn test_apply_remapped_skips_decode() {
        let gamma = GammaTable::new(2.0).unwrap();
        let remapped = Lut::constant(0x44);
        assert_eq!(apply_remapped(&[0, 128, 255], &remapped, &gamma), vec![0x44; 3]);
    }

    #[test]
    fn test_apply_invalid_gamma() {
        assert!(apply(&[1, 2], &Lut::identity(), 0.0).is_err());
    }
}
