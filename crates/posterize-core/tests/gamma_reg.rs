//! Gamma transform regression test
//!
//! Checks the encode/decode pair across the accepted gamma range and the
//! unit-gamma table against its golden file.

use posterize_core::{GAMMA_MAX, GAMMA_MIN, GammaTable, Lut, decode_gamma, encode_gamma};
use posterize_test::RegParams;

#[test]
fn gamma_identity_reg() {
    let mut rp = RegParams::new("gamma_identity");

    let table = GammaTable::new(1.0).unwrap();
    rp.write_data_and_check(table.encode_lut().as_slice(), "lut")
        .unwrap();
    rp.compare_strings(Lut::identity().as_slice(), table.decode_lut().as_slice());

    // encode(decode(x)) and decode(encode(x)) within 1 of x at gamma 1
    for x in 0..=255u8 {
        let a = encode_gamma(decode_gamma(x, 1.0), 1.0);
        let b = decode_gamma(encode_gamma(x, 1.0), 1.0);
        rp.compare_values(x as f64, a as f64, 1.0);
        rp.compare_values(x as f64, b as f64, 1.0);
    }

    assert!(rp.cleanup(), "gamma_identity regression test failed");
}

#[test]
fn gamma_range_reg() {
    let mut rp = RegParams::new("gamma_range");

    for &gamma in &[GAMMA_MIN, 0.45, 1.0, 1.8, 2.2, 5.0, GAMMA_MAX] {
        let table = GammaTable::new(gamma).unwrap();
        let enc = table.encode_lut().as_slice();
        let dec = table.decode_lut().as_slice();

        // Both directions are monotone and keep the endpoints
        rp.check(enc.windows(2).all(|w| w[0] <= w[1]));
        rp.check(dec.windows(2).all(|w| w[0] <= w[1]));
        rp.compare_values(0.0, enc[0] as f64, 0.0);
        rp.compare_values(255.0, enc[255] as f64, 0.0);
        rp.compare_values(0.0, dec[0] as f64, 0.0);
        rp.compare_values(255.0, dec[255] as f64, 0.0);

        // gamma > 1 darkens on encode, gamma < 1 brightens
        let mid = enc[128] as f64;
        if gamma > 1.0 {
            rp.check(mid < 128.0);
        } else if gamma < 1.0 {
            rp.check(mid > 128.0);
        } else {
            rp.compare_values(128.0, mid, 0.0);
        }
    }

    assert!(rp.cleanup(), "gamma_range regression test failed");
}
