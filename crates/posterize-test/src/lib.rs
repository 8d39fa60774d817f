//! posterize-test - Regression test framework for the posterize workspace
//!
//! Supports three modes, selected with the `REGTEST_MODE` environment
//! variable:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files (default)
//! - **Display**: Run tests without comparison
//!
//! Golden files live in `tests/golden` at the workspace root; regression
//! output goes to `tests/regout`.
//!
//! # Usage
//!
//! ```ignore
//! use posterize_test::{RegParams, gradient_buffer};
//!
//! let mut rp = RegParams::new("optimize");
//! rp.compare_values(3.0, palette.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // posterize-test is at crates/posterize-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// A buffer of `len` copies of `value`
pub fn constant_buffer(value: u8, len: usize) -> Vec<u8> {
    vec![value; len]
}

/// A `width` x `height` row-major buffer ramping 0..=255 across each row
pub fn gradient_buffer(width: usize, height: usize) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(width * height);
    for _ in 0..height {
        for x in 0..width {
            let val = if width > 1 { x * 255 / (width - 1) } else { 0 };
            buffer.push(val as u8);
        }
    }
    buffer
}

/// A buffer of `len` intensities drawn uniformly from 0..=255
///
/// Seeded, so the same `seed` always yields the same buffer.
pub fn random_buffer(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..=255u8)).collect()
}

/// A buffer made of `(value, count)` clusters, in order
pub fn clustered_buffer(clusters: &[(u8, usize)]) -> Vec<u8> {
    clusters
        .iter()
        .flat_map(|&(value, count)| std::iter::repeat_n(value, count))
        .collect()
}
