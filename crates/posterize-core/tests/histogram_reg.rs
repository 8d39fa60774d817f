//! Histogram regression test
//!
//! Counts over synthetic buffers and interval statistics.

use posterize_core::Histogram;
use posterize_test::{RegParams, clustered_buffer, gradient_buffer, random_buffer};

#[test]
fn histogram_reg() {
    let mut rp = RegParams::new("histogram");

    // Gradient: 256 columns, each value once per row
    let buffer = gradient_buffer(256, 40);
    let hist = Histogram::from_buffer(&buffer);
    rp.compare_values(buffer.len() as f64, hist.total() as f64, 0.0);
    rp.check(hist.counts().iter().all(|&c| c == 40));
    rp.compare_values(127.5, hist.interval_mean(0..256).unwrap(), 1e-9);
    // Discrete uniform over 256 values: (256^2 - 1) / 12
    let var = hist.interval_variance(0..256, 127.5);
    rp.compare_values(5461.25, var, 1e-6);

    // Random buffer: counts always sum to the length
    let buffer = random_buffer(100_000, 42);
    let hist = Histogram::from_buffer(&buffer);
    rp.compare_values(100_000.0, hist.total() as f64, 0.0);
    let split: u64 = hist.population(0..100) + hist.population(100..256);
    rp.compare_values(100_000.0, split as f64, 0.0);

    // Clusters
    let buffer = clustered_buffer(&[(10, 3), (20, 1)]);
    let hist = Histogram::from_buffer(&buffer);
    rp.compare_values(12.5, hist.interval_mean(0..256).unwrap(), 1e-12);
    rp.compare_values(18.75, hist.interval_variance(0..256, 12.5), 1e-12);
    rp.check(hist.interval_mean(21..256).is_none());

    assert!(rp.cleanup(), "histogram regression test failed");
}
