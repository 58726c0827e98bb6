//! Property tests for the normal-approximation estimator

use approx::assert_relative_eq;
use econoscope_confidence::{compute_basic_estimate, compute_basic_statistics};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

fn normal_sample(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(75.0, 15.0).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

proptest! {
    // Property: variance is never negative and the interval brackets the mean
    #[test]
    fn prop_interval_brackets_mean(sample in prop::collection::vec(-1e6f64..1e6, 2..200)) {
        let result = compute_basic_estimate(&sample).unwrap();

        prop_assert!(result.variance >= 0.0);
        prop_assert!(result.interval_lower <= result.mean);
        prop_assert!(result.mean <= result.interval_upper);
        prop_assert_eq!(result.sample_size, sample.len());
    }

    // Property: standard error is the standard deviation over sqrt(n)
    #[test]
    fn prop_standard_error_relation(sample in prop::collection::vec(0.0f64..100.0, 2..100)) {
        let stats = compute_basic_statistics(&sample).unwrap();
        let expected = stats.standard_deviation / (sample.len() as f64).sqrt();
        prop_assert!((stats.standard_error - expected).abs() <= 1e-12 * expected.max(1.0));
        prop_assert!((stats.standard_deviation.powi(2) - stats.variance).abs() <= 1e-9 * stats.variance.max(1.0));
    }

    // Property: shifting every observation shifts the interval, width unchanged
    #[test]
    fn prop_shift_equivariance(
        sample in prop::collection::vec(0.0f64..100.0, 2..50),
        shift in -50.0f64..50.0,
    ) {
        let shifted: Vec<f64> = sample.iter().map(|x| x + shift).collect();
        let a = compute_basic_estimate(&sample).unwrap();
        let b = compute_basic_estimate(&shifted).unwrap();

        prop_assert!((b.mean - a.mean - shift).abs() < 1e-9);
        prop_assert!(((b.interval_upper - b.interval_lower) - (a.interval_upper - a.interval_lower)).abs() < 1e-9);
    }
}

#[test]
fn test_concrete_scenario() {
    let result = compute_basic_estimate(&[70.0, 75.0, 80.0]).unwrap();
    let stats = compute_basic_statistics(&[70.0, 75.0, 80.0]).unwrap();

    assert_relative_eq!(result.mean, 75.0);
    assert_relative_eq!(result.variance, 25.0);
    assert_relative_eq!(result.standard_deviation, 5.0);
    assert_relative_eq!(stats.standard_error, 2.8868, epsilon = 1e-4);
    assert_relative_eq!(result.interval_lower, 69.34, epsilon = 1e-2);
    assert_relative_eq!(result.interval_upper, 80.66, epsilon = 1e-2);
}

#[test]
fn test_constant_sample_has_zero_width() {
    let result = compute_basic_estimate(&[42.0; 10]).unwrap();
    assert_eq!(result.variance, 0.0);
    assert_eq!(result.interval_lower, 42.0);
    assert_eq!(result.interval_upper, 42.0);
}

#[test]
fn test_width_shrinks_with_sample_size() {
    // Average over repeated draws so the comparison is about expectation
    let sizes = [10usize, 40, 160, 640];
    let repeats = 50u64;

    let mean_widths: Vec<f64> = sizes
        .iter()
        .map(|&n| {
            (0..repeats)
                .map(|r| {
                    let sample = normal_sample(n, 1_000 * n as u64 + r);
                    let result = compute_basic_estimate(&sample).unwrap();
                    result.interval_upper - result.interval_lower
                })
                .sum::<f64>()
                / repeats as f64
        })
        .collect();

    for pair in mean_widths.windows(2) {
        assert!(
            pair[1] < pair[0],
            "Interval width should shrink as n grows: {:?}",
            mean_widths
        );
    }

    // Quadrupling n roughly halves the width (SE ∝ 1/sqrt(n))
    let ratio = mean_widths[3] / mean_widths[2];
    assert!(ratio > 0.4 && ratio < 0.6, "Unexpected width ratio {ratio}");
}
