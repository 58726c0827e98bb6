//! Function-style entry points for the closed-form estimator

use crate::NormalApproxCI;
use econoscope_core::{BasicStatistics, EstimationResult, MeanEstimator, Result};

/// Default confidence level of the basic estimate
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Mean, unbiased variance, standard deviation and standard error.
///
/// Fails with `Error::InsufficientData` for fewer than two observations.
pub fn compute_basic_statistics(sample: &[f64]) -> Result<BasicStatistics> {
    BasicStatistics::from_sample(sample)
}

/// Basic estimate with a 95% normal-approximation interval.
///
/// ```rust
/// use econoscope_confidence::compute_basic_estimate;
///
/// let result = compute_basic_estimate(&[70.0, 75.0, 80.0]).unwrap();
/// assert_eq!(result.mean, 75.0);
/// assert_eq!(result.variance, 25.0);
/// assert!((result.interval_lower - 69.34).abs() < 0.01);
/// ```
pub fn compute_basic_estimate(sample: &[f64]) -> Result<EstimationResult> {
    compute_basic_estimate_with_level(sample, DEFAULT_CONFIDENCE_LEVEL)
}

/// Basic estimate at a chosen confidence level.
///
/// Levels other than 0.90, 0.95 and 0.99 use the 95% critical value.
pub fn compute_basic_estimate_with_level(
    sample: &[f64],
    confidence_level: f64,
) -> Result<EstimationResult> {
    NormalApproxCI::new(confidence_level).estimate(sample)
}
