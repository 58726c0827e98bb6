//! Core trait for interval estimation

use crate::types::ConfidenceInterval;
use econoscope_core::Result;

/// Builds a two-sided interval around the mean of a sample.
///
/// The normal approximation treats the sample as observations; the
/// percentile interval treats it as draws from a posterior.
pub trait IntervalEstimator {
    /// Calculate the interval for the given sample
    fn interval(&self, sample: &[f64]) -> Result<ConfidenceInterval>;

    /// Calculate the interval from pre-sorted data
    fn interval_sorted(&self, sorted_sample: &[f64]) -> Result<ConfidenceInterval> {
        self.interval(sorted_sample)
    }

    /// Get the confidence level
    fn confidence_level(&self) -> f64;
}
