//! Result types shared by the closed-form and posterior estimators

use crate::math::descriptive;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptive statistics of a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicStatistics {
    /// Arithmetic mean
    pub mean: f64,
    /// Unbiased variance (n - 1 denominator)
    pub variance: f64,
    /// Square root of `variance`
    pub standard_deviation: f64,
    /// `standard_deviation / sqrt(sample_size)`
    pub standard_error: f64,
    /// Number of observations, at least 2
    pub sample_size: usize,
}

impl BasicStatistics {
    /// Compute statistics from a sample of at least two observations
    pub fn from_sample(sample: &[f64]) -> Result<Self> {
        let variance = descriptive::sample_variance(sample)?;
        let standard_deviation = variance.sqrt();
        Ok(Self {
            mean: descriptive::mean(sample),
            variance,
            standard_deviation,
            standard_error: descriptive::standard_error(standard_deviation, sample.len()),
            sample_size: sample.len(),
        })
    }
}

/// A point estimate of the mean with its spread and a two-sided interval.
///
/// Produced either by the normal-approximation estimator (confidence
/// interval) or by summarizing a posterior sample (credible interval).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    pub mean: f64,
    pub variance: f64,
    pub standard_deviation: f64,
    pub interval_lower: f64,
    pub interval_upper: f64,
    pub sample_size: usize,
}

impl EstimationResult {
    /// Width of the interval
    pub fn interval_width(&self) -> f64 {
        self.interval_upper - self.interval_lower
    }

    /// Check if a value lies inside the interval (inclusive)
    pub fn interval_contains(&self, value: f64) -> bool {
        value >= self.interval_lower && value <= self.interval_upper
    }
}

impl fmt::Display for EstimationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean {:.4} (sd {:.4}, n = {}), interval [{:.4}, {:.4}]",
            self.mean,
            self.standard_deviation,
            self.sample_size,
            self.interval_lower,
            self.interval_upper
        )
    }
}
