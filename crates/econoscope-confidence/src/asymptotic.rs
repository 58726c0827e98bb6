//! Normal-approximation confidence intervals for the mean

use crate::{ConfidenceInterval, ConfidenceLevel, IntervalEstimator, DEFAULT_Z};
use econoscope_core::{BasicStatistics, Error, EstimationResult, MeanEstimator, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::{debug, instrument};

/// Source of the critical value multiplying the standard error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CriticalValue {
    /// Fixed z table (0.90, 0.95, 0.99), 1.96 for anything else
    #[default]
    ZTable,
    /// Exact Student-t quantile with n - 1 degrees of freedom
    StudentsT,
}

/// Closed-form estimator: `mean ± critical · standard_error`.
///
/// The default critical value comes from the z table even for small
/// samples, where a Student-t quantile would be the accurate choice.
/// Use [`NormalApproxCI::students_t`] to opt into the exact quantile.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalApproxCI {
    level: ConfidenceLevel,
    critical: CriticalValue,
}

impl NormalApproxCI {
    /// Create an estimator using the z table
    pub fn new(level: impl Into<ConfidenceLevel>) -> Self {
        Self {
            level: level.into(),
            critical: CriticalValue::ZTable,
        }
    }

    /// Create an estimator using the Student-t quantile
    pub fn students_t(level: impl Into<ConfidenceLevel>) -> Self {
        Self {
            level: level.into(),
            critical: CriticalValue::StudentsT,
        }
    }

    pub fn critical(&self) -> CriticalValue {
        self.critical
    }

    /// Critical value for a sample of `sample_size` observations
    pub fn critical_value(&self, sample_size: usize) -> Result<f64> {
        match self.critical {
            CriticalValue::ZTable => {
                if !self.level.is_tabulated() {
                    debug!(
                        "Confidence level {} has no z table entry, using {}",
                        self.level, DEFAULT_Z
                    );
                }
                Ok(self.level.z_value())
            }
            CriticalValue::StudentsT => {
                Error::require_samples(2, sample_size)?;
                let level = self.level.value();
                if !(level > 0.0 && level < 1.0) {
                    return Err(Error::out_of_range("confidence_level", level, 0.0, 1.0));
                }
                let df = (sample_size - 1) as f64;
                let t_dist = StudentsT::new(0.0, 1.0, df).map_err(|e| {
                    Error::Computation(format!("Failed to create t-distribution: {}", e))
                })?;
                Ok(t_dist.inverse_cdf(1.0 - self.level.tail_probability()))
            }
        }
    }

    /// Interval around precomputed statistics
    pub fn interval_from_stats(&self, stats: &BasicStatistics) -> Result<ConfidenceInterval> {
        let critical_value = self.critical_value(stats.sample_size)?;
        let margin = critical_value * stats.standard_error;
        Ok(ConfidenceInterval::new(
            stats.mean - margin,
            stats.mean + margin,
            stats.mean,
            self.level.value(),
        ))
    }
}

/// `mean ± z(level) · standard_error` with the z-table fallback to 1.96
pub fn z_interval(mean: f64, standard_error: f64, confidence_level: f64) -> ConfidenceInterval {
    let z = ConfidenceLevel::new(confidence_level).z_value();
    let margin = z * standard_error;
    ConfidenceInterval::new(mean - margin, mean + margin, mean, confidence_level)
}

impl IntervalEstimator for NormalApproxCI {
    fn interval(&self, sample: &[f64]) -> Result<ConfidenceInterval> {
        let stats = BasicStatistics::from_sample(sample)?;
        self.interval_from_stats(&stats)
    }

    fn confidence_level(&self) -> f64 {
        self.level.value()
    }
}

impl MeanEstimator for NormalApproxCI {
    #[instrument(skip(self, sample), fields(n = sample.len(), level = self.level.value()))]
    fn estimate(&self, sample: &[f64]) -> Result<EstimationResult> {
        let stats = BasicStatistics::from_sample(sample)?;
        let ci = self.interval_from_stats(&stats)?;

        debug!(
            "Normal approximation: mean {:.4}, se {:.4}, interval [{:.4}, {:.4}]",
            stats.mean, stats.standard_error, ci.lower, ci.upper
        );

        Ok(EstimationResult {
            mean: stats.mean,
            variance: stats.variance,
            standard_deviation: stats.standard_deviation,
            interval_lower: ci.lower,
            interval_upper: ci.upper,
            sample_size: stats.sample_size,
        })
    }

    fn name(&self) -> &str {
        match self.critical {
            CriticalValue::ZTable => "Normal approximation",
            CriticalValue::StudentsT => "Student-t",
        }
    }
}
