//! Core traits for mean estimators

use crate::{EstimationResult, Result};

/// An estimator that reduces a sample to a mean with an uncertainty interval.
///
/// Implemented by the normal-approximation estimator, which reads the
/// sample as observations, and by the posterior summarizer, which reads it
/// as MCMC draws. Both fail with `Error::InsufficientData` below two values.
pub trait MeanEstimator {
    /// Estimate the mean and its interval from the given sample
    fn estimate(&self, sample: &[f64]) -> Result<EstimationResult>;

    /// Human-readable name of the estimator
    fn name(&self) -> &str;

    /// Smallest sample the estimator accepts
    fn min_samples(&self) -> usize {
        2
    }
}

impl<E: MeanEstimator + ?Sized> MeanEstimator for &E {
    fn estimate(&self, sample: &[f64]) -> Result<EstimationResult> {
        (**self).estimate(sample)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn min_samples(&self) -> usize {
        (**self).min_samples()
    }
}
