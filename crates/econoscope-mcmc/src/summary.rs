//! Posterior summaries of a chain's retained draws

use econoscope_confidence::{sorted_copy, PercentileInterval};
use econoscope_core::{BasicStatistics, Error, EstimationResult, MeanEstimator, Result};
use tracing::{debug, instrument};

/// Reduces posterior draws to mean, spread and a percentile credible interval.
///
/// Variance uses the m - 1 denominator. The default interval is the
/// nearest-rank 2.5th / 97.5th percentile pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PosteriorSummarizer {
    interval: PercentileInterval,
}

impl PosteriorSummarizer {
    pub fn new(interval: PercentileInterval) -> Self {
        Self { interval }
    }
}

impl MeanEstimator for PosteriorSummarizer {
    #[instrument(skip(self, samples), fields(m = samples.len()))]
    fn estimate(&self, samples: &[f64]) -> Result<EstimationResult> {
        Error::require_samples(2, samples.len())?;

        let sorted = sorted_copy(samples);
        let (lower, upper) = self.interval.bounds_sorted(&sorted)?;

        // A chain that never moved: report the exact value and zero spread
        // rather than rounding noise from summing m copies.
        let (mean, variance) = if sorted[0] == sorted[sorted.len() - 1] {
            (sorted[0], 0.0)
        } else {
            let stats = BasicStatistics::from_sample(samples)?;
            (stats.mean, stats.variance)
        };

        debug!(
            "Posterior summary: mean {:.4}, sd {:.4}, credible [{:.4}, {:.4}]",
            mean,
            variance.sqrt(),
            lower,
            upper
        );

        Ok(EstimationResult {
            mean,
            variance,
            standard_deviation: variance.sqrt(),
            interval_lower: lower,
            interval_upper: upper,
            sample_size: samples.len(),
        })
    }

    fn name(&self) -> &str {
        "Posterior percentile summary"
    }
}

/// Summarize posterior draws with a 95% nearest-rank credible interval.
///
/// `sample_size` in the result is the number of draws. Fails with
/// `Error::InsufficientData` for fewer than two draws.
pub fn summarize_posterior(samples: &[f64]) -> Result<EstimationResult> {
    PosteriorSummarizer::default().estimate(samples)
}
