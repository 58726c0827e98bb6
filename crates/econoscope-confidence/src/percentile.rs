//! Empirical percentile intervals over a set of draws
//!
//! Used for credible intervals: the bounds are order statistics of the
//! posterior sample picked by nearest rank, with no interpolation.

use crate::{ConfidenceInterval, IntervalEstimator};
use econoscope_core::{math::descriptive, Error, Result};

/// Nearest-rank percentile interval.
///
/// For `m` sorted draws the bounds are the elements at
/// `floor(lower_quantile · m)` and `floor(upper_quantile · m)`. For small
/// `m` this is biased outward (e.g. `m = 2` gives `[x₀, x₁]`), which is
/// the intended behaviour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileInterval {
    lower_quantile: f64,
    upper_quantile: f64,
    confidence_level: f64,
}

impl PercentileInterval {
    /// Central interval covering `confidence_level` of the draws
    pub fn new(confidence_level: f64) -> Self {
        let tail = (1.0 - confidence_level) / 2.0;
        Self {
            lower_quantile: tail,
            upper_quantile: 1.0 - tail,
            confidence_level,
        }
    }

    /// The 2.5th / 97.5th percentile interval
    pub fn credible_95() -> Self {
        // Literals, not (1 - 0.95) / 2: floor(q · m) must match 0.025 m exactly
        Self {
            lower_quantile: 0.025,
            upper_quantile: 0.975,
            confidence_level: 0.95,
        }
    }

    pub fn lower_quantile(&self) -> f64 {
        self.lower_quantile
    }

    pub fn upper_quantile(&self) -> f64 {
        self.upper_quantile
    }

    /// Nearest-rank index of quantile `q` in a sorted slice of length `m`
    #[inline]
    pub fn rank(q: f64, m: usize) -> usize {
        ((q * m as f64) as usize).min(m.saturating_sub(1))
    }

    /// Bounds from already-sorted draws
    pub fn bounds_sorted(&self, sorted: &[f64]) -> Result<(f64, f64)> {
        Error::require_samples(1, sorted.len())?;
        let m = sorted.len();
        Ok((
            sorted[Self::rank(self.lower_quantile, m)],
            sorted[Self::rank(self.upper_quantile, m)],
        ))
    }
}

impl Default for PercentileInterval {
    fn default() -> Self {
        Self::credible_95()
    }
}

/// Sort a copy of the draws in ascending order
pub fn sorted_copy(sample: &[f64]) -> Vec<f64> {
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

impl IntervalEstimator for PercentileInterval {
    fn interval(&self, sample: &[f64]) -> Result<ConfidenceInterval> {
        self.interval_sorted(&sorted_copy(sample))
    }

    fn interval_sorted(&self, sorted_sample: &[f64]) -> Result<ConfidenceInterval> {
        let (lower, upper) = self.bounds_sorted(sorted_sample)?;
        Ok(ConfidenceInterval::new(
            lower,
            upper,
            descriptive::mean(sorted_sample),
            self.confidence_level,
        ))
    }

    fn confidence_level(&self) -> f64 {
        self.confidence_level
    }
}
