//! Clamped normal score generator
//!
//! Scores are drawn from N(true_mean, true_std²) and clamped into
//! `[min_score, max_score]`, so heavy clamping pulls the sample mean toward
//! the middle of the range.

use econoscope_core::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Default population mean of generated scores
pub const DEFAULT_TRUE_MEAN: f64 = 75.0;

/// Default population standard deviation of generated scores
pub const DEFAULT_TRUE_STD: f64 = 15.0;

/// Population a synthetic score sample is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreDistribution {
    pub true_mean: f64,
    pub true_std: f64,
    pub min_score: f64,
    pub max_score: f64,
}

impl Default for ScoreDistribution {
    fn default() -> Self {
        Self {
            true_mean: DEFAULT_TRUE_MEAN,
            true_std: DEFAULT_TRUE_STD,
            min_score: 0.0,
            max_score: 100.0,
        }
    }
}

impl ScoreDistribution {
    pub fn new(true_mean: f64, true_std: f64) -> Self {
        Self {
            true_mean,
            true_std,
            ..Self::default()
        }
    }

    pub fn with_bounds(mut self, min_score: f64, max_score: f64) -> Self {
        self.min_score = min_score;
        self.max_score = max_score;
        self
    }

    /// Accepts `true_mean` in [0, 100], `true_std` in [1, 50] and a
    /// non-empty clamp range
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.true_mean) {
            return Err(Error::out_of_range("true_mean", self.true_mean, 0.0, 100.0));
        }
        if !(1.0..=50.0).contains(&self.true_std) {
            return Err(Error::out_of_range("true_std", self.true_std, 1.0, 50.0));
        }
        if !(self.min_score.is_finite() && self.max_score.is_finite())
            || self.min_score > self.max_score
        {
            return Err(Error::InvalidParameter(format!(
                "score bounds [{}, {}] are not a finite range",
                self.min_score, self.max_score
            )));
        }
        Ok(())
    }

    fn normal(&self) -> Result<Normal<f64>> {
        // rand_distr accepts a negative std_dev and mirrors it
        if !(self.true_std.is_finite() && self.true_std > 0.0) {
            return Err(Error::Computation(format!(
                "score distribution: true_std must be finite and positive, got {}",
                self.true_std
            )));
        }
        Normal::new(self.true_mean, self.true_std)
            .map_err(|e| Error::Computation(format!("score distribution: {e}")))
    }
}

/// Draw `sample_size` clamped scores from `distribution`.
///
/// Fails with `Error::Computation` when `true_std` is not finite and
/// positive. The range checks of [`ScoreDistribution::validate`] are left
/// to the caller.
#[instrument(skip(distribution, rng), fields(true_mean = distribution.true_mean, true_std = distribution.true_std))]
pub fn generate_scores<R>(
    sample_size: usize,
    distribution: &ScoreDistribution,
    rng: &mut R,
) -> Result<Vec<f64>>
where
    R: Rng + ?Sized,
{
    let normal = distribution.normal()?;
    let (lo, hi) = (distribution.min_score, distribution.max_score);

    let mut clamped = 0usize;
    let scores: Vec<f64> = (0..sample_size)
        .map(|_| {
            let raw = normal.sample(rng);
            if raw < lo || raw > hi {
                clamped += 1;
            }
            raw.max(lo).min(hi)
        })
        .collect();

    debug!("Generated {} scores, {} clamped", sample_size, clamped);
    Ok(scores)
}

/// [`generate_scores`] with a generator seeded from `seed`, or from OS
/// entropy when `None`
pub fn generate_scores_seeded(
    sample_size: usize,
    distribution: &ScoreDistribution,
    seed: Option<u64>,
) -> Result<Vec<f64>> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_scores(sample_size, distribution, &mut rng)
}
