//! Likelihood and prior for the mean of normally distributed scores
//!
//! The observation noise `sigma` is fixed at the sample standard deviation;
//! only the mean is uncertain, so the posterior is one-dimensional.

use econoscope_core::math::{descriptive, distributions::normal};
use serde::{Deserialize, Serialize};

/// Default prior mean: the middle of the 0-100 score range
pub const DEFAULT_PRIOR_MEAN: f64 = 50.0;

/// Default prior standard deviation, wide enough to be near-uninformative
pub const DEFAULT_PRIOR_STD: f64 = 30.0;

/// Log-likelihood of `data` under i.i.d. N(mu, sigma²).
///
/// `-n/2 ln(2π) - n ln(sigma) - Σ(xᵢ - mu)² / (2 sigma²)`. Requires
/// `sigma > 0`.
#[inline]
pub fn log_likelihood(data: &[f64], mu: f64, sigma: f64) -> f64 {
    normal::joint_ln_pdf(data, mu, sigma)
}

/// Log-density of the N(prior_mean, prior_std²) prior at `mu`, without its
/// normalising constant (it cancels in every acceptance ratio).
#[inline]
pub fn log_prior(mu: f64, prior_mean: f64, prior_std: f64) -> f64 {
    normal::ln_kernel(mu, prior_mean, prior_std)
}

/// Normal prior over the mean parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalPrior {
    pub mean: f64,
    pub std: f64,
}

impl NormalPrior {
    pub fn new(mean: f64, std: f64) -> Self {
        Self { mean, std }
    }

    #[inline]
    pub fn log_density(&self, mu: f64) -> f64 {
        log_prior(mu, self.mean, self.std)
    }
}

impl Default for NormalPrior {
    fn default() -> Self {
        Self::new(DEFAULT_PRIOR_MEAN, DEFAULT_PRIOR_STD)
    }
}

/// Unnormalised log target density over a scalar parameter
pub trait LogDensity {
    fn log_density(&self, x: f64) -> f64;
}

impl<F> LogDensity for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn log_density(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Posterior over the mean of `data` with fixed observation noise
#[derive(Debug, Clone, Copy)]
pub struct NormalMeanModel<'a> {
    data: &'a [f64],
    sigma: f64,
    prior: NormalPrior,
}

impl<'a> NormalMeanModel<'a> {
    pub fn new(data: &'a [f64], sigma: f64, prior: NormalPrior) -> Self {
        Self { data, sigma, prior }
    }

    /// Model with `sigma` fixed at the Bessel-corrected sample standard
    /// deviation of `data`. Fewer than two observations give a NaN sigma.
    pub fn from_sample(data: &'a [f64], prior: NormalPrior) -> Self {
        let mean = descriptive::mean(data);
        let sigma = descriptive::bessel_variance(data, mean).sqrt();
        Self::new(data, sigma, prior)
    }

    pub fn data(&self) -> &'a [f64] {
        self.data
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn prior(&self) -> NormalPrior {
        self.prior
    }

    /// Sample mean of the data, the sampler's warm start
    pub fn sample_mean(&self) -> f64 {
        descriptive::mean(self.data)
    }

    #[inline]
    pub fn log_likelihood(&self, mu: f64) -> f64 {
        log_likelihood(self.data, mu, self.sigma)
    }

    #[inline]
    pub fn log_prior(&self, mu: f64) -> f64 {
        self.prior.log_density(mu)
    }

    /// Unnormalised log-posterior: likelihood plus prior
    #[inline]
    pub fn log_posterior(&self, mu: f64) -> f64 {
        self.log_likelihood(mu) + self.log_prior(mu)
    }
}

impl LogDensity for NormalMeanModel<'_> {
    #[inline]
    fn log_density(&self, mu: f64) -> f64 {
        self.log_posterior(mu)
    }
}
