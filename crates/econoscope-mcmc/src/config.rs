//! Configuration for a Metropolis-Hastings run

use crate::model::NormalPrior;
use econoscope_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Post-burn-in draws kept by default
pub const DEFAULT_ITERATIONS: usize = 1000;

/// Leading draws discarded by default
pub const DEFAULT_BURN_IN: usize = 200;

/// Standard deviation of the random-walk proposal
pub const DEFAULT_PROPOSAL_STD: f64 = 1.0;

/// Parameters of one sampler invocation.
///
/// `run_mcmc` trusts these values as given; [`SamplerConfig::validate`] is
/// for the layer that accepts them from a user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SamplerConfig {
    /// Draws kept after burn-in
    pub iterations: usize,
    /// Draws discarded before collection starts
    pub burn_in: usize,
    /// Standard deviation of the symmetric normal proposal
    pub proposal_std: f64,
    /// Seed for a reproducible chain; entropy-seeded when `None`
    pub seed: Option<u64>,
    /// Prior over the mean
    pub prior: NormalPrior,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            burn_in: DEFAULT_BURN_IN,
            proposal_std: DEFAULT_PROPOSAL_STD,
            seed: None,
            prior: NormalPrior::default(),
        }
    }
}

impl SamplerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_burn_in(mut self, burn_in: usize) -> Self {
        self.burn_in = burn_in;
        self
    }

    pub fn with_proposal_std(mut self, proposal_std: f64) -> Self {
        self.proposal_std = proposal_std;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_prior(mut self, prior: NormalPrior) -> Self {
        self.prior = prior;
        self
    }

    /// Total chain length including burn-in
    pub fn total_steps(&self) -> usize {
        self.iterations.saturating_add(self.burn_in)
    }

    /// Check the values a summarized run needs
    pub fn validate(&self) -> Result<()> {
        if !(self.proposal_std.is_finite() && self.proposal_std > 0.0) {
            return Err(Error::non_positive("proposal_std", self.proposal_std));
        }
        if !(self.prior.std.is_finite() && self.prior.std > 0.0) {
            return Err(Error::non_positive("prior std", self.prior.std));
        }
        if !self.prior.mean.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "prior mean must be finite, got {}",
                self.prior.mean
            )));
        }
        if self.iterations < 2 {
            return Err(Error::InvalidParameter(format!(
                "iterations must be at least 2 to summarize the posterior, got {}",
                self.iterations
            )));
        }
        Ok(())
    }
}
