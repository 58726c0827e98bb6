//! Sampler plus summarizer in one call

use crate::config::SamplerConfig;
use crate::sampler::{rng_from_seed, MetropolisHastings};
use crate::summary::summarize_posterior;
use econoscope_core::math::descriptive;
use econoscope_core::{Error, EstimationResult, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Posterior estimate of the mean together with the draws behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McmcEstimate {
    /// Summary of the draws; `sample_size` counts observations, not draws
    pub result: EstimationResult,
    pub posterior_samples: Vec<f64>,
    pub acceptance_rate: f64,
}

/// Validate, sample and summarize.
///
/// Fails with `Error::InsufficientData` for fewer than two observations and
/// with `Error::InvalidParameter` when `config` does not validate or the
/// observations have zero spread.
#[instrument(skip(data, config), fields(n = data.len(), iterations = config.iterations, burn_in = config.burn_in))]
pub fn estimate_from_mcmc(data: &[f64], config: &SamplerConfig) -> Result<McmcEstimate> {
    Error::require_samples(2, data.len())?;
    config.validate()?;

    // Zero spread makes every log-density NaN and freezes the chain
    let sigma = descriptive::sample_std(data)?;
    if !(sigma.is_finite() && sigma > 0.0) {
        return Err(Error::non_positive("sample standard deviation", sigma));
    }

    let mut rng = rng_from_seed(config.seed);
    let run = MetropolisHastings::from_config(config).run(data, config.prior, &mut rng);

    let mut result = summarize_posterior(&run.samples)?;
    result.sample_size = data.len();

    if !run.is_well_mixed() {
        debug!(
            "Acceptance rate {:.3} is outside 0.2-0.5; proposal_std {} may be badly scaled",
            run.acceptance_rate, config.proposal_std
        );
    }

    Ok(McmcEstimate {
        result,
        posterior_samples: run.samples,
        acceptance_rate: run.acceptance_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run_mcmc;

    #[test]
    fn test_reports_observation_count() {
        let data = [70.0, 75.0, 80.0];
        let estimate = estimate_from_mcmc(&data, &SamplerConfig::default().with_seed(42)).unwrap();

        assert_eq!(estimate.result.sample_size, 3);
        assert_eq!(estimate.posterior_samples.len(), 1000);
        assert!(estimate.result.interval_lower <= estimate.result.mean);
        assert!(estimate.result.mean <= estimate.result.interval_upper);
    }

    #[test]
    fn test_matches_manual_pipeline() {
        let data = [62.0, 71.0, 80.5, 77.0, 68.0];
        let config = SamplerConfig::default().with_seed(9).with_iterations(400).with_burn_in(50);
        let estimate = estimate_from_mcmc(&data, &config).unwrap();

        let run = run_mcmc(&data, 400, 50, 1.0, Some(9));
        let summary = summarize_posterior(&run.samples).unwrap();

        assert_eq!(estimate.posterior_samples, run.samples);
        assert_eq!(estimate.acceptance_rate, run.acceptance_rate);
        assert_eq!(estimate.result.mean, summary.mean);
        assert_eq!(estimate.result.interval_upper, summary.interval_upper);
    }

    #[test]
    fn test_rejects_small_data_and_bad_config() {
        assert!(matches!(
            estimate_from_mcmc(&[5.0], &SamplerConfig::default()),
            Err(Error::InsufficientData { expected: 2, actual: 1 })
        ));
        assert!(matches!(
            estimate_from_mcmc(&[1.0, 2.0], &SamplerConfig::default().with_proposal_std(-1.0)),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_identical_observations() {
        let result = estimate_from_mcmc(&[5.0, 5.0], &SamplerConfig::default().with_seed(1));
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
        assert!(estimate_from_mcmc(&[75.0; 10], &SamplerConfig::default()).is_err());
        assert!(estimate_from_mcmc(&[5.0, 5.5], &SamplerConfig::default().with_seed(1)).is_ok());
    }

    #[test]
    fn test_serializes_for_the_wire() {
        let estimate =
            estimate_from_mcmc(&[1.0, 2.0, 3.0], &SamplerConfig::default().with_seed(1).with_iterations(10))
                .unwrap();
        let json = serde_json::to_value(&estimate).unwrap();
        assert_eq!(json["posteriorSamples"].as_array().unwrap().len(), 10);
        assert!(json["acceptanceRate"].is_number());
        assert_eq!(json["result"]["sampleSize"], 3);
    }
}
