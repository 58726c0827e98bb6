//! End-to-end checks that both estimators agree and tighten with more data

mod common;

use anyhow::Result;
use approx::assert_relative_eq;
use econoscope::{
    compare_sample_sizes, compute_basic_estimate, estimate_from_mcmc, run_mcmc,
    summarize_posterior, Error, SamplerConfig, ScoreDistribution,
};

#[test]
fn basic_and_posterior_agree_on_the_mean() -> Result<()> {
    common::init_tracing();

    let scores = common::class_scores(100, 7);
    let basic = compute_basic_estimate(&scores)?;
    let posterior = estimate_from_mcmc(&scores, &SamplerConfig::default().with_seed(7).with_iterations(5_000))?;

    // With n = 100 the wide prior barely matters
    let se = basic.standard_deviation / 10.0;
    assert!((posterior.result.mean - basic.mean).abs() < se, "{} vs {}", posterior.result.mean, basic.mean);
    assert_eq!(posterior.result.sample_size, 100);
    assert!(posterior.result.interval_contains(basic.mean));
    Ok(())
}

#[test]
fn credible_interval_narrows_with_more_data() -> Result<()> {
    common::init_tracing();

    let config = SamplerConfig::default().with_seed(11).with_iterations(4_000).with_proposal_std(0.5);
    let small = estimate_from_mcmc(&common::class_scores(25, 1), &config)?;
    let large = estimate_from_mcmc(&common::class_scores(400, 2), &config)?;

    assert!(large.result.interval_width() < small.result.interval_width());
    Ok(())
}

#[test]
fn confidence_interval_narrows_across_the_default_ladder() -> Result<()> {
    common::init_tracing();

    let rows = compare_sample_sizes(&[10, 30, 100, 300, 1000], &ScoreDistribution::default())?;
    let widths: Vec<f64> = rows.iter().map(|r| r.estimation.interval_width()).collect();

    // Every step of the ladder at least doubles n, so the overall trend holds
    assert!(widths[4] < widths[2] && widths[2] < widths[0], "{widths:?}");
    Ok(())
}

#[test]
fn reference_scenario() -> Result<()> {
    let basic = compute_basic_estimate(&[70.0, 75.0, 80.0])?;
    assert_eq!(basic.mean, 75.0);
    assert_eq!(basic.variance, 25.0);
    assert_relative_eq!(basic.interval_lower, 75.0 - 1.96 * 5.0 / 3f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(basic.interval_upper, 75.0 + 1.96 * 5.0 / 3f64.sqrt(), epsilon = 1e-12);

    let run = run_mcmc(&[70.0, 75.0, 80.0], 1000, 200, 1.0, Some(42));
    let summary = summarize_posterior(&run.samples)?;
    assert_eq!(summary.sample_size, 1000);
    assert!(summary.interval_lower <= summary.interval_upper);
    Ok(())
}

#[test]
fn insufficient_data_is_reported_everywhere() {
    let expected = Error::InsufficientData { expected: 2, actual: 1 };
    assert_eq!(compute_basic_estimate(&[1.0]).unwrap_err(), expected);
    assert_eq!(summarize_posterior(&[1.0]).unwrap_err(), expected);
    assert_eq!(estimate_from_mcmc(&[1.0], &SamplerConfig::default()).unwrap_err(), expected);
    assert!(expected.is_insufficient_data());
}

#[test]
fn results_serialize_to_camel_case_json() -> Result<()> {
    let estimate = estimate_from_mcmc(&[70.0, 75.0, 80.0], &SamplerConfig::default().with_seed(3))?;
    let json = serde_json::to_string(&estimate)?;
    assert!(json.contains("\"posteriorSamples\""));
    assert!(json.contains("\"intervalUpper\""));

    let back: econoscope::McmcEstimate = serde_json::from_str(&json)?;
    assert_eq!(back.result.sample_size, 3);
    Ok(())
}
