//! Common types for confidence intervals

use serde::{Deserialize, Serialize};
use std::fmt;

/// A confidence (or credible) interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate the interval was built around
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

/// Bayesian analogue of a confidence interval; same shape, different derivation
pub type CredibleInterval = ConfidenceInterval;

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{:.4}, {:.4}], estimate: {:.4}",
            self.confidence_level * 100.0,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

/// z critical values for the confidence levels the estimator recognises
const Z_TABLE: [(f64, f64); 3] = [(0.90, 1.645), (0.95, 1.96), (0.99, 2.576)];

/// Critical value used for any level missing from the table
pub const DEFAULT_Z: f64 = 1.96;

/// Confidence level of a two-sided interval.
///
/// Any value is accepted. Levels outside the z table (0.90, 0.95, 0.99)
/// are served with the 95% critical value rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level
    pub fn new(level: f64) -> Self {
        Self(level)
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Whether the level has its own entry in the z table
    pub fn is_tabulated(&self) -> bool {
        Z_TABLE.iter().any(|&(level, _)| level == self.0)
    }

    /// Normal critical value from the z table, 1.96 when not tabulated
    pub fn z_value(&self) -> f64 {
        Z_TABLE
            .iter()
            .find(|&&(level, _)| level == self.0)
            .map(|&(_, z)| z)
            .unwrap_or(DEFAULT_Z)
    }

    /// Common confidence levels
    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const NINETY_NINE: Self = Self(0.99);
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self::NINETY_FIVE
    }
}

impl From<f64> for ConfidenceLevel {
    fn from(level: f64) -> Self {
        Self::new(level)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}
