//! Direct value transforms
//!
//! These map each error through a fixed scalar function without any
//! bad/good calibration. Outputs are unbounded except for [`EqualReward`].

use serde::{Deserialize, Serialize};

use shaping_core::RewardTransform;

pub(crate) fn default_log_offset() -> f64 {
    1e-4
}

/// Rewards 1 for an exactly-zero error, a fixed value otherwise
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EqualReward {
    /// Reward paid for any nonzero error
    #[serde(default)]
    pub nonzero_value: f64,
}

impl EqualReward {
    /// Create a transform paying `nonzero_value` for nonzero errors
    #[must_use]
    pub fn new(nonzero_value: f64) -> Self {
        Self { nonzero_value }
    }
}

impl RewardTransform for EqualReward {
    fn apply(&self, errors: &[f64]) -> Vec<f64> {
        errors
            .iter()
            .map(|&error| {
                if error.is_nan() {
                    error
                } else if error == 0.0 {
                    1.0
                } else {
                    self.nonzero_value
                }
            })
            .collect()
    }
}

/// Rewards the absolute value of the error
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AbsoluteReward;

impl RewardTransform for AbsoluteReward {
    fn apply(&self, errors: &[f64]) -> Vec<f64> {
        errors.iter().map(|&error| error.abs()).collect()
    }
}

/// Rewards the negated error
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NegatedReward;

impl RewardTransform for NegatedReward {
    fn apply(&self, errors: &[f64]) -> Vec<f64> {
        errors.iter().map(|&error| -error).collect()
    }
}

/// Raises the error to a fixed power
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerReward {
    /// Exponent applied to each error
    pub exponent: f64,
}

impl PowerReward {
    /// Create a transform raising errors to `exponent`
    #[must_use]
    pub fn new(exponent: f64) -> Self {
        Self { exponent }
    }
}

impl RewardTransform for PowerReward {
    fn apply(&self, errors: &[f64]) -> Vec<f64> {
        errors
            .iter()
            .map(|&error| error.powf(self.exponent))
            .collect()
    }
}

/// Natural log of the error plus a small offset
///
/// Errors at or below `-offset` produce NaN or -infinity per IEEE `ln`
/// semantics; the offset only keeps an exactly-zero error finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogReward {
    /// Offset added to the error before taking the log
    #[serde(default = "default_log_offset")]
    pub offset: f64,
}

impl LogReward {
    /// Create a transform with an explicit offset
    #[must_use]
    pub fn new(offset: f64) -> Self {
        Self { offset }
    }
}

impl Default for LogReward {
    fn default() -> Self {
        Self {
            offset: default_log_offset(),
        }
    }
}

impl RewardTransform for LogReward {
    fn apply(&self, errors: &[f64]) -> Vec<f64> {
        errors
            .iter()
            .map(|&error| (error + self.offset).ln())
            .collect()
    }
}
