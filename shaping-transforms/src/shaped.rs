//! Calibrated shaping curves
//!
//! Every transform here is parameterized by a `bad_value` and a
//! `good_value` expressed in the physical units of the error metric (e.g.
//! "an error of 0.2 m is bad, 0 m is good"). Internally the error is
//! rescaled from that interval onto the natural domain of the shaping
//! curve, so physical calibration stays decoupled from curve shape.
//!
//! The default sharpness constants place the calibration endpoints at
//! canonical landmarks: `logistic(±ln 19)` is 0.05/0.95 and
//! `exp(ln 0.1)` is 0.1.
//!
//! Constructing any of these with `bad_value == good_value` makes the
//! internal rescale divide by zero; the constructors do not guard this,
//! but [`crate::TransformConfig::build`] rejects it up front.

use serde::{Deserialize, Serialize};

use shaping_core::{clip_unit, logistic, rescale, RewardTransform};

pub(crate) fn default_soft_plus_sharpness() -> f64 {
    -(19.0f64).ln()
}

pub(crate) fn default_neg_exp_sharpness() -> f64 {
    -(0.1f64).ln()
}

pub(crate) fn default_low_sharpness() -> f64 {
    -(19.0f64).ln()
}

pub(crate) fn default_high_sharpness() -> f64 {
    (19.0f64).ln()
}

/// Linear ramp from 0 at `bad_value` to 1 at `good_value`, clipped to [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearClippedReward {
    /// Error magnitude that maps to a reward of 0
    pub bad_value: f64,
    /// Error magnitude that maps to a reward of 1
    #[serde(default)]
    pub good_value: f64,
}

impl LinearClippedReward {
    /// Create a ramp between the two calibration endpoints
    #[must_use]
    pub fn new(bad_value: f64, good_value: f64) -> Self {
        Self {
            bad_value,
            good_value,
        }
    }
}

impl RewardTransform for LinearClippedReward {
    fn apply(&self, errors: &[f64]) -> Vec<f64> {
        errors
            .iter()
            .map(|&error| clip_unit(rescale(error, self.bad_value, self.good_value, 0.0, 1.0)))
            .collect()
    }
}

/// Smooth curve from ~0.1 at `bad_value` to 1 at `good_value`, clipped to [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoftPlusReward {
    /// Error magnitude that maps to a reward of ~0.1
    pub bad_value: f64,
    /// Error magnitude that maps to a reward of 1
    #[serde(default)]
    pub good_value: f64,
    /// Logistic-domain coordinate the bad endpoint rescales onto
    #[serde(default = "default_soft_plus_sharpness")]
    pub sharpness: f64,
}

impl SoftPlusReward {
    /// Create a curve with the default sharpness (`-ln 19`)
    #[must_use]
    pub fn new(bad_value: f64, good_value: f64) -> Self {
        Self::with_sharpness(bad_value, good_value, default_soft_plus_sharpness())
    }

    /// Create a curve with an explicit sharpness
    #[must_use]
    pub fn with_sharpness(bad_value: f64, good_value: f64, sharpness: f64) -> Self {
        Self {
            bad_value,
            good_value,
            sharpness,
        }
    }
}

impl RewardTransform for SoftPlusReward {
    fn apply(&self, errors: &[f64]) -> Vec<f64> {
        errors
            .iter()
            .map(|&error| {
                let scaled = rescale(error, self.bad_value, self.good_value, self.sharpness, 0.0);
                clip_unit(2.0 * logistic(scaled))
            })
            .collect()
    }
}

/// Exponential decay from ~0.1 at `bad_value` to 1 at `good_value`, clipped to [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NegExpReward {
    /// Error magnitude that maps to a reward of ~0.1
    pub bad_value: f64,
    /// Error magnitude that maps to a reward of 1
    #[serde(default)]
    pub good_value: f64,
    /// Exponent-domain coordinate the bad endpoint rescales onto
    #[serde(default = "default_neg_exp_sharpness")]
    pub sharpness: f64,
}

impl NegExpReward {
    /// Create a curve with the default sharpness (`-ln 0.1`)
    #[must_use]
    pub fn new(bad_value: f64, good_value: f64) -> Self {
        Self::with_sharpness(bad_value, good_value, default_neg_exp_sharpness())
    }

    /// Create a curve with an explicit sharpness
    #[must_use]
    pub fn with_sharpness(bad_value: f64, good_value: f64, sharpness: f64) -> Self {
        Self {
            bad_value,
            good_value,
            sharpness,
        }
    }
}

impl RewardTransform for NegExpReward {
    fn apply(&self, errors: &[f64]) -> Vec<f64> {
        errors
            .iter()
            .map(|&error| {
                let scaled = rescale(error, self.bad_value, self.good_value, self.sharpness, 0.0);
                clip_unit((-scaled).exp())
            })
            .collect()
    }
}

/// S-curve from ~0.05 at `bad_value` to ~0.95 at `good_value`
///
/// Unlike the clipped curves the output is left as the logistic produced
/// it; the logistic's own range keeps it inside (0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SigmoidReward {
    /// Error magnitude that maps to a reward of ~0.05
    pub bad_value: f64,
    /// Error magnitude that maps to a reward of ~0.95
    pub good_value: f64,
    /// Logistic-domain coordinate the bad endpoint rescales onto
    #[serde(default = "default_low_sharpness")]
    pub low_sharpness: f64,
    /// Logistic-domain coordinate the good endpoint rescales onto
    #[serde(default = "default_high_sharpness")]
    pub high_sharpness: f64,
}

impl SigmoidReward {
    /// Create an S-curve with the default sharpnesses (`±ln 19`)
    #[must_use]
    pub fn new(bad_value: f64, good_value: f64) -> Self {
        Self::with_sharpness(
            bad_value,
            good_value,
            default_low_sharpness(),
            default_high_sharpness(),
        )
    }

    /// Create an S-curve with explicit endpoint sharpnesses
    #[must_use]
    pub fn with_sharpness(
        bad_value: f64,
        good_value: f64,
        low_sharpness: f64,
        high_sharpness: f64,
    ) -> Self {
        Self {
            bad_value,
            good_value,
            low_sharpness,
            high_sharpness,
        }
    }
}

impl RewardTransform for SigmoidReward {
    fn apply(&self, errors: &[f64]) -> Vec<f64> {
        errors
            .iter()
            .map(|&error| {
                logistic(rescale(
                    error,
                    self.bad_value,
                    self.good_value,
                    self.low_sharpness,
                    self.high_sharpness,
                ))
            })
            .collect()
    }
}
