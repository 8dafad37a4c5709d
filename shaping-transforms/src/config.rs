//! Declarative transform configuration
//!
//! A [`TransformConfig`] is the serializable description of one transform:
//! the variant name plus its constructor parameters, with the same
//! defaults the constructors use. Training setups carry these in their
//! experiment files and call [`TransformConfig::build`] to obtain the
//! transform itself.

use serde::{Deserialize, Serialize};

use shaping_core::{Result, RewardTransform, ShapingError};

use crate::basic::{AbsoluteReward, EqualReward, LogReward, NegatedReward, PowerReward};
use crate::shaped::{LinearClippedReward, NegExpReward, SigmoidReward, SoftPlusReward};

/// Configuration for a single reward transform
///
/// Serialized with an internal `kind` tag, e.g.
/// `{"kind": "soft_plus", "bad_value": 0.2}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformConfig {
    /// 1 for zero error, a fixed value otherwise
    Equal(EqualReward),
    /// Absolute value of the error
    Absolute,
    /// Negated error
    Negated,
    /// Error raised to a fixed power
    Power(PowerReward),
    /// Natural log of the error plus an offset
    Log(LogReward),
    /// Linear ramp between bad and good, clipped to [0, 1]
    LinearClipped(LinearClippedReward),
    /// Smooth curve from ~0.1 at bad to 1 at good
    SoftPlus(SoftPlusReward),
    /// Exponential decay from ~0.1 at bad to 1 at good
    NegExp(NegExpReward),
    /// S-curve from ~0.05 at bad to ~0.95 at good
    Sigmoid(SigmoidReward),
}

impl TransformConfig {
    /// The `kind` tag this configuration serializes under
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Equal(_) => "equal",
            Self::Absolute => "absolute",
            Self::Negated => "negated",
            Self::Power(_) => "power",
            Self::Log(_) => "log",
            Self::LinearClipped(_) => "linear_clipped",
            Self::SoftPlus(_) => "soft_plus",
            Self::NegExp(_) => "neg_exp",
            Self::Sigmoid(_) => "sigmoid",
        }
    }

    /// Parse a configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the configuration as a JSON document
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Build the configured transform
    ///
    /// Calibrated variants are rejected up front when their endpoints
    /// coincide, since the transform would otherwise divide by zero on
    /// every application.
    pub fn build(&self) -> Result<Box<dyn RewardTransform>> {
        self.validate()?;
        tracing::debug!(kind = self.kind(), "building reward transform");
        Ok(match *self {
            Self::Equal(t) => Box::new(t),
            Self::Absolute => Box::new(AbsoluteReward),
            Self::Negated => Box::new(NegatedReward),
            Self::Power(t) => Box::new(t),
            Self::Log(t) => Box::new(t),
            Self::LinearClipped(t) => Box::new(t),
            Self::SoftPlus(t) => Box::new(t),
            Self::NegExp(t) => Box::new(t),
            Self::Sigmoid(t) => Box::new(t),
        })
    }

    fn validate(&self) -> Result<()> {
        let calibration = match *self {
            Self::LinearClipped(t) => Some((t.bad_value, t.good_value)),
            Self::SoftPlus(t) => Some((t.bad_value, t.good_value)),
            Self::NegExp(t) => Some((t.bad_value, t.good_value)),
            Self::Sigmoid(t) => Some((t.bad_value, t.good_value)),
            _ => None,
        };
        if let Some((bad, good)) = calibration {
            if bad == good {
                return Err(ShapingError::DegenerateInterval { value: bad });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn all_configs() -> Vec<TransformConfig> {
        vec![
            TransformConfig::Equal(EqualReward::default()),
            TransformConfig::Absolute,
            TransformConfig::Negated,
            TransformConfig::Power(PowerReward::new(2.0)),
            TransformConfig::Log(LogReward::default()),
            TransformConfig::LinearClipped(LinearClippedReward::new(1.0, 0.0)),
            TransformConfig::SoftPlus(SoftPlusReward::new(1.0, 0.0)),
            TransformConfig::NegExp(NegExpReward::new(1.0, 0.0)),
            TransformConfig::Sigmoid(SigmoidReward::new(1.0, 0.0)),
        ]
    }

    #[test]
    fn omitted_fields_fall_back_to_the_reference_defaults() {
        let config = TransformConfig::from_json(r#"{"kind": "soft_plus", "bad_value": 0.5}"#)
            .expect("valid config");
        let TransformConfig::SoftPlus(t) = config else {
            panic!("wrong variant");
        };
        assert_eq!(t.bad_value, 0.5);
        assert_eq!(t.good_value, 0.0);
        assert_eq!(t.sharpness, -(19.0f64).ln());

        let config = TransformConfig::from_json(r#"{"kind": "sigmoid", "bad_value": 1.0, "good_value": 0.0}"#)
            .expect("valid config");
        let TransformConfig::Sigmoid(t) = config else {
            panic!("wrong variant");
        };
        assert_eq!(t.low_sharpness, -(19.0f64).ln());
        assert_eq!(t.high_sharpness, (19.0f64).ln());

        let config =
            TransformConfig::from_json(r#"{"kind": "log"}"#).expect("valid config");
        let TransformConfig::Log(t) = config else {
            panic!("wrong variant");
        };
        assert_eq!(t.offset, 1e-4);
    }

    #[test]
    fn json_round_trip_preserves_every_config() {
        for config in all_configs() {
            let json = config.to_json().expect("serializable");
            let parsed = TransformConfig::from_json(&json).expect("parseable");
            assert_eq!(parsed, config);
        }
    }

    #[test]
    fn unknown_kind_is_a_serialization_error() {
        let result = TransformConfig::from_json(r#"{"kind": "cosine", "bad_value": 1.0}"#);
        assert!(matches!(result, Err(ShapingError::Serialization(_))));
    }

    #[test]
    fn build_rejects_degenerate_calibration_intervals() {
        let degenerate = [
            TransformConfig::LinearClipped(LinearClippedReward::new(0.5, 0.5)),
            TransformConfig::SoftPlus(SoftPlusReward::new(0.5, 0.5)),
            TransformConfig::NegExp(NegExpReward::new(0.5, 0.5)),
            TransformConfig::Sigmoid(SigmoidReward::new(0.5, 0.5)),
        ];
        for config in degenerate {
            let result = config.build();
            assert!(
                matches!(result, Err(ShapingError::DegenerateInterval { value }) if value == 0.5),
                "{} should be rejected",
                config.kind()
            );
        }
    }

    #[test]
    fn build_accepts_every_well_formed_config() {
        for config in all_configs() {
            let transform = config.build().expect("well formed");
            assert_eq!(transform.apply(&[0.0, 0.5]).len(), 2);
        }
    }

    #[test]
    fn built_transform_matches_direct_construction() {
        let errors = [0.9, 0.5, 0.0, -0.3, 2.0];
        let built = TransformConfig::Sigmoid(SigmoidReward::new(1.0, 0.0))
            .build()
            .expect("well formed");
        let direct = SigmoidReward::new(1.0, 0.0);
        assert_eq!(built.apply(&errors), direct.apply(&errors));
    }

    proptest! {
        #[test]
        fn apply_preserves_length_and_is_element_wise(
            errors in prop::collection::vec(-10.0..10.0f64, 0..40),
            seed in any::<u64>(),
        ) {
            for config in all_configs() {
                let transform = config.build().expect("well formed");
                let rewards = transform.apply(&errors);
                prop_assert_eq!(rewards.len(), errors.len());

                // Permuting the input permutes the output identically
                let mut indices: Vec<usize> = (0..errors.len()).collect();
                indices.shuffle(&mut StdRng::seed_from_u64(seed));
                let permuted: Vec<f64> = indices.iter().map(|&i| errors[i]).collect();
                let permuted_rewards = transform.apply(&permuted);
                for (j, &i) in indices.iter().enumerate() {
                    // Bitwise comparison so NaN rewards (e.g. log of a
                    // negative error) still count as equal
                    prop_assert_eq!(permuted_rewards[j].to_bits(), rewards[i].to_bits());
                }
            }
        }

        #[test]
        fn nan_propagates_through_every_variant(position in 0usize..4) {
            let mut errors = [0.25, 0.5, 0.75, 1.5];
            errors[position] = f64::NAN;
            for config in all_configs() {
                let transform = config.build().expect("well formed");
                let rewards = transform.apply(&errors);
                for (i, reward) in rewards.iter().enumerate() {
                    if i == position {
                        prop_assert!(reward.is_nan(), "{} swallowed NaN", config.kind());
                    } else {
                        prop_assert!(!reward.is_nan());
                    }
                }
            }
        }
    }
}
