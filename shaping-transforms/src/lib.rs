//! Concrete error-to-reward transforms
//!
//! This crate provides the reward transform family:
//! - Direct value transforms (equal, absolute, negated, power, log)
//! - Calibrated shaping curves (linear clipped, soft plus, negated
//!   exponential, sigmoid)
//! - A declarative configuration layer for building transforms

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod basic;
pub mod config;
pub mod shaped;

// Re-export transforms
pub use basic::{AbsoluteReward, EqualReward, LogReward, NegatedReward, PowerReward};
pub use config::TransformConfig;
pub use shaped::{LinearClippedReward, NegExpReward, SigmoidReward, SoftPlusReward};

// Re-export core types
pub use shaping_core::{clip, clip_unit, logistic, rescale, Result, RewardTransform, ShapingError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AbsoluteReward, EqualReward, LinearClippedReward, LogReward, NegExpReward, NegatedReward,
        PowerReward, SigmoidReward, SoftPlusReward, TransformConfig,
    };
    pub use shaping_core::prelude::*;
}
