//! Error types for the reward shaping library

use thiserror::Error;

/// Error type for reward shaping operations
///
/// Float-domain failures (NaN, ±infinity) are never surfaced here; they
/// are ordinary domain values that flow through the transforms. This type
/// covers configuration-level failures only.
#[derive(Error, Debug)]
pub enum ShapingError {
    /// Calibration endpoints coincide, which would divide by zero
    #[error("Degenerate calibration interval: bad and good thresholds are both {value}")]
    DegenerateInterval {
        /// The shared endpoint value
        value: f64,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for reward shaping operations
pub type Result<T> = std::result::Result<T, ShapingError>;
