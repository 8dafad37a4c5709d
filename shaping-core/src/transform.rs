//! The error-to-reward transform capability

/// Maps a sequence of error measurements onto a same-length sequence of
/// reward signals.
///
/// Implementations are element-wise and stateless: reward `i` depends only
/// on error `i`, and instances are immutable after construction, so a
/// single transform may be shared across threads without synchronization.
pub trait RewardTransform: Send + Sync {
    /// Convert a slice of errors into rewards, element-wise and
    /// order-preserving.
    ///
    /// A NaN error encodes "metric inapplicable this step" and passes
    /// through unchanged instead of being folded into a spurious reward.
    fn apply(&self, errors: &[f64]) -> Vec<f64>;
}
