//! Scalar numeric primitives shared by the reward transforms
//!
//! Pure functions with no state. NaN inputs always pass through unchanged
//! so that "metric inapplicable" markers survive shaping.

/// Saturation bound applied to [`logistic`] inputs before exponentiation.
const LOGISTIC_CLIP: f64 = 50.0;

/// Clamp `value` into `[min, max]`, passing NaN through unchanged.
#[must_use]
pub fn clip(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        value
    } else {
        value.min(max).max(min)
    }
}

/// Clamp `value` into the unit interval `[0, 1]`, passing NaN through unchanged.
#[must_use]
pub fn clip_unit(value: f64) -> f64 {
    clip(value, 0.0, 1.0)
}

/// Affine map sending `old_min` to `new_min` and `old_max` to `new_max`.
///
/// Values outside `[old_min, old_max]` extrapolate linearly; callers that
/// need a bounded result clip afterwards. `old_min == old_max` divides by
/// zero and yields ±infinity or NaN per IEEE semantics.
#[must_use]
pub fn rescale(value: f64, old_min: f64, old_max: f64, new_min: f64, new_max: f64) -> f64 {
    new_min + (value - old_min) * (new_max - new_min) / (old_max - old_min)
}

/// Logistic function `1 / (1 + exp(-value))`.
///
/// The input is clamped to `[-50, 50]` before exponentiation to keep `exp`
/// well behaved; the curve is already saturated at those bounds.
#[must_use]
pub fn logistic(value: f64) -> f64 {
    let clipped = clip(value, -LOGISTIC_CLIP, LOGISTIC_CLIP);
    1.0 / (1.0 + (-clipped).exp())
}
