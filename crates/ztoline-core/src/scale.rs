//! Scalar helpers that turn one progress value into staggered sub-scales and
//! per-tick increments.
//!
//! The band switch at [`SC_DIV`] is a hard cut, not an interpolation: the step
//! size and the reciprocal picked by [`blend`] jump as soon as the scale
//! reaches the threshold.

use crate::constants::{SC_DIV, SC_GAP};

/// Local progress of sub-element `i` out of `n`, in `[0, 1]`.
///
/// Element `i` stays at 0 until `scale` passes `i / n` and saturates once it
/// has consumed its own `1 / n` share.
#[inline]
pub fn clamped_progress(scale: f64, i: usize, n: usize) -> f64 {
    let n = n as f64;
    let lead = (scale - i as f64 / n).max(0.0);
    lead.min(1.0 / n) * n
}

/// 0 below the threshold, 1 from the threshold up (negative below zero).
#[inline]
pub fn scale_band(scale: f64) -> f64 {
    (scale / SC_DIV).floor()
}

/// Picks `1/a` or `1/b` depending on the band `scale` sits in.
#[inline]
pub fn blend(scale: f64, a: f64, b: f64) -> f64 {
    let k = scale_band(scale);
    (1.0 - k) / a + k / b
}

/// Signed scale delta applied by one animation tick.
#[inline]
pub fn step_increment(scale: f64, dir: f64, a: f64, b: f64) -> f64 {
    blend(scale, a, b) * dir * SC_GAP
}
