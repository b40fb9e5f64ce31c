//! First and second moments over a numeric column
//!
//! The reductions delegate to `statrs`, which reports undefined values as
//! NaN. Everything leaving this module goes through [`finite_or_none`] so
//! callers only ever see `Option<f64>`.

use statrs::statistics::Statistics;

/// Map NaN and infinities to `None`
#[inline]
pub fn finite_or_none(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Power of two bringing the largest magnitude in `data` close to one
///
/// Dividing by a power of two is exact, so reductions over the rescaled
/// column round the same way while their intermediate sums stay finite.
pub(crate) fn magnitude_scale(data: &[f64]) -> f64 {
    let largest = data.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if largest == 0.0 || !largest.is_finite() {
        return 1.0;
    }
    // log2(f64::MAX) rounds up to 1024, keep the exponent representable
    let exponent = largest.log2().floor().clamp(-1000.0, 1000.0) as i32;
    2.0_f64.powi(exponent)
}

/// Arithmetic mean, `None` for an empty column
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let scale = magnitude_scale(data);
    finite_or_none(data.iter().map(|v| v / scale).mean() * scale)
}

/// Bessel-corrected sample standard deviation (ddof = 1)
///
/// `None` when fewer than two values are present, or when the deviation
/// itself lies beyond the `f64` range.
pub fn sample_std_dev(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    let scale = magnitude_scale(data);
    finite_or_none(data.iter().map(|v| v / scale).std_dev() * scale)
}
