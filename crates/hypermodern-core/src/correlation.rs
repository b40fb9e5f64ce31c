//! Pearson correlation between two numeric columns

use crate::moments::magnitude_scale;
use crate::{Error, Result};

/// Calculate the Pearson correlation coefficient
///
/// Fails with [`Error::InsufficientData`] for fewer than two pairs and with
/// [`Error::UndefinedStatistic`] when either column is constant or holds
/// non-finite values. Each column is rescaled by a power of two first, which
/// leaves r unchanged and keeps the sums finite for any finite input. The
/// result is clamped to `[-1, 1]` to absorb rounding.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len(), "correlation input"));
    }

    if x.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: x.len(),
        });
    }

    let scale_x = magnitude_scale(x);
    let scale_y = magnitude_scale(y);

    let n = x.len() as f64;
    let mean_x = x.iter().map(|v| v / scale_x).sum::<f64>() / n;
    let mean_y = y.iter().map(|v| v / scale_y).sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;

    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi / scale_x - mean_x;
        let dy = yi / scale_y - mean_y;

        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    // A constant column can still leave rounding residue in the sums
    if sum_sq_x == 0.0 || is_constant(x) {
        return Err(Error::zero_variance("x"));
    }
    if sum_sq_y == 0.0 || is_constant(y) {
        return Err(Error::zero_variance("y"));
    }

    let denominator = sum_sq_x.sqrt() * sum_sq_y.sqrt();
    let r = numerator / denominator;

    if !(numerator.is_finite() && denominator.is_finite() && r.is_finite()) {
        return Err(Error::UndefinedStatistic(format!(
            "correlation is not finite (numerator={numerator}, denominator={denominator})"
        )));
    }

    Ok(r.clamp(-1.0, 1.0))
}

fn is_constant(data: &[f64]) -> bool {
    data.windows(2).all(|w| w[0] == w[1])
}
