//! Pearson product-moment correlation.

use crate::error::{Error, Result};

use super::descriptive::mean;

/// Pearson product-moment correlation coefficient between two aligned
/// sequences.
///
/// Symmetric in its arguments: `correlation(x, y) == correlation(y, x)`.
///
/// # Errors
///
/// - [`Error::LengthMismatch`] if the sequences differ in length.
/// - [`Error::EmptyInput`] if the sequences are empty.
/// - [`Error::ZeroVariance`] if either sequence has zero variance, which
///   leaves the denominator undefined. Because a permutation preserves the
///   multiset of values, this check also covers every permuted replicate.
pub fn correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if x.is_empty() {
        return Err(Error::EmptyInput);
    }

    let (r, sxx, syy) = pearson_parts(x, y);
    if sxx == 0.0 || syy == 0.0 {
        return Err(Error::ZeroVariance);
    }
    Ok(r)
}

/// Correlation for pre-validated inputs.
///
/// Callers must have established equal non-zero lengths and non-zero
/// variance on both sides; used inside replicate loops where those
/// properties are permutation-invariant.
pub(crate) fn correlation_unchecked(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    pearson_parts(x, y).0
}

/// Compute `(r, Sxx, Syy)` in one pass over centered values.
///
/// `r` is meaningless when either sum of squares is zero; callers decide
/// how to surface that.
fn pearson_parts(x: &[f64], y: &[f64]) -> (f64, f64, f64) {
    let mx = mean(x);
    let my = mean(y);

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mx;
        let dy = yi - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    (sxy / (sxx * syy).sqrt(), sxx, syy)
}
