//! Descriptive statistics over real-valued sequences.

/// Arithmetic mean of a sequence.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn mean(data: &[f64]) -> f64 {
    assert!(!data.is_empty(), "cannot compute mean of empty slice");
    data.iter().sum::<f64>() / data.len() as f64
}

/// Bessel-corrected sample variance (n - 1 denominator).
///
/// # Panics
///
/// Panics if `data` has fewer than two elements.
pub fn sample_variance(data: &[f64]) -> f64 {
    assert!(
        data.len() >= 2,
        "sample variance requires at least 2 observations"
    );
    let m = mean(data);
    data.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / (data.len() - 1) as f64
}

/// Bessel-corrected sample standard deviation.
///
/// # Panics
///
/// Panics if `data` has fewer than two elements.
pub fn sample_std_dev(data: &[f64]) -> f64 {
    sample_variance(data).sqrt()
}
