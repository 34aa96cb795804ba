//! Scalar moment helpers shared across the analysis crates
//!
//! Small free functions over `&[f64]`, in the spirit of classical textbook
//! formulas. Callers are responsible for minimum-sample guards; these
//! helpers only define the degenerate cases that have a natural value.

/// Arithmetic mean; 0.0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divides by n); 0.0 for fewer than one sample
pub fn variance_population(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Sample variance (divides by n - 1); 0.0 for fewer than two samples
pub fn variance_sample(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64
}

/// Population standard deviation
pub fn stddev_population(values: &[f64]) -> f64 {
    variance_population(values).sqrt()
}

/// Spread of the observed values (max - min); 0.0 for an empty slice
pub fn value_range(values: &[f64]) -> f64 {
    let mut iter = values.iter();
    let Some(&first) = iter.next() else {
        return 0.0;
    };
    let (min, max) = iter.fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    max - min
}
