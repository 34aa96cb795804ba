//! Ordinary-least-squares trend analysis
//!
//! Fits `value = slope * x + intercept` with each point's sequence index as
//! the independent variable, and tests the slope against a Student-t
//! distribution with n - 2 degrees of freedom.

use crate::pvalue::two_sided_p;
use crate::traits::{AnalyzerProperties, SeriesAnalyzer};
use crate::types::{Direction, SlopeClassifier, TrendResult};
use series_core::{moments, Error, Result, TimeSeries};

/// Share of the value range a fitted change must span to count as large
/// when the slope test alone is not significant.
const LARGE_CHANGE_FRACTION: f64 = 0.05;

/// Share of the value range per sample step used as the slope tolerance.
const SLOPE_TOLERANCE_FRACTION: f64 = 0.01;

/// Least-squares trend analyzer
#[derive(Debug, Clone)]
pub struct TrendAnalyzer {
    significance_level: f64,
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self {
            significance_level: 0.05,
        }
    }
}

impl TrendAnalyzer {
    /// Create an analyzer with the standard 0.05 significance level
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with a custom significance level
    pub fn with_significance_level(significance_level: f64) -> Result<Self> {
        if !(significance_level > 0.0 && significance_level < 1.0) {
            return Err(Error::InvalidParameter(format!(
                "Significance level {significance_level} must be in (0, 1)"
            )));
        }
        Ok(Self { significance_level })
    }

    fn no_signal_result(&self, mean: f64) -> Result<TrendResult> {
        // All values identical: slope 0, no explained variance
        if mean == 0.0 {
            return Err(Error::zero_baseline("trend percent change"));
        }
        Ok(TrendResult {
            slope: 0.0,
            intercept: mean,
            r_squared: 0.0,
            p_value: 1.0,
            direction: Direction::Stable,
            percent_change: 0.0,
            fitted_start: mean,
            fitted_end: mean,
            is_significant: false,
        })
    }
}

impl AnalyzerProperties for TrendAnalyzer {
    fn algorithm_name(&self) -> &'static str {
        "OLS Trend"
    }

    fn minimum_sample_size(&self) -> usize {
        2
    }
}

impl SeriesAnalyzer for TrendAnalyzer {
    type Output = TrendResult;

    fn analyze(&self, series: &TimeSeries) -> Result<TrendResult> {
        let n = series.len();
        if n < self.minimum_sample_size() {
            return Err(Error::InsufficientData {
                expected: self.minimum_sample_size(),
                actual: n,
            });
        }

        let values = series.values();
        let y_mean = moments::mean(&values);
        let sst: f64 = values.iter().map(|v| (v - y_mean).powi(2)).sum();
        if sst == 0.0 {
            return self.no_signal_result(y_mean);
        }

        let x_mean = (n - 1) as f64 / 2.0;
        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (i, v) in values.iter().enumerate() {
            let dx = i as f64 - x_mean;
            sxx += dx * dx;
            sxy += dx * (v - y_mean);
        }

        let slope = sxy / sxx;
        let intercept = y_mean - slope * x_mean;

        let ssr: f64 = values
            .iter()
            .enumerate()
            .map(|(i, v)| (v - (slope * i as f64 + intercept)).powi(2))
            .sum();
        let r_squared = (1.0 - ssr / sst).max(0.0);

        let df = (n - 2) as f64;
        let t_statistic = if df > 0.0 {
            let standard_error = (ssr / df / sxx).sqrt();
            if standard_error > 0.0 {
                slope / standard_error
            } else if slope == 0.0 {
                0.0
            } else {
                f64::INFINITY * slope.signum()
            }
        } else if slope == 0.0 {
            0.0
        } else {
            f64::INFINITY * slope.signum()
        };
        let p_value = two_sided_p(t_statistic, df)?;
        let is_significant = p_value < self.significance_level;

        let fitted_start = intercept;
        let fitted_end = intercept + slope * (n - 1) as f64;
        if fitted_start == 0.0 {
            return Err(Error::zero_baseline("trend percent change"));
        }
        let percent_change = (fitted_end - fitted_start) / fitted_start * 100.0;

        // sst > 0 guarantees a nonzero value range here
        let range = moments::value_range(&values);
        let tolerance = SLOPE_TOLERANCE_FRACTION * range / (n - 1) as f64;
        let raw_direction = SlopeClassifier::symmetric(tolerance).classify(slope);
        let large_change = (fitted_end - fitted_start).abs() >= LARGE_CHANGE_FRACTION * range;
        let direction = if raw_direction != Direction::Stable && (is_significant || large_change) {
            raw_direction
        } else {
            Direction::Stable
        };

        let result = TrendResult {
            slope,
            intercept,
            r_squared,
            p_value,
            direction,
            percent_change,
            fitted_start,
            fitted_end,
            is_significant,
        };
        log::debug!("{} over {} points: {}", self.algorithm_name(), n, result);
        Ok(result)
    }
}
