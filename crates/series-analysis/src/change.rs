//! Two-sample change detection
//!
//! Welch's unequal-variance t-test between a "before" and an "after"
//! series, with Welch-Satterthwaite degrees of freedom. The reported
//! direction stays stable unless the difference in means is significant.

use crate::pvalue::two_sided_p;
use crate::traits::{AnalyzerProperties, TwoSampleAnalyzer};
use crate::types::{ChangeResult, Direction};
use series_core::{moments, Error, Result, TimeSeries};

/// Welch two-sample change detector
#[derive(Debug, Clone)]
pub struct ChangeDetector {
    significance_level: f64,
}

impl Default for ChangeDetector {
    fn default() -> Self {
        Self {
            significance_level: 0.05,
        }
    }
}

impl ChangeDetector {
    /// Create a detector with the standard 0.05 significance level
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with a custom significance level
    pub fn with_significance_level(significance_level: f64) -> Result<Self> {
        if !(significance_level > 0.0 && significance_level < 1.0) {
            return Err(Error::InvalidParameter(format!(
                "Significance level {significance_level} must be in (0, 1)"
            )));
        }
        Ok(Self { significance_level })
    }
}

impl AnalyzerProperties for ChangeDetector {
    fn algorithm_name(&self) -> &'static str {
        "Welch Change"
    }

    fn minimum_sample_size(&self) -> usize {
        2
    }
}

impl TwoSampleAnalyzer for ChangeDetector {
    type Output = ChangeResult;

    fn compare(&self, before: &TimeSeries, after: &TimeSeries) -> Result<ChangeResult> {
        let minimum = self.minimum_sample_size();
        for series in [before, after] {
            if series.len() < minimum {
                return Err(Error::InsufficientData {
                    expected: minimum,
                    actual: series.len(),
                });
            }
        }

        let before_values = before.values();
        let after_values = after.values();
        let n1 = before_values.len() as f64;
        let n2 = after_values.len() as f64;

        let before_mean = moments::mean(&before_values);
        let after_mean = moments::mean(&after_values);
        let var1 = moments::variance_sample(&before_values);
        let var2 = moments::variance_sample(&after_values);

        let difference = after_mean - before_mean;
        let pooled = var1 / n1 + var2 / n2;

        let (t_statistic, degrees_of_freedom) = if pooled == 0.0 {
            // Both samples constant: either identical (no change) or a
            // step with zero sampling noise
            if difference == 0.0 {
                (0.0, 0.0)
            } else {
                (f64::INFINITY * difference.signum(), 0.0)
            }
        } else {
            let t = difference / pooled.sqrt();
            let df = pooled.powi(2)
                / ((var1 / n1).powi(2) / (n1 - 1.0) + (var2 / n2).powi(2) / (n2 - 1.0));
            (t, df)
        };

        let p_value = two_sided_p(t_statistic, degrees_of_freedom)?;
        let is_significant = p_value < self.significance_level;

        if before_mean == 0.0 {
            return Err(Error::zero_baseline("change percent difference"));
        }
        let percent_difference = difference / before_mean * 100.0;

        let direction = if is_significant && difference > 0.0 {
            Direction::Increasing
        } else if is_significant && difference < 0.0 {
            Direction::Decreasing
        } else {
            Direction::Stable
        };

        let result = ChangeResult {
            before_mean,
            after_mean,
            difference,
            percent_difference,
            t_statistic,
            degrees_of_freedom,
            p_value,
            direction,
            is_significant,
        };
        log::debug!(
            "{} between {} and {}: {}",
            self.algorithm_name(),
            before.name(),
            after.name(),
            result
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{Duration, TimeZone, Utc};

    fn daily_series(name: &str, values: &[f64]) -> TimeSeries {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        TimeSeries::from_samples(
            name,
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| (start + Duration::days(i as i64), v))
                .collect(),
        )
    }

    #[test]
    fn test_identical_constant_series_are_stable() {
        let before = daily_series("before", &[5.0; 10]);
        let after = daily_series("after", &[5.0; 10]);
        let result = ChangeDetector::new().compare(&before, &after).unwrap();

        assert_eq!(result.t_statistic, 0.0);
        assert_relative_eq!(result.p_value, 1.0);
        assert!(!result.is_significant);
        assert_eq!(result.direction, Direction::Stable);
        assert_eq!(result.difference, 0.0);
        assert_eq!(result.percent_difference, 0.0);
    }

    #[test]
    fn test_noiseless_step_is_maximally_significant() {
        let before = daily_series("before", &[10.0; 6]);
        let after = daily_series("after", &[20.0; 6]);
        let result = ChangeDetector::new().compare(&before, &after).unwrap();

        assert_eq!(result.p_value, 0.0);
        assert!(result.is_significant);
        assert_eq!(result.direction, Direction::Increasing);
        assert_relative_eq!(result.percent_difference, 100.0);
    }

    #[test]
    fn test_welch_statistics_on_known_samples() {
        let before = daily_series("before", &[1.0, 2.0, 3.0, 4.0, 5.0]);
        let after = daily_series("after", &[11.0, 12.0, 13.0, 14.0, 15.0]);
        let result = ChangeDetector::new().compare(&before, &after).unwrap();

        // Equal sample variances 2.5 at n = 5: t = 10, Welch df = 8
        assert_relative_eq!(result.t_statistic, 10.0, epsilon = 1e-9);
        assert_relative_eq!(result.degrees_of_freedom, 8.0, epsilon = 1e-9);
        assert!(result.p_value < 1e-4);
        assert_eq!(result.direction, Direction::Increasing);
        assert_relative_eq!(result.difference, 10.0);
        assert_relative_eq!(result.percent_difference, 10.0 / 3.0 * 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_overlapping_samples_are_not_significant() {
        let before = daily_series("before", &[1.0, 2.0, 3.0, 4.0]);
        let after = daily_series("after", &[2.0, 3.0, 4.0, 5.0]);
        let result = ChangeDetector::new().compare(&before, &after).unwrap();

        assert!(result.p_value > 0.05);
        assert!(!result.is_significant);
        // Positive difference without significance stays stable
        assert!(result.difference > 0.0);
        assert_eq!(result.direction, Direction::Stable);
    }

    #[test]
    fn test_significant_decrease() {
        let before = daily_series("before", &[50.0, 51.0, 49.0, 50.0, 50.0]);
        let after = daily_series("after", &[10.0, 11.0, 9.0, 10.0, 10.0]);
        let result = ChangeDetector::new().compare(&before, &after).unwrap();

        assert!(result.is_significant);
        assert_eq!(result.direction, Direction::Decreasing);
        assert_relative_eq!(result.difference, -40.0);
        assert_relative_eq!(result.percent_difference, -80.0);
    }

    #[test]
    fn test_zero_before_mean_rejects_percent() {
        let before = daily_series("before", &[-1.0, 1.0, -1.0, 1.0]);
        let after = daily_series("after", &[2.0, 3.0, 2.0, 3.0]);
        let result = ChangeDetector::new().compare(&before, &after);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_insufficient_data() {
        let before = daily_series("before", &[1.0]);
        let after = daily_series("after", &[2.0, 3.0]);
        let result = ChangeDetector::new().compare(&before, &after);
        assert!(matches!(
            result,
            Err(Error::InsufficientData {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_significance_level_validation() {
        assert!(ChangeDetector::with_significance_level(0.0).is_err());
        assert!(ChangeDetector::with_significance_level(1.5).is_err());
        assert!(ChangeDetector::with_significance_level(0.1).is_ok());
    }
}
