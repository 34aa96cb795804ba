//! Additive seasonal decomposition
//!
//! Splits a series into trend, repeating seasonal and residual components:
//! the trend is a centered moving average over one period, the seasonal
//! component is the zero-mean profile of per-phase detrended means, and the
//! residual is whatever remains. Boundary points without a full centered
//! window replicate the nearest full-window trend value.

use crate::traits::{AnalyzerProperties, SeriesAnalyzer};
use crate::types::SeasonalDecomposition;
use series_core::{Error, Result, TimeSeries};

/// Additive trend/seasonal/residual decomposer over a fixed period
#[derive(Debug, Clone)]
pub struct SeasonalDecomposer {
    period: usize,
}

impl SeasonalDecomposer {
    /// Create a decomposer for the given seasonal period (at least 2)
    pub fn new(period: usize) -> Result<Self> {
        if period < 2 {
            return Err(Error::InvalidParameter(format!(
                "Seasonal period must be at least 2, got {period}"
            )));
        }
        Ok(Self { period })
    }

    /// Configured seasonal period
    pub fn period(&self) -> usize {
        self.period
    }

    /// Centered moving average with boundary replication
    fn moving_average_trend(&self, values: &[f64]) -> Vec<f64> {
        let n = values.len();
        let period = self.period;
        let half = period / 2;
        // Window for index i spans [i - half, i + period - 1 - half]; for
        // even periods that window leans one step left of center.
        let first_full = half;
        let last_full = n - period + half;

        let mut trend = vec![0.0; n];
        let mut window_sum: f64 = values[..period].iter().sum();
        trend[first_full] = window_sum / period as f64;
        for i in first_full + 1..=last_full {
            window_sum += values[i + period - 1 - half] - values[i - 1 - half];
            trend[i] = window_sum / period as f64;
        }

        for i in 0..first_full {
            trend[i] = trend[first_full];
        }
        for i in last_full + 1..n {
            trend[i] = trend[last_full];
        }
        trend
    }
}

impl AnalyzerProperties for SeasonalDecomposer {
    fn algorithm_name(&self) -> &'static str {
        "Additive Decomposition"
    }

    fn minimum_sample_size(&self) -> usize {
        2 * self.period
    }
}

impl SeriesAnalyzer for SeasonalDecomposer {
    type Output = SeasonalDecomposition;

    fn analyze(&self, series: &TimeSeries) -> Result<SeasonalDecomposition> {
        let n = series.len();
        if n < self.minimum_sample_size() {
            return Err(Error::InsufficientData {
                expected: self.minimum_sample_size(),
                actual: n,
            });
        }

        let values = series.values();
        let trend = self.moving_average_trend(&values);

        let detrended: Vec<f64> = values.iter().zip(&trend).map(|(v, t)| v - t).collect();

        let period = self.period;
        let mut phase_sums = vec![0.0; period];
        let mut phase_counts = vec![0usize; period];
        for (i, d) in detrended.iter().enumerate() {
            phase_sums[i % period] += d;
            phase_counts[i % period] += 1;
        }
        let mut indices: Vec<f64> = phase_sums
            .iter()
            .zip(&phase_counts)
            .map(|(sum, &count)| sum / count as f64)
            .collect();

        // Normalize so the seasonal profile sums to zero over one period
        let index_mean = indices.iter().sum::<f64>() / period as f64;
        for index in &mut indices {
            *index -= index_mean;
        }

        let seasonal: Vec<f64> = (0..n).map(|i| indices[i % period]).collect();
        let residual: Vec<f64> = values
            .iter()
            .zip(&trend)
            .zip(&seasonal)
            .map(|((v, t), s)| v - t - s)
            .collect();

        log::debug!(
            "{} with period {} over {} points",
            self.algorithm_name(),
            period,
            n
        );
        Ok(SeasonalDecomposition {
            period,
            trend,
            seasonal,
            residual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{Duration, TimeZone, Utc};
    use series_core::TimeSeries;

    fn daily_series(values: &[f64]) -> TimeSeries {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        TimeSeries::from_samples(
            "test",
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| (start + Duration::days(i as i64), v))
                .collect(),
        )
    }

    #[test]
    fn test_period_validation() {
        assert!(SeasonalDecomposer::new(0).is_err());
        assert!(SeasonalDecomposer::new(1).is_err());
        assert!(SeasonalDecomposer::new(2).is_ok());
    }

    #[test]
    fn test_insufficient_data() {
        let series = daily_series(&[1.0; 7]);
        let result = SeasonalDecomposer::new(4).unwrap().analyze(&series);
        assert!(matches!(
            result,
            Err(Error::InsufficientData {
                expected: 8,
                actual: 7
            })
        ));
    }

    #[test]
    fn test_component_lengths() {
        let values: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let series = daily_series(&values);
        let d = SeasonalDecomposer::new(4).unwrap().analyze(&series).unwrap();

        assert_eq!(d.period, 4);
        assert_eq!(d.trend.len(), 20);
        assert_eq!(d.seasonal.len(), 20);
        assert_eq!(d.residual.len(), 20);
    }

    #[test]
    fn test_reconstruction_is_exact() {
        let values: Vec<f64> = (0..30)
            .map(|i| 10.0 + 0.3 * i as f64 + ((i % 6) as f64 - 2.5))
            .collect();
        let series = daily_series(&values);
        let d = SeasonalDecomposer::new(6).unwrap().analyze(&series).unwrap();

        for (i, &v) in values.iter().enumerate() {
            assert_relative_eq!(d.reconstruct(i), v, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_pure_seasonal_signal() {
        // Flat level plus a repeating period-4 pattern: the moving average
        // recovers the level everywhere and the residual vanishes
        let pattern = [3.0, -1.0, 0.0, -2.0]; // mean 0
        let values: Vec<f64> = (0..16).map(|i| 8.0 + pattern[i % 4]).collect();
        let series = daily_series(&values);
        let d = SeasonalDecomposer::new(4).unwrap().analyze(&series).unwrap();

        for t in &d.trend {
            assert_relative_eq!(*t, 8.0, epsilon = 1e-9);
        }
        for (i, s) in d.seasonal.iter().enumerate() {
            assert_relative_eq!(*s, pattern[i % 4], epsilon = 1e-9);
        }
        for r in &d.residual {
            assert_relative_eq!(*r, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_seasonal_profile_is_zero_mean() {
        let values: Vec<f64> = (0..24)
            .map(|i| 0.5 * i as f64 + [2.0, 5.0, 1.0][i % 3])
            .collect();
        let series = daily_series(&values);
        let d = SeasonalDecomposer::new(3).unwrap().analyze(&series).unwrap();

        let profile_sum: f64 = d.seasonal[..3].iter().sum();
        assert_relative_eq!(profile_sum, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_linear_trend_recovered_in_interior() {
        // Odd period: the centered average of a line is the line itself
        let values: Vec<f64> = (0..21).map(|i| 2.0 * i as f64).collect();
        let series = daily_series(&values);
        let d = SeasonalDecomposer::new(5).unwrap().analyze(&series).unwrap();

        for i in 2..19 {
            assert_relative_eq!(d.trend[i], 2.0 * i as f64, epsilon = 1e-9);
        }
        // Boundary replication
        assert_relative_eq!(d.trend[0], d.trend[2]);
        assert_relative_eq!(d.trend[20], d.trend[18]);
    }
}
