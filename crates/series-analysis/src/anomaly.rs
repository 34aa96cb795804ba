//! Z-score anomaly detection
//!
//! Scores every point by its distance from a baseline mean in standard
//! deviations. The baseline is the whole series by default; an optional
//! trailing window makes the baseline local instead.

use crate::traits::{AnalyzerProperties, SeriesAnalyzer};
use crate::types::AnomalyPoint;
use series_core::{moments, Error, Result, TimeSeries};

/// Z-score anomaly detector with a validated threshold
#[derive(Debug, Clone)]
pub struct AnomalyDetector {
    threshold: f64,
    window: Option<usize>,
}

impl AnomalyDetector {
    /// Create a detector flagging points at or beyond `threshold` standard
    /// deviations from the global series mean
    pub fn new(threshold: f64) -> Result<Self> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(Error::invalid_positive("Anomaly threshold", threshold));
        }
        Ok(Self {
            threshold,
            window: None,
        })
    }

    /// Switch the baseline to a trailing window of `window` points
    ///
    /// Each point is scored against the mean and deviation of the window
    /// ending at that point; during warm-up the window expands from the
    /// start of the series.
    pub fn with_window(mut self, window: usize) -> Result<Self> {
        if window < 2 {
            return Err(Error::InvalidParameter(format!(
                "Rolling window must cover at least 2 points, got {window}"
            )));
        }
        self.window = Some(window);
        Ok(self)
    }

    /// Configured threshold, in standard-deviation multiples
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    fn score(&self, value: f64, baseline_mean: f64, baseline_stddev: f64) -> (f64, bool) {
        // Zero spread: nothing deviates, nothing is flagged
        if baseline_stddev == 0.0 {
            return (0.0, false);
        }
        let z = (value - baseline_mean) / baseline_stddev;
        (z, z.abs() >= self.threshold)
    }
}

impl AnalyzerProperties for AnomalyDetector {
    fn algorithm_name(&self) -> &'static str {
        "Z-Score Anomaly"
    }

    fn minimum_sample_size(&self) -> usize {
        1
    }
}

impl SeriesAnalyzer for AnomalyDetector {
    type Output = Vec<AnomalyPoint>;

    fn analyze(&self, series: &TimeSeries) -> Result<Vec<AnomalyPoint>> {
        if series.is_empty() {
            return Err(Error::empty_series());
        }

        let values = series.values();
        let results: Vec<AnomalyPoint> = match self.window {
            None => {
                let mean = moments::mean(&values);
                let stddev = moments::stddev_population(&values);
                series
                    .iter()
                    .map(|p| {
                        let (z_score, is_anomaly) = self.score(p.value, mean, stddev);
                        AnomalyPoint {
                            time: p.time,
                            value: p.value,
                            z_score,
                            deviation: z_score.abs(),
                            is_anomaly,
                        }
                    })
                    .collect()
            }
            Some(window) => series
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    let start = (i + 1).saturating_sub(window);
                    let local = &values[start..=i];
                    let mean = moments::mean(local);
                    let stddev = moments::stddev_population(local);
                    let (z_score, is_anomaly) = self.score(p.value, mean, stddev);
                    AnomalyPoint {
                        time: p.time,
                        value: p.value,
                        z_score,
                        deviation: z_score.abs(),
                        is_anomaly,
                    }
                })
                .collect(),
        };

        log::debug!(
            "{} flagged {}/{} points",
            self.algorithm_name(),
            results.iter().filter(|r: &&AnomalyPoint| r.is_anomaly).count(),
            series.len()
        );
        Ok(results)
    }
}
