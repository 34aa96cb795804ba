//! Result records and shared types for the analyzers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a detected trend or change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Values rise over time / after exceeds before
    Increasing,
    /// Values fall over time / after undercuts before
    Decreasing,
    /// No significant movement either way
    Stable,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
        };
        write!(f, "{s}")
    }
}

/// One band of a [`SlopeClassifier`]: everything at or below `upper` that
/// did not match an earlier band maps to `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeBand {
    /// Inclusive upper bound for this band
    pub upper: f64,
    /// Label assigned to slopes falling in this band
    pub direction: Direction,
}

/// Ordered (upper-bound, label) table mapping a slope to a [`Direction`]
///
/// Evaluated by first match over ascending bounds, so the mapping is
/// data-driven and can be tested exhaustively instead of relying on the
/// order of chained conditionals.
#[derive(Debug, Clone, PartialEq)]
pub struct SlopeClassifier {
    bands: Vec<SlopeBand>,
}

impl SlopeClassifier {
    /// Build a classifier from ascending bands
    ///
    /// The final band must be unbounded (`f64::INFINITY`) so every slope
    /// matches something.
    pub fn new(bands: Vec<SlopeBand>) -> Self {
        debug_assert!(
            bands.windows(2).all(|w| w[0].upper < w[1].upper),
            "bands must have strictly ascending upper bounds"
        );
        debug_assert!(
            bands.last().map(|b| b.upper == f64::INFINITY).unwrap_or(false),
            "last band must be unbounded"
        );
        Self { bands }
    }

    /// The standard three-band table around a symmetric tolerance:
    /// at or below -tolerance is decreasing, within the tolerance is
    /// stable, above it is increasing.
    pub fn symmetric(tolerance: f64) -> Self {
        Self::new(vec![
            SlopeBand {
                upper: -tolerance,
                direction: Direction::Decreasing,
            },
            SlopeBand {
                upper: tolerance,
                direction: Direction::Stable,
            },
            SlopeBand {
                upper: f64::INFINITY,
                direction: Direction::Increasing,
            },
        ])
    }

    /// Classify a slope by first matching band
    pub fn classify(&self, slope: f64) -> Direction {
        self.bands
            .iter()
            .find(|band| slope <= band.upper)
            .map(|band| band.direction)
            .unwrap_or(Direction::Stable)
    }
}

/// Result of a least-squares trend fit over a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Fitted slope, in value units per sample step
    pub slope: f64,
    /// Fitted intercept (value at the first sample)
    pub intercept: f64,
    /// Coefficient of determination, 0 when the series carries no signal
    pub r_squared: f64,
    /// Two-sided p-value of the slope estimate
    pub p_value: f64,
    /// Direction of the fitted trend
    pub direction: Direction,
    /// Relative change between the fitted endpoints, in percent
    pub percent_change: f64,
    /// Fitted value at the first sample
    pub fitted_start: f64,
    /// Fitted value at the last sample
    pub fitted_end: f64,
    /// Whether p-value < 0.05
    pub is_significant: bool,
}

impl fmt::Display for TrendResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trend {{ slope: {:.6}, r²: {:.3}, p: {:.4}, {} ({:+.2}%) }}",
            self.slope, self.r_squared, self.p_value, self.direction, self.percent_change
        )
    }
}

/// Per-point verdict of the anomaly detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyPoint {
    /// Timestamp of the scored point
    pub time: DateTime<Utc>,
    /// Observed value
    pub value: f64,
    /// Standard deviations from the baseline mean (signed)
    pub z_score: f64,
    /// Absolute z-score
    pub deviation: f64,
    /// Whether the deviation reached the configured threshold
    pub is_anomaly: bool,
}

impl fmt::Display for AnomalyPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} value={} z={:+.3}{}",
            self.time.to_rfc3339(),
            self.value,
            self.z_score,
            if self.is_anomaly { " ANOMALY" } else { "" }
        )
    }
}

/// Additive decomposition of a series into trend, seasonal and residual
///
/// All three component arrays have the input series' length, and for every
/// point `trend[i] + seasonal[i] + residual[i]` reconstructs the original
/// value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalDecomposition {
    /// Seasonal period the decomposition was computed for
    pub period: usize,
    /// Centered-moving-average trend component
    pub trend: Vec<f64>,
    /// Repeating seasonal component, zero-mean over one period
    pub seasonal: Vec<f64>,
    /// Remainder after removing trend and seasonal components
    pub residual: Vec<f64>,
}

impl SeasonalDecomposition {
    /// Number of decomposed points
    pub fn len(&self) -> usize {
        self.trend.len()
    }

    /// Is the decomposition empty?
    pub fn is_empty(&self) -> bool {
        self.trend.is_empty()
    }

    /// Reconstructed value at a point
    pub fn reconstruct(&self, index: usize) -> f64 {
        self.trend[index] + self.seasonal[index] + self.residual[index]
    }
}

/// Result of a two-sample before/after comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeResult {
    /// Mean of the "before" series
    pub before_mean: f64,
    /// Mean of the "after" series
    pub after_mean: f64,
    /// after_mean - before_mean
    pub difference: f64,
    /// Difference relative to the before mean, in percent
    pub percent_difference: f64,
    /// Welch t-statistic
    pub t_statistic: f64,
    /// Welch-Satterthwaite degrees of freedom
    pub degrees_of_freedom: f64,
    /// Two-sided p-value
    pub p_value: f64,
    /// Direction of the change (stable unless significant)
    pub direction: Direction,
    /// Whether p-value < 0.05
    pub is_significant: bool,
}

impl fmt::Display for ChangeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Change {{ {:.4} -> {:.4} ({:+.2}%), t: {:.3}, p: {:.4}, {} }}",
            self.before_mean,
            self.after_mean,
            self.percent_difference,
            self.t_statistic,
            self.p_value,
            self.direction
        )
    }
}
