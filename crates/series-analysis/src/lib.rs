//! Statistical analyzers for time series
//!
//! This crate provides the four pure analyzers of the series-stats
//! workspace. Each one takes read-only [`series_core::TimeSeries`] input
//! and returns a fresh result record:
//!
//! - **Trend** ([`TrendAnalyzer`]): ordinary-least-squares regression with
//!   a Student-t significance test on the slope
//! - **Anomaly** ([`AnomalyDetector`]): z-score outlier flagging against a
//!   configured threshold, with an optional rolling baseline
//! - **Seasonal** ([`SeasonalDecomposer`]): additive trend/seasonal/residual
//!   split over a fixed period
//! - **Change** ([`ChangeDetector`]): Welch two-sample t-test between a
//!   "before" and an "after" series
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use series_analysis::{Direction, SeriesAnalyzer, TrendAnalyzer};
//! use series_core::TimeSeries;
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let series = TimeSeries::from_samples(
//!     "yield",
//!     (0..12).map(|i| (start + Duration::days(i), 1.0 + 0.5 * i as f64)).collect(),
//! );
//!
//! let trend = TrendAnalyzer::new().analyze(&series).unwrap();
//! assert_eq!(trend.direction, Direction::Increasing);
//! ```

pub mod anomaly;
pub mod change;
mod pvalue;
pub mod seasonal;
pub mod traits;
pub mod trend;
pub mod types;

// Re-exports - analyzers
pub use anomaly::AnomalyDetector;
pub use change::ChangeDetector;
pub use seasonal::SeasonalDecomposer;
pub use trend::TrendAnalyzer;

// Core traits
pub use traits::{AnalyzerProperties, SeriesAnalyzer, TwoSampleAnalyzer};

// Result records and shared types
pub use types::{
    AnomalyPoint, ChangeResult, Direction, SeasonalDecomposition, SlopeBand, SlopeClassifier,
    TrendResult,
};
