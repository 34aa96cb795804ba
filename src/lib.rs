//! Time-series statistical analysis toolkit
//!
//! `series-stats` bundles the workspace crates behind one facade:
//!
//! - [`series_core`] — error taxonomy, the [`TimeSeries`] model, moment
//!   helpers
//! - [`series_analysis`] — trend regression, z-score anomaly detection,
//!   additive seasonal decomposition, Welch change detection
//! - [`series_resample`] — calendar bucketing and range filtering
//! - [`series_batch`] — bounded-concurrency batch execution feeding the
//!   analyzers
//!
//! The intended flow: fan independent point queries out through
//! [`BatchExecutor`], assemble the successful samples into a
//! [`TimeSeries`], then hand the series to whichever analyzers the caller
//! needs. Analyzers are pure, so one series can serve several of them
//! concurrently.
//!
//! # Example
//!
//! ```rust
//! use series_stats::prelude::*;
//!
//! let executor = BatchExecutor::new(BatchConfig::new(4)?);
//! let token = CancellationToken::new();
//!
//! let start = chrono::DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
//!     .unwrap()
//!     .with_timezone(&chrono::Utc);
//! let results = executor.execute((0..30i64).collect::<Vec<_>>(), &token, |_, day| {
//!     Ok((start + chrono::Duration::days(day), 1.0 + 0.2 * day as f64))
//! })?;
//!
//! let series = assemble_series("field-7", &results);
//! let trend = TrendAnalyzer::new().analyze(&series)?;
//! assert_eq!(trend.direction, Direction::Increasing);
//! # Ok::<(), series_core::Error>(())
//! ```

pub use series_analysis;
pub use series_batch;
pub use series_core;
pub use series_resample;

pub use series_core::{Error, Result, TimePoint, TimeSeries};

pub use series_analysis::{
    AnomalyDetector, AnomalyPoint, ChangeDetector, ChangeResult, Direction, SeasonalDecomposer,
    SeasonalDecomposition, SeriesAnalyzer, TrendAnalyzer, TrendResult, TwoSampleAnalyzer,
};

pub use series_resample::{aggregate, filter_range, BucketUnit, Reducer};

pub use series_batch::{
    assemble_series, BatchConfig, BatchExecutor, BatchResult, CancellationToken, ProgressHandler,
    SharedProgress,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use series_analysis::{
        AnomalyDetector, ChangeDetector, Direction, SeasonalDecomposer, SeriesAnalyzer,
        TrendAnalyzer, TwoSampleAnalyzer,
    };
    pub use series_batch::{
        assemble_series, BatchConfig, BatchExecutor, BatchResult, CancellationToken,
        SharedProgress,
    };
    pub use series_core::{Error, Result, TimePoint, TimeSeries};
    pub use series_resample::{aggregate, filter_range, BucketUnit, Reducer};
}
