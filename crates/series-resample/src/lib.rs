//! Temporal aggregation and range filtering for time series
//!
//! Two operations over [`series_core::TimeSeries`]:
//!
//! - [`aggregate`]: truncate timestamps to calendar buckets
//!   ([`BucketUnit`]) and reduce each bucket ([`Reducer`]) to one output
//!   point, reassigning indices
//! - [`filter_range`]: half-open `[start, end)` time window over the
//!   original points, preserving their indices
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use series_core::TimeSeries;
//! use series_resample::{aggregate, BucketUnit, Reducer};
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let daily = TimeSeries::from_samples(
//!     "rainfall",
//!     (0..90).map(|i| (start + Duration::days(i), 1.0)).collect(),
//! );
//!
//! let monthly = aggregate(&daily, BucketUnit::Month, Reducer::Sum).unwrap();
//! assert_eq!(monthly.len(), 3);
//! ```

pub mod aggregate;
pub mod range;
pub mod types;

pub use aggregate::aggregate;
pub use range::filter_range;
pub use types::{BucketUnit, Reducer};
