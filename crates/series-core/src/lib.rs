//! Core error type, time-series model and moment helpers
//!
//! This crate provides the foundation shared by the series-stats workspace:
//!
//! - A unified [`Error`] type with the error taxonomy used across all
//!   analysis and batch-execution crates
//! - The [`TimeSeries`] / [`TimePoint`] model — an immutable-during-analysis
//!   sequence of (time, value) samples
//! - Scalar moment helpers ([`moments`]) used by the analyzers
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use series_core::{moments, TimeSeries};
//!
//! let series = TimeSeries::from_samples(
//!     "soil-moisture",
//!     vec![
//!         (Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(), 0.31),
//!         (Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(), 0.28),
//!     ],
//! );
//!
//! let values = series.values();
//! println!("mean = {}", moments::mean(&values));
//! ```

pub mod error;
pub mod moments;
pub mod series;

// Re-export core types
pub use error::{Error, Result};
pub use series::{TimePoint, TimeSeries};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
