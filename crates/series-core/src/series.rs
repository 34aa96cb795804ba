//! The shared time-series model
//!
//! A [`TimeSeries`] is an ordered sequence of [`TimePoint`] samples. Points
//! are kept in non-decreasing time order and every point carries its
//! sequence position, assigned at construction. Analyzers treat a series as
//! read-only; anything derived (filtered, resampled) is a new instance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single (time, value) sample within a [`TimeSeries`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Sample timestamp (UTC)
    pub time: DateTime<Utc>,
    /// Sample value
    pub value: f64,
    /// Sequence position within the owning series, 0-based
    pub index: usize,
}

impl TimePoint {
    /// Create a new point at an explicit sequence position
    pub fn new(time: DateTime<Utc>, value: f64, index: usize) -> Self {
        Self { time, value, index }
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} = {}", self.index, self.time.to_rfc3339(), self.value)
    }
}

/// A named, time-ordered sequence of samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    name: String,
    points: Vec<TimePoint>,
}

impl TimeSeries {
    /// Build a series from raw (time, value) samples
    ///
    /// Samples are stably sorted by timestamp and indices are assigned
    /// 0..n-1 in the resulting order.
    pub fn from_samples(name: impl Into<String>, samples: Vec<(DateTime<Utc>, f64)>) -> Self {
        let mut samples = samples;
        samples.sort_by_key(|(time, _)| *time);

        let points = samples
            .into_iter()
            .enumerate()
            .map(|(index, (time, value))| TimePoint { time, value, index })
            .collect();

        Self {
            name: name.into(),
            points,
        }
    }

    /// Build a series from already-ordered points, preserving their indices
    ///
    /// Used by operations that produce views over an existing series (e.g.
    /// range filtering), where the original sequence positions must survive.
    /// The caller guarantees the points are in non-decreasing time order.
    pub fn from_points(name: impl Into<String>, points: Vec<TimePoint>) -> Self {
        debug_assert!(
            points.windows(2).all(|w| w[0].time <= w[1].time),
            "points must be in non-decreasing time order"
        );
        Self {
            name: name.into(),
            points,
        }
    }

    /// Series label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All points, in time order
    pub fn points(&self) -> &[TimePoint] {
        &self.points
    }

    /// Point at a given sequence position
    pub fn get(&self, index: usize) -> Option<&TimePoint> {
        self.points.get(index)
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is the series empty?
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Values in time order, as an owned vector
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Timestamp of the first point
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.points.first().map(|p| p.time)
    }

    /// Timestamp of the last point
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.points.last().map(|p| p.time)
    }

    /// Iterate over points in time order
    pub fn iter(&self) -> std::slice::Iter<'_, TimePoint> {
        self.points.iter()
    }
}

impl fmt::Display for TimeSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeSeries {{ name: {}, points: {} }}", self.name, self.points.len())
    }
}
