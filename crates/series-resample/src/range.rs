//! Time range filtering
//!
//! Returns the contiguous run of points falling in a half-open time range.
//! This is a view over the original series, so the points keep their
//! original sequence indices rather than being renumbered.

use chrono::{DateTime, Utc};
use series_core::{Error, Result, TimeSeries};

/// Filter a series to the points with `start <= time < end`
///
/// The result may be empty; `start` after `end` is rejected.
pub fn filter_range(
    series: &TimeSeries,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<TimeSeries> {
    if start > end {
        return Err(Error::InvalidParameter(format!(
            "Range start {start} is after range end {end}"
        )));
    }

    let points = series
        .iter()
        .filter(|p| p.time >= start && p.time < end)
        .cloned()
        .collect();

    Ok(TimeSeries::from_points(series.name().to_string(), points))
}
