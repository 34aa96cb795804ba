//! Bucket-and-reduce resampling
//!
//! Groups a series' points into calendar buckets and reduces each bucket to
//! a single output point. Because the input is time-ordered, buckets are
//! grouped by order of first appearance and come out in ascending time
//! order with indices reassigned from zero.

use crate::types::{BucketUnit, Reducer};
use chrono::{DateTime, Utc};
use series_core::{Error, Result, TimeSeries};

/// Aggregate a series into calendar buckets
///
/// Each point's timestamp is truncated to the start of its bucket, bucket
/// values are reduced with `reducer`, and the output carries one point per
/// distinct bucket, timestamped at the bucket start.
pub fn aggregate(series: &TimeSeries, unit: BucketUnit, reducer: Reducer) -> Result<TimeSeries> {
    if series.is_empty() {
        return Err(Error::empty_series());
    }

    let mut buckets: Vec<(DateTime<Utc>, Vec<f64>)> = Vec::new();
    for point in series.iter() {
        let key = unit.truncate(point.time);
        match buckets.last_mut() {
            Some((current, values)) if *current == key => values.push(point.value),
            _ => buckets.push((key, vec![point.value])),
        }
    }

    let samples: Vec<(DateTime<Utc>, f64)> = buckets
        .into_iter()
        .map(|(key, values)| (key, reducer.apply(&values)))
        .collect();

    log::debug!(
        "Aggregated {} ({} points) into {} {} buckets with {}",
        series.name(),
        series.len(),
        samples.len(),
        unit,
        reducer
    );
    Ok(TimeSeries::from_samples(
        format!("{}-{}-{}", series.name(), reducer.as_str(), unit.as_str()),
        samples,
    ))
}
