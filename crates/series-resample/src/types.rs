//! Bucket units and reducers for calendar aggregation

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use series_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Calendar interval a point's timestamp is truncated into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BucketUnit {
    /// Calendar day (UTC midnight)
    Day,
    /// Calendar month (first day of the month)
    Month,
    /// Calendar year (January 1st)
    Year,
}

impl BucketUnit {
    /// Short lowercase name, matching the `FromStr` spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Truncate a timestamp to the start of its bucket
    pub fn truncate(&self, time: DateTime<Utc>) -> DateTime<Utc> {
        let (year, month, day) = match self {
            Self::Day => (time.year(), time.month(), time.day()),
            Self::Month => (time.year(), time.month(), 1),
            Self::Year => (time.year(), 1, 1),
        };
        // Midnight of a valid calendar date always exists
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }
}

impl fmt::Display for BucketUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BucketUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(Error::InvalidParameter(format!(
                "Unknown bucket unit '{other}' (expected day, month or year)"
            ))),
        }
    }
}

/// Reduction applied to the values collected in one bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reducer {
    /// Arithmetic mean of the bucket
    Mean,
    /// Largest value in the bucket
    Max,
    /// Smallest value in the bucket
    Min,
    /// Sum of the bucket
    Sum,
}

impl Reducer {
    /// Short lowercase name, matching the `FromStr` spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Max => "max",
            Self::Min => "min",
            Self::Sum => "sum",
        }
    }

    /// Reduce a non-empty bucket to a single value
    pub fn apply(&self, values: &[f64]) -> f64 {
        debug_assert!(!values.is_empty(), "buckets are never empty");
        match self {
            Self::Mean => values.iter().sum::<f64>() / values.len() as f64,
            Self::Max => values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b)),
            Self::Min => values.iter().fold(f64::INFINITY, |a, &b| a.min(b)),
            Self::Sum => values.iter().sum(),
        }
    }
}

impl fmt::Display for Reducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Reducer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mean" => Ok(Self::Mean),
            "max" => Ok(Self::Max),
            "min" => Ok(Self::Min),
            "sum" => Ok(Self::Sum),
            other => Err(Error::InvalidParameter(format!(
                "Unknown reducer '{other}' (expected mean, max, min or sum)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_truncation() {
        let t = Utc.with_ymd_and_hms(2024, 7, 19, 14, 35, 9).unwrap();

        assert_eq!(
            BucketUnit::Day.truncate(t),
            Utc.with_ymd_and_hms(2024, 7, 19, 0, 0, 0).unwrap()
        );
        assert_eq!(
            BucketUnit::Month.truncate(t),
            Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            BucketUnit::Year.truncate(t),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_bucket_unit_parsing() {
        assert_eq!("day".parse::<BucketUnit>().unwrap(), BucketUnit::Day);
        assert_eq!("Month".parse::<BucketUnit>().unwrap(), BucketUnit::Month);
        assert_eq!("YEAR".parse::<BucketUnit>().unwrap(), BucketUnit::Year);
        assert!("week".parse::<BucketUnit>().is_err());
        assert!("".parse::<BucketUnit>().is_err());
    }

    #[test]
    fn test_reducer_parsing() {
        assert_eq!("mean".parse::<Reducer>().unwrap(), Reducer::Mean);
        assert_eq!("SUM".parse::<Reducer>().unwrap(), Reducer::Sum);
        assert!("median".parse::<Reducer>().is_err());
    }

    #[test]
    fn test_reducer_apply() {
        let values = [3.0, 1.0, 4.0, 1.5];
        assert_eq!(Reducer::Mean.apply(&values), 9.5 / 4.0);
        assert_eq!(Reducer::Max.apply(&values), 4.0);
        assert_eq!(Reducer::Min.apply(&values), 1.0);
        assert_eq!(Reducer::Sum.apply(&values), 9.5);
    }

    #[test]
    fn test_display_matches_parse() {
        for unit in [BucketUnit::Day, BucketUnit::Month, BucketUnit::Year] {
            assert_eq!(unit.to_string().parse::<BucketUnit>().unwrap(), unit);
        }
        for reducer in [Reducer::Mean, Reducer::Max, Reducer::Min, Reducer::Sum] {
            assert_eq!(reducer.to_string().parse::<Reducer>().unwrap(), reducer);
        }
    }
}
