//! Core traits for series analyzers
//!
//! Every analyzer is a pure function over one or two read-only series:
//! inputs are never mutated and the same series may be handed to several
//! analyzers concurrently.

use series_core::{Result, TimeSeries};

/// Properties of an analyzer that don't depend on its input
pub trait AnalyzerProperties {
    /// Name of the analysis algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Minimum number of points the analyzer requires
    fn minimum_sample_size(&self) -> usize;
}

/// An analyzer over a single series
pub trait SeriesAnalyzer: AnalyzerProperties {
    /// Result record produced by this analyzer
    type Output;

    /// Analyze the series, producing a new result record
    ///
    /// Fails with `InsufficientData` when the series is shorter than
    /// [`AnalyzerProperties::minimum_sample_size`].
    fn analyze(&self, series: &TimeSeries) -> Result<Self::Output>;
}

/// An analyzer comparing two independent series
pub trait TwoSampleAnalyzer: AnalyzerProperties {
    /// Result record produced by this analyzer
    type Output;

    /// Compare a "before" series against an "after" series
    fn compare(&self, before: &TimeSeries, after: &TimeSeries) -> Result<Self::Output>;
}
