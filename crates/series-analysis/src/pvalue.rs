//! Two-sided p-values from the Student-t distribution

use series_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Two-sided p-value for a t-statistic with the given degrees of freedom
///
/// Degenerate inputs get their limiting values rather than an error: with
/// no degrees of freedom (or an infinite statistic) a nonzero statistic
/// maps to 0 and a zero statistic to 1, matching the exact-fit and
/// no-signal cases the analyzers produce.
pub(crate) fn two_sided_p(t_statistic: f64, degrees_of_freedom: f64) -> Result<f64> {
    if degrees_of_freedom <= 0.0 || !t_statistic.is_finite() {
        return Ok(if t_statistic == 0.0 { 1.0 } else { 0.0 });
    }

    let t_dist = StudentsT::new(0.0, 1.0, degrees_of_freedom)
        .map_err(|e| Error::Computation(format!("Failed to create t-distribution: {e}")))?;

    Ok(2.0 * (1.0 - t_dist.cdf(t_statistic.abs())))
}
