//! Frequency-weighted moments (mean, variance, standard deviation, skewness)
//!
//! All moments are population moments: the denominator is the total
//! frequency N, treating the dataset as the whole population. The one
//! exception is [`sample_skewness`], the adjusted Fisher-Pearson coefficient,
//! which is offered as a separately named metric.

use crate::dataset::Dataset;
use crate::error::{Result, StatsError};
use crate::math;

/// Weighted arithmetic mean: `Σ(value·frequency) / N`
///
/// # Example
///
/// ```
/// use freqstats::dataset::Dataset;
/// use freqstats::statistics::mean;
///
/// let ds = Dataset::from_pairs(&[(2.0, 3), (4.0, 1)]).unwrap();
/// assert_eq!(mean(&ds).unwrap(), 2.5);
/// ```
pub fn mean(dataset: &Dataset) -> Result<f64> {
    dataset.ensure_non_empty()?;
    finite("mean", mean_unchecked(dataset))
}

/// Population variance: `Σ(frequency·(value−mean)²) / N`
///
/// Returns [`StatsError::UndefinedStatistic`] when the spread is too wide for
/// the result to fit in an `f64`.
pub fn variance(dataset: &Dataset) -> Result<f64> {
    dataset.ensure_non_empty()?;
    finite("variance", variance_about(dataset, mean_unchecked(dataset)))
}

/// Population standard deviation, exactly `sqrt(variance)`
pub fn std_dev(dataset: &Dataset) -> Result<f64> {
    variance(dataset).map(math::sqrt)
}

/// Population skewness (weighted third standardized moment)
///
/// `Σ(frequency·((value−mean)/stdDev)³) / N`
///
/// Returns [`StatsError::UndefinedStatistic`] when every observation has the
/// same value, since the standard deviation is then zero.
pub fn skewness(dataset: &Dataset) -> Result<f64> {
    dataset.ensure_non_empty()?;
    let mean = mean_unchecked(dataset);
    let sd = math::sqrt(variance_about(dataset, mean));
    skewness_about(dataset, mean, sd)
}

/// Sample skewness with the `N / ((N−1)(N−2))` correction
///
/// Standardizes with the sample (N−1) standard deviation. Undefined for
/// fewer than three observations or when the standard deviation is zero.
pub fn sample_skewness(dataset: &Dataset) -> Result<f64> {
    dataset.ensure_non_empty()?;
    let mean = mean_unchecked(dataset);
    sample_skewness_about(dataset, mean, variance_about(dataset, mean))
}

/// Error unless `value` is finite
pub(crate) fn finite(metric: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StatsError::UndefinedStatistic {
            metric,
            reason: "result is not representable as a finite f64",
        })
    }
}

pub(crate) fn mean_unchecked(dataset: &Dataset) -> f64 {
    // A lone value is its own mean; dividing v·f by f may round away from v
    if let [only] = dataset.entries() {
        return only.value();
    }

    let n = dataset.total_frequency() as f64;
    let total: f64 = dataset.entries().iter().map(|e| e.weighted_value()).sum();
    if total.is_finite() {
        return total / n;
    }

    // v·f overflowed; weights f/N sum to 1 so the partial sums stay in range
    dataset
        .entries()
        .iter()
        .map(|e| e.value() * (e.frequency() as f64 / n))
        .sum()
}

pub(crate) fn variance_about(dataset: &Dataset, mean: f64) -> f64 {
    if dataset.distinct_count() == 1 {
        return 0.0;
    }

    let sum_sq: f64 = dataset
        .entries()
        .iter()
        .map(|e| e.frequency() as f64 * math::powi(e.value() - mean, 2))
        .sum();
    sum_sq / dataset.total_frequency() as f64
}

pub(crate) fn skewness_about(dataset: &Dataset, mean: f64, sd: f64) -> Result<f64> {
    if sd == 0.0 {
        return Err(StatsError::UndefinedStatistic {
            metric: "skewness",
            reason: "standard deviation is zero",
        });
    }
    if !mean.is_finite() || !sd.is_finite() {
        return Err(StatsError::UndefinedStatistic {
            metric: "skewness",
            reason: "standard deviation is not finite",
        });
    }
    finite(
        "skewness",
        standardized_cubes(dataset, mean, sd) / dataset.total_frequency() as f64,
    )
}

pub(crate) fn sample_skewness_about(dataset: &Dataset, mean: f64, variance: f64) -> Result<f64> {
    let n = dataset.total_frequency();
    if n < 3 {
        return Err(StatsError::UndefinedStatistic {
            metric: "sample skewness",
            reason: "fewer than three observations",
        });
    }
    if variance == 0.0 {
        return Err(StatsError::UndefinedStatistic {
            metric: "sample skewness",
            reason: "standard deviation is zero",
        });
    }

    if !mean.is_finite() || !variance.is_finite() {
        return Err(StatsError::UndefinedStatistic {
            metric: "sample skewness",
            reason: "standard deviation is not finite",
        });
    }

    let n = n as f64;
    // Bessel-corrected spread from the population variance
    let sd = math::sqrt(variance * n / (n - 1.0));
    let correction = n / ((n - 1.0) * (n - 2.0));
    finite(
        "sample skewness",
        correction * standardized_cubes(dataset, mean, sd),
    )
}

fn standardized_cubes(dataset: &Dataset, mean: f64, sd: f64) -> f64 {
    dataset
        .entries()
        .iter()
        .map(|e| e.frequency() as f64 * math::powi((e.value() - mean) / sd, 3))
        .sum()
}
