//! Metric selection and the `compute` entry point

use core::fmt;
use core::str::FromStr;

use super::location::{self, Mode};
use super::moments;
use crate::dataset::Dataset;
use crate::error::{Result, StatsError};
use crate::math;

#[cfg(feature = "std")]
use std::{string::ToString, vec::Vec};

#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec::Vec};

/// A statistic the engine knows how to compute
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Metric {
    Mean,
    Median,
    Mode,
    Variance,
    StdDev,
    /// Population skewness
    Skewness,
    /// Sample-corrected skewness, never selected by `all`
    SampleSkewness,
}

impl Metric {
    /// The population metrics selected by the `all` keyword
    pub const ALL: [Metric; 6] = [
        Metric::Mean,
        Metric::Median,
        Metric::Mode,
        Metric::Variance,
        Metric::StdDev,
        Metric::Skewness,
    ];

    /// Canonical request name
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Mean => "mean",
            Metric::Median => "median",
            Metric::Mode => "mode",
            Metric::Variance => "variance",
            Metric::StdDev => "stdDev",
            Metric::Skewness => "skewness",
            Metric::SampleSkewness => "sampleSkewness",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mean" => Ok(Metric::Mean),
            "median" => Ok(Metric::Median),
            "mode" => Ok(Metric::Mode),
            "variance" => Ok(Metric::Variance),
            "stdDev" | "std_dev" => Ok(Metric::StdDev),
            "skewness" => Ok(Metric::Skewness),
            "sampleSkewness" | "sample_skewness" => Ok(Metric::SampleSkewness),
            other => Err(StatsError::InvalidMetric(other.to_string())),
        }
    }
}

/// Turn user-facing metric names into a metric list
///
/// `all` expands to [`Metric::ALL`]. Duplicates are dropped and request order
/// is kept. Unknown names fail with [`StatsError::InvalidMetric`]; an empty
/// selection fails with [`StatsError::NoMetricsRequested`].
pub fn parse_selection<'a, I>(names: I) -> Result<Vec<Metric>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut selected: Vec<Metric> = Vec::new();
    let mut push = |metric: Metric| {
        if !selected.contains(&metric) {
            selected.push(metric);
        }
    };

    let mut any = false;
    for name in names {
        any = true;
        if name == "all" {
            Metric::ALL.iter().copied().for_each(&mut push);
        } else {
            push(name.parse()?);
        }
    }

    if !any {
        return Err(StatsError::NoMetricsRequested);
    }
    Ok(selected)
}

/// The requested statistics for one dataset
///
/// Fields for metrics that were not requested are `None`. Skewness values
/// carry [`StatsError::UndefinedStatistic`] when they do not exist for the
/// dataset, leaving the caller to report or drop them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultsRecord {
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub mode: Option<Mode>,
    pub variance: Option<f64>,
    pub std_dev: Option<f64>,
    pub skewness: Option<Result<f64>>,
    pub sample_skewness: Option<Result<f64>>,
}

impl ResultsRecord {
    /// Check if no metric is present
    pub fn is_empty(&self) -> bool {
        self.metrics().next().is_none()
    }

    /// Metrics present in this record, in display order
    pub fn metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        [
            (Metric::Mean, self.mean.is_some()),
            (Metric::Median, self.median.is_some()),
            (Metric::Mode, self.mode.is_some()),
            (Metric::Variance, self.variance.is_some()),
            (Metric::StdDev, self.std_dev.is_some()),
            (Metric::Skewness, self.skewness.is_some()),
            (Metric::SampleSkewness, self.sample_skewness.is_some()),
        ]
        .into_iter()
        .filter_map(|(metric, present)| present.then_some(metric))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ResultsRecord {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let defined = |r: &Result<f64>| r.as_ref().ok().copied();

        let mut state = serializer.serialize_struct("ResultsRecord", self.metrics().count())?;
        if let Some(mean) = &self.mean {
            state.serialize_field("mean", mean)?;
        }
        if let Some(median) = &self.median {
            state.serialize_field("median", median)?;
        }
        if let Some(mode) = &self.mode {
            state.serialize_field("mode", mode)?;
        }
        if let Some(variance) = &self.variance {
            state.serialize_field("variance", variance)?;
        }
        if let Some(std_dev) = &self.std_dev {
            state.serialize_field("stdDev", std_dev)?;
        }
        if let Some(skewness) = &self.skewness {
            state.serialize_field("skewness", &defined(skewness))?;
        }
        if let Some(skewness) = &self.sample_skewness {
            state.serialize_field("sampleSkewness", &defined(skewness))?;
        }
        state.end()
    }
}

/// Compute the requested metrics over a dataset
///
/// Fails with [`StatsError::InvalidDataset`] for an empty dataset, and with
/// [`StatsError::UndefinedStatistic`] when a requested mean, variance or
/// standard deviation overflows `f64`. An empty metric list yields an empty
/// record. The mean and variance are computed once and shared by every metric
/// that needs them.
///
/// # Example
///
/// ```
/// use freqstats::dataset::Dataset;
/// use freqstats::statistics::{compute, Metric, Mode};
///
/// let ds = Dataset::from_pairs(&[(2.0, 3), (4.0, 1)]).unwrap();
/// let record = compute(&ds, &Metric::ALL).unwrap();
///
/// assert_eq!(record.mean, Some(2.5));
/// assert_eq!(record.median, Some(2.0));
/// assert_eq!(record.mode, Some(Mode::Values(vec![2.0])));
/// assert_eq!(record.variance, Some(0.75));
/// ```
pub fn compute(dataset: &Dataset, metrics: &[Metric]) -> Result<ResultsRecord> {
    dataset.ensure_non_empty()?;

    log::debug!(
        "computing {} metric(s) over {} observations ({} distinct values)",
        metrics.len(),
        dataset.total_frequency(),
        dataset.distinct_count()
    );

    let mean = moments::mean_unchecked(dataset);
    let mut cached_variance: Option<f64> = None;
    let mut variance =
        || *cached_variance.get_or_insert_with(|| moments::variance_about(dataset, mean));

    let mut record = ResultsRecord::default();
    for metric in metrics {
        match metric {
            Metric::Mean => record.mean = Some(moments::finite("mean", mean)?),
            Metric::Median => record.median = Some(location::median(dataset)?),
            Metric::Mode => record.mode = Some(location::mode(dataset)?),
            Metric::Variance => {
                record.variance = Some(moments::finite("variance", variance())?);
            }
            Metric::StdDev => {
                let sd = math::sqrt(variance());
                record.std_dev = Some(moments::finite("standard deviation", sd)?);
            }
            Metric::Skewness => {
                let sd = math::sqrt(variance());
                record.skewness = Some(moments::skewness_about(dataset, mean, sd));
            }
            Metric::SampleSkewness => {
                record.sample_skewness =
                    Some(moments::sample_skewness_about(dataset, mean, variance()));
            }
        }
    }

    Ok(record)
}

/// Parse metric names with [`parse_selection`], then [`compute`]
///
/// ```
/// use freqstats::dataset::Dataset;
/// use freqstats::error::StatsError;
/// use freqstats::statistics::compute_named;
///
/// let ds = Dataset::from_pairs(&[(1.0, 1), (2.0, 1)]).unwrap();
/// assert_eq!(compute_named(&ds, ["median"]).unwrap().median, Some(1.5));
/// assert!(matches!(
///     compute_named(&ds, ["bogus"]),
///     Err(StatsError::InvalidMetric(_))
/// ));
/// ```
pub fn compute_named<'a, I>(dataset: &Dataset, names: I) -> Result<ResultsRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    let metrics = parse_selection(names)?;
    compute(dataset, &metrics)
}
