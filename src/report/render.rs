//! Label/value rendering of a [`ResultsRecord`]

use core::fmt;

use crate::error::Result;
use crate::statistics::{Metric, Mode, ResultsRecord};

#[cfg(feature = "std")]
use std::{string::String, string::ToString, vec::Vec};

#[cfg(not(feature = "std"))]
use alloc::{string::String, string::ToString, vec::Vec};

/// Text shown in place of a mode when every value is equally frequent
pub const NO_MODE: &str = "No mode";

/// Text shown for a statistic that does not exist for the dataset
pub const UNDEFINED: &str = "undefined";

/// Human-readable label for a metric
pub fn label(metric: Metric) -> &'static str {
    match metric {
        Metric::Mean => "Mean",
        Metric::Median => "Median",
        Metric::Mode => "Mode",
        Metric::Variance => "Variance",
        Metric::StdDev => "Standard Deviation",
        Metric::Skewness => "Skewness",
        Metric::SampleSkewness => "Sample Skewness",
    }
}

/// Render a mode, distinguishing [`Mode::NoMode`] from a value list
pub fn format_mode(mode: &Mode) -> String {
    match mode {
        Mode::NoMode => NO_MODE.to_string(),
        Mode::Values(values) => values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn format_defined(value: &Result<f64>) -> String {
    match value {
        Ok(v) => v.to_string(),
        Err(_) => UNDEFINED.to_string(),
    }
}

/// One rendered result
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportLine {
    pub metric: Metric,
    pub label: &'static str,
    pub value: String,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Rendered results, one line per present metric in display order
///
/// # Example
///
/// ```
/// use freqstats::dataset::Dataset;
/// use freqstats::report::Report;
/// use freqstats::statistics::{compute, Metric};
///
/// let ds = Dataset::from_pairs(&[(1.0, 1), (2.0, 1), (3.0, 1)]).unwrap();
/// let record = compute(&ds, &[Metric::Mode, Metric::Mean]).unwrap();
///
/// assert_eq!(Report::from(&record).to_string(), "Mean: 2\nMode: No mode");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<ReportLine>,
}

impl Report {
    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Rendered value for a metric, if it was part of the record
    pub fn get(&self, metric: Metric) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.metric == metric)
            .map(|line| line.value.as_str())
    }
}

impl From<&ResultsRecord> for Report {
    fn from(record: &ResultsRecord) -> Self {
        let lines = record
            .metrics()
            .filter_map(|metric| {
                let value = match metric {
                    Metric::Mean => record.mean.map(|v| v.to_string()),
                    Metric::Median => record.median.map(|v| v.to_string()),
                    Metric::Mode => record.mode.as_ref().map(format_mode),
                    Metric::Variance => record.variance.map(|v| v.to_string()),
                    Metric::StdDev => record.std_dev.map(|v| v.to_string()),
                    Metric::Skewness => record.skewness.as_ref().map(format_defined),
                    Metric::SampleSkewness => {
                        record.sample_skewness.as_ref().map(format_defined)
                    }
                }?;
                Some(ReportLine {
                    metric,
                    label: label(metric),
                    value,
                })
            })
            .collect();
        Report { lines }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
