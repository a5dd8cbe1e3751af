//! Chart description built from a dataset

use core::fmt;
use core::str::FromStr;

use crate::dataset::Dataset;
use crate::error::Result;

#[cfg(feature = "std")]
use std::{format, string::String, string::ToString, vec::Vec};

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, string::ToString, vec::Vec};

/// Label of the single data series
pub const SERIES_LABEL: &str = "Frequency";

/// How the frequency distribution is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChartKind {
    /// Bars per distinct value
    Histogram,
    /// Proportional slices
    Pie,
}

impl ChartKind {
    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Histogram => "histogram",
            ChartKind::Pie => "pie",
        }
    }

    /// Chart type understood by the drawing backend
    pub fn render_type(&self) -> &'static str {
        match self {
            ChartKind::Histogram => "bar",
            ChartKind::Pie => "pie",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Chart kind name was not `histogram` or `pie`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chart kind {0:?}")]
pub struct UnknownChartKind(pub String);

impl FromStr for ChartKind {
    type Err = UnknownChartKind;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "histogram" => Ok(ChartKind::Histogram),
            "pie" => Ok(ChartKind::Pie),
            other => Err(UnknownChartKind(other.to_string())),
        }
    }
}

/// Everything a renderer needs to draw the distribution
///
/// Categories are the distinct values in ascending order and magnitudes their
/// frequencies. Independent of any computed statistics.
///
/// # Example
///
/// ```
/// use freqstats::chart::{ChartKind, ChartSpec};
/// use freqstats::dataset::Dataset;
///
/// let ds = Dataset::from_pairs(&[(4.0, 1), (2.0, 3)]).unwrap();
/// let chart = ChartSpec::from_dataset(&ds, ChartKind::Pie).unwrap();
///
/// assert_eq!(chart.labels(), &[2.0, 4.0]);
/// assert_eq!(chart.share(0), Some(0.75));
/// assert_eq!(chart.export_file_name(), "pie.png");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartSpec {
    kind: ChartKind,
    labels: Vec<f64>,
    magnitudes: Vec<u64>,
    total: u64,
}

impl ChartSpec {
    /// Describe `dataset` as a chart of the given kind
    ///
    /// Fails for an empty dataset, which has nothing to draw.
    pub fn from_dataset(dataset: &Dataset, kind: ChartKind) -> Result<Self> {
        dataset.ensure_non_empty()?;
        Ok(Self {
            kind,
            labels: dataset.values().collect(),
            magnitudes: dataset.frequencies().collect(),
            total: dataset.total_frequency(),
        })
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    /// Category values, ascending
    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    /// Frequencies, aligned with [`labels`](Self::labels)
    pub fn magnitudes(&self) -> &[u64] {
        &self.magnitudes
    }

    pub fn series_label(&self) -> &'static str {
        SERIES_LABEL
    }

    /// Value axis starts at zero for histograms; pies have no axis
    pub fn begin_at_zero(&self) -> bool {
        self.kind == ChartKind::Histogram
    }

    pub fn render_type(&self) -> &'static str {
        self.kind.render_type()
    }

    /// Fraction of all observations falling in category `index`
    pub fn share(&self, index: usize) -> Option<f64> {
        self.magnitudes
            .get(index)
            .map(|&m| m as f64 / self.total as f64)
    }

    /// Default file name for an exported image
    pub fn export_file_name(&self) -> String {
        format!("{}.png", self.kind.name())
    }
}
