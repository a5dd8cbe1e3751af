//! Chart data for the frequency distribution
//!
//! Builds a renderer-neutral [`ChartSpec`] from a dataset: distinct values as
//! categories, frequencies as magnitudes. Drawing, colours and image export
//! belong to the caller's charting backend.
//!
//! # Example
//!
//! ```
//! use freqstats::chart::{ChartKind, ChartSpec};
//! use freqstats::dataset::Dataset;
//!
//! let ds = Dataset::from_observations(&[1.0, 2.0, 2.0, 3.0]).unwrap();
//! let chart = ChartSpec::from_dataset(&ds, "histogram".parse().unwrap()).unwrap();
//!
//! assert_eq!(chart.kind(), ChartKind::Histogram);
//! assert_eq!(chart.render_type(), "bar");
//! assert_eq!(chart.magnitudes(), &[1, 2, 1]);
//! ```

mod spec;

pub use spec::{ChartKind, ChartSpec, UnknownChartKind, SERIES_LABEL};
