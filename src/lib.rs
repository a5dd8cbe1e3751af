//! # Freqstats
//!
//! Frequency-weighted descriptive statistics for Rust.
//!
//! Freqstats computes mean, median, mode, variance, standard deviation and
//! skewness over a dataset given either as raw observations or as a
//! pre-aggregated (value, frequency) table.
//!
//! ## Features
//!
//! - **Weighted Statistics**: every metric works directly on (value, frequency) pairs
//! - **Population Moments**: variance and skewness use the total count N as denominator
//! - **Explicit Edge Cases**: empty data, unknown metrics and undefined skewness are errors, never silent NaNs
//! - **Deterministic**: results depend only on the set of entries, never on their order
//!
//! ## Quick Start
//!
//! ```rust
//! use freqstats::prelude::*;
//!
//! // Pre-aggregated table: value 2 seen three times, value 4 once
//! let ds = Dataset::from_pairs(&[(2.0, 3), (4.0, 1)]).unwrap();
//!
//! let record = compute(&ds, &Metric::ALL).unwrap();
//! assert_eq!(record.mean, Some(2.5));
//! assert_eq!(record.median, Some(2.0));
//! assert_eq!(record.variance, Some(0.75));
//! ```
//!
//! ## Selecting Metrics by Name
//!
//! ```rust
//! use freqstats::dataset::Dataset;
//! use freqstats::error::StatsError;
//! use freqstats::statistics::{compute_named, Mode};
//!
//! let ds = Dataset::from_observations(&[1.0, 2.0, 3.0]).unwrap();
//!
//! let record = compute_named(&ds, ["mode", "median"]).unwrap();
//! assert_eq!(record.mode, Some(Mode::NoMode));
//! assert_eq!(record.median, Some(2.0));
//!
//! assert!(matches!(
//!     compute_named(&ds, ["bogus"]),
//!     Err(StatsError::InvalidMetric(_))
//! ));
//! ```
//!
//! ## Feature Flags
//!
//! Collaborators around the engine (pick what you need):
//! - `input` (default): parse comma-separated or `value,frequency` text
//! - `report` (default): render results as `Label: value` lines
//! - `chart` (default): chart data for histogram and pie layouts
//! - `full`: Enable everything
//!
//! Platform features:
//! - `std` (default): Standard library support
//! - `serde`: Enable serialization

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Engine always available
pub mod dataset;
pub mod error;
pub mod statistics;

mod math;

#[cfg(feature = "input")]
#[cfg_attr(docsrs, doc(cfg(feature = "input")))]
pub mod input;

#[cfg(feature = "report")]
#[cfg_attr(docsrs, doc(cfg(feature = "report")))]
pub mod report;

#[cfg(feature = "chart")]
#[cfg_attr(docsrs, doc(cfg(feature = "chart")))]
pub mod chart;

pub mod prelude {
    pub use crate::dataset::{Dataset, FrequencyEntry};
    pub use crate::error::StatsError;
    pub use crate::statistics::{compute, compute_named, Metric, Mode, ResultsRecord};

    #[cfg(feature = "input")]
    pub use crate::input::{parse, DataKind};

    #[cfg(feature = "report")]
    pub use crate::report::Report;

    #[cfg(feature = "chart")]
    pub use crate::chart::{ChartKind, ChartSpec};
}

pub use dataset::{Dataset, FrequencyEntry};
pub use error::StatsError;
pub use statistics::{compute, ResultsRecord};
