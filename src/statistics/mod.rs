//! Frequency-weighted descriptive statistics
//!
//! This module provides the six population metrics over a [`Dataset`],
//! each as a standalone function, plus [`compute`] to evaluate any subset
//! of them in one call.
//!
//! # Example
//!
//! ```
//! use freqstats::dataset::Dataset;
//! use freqstats::statistics::{compute_named, Mode};
//!
//! let ds = Dataset::from_observations(&[1.0, 2.0, 2.0, 3.0, 3.0, 4.0]).unwrap();
//! let record = compute_named(&ds, ["all"]).unwrap();
//!
//! println!("Mean: {:?}", record.mean);
//! println!("Median: {:?}", record.median);
//! assert_eq!(record.mode, Some(Mode::Values(vec![2.0, 3.0])));
//! ```
//!
//! [`Dataset`]: crate::dataset::Dataset

mod engine;
mod location;
mod moments;

pub use engine::{compute, compute_named, parse_selection, Metric, ResultsRecord};
pub use location::{median, mode, Mode};
pub use moments::{mean, sample_skewness, skewness, std_dev, variance};
