//! Text input normalization
//!
//! Turns user-supplied text into a validated [`Dataset`]: either a
//! comma-separated list of raw observations, or a two-column
//! `value,frequency` table with one row per line.
//!
//! Non-numeric tokens and rows are skipped rather than rejected, so a CSV
//! header line is simply ignored.
//!
//! # Example
//!
//! ```
//! use freqstats::input::{parse, DataKind};
//!
//! let raw = parse(DataKind::Ungrouped, "3, 1, 4, 1, 5").unwrap();
//! assert_eq!(raw.total_frequency(), 5);
//!
//! let table = parse(DataKind::Grouped, "value,frequency\n2,3\n4,1\n").unwrap();
//! assert_eq!(table.total_frequency(), 4);
//! ```
//!
//! [`Dataset`]: crate::dataset::Dataset

mod parse;

pub use parse::{parse, parse_observations, parse_table, DataKind, ParseError};
