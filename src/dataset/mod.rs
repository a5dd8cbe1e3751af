//! Frequency-weighted datasets
//!
//! Every computation in this crate runs over a [`Dataset`]: a table of distinct
//! values, each carrying how many times it was observed.
//!
//! # Example
//!
//! ```
//! use freqstats::dataset::{Dataset, FrequencyEntry};
//!
//! // Pre-aggregated table
//! let table = Dataset::new(vec![
//!     FrequencyEntry::new(2.0, 3).unwrap(),
//!     FrequencyEntry::new(4.0, 1).unwrap(),
//! ])
//! .unwrap();
//! assert_eq!(table.total_frequency(), 4);
//!
//! // Raw observations, grouped into the same shape
//! let raw = Dataset::from_observations(&[2.0, 4.0, 2.0, 2.0]).unwrap();
//! assert_eq!(raw, table);
//! ```

mod table;

pub use table::{Dataset, FrequencyEntry};
