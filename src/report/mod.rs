//! Result rendering
//!
//! Turns a [`ResultsRecord`] into human-readable `Label: value` lines. Only
//! metrics present in the record are rendered, always in the same order.
//! A mode renders as a comma-separated list or as `No mode`, and an
//! undefined skewness as `undefined`.
//!
//! [`ResultsRecord`]: crate::statistics::ResultsRecord

mod render;

pub use render::{format_mode, label, Report, ReportLine, NO_MODE, UNDEFINED};
