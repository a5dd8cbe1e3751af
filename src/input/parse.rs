//! Parsers for ungrouped and grouped text input

use core::fmt;
use core::str::FromStr;

use crate::dataset::Dataset;
use crate::error::StatsError;

#[cfg(feature = "std")]
use std::{string::String, string::ToString, vec::Vec};

#[cfg(not(feature = "std"))]
use alloc::{string::String, string::ToString, vec::Vec};

/// Error produced while normalizing text input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input was blank
    #[error("no data supplied")]
    Empty,
    /// Input had content, but no usable numbers
    #[error("input does not contain valid numeric data")]
    NoNumericData,
    /// A table row carried a frequency that is not a whole count
    #[error("line {line}: frequency {raw:?} is not a non-negative integer")]
    InvalidFrequency { line: usize, raw: String },
    /// Data kind name was not `ungrouped` or `grouped`
    #[error("unknown data kind {0:?}")]
    UnknownKind(String),
    /// Parsed values did not form a valid dataset
    #[error(transparent)]
    Dataset(#[from] StatsError),
}

/// Shape of the text being supplied
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DataKind {
    /// Comma-separated raw observations
    Ungrouped,
    /// `value,frequency` rows
    Grouped,
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataKind::Ungrouped => f.write_str("ungrouped"),
            DataKind::Grouped => f.write_str("grouped"),
        }
    }
}

impl FromStr for DataKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ungrouped" => Ok(DataKind::Ungrouped),
            "grouped" => Ok(DataKind::Grouped),
            other => Err(ParseError::UnknownKind(other.to_string())),
        }
    }
}

/// Parse `text` according to `kind`
pub fn parse(kind: DataKind, text: &str) -> Result<Dataset, ParseError> {
    match kind {
        DataKind::Ungrouped => parse_observations(text),
        DataKind::Grouped => parse_table(text),
    }
}

/// Parse comma-separated observations and group them into a dataset
///
/// Whitespace around tokens is ignored. Empty and non-numeric tokens are
/// skipped, as are `NaN` and infinities.
pub fn parse_observations(text: &str) -> Result<Dataset, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut observations = Vec::new();
    for (index, token) in text.split(',').map(str::trim).enumerate() {
        match parse_number(token) {
            Some(value) => observations.push(value),
            None => log::debug!("skipping non-numeric token {} ({:?})", index + 1, token),
        }
    }

    if observations.is_empty() {
        return Err(ParseError::NoNumericData);
    }
    Ok(Dataset::from_observations(&observations)?)
}

/// Parse `value,frequency` rows into a dataset
///
/// Rows where either column is missing or non-numeric are skipped. A numeric
/// frequency must be a whole, non-negative count; rows with frequency 0 add
/// nothing and are dropped. Rows repeating a value are merged by summing
/// their frequencies.
pub fn parse_table(text: &str) -> Result<Dataset, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut rows: Vec<(f64, u64)> = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let mut columns = line.split(',').map(str::trim);

        let (Some(value), Some((raw, frequency))) = (
            columns.next().and_then(parse_number),
            columns.next().and_then(|raw| parse_number(raw).map(|f| (raw, f))),
        ) else {
            log::debug!("skipping non-numeric row on line {}", line_no);
            continue;
        };

        let count = whole_count(frequency).ok_or_else(|| ParseError::InvalidFrequency {
            line: line_no,
            raw: raw.to_string(),
        })?;

        if count == 0 {
            log::debug!("dropping zero-frequency row on line {}", line_no);
            continue;
        }
        rows.push((value, count));
    }

    if rows.is_empty() {
        return Err(ParseError::NoNumericData);
    }

    rows.sort_by(|a, b| a.0.total_cmp(&b.0));
    let mut merged: Vec<(f64, u64)> = Vec::with_capacity(rows.len());
    for (value, count) in rows {
        match merged.last_mut() {
            Some(last) if last.0 == value => {
                last.1 = last.1.checked_add(count).ok_or_else(|| {
                    StatsError::invalid_dataset("total frequency overflows u64")
                })?;
            }
            _ => merged.push((value, count)),
        }
    }

    Ok(Dataset::from_pairs(&merged)?)
}

fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn whole_count(frequency: f64) -> Option<u64> {
    // 2^64 as f64; anything at or above does not fit a u64
    const LIMIT: f64 = 18_446_744_073_709_551_616.0;
    if frequency < 0.0 || frequency >= LIMIT || frequency % 1.0 != 0.0 {
        return None;
    }
    Some(frequency as u64)
}
