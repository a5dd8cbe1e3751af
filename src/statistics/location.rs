//! Order-based statistics: weighted median and mode

use crate::dataset::Dataset;
use crate::error::{Result, StatsError};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Result of a mode computation
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mode {
    /// Values sharing the highest frequency, ascending
    Values(Vec<f64>),
    /// Every distinct value is equally frequent
    NoMode,
}

impl Mode {
    /// Modal values, or an empty slice for [`Mode::NoMode`]
    pub fn values(&self) -> &[f64] {
        match self {
            Mode::Values(values) => values,
            Mode::NoMode => &[],
        }
    }

    pub fn is_no_mode(&self) -> bool {
        matches!(self, Mode::NoMode)
    }
}

/// Frequency-weighted median
///
/// Walks the values in ascending order accumulating frequency and stops at the
/// first value whose cumulative frequency reaches N/2. When N is even and the
/// cumulative frequency lands exactly on N/2, the median is the midpoint of
/// that value and the next one (or the value itself if it is the last).
///
/// With every frequency equal to 1 this is the ordinary median of a sorted list.
///
/// # Example
///
/// ```
/// use freqstats::dataset::Dataset;
/// use freqstats::statistics::median;
///
/// let ds = Dataset::from_pairs(&[(1.0, 1), (2.0, 1)]).unwrap();
/// assert_eq!(median(&ds).unwrap(), 1.5);
/// ```
pub fn median(dataset: &Dataset) -> Result<f64> {
    dataset.ensure_non_empty()?;

    let n = dataset.total_frequency();
    let entries = dataset.entries();
    let mut cumulative = 0u64;

    for (i, entry) in entries.iter().enumerate() {
        cumulative += entry.frequency();
        // cumulative >= N/2 without leaving integer arithmetic
        if cumulative.saturating_mul(2) < n {
            continue;
        }

        let on_boundary = n % 2 == 0 && cumulative == n / 2;
        log::trace!(
            "median split at value {} (cumulative {}, n {}, boundary {})",
            entry.value(),
            cumulative,
            n,
            on_boundary
        );

        if on_boundary {
            if let Some(next) = entries.get(i + 1) {
                return Ok((entry.value() + next.value()) / 2.0);
            }
        }
        return Ok(entry.value());
    }

    // The last cumulative frequency is N, so the loop always returns
    dataset
        .max()
        .ok_or_else(|| StatsError::invalid_dataset("dataset is empty"))
}

/// Values with the highest frequency
///
/// Returns [`Mode::NoMode`] when the number of modal values equals the number
/// of distinct values, including a dataset with a single distinct value.
pub fn mode(dataset: &Dataset) -> Result<Mode> {
    dataset.ensure_non_empty()?;

    let max = dataset.frequencies().max().unwrap_or(0);
    let modal: Vec<f64> = dataset
        .entries()
        .iter()
        .filter(|e| e.frequency() == max)
        .map(|e| e.value())
        .collect();

    if modal.len() == dataset.distinct_count() {
        Ok(Mode::NoMode)
    } else {
        Ok(Mode::Values(modal))
    }
}
