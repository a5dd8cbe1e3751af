//! Validated (value, frequency) tables
//!
//! A [`Dataset`] keeps its entries in ascending value order regardless of the
//! order they were supplied in, so summations always run in the same order and
//! results are reproducible bit for bit.

use crate::error::{Result, StatsError};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// One distinct value and its multiplicity
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FrequencyEntry {
    value: f64,
    frequency: u64,
}

impl FrequencyEntry {
    /// Create an entry
    ///
    /// Fails when the frequency is zero or the value is NaN or infinite.
    pub fn new(value: f64, frequency: u64) -> Result<Self> {
        if !value.is_finite() {
            return Err(StatsError::invalid_dataset("values must be finite"));
        }
        if frequency == 0 {
            return Err(StatsError::invalid_dataset("frequency must be at least 1"));
        }
        Ok(Self { value, frequency })
    }

    /// The observed value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// How many times the value was observed
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// `value * frequency`
    pub(crate) fn weighted_value(&self) -> f64 {
        self.value * self.frequency as f64
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FrequencyEntry {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct EntryData {
            value: f64,
            frequency: u64,
        }

        let data = EntryData::deserialize(deserializer)?;
        FrequencyEntry::new(data.value, data.frequency).map_err(serde::de::Error::custom)
    }
}

/// A frequency table of distinct values
///
/// Invariants enforced at construction:
/// - every frequency is at least 1
/// - values are finite and unique
/// - entries are sorted by ascending value
///
/// An empty dataset can be built, but every statistic rejects it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    entries: Vec<FrequencyEntry>,
    total: u64,
}

impl Dataset {
    /// Build a dataset from entries in any order
    ///
    /// Fails if two entries share a value.
    pub fn new(entries: impl IntoIterator<Item = FrequencyEntry>) -> Result<Self> {
        let mut entries: Vec<FrequencyEntry> = entries.into_iter().collect();
        entries.sort_by(|a, b| a.value.total_cmp(&b.value));

        if entries.windows(2).any(|w| w[0].value == w[1].value) {
            return Err(StatsError::invalid_dataset("duplicate value in frequency table"));
        }

        let total = entries
            .iter()
            .try_fold(0u64, |acc, e| acc.checked_add(e.frequency))
            .ok_or_else(|| StatsError::invalid_dataset("total frequency overflows u64"))?;

        Ok(Self { entries, total })
    }

    /// Build a dataset from `(value, frequency)` pairs
    pub fn from_pairs(pairs: &[(f64, u64)]) -> Result<Self> {
        let entries = pairs
            .iter()
            .map(|&(value, frequency)| FrequencyEntry::new(value, frequency))
            .collect::<Result<Vec<_>>>()?;
        Self::new(entries)
    }

    /// Group raw observations into a frequency table
    ///
    /// Each distinct observation becomes one entry whose frequency is its
    /// number of occurrences. `-0.0` and `0.0` are the same value.
    pub fn from_observations(observations: &[f64]) -> Result<Self> {
        if observations.iter().any(|v| !v.is_finite()) {
            return Err(StatsError::invalid_dataset("values must be finite"));
        }

        let mut sorted = observations.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let mut entries: Vec<FrequencyEntry> = Vec::new();
        for value in sorted {
            match entries.last_mut() {
                Some(last) if last.value == value => last.frequency += 1,
                _ => entries.push(FrequencyEntry {
                    value,
                    frequency: 1,
                }),
            }
        }

        Ok(Self {
            entries,
            total: observations.len() as u64,
        })
    }

    /// Entries in ascending value order
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// Total sample count N (sum of all frequencies)
    pub fn total_frequency(&self) -> u64 {
        self.total
    }

    /// Number of distinct values
    pub fn distinct_count(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dataset has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct values, ascending
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.value)
    }

    /// Frequencies, in the same order as [`values`](Self::values)
    pub fn frequencies(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.iter().map(|e| e.frequency)
    }

    /// Smallest value
    pub fn min(&self) -> Option<f64> {
        self.entries.first().map(|e| e.value)
    }

    /// Largest value
    pub fn max(&self) -> Option<f64> {
        self.entries.last().map(|e| e.value)
    }

    /// Error unless the dataset can be fed to a statistic
    pub(crate) fn ensure_non_empty(&self) -> Result<()> {
        if self.entries.is_empty() || self.total == 0 {
            return Err(StatsError::invalid_dataset("dataset is empty"));
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Dataset {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.entries.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Dataset {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<FrequencyEntry>::deserialize(deserializer)?;
        Dataset::new(entries).map_err(serde::de::Error::custom)
    }
}
