//! Error types shared by the engine and its collaborators

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Error raised by the statistics engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    /// Dataset is empty, or an entry violates the frequency table invariants
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
    /// Requested metric name is not one of the known metrics
    #[error("invalid metric: {0:?}")]
    InvalidMetric(String),
    /// A metric selection was given with no names in it
    #[error("no metrics requested")]
    NoMetricsRequested,
    /// The statistic has no value for this dataset (e.g. skewness with zero spread)
    #[error("{metric} is undefined: {reason}")]
    UndefinedStatistic {
        metric: &'static str,
        reason: &'static str,
    },
}

impl StatsError {
    pub(crate) fn invalid_dataset(reason: impl Into<String>) -> Self {
        StatsError::InvalidDataset(reason.into())
    }

    /// Whether this error only marks an undefined statistic rather than bad input
    pub fn is_undefined(&self) -> bool {
        matches!(self, StatsError::UndefinedStatistic { .. })
    }
}

/// Result alias used throughout the crate
pub type Result<T> = core::result::Result<T, StatsError>;
