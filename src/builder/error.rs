//! Build errors for the manager builder.

use thiserror::Error;

/// Errors that can occur when building a manager.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("State computer not specified. Call .computer(computer) before .build()")]
    MissingStateComputer,

    #[error("History limit must be at least 1")]
    ZeroHistoryLimit,

    #[error("History limit {limit} exceeds the maximum of {max}")]
    HistoryLimitTooLarge { limit: usize, max: usize },
}
