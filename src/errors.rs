use std::result::Result as StdResult;

use thiserror::Error;

/// Error type that captures cashflow computation failures.
#[derive(Debug, Error)]
pub enum CashflowError {
    /// The record set is non-empty but carries no parseable date anywhere,
    /// so no reference point exists for period windowing.
    #[error("No dated records available: {0}")]
    UndatedData(String),
    #[error("Invalid period selection: {0}")]
    InvalidPeriod(String),
    #[error("Invalid date window: {0}")]
    InvalidWindow(String),
}

pub type Result<T> = StdResult<T, CashflowError>;
