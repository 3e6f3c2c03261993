//! Contract domain errors

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in the contract domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContractError {
    /// Frequency string is not one of the four supported values
    #[error("Invalid payment frequency: {0}")]
    InvalidFrequency(String),

    /// Contract start date falls after its end date
    #[error("Invalid date range: start {start} must not be after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// Payment day outside 1-31
    #[error("Invalid payment day: {0} (must be 1-31)")]
    InvalidPaymentDay(u32),

    /// Negative or otherwise malformed amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl From<core_kernel::TemporalError> for ContractError {
    fn from(err: core_kernel::TemporalError) -> Self {
        match err {
            core_kernel::TemporalError::InvalidDateRange { start, end } => {
                ContractError::InvalidDateRange { start, end }
            }
        }
    }
}
