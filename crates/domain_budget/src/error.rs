//! Budget domain errors

use thiserror::Error;

/// Errors that can occur in the budget domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BudgetError {
    /// Negative or otherwise malformed amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
