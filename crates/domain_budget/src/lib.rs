//! Budget Domain - Aggregation and Health Reporting
//!
//! This crate turns approved financial records (expenses, invoice payments,
//! subcontracts) into budget reports:
//!
//! - Records are normalized into one tagged shape regardless of source table
//! - Spend is aggregated per department, project, event, and category
//! - Each budget line is classified healthy / warning / danger by usage
//!
//! Recurring subcontracts follow commitment accounting: their full
//! committed value appears in reports immediately, not just the cash
//! disbursed to date.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_budget::{aggregate, summarize, Dimension, FinancialRecord};
//!
//! let totals = aggregate(&records, Dimension::Department);
//! let report = summarize(&department_lines, &records, Dimension::Department);
//! ```

pub mod aggregate;
pub mod error;
pub mod record;
pub mod summary;

pub use aggregate::{aggregate, Dimension};
pub use error::BudgetError;
pub use record::{ApprovalStatus, FinancialRecord, RecordKind};
pub use summary::{
    classify, summarize, BudgetHealth, BudgetLine, BudgetSummary, BudgetUsage, DANGER_THRESHOLD,
    WARNING_THRESHOLD,
};
