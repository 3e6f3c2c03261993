//! Core Kernel - Foundational types and utilities for the expense approval system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise whole-yen arithmetic
//! - Calendar-date arithmetic for payment scheduling
//! - Common identifiers and value objects

pub mod error;
pub mod identifiers;
pub mod money;
pub mod temporal;

pub use error::CoreError;
pub use identifiers::{
    CategoryId, ContractId, DepartmentId, EventId, ExpenseId, InvoiceId, ProjectId, SubcontractId,
};
pub use money::{Money, MoneyError, Percentage};
pub use temporal::{clamped_date, last_day_of_month, shift_months, DateRange, TemporalError};
