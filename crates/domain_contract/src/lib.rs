//! Recurring Contract Domain
//!
//! This crate implements the payment-schedule logic for subcontracts and
//! vendor contracts in the expense approval system: occurrence counting,
//! total-amount calculation, concrete schedule generation with day-of-month
//! clamping, as-of payment status, and deletion proration.
//!
//! The domain is pure computation: callers fetch contract rows, construct a
//! [`RecurringContract`], and serialize the derived schedules and splits
//! back out. Nothing here performs I/O or holds state between calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_contract::{RecurringContract, PaymentFrequency, prorate_for_deletion};
//!
//! let contract = RecurringContract::recurring(start, end, PaymentFrequency::Monthly, 31, fee)?;
//! let schedule = contract.generate_schedule();
//! let split = prorate_for_deletion(&contract, today);
//! ```

pub mod contract;
pub mod error;
pub mod frequency;
pub mod proration;
pub mod schedule;

pub use contract::RecurringContract;
pub use error::ContractError;
pub use frequency::{ContractStatus, PaymentFrequency, PaymentType};
pub use proration::{prorate_for_deletion, proration_applies, ProrationResult};
pub use schedule::{PaymentOccurrence, ScheduleStatus};
