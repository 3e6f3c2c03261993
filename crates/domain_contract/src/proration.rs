//! Deletion proration
//!
//! Deleting an active recurring contract mid-life must not erase the spend
//! already incurred in past periods. Proration regenerates the contract's
//! schedule and splits it at the deletion date with the same inclusive rule
//! as the live payment status, so "as of today" and "as of deletion today"
//! always agree.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::Money;

use crate::contract::RecurringContract;
use crate::frequency::{ContractStatus, PaymentType};
use crate::schedule::ScheduleStatus;

/// Split of a contract's scheduled value at an early-termination date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProrationResult {
    /// Value of occurrences on or before the deletion date
    pub paid_amount: Money,
    /// Value of occurrences being cancelled
    pub remaining_amount: Money,
}

impl ProrationResult {
    /// Total scheduled value covered by this split
    pub fn total(&self) -> Money {
        self.paid_amount + self.remaining_amount
    }
}

/// Splits a contract's scheduled value at the deletion date
///
/// Occurrences up to and including the deletion date are already incurred
/// (`paid_amount`); later occurrences are being cancelled
/// (`remaining_amount`). The two always sum to the scheduled total.
pub fn prorate_for_deletion(
    contract: &RecurringContract,
    deletion_date: NaiveDate,
) -> ProrationResult {
    let status = ScheduleStatus::as_of(&contract.generate_schedule(), deletion_date);
    let result = ProrationResult {
        paid_amount: status.paid_amount,
        remaining_amount: status.remaining_amount,
    };

    debug!(
        contract = %contract.id,
        %deletion_date,
        paid = %result.paid_amount,
        cancelled = %result.remaining_amount,
        "prorated contract for deletion"
    );
    result
}

/// Whether deletion of this contract triggers proration
///
/// Only live recurring contracts carry partially-incurred value; one-time
/// and non-active contracts are removed at face value.
pub fn proration_applies(contract: &RecurringContract) -> bool {
    contract.payment_type == PaymentType::Recurring && contract.status == ContractStatus::Active
}
