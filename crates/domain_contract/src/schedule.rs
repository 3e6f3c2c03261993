//! Payment schedule generation and as-of status
//!
//! A schedule is a finite list of concrete payment dates derived from a
//! contract. Dates are produced by stepping a year/month cursor by the
//! frequency's month count and re-clamping the nominal payment day each
//! step, so a day-31 contract lands on Jan 31, Feb 28/29, Mar 31, and so
//! on, never on a nonexistent date.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{clamped_date, shift_months, Money};

use crate::contract::RecurringContract;
use crate::frequency::PaymentType;

/// One scheduled payment within a contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOccurrence {
    /// Scheduled payment date
    pub date: NaiveDate,
    /// Amount due on this date
    pub amount: Money,
    /// 1-based position in the schedule
    pub sequence_number: u32,
    /// Human-readable label for statements
    pub label: String,
}

impl RecurringContract {
    /// Generates the concrete payment schedule for this contract
    ///
    /// One-time contracts yield a single occurrence on the contract start
    /// date. Recurring contracts yield one occurrence per period boundary
    /// inside the contract range; the schedule is empty when day clamping
    /// pushes the first candidate past the end date.
    pub fn generate_schedule(&self) -> Vec<PaymentOccurrence> {
        let schedule = match self.payment_type {
            PaymentType::OneTime => vec![PaymentOccurrence {
                date: self.period.start,
                amount: self.periodic_amount,
                sequence_number: 1,
                label: occurrence_label(1),
            }],
            PaymentType::Recurring => self.recurring_schedule(),
        };

        debug!(
            contract = %self.id,
            occurrences = schedule.len(),
            "generated payment schedule"
        );
        schedule
    }

    fn recurring_schedule(&self) -> Vec<PaymentOccurrence> {
        let step = self.frequency.months_per_period();
        let start = self.period.start;

        let mut year = start.year();
        let mut month = start.month();
        let mut current = clamped_date(year, month, self.payment_day);

        // A payment day earlier in the month than the contract start belongs
        // to the next period.
        if current < start {
            (year, month) = shift_months(year, month, step);
            current = clamped_date(year, month, self.payment_day);
        }

        let mut schedule = Vec::new();
        let mut sequence = 1u32;
        while current <= self.period.end {
            schedule.push(PaymentOccurrence {
                date: current,
                amount: self.periodic_amount,
                sequence_number: sequence,
                label: occurrence_label(sequence),
            });
            sequence += 1;
            (year, month) = shift_months(year, month, step);
            current = clamped_date(year, month, self.payment_day);
        }

        schedule
    }

    /// Payment status of this contract as of the given date
    ///
    /// Convenience wrapper that regenerates the schedule and folds it.
    pub fn payment_status(&self, as_of: NaiveDate) -> ScheduleStatus {
        ScheduleStatus::as_of(&self.generate_schedule(), as_of)
    }
}

/// Snapshot of schedule progress at a reference date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleStatus {
    /// Occurrences on or before the reference date
    pub completed_payments: u32,
    /// Total occurrences in the schedule
    pub total_payments: u32,
    /// Earliest occurrence after the reference date, if any
    pub next_payment_date: Option<NaiveDate>,
    /// Sum of completed occurrence amounts
    pub paid_amount: Money,
    /// Scheduled total minus the paid amount
    pub remaining_amount: Money,
}

impl ScheduleStatus {
    /// Partitions a schedule at the reference date
    ///
    /// Occurrences with `date <= as_of` count as completed; the split is a
    /// pure fold with no side effects, so the same schedule and date always
    /// produce the same status.
    pub fn as_of(schedule: &[PaymentOccurrence], as_of: NaiveDate) -> Self {
        let total: Money = schedule.iter().map(|o| o.amount).sum();

        let mut completed = 0u32;
        let mut paid = Money::zero();
        let mut next_payment_date = None;
        for occurrence in schedule {
            if occurrence.date <= as_of {
                completed += 1;
                paid = paid + occurrence.amount;
            } else {
                next_payment_date = Some(occurrence.date);
                break;
            }
        }

        Self {
            completed_payments: completed,
            total_payments: schedule.len() as u32,
            next_payment_date,
            paid_amount: paid,
            remaining_amount: total.saturating_sub(&paid),
        }
    }
}

fn occurrence_label(sequence: u32) -> String {
    format!("Payment #{sequence}")
}
