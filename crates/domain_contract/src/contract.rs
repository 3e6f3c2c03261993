//! Recurring contract aggregate
//!
//! A contract describes a committed spend over an inclusive date range:
//! either a single payment or a recurring series at a fixed frequency.
//! Payment-count and total-amount arithmetic lives here; concrete schedule
//! generation is in the `schedule` module.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use core_kernel::{ContractId, DateRange, Money};

use crate::error::ContractError;
use crate::frequency::{ContractStatus, PaymentFrequency, PaymentType};

/// A subcontract or vendor contract with committed payments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringContract {
    /// Unique identifier
    pub id: ContractId,
    /// Display name (vendor or engagement)
    pub name: String,
    /// Inclusive period over which payments occur
    pub period: DateRange,
    /// One-time or recurring
    pub payment_type: PaymentType,
    /// Payment cadence (ignored for one-time contracts)
    pub frequency: PaymentFrequency,
    /// Nominal day-of-month a payment falls on (1-31); clamped to the
    /// month's last real day when the month is shorter
    pub payment_day: u32,
    /// Amount charged per occurrence (for one-time contracts, the total)
    pub periodic_amount: Money,
    /// Lifecycle status
    pub status: ContractStatus,
}

impl RecurringContract {
    /// Creates a recurring contract
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateRange` for reversed dates, `InvalidPaymentDay`
    /// for a day outside 1-31, and `InvalidAmount` for a negative amount.
    pub fn recurring(
        start: NaiveDate,
        end: NaiveDate,
        frequency: PaymentFrequency,
        payment_day: u32,
        periodic_amount: Money,
    ) -> Result<Self, ContractError> {
        let period = DateRange::new(start, end)?;
        if !(1..=31).contains(&payment_day) {
            return Err(ContractError::InvalidPaymentDay(payment_day));
        }
        if periodic_amount.is_negative() {
            return Err(ContractError::InvalidAmount(format!(
                "periodic amount must not be negative, got {periodic_amount}"
            )));
        }

        Ok(Self {
            id: ContractId::new_v7(),
            name: String::new(),
            period,
            payment_type: PaymentType::Recurring,
            frequency,
            payment_day,
            periodic_amount,
            status: ContractStatus::Active,
        })
    }

    /// Creates a one-time contract paying its full amount once
    pub fn one_time(
        start: NaiveDate,
        end: NaiveDate,
        amount: Money,
    ) -> Result<Self, ContractError> {
        let period = DateRange::new(start, end)?;
        if amount.is_negative() {
            return Err(ContractError::InvalidAmount(format!(
                "contract amount must not be negative, got {amount}"
            )));
        }

        Ok(Self {
            id: ContractId::new_v7(),
            name: String::new(),
            period,
            payment_type: PaymentType::OneTime,
            frequency: PaymentFrequency::Monthly,
            payment_day: start.day(),
            periodic_amount: amount,
            status: ContractStatus::Active,
        })
    }

    /// Sets the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the lifecycle status
    pub fn with_status(mut self, status: ContractStatus) -> Self {
        self.status = status;
        self
    }

    /// Number of scheduled occurrences in the contract period
    ///
    /// Counting is calendar-month based rather than elapsed-day based: a
    /// range touching January, February, and March is three monthly
    /// payments even if it starts mid-January. Quarterly and semi-annual
    /// counts use ceiling division over the month span, annual counts use
    /// the inclusive year span.
    pub fn payment_count(&self) -> u32 {
        match self.payment_type {
            PaymentType::OneTime => 1,
            PaymentType::Recurring => {
                let span = self.period.month_span();
                match self.frequency {
                    PaymentFrequency::Monthly => span,
                    PaymentFrequency::Quarterly => span.div_ceil(3),
                    PaymentFrequency::SemiAnnually => span.div_ceil(6),
                    PaymentFrequency::Annually => self.period.year_span(),
                }
            }
        }
    }

    /// Total committed value: periodic amount times occurrence count
    pub fn total_amount(&self) -> Money {
        self.periodic_amount.times(self.payment_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_recurring_contract_validation() {
        let reversed = RecurringContract::recurring(
            date(2024, 12, 1),
            date(2024, 1, 1),
            PaymentFrequency::Monthly,
            15,
            Money::from_yen(100_000),
        );
        assert!(matches!(
            reversed,
            Err(ContractError::InvalidDateRange { .. })
        ));

        let bad_day = RecurringContract::recurring(
            date(2024, 1, 1),
            date(2024, 12, 31),
            PaymentFrequency::Monthly,
            32,
            Money::from_yen(100_000),
        );
        assert_eq!(bad_day.unwrap_err(), ContractError::InvalidPaymentDay(32));

        let negative = RecurringContract::recurring(
            date(2024, 1, 1),
            date(2024, 12, 31),
            PaymentFrequency::Monthly,
            15,
            Money::from_yen(-1),
        );
        assert!(matches!(negative, Err(ContractError::InvalidAmount(_))));
    }

    #[test]
    fn test_monthly_count_over_full_year() {
        let contract = RecurringContract::recurring(
            date(2024, 1, 1),
            date(2024, 12, 31),
            PaymentFrequency::Monthly,
            1,
            Money::from_yen(100_000),
        )
        .unwrap();

        assert_eq!(contract.payment_count(), 12);
        assert_eq!(contract.total_amount(), Money::from_yen(1_200_000));
    }

    #[test]
    fn test_quarterly_count_uses_ceiling_division() {
        let contract = RecurringContract::recurring(
            date(2024, 1, 1),
            date(2024, 6, 30),
            PaymentFrequency::Quarterly,
            1,
            Money::from_yen(300_000),
        )
        .unwrap();

        assert_eq!(contract.payment_count(), 2);

        // A 7-month span rounds up to a third quarterly payment.
        let overhang = RecurringContract::recurring(
            date(2024, 1, 1),
            date(2024, 7, 31),
            PaymentFrequency::Quarterly,
            1,
            Money::from_yen(300_000),
        )
        .unwrap();
        assert_eq!(overhang.payment_count(), 3);
    }

    #[test]
    fn test_annual_count_uses_year_span() {
        let contract = RecurringContract::recurring(
            date(2023, 12, 1),
            date(2024, 1, 31),
            PaymentFrequency::Annually,
            1,
            Money::from_yen(1_000_000),
        )
        .unwrap();

        assert_eq!(contract.payment_count(), 2);
    }

    #[test]
    fn test_one_time_count_ignores_range_length() {
        let contract = RecurringContract::one_time(
            date(2024, 1, 1),
            date(2026, 12, 31),
            Money::from_yen(500_000),
        )
        .unwrap();

        assert_eq!(contract.payment_count(), 1);
        assert_eq!(contract.total_amount(), Money::from_yen(500_000));
    }
}
