//! Proration Tests
//!
//! This module contains comprehensive tests for deletion proration:
//! - Splits at deletion dates before, inside, and after the schedule
//! - Agreement with live payment status
//! - The paid + remaining == total accounting law
//!
//! # Test Organization
//!
//! - `split_tests` - concrete splits at deletion dates
//! - `trigger_tests` - the recurring-and-active trigger condition
//! - `properties` - property-based laws

use chrono::NaiveDate;
use core_kernel::Money;
use domain_contract::{
    prorate_for_deletion, proration_applies, ContractStatus, PaymentFrequency, RecurringContract,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn monthly_year_contract(yen: i64) -> RecurringContract {
    RecurringContract::recurring(
        date(2024, 1, 1),
        date(2024, 12, 31),
        PaymentFrequency::Monthly,
        1,
        Money::from_yen(yen),
    )
    .unwrap()
}

// ============================================================================
// SPLIT TESTS
// ============================================================================

mod split_tests {
    use super::*;

    /// Deleting before any payment cancels the full contract value
    #[test]
    fn test_deletion_before_schedule() {
        let result = prorate_for_deletion(&monthly_year_contract(100_000), date(2023, 6, 1));

        assert_eq!(result.paid_amount, Money::zero());
        assert_eq!(result.remaining_amount, Money::from_yen(1_200_000));
    }

    /// Deleting after the final payment cancels nothing
    #[test]
    fn test_deletion_after_schedule() {
        let result = prorate_for_deletion(&monthly_year_contract(100_000), date(2026, 1, 1));

        assert_eq!(result.paid_amount, Money::from_yen(1_200_000));
        assert_eq!(result.remaining_amount, Money::zero());
    }

    /// Mid-stream deletion reports incurred vs cancelled portions
    #[test]
    fn test_mid_stream_deletion() {
        // Three payments incurred, nine removed from the books.
        let result = prorate_for_deletion(&monthly_year_contract(100_000), date(2024, 3, 20));

        assert_eq!(result.paid_amount, Money::from_yen(300_000));
        assert_eq!(result.remaining_amount, Money::from_yen(900_000));
    }

    /// A deletion date exactly on an occurrence counts that occurrence as paid
    #[test]
    fn test_deletion_on_occurrence_date() {
        let result = prorate_for_deletion(&monthly_year_contract(100_000), date(2024, 5, 1));

        assert_eq!(result.paid_amount, Money::from_yen(500_000));
        assert_eq!(result.remaining_amount, Money::from_yen(700_000));
    }

    /// Proration at "today" agrees with live status at "today"
    #[test]
    fn test_symmetry_with_payment_status() {
        let contract = RecurringContract::recurring(
            date(2023, 4, 1),
            date(2026, 3, 31),
            PaymentFrequency::Quarterly,
            25,
            Money::from_yen(450_000),
        )
        .unwrap();

        for offset in [0, 30, 100, 400, 900, 1200] {
            let today = date(2023, 4, 1) + chrono::Duration::days(offset);
            let status = contract.payment_status(today);
            let split = prorate_for_deletion(&contract, today);

            assert_eq!(split.paid_amount, status.paid_amount);
            assert_eq!(split.remaining_amount, status.remaining_amount);
        }
    }
}

// ============================================================================
// TRIGGER TESTS
// ============================================================================

mod trigger_tests {
    use super::*;

    /// Only active recurring contracts prorate on deletion
    #[test]
    fn test_active_recurring_triggers() {
        assert!(proration_applies(&monthly_year_contract(100_000)));
    }

    /// Non-active statuses do not trigger proration
    #[test]
    fn test_non_active_statuses_do_not_trigger() {
        for status in [
            ContractStatus::PendingPayment,
            ContractStatus::Completed,
            ContractStatus::Cancelled,
        ] {
            let contract = monthly_year_contract(100_000).with_status(status);
            assert!(!proration_applies(&contract), "status {status:?}");
        }
    }

    /// One-time contracts never trigger proration
    #[test]
    fn test_one_time_does_not_trigger() {
        let contract = RecurringContract::one_time(
            date(2024, 1, 1),
            date(2024, 12, 31),
            Money::from_yen(500_000),
        )
        .unwrap();
        assert!(!proration_applies(&contract));
    }
}

// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn frequency_strategy() -> impl Strategy<Value = PaymentFrequency> {
        prop_oneof![
            Just(PaymentFrequency::Monthly),
            Just(PaymentFrequency::Quarterly),
            Just(PaymentFrequency::SemiAnnually),
            Just(PaymentFrequency::Annually),
        ]
    }

    proptest! {
        /// paid + remaining always equals the scheduled total
        #[test]
        fn split_conserves_scheduled_total(
            start_offset in 0u32..3650u32,
            length_days in 0u32..1500u32,
            deletion_offset in -200i64..2000i64,
            frequency in frequency_strategy(),
            pay_day in 1u32..=31u32,
            yen in 0i64..5_000_000i64
        ) {
            let epoch = date(2018, 1, 1);
            let start = epoch + chrono::Duration::days(start_offset as i64);
            let end = start + chrono::Duration::days(length_days as i64);
            let contract = RecurringContract::recurring(
                start, end, frequency, pay_day, Money::from_yen(yen),
            ).unwrap();

            let schedule = contract.generate_schedule();
            let scheduled_total: Money = schedule.iter().map(|o| o.amount).sum();

            let deletion = start + chrono::Duration::days(deletion_offset);
            let split = prorate_for_deletion(&contract, deletion);

            prop_assert_eq!(split.paid_amount + split.remaining_amount, scheduled_total);
            prop_assert_eq!(split.total(), scheduled_total);
        }

        /// Later deletion dates never shrink the paid portion
        #[test]
        fn paid_portion_monotonic_in_deletion_date(
            length_days in 0u32..1500u32,
            offset_a in 0i64..2000i64,
            offset_b in 0i64..2000i64,
            frequency in frequency_strategy(),
            yen in 0i64..5_000_000i64
        ) {
            let start = date(2022, 4, 1);
            let end = start + chrono::Duration::days(length_days as i64);
            let contract = RecurringContract::recurring(
                start, end, frequency, 15, Money::from_yen(yen),
            ).unwrap();

            let (early, late) = if offset_a <= offset_b {
                (offset_a, offset_b)
            } else {
                (offset_b, offset_a)
            };
            let first = prorate_for_deletion(&contract, start + chrono::Duration::days(early));
            let second = prorate_for_deletion(&contract, start + chrono::Duration::days(late));

            prop_assert!(second.paid_amount >= first.paid_amount);
            prop_assert!(second.remaining_amount <= first.remaining_amount);
        }
    }
}
