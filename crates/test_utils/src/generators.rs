//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{Duration, NaiveDate};
use core_kernel::Money;
use domain_budget::{ApprovalStatus, FinancialRecord};
use domain_contract::{PaymentFrequency, RecurringContract};
use proptest::prelude::*;

/// Strategy for generating valid payment frequencies
pub fn frequency_strategy() -> impl Strategy<Value = PaymentFrequency> {
    prop_oneof![
        Just(PaymentFrequency::Monthly),
        Just(PaymentFrequency::Quarterly),
        Just(PaymentFrequency::SemiAnnually),
        Just(PaymentFrequency::Annually),
    ]
}

/// Strategy for generating non-negative yen amounts
pub fn yen_amount_strategy() -> impl Strategy<Value = Money> {
    (0i64..10_000_000i64).prop_map(Money::from_yen)
}

/// Strategy for generating positive yen amounts
pub fn positive_yen_strategy() -> impl Strategy<Value = Money> {
    (1i64..10_000_000i64).prop_map(Money::from_yen)
}

/// Strategy for generating dates between 2015 and 2035
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..7300i64).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2015, 1, 1).unwrap() + Duration::days(offset)
    })
}

/// Strategy for generating an ordered (start, end) date pair
pub fn date_range_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (date_strategy(), 0i64..1500i64)
        .prop_map(|(start, extra)| (start, start + Duration::days(extra)))
}

/// Strategy for generating nominal payment days (1-31)
pub fn payment_day_strategy() -> impl Strategy<Value = u32> {
    1u32..=31u32
}

/// Strategy for generating valid recurring contracts
pub fn contract_strategy() -> impl Strategy<Value = RecurringContract> {
    (
        date_range_strategy(),
        frequency_strategy(),
        payment_day_strategy(),
        yen_amount_strategy(),
    )
        .prop_map(|((start, end), frequency, day, amount)| {
            RecurringContract::recurring(start, end, frequency, day, amount)
                .expect("generated contract must be valid")
        })
}

/// Strategy for generating approval statuses
pub fn approval_status_strategy() -> impl Strategy<Value = ApprovalStatus> {
    prop_oneof![
        Just(ApprovalStatus::Pending),
        Just(ApprovalStatus::Approved),
        Just(ApprovalStatus::Rejected),
        Just(ApprovalStatus::Settled),
    ]
}

/// Strategy for generating expense records without dimension links
pub fn expense_record_strategy() -> impl Strategy<Value = FinancialRecord> {
    (yen_amount_strategy(), approval_status_strategy()).prop_map(|(amount, status)| {
        FinancialRecord::expense(amount)
            .expect("generated expense must be valid")
            .with_status(status)
    })
}
