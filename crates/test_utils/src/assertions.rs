//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_contract::{PaymentOccurrence, ProrationResult};

/// Asserts that two Money values are equal with a descriptive message
pub fn assert_money_eq(actual: Money, expected: Money, context: &str) {
    assert_eq!(
        actual, expected,
        "{context}: actual={actual}, expected={expected}"
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: Money) {
    assert!(money.is_zero(), "Expected zero money, got {money}");
}

/// Asserts that a schedule is structurally valid
///
/// Checks that sequence numbers start at 1 and are contiguous, dates
/// strictly ascend, and every occurrence carries the expected amount.
pub fn assert_schedule_valid(schedule: &[PaymentOccurrence], periodic_amount: Money) {
    for (i, occurrence) in schedule.iter().enumerate() {
        assert_eq!(
            occurrence.sequence_number,
            i as u32 + 1,
            "sequence numbers must be contiguous from 1, got {} at index {i}",
            occurrence.sequence_number
        );
        assert_eq!(
            occurrence.amount, periodic_amount,
            "occurrence {} has amount {}, expected {periodic_amount}",
            occurrence.sequence_number, occurrence.amount
        );
    }
    for pair in schedule.windows(2) {
        assert!(
            pair[0].date < pair[1].date,
            "schedule dates must strictly ascend: {} then {}",
            pair[0].date,
            pair[1].date
        );
    }
}

/// Asserts the proration accounting law: paid + remaining == total
pub fn assert_proration_conserves(result: &ProrationResult, scheduled_total: Money) {
    assert_eq!(
        result.paid_amount + result.remaining_amount,
        scheduled_total,
        "proration must conserve the scheduled total: paid={} remaining={} total={}",
        result.paid_amount,
        result.remaining_amount,
        scheduled_total
    );
}
