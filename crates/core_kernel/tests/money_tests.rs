//! Comprehensive unit tests for the Money module
//!
//! Tests cover whole-yen Money arithmetic, saturation behavior,
//! and Percentage ratio calculations.

use core_kernel::money::MoneyError;
use core_kernel::{Money, Percentage};
use rust_decimal_macros::dec;

mod money {
    use super::*;

    mod construction {
        use super::*;

        #[test]
        fn test_from_yen_preserves_integer_amount() {
            let m = Money::from_yen(1_200_000);
            assert_eq!(m.as_yen(), 1_200_000);
        }

        #[test]
        fn test_new_rounds_to_whole_yen() {
            assert_eq!(Money::new(dec!(99.4)).as_yen(), 99);
            assert_eq!(Money::new(dec!(99.5)).as_yen(), 100);
        }

        #[test]
        fn test_zero_is_default() {
            assert_eq!(Money::default(), Money::zero());
            assert!(Money::zero().is_zero());
        }

        #[test]
        fn test_sign_predicates() {
            assert!(Money::from_yen(1).is_positive());
            assert!(Money::from_yen(-1).is_negative());
            assert!(!Money::zero().is_positive());
            assert!(!Money::zero().is_negative());
        }
    }

    mod arithmetic {
        use super::*;

        #[test]
        fn test_checked_ops_agree_with_operators() {
            let a = Money::from_yen(700_000);
            let b = Money::from_yen(300_000);

            assert_eq!(a.checked_add(&b).unwrap(), a + b);
            assert_eq!(a.checked_sub(&b).unwrap(), a - b);
        }

        #[test]
        fn test_subtraction_can_go_negative() {
            // Budget remaining is allowed to be negative (overspend).
            let remaining = Money::from_yen(1_000_000) - Money::from_yen(1_200_000);
            assert_eq!(remaining.as_yen(), -200_000);
            assert!(remaining.is_negative());
        }

        #[test]
        fn test_saturating_sub_floors_at_zero() {
            let paid = Money::from_yen(1_200_000);
            let total = Money::from_yen(1_000_000);
            assert_eq!(total.saturating_sub(&paid), Money::zero());
        }

        #[test]
        fn test_times_zero_occurrences() {
            assert_eq!(Money::from_yen(100_000).times(0), Money::zero());
        }

        #[test]
        fn test_sum_over_iterator() {
            let total: Money = (1..=3).map(|n| Money::from_yen(n * 10_000)).sum();
            assert_eq!(total.as_yen(), 60_000);
        }

        #[test]
        fn test_divide_by_zero_fails() {
            let result = Money::from_yen(100).divide(dec!(0));
            assert_eq!(result, Err(MoneyError::DivisionByZero));
        }
    }
}

mod percentage {
    use super::*;

    #[test]
    fn test_ratio_of_computes_percentage_points() {
        let pct = Percentage::ratio_of(&Money::from_yen(750_000), &Money::from_yen(1_000_000));
        assert_eq!(pct.points(), dec!(75));
    }

    #[test]
    fn test_ratio_can_exceed_one_hundred() {
        let pct = Percentage::ratio_of(&Money::from_yen(1_500_000), &Money::from_yen(1_000_000));
        assert_eq!(pct.points(), dec!(150));
    }

    #[test]
    fn test_zero_budget_yields_zero_percent() {
        let pct = Percentage::ratio_of(&Money::from_yen(500_000), &Money::zero());
        assert_eq!(pct, Percentage::zero());
    }

    #[test]
    fn test_negative_budget_yields_zero_percent() {
        let pct = Percentage::ratio_of(&Money::from_yen(500_000), &Money::from_yen(-1));
        assert_eq!(pct, Percentage::zero());
    }

    #[test]
    fn test_display_rounds_to_one_decimal() {
        let pct = Percentage::ratio_of(&Money::from_yen(1), &Money::from_yen(3));
        assert_eq!(pct.to_string(), "33.3%");
    }
}
