//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//! All amounts in this system are denominated in Japanese yen, which has no
//! fractional sub-units: values are rounded to whole yen on construction.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount in whole yen
///
/// Money uses rust_decimal for precise arithmetic without floating-point
/// errors. Yen carries no decimal sub-units, so amounts are rounded to zero
/// decimal places on every construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new Money value, rounding to whole yen
    pub fn new(amount: Decimal) -> Self {
        Self(amount.round_dp(0))
    }

    /// Creates Money from an integer yen amount
    pub fn from_yen(yen: i64) -> Self {
        Self(Decimal::new(yen, 0))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Returns the amount as a decimal
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns the amount as integer yen
    pub fn as_yen(&self) -> i64 {
        use rust_decimal::prelude::ToPrimitive;
        self.0.to_i64().unwrap_or_default()
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Checked addition that returns an error on overflow
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Checked subtraction that returns an error on overflow
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.0
            .checked_sub(other.0)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Subtraction floored at zero
    ///
    /// Remaining-amount folds must never report a negative remainder even
    /// when completed payments exceed the nominal total.
    pub fn saturating_sub(&self, other: &Money) -> Money {
        let diff = self.0 - other.0;
        if diff.is_sign_negative() {
            Self::zero()
        } else {
            Self::new(diff)
        }
    }

    /// Multiplies by a scalar (e.g., for rate calculations)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.0 * factor)
    }

    /// Multiplies by an occurrence count
    pub fn times(&self, count: u32) -> Self {
        Self::new(self.0 * Decimal::from(count))
    }

    /// Divides by a scalar
    pub fn divide(&self, divisor: Decimal) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self::new(self.0 / divisor))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "¥{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// A percentage value (e.g., budget usage)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(Decimal);

impl Percentage {
    /// Creates a percentage from percentage points (e.g., 95.0 for 95%)
    pub fn new(points: Decimal) -> Self {
        Self(points)
    }

    /// Creates a zero percentage
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Computes `part / whole * 100`, yielding zero when the whole is
    /// non-positive
    pub fn ratio_of(part: &Money, whole: &Money) -> Self {
        if !whole.is_positive() {
            return Self::zero();
        }
        Self(part.amount() / whole.amount() * dec!(100))
    }

    /// Returns the percentage points as a decimal
    pub fn points(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.round_dp(1))
    }
}
