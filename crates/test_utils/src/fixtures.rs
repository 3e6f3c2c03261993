//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the expense
//! approval system. These fixtures are designed to be consistent and
//! predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::{CategoryId, DepartmentId, EventId, Money, ProjectId};
use domain_budget::BudgetLine;
use uuid::Uuid;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Typical monthly subcontract fee
    pub fn monthly_fee() -> Money {
        Money::from_yen(100_000)
    }

    /// Typical one-time contract amount
    pub fn one_time_amount() -> Money {
        Money::from_yen(500_000)
    }

    /// Standard department budget
    pub fn department_budget() -> Money {
        Money::from_yen(1_000_000)
    }

    /// Small expense (taxi fare, supplies)
    pub fn small_expense() -> Money {
        Money::from_yen(3_200)
    }

    /// Zero amount
    pub fn zero() -> Money {
        Money::zero()
    }
}

/// Fixture for calendar dates
pub struct DateFixtures;

impl DateFixtures {
    /// Start of Japanese fiscal year 2024
    pub fn fiscal_year_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
    }

    /// End of Japanese fiscal year 2024
    pub fn fiscal_year_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()
    }

    /// Start of calendar year 2024
    pub fn calendar_year_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// End of calendar year 2024
    pub fn calendar_year_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    /// A mid-year reference date
    pub fn mid_year() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }
}

/// Fixture for identifiers
pub struct IdFixtures;

impl IdFixtures {
    pub fn department_id() -> DepartmentId {
        DepartmentId::new_v7()
    }

    pub fn project_id() -> ProjectId {
        ProjectId::new_v7()
    }

    pub fn event_id() -> EventId {
        EventId::new_v7()
    }

    pub fn category_id() -> CategoryId {
        CategoryId::new_v7()
    }
}

/// Fixture for budget lines
pub struct BudgetFixtures;

impl BudgetFixtures {
    /// A department line with the standard budget
    pub fn department_line(id: DepartmentId, name: &str) -> BudgetLine {
        BudgetLine::new(Uuid::from(id), name, MoneyFixtures::department_budget())
    }

    /// A project line with a custom budget
    pub fn project_line(id: ProjectId, name: &str, budget: Money) -> BudgetLine {
        BudgetLine::new(Uuid::from(id), name, budget)
    }
}
